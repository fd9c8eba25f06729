//! Legal move enumeration and automated move selection.
//!
//! Enumeration only tries anchors that put some square of the piece on a
//! geometrically relevant cell:
//! - on a side's first move, one of the four board corners
//! - afterwards, an empty cell diagonal to one of the side's own cells
//!
//! Any legal placement must cover such a cell, so this finds the same set as
//! a full-board scan at a fraction of the cost.

use rand::Rng;
use rustc_hash::FxHashSet;
use tracing::trace;

use crate::board::{Board, Position, DIAGONAL_OFFSETS};
use crate::game::{GameState, Player};
use crate::legality::{can_place_on_board, is_first_move};
use crate::pieces::Piece;

/// A piece together with the anchor it would be placed at.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Move {
    pub piece: Piece,
    pub position: Position,
}

/// Cells that a legal placement of `piece` must cover at least one of.
fn target_cells(piece: &Piece, board: &Board) -> Vec<Position> {
    if is_first_move(board, piece.color) {
        return board.corners().to_vec();
    }

    let mut targets = Vec::new();
    let mut seen: FxHashSet<Position> = FxHashSet::default();
    for cell in board.cells_of(piece.color) {
        for diagonal in DIAGONAL_OFFSETS {
            let target = cell.offset(diagonal);
            if board.is_empty_cell(target) && seen.insert(target) {
                targets.push(target);
            }
        }
    }
    targets
}

/// Visits every distinct legal anchor of `piece`, stopping when `visit`
/// returns false.
fn for_each_valid_anchor(piece: &Piece, board: &Board, mut visit: impl FnMut(Position) -> bool) {
    let mut tried: FxHashSet<Position> = FxHashSet::default();

    for target in target_cells(piece, board) {
        for &(dx, dy) in piece.squares() {
            // anchor that lands square (dx, dy) on the target cell
            let anchor = target.offset((-dx, -dy));
            if !tried.insert(anchor) {
                continue;
            }
            if can_place_on_board(piece, anchor, board) && !visit(anchor) {
                return;
            }
        }
    }
}

/// All distinct legal anchors for `piece` in its current orientation.
pub fn valid_moves(piece: &Piece, state: &GameState) -> Vec<Position> {
    let mut positions = Vec::new();
    for_each_valid_anchor(piece, state.board(), |anchor| {
        positions.push(anchor);
        true
    });
    trace!(shape = ?piece.shape, count = positions.len(), "enumerated valid moves");
    positions
}

/// Returns true if `piece` has at least one legal anchor.
pub fn can_place_anywhere(piece: &Piece, state: &GameState) -> bool {
    let mut found = false;
    for_each_valid_anchor(piece, state.board(), |_| {
        found = true;
        false
    });
    found
}

/// Returns true if any remaining piece of `player` can be placed.
pub fn has_any_move(state: &GameState, player: Player) -> bool {
    state
        .pieces(player)
        .iter()
        .any(|piece| can_place_anywhere(piece, state))
}

/// Every legal `(piece, position)` pair for `player`'s remaining pieces.
pub fn legal_moves(state: &GameState, player: Player) -> Vec<Move> {
    state
        .pieces(player)
        .iter()
        .flat_map(|piece| {
            valid_moves(piece, state)
                .into_iter()
                .map(move |position| Move {
                    piece: *piece,
                    position,
                })
        })
        .collect()
}

/// Picks a uniformly random legal move for the side due to move.
///
/// Returns `None` iff that side has no legal move. The random source is
/// supplied by the caller so games can be replayed from a seed.
pub fn pick_automated_move<R: Rng>(state: &GameState, rng: &mut R) -> Option<Move> {
    if state.is_game_over() {
        return None;
    }
    let moves = legal_moves(state, state.current_player());
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.random_range(0..moves.len())])
}
