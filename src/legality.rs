//! Placement legality.
//!
//! A side's territory grows only through corner touches: a placement must
//! touch its own colour diagonally at least once and never edge to edge.
//! A side's first placement instead has to cover a board corner. Cells of
//! the opposing colour never affect legality.

use crate::board::{Board, Position, NEIGHBOR_OFFSETS};
use crate::game::GameState;
use crate::pieces::{Color, Piece};

/// How placed squares touch cells of their own colour.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub(crate) struct Contacts {
    /// Same-colour neighbours differing in both axes.
    pub corner: usize,
    /// Same-colour neighbours differing in exactly one axis.
    pub edge: usize,
}

/// Returns true if `piece` anchored at `anchor` is a legal placement.
pub fn can_place(piece: &Piece, anchor: Position, state: &GameState) -> bool {
    can_place_on_board(piece, anchor, state.board())
}

/// Board-level legality check used by both the checker and the enumerator.
pub(crate) fn can_place_on_board(piece: &Piece, anchor: Position, board: &Board) -> bool {
    // every square must land on an empty cell
    if !piece
        .squares()
        .iter()
        .all(|&offset| board.is_empty_cell(anchor.offset(offset)))
    {
        return false;
    }

    if is_first_move(board, piece.color) {
        return piece
            .squares()
            .iter()
            .any(|&offset| board.is_corner(anchor.offset(offset)));
    }

    let contacts = count_contacts(piece, anchor, board);
    contacts.corner > 0 && contacts.edge == 0
}

/// True iff no cell on the board holds `color`.
#[inline]
pub fn is_first_move(board: &Board, color: Color) -> bool {
    !board.has_color(color)
}

/// Classifies same-colour neighbours of the placed squares.
///
/// Returns as soon as one edge contact is seen, so `corner` is only a full
/// count when `edge` is zero. Callers only need `edge == 0 && corner > 0`.
pub(crate) fn count_contacts(piece: &Piece, anchor: Position, board: &Board) -> Contacts {
    let mut contacts = Contacts::default();

    for &offset in piece.squares() {
        let cell = anchor.offset(offset);
        for neighbor_offset in NEIGHBOR_OFFSETS {
            // off-board neighbours read as empty
            if board.get(cell.offset(neighbor_offset)) != Some(piece.color) {
                continue;
            }
            let (dx, dy) = neighbor_offset;
            if dx != 0 && dy != 0 {
                contacts.corner += 1;
            } else {
                contacts.edge += 1;
                return contacts;
            }
        }
    }

    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::{place, Player};
    use crate::geometry::rotate;
    use crate::pieces::{create_side_pieces, PieceId, Shape};

    fn new_state() -> GameState {
        GameState::new(&GameConfig::default())
    }

    fn piece(state: &GameState, player: Player, shape: Shape) -> Piece {
        *state
            .pieces(player)
            .iter()
            .find(|piece| piece.shape == shape)
            .unwrap()
    }

    #[test]
    fn test_first_move_must_cover_corner() {
        let state = new_state();
        let monomino = piece(&state, Player::Human, Shape::Monomino);

        assert!(can_place(&monomino, Position::new(0, 0), &state));
        assert!(can_place(&monomino, Position::new(19, 0), &state));
        assert!(can_place(&monomino, Position::new(0, 19), &state));
        assert!(can_place(&monomino, Position::new(19, 19), &state));
        assert!(!can_place(&monomino, Position::new(1, 1), &state));
        assert!(!can_place(&monomino, Position::new(10, 0), &state));
    }

    #[test]
    fn test_first_move_with_any_square_on_corner() {
        let state = new_state();
        let i5 = piece(&state, Player::Human, Shape::I5);

        // last square lands on the top-right corner
        assert!(can_place(&i5, Position::new(15, 0), &state));
        assert!(!can_place(&i5, Position::new(14, 0), &state));
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let state = new_state();
        let i5 = piece(&state, Player::Human, Shape::I5);
        assert!(!can_place(&i5, Position::new(16, 0), &state));
        assert!(!can_place(&i5, Position::new(-1, 0), &state));
        assert!(!can_place(&i5, Position::new(0, 20), &state));
    }

    #[test]
    fn test_rejects_occupied_cells() {
        let state = new_state();
        let monomino = piece(&state, Player::Human, Shape::Monomino);
        let state = place(&monomino, Position::new(0, 0), &state).unwrap();

        // computer tries to reuse the occupied corner
        let domino = piece(&state, Player::Computer, Shape::Domino);
        assert!(!can_place(&domino, Position::new(0, 0), &state));
        let mono = piece(&state, Player::Computer, Shape::Monomino);
        assert!(!can_place(&mono, Position::new(0, 0), &state));
    }

    #[test]
    fn test_corner_touch_scenario() {
        let state = new_state();
        let monomino = piece(&state, Player::Human, Shape::Monomino);
        let state = place(&monomino, Position::new(0, 0), &state).unwrap();

        let domino = piece(&state, Player::Human, Shape::Domino);
        // cells (1,1)-(2,1): pure corner touch to (0,0)
        assert!(can_place(&domino, Position::new(1, 1), &state));
        // cells (1,0)-(2,0): edge touch to (0,0)
        assert!(!can_place(&domino, Position::new(1, 0), &state));
        // no contact at all
        assert!(!can_place(&domino, Position::new(5, 5), &state));
    }

    #[test]
    fn test_edge_contact_anywhere_disqualifies() {
        let state = new_state();
        let monomino = piece(&state, Player::Human, Shape::Monomino);
        let state = place(&monomino, Position::new(0, 0), &state).unwrap();

        // vertical domino at (1,1)-(1,2) touches (0,0) diagonally only
        let vertical = rotate(&piece(&state, Player::Human, Shape::Domino), true);
        assert!(can_place(&vertical, Position::new(1, 1), &state));

        // L3 at (0,1),(0,2),(1,1): corner from (1,1) but edge from (0,1)
        let l3 = piece(&state, Player::Human, Shape::L3);
        assert!(!can_place(&l3, Position::new(0, 1), &state));
    }

    #[test]
    fn test_opponent_contact_is_ignored() {
        let state = new_state();
        let human_mono = piece(&state, Player::Human, Shape::Monomino);
        let state = place(&human_mono, Position::new(0, 0), &state).unwrap();
        let computer_i5 = piece(&state, Player::Computer, Shape::I5);
        let state = place(&computer_i5, Position::new(15, 19), &state).unwrap();

        // human domino at (1,1)-(2,1); put an opponent-coloured block beside it
        let mut board = state.board().clone();
        board.fill(Position::new(1, 2), Color::Blue);
        board.fill(Position::new(3, 1), Color::Blue);
        board.fill(Position::new(3, 2), Color::Blue);
        let domino = piece(&state, Player::Human, Shape::Domino);
        assert!(can_place_on_board(&domino, Position::new(1, 1), &board));
    }

    #[test]
    fn test_first_move_per_colour() {
        let state = new_state();
        let human_mono = piece(&state, Player::Human, Shape::Monomino);
        let state = place(&human_mono, Position::new(0, 0), &state).unwrap();

        // computer is still on its first move: corners only, human cells ignored
        let computer_mono = piece(&state, Player::Computer, Shape::Monomino);
        assert!(can_place(&computer_mono, Position::new(19, 19), &state));
        assert!(!can_place(&computer_mono, Position::new(1, 1), &state));
    }

    #[test]
    fn test_count_contacts() {
        let mut board = Board::new(6);
        board.fill(Position::new(2, 2), Color::Red);
        let mono = create_side_pieces(Color::Red)[0];

        for (dx, dy) in crate::board::DIAGONAL_OFFSETS {
            let contacts = count_contacts(&mono, Position::new(2 + dx, 2 + dy), &board);
            assert_eq!(contacts, Contacts { corner: 1, edge: 0 });
        }
        let contacts = count_contacts(&mono, Position::new(3, 2), &board);
        assert_eq!(contacts.edge, 1);

        // (0,2) touches (0,1) by edge first; the corner from (1,2) to (0,1) is never counted
        board.fill(Position::new(0, 1), Color::Red);
        let domino = Piece::new(PieceId(1), Shape::Domino, Color::Red);
        let contacts = count_contacts(&domino, Position::new(0, 2), &board);
        assert_eq!(contacts, Contacts { corner: 0, edge: 1 });

        let other = Piece::new(PieceId(0), Shape::Monomino, Color::Green);
        assert_eq!(count_contacts(&other, Position::new(3, 3), &board), Contacts::default());
    }
}
