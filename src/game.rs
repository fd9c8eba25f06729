//! Game state snapshots, placement, passing and termination.
//!
//! Every transition takes a snapshot by reference and returns a new one, so
//! earlier snapshots stay valid for anyone still reading them.

use thiserror::Error;
use tracing::{debug, info};

use crate::board::{Board, Position};
use crate::config::GameConfig;
use crate::geometry::rotate;
use crate::legality::can_place;
use crate::moves::has_any_move;
use crate::pieces::{create_side_pieces, Color, Piece, PieceId, Shape};

/// Bonus for placing every piece.
pub const ALL_PLACED_BONUS: u32 = 15;

/// Extra bonus when the final piece placed is the monomino.
pub const MONOMINO_LAST_BONUS: u32 = 5;

/// The two sides of a match.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    /// Get the opponent player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            Player::Human => 0,
            Player::Computer => 1,
        }
    }
}

/// Whose move it is, or that the game has ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TurnState {
    HumanTurn,
    ComputerTurn,
    GameOver,
}

/// Final result of a finished game.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// Reasons a transition is refused. The input snapshot is never modified.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("the game is over")]
    GameOver,
    #[error("it is not {color}'s turn")]
    OutOfTurn { color: Color },
    #[error("piece {shape:?} is not in the current player's remaining pieces")]
    PieceNotAvailable { shape: Shape },
    #[error("no remaining piece with id {id:?}")]
    UnknownPiece { id: PieceId },
    #[error("{shape:?} cannot be placed at {position}")]
    IllegalPlacement { shape: Shape, position: Position },
}

/// Per-side state: colour, remaining pieces and score.
#[derive(Clone, PartialEq, Eq, Debug)]
struct Side {
    color: Color,
    pieces: Vec<Piece>,
    score: u32,
}

impl Side {
    fn new(color: Color) -> Self {
        Self {
            color,
            pieces: create_side_pieces(color),
            score: 0,
        }
    }
}

/// Immutable snapshot of a match.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GameState {
    board: Board,
    current: Player,
    sides: [Side; 2],
    game_over: bool,
}

impl GameState {
    /// Starting position: empty board, full piece sets, human to move.
    ///
    /// The configuration is assumed valid; see [`GameConfig::validate`].
    pub fn new(config: &GameConfig) -> Self {
        Self {
            board: Board::new(config.board_size),
            current: Player::Human,
            sides: [Side::new(config.human_color), Side::new(config.computer_color)],
            game_over: false,
        }
    }

    #[inline]
    fn side(&self, player: Player) -> &Side {
        &self.sides[player.index()]
    }

    #[inline]
    fn side_mut(&mut self, player: Player) -> &mut Side {
        &mut self.sides[player.index()]
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side due to move.
    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn color(&self, player: Player) -> Color {
        self.side(player).color
    }

    /// Remaining pieces of a side, in catalog order.
    pub fn pieces(&self, player: Player) -> &[Piece] {
        &self.side(player).pieces
    }

    /// Looks up a remaining piece by its stable id.
    pub fn piece(&self, player: Player, id: PieceId) -> Option<&Piece> {
        self.side(player).pieces.iter().find(|piece| piece.id == id)
    }

    pub fn score(&self, player: Player) -> u32 {
        self.side(player).score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The side playing `color`, if any.
    pub fn player_for(&self, color: Color) -> Option<Player> {
        [Player::Human, Player::Computer]
            .into_iter()
            .find(|&player| self.color(player) == color)
    }

    pub fn turn_state(&self) -> TurnState {
        match (self.game_over, self.current) {
            (true, _) => TurnState::GameOver,
            (false, Player::Human) => TurnState::HumanTurn,
            (false, Player::Computer) => TurnState::ComputerTurn,
        }
    }

    /// True when the side due to move has no legal placement but the game
    /// goes on; the driver is expected to call [`pass_turn`].
    pub fn must_pass(&self) -> bool {
        !self.game_over && !has_any_move(self, self.current)
    }

    /// Winner by score once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.game_over {
            return None;
        }
        let human = self.score(Player::Human);
        let computer = self.score(Player::Computer);
        Some(match human.cmp(&computer) {
            std::cmp::Ordering::Greater => Outcome::Winner(Player::Human),
            std::cmp::Ordering::Less => Outcome::Winner(Player::Computer),
            std::cmp::Ordering::Equal => Outcome::Draw,
        })
    }

    /// Returns a snapshot with one of `player`'s pieces rotated 90 degrees.
    ///
    /// The piece keeps its slot and id, so it is still recognised on placement.
    /// Legality is judged per orientation, so the game-over flag is
    /// recomputed for the new snapshot.
    pub fn rotate_piece(
        &self,
        player: Player,
        id: PieceId,
        clockwise: bool,
    ) -> Result<GameState, MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        let slot = self
            .side(player)
            .pieces
            .iter()
            .position(|piece| piece.id == id)
            .ok_or(MoveError::UnknownPiece { id })?;

        let mut next = self.clone();
        let pieces = &mut next.side_mut(player).pieces;
        pieces[slot] = rotate(&pieces[slot], clockwise);
        next.refresh_game_over();
        Ok(next)
    }

    /// Recomputes the termination flag: over iff neither side can move.
    fn refresh_game_over(&mut self) {
        let due = self.current;
        self.game_over = !has_any_move(self, due) && !has_any_move(self, due.opponent());
        if self.game_over {
            info!(
                human = self.score(Player::Human),
                computer = self.score(Player::Computer),
                "game over"
            );
        }
    }
}

/// Places `piece` at `position` for the side due to move.
///
/// Fills the covered cells, removes the piece from the side's collection,
/// scores it, hands the turn over and re-checks for game over.
pub fn place(piece: &Piece, position: Position, state: &GameState) -> Result<GameState, MoveError> {
    if state.game_over {
        return Err(MoveError::GameOver);
    }
    let player = state.current;
    if piece.color != state.color(player) {
        return Err(MoveError::OutOfTurn { color: piece.color });
    }
    let slot = state
        .pieces(player)
        .iter()
        .position(|remaining| remaining.id == piece.id && remaining.shape == piece.shape)
        .ok_or(MoveError::PieceNotAvailable { shape: piece.shape })?;
    if !can_place(piece, position, state) {
        return Err(MoveError::IllegalPlacement {
            shape: piece.shape,
            position,
        });
    }

    let mut next = state.clone();
    for &offset in piece.squares() {
        next.board.fill(position.offset(offset), piece.color);
    }

    let side = next.side_mut(player);
    side.pieces.remove(slot);
    side.score += piece.size() as u32;
    if side.pieces.is_empty() {
        side.score += ALL_PLACED_BONUS;
        if piece.shape == Shape::Monomino {
            side.score += MONOMINO_LAST_BONUS;
        }
    }
    debug!(
        ?player,
        shape = ?piece.shape,
        %position,
        score = side.score,
        remaining = side.pieces.len(),
        "placed piece"
    );

    next.current = player.opponent();
    next.refresh_game_over();
    Ok(next)
}

/// Hands the turn to the other side and re-checks for game over.
///
/// Passing while a legal move exists is not refused; avoiding that is the
/// driver's policy.
pub fn pass_turn(state: &GameState) -> Result<GameState, MoveError> {
    if state.game_over {
        return Err(MoveError::GameOver);
    }
    let mut next = state.clone();
    next.current = state.current.opponent();
    debug!(passed = ?state.current, "passed turn");
    next.refresh_game_over();
    Ok(next)
}
