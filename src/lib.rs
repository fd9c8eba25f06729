//! Blokus-style Rule Engine Library
//!
//! Provides piece geometry, placement legality, move enumeration, scoring and
//! turn handling for a two-sided territory placement game on a square grid.
//! Every operation is a pure function over immutable [`GameState`] snapshots.

pub mod board;
pub mod config;
pub mod game;
pub mod geometry;
pub mod legality;
pub mod moves;
pub mod pieces;

pub use board::{format_board, Board, Position};
pub use config::{ConfigError, GameConfig};
pub use game::{pass_turn, place, GameState, MoveError, Outcome, Player, TurnState};
pub use geometry::rotate;
pub use legality::can_place;
pub use moves::{can_place_anywhere, legal_moves, pick_automated_move, valid_moves, Move};
pub use pieces::{create_side_pieces, shape_definitions, Color, Piece, PieceId, Shape};

use rand::Rng;
use tracing::warn;

/// Something that chooses moves for the automated side.
///
/// The engine ships a uniform random selector; drivers may plug in their own.
pub trait MoveSelector {
    /// Picks a move for the side due to move, or `None` if it must pass.
    fn select(&mut self, state: &GameState) -> Option<Move>;
}

/// Uniform random choice among all legal moves, driven by an owned RNG.
pub struct RandomSelector<R> {
    rng: R,
}

impl<R: Rng> RandomSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MoveSelector for RandomSelector<R> {
    fn select(&mut self, state: &GameState) -> Option<Move> {
        pick_automated_move(state, &mut self.rng)
    }
}

/// Plays a whole game with `selector` choosing for both sides.
///
/// Passes whenever the side to move is stuck. Returns every snapshot from the
/// starting position to the final one. If the engine refuses a move the
/// selector chose, play stops there and the history ends before game over.
pub fn play_out(config: &GameConfig, selector: &mut dyn MoveSelector) -> Vec<GameState> {
    let mut history = vec![GameState::new(config)];

    loop {
        let Some(state) = history.last() else {
            break;
        };
        if state.is_game_over() {
            break;
        }
        let next = match selector.select(state) {
            Some(chosen) => place(&chosen.piece, chosen.position, state),
            None => pass_turn(state),
        };
        match next {
            Ok(next) => history.push(next),
            Err(e) => {
                warn!(error = %e, player = ?state.current_player(), "selector move refused");
                break;
            }
        }
    }

    history
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_play_out_ends_in_game_over() {
        let mut selector = RandomSelector::new(StdRng::seed_from_u64(3));
        let history = play_out(&GameConfig::default(), &mut selector);
        let last = history.last().unwrap();
        assert!(last.is_game_over());
        assert!(last.outcome().is_some());
        assert_eq!(history[0].board().occupied(), 0);
    }

    #[test]
    fn test_play_out_is_reproducible() {
        let config = GameConfig::with_human_color(Color::Yellow);
        let first = play_out(&config, &mut RandomSelector::new(StdRng::seed_from_u64(99)));
        let second = play_out(&config, &mut RandomSelector::new(StdRng::seed_from_u64(99)));
        assert_eq!(first, second);
    }

    #[test]
    fn test_snapshots_are_never_mutated() {
        let mut selector = RandomSelector::new(StdRng::seed_from_u64(17));
        let history = play_out(&GameConfig::default(), &mut selector);
        for pair in history.windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            assert!(after.board().occupied() >= before.board().occupied());
            for player in [Player::Human, Player::Computer] {
                assert!(after.score(player) >= before.score(player));
                assert!(after.pieces(player).len() <= before.pieces(player).len());
            }
        }
    }

    /// Always offers the opponent's monomino in the top-left corner.
    struct WrongSideSelector;

    impl MoveSelector for WrongSideSelector {
        fn select(&mut self, state: &GameState) -> Option<Move> {
            let opponent = state.current_player().opponent();
            let piece = state.pieces(opponent)[Shape::Monomino as usize];
            Some(Move {
                piece,
                position: Position::new(0, 0),
            })
        }
    }

    #[test]
    fn test_play_out_stops_on_refused_move() {
        let history = play_out(&GameConfig::default(), &mut WrongSideSelector);
        assert_eq!(history.len(), 1);
        let last = &history[0];
        assert!(!last.is_game_over());
        assert_eq!(last.current_player(), Player::Human);
        assert_eq!(last.board().occupied(), 0);
    }

    #[test]
    fn test_state_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GameState>();
    }
}
