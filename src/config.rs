//! Match configuration supplied by the driver at game start.

use thiserror::Error;

use crate::board::DEFAULT_BOARD_SIZE;
use crate::pieces::Color;

/// Smallest board that still leaves room for the largest piece.
pub const MIN_BOARD_SIZE: usize = 5;

/// Largest supported board edge length.
pub const MAX_BOARD_SIZE: usize = 64;

/// Configuration validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board size {size} is below the minimum of {}", MIN_BOARD_SIZE)]
    BoardTooSmall { size: usize },
    #[error("board size {size} exceeds the maximum of {}", MAX_BOARD_SIZE)]
    BoardTooLarge { size: usize },
    #[error("both sides cannot play {color}")]
    SameColors { color: Color },
}

/// Board size and the two active colours of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub human_color: Color,
    pub computer_color: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            human_color: Color::Red,
            computer_color: Color::Blue,
        }
    }
}

impl GameConfig {
    /// Human plays `color`; the computer takes the first other palette colour.
    pub fn with_human_color(color: Color) -> Self {
        let computer_color = Color::ALL
            .into_iter()
            .find(|&candidate| candidate != color)
            .unwrap_or(Color::Blue);
        Self {
            human_color: color,
            computer_color,
            ..Self::default()
        }
    }

    /// Checks board bounds and that the colours differ.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall {
                size: self.board_size,
            });
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge {
                size: self.board_size,
            });
        }
        if self.human_color == self.computer_color {
            return Err(ConfigError::SameColors {
                color: self.human_color,
            });
        }
        Ok(())
    }
}
