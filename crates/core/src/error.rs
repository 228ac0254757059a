//! Construction-time errors.
//!
//! Steady-state play has no error paths: blocked moves are no-ops and a
//! blocked spawn is a transition to game over. Only bad configuration fails.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board {width}x{height} is too small; both sides need at least 4 cells")]
    BoardTooSmall { width: usize, height: usize },
    #[error("board {width}x{height} is too large")]
    BoardTooLarge { width: usize, height: usize },
    #[error("start level must be at least 1")]
    ZeroStartLevel,
    #[error("lines per level must be at least 1")]
    ZeroLinesPerLevel,
}
