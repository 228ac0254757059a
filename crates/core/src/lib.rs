//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules, the session state machine and the timer
//! driver. It has no dependency on the terminal or any other I/O, so it runs
//! the same in the TUI, in tests and in benchmarks.
//!
//! # Module Structure
//!
//! - [`board`]: grid of locked cells, collision queries and row clearing
//! - [`pieces`]: the seven tetromino bitmaps, colors and clockwise rotation
//! - [`player`]: the active falling piece and its movement primitives
//! - [`rng`]: uniform, seedable piece generation
//! - [`scoring`]: line scores, combo bonus, levels and gravity speed
//! - [`game_state`]: the session: status machine, locking, clears, events
//! - [`timer`]: converts elapsed time into `Tick`/`CompleteClear`/`DismissMessage`
//! - [`snapshot`]: read-only copy of a session for rendering
//!
//! # Game Rules
//!
//! - Pieces are drawn uniformly at random; repeats are allowed.
//! - Rotation is clockwise only and is dropped when the result collides.
//! - Pieces lock as soon as they cannot fall; there is no lock delay.
//! - Full rows flash for a short animation before they are removed.
//!
//! # Example
//!
//! ```
//! use glass_tetris_core::GameState;
//! use glass_tetris_core::types::{Command, GameStatus, Outcome};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.status(), GameStatus::Intro);
//!
//! game.apply(Command::Start);
//! game.apply(Command::MoveRight);
//! game.apply(Command::HardDrop);
//!
//! assert_eq!(game.board().filled_count(), 4);
//! assert_eq!(game.apply(Command::CompleteClear), Outcome::Rejected);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod pieces;
pub mod player;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod timer;

pub use glass_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use error::ConfigError;
pub use game_state::GameState;
pub use pieces::{base_shape, piece_color, piece_def, PieceDef, Shape};
pub use player::Player;
pub use rng::PieceGenerator;
pub use scoring::{calculate_score, drop_interval_ms, ScoreResult};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use timer::TickDriver;
