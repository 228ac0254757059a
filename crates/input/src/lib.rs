//! Terminal input module.
//!
//! Maps `crossterm` key events into session [`crate::types::Command`]s. The
//! mapping depends on the current [`crate::types::GameStatus`] only for the
//! contextual keys (Space, Enter).

pub mod map;

pub use glass_tetris_types as types;

pub use map::{map_key, should_quit};
