//! Glass Tetris (workspace facade crate).
//!
//! Re-exports the member crates as `glass_tetris::{types, core, input, term}`;
//! the implementation lives under `crates/`.

pub use glass_tetris_core as core;
pub use glass_tetris_input as input;
pub use glass_tetris_term as term;
pub use glass_tetris_types as types;
