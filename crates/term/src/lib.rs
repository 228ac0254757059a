//! Terminal game renderer.
//!
//! Renders a [`core::GameSnapshot`] into a framebuffer of styled character
//! cells ([`GameView`]) and flushes it to the terminal with changed-run diffs
//! ([`TerminalRenderer`]). No widget library; every cell is placed by hand so
//! the board keeps a 2:1 aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use glass_tetris_core as core;
pub use glass_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
