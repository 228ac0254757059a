//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data, usable by the engine, the terminal view and the
//! input layer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! Both can be overridden through the engine's `GameConfig`.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds and are consumed by the external driver,
//! never by the engine's state transitions:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Driver frame interval (~60 FPS) |
//! | `CLEAR_ANIMATION_MS` | 400 | Rows flash before they are removed |
//! | `COMBO_MESSAGE_MS` | 1500 | Combo popup lifetime |
//!
//! # Drop Intervals by Level
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 800ms |
//! | 3 | 650ms |
//! | 4 | 500ms |
//! | 5 | 400ms |
//! | 6 | 320ms |
//! | 7 | 250ms |
//! | 8 | 200ms |
//! | 9 | 160ms |
//! | 10+ | 120ms |
//!
//! # Examples
//!
//! ```
//! use glass_tetris_types::{Command, GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! let cmd = Command::from_str("hardDrop").unwrap();
//! assert_eq!(cmd, Command::HardDrop);
//!
//! assert_eq!(GameStatus::default(), GameStatus::Intro);
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Largest shape matrix side (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Driver frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// How long full rows flash before they are removed
pub const CLEAR_ANIMATION_MS: u32 = 400;

/// How long a combo message stays on screen
pub const COMBO_MESSAGE_MS: u32 = 1500;

/// Drop intervals by level (milliseconds per row)
///
/// Index 0 = Level 1, Index 8 = Level 9
pub const DROP_INTERVALS: [u32; 9] = [1000, 800, 650, 500, 400, 320, 250, 200, 160];

/// Drop interval for every level past the table
pub const DROP_INTERVAL_FLOOR_MS: u32 = 120;

/// First level of a fresh game
pub const START_LEVEL: u32 = 1;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table
///
/// Base points for clearing N lines at level 1:
/// - 1 line: 100 points
/// - 2 lines: 300 points
/// - 3 lines: 500 points
/// - 4 lines: 800 points
///
/// Points are multiplied by the current level.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Combo bonus per combo step, multiplied by level
pub const COMBO_BONUS: u32 = 50;

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Topaz blue, straight bar
/// - **J**: Sapphire blue
/// - **L**: Vivid orange (mirror of J)
/// - **O**: Gold, 2x2 square
/// - **S**: Emerald green
/// - **T**: Amethyst purple
/// - **Z**: Ruby red (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use glass_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("Z"), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Jewel-tone glass palette
    pub const fn color(&self) -> PieceColor {
        match self {
            PieceKind::I => PieceColor::new(0x00, 0xA3, 0xFF), // topaz
            PieceKind::J => PieceColor::new(0x00, 0x22, 0xFF), // sapphire
            PieceKind::L => PieceColor::new(0xFF, 0x80, 0x00), // orange
            PieceKind::O => PieceColor::new(0xFF, 0xD7, 0x00), // gold
            PieceKind::S => PieceColor::new(0x00, 0xCC, 0x44), // emerald
            PieceKind::T => PieceColor::new(0x99, 0x00, 0xFF), // amethyst
            PieceKind::Z => PieceColor::new(0xE6, 0x00, 0x00), // ruby
        }
    }

    /// Uppercase letter used by the UI
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// 24-bit color identity of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PieceColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS-style `#RRGGBB` form.
    ///
    /// ```
    /// use glass_tetris_types::PieceColor;
    ///
    /// assert_eq!(PieceColor::new(0x00, 0xA3, 0xFF).hex(), "#00A3FF");
    /// ```
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A locked square of piece material.
///
/// Once written into the grid it is immutable data; it has no link back to
/// the piece that placed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LockedCell {
    pub kind: PieceKind,
    pub color: PieceColor,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(LockedCell)`: Cell filled by a locked piece
pub type Cell = Option<LockedCell>;

/// Top-level session status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Title screen before the first game
    #[default]
    Intro,
    /// Only reachable from `Intro`; starting a game leaves it
    Menu,
    Playing,
    Paused,
    /// Full rows are flashing and gameplay commands are suppressed
    Clearing,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Intro => "intro",
            GameStatus::Menu => "menu",
            GameStatus::Playing => "playing",
            GameStatus::Paused => "paused",
            GameStatus::Clearing => "clearing",
            GameStatus::GameOver => "gameOver",
        }
    }
}

/// Commands issued to the session by the timer and input drivers
///
/// Every command is checked against the current status before dispatch;
/// disallowed commands are rejected without touching state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Leave the intro (or menu) and begin a fresh game
    Start,
    /// Intro -> Menu
    OpenMenu,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Move piece down one row, locking it if it cannot fall
    SoftDrop,
    /// Instantly drop piece to its lowest legal row and lock it
    HardDrop,
    /// Gravity step from the timer
    Tick,
    /// Playing <-> Paused
    TogglePause,
    /// Remove the flashing rows once the clear animation is over
    CompleteClear,
    /// Hide the current combo message
    DismissMessage,
    /// Throw away the current game and start a new one
    Reset,
}

impl Command {
    /// Parse command from string (camelCase, case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use glass_tetris_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("togglepause"), Some(Command::TogglePause));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(Command::Start),
            "openmenu" => Some(Command::OpenMenu),
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "rotate" => Some(Command::Rotate),
            "softdrop" => Some(Command::SoftDrop),
            "harddrop" => Some(Command::HardDrop),
            "tick" => Some(Command::Tick),
            "togglepause" => Some(Command::TogglePause),
            "completeclear" => Some(Command::CompleteClear),
            "dismissmessage" => Some(Command::DismissMessage),
            "reset" => Some(Command::Reset),
            _ => None,
        }
    }

    /// Transition table: whether this command is accepted in `status`.
    ///
    /// ```
    /// use glass_tetris_types::{Command, GameStatus};
    ///
    /// assert!(Command::Start.allowed_in(GameStatus::Menu));
    /// assert!(!Command::Rotate.allowed_in(GameStatus::Paused));
    /// assert!(Command::Reset.allowed_in(GameStatus::Clearing));
    /// ```
    pub fn allowed_in(&self, status: GameStatus) -> bool {
        match self {
            Command::Reset | Command::DismissMessage => true,
            Command::Start => matches!(status, GameStatus::Intro | GameStatus::Menu),
            Command::OpenMenu => status == GameStatus::Intro,
            Command::MoveLeft
            | Command::MoveRight
            | Command::Rotate
            | Command::SoftDrop
            | Command::HardDrop
            | Command::Tick => status == GameStatus::Playing,
            Command::TogglePause => matches!(status, GameStatus::Playing | GameStatus::Paused),
            Command::CompleteClear => status == GameStatus::Clearing,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::OpenMenu => "openMenu",
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::Rotate => "rotate",
            Command::SoftDrop => "softDrop",
            Command::HardDrop => "hardDrop",
            Command::Tick => "tick",
            Command::TogglePause => "togglePause",
            Command::CompleteClear => "completeClear",
            Command::DismissMessage => "dismissMessage",
            Command::Reset => "reset",
        }
    }
}

/// Result of dispatching a [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command ran and state changed
    Applied,
    /// The command was legal but had no effect (e.g. bumping a wall)
    Blocked,
    /// The command is not accepted in the current status
    Rejected,
}

impl Outcome {
    pub fn applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Presentation cues emitted by the engine for audio/UI collaborators.
///
/// Events never feed back into game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Moved,
    Rotated,
    /// A piece was written into the grid
    Locked,
    /// Rows were removed (count)
    LinesCleared(u32),
    LevelUp(u32),
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(FRAME_MS, 16);
        assert!(CLEAR_ANIMATION_MS < COMBO_MESSAGE_MS);
        assert!(DROP_INTERVALS.windows(2).all(|w| w[0] > w[1]));
        assert!(DROP_INTERVAL_FLOOR_MS < DROP_INTERVALS[DROP_INTERVALS.len() - 1]);
    }

    #[test]
    fn line_scores_escalate() {
        assert!(LINE_SCORES.windows(2).all(|w| w[0] < w[1]));
        // Per-row weight grows too: score[n] / n > score[n-1] / (n-1).
        for n in 2..=4u32 {
            let (cur, prev) = (LINE_SCORES[n as usize], LINE_SCORES[n as usize - 1]);
            assert!(cur * (n - 1) > prev * n);
        }
    }

    #[test]
    fn piece_kind_roundtrips_through_str() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn command_roundtrips_through_str() {
        let all = [
            Command::Start,
            Command::OpenMenu,
            Command::MoveLeft,
            Command::MoveRight,
            Command::Rotate,
            Command::SoftDrop,
            Command::HardDrop,
            Command::Tick,
            Command::TogglePause,
            Command::CompleteClear,
            Command::DismissMessage,
            Command::Reset,
        ];
        for cmd in all {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
    }
}
