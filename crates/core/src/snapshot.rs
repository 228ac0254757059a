//! Read-only view of a session for renderers and serializers.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::board::FullRows;
use crate::pieces::Shape;
use crate::player::Player;
use crate::types::{Cell, GameStatus, PieceColor, PieceKind, MAX_SHAPE_SIZE};

/// Occupied cells of the active piece in board coordinates, `(row, col)`
pub type PieceCells = ArrayVec<(i32, i32), { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub color: PieceColor,
    pub x: i32,
    pub y: i32,
    pub shape: Shape,
    pub cells: PieceCells,
}

impl From<&Player> for ActiveSnapshot {
    fn from(player: &Player) -> Self {
        Self {
            kind: player.kind(),
            color: player.color(),
            x: player.x(),
            y: player.y(),
            shape: *player.shape(),
            cells: player.board_cells().collect(),
        }
    }
}

impl ActiveSnapshot {
    pub fn covers(&self, row: i32, col: i32) -> bool {
        self.cells.contains(&(row, col))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major locked cells, `width * height` entries
    pub board: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub next: Option<PieceKind>,
    pub status: GameStatus,
    pub episode_id: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub combo: u32,
    pub clearing_rows: FullRows,
    pub combo_message: Option<String>,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    /// Locked cell at `(row, col)`; out-of-range reads are empty.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.board.get(row * self.width + col).copied().flatten()
    }

    pub fn is_clearing_row(&self, row: usize) -> bool {
        self.clearing_rows.contains(&row)
    }

    /// Gameplay commands would currently be accepted
    pub fn playable(&self) -> bool {
        self.status == GameStatus::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            board: Vec::new(),
            active: None,
            next: None,
            status: GameStatus::Intro,
            episode_id: 0,
            score: 0,
            level: 0,
            lines: 0,
            combo: 0,
            clearing_rows: FullRows::new(),
            combo_message: None,
            drop_interval_ms: 0,
        }
    }
}
