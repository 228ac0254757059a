//! Board module - manages the game grid
//!
//! The board is a `width x height` grid (10x20 by default) where each cell is
//! empty or holds locked piece material. Storage is a flat row-major vector
//! sized once at construction; dimensions never change afterwards.
//! Coordinates are `(row, col)`: row 0 is the top, col 0 the left edge.

use arrayvec::ArrayVec;

use crate::error::ConfigError;
use crate::player::Player;
use crate::types::{Cell, LockedCell, BOARD_HEIGHT, BOARD_WIDTH, MAX_SHAPE_SIZE};

/// Most rows a single lock can complete (one per row of the tallest shape)
pub const MAX_CLEAR_ROWS: usize = MAX_SHAPE_SIZE;

/// Largest accepted board side
pub const MAX_BOARD_SIDE: usize = 256;

/// Rows flashing after one lock, ascending
pub type FullRows = ArrayVec<usize, MAX_CLEAR_ROWS>;

/// The game board using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major cells (row * width + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty 10x20 board
    pub fn new() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            cells: vec![None; BOARD_WIDTH * BOARD_HEIGHT],
        }
    }

    /// Create an empty board with custom dimensions.
    ///
    /// Every piece must fit side by side at spawn, so both sides need at least
    /// four cells.
    pub fn with_size(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width < MAX_SHAPE_SIZE || height < MAX_SHAPE_SIZE {
            return Err(ConfigError::BoardTooSmall { width, height });
        }
        if width > MAX_BOARD_SIDE || height > MAX_BOARD_SIDE {
            return Err(ConfigError::BoardTooLarge { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![None; width * height],
        })
    }

    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.height || col as usize >= self.width {
            return None;
        }
        Some(row as usize * self.width + col as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at `(row, col)`, `None` when out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at `(row, col)`. Returns false if out of bounds.
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Collision lookup.
    ///
    /// - columns outside `[0, width)` and rows at or below `height` are walls
    ///   and always collide
    /// - rows above the top edge (negative) are open sky and never collide
    /// - anything else collides when a locked cell is there
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        if col < 0 || col as usize >= self.width || row >= self.height as i32 {
            return true;
        }
        if row < 0 {
            return false;
        }
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .is_some_and(|cells| cells.iter().all(|cell| cell.is_some()))
    }

    /// Check if a row is completely empty
    pub fn is_row_empty(&self, row: usize) -> bool {
        self.row(row)
            .is_some_and(|cells| cells.iter().all(|cell| cell.is_none()))
    }

    /// Cells of one row, left to right. `None` when `row >= height`.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        self.cells.get(start..start + self.width)
    }

    /// Write the player's occupied cells into the grid, tagged with its kind
    /// and color.
    ///
    /// The caller guarantees the placement is collision-free. Cells still
    /// above the top edge have nowhere to go and are skipped.
    pub fn lock(&mut self, player: &Player) {
        let locked = LockedCell {
            kind: player.kind(),
            color: player.color(),
        };
        for (row, col) in player.board_cells() {
            self.set(row, col, Some(locked));
        }
    }

    /// Rows whose every cell is occupied, ascending
    pub fn full_rows(&self) -> Vec<usize> {
        (0..self.height).filter(|&row| self.is_row_full(row)).collect()
    }

    /// Remove the named rows and compact the rest downward.
    ///
    /// Single bottom-to-top pass: each surviving row moves down by the number
    /// of removed rows beneath it, so simultaneous clears never double-shift.
    /// Empty rows fill the top. Out-of-range indices are ignored. Returns the
    /// number of rows removed.
    pub fn clear_rows(&mut self, rows: &[usize]) -> usize {
        let width = self.width;
        let mut removed = 0;
        let mut write_row = self.height;

        for read_row in (0..self.height).rev() {
            if rows.contains(&read_row) {
                removed += 1;
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * width;
                self.cells.copy_within(src..src + width, write_row * width);
            }
        }

        self.cells[..write_row * width].fill(None);
        removed
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of locked cells on the board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Reinitialize every cell to empty
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::piece_color;
    use crate::types::PieceKind;

    fn block(kind: PieceKind) -> Cell {
        Some(LockedCell {
            kind,
            color: piece_color(kind),
        })
    }

    fn fill_row(board: &mut Board, row: i32) {
        for col in 0..board.width() as i32 {
            board.set(row, col, block(PieceKind::I));
        }
    }

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(0, 9), Some(9));
        assert_eq!(board.index(1, 0), Some(10));
        assert_eq!(board.index(19, 9), Some(199));
        assert_eq!(board.index(0, -1), None);
        assert_eq!(board.index(0, 10), None);
        assert_eq!(board.index(20, 0), None);
    }

    #[test]
    fn test_is_occupied_asymmetry() {
        let board = Board::new();
        // Open sky above the board.
        assert!(!board.is_occupied(-1, 0));
        assert!(!board.is_occupied(-3, 9));
        // Walls and floor.
        assert!(board.is_occupied(0, -1));
        assert!(board.is_occupied(0, 10));
        assert!(board.is_occupied(-2, 10));
        assert!(board.is_occupied(20, 5));
        // Empty interior.
        assert!(!board.is_occupied(10, 5));
    }

    #[test]
    fn test_full_rows_ascending() {
        let mut board = Board::new();
        fill_row(&mut board, 19);
        fill_row(&mut board, 17);
        board.set(18, 0, block(PieceKind::T));

        assert_eq!(board.full_rows().as_slice(), &[17, 19]);
    }

    #[test]
    fn test_row_out_of_range() {
        let mut board = Board::new();
        fill_row(&mut board, 19);
        assert_eq!(board.row(19).map(|cells| cells.len()), Some(10));
        assert!(board.row(20).is_none());
        assert!(!board.is_row_full(20));
        assert!(!board.is_row_empty(20));
    }

    #[test]
    fn test_clear_two_adjacent_rows_shifts_by_two() {
        let mut board = Board::new();
        fill_row(&mut board, 18);
        fill_row(&mut board, 19);
        board.set(17, 3, block(PieceKind::Z));
        board.set(10, 7, block(PieceKind::S));

        assert_eq!(board.clear_rows(&[18, 19]), 2);

        assert_eq!(board.get(19, 3), Some(block(PieceKind::Z)));
        assert_eq!(board.get(12, 7), Some(block(PieceKind::S)));
        assert_eq!(board.filled_count(), 2);
        assert!(board.is_row_empty(0));
        assert!(board.is_row_empty(1));
    }

    #[test]
    fn test_clear_split_rows() {
        let mut board = Board::new();
        fill_row(&mut board, 19);
        fill_row(&mut board, 17);
        board.set(18, 4, block(PieceKind::L)); // between the two clears
        board.set(16, 1, block(PieceKind::J)); // above both

        board.clear_rows(&[17, 19]);

        assert_eq!(board.get(19, 4), Some(block(PieceKind::L)));
        assert_eq!(board.get(18, 1), Some(block(PieceKind::J)));
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn test_with_size_rejects_tiny_board() {
        assert!(Board::with_size(3, 20).is_err());
        assert!(Board::with_size(10, 0).is_err());
        assert!(Board::with_size(10, MAX_BOARD_SIDE + 1).is_err());
        let board = Board::with_size(6, 8).unwrap();
        assert_eq!(board.cells().len(), 48);
    }

    #[test]
    fn test_reset() {
        let mut board = Board::new();
        fill_row(&mut board, 5);
        board.reset();
        assert_eq!(board.filled_count(), 0);
    }
}
