//! Player module - the active falling piece
//!
//! A `Player` lives for one piece: it spawns at the top centre, moves and
//! rotates while the candidate placement is collision-free, and is marked
//! `collided` once it cannot fall any further. The session then locks it into
//! the board and spawns a fresh `Player` for the next piece.
//!
//! Blocked moves and rotations are silent no-ops. There are no wall kicks.

use crate::board::Board;
use crate::pieces::{base_shape, piece_color, Shape};
use crate::types::{PieceColor, PieceKind};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    kind: PieceKind,
    color: PieceColor,
    shape: Shape,
    /// Column of the shape matrix's left edge
    x: i32,
    /// Row of the shape matrix's top edge
    y: i32,
    collided: bool,
}

impl Player {
    /// Create a piece at an explicit position in its spawn orientation
    pub fn at(kind: PieceKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            color: piece_color(kind),
            shape: base_shape(kind),
            x,
            y,
            collided: false,
        }
    }

    /// Spawn column for a piece on a board: the matrix centred horizontally
    pub fn spawn_x(kind: PieceKind, board: &Board) -> i32 {
        ((board.width() - base_shape(kind).size()) / 2) as i32
    }

    /// Place a new piece at the top centre.
    ///
    /// Returns `None` when the spawn footprint already overlaps locked cells,
    /// meaning the board has no room left.
    pub fn spawn(kind: PieceKind, board: &Board) -> Option<Self> {
        let player = Self::at(kind, Self::spawn_x(kind, board), 0);
        if Self::collides(board, &player.shape, player.x, player.y) {
            return None;
        }
        Some(player)
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> PieceColor {
        self.color
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// The piece came to rest and is waiting to be locked
    pub fn collided(&self) -> bool {
        self.collided
    }

    /// Occupied cells in board coordinates as `(row, col)`
    pub fn board_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .cells()
            .map(move |(r, c)| (self.y + r as i32, self.x + c as i32))
    }

    /// Collision predicate shared by every operation.
    ///
    /// A placement collides when any occupied cell hits a side wall, reaches
    /// the floor, or lands on a locked cell. Cells above row 0 only see the
    /// side walls.
    pub fn collides(board: &Board, shape: &Shape, x: i32, y: i32) -> bool {
        shape
            .cells()
            .any(|(r, c)| board.is_occupied(y + r as i32, x + c as i32))
    }

    /// Shift horizontally by `dx` if the destination is free.
    pub fn attempt_move(&mut self, dx: i32, board: &Board) -> bool {
        if Self::collides(board, &self.shape, self.x + dx, self.y) {
            return false;
        }
        self.x += dx;
        true
    }

    /// Rotate 90° clockwise in place if the rotated shape fits.
    pub fn attempt_rotate(&mut self, board: &Board) -> bool {
        let rotated = self.shape.rotated_cw();
        if Self::collides(board, &rotated, self.x, self.y) {
            return false;
        }
        self.shape = rotated;
        true
    }

    /// Move down one row. On collision the piece stays put and is marked
    /// `collided`.
    pub fn step_down(&mut self, board: &Board) -> bool {
        if Self::collides(board, &self.shape, self.x, self.y + 1) {
            self.collided = true;
            return false;
        }
        self.y += 1;
        true
    }

    /// Drop to the lowest legal row and mark the piece `collided`.
    /// Returns the number of rows fallen.
    pub fn hard_drop(&mut self, board: &Board) -> u32 {
        let distance = self.drop_distance(board);
        self.y += distance as i32;
        self.collided = true;
        distance
    }

    /// Rows the piece can still fall before resting
    pub fn drop_distance(&self, board: &Board) -> u32 {
        let mut distance = 0;
        while !Self::collides(board, &self.shape, self.x, self.y + distance as i32 + 1) {
            distance += 1;
        }
        distance
    }

    /// Check if the piece is resting on something
    pub fn is_grounded(&self, board: &Board) -> bool {
        Self::collides(board, &self.shape, self.x, self.y + 1)
    }
}
