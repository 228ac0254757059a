//! Pieces module - tetromino bitmaps and colors
//!
//! Each piece is a square occupancy matrix (2x2, 3x3 or 4x4) in its spawn
//! orientation. Rotation produces a transformed copy of the same size; there
//! is no rotation-state table and no wall-kick search.

use serde::{Deserialize, Serialize};

use crate::types::{PieceColor, PieceKind, MAX_SHAPE_SIZE};

/// Square occupancy bitmap stored in a fixed 4x4 buffer.
///
/// Only the top-left `size x size` block is meaningful; everything outside it
/// stays `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    size: usize,
    bits: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from literal rows. Panics on a non-square or oversized
    /// matrix, so it is only used for the static catalog and tests.
    pub const fn from_rows<const N: usize>(rows: [[u8; N]; N]) -> Self {
        assert!(N >= 1 && N <= MAX_SHAPE_SIZE);
        let mut bits = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut r = 0;
        while r < N {
            let mut c = 0;
            while c < N {
                bits[r][c] = rows[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self { size: N, bits }
    }

    /// Side length of the matrix
    pub fn size(&self) -> usize {
        self.size
    }

    /// Occupied cells as `(row, col)` offsets from the top-left corner
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.size).flat_map(move |r| {
            (0..self.size).filter_map(move |c| self.bits[r][c].then_some((r, c)))
        })
    }

    /// 90° clockwise rotation: `new[r][c] = old[size - 1 - c][r]`.
    pub fn rotated_cw(&self) -> Self {
        let n = self.size;
        let mut bits = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in bits.iter_mut().enumerate().take(n) {
            for (c, bit) in row.iter_mut().enumerate().take(n) {
                *bit = self.bits[n - 1 - c][r];
            }
        }
        Self { size: n, bits }
    }

    /// Rows of the matrix as 0/1, for display and serialization-friendly tests
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.size)
            .map(|r| (0..self.size).map(|c| self.bits[r][c] as u8).collect())
            .collect()
    }
}

/// Immutable definition of a piece type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDef {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: PieceColor,
}

const I_SHAPE: Shape = Shape::from_rows([[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]]);
const J_SHAPE: Shape = Shape::from_rows([[0, 1, 0], [0, 1, 0], [1, 1, 0]]);
const L_SHAPE: Shape = Shape::from_rows([[0, 1, 0], [0, 1, 0], [0, 1, 1]]);
const O_SHAPE: Shape = Shape::from_rows([[1, 1], [1, 1]]);
const S_SHAPE: Shape = Shape::from_rows([[0, 1, 1], [1, 1, 0], [0, 0, 0]]);
const T_SHAPE: Shape = Shape::from_rows([[1, 1, 1], [0, 1, 0], [0, 0, 0]]);
const Z_SHAPE: Shape = Shape::from_rows([[1, 1, 0], [0, 1, 1], [0, 0, 0]]);

/// Spawn-orientation bitmap for a piece kind
pub fn base_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

/// Color of a piece kind
pub fn piece_color(kind: PieceKind) -> PieceColor {
    kind.color()
}

/// Full catalog entry for a piece kind
pub fn piece_def(kind: PieceKind) -> PieceDef {
    PieceDef {
        kind,
        shape: base_shape(kind),
        color: piece_color(kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_piece_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(base_shape(kind).cells().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn shape_sizes() {
        assert_eq!(base_shape(PieceKind::I).size(), 4);
        assert_eq!(base_shape(PieceKind::O).size(), 2);
        for kind in [PieceKind::J, PieceKind::L, PieceKind::S, PieceKind::T, PieceKind::Z] {
            assert_eq!(base_shape(kind).size(), 3);
        }
    }

    #[test]
    fn rotate_t_clockwise() {
        let t = base_shape(PieceKind::T).rotated_cw();
        assert_eq!(t.to_rows(), vec![vec![0, 0, 1], vec![0, 1, 1], vec![0, 0, 1]]);
    }

    #[test]
    fn rotate_i_becomes_horizontal() {
        let i = base_shape(PieceKind::I).rotated_cw();
        assert_eq!(
            i.to_rows(),
            vec![
                vec![0, 0, 0, 0],
                vec![1, 1, 1, 1],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
            ]
        );
    }

    #[test]
    fn rotation_has_order_four() {
        for kind in PieceKind::ALL {
            let base = base_shape(kind);
            let mut s = base;
            for _ in 0..4 {
                s = s.rotated_cw();
                assert_eq!(s.size(), base.size());
            }
            assert_eq!(s, base, "{:?}", kind);
        }
    }

    #[test]
    fn o_rotation_is_identity() {
        let o = base_shape(PieceKind::O);
        assert_eq!(o.rotated_cw(), o);
    }

    #[test]
    fn colors_are_distinct() {
        for a in PieceKind::ALL {
            for b in PieceKind::ALL {
                if a != b {
                    assert_ne!(piece_color(a), piece_color(b));
                }
            }
        }
    }
}
