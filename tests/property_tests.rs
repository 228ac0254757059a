//! Property tests for movement, rotation and row clearing

use proptest::prelude::*;

use glass_tetris::core::{base_shape, piece_color, Board, Player};
use glass_tetris::types::{LockedCell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

/// Random board: each cell filled with probability ~1/3.
fn board_strategy() -> impl Strategy<Value = Board> {
    prop::collection::vec(prop::bool::weighted(0.33), BOARD_WIDTH * BOARD_HEIGHT).prop_map(|bits| {
        let mut board = Board::new();
        let cell = Some(LockedCell {
            kind: PieceKind::Z,
            color: piece_color(PieceKind::Z),
        });
        for (i, filled) in bits.into_iter().enumerate() {
            if filled {
                board.set((i / BOARD_WIDTH) as i32, (i % BOARD_WIDTH) as i32, cell);
            }
        }
        board
    })
}

proptest! {
    #[test]
    fn rotation_has_order_four(kind in kind_strategy()) {
        let base = base_shape(kind);
        let back = base.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
        prop_assert_eq!(back, base);
    }

    #[test]
    fn blocked_moves_change_nothing(
        board in board_strategy(),
        kind in kind_strategy(),
        x in -3i32..10,
        y in -3i32..20,
        dx in prop::sample::select(vec![-1i32, 1]),
    ) {
        let mut player = Player::at(kind, x, y);
        let before_board = board.clone();

        let before = player;
        if !player.attempt_move(dx, &board) {
            prop_assert_eq!(player, before);
        } else {
            prop_assert_eq!(player.x(), before.x() + dx);
        }

        let before = player;
        if !player.attempt_rotate(&board) {
            prop_assert_eq!(player, before);
        } else {
            prop_assert_eq!(*player.shape(), before.shape().rotated_cw());
        }

        prop_assert_eq!(board, before_board);
    }

    #[test]
    fn clearing_shifts_rows_above_by_removed_count(board in board_strategy(), extra in 0usize..BOARD_HEIGHT) {
        let mut board = board;
        // Make sure at least one row is full.
        let cell = Some(LockedCell { kind: PieceKind::I, color: piece_color(PieceKind::I) });
        for col in 0..BOARD_WIDTH as i32 {
            board.set(extra as i32, col, cell);
        }

        let full = board.full_rows();
        let before = board.clone();
        let removed = board.clear_rows(&full);
        prop_assert_eq!(removed, full.len());

        // Every surviving row lands `full rows below it` further down.
        for row in 0..BOARD_HEIGHT {
            if full.contains(&row) {
                continue;
            }
            let below = full.iter().filter(|&&r| r > row).count();
            prop_assert_eq!(board.row(row + below), before.row(row));
        }
        for row in 0..removed {
            prop_assert!(board.is_row_empty(row));
        }
    }
}
