//! Integration tests for the game session

use glass_tetris::core::{GameConfig, GameState, PieceGenerator, TickDriver};
use glass_tetris::types::{Command, GameEvent, GameStatus, Outcome, PieceKind};

fn scripted(kinds: &[PieceKind]) -> GameState {
    GameState::with_generator(GameConfig::default(), PieceGenerator::scripted(kinds)).unwrap()
}

fn shift(game: &mut GameState, dx: i32) {
    let cmd = if dx < 0 { Command::MoveLeft } else { Command::MoveRight };
    for _ in 0..dx.abs() {
        assert_eq!(game.apply(cmd), Outcome::Applied);
    }
}

#[test]
fn test_game_lifecycle() {
    let mut game = GameState::new(12345);
    assert_eq!(game.status(), GameStatus::Intro);
    assert!(game.active().is_none());

    assert!(game.apply(Command::Start).applied());
    assert_eq!(game.status(), GameStatus::Playing);
    assert!(game.active().is_some());
    assert_eq!(game.level(), 1);
}

#[test]
fn test_five_o_pieces_clear_two_rows() {
    let mut game = scripted(&[PieceKind::O]);
    game.apply(Command::Start);

    // O spawns at x=4; tile the bottom two rows in five drops.
    for dx in [-4, -2, 0, 2, 4] {
        shift(&mut game, dx);
        game.apply(Command::HardDrop);
    }

    assert_eq!(game.status(), GameStatus::Clearing);
    assert_eq!(game.clearing_rows(), &[18, 19]);

    game.apply(Command::CompleteClear);
    assert_eq!(game.score(), 300);
    assert_eq!(game.lines(), 2);
    assert_eq!(game.board().filled_count(), 0);
    assert_eq!(game.combo_message(), Some("DOUBLE"));

    let events = game.take_events();
    assert_eq!(events.iter().filter(|e| **e == GameEvent::Locked).count(), 5);
    assert!(events.contains(&GameEvent::LinesCleared(2)));
    assert!(game.take_events().is_empty());
}

#[test]
fn test_single_clear_from_dropped_pieces() {
    let mut game = scripted(&[PieceKind::I, PieceKind::I, PieceKind::O]);
    game.apply(Command::Start);

    // Horizontal I spawns over columns 3..=6; lay one on each side.
    for dx in [-3, 3] {
        assert_eq!(game.apply(Command::Rotate), Outcome::Applied);
        shift(&mut game, dx);
        game.apply(Command::HardDrop);
    }
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.active().map(|p| p.kind()), Some(PieceKind::O));

    // The O closes columns 4 and 5 of the bottom row.
    game.apply(Command::HardDrop);
    assert_eq!(game.status(), GameStatus::Clearing);
    assert_eq!(game.clearing_rows(), &[19]);
    assert_eq!(game.score(), 0);

    assert_eq!(game.apply(Command::CompleteClear), Outcome::Applied);
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.score(), 100);
    assert_eq!(game.lines(), 1);
    assert_eq!(game.combo(), 0);
    assert_eq!(game.combo_message(), Some("SINGLE"));

    // The top half of the O dropped into the bottom row.
    assert_eq!(game.board().filled_count(), 2);
    assert!(game.board().is_occupied(19, 4));
    assert!(game.board().is_occupied(19, 5));
    assert!(game.board().is_row_empty(18));

    let events = game.take_events();
    assert_eq!(events.iter().filter(|e| **e == GameEvent::Locked).count(), 3);
    assert!(events.contains(&GameEvent::LinesCleared(1)));
}

#[test]
fn test_stacking_to_the_top_ends_the_game() {
    let mut game = scripted(&[PieceKind::O]);
    game.apply(Command::Start);

    let mut drops = 0;
    while game.status() == GameStatus::Playing {
        game.apply(Command::HardDrop);
        drops += 1;
        assert!(drops <= 10, "the centre column should fill up");
    }

    assert_eq!(game.status(), GameStatus::GameOver);
    assert_eq!(drops, 10);
    assert!(game.active().is_none());
    assert_eq!(game.apply(Command::MoveLeft), Outcome::Rejected);
    assert_eq!(game.apply(Command::Tick), Outcome::Rejected);
    assert!(game.take_events().contains(&GameEvent::GameOver));
}

#[test]
fn test_pause_only_accepts_toggle_and_reset() {
    let mut game = GameState::new(3);
    game.apply(Command::Start);
    game.apply(Command::TogglePause);

    for cmd in [Command::MoveLeft, Command::Rotate, Command::Tick, Command::HardDrop] {
        assert_eq!(game.apply(cmd), Outcome::Rejected);
    }
    assert_eq!(game.apply(Command::TogglePause), Outcome::Applied);
    assert_eq!(game.status(), GameStatus::Playing);

    game.apply(Command::TogglePause);
    assert_eq!(game.apply(Command::Reset), Outcome::Applied);
    assert_eq!(game.status(), GameStatus::Playing);
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed| {
        let mut game = GameState::new(seed);
        game.apply(Command::Start);
        let mut kinds = Vec::new();
        for _ in 0..20 {
            kinds.push(game.active().map(|p| p.kind()));
            game.apply(Command::HardDrop);
            if game.status() == GameStatus::Clearing {
                game.apply(Command::CompleteClear);
            }
        }
        (kinds, game.snapshot())
    };
    assert_eq!(play(99), play(99));
}

#[test]
fn test_timer_driven_play() {
    let mut game = scripted(&[PieceKind::I]);
    let mut driver = TickDriver::new();
    game.apply(Command::Start);

    // Level 1 gravity is one row per second; an I needs 16 rows to land and
    // one more tick to lock.
    for _ in 0..16 {
        driver.advance(&mut game, 1000);
    }
    assert_eq!(game.active().unwrap().y(), 16);
    driver.advance(&mut game, 1000);
    assert_eq!(game.board().filled_count(), 4);
    assert_eq!(game.active().unwrap().y(), 0);
}
