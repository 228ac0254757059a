//! Key mapping from terminal events to session commands.

use crate::types::{Command, GameStatus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a command for the current status.
///
/// Space and Enter are contextual: they start a game from the intro or menu
/// screens, Space toggles pause during play and restarts after game over.
/// Commands that the session would reject are still returned; gating belongs
/// to the session's transition table.
pub fn map_key(key: KeyEvent, status: GameStatus) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let title = matches!(status, GameStatus::Intro | GameStatus::Menu);
    match key.code {
        KeyCode::Char(' ') if title => Some(Command::Start),
        KeyCode::Char(' ') if status == GameStatus::GameOver => Some(Command::Reset),
        KeyCode::Char(' ') => Some(Command::TogglePause),
        KeyCode::Enter if title => Some(Command::Start),
        KeyCode::Enter => Some(Command::HardDrop),

        KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Tab => Some(Command::OpenMenu),

        // Restart
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Reset),

        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Command::SoftDrop)
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Command::Rotate),

        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
