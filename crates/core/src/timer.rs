//! Timer driver - turns elapsed wall time into session commands
//!
//! The session itself has no clock. A `TickDriver` is fed elapsed
//! milliseconds by the frame loop and issues:
//!
//! - `Tick` every `drop_interval_ms(level)` while playing
//! - `CompleteClear` once rows have flashed for the clear animation duration
//! - `DismissMessage` once a combo message has been visible long enough
//!
//! Timers are only advanced in the status they belong to, so pausing freezes
//! gravity where it was. A new game (different episode id) zeroes everything.

use log::trace;

use crate::game_state::GameState;
use crate::types::{Command, GameStatus, Outcome, CLEAR_ANIMATION_MS, COMBO_MESSAGE_MS};

#[derive(Debug, Clone)]
pub struct TickDriver {
    clear_animation_ms: u32,
    message_ms: u32,
    gravity_elapsed: u32,
    clear_elapsed: u32,
    message_elapsed: u32,
    episode_id: u32,
    message_id: u32,
}

impl TickDriver {
    pub fn new() -> Self {
        Self::with_durations(CLEAR_ANIMATION_MS, COMBO_MESSAGE_MS)
    }

    pub fn with_durations(clear_animation_ms: u32, message_ms: u32) -> Self {
        Self {
            clear_animation_ms,
            message_ms,
            gravity_elapsed: 0,
            clear_elapsed: 0,
            message_elapsed: 0,
            episode_id: 0,
            message_id: 0,
        }
    }

    pub fn reset(&mut self) {
        self.gravity_elapsed = 0;
        self.clear_elapsed = 0;
        self.message_elapsed = 0;
    }

    /// Advance all timers by `elapsed_ms` and dispatch whatever fell due.
    ///
    /// Returns the number of commands that were applied.
    pub fn advance(&mut self, game: &mut GameState, elapsed_ms: u32) -> u32 {
        if game.episode_id() != self.episode_id {
            self.episode_id = game.episode_id();
            self.reset();
        }

        let mut applied = 0;
        applied += self.advance_message(game, elapsed_ms);

        match game.status() {
            GameStatus::Playing => {
                self.clear_elapsed = 0;
                self.gravity_elapsed = self.gravity_elapsed.saturating_add(elapsed_ms);
                // Catch up on long frames, re-reading the interval since a
                // tick can level up.
                loop {
                    let interval = game.drop_interval_ms().max(1);
                    if self.gravity_elapsed < interval || game.status() != GameStatus::Playing {
                        break;
                    }
                    self.gravity_elapsed -= interval;
                    if dispatch(game, Command::Tick) {
                        applied += 1;
                    }
                }
            }
            GameStatus::Clearing => {
                self.clear_elapsed = self.clear_elapsed.saturating_add(elapsed_ms);
                if self.clear_elapsed >= self.clear_animation_ms {
                    self.clear_elapsed = 0;
                    self.gravity_elapsed = 0;
                    if dispatch(game, Command::CompleteClear) {
                        applied += 1;
                    }
                }
            }
            _ => {}
        }

        applied
    }

    fn advance_message(&mut self, game: &mut GameState, elapsed_ms: u32) -> u32 {
        if game.message_id() != self.message_id {
            self.message_id = game.message_id();
            self.message_elapsed = 0;
        }
        if game.combo_message().is_none() {
            self.message_elapsed = 0;
            return 0;
        }
        self.message_elapsed = self.message_elapsed.saturating_add(elapsed_ms);
        if self.message_elapsed < self.message_ms {
            return 0;
        }
        self.message_elapsed = 0;
        u32::from(dispatch(game, Command::DismissMessage))
    }
}

impl Default for TickDriver {
    fn default() -> Self {
        Self::new()
    }
}

fn dispatch(game: &mut GameState, command: Command) -> bool {
    let outcome = game.apply(command);
    trace!("timer {} -> {:?}", command.as_str(), outcome);
    outcome == Outcome::Applied
}
