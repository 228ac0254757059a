//! Game state module - the session state machine
//!
//! `GameState` owns the board, the active piece, the piece generator and all
//! scoring counters. Drivers talk to it exclusively through [`GameState::apply`]
//! with a [`Command`]; each command is checked against the transition table in
//! [`Command::allowed_in`] before anything is touched, and rejected commands leave
//! state exactly as it was.
//!
//! Timing is not handled here. The driver decides when to send `Tick`,
//! `CompleteClear` and `DismissMessage` (see [`crate::timer::TickDriver`]).

use std::mem;

use log::{debug, info, trace};

use crate::board::{Board, FullRows, MAX_CLEAR_ROWS};
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::player::Player;
use crate::rng::PieceGenerator;
use crate::scoring::{calculate_level, calculate_score, combo_message, drop_interval_ms};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Command, GameEvent, GameStatus, Outcome, PieceKind};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    active: Option<Player>,
    next: Option<PieceKind>,
    generator: PieceGenerator,
    status: GameStatus,
    /// Monotonic game id (increments on every start/reset).
    episode_id: u32,
    score: u32,
    level: u32,
    lines: u32,
    /// Consecutive clearing locks after the first one of a streak
    combo: u32,
    /// Whether the previous lock cleared rows
    last_lock_cleared: bool,
    clearing_rows: FullRows,
    combo_message: Option<String>,
    /// Bumped whenever a new combo message is set
    message_id: u32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a default-sized game with the given generator seed
    pub fn new(seed: u64) -> Self {
        Self::build(
            GameConfig::default().with_seed(seed),
            Board::new(),
            PieceGenerator::new(seed),
        )
    }

    /// Create a game from a validated configuration
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        let generator = match config.seed {
            Some(seed) => PieceGenerator::new(seed),
            None => PieceGenerator::from_entropy(),
        };
        Self::with_generator(config, generator)
    }

    /// Create a game with an explicit piece generator
    pub fn with_generator(
        config: GameConfig,
        generator: PieceGenerator,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::with_size(config.width, config.height)?;
        Ok(Self::build(config, board, generator))
    }

    fn build(config: GameConfig, board: Board, generator: PieceGenerator) -> Self {
        Self {
            level: config.start_level,
            config,
            board,
            active: None,
            next: None,
            generator,
            status: GameStatus::Intro,
            episode_id: 0,
            score: 0,
            lines: 0,
            combo: 0,
            last_lock_cleared: false,
            clearing_rows: FullRows::new(),
            combo_message: None,
            message_id: 0,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn next_piece(&self) -> Option<PieceKind> {
        self.next
    }

    pub fn active(&self) -> Option<&Player> {
        self.active.as_ref()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn clearing_rows(&self) -> &[usize] {
        &self.clearing_rows
    }

    pub fn combo_message(&self) -> Option<&str> {
        self.combo_message.as_deref()
    }

    pub fn message_id(&self) -> u32 {
        self.message_id
    }

    /// Gravity interval the timer should use at the current level
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level)
    }

    /// Drain presentation events produced since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.status = self.status;
        out.episode_id = self.episode_id;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.combo = self.combo;
        out.next = self.next;
        out.clearing_rows.clone_from(&self.clearing_rows);
        out.combo_message.clone_from(&self.combo_message);
        out.drop_interval_ms = self.drop_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Dispatch one command.
    pub fn apply(&mut self, command: Command) -> Outcome {
        if !command.allowed_in(self.status) {
            trace!("rejected {} while {}", command.as_str(), self.status.as_str());
            return Outcome::Rejected;
        }

        match command {
            Command::Start | Command::Reset => {
                self.new_game();
                Outcome::Applied
            }
            Command::OpenMenu => {
                self.status = GameStatus::Menu;
                Outcome::Applied
            }
            Command::MoveLeft => self.move_player(-1),
            Command::MoveRight => self.move_player(1),
            Command::Rotate => self.rotate_player(),
            Command::SoftDrop | Command::Tick => self.drop_one(),
            Command::HardDrop => self.hard_drop(),
            Command::TogglePause => {
                self.status = match self.status {
                    GameStatus::Paused => GameStatus::Playing,
                    _ => GameStatus::Paused,
                };
                Outcome::Applied
            }
            Command::CompleteClear => self.complete_clear(),
            Command::DismissMessage => match self.combo_message.take() {
                Some(_) => Outcome::Applied,
                None => Outcome::Blocked,
            },
        }
    }

    /// Throw away everything and begin a fresh game.
    fn new_game(&mut self) {
        self.board.reset();
        self.active = None;
        self.next = None;
        self.score = 0;
        self.level = self.config.start_level;
        self.lines = 0;
        self.combo = 0;
        self.last_lock_cleared = false;
        self.clearing_rows.clear();
        self.combo_message = None;
        self.events.clear();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.status = GameStatus::Playing;

        info!(
            "game {} started on a {}x{} board",
            self.episode_id,
            self.board.width(),
            self.board.height()
        );
        self.spawn_next();
    }

    /// Spawn the queued piece and queue a new one.
    ///
    /// A blocked spawn ends the game.
    fn spawn_next(&mut self) -> bool {
        let kind = match self.next.take() {
            Some(kind) => kind,
            None => self.generator.next(),
        };
        self.next = Some(self.generator.next());

        match Player::spawn(kind, &self.board) {
            Some(player) => {
                debug!("spawned {} at x={}", kind.as_str(), player.x());
                self.active = Some(player);
                true
            }
            None => {
                info!("game {} over with score {}", self.episode_id, self.score);
                self.active = None;
                self.status = GameStatus::GameOver;
                self.events.push(GameEvent::GameOver);
                false
            }
        }
    }

    fn move_player(&mut self, dx: i32) -> Outcome {
        let Some(player) = self.active.as_mut() else {
            return Outcome::Blocked;
        };
        if player.attempt_move(dx, &self.board) {
            self.events.push(GameEvent::Moved);
            Outcome::Applied
        } else {
            Outcome::Blocked
        }
    }

    fn rotate_player(&mut self) -> Outcome {
        let Some(player) = self.active.as_mut() else {
            return Outcome::Blocked;
        };
        if player.attempt_rotate(&self.board) {
            self.events.push(GameEvent::Rotated);
            Outcome::Applied
        } else {
            Outcome::Blocked
        }
    }

    /// One row of gravity; a piece that cannot fall is locked right away.
    fn drop_one(&mut self) -> Outcome {
        let Some(player) = self.active.as_mut() else {
            return Outcome::Blocked;
        };
        if !player.step_down(&self.board) {
            self.settle();
        }
        Outcome::Applied
    }

    fn hard_drop(&mut self) -> Outcome {
        let Some(player) = self.active.as_mut() else {
            return Outcome::Blocked;
        };
        let distance = player.hard_drop(&self.board);
        debug!("hard drop fell {} rows", distance);
        self.settle();
        Outcome::Applied
    }

    /// Lock the collided piece and either start a clear or spawn the next one.
    fn settle(&mut self) {
        let Some(player) = self.active.take() else {
            return;
        };
        self.board.lock(&player);
        self.events.push(GameEvent::Locked);

        let full = self.board.full_rows();
        if full.is_empty() {
            self.combo = 0;
            self.last_lock_cleared = false;
            self.spawn_next();
            return;
        }

        debug!("rows {:?} full, clearing", full);
        // Only rows touched by the locked piece can be full.
        self.clearing_rows = full.into_iter().take(MAX_CLEAR_ROWS).collect();
        self.status = GameStatus::Clearing;
    }

    /// Remove the flashing rows, score them and resume play.
    fn complete_clear(&mut self) -> Outcome {
        let rows = mem::take(&mut self.clearing_rows);
        let count = self.board.clear_rows(&rows);

        self.combo = if self.last_lock_cleared {
            self.combo + 1
        } else {
            0
        };
        self.last_lock_cleared = true;

        let result = calculate_score(count, self.level, self.combo);
        self.score = self.score.saturating_add(result.total);
        self.lines = self.lines.saturating_add(count as u32);

        let level = calculate_level(self.lines, self.config.start_level, self.config.lines_per_level)
            .max(self.level);
        if level > self.level {
            info!("level {} -> {}", self.level, level);
            self.level = level;
            self.events.push(GameEvent::LevelUp(level));
        }

        self.combo_message = Some(combo_message(count, self.combo));
        self.message_id = self.message_id.wrapping_add(1);
        self.events.push(GameEvent::LinesCleared(count as u32));
        debug!(
            "cleared {} rows for {} points (combo {})",
            count, result.total, self.combo
        );

        self.status = GameStatus::Playing;
        self.spawn_next();
        Outcome::Applied
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
