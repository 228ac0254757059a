//! Terminal runner (default binary).
//!
//! Usage: `glass-tetris [config.json]`
//!
//! - `GLASS_TETRIS_SEED` overrides the piece generator seed.
//! - `GLASS_TETRIS_LOG` names a log file; nothing is logged when unset since
//!   the terminal is in raw mode. `RUST_LOG` sets the level (default `info`).

use std::env;
use std::fs::{self, File};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::{debug, info, LevelFilter};

use glass_tetris::core::{GameConfig, GameSnapshot, GameState, TickDriver};
use glass_tetris::input::{map_key, should_quit};
use glass_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use glass_tetris::types::{GameStatus, FRAME_MS};

/// Half-period of the clearing-row flash.
const FLASH_MS: u128 = 100;

fn main() -> Result<()> {
    init_logging()?;
    let config = load_config()?;
    let mut game = GameState::with_config(config.clone()).context("invalid game config")?;
    info!("starting with {:?}", config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let restored = term.exit();
    result.and(restored)
}

fn init_logging() -> Result<()> {
    let Some(path) = env::var_os("GLASS_TETRIS_LOG") else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("create log file {}", path.to_string_lossy()))?;
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn load_config() -> Result<GameConfig> {
    let mut config = match env::args_os().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("read config {}", path.to_string_lossy()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parse config {}", path.to_string_lossy()))?
        }
        None => GameConfig::default(),
    };
    if let Ok(seed) = env::var("GLASS_TETRIS_SEED") {
        let seed = seed
            .trim()
            .parse::<u64>()
            .with_context(|| format!("GLASS_TETRIS_SEED is not a number: {seed}"))?;
        config.seed = Some(seed);
    }
    config.validate()?;
    Ok(config)
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<()> {
    let mut view = GameView::default();
    let mut driver = TickDriver::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let started = Instant::now();
    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.set_flash((started.elapsed().as_millis() / FLASH_MS) % 2 == 0);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!("quit at score {}", game.score());
                        return Ok(());
                    }
                    if let Some(command) = map_key(key, game.status()) {
                        let outcome = game.apply(command);
                        debug!("key {:?} -> {} {:?}", key.code, command.as_str(), outcome);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            let ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            if game.status() != GameStatus::Paused {
                driver.advance(game, ms);
            }
        }

        for event in game.take_events() {
            debug!("event {:?}", event);
        }
    }
}
