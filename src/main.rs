//! Terminal runner (default binary).
//!
//! Single-threaded loop: render, poll input until the next frame is due, then
//! advance the session by the elapsed frame time. The high-score file is only
//! written when a game ends.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use log::{info, warn};

use blockfall::config::GameConfig;
use blockfall::core::{GameSnapshot, HighScores, LockEvent, Session};
use blockfall::input::{handle_key_event, is_press, should_quit};
use blockfall::logging;
use blockfall::store::HighScoreStore;
use blockfall::term::{FlashTimer, FrameBuffer, GameView, TerminalRenderer, ViewEffects, Viewport};
use blockfall::types::TETRIS_FLASH_MS;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    logging::init(config.log_path.as_deref())?;

    let store = HighScoreStore::new(&config.high_score_path);
    let high_scores = load_high_scores(&store);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &store, high_scores);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn load_high_scores(store: &HighScoreStore) -> HighScores {
    match store.load() {
        Ok(ledger) => ledger,
        Err(e) => {
            warn!("ignoring unreadable high scores: {:#}", anyhow::Error::new(e));
            HighScores::new()
        }
    }
}

fn run(
    term: &mut TerminalRenderer,
    config: &GameConfig,
    store: &HighScoreStore,
    high_scores: HighScores,
) -> Result<()> {
    let seed = config.seed_or_clock();
    info!("starting game: seed={seed} frame_ms={}", config.frame_ms);

    let mut session = Session::new(seed, high_scores);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut flash = FlashTimer::new();

    let frame = Duration::from_millis(config.frame_ms as u64);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        let effects = ViewEffects { flash: flash.lit() };
        view.render_into_with_effects(&snap, effects, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        // Input with timeout until the next frame.
        let timeout = frame.checked_sub(last_frame.elapsed()).unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if is_press(&key) => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Frame step: at most one gravity step per frame.
        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            session.tick(elapsed_ms);
            flash.advance(elapsed_ms);
        }

        if let Some(event) = session.take_last_event() {
            on_lock(event, &session, store, &mut flash);
        }
    }
}

fn on_lock(event: LockEvent, session: &Session, store: &HighScoreStore, flash: &mut FlashTimer) {
    if event.tetris {
        flash.trigger(TETRIS_FLASH_MS);
    }
    if event.game_over {
        if let Err(e) = store.save(session.high_scores()) {
            warn!("failed to save high scores: {:#}", anyhow::Error::new(e));
        }
    }
}
