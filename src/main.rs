//! Terminal runner (default binary).
//!
//! Drives the engine at a fixed 50 Hz from wall time, maps crossterm keys to
//! commands and redraws through the framebuffer renderer.

use std::sync::mpsc;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{self, Event as TermEvent, KeyEventKind};

use blockfall::core::{Engine, FixedStep, GameSnapshot, RandomPieces};
use blockfall::input::{
    handle_key_event, is_soft_drop_key, resolve_rotate, should_quit, KeyIntent, SoftDropLatch,
};
use blockfall::term::{
    music_tempo, Cue, FrameBuffer, GameView, HudInfo, TerminalRenderer, Viewport,
};
use blockfall::types::{Command, Event, TICK_MS};
use blockfall::{Config, HighScoreStore};

fn main() -> Result<()> {
    let config = Config::from_env();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut store = HighScoreStore::open(config.highscore_path.clone());
    let mut engine = Engine::with_source(RandomPieces::with_distribution(
        config.seed,
        config.distribution,
    ));

    // Listeners can't touch the engine; forward events and react below.
    let (tx, rx) = mpsc::channel::<Event>();
    engine.subscribe_all(move |event| {
        let _ = tx.send(event);
    });

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut latch = SoftDropLatch::new();
    let mut clock = FixedStep::default();
    let mut last = Instant::now();

    loop {
        // Render.
        engine.snapshot_into(&mut snap);
        let hud = HudInfo {
            max_score: store.max_score(),
            tempo: music_tempo(snap.stack_height),
            unsaved: store.save_error().is_some(),
        };
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, &hud, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        if event::poll(clock.until_next()).context("poll terminal events")? {
            match event::read().context("read terminal event")? {
                TermEvent::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(intent) = handle_key_event(key) {
                            let command = match intent {
                                KeyIntent::Command(command) => command,
                                KeyIntent::RotateOrStart => resolve_rotate(engine.is_running()),
                                KeyIntent::SoftDropHold => latch.press(),
                            };
                            if command == Command::Start {
                                latch.reset();
                                clock.reset();
                            }
                            engine.apply(command);
                        }
                    }
                    KeyEventKind::Release => {
                        if is_soft_drop_key(key.code) {
                            if let Some(command) = latch.release() {
                                engine.apply(command);
                            }
                        }
                    }
                },
                TermEvent::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let now = Instant::now();
        let due = clock.advance(now - last);
        last = now;
        for _ in 0..due {
            if let Some(command) = latch.update(TICK_MS) {
                engine.apply(command);
            }
            engine.tick();
        }

        // React to what the engine reported.
        for event in rx.try_iter() {
            let Some(cue) = Cue::for_event(event) else {
                continue;
            };
            if config.bell && cue.rings_bell() {
                term.bell();
            }
            if event == Event::Final {
                // A failed write is flagged on the HUD; the game goes on.
                store.submit(engine.score());
            }
        }
    }
}
