//! Terminal snake runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer.
//! Each loop iteration renders the current snapshot, waits for input until
//! the next tick is due, applies the resulting command, then ticks.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::{debug, error, info};

use snake_arcade::core::{GameSnapshot, ScreenFlow};
use snake_arcade::input::{handle_key_event, should_quit};
use snake_arcade::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use snake_arcade::types::Command;
use snake_arcade::{logging, GameConfig, ScoreStore};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    logging::init(&config)?;

    let grid = config.grid().context("invalid grid size")?;
    let store = ScoreStore::new(&config.scores_path);
    let mut flow = ScreenFlow::new(grid, config.seed);
    flow.load_history(store.load()?);
    info!(
        seed = config.seed,
        width = config.grid_width,
        height = config.grid_height,
        "starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut flow, &store, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exiting");
    result
}

fn run(
    term: &mut TerminalRenderer,
    flow: &mut ScreenFlow,
    store: &ScoreStore,
    config: &GameConfig,
) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut last_tick = Instant::now();

    loop {
        // Render.
        flow.snapshot_into(&mut snap);
        let viewport = term.viewport().unwrap_or(Viewport::new(80, 24));
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let interval = flow
            .session()
            .speed_tier()
            .tick_interval(config.base_fps);
        let timeout = interval
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    let screen = flow.screen();
                    if should_quit(screen, key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(screen, key) {
                        if flow.apply(command) {
                            debug!(?command, "command applied");
                        }
                        // A new round gets a full first step.
                        if matches!(command, Command::ConfirmName | Command::Restart) {
                            last_tick = Instant::now();
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= interval {
            last_tick = Instant::now();
            flow.tick();
        }

        if flow.take_history_dirty() {
            if let Err(e) = store.save(&flow.export_history()) {
                error!(error = ?e, "failed to save scores");
            }
        }
    }
}
