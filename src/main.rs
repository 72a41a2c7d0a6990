//! Terminal lunar lander (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from the `term`
//! crate. The simulation advances in fixed ticks regardless of how fast
//! frames are drawn.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_lander::core::scene::PLAYER_SHEET;
use tui_lander::core::{DrawList, Session};
use tui_lander::input::{should_quit, InputHandler};
use tui_lander::term::{FrameBuffer, GameView, HudView, Palette, TerminalRenderer, Viewport};
use tui_lander::LanderConfig;

/// Upper bound on how long one frame waits for input (~120 fps).
const FRAME_BUDGET: Duration = Duration::from_millis(8);

fn main() -> Result<()> {
    let config = LanderConfig::from_env();
    config.init_logging()?;
    log::info!("starting tui-lander ({:?})", config.asset_source());

    let palette = match Palette::from_source(&config.asset_source(), PLAYER_SHEET) {
        Ok(palette) => palette,
        Err(err) => {
            log::error!("{err}");
            return Err(err.into());
        }
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, palette);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("{err:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &LanderConfig, palette: Palette) -> Result<()> {
    let mut session = Session::new();
    let view = GameView::default().with_palette(palette);
    let mut input =
        InputHandler::new().with_key_release_timeout_ms(config.key_release_timeout_ms);

    let mut fb = FrameBuffer::new(0, 0);
    let mut sprites = DrawList::new();
    let mut last_frame = Instant::now();

    loop {
        // Input, waiting at most until the next frame is due.
        let timeout = FRAME_BUDGET.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            loop {
                match event::read()? {
                    Event::Key(key) => {
                        if key.kind != KeyEventKind::Release && should_quit(key) {
                            log::info!(
                                "quit after {} ticks ({})",
                                session.ticks(),
                                session.outcome().as_str()
                            );
                            return Ok(());
                        }
                        input.handle_key_event(key);
                    }
                    Event::Resize(..) => term.invalidate(),
                    _ => {}
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        // Simulate.
        let now = Instant::now();
        let elapsed = now.duration_since(last_frame);
        last_frame = now;
        session.frame(elapsed, input.controls_at(now));

        // Render.
        session.draw_list_into(&mut sprites);
        let hud = HudView::from_session(&session);
        let viewport = term.viewport().unwrap_or(Viewport::new(80, 24));
        view.render_into(&sprites, Some(&hud), viewport, &mut fb);
        term.draw_swap(&mut fb)?;
    }
}
