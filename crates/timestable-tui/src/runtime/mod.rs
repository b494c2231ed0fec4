//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Render ordering
//!
//! Events are reduced one at a time in arrival order. Whenever an event
//! bumps the selection revision (or otherwise changes what is on screen),
//! the whole grid is redrawn before the next event is reduced, so every
//! click lands on the positions the user is actually looking at.

mod handlers;

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind, MouseEventKind};
use timestable_core::Coord;
use timestable_core::config::Config;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::terminal::CrosstermTerminal;
use crate::{interrupt, render, terminal, update};

/// Tick cadence while the debug line is visible (frame-rate sampling).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle. Input wakes the loop immediately regardless.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(250);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop, panic,
/// or signal.
pub struct TuiRuntime {
    terminal: CrosstermTerminal,
    pub state: AppState,
    last_tick: Instant,
    last_render: Instant,
    /// Selection revision shown by the last draw.
    rendered_revision: Option<u64>,
}

impl TuiRuntime {
    /// Acquires the terminal and builds the initial state.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be set up.
    pub fn new(config: Config, initial: Coord) -> Result<Self> {
        // Panic hook goes in BEFORE entering the alternate screen.
        terminal::install_panic_hook();
        interrupt::init();
        interrupt::set_restore_hook(|| {
            let _ = terminal::restore_terminal();
        });
        interrupt::reset();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let state = AppState::new(&config, initial);

        let now = Instant::now();
        Ok(Self {
            terminal,
            state,
            last_tick: now,
            last_render: now,
            rendered_revision: None,
        })
    }

    /// Runs the main event loop until quit.
    ///
    /// # Errors
    /// Returns an error if terminal I/O fails.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_mouse()?;

        let result = self.event_loop();

        let _ = terminal::disable_mouse();

        result
    }

    fn event_loop(&mut self) -> Result<()> {
        self.draw()?;

        while !self.state.should_quit {
            if interrupt::is_interrupted() {
                tracing::info!("interrupted, quitting");
                self.state.should_quit = true;
                break;
            }

            let events = self.collect_events()?;

            for event in events {
                let redraw = redraw_requested(&event, self.state.show_debug_status);

                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
                if self.state.should_quit {
                    break;
                }

                if redraw || self.selection_changed() {
                    self.draw()?;
                }
            }
        }

        Ok(())
    }

    fn selection_changed(&self) -> bool {
        self.rendered_revision != Some(self.state.table.revision())
    }

    /// Redraws all cells and records the revision that is now on screen.
    fn draw(&mut self) -> Result<()> {
        let frame_ms = self.last_render.elapsed().as_millis().min(u128::from(u16::MAX)) as u16;
        self.last_render = Instant::now();

        self.terminal
            .draw(|frame| render::render(&self.state, frame))
            .context("Failed to draw frame")?;

        self.rendered_revision = Some(self.state.table.revision());
        self.state.status_line.on_frame(frame_ms);
        Ok(())
    }

    /// Collects terminal events, blocking until input or the next tick.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let tick_interval = if self.state.show_debug_status {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };
        let poll_duration = tick_interval.saturating_sub(self.last_tick.elapsed());

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain anything already buffered without blocking.
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::PersistShowBorders { show } => {
                handlers::persist_show_borders(show);
            }
        }
    }
}

/// Whether `event` changes the screen apart from the selection itself.
///
/// Selection changes are caught through the store revision; this covers
/// toggles, resizes and debug-line ticks. Pointer motion and key releases
/// never redraw on their own.
fn redraw_requested(event: &UiEvent, show_debug_status: bool) -> bool {
    match event {
        UiEvent::Tick => show_debug_status,
        UiEvent::Terminal(Event::Key(key)) => key.kind != KeyEventKind::Release,
        UiEvent::Terminal(Event::Mouse(mouse)) => matches!(mouse.kind, MouseEventKind::Down(_)),
        UiEvent::Terminal(Event::Resize(..)) => true,
        UiEvent::Terminal(_) => false,
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
