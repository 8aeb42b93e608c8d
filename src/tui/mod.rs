//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The core engine could be wired to a different front end without
//! touching anything outside this directory.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Flashing** (a button was just pressed): polls every ~50ms so the
//!   highlight turns off crisply when its deadline passes.
//! - **Idle**: sleeps up to 250ms per poll, only redraws on events or
//!   terminal resize.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::style::Color;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{Keypad, PadKey};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// How long a pressed button stays lit.
const FLASH_DURATION: Duration = Duration::from_millis(120);

/// Poll timeout while a flash is live vs. idle.
const POLL_FLASHING: Duration = Duration::from_millis(50);
const POLL_IDLE: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component state: hover, press flash, hit-test cache
    pub keypad: Keypad,
}

impl TuiState {
    pub fn new(accent: Color) -> Self {
        Self {
            keypad: Keypad::new(accent),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Mouse capture gives us hover and click on the keypad. No cursor
        // handling needed: draw() keeps it hidden since nothing sets a
        // cursor position.
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Parses the configured accent into a terminal color. Accepts whatever
/// ratatui's `FromStr` does: names, `#rrggbb`, and 0-255 indexed.
fn accent_color(config: &ResolvedConfig) -> Color {
    match config.accent.parse() {
        Ok(color) => color,
        Err(_) => {
            warn!("Unrecognized accent color {:?}, using cyan", config.accent);
            Color::Cyan
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new();
    let mut tui = TuiState::new(accent_color(&config));

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame
    let mut flash_deadline: Option<Instant> = None;

    loop {
        // Turn the button flash off once its time is up
        if let Some(deadline) = flash_deadline
            && Instant::now() >= deadline
        {
            tui.keypad.clear_flash();
            flash_deadline = None;
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short while a flash is live, long when idle
        let timeout = if flash_deadline.is_some() {
            POLL_FLASHING
        } else {
            POLL_IDLE
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for tui_event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match tui_event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}
                TuiEvent::Quit => {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }
                // Mouse events go to the keypad; a click may come back as
                // a button press
                TuiEvent::MouseMove(_, _) | TuiEvent::MouseClick(_, _) => {
                    if let Some(key) = tui.keypad.handle_event(&tui_event) {
                        press_key(&mut app, &mut tui, key, &mut flash_deadline);
                    }
                }
                // Keyboard presses land on the same buttons clicks do
                TuiEvent::Digit(d) => {
                    press_key(&mut app, &mut tui, PadKey::Digit(d), &mut flash_deadline);
                }
                TuiEvent::Decimal => {
                    press_key(&mut app, &mut tui, PadKey::Decimal, &mut flash_deadline);
                }
                TuiEvent::Operator(op) => {
                    press_key(&mut app, &mut tui, PadKey::Op(op), &mut flash_deadline);
                }
                TuiEvent::Equals => {
                    press_key(&mut app, &mut tui, PadKey::Equals, &mut flash_deadline);
                }
                TuiEvent::Clear => {
                    press_key(&mut app, &mut tui, PadKey::Clear, &mut flash_deadline);
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    info!("reckon shut down cleanly");
    Ok(())
}

/// One button press, whatever the source: light the button up, run its
/// action through the reducer.
fn press_key(app: &mut App, tui: &mut TuiState, key: PadKey, flash_deadline: &mut Option<Instant>) {
    tui.keypad.flash(key);
    *flash_deadline = Some(Instant::now() + FLASH_DURATION);
    update(app, key.action());
    debug!("Pressed {:?}, display now {:?}", key, app.engine.display());
}
