//! Frame layout and drawing: title line on top, the display panel under
//! it, and the keypad filling the rest.

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::display::DISPLAY_HEIGHT;
use crate::tui::components::{Display, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(DISPLAY_HEIGHT), Min(0)]);
    let [title_area, display_area, keypad_area] = layout.areas(frame.area());

    // Title bar
    let mut title_bar = TitleBar::new(app.status_message.clone());
    title_bar.render(frame, title_area);

    // Calculator screen
    let mut display = Display::new(app.engine.display().to_string(), app.engine.is_error());
    display.render(frame, display_area);

    // Keypad is persistent TUI state (hover, flash, hit-test cache)
    tui.keypad.render(frame, keypad_area);
}
