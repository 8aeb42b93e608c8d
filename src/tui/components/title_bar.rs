//! # TitleBar Component
//!
//! Top status line showing the application name and the latest status
//! message.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state, so it is trivial to test and reason about:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.status_message.clone());
//! title_bar.render(frame, title_area);
//! ```
//!
//! ### Conditional Formatting
//!
//! The title text changes based on state:
//!
//! 1. **Status message**: `"reckon | Division by zero"`
//! 2. **Default**: `"reckon"`
//!
//! ### Why not use a Block widget?
//!
//! A plain Span, because the title bar is always one line: no borders, no
//! padding, and tests can just check the text content.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Top status line component.
///
/// # Props
///
/// - `status_message`: Transient status (e.g. "Ready", "Division by zero")
pub struct TitleBar {
    pub status_message: String,
}

impl TitleBar {
    pub fn new(status_message: String) -> Self {
        Self { status_message }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            String::from("reckon")
        } else {
            format!("reckon | {}", self.status_message)
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}
