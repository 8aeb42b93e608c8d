//! # Display Component
//!
//! The calculator screen: renders the engine's display string verbatim,
//! right-aligned the way a desk calculator reads. When the expression
//! outgrows the panel the rightmost characters win, since that is where
//! the typing happens.
//!
//! Stateless: both fields are props, rebuilt from engine output each frame.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

/// Fixed height of the display panel: one content line plus borders.
pub const DISPLAY_HEIGHT: u16 = 3;

pub struct Display {
    /// The expression string, rendered verbatim (Prop)
    pub expression: String,
    /// Whether the engine sits in the error state (Prop)
    pub is_error: bool,
}

impl Display {
    pub fn new(expression: String, is_error: bool) -> Self {
        Self { expression, is_error }
    }

    /// The rightmost slice of the expression that fits in `width` columns.
    fn visible_tail(&self, width: u16) -> String {
        let width = width as usize;
        let len = self.expression.chars().count();
        if len <= width {
            return self.expression.clone();
        }
        self.expression.chars().skip(len - width).collect()
    }
}

impl Component for Display {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (style, border_style) = if self.is_error {
            (
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Red),
            )
        } else {
            (
                Style::default().add_modifier(Modifier::BOLD),
                Style::default().add_modifier(Modifier::DIM),
            )
        };

        let inner_width = area.width.saturating_sub(2);
        let panel = Paragraph::new(self.visible_tail(inner_width))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(border_style),
            )
            .style(style)
            .alignment(Alignment::Right);
        frame.render_widget(panel, area);
    }
}
