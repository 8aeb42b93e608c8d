//! # Keypad Component
//!
//! The button grid: a wide clear key on top, then four rows of digits and
//! operators laid out like a desk calculator.
//!
//! ```text
//! ┌───────────────┐
//! │       C       │
//! ├───┬───┬───┬───┤
//! │ 7 │ 8 │ 9 │ / │
//! ├───┼───┼───┼───┤
//! │ 4 │ 5 │ 6 │ * │
//! ├───┼───┼───┼───┤
//! │ 1 │ 2 │ 3 │ - │
//! ├───┼───┼───┼───┤
//! │ 0 │ . │ = │ + │
//! └───┴───┴───┴───┘
//! ```
//!
//! ## Responsibilities
//!
//! - Render every button, highlighting the hovered one and flashing the
//!   last pressed one
//! - Hit-test mouse coordinates back to buttons
//! - Emit the pressed [`PadKey`] so the event loop can run it through the
//!   reducer
//!
//! ## State Management
//!
//! Hover and flash are internal presentation state. The accent color is a
//! prop from the resolved config. The rendered area is cached during
//! `render` because hit-testing happens later, when a mouse event arrives
//! with screen coordinates and nothing else.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::core::action::Action;
use crate::core::engine::Op;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const GRID_COLS: usize = 4;
const GRID_ROWS: usize = 4;

/// One keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadKey {
    Digit(char),
    Decimal,
    Op(Op),
    Equals,
    Clear,
}

impl PadKey {
    /// The single-character label printed on the button.
    pub fn label(self) -> char {
        match self {
            PadKey::Digit(d) => d,
            PadKey::Decimal => '.',
            PadKey::Op(op) => op.symbol(),
            PadKey::Equals => '=',
            PadKey::Clear => 'C',
        }
    }

    /// The core action this button triggers.
    pub fn action(self) -> Action {
        match self {
            PadKey::Digit(d) => Action::Digit(d),
            PadKey::Decimal => Action::Decimal,
            PadKey::Op(op) => Action::Operator(op),
            PadKey::Equals => Action::Equals,
            PadKey::Clear => Action::Clear,
        }
    }
}

/// Button placement, desk-calculator style. The clear key sits above this
/// grid in a full-width row of its own.
const GRID: [[PadKey; GRID_COLS]; GRID_ROWS] = [
    [PadKey::Digit('7'), PadKey::Digit('8'), PadKey::Digit('9'), PadKey::Op(Op::Div)],
    [PadKey::Digit('4'), PadKey::Digit('5'), PadKey::Digit('6'), PadKey::Op(Op::Mul)],
    [PadKey::Digit('1'), PadKey::Digit('2'), PadKey::Digit('3'), PadKey::Op(Op::Sub)],
    [PadKey::Digit('0'), PadKey::Decimal, PadKey::Equals, PadKey::Op(Op::Add)],
];

/// The button grid.
///
/// # Props
///
/// - `accent`: Highlight color for hover and press flash (from config)
///
/// # State
///
/// - `hovered`: Button currently under the mouse
/// - `pressed`: Button currently lit by a press flash
/// - `last_area`: Where the keypad last rendered, for hit-testing
pub struct Keypad {
    /// Highlight color (Prop)
    pub accent: Color,
    /// Button under the mouse (Internal State)
    hovered: Option<PadKey>,
    /// Button lit by the press flash (Internal State)
    pressed: Option<PadKey>,
    /// Area of the last render (Internal State)
    last_area: Option<Rect>,
}

impl Keypad {
    pub fn new(accent: Color) -> Self {
        Self {
            accent,
            hovered: None,
            pressed: None,
            last_area: None,
        }
    }

    /// Lights a button up. The event loop clears it again a moment later,
    /// so keyboard presses flash the same way mouse clicks do.
    pub fn flash(&mut self, key: PadKey) {
        self.pressed = Some(key);
    }

    pub fn clear_flash(&mut self) {
        self.pressed = None;
    }

    /// Splits an area into the wide clear row plus the 4x4 grid.
    fn areas(area: Rect) -> (Rect, [[Rect; GRID_COLS]; GRID_ROWS]) {
        let rows = Layout::vertical([Constraint::Fill(1); GRID_ROWS + 1]).split(area);
        let mut grid = [[Rect::default(); GRID_COLS]; GRID_ROWS];
        for (r, row_area) in rows.iter().skip(1).enumerate() {
            let cells = Layout::horizontal([Constraint::Fill(1); GRID_COLS]).split(*row_area);
            for (c, cell) in cells.iter().enumerate() {
                grid[r][c] = *cell;
            }
        }
        (rows[0], grid)
    }

    /// Which button sits at the given screen position, if any.
    ///
    /// Uses the area cached by the last render, so it returns `None`
    /// before the first frame. The layout math is identical to `render`,
    /// which is what keeps clicks and pixels in agreement.
    pub fn key_at(&self, column: u16, row: u16) -> Option<PadKey> {
        let area = self.last_area?;
        let position = Position::new(column, row);
        if !area.contains(position) {
            return None;
        }
        let (clear_area, grid) = Self::areas(area);
        if clear_area.contains(position) {
            return Some(PadKey::Clear);
        }
        for (r, row_areas) in grid.iter().enumerate() {
            for (c, cell) in row_areas.iter().enumerate() {
                if cell.contains(position) {
                    return Some(GRID[r][c]);
                }
            }
        }
        None
    }

    /// Text and border styles for one button, depending on whether it is
    /// flashed, hovered, or plain.
    fn button_style(&self, key: PadKey) -> (Style, Style) {
        if self.pressed == Some(key) {
            let lit = Style::default()
                .fg(Color::Black)
                .bg(self.accent)
                .add_modifier(Modifier::BOLD);
            (lit, Style::default().fg(self.accent))
        } else if self.hovered == Some(key) {
            let hover = Style::default().fg(self.accent).add_modifier(Modifier::BOLD);
            (hover, Style::default().fg(self.accent))
        } else {
            (Style::default(), Style::default().add_modifier(Modifier::DIM))
        }
    }

    fn render_button(&self, frame: &mut Frame, area: Rect, key: PadKey) {
        let (style, border_style) = self.button_style(key);

        // Pad the label down so it sits centered in tall buttons
        let inner_height = area.height.saturating_sub(2);
        let top_padding = inner_height.saturating_sub(1) / 2;
        let mut lines = vec![Line::default(); top_padding as usize];
        lines.push(Line::from(key.label().to_string()));

        let button = Paragraph::new(lines)
            .block(Block::bordered().border_style(border_style))
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(button, area);
    }
}

impl Component for Keypad {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.last_area = Some(area);
        let (clear_area, grid) = Self::areas(area);
        self.render_button(frame, clear_area, PadKey::Clear);
        for (r, row_areas) in grid.iter().enumerate() {
            for (c, cell) in row_areas.iter().enumerate() {
                self.render_button(frame, *cell, GRID[r][c]);
            }
        }
    }
}

impl EventHandler for Keypad {
    type Event = PadKey;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::MouseMove(column, row) => {
                self.hovered = self.key_at(*column, *row);
                None
            }
            TuiEvent::MouseClick(column, row) => self.key_at(*column, *row),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    /// Renders a keypad once so its hit-testing area is populated.
    /// 40x20 splits evenly: five rows of height 4, four columns of width 10.
    fn rendered_keypad() -> (Keypad, Terminal<TestBackend>) {
        let backend = TestBackend::new(40, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut keypad = Keypad::new(Color::Cyan);
        terminal.draw(|f| keypad.render(f, f.area())).unwrap();
        (keypad, terminal)
    }

    #[test]
    fn test_labels() {
        assert_eq!(PadKey::Digit('7').label(), '7');
        assert_eq!(PadKey::Decimal.label(), '.');
        assert_eq!(PadKey::Op(Op::Div).label(), '/');
        assert_eq!(PadKey::Equals.label(), '=');
        assert_eq!(PadKey::Clear.label(), 'C');
    }

    #[test]
    fn test_key_actions() {
        assert_eq!(PadKey::Digit('3').action(), Action::Digit('3'));
        assert_eq!(PadKey::Decimal.action(), Action::Decimal);
        assert_eq!(PadKey::Op(Op::Add).action(), Action::Operator(Op::Add));
        assert_eq!(PadKey::Equals.action(), Action::Equals);
        assert_eq!(PadKey::Clear.action(), Action::Clear);
    }

    #[test]
    fn test_render_shows_every_label() {
        let (_, terminal) = rendered_keypad();
        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        for label in ['C', '7', '8', '9', '/', '4', '5', '6', '*', '1', '2', '3', '-', '0', '.', '=', '+'] {
            assert!(text.contains(label), "missing button label {label:?}");
        }
    }

    #[test]
    fn test_hit_test_before_first_render_is_none() {
        let keypad = Keypad::new(Color::Cyan);
        assert_eq!(keypad.key_at(1, 1), None);
    }

    #[test]
    fn test_hit_test_finds_clear_row_and_grid_corners() {
        let (keypad, _) = rendered_keypad();
        // Clear row spans the full width of rows 0..4
        assert_eq!(keypad.key_at(0, 0), Some(PadKey::Clear));
        assert_eq!(keypad.key_at(39, 3), Some(PadKey::Clear));
        // Grid starts at row 4; top-left cell is '7'
        assert_eq!(keypad.key_at(0, 4), Some(PadKey::Digit('7')));
        // Bottom-left is '0', bottom-right is '+'
        assert_eq!(keypad.key_at(0, 19), Some(PadKey::Digit('0')));
        assert_eq!(keypad.key_at(39, 19), Some(PadKey::Op(Op::Add)));
    }

    #[test]
    fn test_hit_test_outside_area_is_none() {
        let (keypad, _) = rendered_keypad();
        assert_eq!(keypad.key_at(50, 5), None);
        assert_eq!(keypad.key_at(5, 30), None);
    }

    #[test]
    fn test_mouse_click_emits_the_hit_key() {
        let (mut keypad, _) = rendered_keypad();
        let emitted = keypad.handle_event(&TuiEvent::MouseClick(5, 5));
        assert_eq!(emitted, Some(PadKey::Digit('7')));
    }

    #[test]
    fn test_mouse_click_outside_emits_nothing() {
        let (mut keypad, _) = rendered_keypad();
        assert_eq!(keypad.handle_event(&TuiEvent::MouseClick(50, 5)), None);
    }

    #[test]
    fn test_mouse_move_tracks_hover_without_emitting() {
        let (mut keypad, _) = rendered_keypad();
        let emitted = keypad.handle_event(&TuiEvent::MouseMove(5, 5));
        assert_eq!(emitted, None);
        assert_eq!(keypad.hovered, Some(PadKey::Digit('7')));

        // Moving off the pad clears the hover again
        keypad.handle_event(&TuiEvent::MouseMove(50, 5));
        assert_eq!(keypad.hovered, None);
    }

    #[test]
    fn test_flash_paints_the_pressed_button_with_the_accent() {
        let backend = TestBackend::new(40, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut keypad = Keypad::new(Color::Cyan);
        keypad.flash(PadKey::Equals);
        terminal.draw(|f| keypad.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let equals_cell = buffer
            .content()
            .iter()
            .find(|c| c.symbol() == "=")
            .unwrap();
        assert_eq!(equals_cell.style().bg, Some(Color::Cyan));
    }

    #[test]
    fn test_clear_flash_resets() {
        let mut keypad = Keypad::new(Color::Cyan);
        keypad.flash(PadKey::Clear);
        assert_eq!(keypad.pressed, Some(PadKey::Clear));
        keypad.clear_flash();
        assert_eq!(keypad.pressed, None);
    }
}
