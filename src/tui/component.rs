use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components follow the same pattern everywhere in the interface:
/// - They receive data via props (struct fields).
/// - They may hold internal state.
/// - They render to a `Frame` within a given `Rect`.
///
/// # Mutability
///
/// The `render` method takes `&mut self` so components can update internal
/// caches during the pass. The keypad uses this to remember the area it
/// rendered into, which is what makes mouse hit-testing possible later.
/// This aligns with Ratatui's `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level
    /// event ("this button was pressed") for the caller to act on.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
