//! # Actions
//!
//! Everything that can happen in reckon becomes an [`Action`].
//! User taps the `7` key, or clicks the `7` button? That's `Action::Digit('7')`.
//! Presses Enter? That's `Action::Equals`.
//!
//! The [`update`] function takes the current state and an action, then
//! mutates the state in place and reports an [`Effect`] for the event loop.
//! No side effects here. I/O happens in the TUI layer.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! This makes every transition testable, and debuggable: log every action,
//! replay the exact session.

use crate::core::engine::Op;
use crate::core::state::App;

/// A discrete user action, one per button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A digit key, `'0'` through `'9'`.
    Digit(char),
    /// The decimal point key.
    Decimal,
    /// One of the four operator keys.
    Operator(Op),
    /// The equals key.
    Equals,
    /// The clear key.
    Clear,
    /// Leave the application.
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing beyond redrawing.
    None,
    /// Tear the terminal down and exit.
    Quit,
}

/// Applies one action to the application state.
///
/// Calculator actions are forwarded to the engine, then the status message
/// is refreshed so the title bar always reflects the latest transition.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Digit(digit) => app.engine.press_digit(digit),
        Action::Decimal => app.engine.press_decimal(),
        Action::Operator(op) => app.engine.press_operator(op),
        Action::Equals => app.engine.press_equals(),
        Action::Clear => app.engine.clear(),
        Action::Quit => return Effect::Quit,
    }

    app.status_message = if app.engine.is_error() {
        "Division by zero".to_string()
    } else if action == Action::Clear {
        "Cleared".to_string()
    } else {
        "Ready".to_string()
    };
    Effect::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{press_keys, test_app};

    #[test]
    fn test_digit_action_reaches_the_engine() {
        let mut app = test_app();
        update(&mut app, Action::Digit('7'));
        assert_eq!(app.engine.display(), "7");
    }

    #[test]
    fn test_quit_returns_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_calculator_actions_return_none_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Digit('1')), Effect::None);
        assert_eq!(update(&mut app, Action::Operator(Op::Add)), Effect::None);
        assert_eq!(update(&mut app, Action::Equals), Effect::None);
    }

    #[test]
    fn test_quit_leaves_the_engine_untouched() {
        let mut app = test_app();
        press_keys(&mut app, "12+");
        update(&mut app, Action::Quit);
        assert_eq!(app.engine.display(), "12+");
    }

    #[test]
    fn test_status_reports_division_by_zero() {
        let mut app = test_app();
        press_keys(&mut app, "5/0=");
        assert_eq!(app.status_message, "Division by zero");
    }

    #[test]
    fn test_status_reports_cleared() {
        let mut app = test_app();
        press_keys(&mut app, "5/0=c");
        assert_eq!(app.status_message, "Cleared");
        assert_eq!(app.engine.display(), "0");
    }

    #[test]
    fn test_status_returns_to_ready_after_error_recovery() {
        let mut app = test_app();
        press_keys(&mut app, "5/0=7");
        assert_eq!(app.status_message, "Ready");
        assert_eq!(app.engine.display(), "7");
    }
}
