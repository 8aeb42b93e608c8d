//! End-to-end button sequences through the public API, driving the
//! reducer exactly the way the TUI event loop does.

use reckon::core::action::{Action, Effect, update};
use reckon::core::engine::Op;
use reckon::core::state::App;

// ============================================================================
// Helper Functions
// ============================================================================

/// Presses a sequence of calculator keys: digits, `.`, the four operator
/// symbols, `=`, and `c` for clear. Spaces are ignored.
fn press(app: &mut App, keys: &str) {
    for c in keys.chars() {
        let action = match c {
            '0'..='9' => Action::Digit(c),
            '.' => Action::Decimal,
            '=' => Action::Equals,
            'c' => Action::Clear,
            ' ' => continue,
            _ => Action::Operator(Op::from_char(c).expect("operator key")),
        };
        update(app, action);
    }
}

/// Runs a sequence on a fresh calculator and returns the final display.
fn display_after(keys: &str) -> String {
    let mut app = App::new();
    press(&mut app, keys);
    app.engine.display().to_string()
}

// ============================================================================
// Arithmetic Scenarios
// ============================================================================

#[test]
fn test_simple_addition() {
    assert_eq!(display_after("12 + 3 ="), "15");
}

#[test]
fn test_chained_left_to_right_evaluation() {
    assert_eq!(display_after("1 + 2 + 3 + 4 ="), "10");
}

#[test]
fn test_no_operator_precedence() {
    // (2 + 3) * 4, not 2 + (3 * 4)
    assert_eq!(display_after("2 + 3 * 4 ="), "20");
    assert_eq!(display_after("10 - 4 / 2 ="), "3");
}

#[test]
fn test_decimal_arithmetic_rounds_float_noise() {
    assert_eq!(display_after("0.1 + 0.2 ="), "0.3");
}

#[test]
fn test_division_keeps_at_most_seven_decimals() {
    assert_eq!(display_after("1 / 3 ="), "0.3333333");
}

#[test]
fn test_each_operand_gets_its_own_decimal_point() {
    assert_eq!(display_after("1.5 + 2.25 ="), "3.75");
}

#[test]
fn test_result_seeds_the_next_calculation() {
    assert_eq!(display_after("12 + 3 = + 5 ="), "20");
}

#[test]
fn test_typing_after_equals_starts_a_new_number() {
    let mut app = App::new();
    press(&mut app, "12 + 3 = 7");
    assert_eq!(app.engine.current_input(), "7");
}

// ============================================================================
// Error Scenarios
// ============================================================================

#[test]
fn test_division_by_zero_shows_error() {
    assert_eq!(display_after("5 / 0 ="), "Error");
}

#[test]
fn test_chained_division_by_zero_shows_error() {
    assert_eq!(display_after("5 / 0 +"), "Error");
}

#[test]
fn test_dividing_zero_by_something_is_fine() {
    assert_eq!(display_after("0 / 5 ="), "0");
}

#[test]
fn test_error_sticks_until_cleared() {
    let mut app = App::new();
    press(&mut app, "5/0=");
    press(&mut app, "+ = *");
    assert_eq!(app.engine.display(), "Error");
    assert_eq!(app.status_message, "Division by zero");

    press(&mut app, "c");
    assert_eq!(app.engine.display(), "0");
    assert_eq!(app.status_message, "Cleared");
}

#[test]
fn test_typing_a_digit_after_error_starts_over() {
    let mut app = App::new();
    press(&mut app, "5/0= 8*2=");
    assert_eq!(app.engine.display(), "16");
    assert_eq!(app.status_message, "Ready");
}

// ============================================================================
// Entry Edge Cases
// ============================================================================

#[test]
fn test_operator_swap_keeps_the_last_one() {
    let mut app = App::new();
    press(&mut app, "7 + -");
    assert_eq!(app.engine.display(), "7-");
    assert_eq!(app.engine.pending_operator(), Some(Op::Sub));

    press(&mut app, "2 =");
    assert_eq!(app.engine.display(), "5");
}

#[test]
fn test_double_decimal_is_ignored() {
    let mut app = App::new();
    press(&mut app, "9.9.");
    assert_eq!(app.engine.current_input(), "9.9");
}

#[test]
fn test_leading_zero_collapses() {
    assert_eq!(display_after("007"), "7");
}

#[test]
fn test_clear_resets_everything() {
    let mut app = App::new();
    press(&mut app, "9.9 + 1 c");
    assert_eq!(app.engine.display(), "0");
    assert_eq!(app.engine.current_input(), "0");
    assert_eq!(app.engine.pending_operator(), None);
    assert!(!app.engine.awaiting_operand());
}

// ============================================================================
// Reducer-Level Behavior
// ============================================================================

#[test]
fn test_quit_action_produces_quit_effect() {
    let mut app = App::new();
    assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
}

#[test]
fn test_calculator_actions_produce_no_effect() {
    let mut app = App::new();
    assert_eq!(update(&mut app, Action::Digit('1')), Effect::None);
    assert_eq!(update(&mut app, Action::Operator(Op::Add)), Effect::None);
    assert_eq!(update(&mut app, Action::Equals), Effect::None);
    assert_eq!(update(&mut app, Action::Clear), Effect::None);
}

#[test]
fn test_status_message_follows_the_session() {
    let mut app = App::new();
    assert_eq!(app.status_message, "Ready");

    press(&mut app, "5/0=");
    assert_eq!(app.status_message, "Division by zero");

    press(&mut app, "c");
    assert_eq!(app.status_message, "Cleared");

    press(&mut app, "1");
    assert_eq!(app.status_message, "Ready");
}
