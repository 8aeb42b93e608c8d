//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::action::{Action, update};
use crate::core::engine::Op;
use crate::core::state::App;

/// Creates a fresh test App.
pub fn test_app() -> App {
    App::new()
}

/// Drives a whole key sequence through the reducer, one character per
/// press: digits, `.`, the four operator symbols, `=`, and `c` for clear.
/// Spaces are ignored so sequences can be written readably.
pub fn press_keys(app: &mut App, keys: &str) {
    for c in keys.chars() {
        let action = match c {
            '0'..='9' => Action::Digit(c),
            '.' => Action::Decimal,
            '=' => Action::Equals,
            'c' | 'C' => Action::Clear,
            ' ' => continue,
            _ => match Op::from_char(c) {
                Some(op) => Action::Operator(op),
                None => panic!("unmapped test key: {c}"),
            },
        };
        update(app, action);
    }
}
