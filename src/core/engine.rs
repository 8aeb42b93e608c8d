//! # Expression Engine
//!
//! The calculator itself: a small state machine fed one button press at a
//! time. Digits and the decimal point grow the number being typed, operators
//! stage a pending binary operation, equals folds the staged operation into
//! a result, clear starts over.
//!
//! ```text
//! "0" ──digit──▶ typing ──operator──▶ pending ──digit──▶ typing ──equals──▶ result
//!                  ▲                                                          │
//!                  └──────────────────────── clear ◀──────────────────────────┘
//! ```
//!
//! Evaluation is strictly left to right: `2 + 3 * 4` is `(2 + 3) * 4 = 20`.
//! There is no precedence and no expression re-parsing. The display string
//! grows as keys arrive, and the numeric work happens on the two operands
//! the engine tracks alongside it.

use std::fmt;

/// What the display shows after a division by zero.
pub const ERROR_DISPLAY: &str = "Error";

/// Characters that separate numeric segments in the display expression.
const OPERATOR_CHARS: [char; 4] = ['+', '-', '*', '/'];

/// Results keep at most seven decimal places. This absorbs binary float
/// noise, so `0.1 + 0.2` reads back as `0.3`.
const ROUND_FACTOR: f64 = 1e7;

// ── Operators ───────────────────────────────────────────────────────────────

/// The four binary operators, as a proper enum so dispatch stays exhaustive
/// instead of stringly keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// The character rendered into the display expression.
    pub const fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    /// Parses one of the four canonical operator characters.
    pub fn from_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Add),
            '-' => Some(Op::Sub),
            '*' => Some(Op::Mul),
            '/' => Some(Op::Div),
            _ => None,
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Division checks the divisor before dividing; the other three
    /// operations are total. Rounding is the caller's job.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, MathError> {
        match self {
            Op::Add => Ok(a + b),
            Op::Sub => Ok(a - b),
            Op::Mul => Ok(a * b),
            Op::Div => {
                if b == 0.0 {
                    Err(MathError::DivisionByZero)
                } else {
                    Ok(a / b)
                }
            }
        }
    }
}

/// The only way a four-function calculation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    DivisionByZero,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for MathError {}

// ── Engine ──────────────────────────────────────────────────────────────────

/// Calculator state. Owned by [`crate::core::state::App`], mutated only
/// through the five press methods, read through the accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    /// The number currently being typed, or the last computed result.
    current_input: String,
    /// What the user sees: the entered expression, a result, or "Error".
    display: String,
    /// Left operand of the staged operation, once an operator is in.
    first_operand: Option<f64>,
    /// The staged operator, if any.
    operator: Option<Op>,
    /// True right after an operator: the next digit starts a new number.
    awaiting_operand: bool,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            current_input: "0".to_string(),
            display: "0".to_string(),
            first_operand: None,
            operator: None,
            awaiting_operand: false,
        }
    }

    // ── Accessors ───────────────────────────────────────────────────────────

    /// The string the UI renders verbatim after every press.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    pub fn pending_operator(&self) -> Option<Op> {
        self.operator
    }

    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    pub fn awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    /// True while a division by zero is on screen. Operators and equals
    /// leave the engine in this state; clear or a fresh digit exits it.
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    // ── Button presses ──────────────────────────────────────────────────────

    /// Handles a digit key, `0` through `9`.
    ///
    /// A lone `"0"` is replaced rather than extended, so typing `0` `7`
    /// yields `"7"`, not `"07"`. After an operator the digit starts the
    /// second operand. After an error it starts the calculator over.
    pub fn press_digit(&mut self, digit: char) {
        debug_assert!(digit.is_ascii_digit());
        if self.is_error() {
            // Recovery rule: the first digit typed over "Error" begins a
            // fresh calculation instead of appending to the error text.
            self.clear();
        }
        if self.awaiting_operand {
            self.current_input = digit.to_string();
            self.display.push(digit);
            self.awaiting_operand = false;
        } else {
            push_or_replace_zero(&mut self.current_input, digit);
            push_or_replace_zero(&mut self.display, digit);
        }
    }

    /// Handles the decimal point key.
    ///
    /// At most one point per numeric segment. The check splits the display
    /// on operator characters and inspects the last piece, so a second
    /// press inside the same number is ignored while the next operand can
    /// still get a point of its own.
    pub fn press_decimal(&mut self) {
        if self.is_error() {
            self.clear();
        }
        if self.awaiting_operand {
            // Starting the second operand with "." reads as "0."
            self.current_input = "0.".to_string();
            self.display.push_str("0.");
            self.awaiting_operand = false;
            return;
        }
        if last_segment(&self.display).contains('.') {
            return;
        }
        self.current_input.push('.');
        self.display.push('.');
    }

    /// Handles one of the four operator keys.
    ///
    /// Two operators in a row swap the staged operator. A chained entry
    /// (`3 + 4 +`) folds the staged operation first, so the running value
    /// is always ready to be the next left operand.
    pub fn press_operator(&mut self, op: Op) {
        if self.operator.is_some() && self.awaiting_operand {
            // Operator swap, nothing to compute. The display only lacks a
            // trailing symbol here when it shows the error text, which
            // must stay untouched.
            if ends_with_operator(&self.display) {
                push_operator_symbol(&mut self.display, op);
            }
            self.operator = Some(op);
            return;
        }

        match (self.first_operand, self.operator) {
            // First operator of the calculation: capture the left operand.
            (None, _) => self.first_operand = Some(parse_operand(&self.current_input)),
            // Chained entry: fold the staged operation so the running
            // value becomes the next left operand.
            (Some(first), Some(staged)) => {
                let second = parse_operand(&self.current_input);
                match staged.apply(first, second) {
                    Ok(value) => {
                        let rounded = round_result(value);
                        self.current_input = format_number(rounded);
                        self.first_operand = Some(rounded);
                    }
                    Err(MathError::DivisionByZero) => {
                        self.display = ERROR_DISPLAY.to_string();
                        self.first_operand = None;
                    }
                }
            }
            // Left operand already captured, nothing staged to fold.
            (Some(_), None) => {}
        }

        if !self.is_error() {
            push_operator_symbol(&mut self.display, op);
        }
        self.awaiting_operand = true;
        self.operator = Some(op);
    }

    /// Handles the equals key.
    ///
    /// Folds the staged operation into a final result and leaves the
    /// engine ready for what comes next: an operator press reuses the
    /// result as a left operand, a digit press starts a new number.
    /// Nothing happens when no operator is staged or the second operand
    /// was never started.
    pub fn press_equals(&mut self) {
        if self.awaiting_operand {
            return;
        }
        let (Some(op), Some(first)) = (self.operator, self.first_operand) else {
            return;
        };

        let second = parse_operand(&self.current_input);
        match op.apply(first, second) {
            Ok(value) => {
                self.display = format_number(round_result(value));
                self.current_input = self.display.clone();
            }
            Err(MathError::DivisionByZero) => {
                self.display = ERROR_DISPLAY.to_string();
            }
        }

        self.first_operand = None;
        self.operator = None;
        self.awaiting_operand = true;
    }

    /// Handles the clear key: back to the power-on state.
    pub fn clear(&mut self) {
        *self = Engine::new();
    }
}

// ── Number handling ─────────────────────────────────────────────────────────

/// Appends `digit`, except that a lone `"0"` is replaced so numbers never
/// grow leading zeros.
fn push_or_replace_zero(text: &mut String, digit: char) {
    if text == "0" {
        text.clear();
    }
    text.push(digit);
}

/// Appends an operator symbol, replacing a trailing one so at most a single
/// operator ever trails the expression.
fn push_operator_symbol(expr: &mut String, op: Op) {
    if ends_with_operator(expr) {
        expr.pop();
    }
    expr.push(op.symbol());
}

fn ends_with_operator(expr: &str) -> bool {
    expr.ends_with(OPERATOR_CHARS)
}

/// The numeric segment after the last operator, or the whole expression
/// when no operator has been entered yet.
fn last_segment(expr: &str) -> &str {
    expr.rsplit(OPERATOR_CHARS).next().unwrap_or(expr)
}

/// Rounds a result to seven decimal places and normalizes negative zero,
/// so `-5 * 0` reads "0" rather than "-0". Magnitudes of 1e16 and up
/// pass through untouched: past 2^53 every f64 is already whole, and
/// scaling by the round factor can overflow to infinity.
fn round_result(value: f64) -> f64 {
    if value.abs() >= 1e16 {
        return value;
    }
    let rounded = (value * ROUND_FACTOR).round() / ROUND_FACTOR;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Formats a result for the display: plain decimal notation, no trailing
/// zeros. Rust's float `Display` already guarantees both (it never emits
/// exponent form), which keeps the per-segment decimal check valid on
/// results too.
fn format_number(value: f64) -> String {
    value.to_string()
}

/// Parses a number the engine built itself: digits, at most one dot, or a
/// previously formatted result. Cannot fail for those inputs; falls back
/// to zero rather than panicking if it ever did.
fn parse_operand(input: &str) -> f64 {
    input.parse().unwrap_or(0.0)
}
