//! Core calculator engine: operators, bounded history, and the state machine.
//!
//! Everything in here is pure and platform-independent; the TUI and WASM
//! shells only ever call into this module.

pub mod history;
mod operations;
pub mod state;

pub use history::{History, HistoryEntry};
pub use operations::{BinaryOp, UnaryOp};
pub use state::{CalcInput, CalculatorState, MAX_ENTRY_LEN};

use thiserror::Error;

/// Result type for arithmetic primitives
pub type CalcResult<T> = Result<T, ArithmeticError>;

/// Arithmetic failure, surfaced to the user as the single `"Error"` display.
///
/// The variants exist for logging and tests; the presentation layer never
/// distinguishes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// Division by zero attempted
    #[error("division by zero")]
    DivisionByZero,
    /// Square root of a negative operand
    #[error("square root of a negative number")]
    NegativeSquareRoot,
    /// Logarithm of zero or a negative operand
    #[error("logarithm of a non-positive number")]
    NonPositiveLogarithm,
    /// Factorial of a negative operand
    #[error("factorial of a negative number")]
    NegativeFactorial,
    /// Factorial of a non-integer operand
    #[error("factorial of a non-integer")]
    NonIntegerFactorial,
    /// Result overflowed to infinity
    #[error("result exceeds the representable range")]
    Overflow,
    /// Result is NaN (e.g. a negative base raised to a fractional power)
    #[error("result is not a number")]
    NotANumber,
}

/// Formats a value the way the display shows it: integers without a decimal
/// point, everything else with up to 8 decimal places and trailing zeros
/// trimmed. Negative zero renders as `"0"`.
///
/// Used for the display, history lines, and the memory indicator, so all
/// three always agree on the text for a given value.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let s = format!("{value:.8}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
