//! The calculator state machine.
//!
//! One explicit state value advanced by pure transitions: every user action
//! is a [`CalcInput`], and [`CalculatorState::apply`] maps the current state
//! plus one input to the next state. Nothing here renders or performs I/O,
//! so every transition is testable in isolation and the shells stay thin.

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::history::History;
use crate::core::operations::check_result;
use crate::core::{format_value, ArithmeticError, BinaryOp, UnaryOp};

/// Maximum length of a typed entry, in characters.
///
/// Applies to digit appends only; computed results and sign flips are not
/// clamped.
pub const MAX_ENTRY_LEN: usize = 12;

/// Display sentinel for arithmetic failures
const ERROR_DISPLAY: &str = "Error";

/// A discrete user input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalcInput {
    /// A digit key, 0–9
    Digit(u8),
    /// The decimal point key
    Decimal,
    /// A binary operator key
    Operator(BinaryOp),
    /// The `=` key
    Equals,
    /// AC: reset entry, pending operation, and waiting flag
    ClearAll,
    /// CE: reset the current entry only
    ClearEntry,
    /// Drop the last typed character
    Backspace,
    /// Flip the sign of the current entry
    ToggleSign,
    /// Apply a scientific function to the current entry
    Unary(UnaryOp),
    /// M+: add the current entry to the memory register
    MemoryAdd,
    /// M-: subtract the current entry from the memory register
    MemorySubtract,
    /// MR: recall the memory register into the display
    MemoryRecall,
    /// MC: reset the memory register to zero
    MemoryClear,
    /// Empty the calculation history
    ClearHistory,
}

/// The complete calculator state.
///
/// `display` always holds a valid numeric literal or the `"Error"` sentinel;
/// `"Error"` is a sink exited only by a fresh digit or one of the clears.
#[derive(Debug, Clone)]
pub struct CalculatorState {
    display: String,
    previous_value: Option<f64>,
    operation: Option<BinaryOp>,
    waiting_for_value: bool,
    history: History,
    memory: f64,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Creates the initial state: display `"0"`, nothing pending, empty
    /// history, zero memory
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            previous_value: None,
            operation: None,
            waiting_for_value: false,
            history: History::default(),
            memory: 0.0,
        }
    }

    /// Advances the state by one input event
    #[must_use]
    pub fn apply(self, input: CalcInput) -> Self {
        trace!(?input, display = %self.display, "applying input");
        match input {
            CalcInput::Digit(d) => self.digit(d),
            CalcInput::Decimal => self.decimal_point(),
            CalcInput::Operator(op) => self.operator(op),
            CalcInput::Equals => self.equals(),
            CalcInput::ClearAll => self.clear_all(),
            CalcInput::ClearEntry => self.clear_entry(),
            CalcInput::Backspace => self.backspace(),
            CalcInput::ToggleSign => self.toggle_sign(),
            CalcInput::Unary(op) => self.unary(op),
            CalcInput::MemoryAdd => self.memory_adjust(1.0),
            CalcInput::MemorySubtract => self.memory_adjust(-1.0),
            CalcInput::MemoryRecall => self.memory_recall(),
            CalcInput::MemoryClear => self.memory_clear(),
            CalcInput::ClearHistory => self.clear_history(),
        }
    }

    /// Advances the state by a sequence of input events
    #[must_use]
    pub fn apply_all(self, inputs: impl IntoIterator<Item = CalcInput>) -> Self {
        inputs.into_iter().fold(self, Self::apply)
    }

    // ===== Accessors =====

    /// The current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Left operand of the pending binary operation, if any
    #[must_use]
    pub fn previous_value(&self) -> Option<f64> {
        self.previous_value
    }

    /// The pending operator, if any
    #[must_use]
    pub fn operation(&self) -> Option<BinaryOp> {
        self.operation
    }

    /// True when the next digit starts a fresh entry
    #[must_use]
    pub fn is_waiting(&self) -> bool {
        self.waiting_for_value
    }

    /// True while the display shows the error sentinel
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    /// The memory register
    #[must_use]
    pub fn memory(&self) -> f64 {
        self.memory
    }

    /// The calculation history
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The preview line shown above the display, e.g. `"7 +"`, when an
    /// operation is pending
    #[must_use]
    pub fn pending_expression(&self) -> Option<String> {
        match (self.previous_value, self.operation) {
            (Some(prev), Some(op)) => Some(format!("{} {}", format_value(prev), op.symbol())),
            _ => None,
        }
    }

    // ===== Transitions =====

    fn digit(mut self, d: u8) -> Self {
        if d > 9 {
            return self;
        }
        let ch = char::from(b'0' + d);
        // A digit is the only non-clear way out of the error sink
        if self.waiting_for_value || self.is_error() {
            self.display = ch.to_string();
            self.waiting_for_value = false;
        } else if self.display == "0" {
            self.display = ch.to_string();
        } else if self.display.len() < MAX_ENTRY_LEN {
            self.display.push(ch);
        }
        self
    }

    fn decimal_point(mut self) -> Self {
        if self.is_error() {
            return self;
        }
        if self.waiting_for_value {
            self.display = "0.".to_string();
            self.waiting_for_value = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
        self
    }

    fn operator(mut self, op: BinaryOp) -> Self {
        if self.is_error() {
            return self;
        }
        let x = self.operand();
        match (self.previous_value, self.operation) {
            (None, _) => self.previous_value = Some(x),
            (Some(prev), Some(pending)) => match pending.apply(prev, x) {
                Ok(result) => {
                    self.history.record(&pending.expression(prev, x), result);
                    self.display = format_value(result);
                    self.previous_value = Some(result);
                }
                // The freshly pressed operator is discarded with the rest
                Err(err) => return self.arithmetic_error(err),
            },
            (Some(_), None) => {}
        }
        self.waiting_for_value = true;
        self.operation = Some(op);
        self
    }

    fn equals(mut self) -> Self {
        if self.is_error() {
            return self;
        }
        let (Some(prev), Some(pending)) = (self.previous_value, self.operation) else {
            return self;
        };
        let x = self.operand();
        match pending.apply(prev, x) {
            Ok(result) => {
                self.history.record(&pending.expression(prev, x), result);
                self.display = format_value(result);
                self.previous_value = None;
                self.operation = None;
                self.waiting_for_value = true;
                self
            }
            Err(err) => self.arithmetic_error(err),
        }
    }

    fn clear_all(mut self) -> Self {
        self.display = "0".to_string();
        self.previous_value = None;
        self.operation = None;
        self.waiting_for_value = false;
        self
    }

    fn clear_entry(mut self) -> Self {
        self.display = "0".to_string();
        self
    }

    fn backspace(mut self) -> Self {
        if self.is_error() {
            return self;
        }
        self.display.pop();
        // A bare minus sign is not a valid entry either
        if self.display.is_empty() || self.display == "-" {
            self.display = "0".to_string();
        }
        self
    }

    fn toggle_sign(mut self) -> Self {
        if self.display == "0" || self.is_error() {
            return self;
        }
        if let Some(stripped) = self.display.strip_prefix('-') {
            self.display = stripped.to_string();
        } else {
            self.display.insert(0, '-');
        }
        self
    }

    fn unary(mut self, op: UnaryOp) -> Self {
        if self.is_error() {
            return self;
        }
        let x = self.operand();
        match op.apply(x) {
            Ok(result) => {
                self.history.record(&op.expression(x), result);
                self.display = format_value(result);
                self
            }
            Err(err) => self.arithmetic_error(err),
        }
    }

    fn memory_adjust(mut self, sign: f64) -> Self {
        if self.is_error() {
            return self;
        }
        // Memory sums go through the same finiteness check as every other
        // computation; an overflowing M+ fails without touching the register
        match check_result(sign.mul_add(self.operand(), self.memory)) {
            Ok(total) => {
                self.memory = total;
                self
            }
            Err(err) => self.arithmetic_error(err),
        }
    }

    fn memory_recall(mut self) -> Self {
        if self.is_error() {
            return self;
        }
        self.display = format_value(self.memory);
        self
    }

    fn memory_clear(mut self) -> Self {
        self.memory = 0.0;
        self
    }

    fn clear_history(mut self) -> Self {
        self.history.clear();
        self
    }

    /// Enters the error sink: sentinel display, pending operation dropped,
    /// history untouched
    fn arithmetic_error(mut self, err: ArithmeticError) -> Self {
        warn!(%err, "arithmetic error");
        self.display = ERROR_DISPLAY.to_string();
        self.previous_value = None;
        self.operation = None;
        self.waiting_for_value = true;
        self
    }

    /// Parses the display into an operand.
    ///
    /// Callers rule out the error sink first; outside it the display is
    /// always a parseable literal.
    fn operand(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::CalcInput::{
        Backspace, ClearAll, ClearEntry, ClearHistory, Decimal, Digit, Equals, MemoryAdd,
        MemoryClear, MemoryRecall, MemorySubtract, Operator, ToggleSign, Unary,
    };

    fn seq(inputs: &[CalcInput]) -> CalculatorState {
        CalculatorState::new().apply_all(inputs.iter().copied())
    }

    // ===== Initial state =====

    #[test]
    fn test_initial_state() {
        let state = CalculatorState::new();
        assert_eq!(state.display(), "0");
        assert_eq!(state.previous_value(), None);
        assert_eq!(state.operation(), None);
        assert!(!state.is_waiting());
        assert!(state.history().is_empty());
        assert_eq!(state.memory(), 0.0);
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(CalculatorState::default().display(), CalculatorState::new().display());
    }

    // ===== Digit entry =====

    #[test]
    fn test_digits_concatenate() {
        let state = seq(&[Digit(1), Digit(2), Digit(3)]);
        assert_eq!(state.display(), "123");
    }

    #[test]
    fn test_digit_replaces_lone_zero() {
        let state = seq(&[Digit(0), Digit(0), Digit(7)]);
        assert_eq!(state.display(), "7");
    }

    #[test]
    fn test_digit_zero_stays_zero() {
        let state = seq(&[Digit(0), Digit(0)]);
        assert_eq!(state.display(), "0");
    }

    #[test]
    fn test_digit_replaces_entry_while_waiting() {
        let state = seq(&[Digit(7), Operator(BinaryOp::Add), Digit(3)]);
        assert_eq!(state.display(), "3");
        assert!(!state.is_waiting());
    }

    #[test]
    fn test_entry_capped_at_twelve_characters() {
        let inputs: Vec<CalcInput> = (0..20).map(|_| Digit(9)).collect();
        let state = seq(&inputs);
        assert_eq!(state.display().len(), MAX_ENTRY_LEN);
        assert_eq!(state.display(), "999999999999");
    }

    #[test]
    fn test_cap_counts_decimal_point() {
        let mut inputs = vec![Digit(1), Decimal];
        inputs.extend((0..15).map(|_| Digit(2)));
        let state = seq(&inputs);
        assert_eq!(state.display().len(), MAX_ENTRY_LEN);
        assert_eq!(state.display(), "1.2222222222");
    }

    #[test]
    fn test_out_of_range_digit_is_ignored() {
        let state = seq(&[Digit(5)]).apply(Digit(12));
        assert_eq!(state.display(), "5");
    }

    // ===== Decimal point =====

    #[test]
    fn test_decimal_appends_once() {
        let state = seq(&[Digit(3), Decimal, Digit(1), Decimal, Digit(4)]);
        assert_eq!(state.display(), "3.14");
    }

    #[test]
    fn test_decimal_is_idempotent() {
        let state = seq(&[Digit(1), Decimal]);
        let again = state.clone().apply(Decimal);
        assert_eq!(state.display(), again.display());
    }

    #[test]
    fn test_decimal_while_waiting_starts_zero_point() {
        let state = seq(&[Digit(7), Operator(BinaryOp::Add), Decimal]);
        assert_eq!(state.display(), "0.");
        assert!(!state.is_waiting());
    }

    #[test]
    fn test_decimal_on_fresh_state() {
        let state = seq(&[Decimal, Digit(5)]);
        assert_eq!(state.display(), "0.5");
    }

    // ===== Operators and equals =====

    #[test]
    fn test_first_operator_stores_operand() {
        let state = seq(&[Digit(7), Operator(BinaryOp::Add)]);
        assert_eq!(state.previous_value(), Some(7.0));
        assert_eq!(state.operation(), Some(BinaryOp::Add));
        assert!(state.is_waiting());
        assert_eq!(state.display(), "7");
    }

    #[test]
    fn test_addition_via_equals() {
        let state = seq(&[Digit(7), Operator(BinaryOp::Add), Digit(3), Equals]);
        assert_eq!(state.display(), "10");
        assert_eq!(state.previous_value(), None);
        assert_eq!(state.operation(), None);
        assert_eq!(state.history().lines(), vec!["7 + 3 = 10"]);
    }

    #[test]
    fn test_operator_chaining_reduces_left_to_right() {
        let state = seq(&[
            Digit(2),
            Operator(BinaryOp::Add),
            Digit(3),
            Operator(BinaryOp::Multiply),
            Digit(4),
            Equals,
        ]);
        // (2 + 3) * 4, no precedence
        assert_eq!(state.display(), "20");
        assert_eq!(state.history().lines(), vec!["5 * 4 = 20", "2 + 3 = 5"]);
    }

    #[test]
    fn test_double_operator_press_reduces_with_stale_display() {
        let state = seq(&[Digit(7), Operator(BinaryOp::Add), Operator(BinaryOp::Add)]);
        assert_eq!(state.display(), "14");
        assert_eq!(state.previous_value(), Some(14.0));
        assert_eq!(state.history().lines(), vec!["7 + 7 = 14"]);
    }

    #[test]
    fn test_equals_without_pending_is_identity() {
        let state = seq(&[Digit(5), Equals]);
        assert_eq!(state.display(), "5");
        assert!(!state.is_waiting());
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_equals_sets_waiting_so_next_digit_replaces() {
        let state = seq(&[Digit(7), Operator(BinaryOp::Add), Digit(3), Equals, Digit(4)]);
        assert_eq!(state.display(), "4");
    }

    #[test]
    fn test_percent_reduction() {
        let state = seq(&[
            Digit(2),
            Digit(0),
            Digit(0),
            Operator(BinaryOp::Percent),
            Digit(5),
            Digit(0),
            Equals,
        ]);
        assert_eq!(state.display(), "100");
        assert_eq!(state.history().lines(), vec!["200 % 50 = 100"]);
    }

    #[test]
    fn test_power_reduction() {
        let state = seq(&[Digit(2), Operator(BinaryOp::Power), Digit(1), Digit(0), Equals]);
        assert_eq!(state.display(), "1024");
    }

    #[test]
    fn test_fractional_result_is_rounded_to_8dp() {
        let state = seq(&[Digit(1), Operator(BinaryOp::Divide), Digit(3), Equals]);
        assert_eq!(state.display(), "0.33333333");
    }

    // ===== Division by zero and the error sink =====

    #[test]
    fn test_divide_by_zero_on_equals() {
        let state = seq(&[Digit(5), Operator(BinaryOp::Divide), Digit(0), Equals]);
        assert_eq!(state.display(), "Error");
        assert!(state.is_error());
        assert_eq!(state.previous_value(), None);
        assert_eq!(state.operation(), None);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_divide_by_zero_on_operator_discards_pending() {
        let state = seq(&[
            Digit(5),
            Operator(BinaryOp::Divide),
            Digit(0),
            Operator(BinaryOp::Add),
        ]);
        assert_eq!(state.display(), "Error");
        assert_eq!(state.operation(), None);

        // Recovery by digit; the discarded operator never resolves
        let state = state.apply_all([Digit(3), Equals]);
        assert_eq!(state.display(), "3");
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_error_preserves_existing_history() {
        let state = seq(&[
            Digit(2),
            Operator(BinaryOp::Add),
            Digit(2),
            Equals,
            Operator(BinaryOp::Divide),
            Digit(0),
            Equals,
        ]);
        assert_eq!(state.display(), "Error");
        assert_eq!(state.history().lines(), vec!["2 + 2 = 4"]);
    }

    #[test]
    fn test_error_sink_ignores_non_exit_inputs() {
        let error = seq(&[Digit(1), Operator(BinaryOp::Divide), Digit(0), Equals]);
        assert!(error.is_error());

        for input in [
            Operator(BinaryOp::Add),
            Equals,
            Decimal,
            Backspace,
            ToggleSign,
            MemoryAdd,
            MemorySubtract,
            MemoryRecall,
            Unary(UnaryOp::Sqrt),
        ] {
            let next = error.clone().apply(input);
            assert_eq!(next.display(), "Error", "input {input:?} must not exit the sink");
        }
    }

    #[test]
    fn test_error_sink_exits_by_digit() {
        let state = seq(&[Digit(1), Operator(BinaryOp::Divide), Digit(0), Equals, Digit(8)]);
        assert_eq!(state.display(), "8");
        assert!(!state.is_waiting());
    }

    #[test]
    fn test_error_sink_exits_by_clear_entry() {
        let state = seq(&[Digit(1), Operator(BinaryOp::Divide), Digit(0), Equals, ClearEntry]);
        assert_eq!(state.display(), "0");
    }

    #[test]
    fn test_memory_clear_still_works_in_error_sink() {
        let state = seq(&[
            Digit(5),
            MemoryAdd,
            Operator(BinaryOp::Divide),
            Digit(0),
            Equals,
            MemoryClear,
        ]);
        assert!(state.is_error());
        assert_eq!(state.memory(), 0.0);
    }

    #[test]
    fn test_overflow_takes_error_transition() {
        // 99 ^ 999 overflows f64
        let state = seq(&[
            Digit(9),
            Digit(9),
            Operator(BinaryOp::Power),
            Digit(9),
            Digit(9),
            Digit(9),
            Equals,
        ]);
        assert_eq!(state.display(), "Error");
        assert!(state.history().is_empty());
    }

    // ===== Clears =====

    #[test]
    fn test_clear_all_resets_control_fields_only() {
        let state = seq(&[
            Digit(5),
            MemoryAdd,
            Operator(BinaryOp::Add),
            Digit(3),
            Equals,
            Operator(BinaryOp::Multiply),
            ClearAll,
        ]);
        assert_eq!(state.display(), "0");
        assert_eq!(state.previous_value(), None);
        assert_eq!(state.operation(), None);
        assert!(!state.is_waiting());
        assert_eq!(state.history().lines(), vec!["5 + 3 = 8"]);
        assert_eq!(state.memory(), 5.0);
    }

    #[test]
    fn test_clear_entry_resets_display_only() {
        let state = seq(&[Digit(7), Operator(BinaryOp::Add), Digit(3), ClearEntry]);
        assert_eq!(state.display(), "0");
        assert_eq!(state.previous_value(), Some(7.0));
        assert_eq!(state.operation(), Some(BinaryOp::Add));
    }

    #[test]
    fn test_clear_history() {
        let state = seq(&[Digit(1), Operator(BinaryOp::Add), Digit(1), Equals, ClearHistory]);
        assert!(state.history().is_empty());
        assert_eq!(state.display(), "2");
    }

    // ===== Backspace and sign =====

    #[test]
    fn test_backspace_drops_last_character() {
        let state = seq(&[Digit(1), Digit(2), Digit(3), Backspace]);
        assert_eq!(state.display(), "12");
    }

    #[test]
    fn test_backspace_on_single_digit_restores_zero() {
        let state = seq(&[Digit(7), Backspace]);
        assert_eq!(state.display(), "0");
    }

    #[test]
    fn test_backspace_collapses_bare_minus() {
        let state = seq(&[Digit(5), ToggleSign, Backspace]);
        assert_eq!(state.display(), "0");
    }

    #[test]
    fn test_backspace_on_zero_stays_zero() {
        let state = seq(&[Backspace]);
        assert_eq!(state.display(), "0");
    }

    #[test]
    fn test_toggle_sign_flips_and_restores() {
        let state = seq(&[Digit(5), ToggleSign]);
        assert_eq!(state.display(), "-5");
        let state = state.apply(ToggleSign);
        assert_eq!(state.display(), "5");
    }

    #[test]
    fn test_toggle_sign_on_zero_is_identity() {
        let state = seq(&[ToggleSign]);
        assert_eq!(state.display(), "0");
    }

    #[test]
    fn test_toggle_sign_on_fraction() {
        let state = seq(&[Decimal, Digit(5), ToggleSign]);
        assert_eq!(state.display(), "-0.5");
    }

    // ===== Memory register =====

    #[test]
    fn test_memory_add_and_recall() {
        let state = seq(&[Digit(4), Digit(2), MemoryAdd, ClearAll, MemoryRecall]);
        assert_eq!(state.memory(), 42.0);
        assert_eq!(state.display(), "42");
    }

    #[test]
    fn test_memory_subtract() {
        let state = seq(&[Digit(1), Digit(0), MemoryAdd, ClearEntry, Digit(3), MemorySubtract]);
        assert_eq!(state.memory(), 7.0);
    }

    #[test]
    fn test_memory_round_trip_is_exact() {
        let entry = [Digit(0), Decimal, Digit(2)];
        let mut state = seq(&[Digit(0), Decimal, Digit(1), MemoryAdd, ClearEntry]);
        state = state.apply_all(entry).apply(MemoryAdd);
        state = state.apply_all([ClearEntry]).apply_all(entry).apply(MemorySubtract);
        assert_eq!(state.memory(), 0.1);
    }

    #[test]
    fn test_memory_clear() {
        let state = seq(&[Digit(9), MemoryAdd, MemoryClear]);
        assert_eq!(state.memory(), 0.0);
    }

    #[test]
    fn test_memory_survives_clear_all() {
        let state = seq(&[Digit(8), MemoryAdd, ClearAll]);
        assert_eq!(state.memory(), 8.0);
    }

    #[test]
    fn test_memory_recall_formats_value() {
        let state = seq(&[Decimal, Digit(5), MemoryAdd, ClearAll, MemoryRecall]);
        assert_eq!(state.display(), "0.5");
    }

    #[test]
    fn test_memory_add_overflow_enters_error_sink() {
        // 170! is within a factor of 25 of f64::MAX, so repeated M+ of it
        // must eventually fail rather than store infinity
        let mut state = seq(&[Digit(1), Digit(7), Digit(0), Unary(UnaryOp::Factorial)]);
        for _ in 0..30 {
            state = state.apply(MemoryAdd);
            if state.is_error() {
                break;
            }
        }
        assert!(state.is_error());
        assert!(state.memory().is_finite());
    }

    // ===== Unary functions =====

    #[test]
    fn test_square() {
        let state = seq(&[Digit(9), Unary(UnaryOp::Square)]);
        assert_eq!(state.display(), "81");
        assert_eq!(state.history().lines(), vec!["square(9) = 81"]);
    }

    #[test]
    fn test_sqrt_records_history() {
        let state = seq(&[Digit(9), Unary(UnaryOp::Sqrt)]);
        assert_eq!(state.display(), "3");
        assert_eq!(state.history().lines(), vec!["sqrt(9) = 3"]);
    }

    #[test]
    fn test_sqrt_of_negative_is_error_without_history() {
        let state = seq(&[Digit(4), ToggleSign, Unary(UnaryOp::Sqrt)]);
        assert_eq!(state.display(), "Error");
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_factorial_scenario() {
        let state = seq(&[Digit(5), Unary(UnaryOp::Factorial)]);
        assert_eq!(state.display(), "120");
        assert_eq!(state.history().lines(), vec!["5! = 120"]);
    }

    #[test]
    fn test_sin_in_degrees() {
        let state = seq(&[Digit(3), Digit(0), Unary(UnaryOp::Sin)]);
        assert_eq!(state.display(), "0.5");
        assert_eq!(state.history().lines(), vec!["sin(30) = 0.5"]);
    }

    #[test]
    fn test_ln_of_zero_is_error() {
        let state = seq(&[Unary(UnaryOp::Ln)]);
        assert_eq!(state.display(), "Error");
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_unary_keeps_pending_operation() {
        // sqrt applies to the second operand; the pending addition resolves
        // against the function result
        let state = seq(&[
            Digit(5),
            Operator(BinaryOp::Add),
            Digit(9),
            Unary(UnaryOp::Sqrt),
            Equals,
        ]);
        assert_eq!(state.display(), "8");
        assert_eq!(
            state.history().lines(),
            vec!["5 + 3 = 8", "sqrt(9) = 3"]
        );
    }

    #[test]
    fn test_unary_error_discards_pending_operation() {
        let state = seq(&[
            Digit(5),
            Operator(BinaryOp::Add),
            Digit(4),
            ToggleSign,
            Unary(UnaryOp::Sqrt),
        ]);
        assert!(state.is_error());
        assert_eq!(state.previous_value(), None);
        assert_eq!(state.operation(), None);
    }

    // ===== Preview line =====

    #[test]
    fn test_pending_expression() {
        assert_eq!(CalculatorState::new().pending_expression(), None);

        let state = seq(&[Digit(7), Operator(BinaryOp::Add)]);
        assert_eq!(state.pending_expression(), Some("7 +".to_string()));

        let state = state.apply_all([Digit(3), Equals]);
        assert_eq!(state.pending_expression(), None);
    }

    // ===== History bound through the engine =====

    #[test]
    fn test_history_bound_holds_through_engine() {
        let mut state = CalculatorState::new();
        for _ in 0..20 {
            state = state.apply_all([Digit(1), Operator(BinaryOp::Add), Digit(1), Equals]);
        }
        assert_eq!(state.history().len(), History::MAX_ENTRIES);
        assert_eq!(state.history().newest().unwrap().display(), "1 + 1 = 2");
    }
}
