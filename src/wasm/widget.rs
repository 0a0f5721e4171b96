//! The calculator widget, independent of wasm-bindgen.
//!
//! Everything the browser shell does lives here as plain Rust: button-ID
//! and keyboard routing, the display and preview texts, the memory
//! indicator, and the status line. The `browser` module only adds the
//! wasm-bindgen surface on top, so the whole widget is testable natively.

use super::keypad::DomKeypad;
use crate::core::{format_value, CalcInput, CalculatorState};

/// The browser calculator widget.
///
/// Owns the engine state and the keypad definition; the driver and the
/// wasm-bindgen layer both route every interaction through [`Self::press`].
#[derive(Debug)]
pub struct CalculatorWidget {
    state: CalculatorState,
    keypad: DomKeypad,
}

impl Default for CalculatorWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorWidget {
    /// Creates a widget showing `0` with empty history and memory
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: CalculatorState::new(),
            keypad: DomKeypad::new(),
        }
    }

    /// Feeds one input event to the engine
    pub fn press(&mut self, input: CalcInput) {
        self.state = std::mem::take(&mut self.state).apply(input);
    }

    /// Routes a click on a keypad button element.
    ///
    /// Returns `false` when the ID does not name a keypad button.
    pub fn press_button(&mut self, button_id: &str) -> bool {
        match self.keypad.handle_click(button_id) {
            Some(input) => {
                self.press(input);
                true
            }
            None => false,
        }
    }

    /// Routes a browser `event.key` value.
    ///
    /// Returns `false` when the key has no binding, so the page can let
    /// unhandled keys bubble.
    pub fn press_key(&mut self, key: &str) -> bool {
        match DomKeypad::key_to_input(key) {
            Some(input) => {
                self.press(input);
                true
            }
            None => false,
        }
    }

    /// The main display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// The pending-operation preview, e.g. `"7 +"`
    #[must_use]
    pub fn preview(&self) -> Option<String> {
        self.state.pending_expression()
    }

    /// The memory register
    #[must_use]
    pub fn memory(&self) -> f64 {
        self.state.memory()
    }

    /// Indicator text for the memory element: empty while the register is
    /// zero, otherwise `"M = value"`
    #[must_use]
    pub fn memory_indicator(&self) -> String {
        if self.state.memory() == 0.0 {
            String::new()
        } else {
            format!("M = {}", format_value(self.state.memory()))
        }
    }

    /// One-line status for the status element
    #[must_use]
    pub fn status(&self) -> String {
        if self.state.is_error() {
            "Error: press AC or start a new number".to_string()
        } else if let Some(pending) = self.state.pending_expression() {
            format!("Pending: {pending}")
        } else {
            "Ready".to_string()
        }
    }

    /// History lines, newest first
    #[must_use]
    pub fn history_lines(&self) -> Vec<String> {
        self.state.history().lines()
    }

    /// Number of recorded history entries
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.state.history().len()
    }

    /// The underlying engine state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// The keypad definition
    #[must_use]
    pub fn keypad(&self) -> &DomKeypad {
        &self.keypad
    }

    /// Discards all state, including history and memory
    pub fn reset(&mut self) {
        self.state = CalculatorState::new();
    }
}
