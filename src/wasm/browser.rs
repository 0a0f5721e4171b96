//! wasm-bindgen surface for the calculator widget.
//!
//! Exposes [`CalculatorWidget`] to JavaScript: the page constructs one
//! `BrowserCalculator`, forwards button clicks and key events to it, and
//! reads the display, preview, memory, status, and history back out.

use wasm_bindgen::prelude::*;
use web_sys::console;

use super::widget::CalculatorWidget;
use crate::core::history::HistoryEntry;

/// The calculator object handed to JavaScript
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    widget: CalculatorWidget,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Creates a calculator and installs the panic hook so Rust panics
    /// land in the browser console
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            widget: CalculatorWidget::new(),
        }
    }

    /// The main display text
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.widget.display().to_string()
    }

    /// The pending-operation preview, empty when none is pending
    #[wasm_bindgen(getter)]
    pub fn preview(&self) -> String {
        self.widget.preview().unwrap_or_default()
    }

    /// The memory register
    #[wasm_bindgen(getter)]
    pub fn memory(&self) -> f64 {
        self.widget.memory()
    }

    /// One-line status for the status element
    #[wasm_bindgen(getter)]
    pub fn status(&self) -> String {
        self.widget.status()
    }

    /// Memory indicator text, empty while the register is zero
    pub fn memory_indicator(&self) -> String {
        self.widget.memory_indicator()
    }

    /// Routes a click on a keypad button element by its ID.
    ///
    /// Returns `false` when the ID does not name a keypad button.
    pub fn press_button(&mut self, button_id: &str) -> bool {
        self.widget.press_button(button_id)
    }

    /// Routes a keyboard event's `key` value.
    ///
    /// Returns `false` for unbound keys so the page can let them bubble.
    pub fn press_key(&mut self, key: &str) -> bool {
        self.widget.press_key(key)
    }

    /// History as a JSON array, newest entry first
    pub fn history_json(&self) -> String {
        self.widget
            .state()
            .history()
            .to_json()
            .unwrap_or_else(|_| "[]".to_string())
    }

    /// Number of recorded history entries
    pub fn history_count(&self) -> usize {
        self.widget.history_len()
    }

    /// A rendered history line by index, 0 being the newest
    pub fn history_entry(&self, index: usize) -> Option<String> {
        self.widget
            .state()
            .history()
            .get(index)
            .map(HistoryEntry::display)
    }

    /// Discards all state, including history and memory
    pub fn reset(&mut self) {
        self.widget.reset();
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Module entry point, run once when the wasm module loads
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"sumadora calculator ready".into());
}
