//! DOM keypad: stable element IDs and grid placement for every button.
//!
//! The layout mirrors the terminal keypad so both shells present the same
//! 7x5 button grid; here each button additionally carries the element ID the
//! browser wires click handlers to.

use super::dom::{DomElement, MockDom};
use crate::core::{BinaryOp, CalcInput, UnaryOp};

/// Returns the stable DOM element ID for an input's button, e.g. `"btn-7"`,
/// `"btn-plus"`, `"btn-sqrt"`.
#[must_use]
pub fn element_id(input: CalcInput) -> String {
    match input {
        CalcInput::Digit(d) => format!("btn-{d}"),
        CalcInput::Decimal => "btn-decimal".to_string(),
        CalcInput::Operator(op) => match op {
            BinaryOp::Add => "btn-plus".to_string(),
            BinaryOp::Subtract => "btn-minus".to_string(),
            BinaryOp::Multiply => "btn-times".to_string(),
            BinaryOp::Divide => "btn-divide".to_string(),
            BinaryOp::Power => "btn-power".to_string(),
            BinaryOp::Percent => "btn-percent".to_string(),
        },
        CalcInput::Equals => "btn-equals".to_string(),
        CalcInput::ClearAll => "btn-clear-all".to_string(),
        CalcInput::ClearEntry => "btn-clear-entry".to_string(),
        CalcInput::Backspace => "btn-backspace".to_string(),
        CalcInput::ToggleSign => "btn-sign".to_string(),
        CalcInput::Unary(func) => match func {
            UnaryOp::Square => "btn-square".to_string(),
            UnaryOp::Sqrt => "btn-sqrt".to_string(),
            UnaryOp::Sin => "btn-sin".to_string(),
            UnaryOp::Cos => "btn-cos".to_string(),
            UnaryOp::Tan => "btn-tan".to_string(),
            UnaryOp::Log10 => "btn-log".to_string(),
            UnaryOp::Ln => "btn-ln".to_string(),
            UnaryOp::Factorial => "btn-factorial".to_string(),
        },
        CalcInput::MemoryAdd => "btn-memory-add".to_string(),
        CalcInput::MemorySubtract => "btn-memory-subtract".to_string(),
        CalcInput::MemoryRecall => "btn-memory-recall".to_string(),
        CalcInput::MemoryClear => "btn-memory-clear".to_string(),
        CalcInput::ClearHistory => "btn-clear-history".to_string(),
    }
}

/// Returns the button face text for an input, matching the terminal keypad
fn button_label(input: CalcInput) -> String {
    match input {
        CalcInput::Digit(d) => d.to_string(),
        CalcInput::Decimal => ".".to_string(),
        CalcInput::Operator(op) => op.symbol().to_string(),
        CalcInput::Equals => "=".to_string(),
        CalcInput::ClearAll => "AC".to_string(),
        CalcInput::ClearEntry => "CE".to_string(),
        CalcInput::Backspace => "⌫".to_string(),
        CalcInput::ToggleSign => "±".to_string(),
        CalcInput::Unary(func) => match func {
            UnaryOp::Square => "x²".to_string(),
            UnaryOp::Sqrt => "√".to_string(),
            UnaryOp::Sin => "sin".to_string(),
            UnaryOp::Cos => "cos".to_string(),
            UnaryOp::Tan => "tan".to_string(),
            UnaryOp::Log10 => "log".to_string(),
            UnaryOp::Ln => "ln".to_string(),
            UnaryOp::Factorial => "x!".to_string(),
        },
        CalcInput::MemoryAdd => "M+".to_string(),
        CalcInput::MemorySubtract => "M-".to_string(),
        CalcInput::MemoryRecall => "MR".to_string(),
        CalcInput::MemoryClear => "MC".to_string(),
        CalcInput::ClearHistory => "CH".to_string(),
    }
}

/// A keypad button bound to a DOM element ID and a grid cell
#[derive(Debug, Clone, PartialEq)]
pub struct DomButton {
    /// The input this button feeds to the engine
    pub input: CalcInput,
    /// DOM element ID
    pub id: String,
    /// Grid row, 0-indexed from the top
    pub row: usize,
    /// Grid column, 0-indexed from the left
    pub col: usize,
}

impl DomButton {
    /// Creates a button at the given grid cell
    #[must_use]
    pub fn new(input: CalcInput, row: usize, col: usize) -> Self {
        Self {
            input,
            id: element_id(input),
            row,
            col,
        }
    }

    /// The button face text
    #[must_use]
    pub fn label(&self) -> String {
        button_label(self.input)
    }
}

/// The browser keypad definition.
///
/// Layout, matching the terminal shell:
/// ```text
/// [MC] [MR] [M+] [M-] [CH]
/// [sin][cos][tan][log][ln]
/// [x²] [√]  [x!] [^]  [%]
/// [AC] [CE] [⌫]  [/]  [±]
/// [7]  [8]  [9]  [*]  [-]
/// [4]  [5]  [6]  [+]  [.]
/// [1]  [2]  [3]  [0]  [=]
/// ```
#[derive(Debug, Clone)]
pub struct DomKeypad {
    buttons: Vec<DomButton>,
    cols: usize,
    rows: usize,
}

impl Default for DomKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl DomKeypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 0: memory and history
            DomButton::new(CalcInput::MemoryClear, 0, 0),
            DomButton::new(CalcInput::MemoryRecall, 0, 1),
            DomButton::new(CalcInput::MemoryAdd, 0, 2),
            DomButton::new(CalcInput::MemorySubtract, 0, 3),
            DomButton::new(CalcInput::ClearHistory, 0, 4),
            // Row 1: trig and logarithms
            DomButton::new(CalcInput::Unary(UnaryOp::Sin), 1, 0),
            DomButton::new(CalcInput::Unary(UnaryOp::Cos), 1, 1),
            DomButton::new(CalcInput::Unary(UnaryOp::Tan), 1, 2),
            DomButton::new(CalcInput::Unary(UnaryOp::Log10), 1, 3),
            DomButton::new(CalcInput::Unary(UnaryOp::Ln), 1, 4),
            // Row 2: powers and percent
            DomButton::new(CalcInput::Unary(UnaryOp::Square), 2, 0),
            DomButton::new(CalcInput::Unary(UnaryOp::Sqrt), 2, 1),
            DomButton::new(CalcInput::Unary(UnaryOp::Factorial), 2, 2),
            DomButton::new(CalcInput::Operator(BinaryOp::Power), 2, 3),
            DomButton::new(CalcInput::Operator(BinaryOp::Percent), 2, 4),
            // Row 3: clears
            DomButton::new(CalcInput::ClearAll, 3, 0),
            DomButton::new(CalcInput::ClearEntry, 3, 1),
            DomButton::new(CalcInput::Backspace, 3, 2),
            DomButton::new(CalcInput::Operator(BinaryOp::Divide), 3, 3),
            DomButton::new(CalcInput::ToggleSign, 3, 4),
            // Row 4
            DomButton::new(CalcInput::Digit(7), 4, 0),
            DomButton::new(CalcInput::Digit(8), 4, 1),
            DomButton::new(CalcInput::Digit(9), 4, 2),
            DomButton::new(CalcInput::Operator(BinaryOp::Multiply), 4, 3),
            DomButton::new(CalcInput::Operator(BinaryOp::Subtract), 4, 4),
            // Row 5
            DomButton::new(CalcInput::Digit(4), 5, 0),
            DomButton::new(CalcInput::Digit(5), 5, 1),
            DomButton::new(CalcInput::Digit(6), 5, 2),
            DomButton::new(CalcInput::Operator(BinaryOp::Add), 5, 3),
            DomButton::new(CalcInput::Decimal, 5, 4),
            // Row 6
            DomButton::new(CalcInput::Digit(1), 6, 0),
            DomButton::new(CalcInput::Digit(2), 6, 1),
            DomButton::new(CalcInput::Digit(3), 6, 2),
            DomButton::new(CalcInput::Digit(0), 6, 3),
            DomButton::new(CalcInput::Equals, 6, 4),
        ];

        Self {
            buttons,
            cols: 5,
            rows: 7,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions as (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All button definitions in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[DomButton] {
        &self.buttons
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&DomButton> {
        self.buttons.get(index)
    }

    /// Gets a button by grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&DomButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds a button by its element ID
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&DomButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button for a given input
    #[must_use]
    pub fn find_by_input(&self, input: CalcInput) -> Option<&DomButton> {
        self.buttons.iter().find(|b| b.input == input)
    }

    /// Resolves a click on an element ID to the input it feeds
    #[must_use]
    pub fn handle_click(&self, id: &str) -> Option<CalcInput> {
        self.find_by_id(id).map(|b| b.input)
    }

    /// Maps a browser `event.key` value to an input.
    ///
    /// Beyond the printable bindings shared with the terminal shell, the
    /// named keys `Enter`, `Escape`, `Backspace`, and `Delete` map to
    /// equals, clear-all, backspace, and clear-entry.
    #[must_use]
    pub fn key_to_input(key: &str) -> Option<CalcInput> {
        match key {
            "Enter" => Some(CalcInput::Equals),
            "Escape" => Some(CalcInput::ClearAll),
            "Backspace" => Some(CalcInput::Backspace),
            "Delete" => Some(CalcInput::ClearEntry),
            _ => Self::char_to_input(key),
        }
    }

    /// Maps a single printable character to an input
    fn char_to_input(key: &str) -> Option<CalcInput> {
        let mut chars = key.chars();
        let ch = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        if let Some(d) = ch.to_digit(10) {
            return Some(CalcInput::Digit(d as u8));
        }
        if let Some(op) = BinaryOp::from_symbol(ch) {
            return Some(CalcInput::Operator(op));
        }
        match ch {
            '.' => Some(CalcInput::Decimal),
            '=' => Some(CalcInput::Equals),
            's' => Some(CalcInput::ToggleSign),
            'c' => Some(CalcInput::ClearEntry),
            '!' => Some(CalcInput::Unary(UnaryOp::Factorial)),
            'r' => Some(CalcInput::Unary(UnaryOp::Sqrt)),
            'm' => Some(CalcInput::MemoryAdd),
            'M' => Some(CalcInput::MemorySubtract),
            _ => None,
        }
    }

    /// Creates the button elements for the keypad
    #[must_use]
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons
            .iter()
            .map(|btn| {
                DomElement::new("button")
                    .with_id(&btn.id)
                    .with_text(&btn.label())
                    .with_class("keypad-btn")
                    .with_class(&format!("keypad-row-{}", btn.row))
                    .with_class(&format!("keypad-col-{}", btn.col))
                    .with_attr("data-input", &format!("{:?}", btn.input))
            })
            .collect()
    }

    /// Creates the keypad container element with all buttons as children
    #[must_use]
    pub fn create_keypad_element(&self) -> DomElement {
        let mut keypad = DomElement::new("div")
            .with_id("calc-keypad")
            .with_class("keypad");

        for btn_elem in self.create_dom_elements() {
            keypad = keypad.with_child(btn_elem);
        }

        keypad
    }
}

/// Extension trait wiring a keypad into a mock document
pub trait MockDomKeypadExt {
    /// Registers the keypad container and every button element
    fn add_keypad(&mut self, keypad: &DomKeypad);
}

impl MockDomKeypadExt for MockDom {
    fn add_keypad(&mut self, keypad: &DomKeypad) {
        self.register_element(keypad.create_keypad_element());
        for btn_elem in keypad.create_dom_elements() {
            self.register_element(btn_elem);
        }
    }
}
