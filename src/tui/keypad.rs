//! Button grid for the TUI calculator.
//!
//! Mouse clicks resolve through [`Keypad::hit_test`] to the same
//! [`CalcInput`] events the keyboard produces, so both input paths drive the
//! engine identically.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use super::app::Theme;
use crate::core::{BinaryOp, CalcInput, UnaryOp};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The text on the button
    pub label: &'static str,
    /// Whether the button is currently highlighted
    pub pressed: bool,
    /// The engine input this button produces
    pub input: CalcInput,
}

impl KeypadButton {
    /// Creates a new button
    #[must_use]
    pub const fn new(label: &'static str, input: CalcInput) -> Self {
        Self {
            label,
            pressed: false,
            input,
        }
    }

    /// Sets the highlighted state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad layout, a 7x5 grid:
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
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 1: memory register
            KeypadButton::new("MC", CalcInput::MemoryClear),
            KeypadButton::new("MR", CalcInput::MemoryRecall),
            KeypadButton::new("M+", CalcInput::MemoryAdd),
            KeypadButton::new("M-", CalcInput::MemorySubtract),
            KeypadButton::new("CH", CalcInput::ClearHistory),
            // Row 2: trig and logs
            KeypadButton::new("sin", CalcInput::Unary(UnaryOp::Sin)),
            KeypadButton::new("cos", CalcInput::Unary(UnaryOp::Cos)),
            KeypadButton::new("tan", CalcInput::Unary(UnaryOp::Tan)),
            KeypadButton::new("log", CalcInput::Unary(UnaryOp::Log10)),
            KeypadButton::new("ln", CalcInput::Unary(UnaryOp::Ln)),
            // Row 3: powers and percent
            KeypadButton::new("x²", CalcInput::Unary(UnaryOp::Square)),
            KeypadButton::new("√", CalcInput::Unary(UnaryOp::Sqrt)),
            KeypadButton::new("x!", CalcInput::Unary(UnaryOp::Factorial)),
            KeypadButton::new("^", CalcInput::Operator(BinaryOp::Power)),
            KeypadButton::new("%", CalcInput::Operator(BinaryOp::Percent)),
            // Row 4: clears and division
            KeypadButton::new("AC", CalcInput::ClearAll),
            KeypadButton::new("CE", CalcInput::ClearEntry),
            KeypadButton::new("⌫", CalcInput::Backspace),
            KeypadButton::new("/", CalcInput::Operator(BinaryOp::Divide)),
            KeypadButton::new("±", CalcInput::ToggleSign),
            // Row 5
            KeypadButton::new("7", CalcInput::Digit(7)),
            KeypadButton::new("8", CalcInput::Digit(8)),
            KeypadButton::new("9", CalcInput::Digit(9)),
            KeypadButton::new("*", CalcInput::Operator(BinaryOp::Multiply)),
            KeypadButton::new("-", CalcInput::Operator(BinaryOp::Subtract)),
            // Row 6
            KeypadButton::new("4", CalcInput::Digit(4)),
            KeypadButton::new("5", CalcInput::Digit(5)),
            KeypadButton::new("6", CalcInput::Digit(6)),
            KeypadButton::new("+", CalcInput::Operator(BinaryOp::Add)),
            KeypadButton::new(".", CalcInput::Decimal),
            // Row 7
            KeypadButton::new("1", CalcInput::Digit(1)),
            KeypadButton::new("2", CalcInput::Digit(2)),
            KeypadButton::new("3", CalcInput::Digit(3)),
            KeypadButton::new("0", CalcInput::Digit(0)),
            KeypadButton::new("=", CalcInput::Equals),
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

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a mutable button by index
    pub fn get_button_mut(&mut self, index: usize) -> Option<&mut KeypadButton> {
        self.buttons.get_mut(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds a button by its label
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.label == label)
    }

    /// Finds a button by the input it produces
    #[must_use]
    pub fn find_by_input(&self, input: CalcInput) -> Option<usize> {
        self.buttons.iter().position(|b| b.input == input)
    }

    /// Highlights a button by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights only the button producing the given input
    pub fn highlight_input(&mut self, input: CalcInput) {
        self.release_all();
        if let Some(idx) = self.find_by_input(input) {
            self.press_button(idx);
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Converts a click position inside the rendered area to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Border is one cell on each side
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let inner_x = rel_x - 1;
        let inner_y = rel_y - 1;

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;

        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = (inner_x / btn_width) as usize;
        let row = (inner_y / btn_height) as usize;

        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Converts a click position straight to the engine input it triggers
    #[must_use]
    pub fn input_at(&self, area: Rect, x: u16, y: u16) -> Option<CalcInput> {
        self.hit_test(area, x, y)
            .and_then(|idx| self.buttons.get(idx))
            .map(|btn| btn.input)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    theme: Theme,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad, theme: Theme) -> Self {
        Self { keypad, theme }
    }

    fn button_style(&self, btn: &KeypadButton) -> Style {
        if btn.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match btn.input {
            CalcInput::Digit(_) | CalcInput::Decimal => match self.theme {
                Theme::Dark => Style::default().fg(Color::White),
                Theme::Light => Style::default().fg(Color::Black),
            },
            CalcInput::Operator(_) => Style::default().fg(Color::Yellow),
            CalcInput::Equals => Style::default().fg(Color::Green),
            CalcInput::ClearAll
            | CalcInput::ClearEntry
            | CalcInput::Backspace
            | CalcInput::ClearHistory => Style::default().fg(Color::Red),
            CalcInput::Unary(_) | CalcInput::ToggleSign => Style::default().fg(Color::Magenta),
            CalcInput::MemoryAdd
            | CalcInput::MemorySubtract
            | CalcInput::MemoryRecall
            | CalcInput::MemoryClear => Style::default().fg(Color::Cyan),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = match self.theme {
            Theme::Dark => Color::Cyan,
            Theme::Light => Color::Blue,
        };
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (rows, cols) = self.keypad.dimensions();
        if (inner.width as usize) < cols || (inner.height as usize) < rows {
            return; // Too small to render
        }

        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let style = self.button_style(btn);
            let label = format!("[{}]", btn.label);
            let label_width = label.chars().count() as u16;
            if btn_width < label_width {
                continue;
            }

            let label_x = x + (btn_width - label_width) / 2;
            let label_y = y + btn_height / 2;

            if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
            }
        }
    }
}
