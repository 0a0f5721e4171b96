//! Keyboard input handling.
//!
//! Maps crossterm key events to either engine inputs or app controls.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{BinaryOp, CalcInput, UnaryOp};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward an input event to the engine
    Input(CalcInput),
    /// Show or hide the history panel
    ToggleHistory,
    /// Switch the color theme
    CycleTheme,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('r') => KeyAction::Input(CalcInput::MemoryRecall),
                KeyCode::Char('x') => KeyAction::Input(CalcInput::MemoryClear),
                KeyCode::Char('h') => KeyAction::Input(CalcInput::ClearHistory),
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => Self::handle_char(c),
            KeyCode::Enter => KeyAction::Input(CalcInput::Equals),
            KeyCode::Esc => KeyAction::Input(CalcInput::ClearAll),
            KeyCode::Backspace => KeyAction::Input(CalcInput::Backspace),
            KeyCode::Delete => KeyAction::Input(CalcInput::ClearEntry),
            _ => KeyAction::None,
        }
    }

    /// Maps a plain character to an action
    fn handle_char(c: char) -> KeyAction {
        if let Some(d) = c.to_digit(10) {
            return KeyAction::Input(CalcInput::Digit(d as u8));
        }
        if let Some(op) = BinaryOp::from_symbol(c) {
            return KeyAction::Input(CalcInput::Operator(op));
        }
        match c {
            '.' => KeyAction::Input(CalcInput::Decimal),
            '=' => KeyAction::Input(CalcInput::Equals),
            's' => KeyAction::Input(CalcInput::ToggleSign),
            'c' => KeyAction::Input(CalcInput::ClearEntry),
            '!' => KeyAction::Input(CalcInput::Unary(UnaryOp::Factorial)),
            'r' => KeyAction::Input(CalcInput::Unary(UnaryOp::Sqrt)),
            'm' => KeyAction::Input(CalcInput::MemoryAdd),
            'M' => KeyAction::Input(CalcInput::MemorySubtract),
            't' => KeyAction::CycleTheme,
            'h' => KeyAction::ToggleHistory,
            _ => KeyAction::None,
        }
    }
}
