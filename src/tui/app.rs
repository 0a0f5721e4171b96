//! TUI application state.
//!
//! The app owns one [`CalculatorState`] plus shell-only concerns (theme,
//! history-panel visibility, quit flag). Every event is either forwarded to
//! the engine as a [`CalcInput`] or handled here as an app control.

use clap::ValueEnum;

use super::input::KeyAction;
use crate::core::{CalcInput, CalculatorState};

/// Color theme for the terminal UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Theme {
    /// Light text on a dark terminal background
    #[default]
    Dark,
    /// Dark text on a light terminal background
    Light,
}

impl Theme {
    /// Switches to the other theme
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// The calculator engine state
    state: CalculatorState,
    /// Active color theme
    theme: Theme,
    /// Whether the history panel is visible
    show_history: bool,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new app with the default theme and a visible history panel
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: CalculatorState::new(),
            theme: Theme::default(),
            show_history: true,
            should_quit: false,
        }
    }

    /// Creates an app with an explicit theme
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::new()
        }
    }

    /// Returns the engine state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the active theme
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns whether the history panel is visible
    #[must_use]
    pub fn show_history(&self) -> bool {
        self.show_history
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Forwards one input event to the engine
    pub fn press(&mut self, input: CalcInput) {
        self.state = std::mem::take(&mut self.state).apply(input);
    }

    /// Dispatches a key action: engine inputs go to [`Self::press`], app
    /// controls are handled here
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Input(input) => self.press(input),
            KeyAction::ToggleHistory => self.toggle_history(),
            KeyAction::CycleTheme => self.toggle_theme(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Switches between the dark and light themes
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Shows or hides the history panel
    pub fn toggle_history(&mut self) {
        self.show_history = !self.show_history;
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Hides the history panel (startup option)
    pub fn hide_history(&mut self) {
        self.show_history = false;
    }

    /// Replaces the engine state with a fresh one, wiping history and memory
    pub fn reset(&mut self) {
        self.state = CalculatorState::new();
    }
}
