//! TUI rendering.
//!
//! Every function here is a pure projection of [`CalculatorApp`] state into
//! a ratatui buffer, so the whole surface is verifiable with `TestBackend`.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::{CalculatorApp, Theme};
use super::keypad::{Keypad, KeypadWidget};
use crate::core::format_value;

/// Application title
pub const APP_TITLE: &str = " Interactive Calculator ";

/// Placeholder shown when the history panel is empty
pub const EMPTY_HISTORY: &str = "No calculations yet";

/// Version badge shown at the bottom of the help sidebar
pub const VERSION_BADGE: &str = concat!("sumadora v", env!("CARGO_PKG_VERSION"));

/// Help sidebar shortcuts
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Type a number"),
    ("+-*/^%", "Operator"),
    ("Enter", "Equals"),
    ("Esc", "Clear all"),
    ("c", "Clear entry"),
    ("Bksp", "Backspace"),
    ("s", "Toggle sign"),
    ("r", "Square root"),
    ("!", "Factorial"),
    ("m / M", "Mem add/sub"),
    ("C-r", "Mem recall"),
    ("C-x", "Mem clear"),
    ("C-h", "Clear history"),
    ("h", "History panel"),
    ("t", "Theme"),
    ("C-q", "Quit"),
];

/// Top-level screen regions
#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    /// Display, memory indicator, and history column
    pub main: Rect,
    /// Keypad grid
    pub keypad: Rect,
    /// Help sidebar
    pub help: Rect,
}

/// Splits the terminal into the three columns of the UI.
///
/// The event loop uses the same split to hit-test mouse clicks against the
/// keypad region the renderer drew.
#[must_use]
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(30),    // Display and history
            Constraint::Length(32), // Keypad
            Constraint::Length(24), // Help sidebar
        ])
        .split(area);

    ScreenLayout {
        main: chunks[0],
        keypad: chunks[1],
        help: chunks[2],
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Renders the calculator UI with an externally managed keypad, preserving
/// its highlight state
pub fn render_with_keypad(app: &CalculatorApp, keypad: &Keypad, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::with_keypad(app, keypad.clone()), area);
}

const fn border_color(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::Cyan,
        Theme::Light => Color::Blue,
    }
}

const fn text_color(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::White,
        Theme::Light => Color::Black,
    }
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
    keypad: Keypad,
}

impl<'a> CalculatorUI<'a> {
    /// Creates the UI widget with a fresh keypad
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self {
            app,
            keypad: Keypad::new(),
        }
    }

    /// Creates the UI widget around an existing keypad
    #[must_use]
    pub fn with_keypad(app: &'a CalculatorApp, keypad: Keypad) -> Self {
        Self { app, keypad }
    }

    /// Splits the main column into display, memory, and history rows
    fn create_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Preview + display
                Constraint::Length(3), // Memory indicator
                Constraint::Min(5),    // History
            ])
            .split(area)
            .to_vec()
    }

    /// Renders the preview line and the main display
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let theme = self.app.theme();
        let state = self.app.state();

        let preview = state.pending_expression().unwrap_or_default();
        let display_style = if state.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(text_color(theme))
                .add_modifier(Modifier::BOLD)
        };

        let lines = vec![
            Line::from(Span::styled(preview, Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled(state.display().to_string(), display_style)),
        ];

        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color(theme))),
            )
            .render(area, buf);
    }

    /// Renders the memory indicator, blank while the register is zero
    fn render_memory(&self, area: Rect, buf: &mut Buffer) {
        let memory = self.app.state().memory();
        let text = if memory == 0.0 {
            String::new()
        } else {
            format!("M = {}", format_value(memory))
        };

        Paragraph::new(Span::styled(text, Style::default().fg(Color::Cyan)))
            .block(
                Block::default()
                    .title(" Memory ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }

    /// Renders the bounded history list, newest first
    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let history = self.app.state().history();

        let items: Vec<ListItem> = if history.is_empty() {
            vec![ListItem::new(Span::styled(
                EMPTY_HISTORY,
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            history
                .lines()
                .into_iter()
                .map(|line| ListItem::new(Span::styled(line, Style::default().fg(Color::Gray))))
                .collect()
        };

        List::new(items)
            .block(
                Block::default()
                    .title(" History (newest first) ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(area, buf);
    }

    /// Renders the keypad column
    fn render_keypad(&self, area: Rect, buf: &mut Buffer) {
        KeypadWidget::new(&self.keypad, self.app.theme()).render(area, buf);
    }

    /// Renders the help sidebar
    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),   // Shortcuts
                Constraint::Length(2), // Version badge
            ])
            .split(area);

        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(chunks[0], buf);

        Paragraph::new(Span::styled(
            VERSION_BADGE,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::ITALIC),
        ))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(chunks[1], buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(APP_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(text_color(self.app.theme())))
            .render(area, buf);

        let layout = screen_layout(area);
        let chunks = Self::create_layout(layout.main);

        if chunks.len() >= 3 {
            self.render_display(chunks[0], buf);
            self.render_memory(chunks[1], buf);
            if self.app.show_history() {
                self.render_history(chunks[2], buf);
            }
        }

        self.render_keypad(layout.keypad, buf);
        self.render_help(layout.help, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BinaryOp, CalcInput};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(100, 30);
        Terminal::new(backend).unwrap()
    }

    fn buffer_content(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn draw(app: &CalculatorApp) -> String {
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(app, frame)).unwrap();
        buffer_content(&terminal)
    }

    // ===== Layout tests =====

    #[test]
    fn test_screen_layout_columns() {
        let layout = screen_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.keypad.width, 32);
        assert_eq!(layout.help.width, 24);
        assert_eq!(layout.main.width, 98 - 32 - 24);
    }

    #[test]
    fn test_create_layout_rows() {
        let chunks = CalculatorUI::create_layout(Rect::new(0, 0, 40, 24));
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].height, 4);
        assert_eq!(chunks[1].height, 3);
    }

    // ===== Full render tests =====

    #[test]
    fn test_render_initial_state() {
        let app = CalculatorApp::new();
        let content = draw(&app);
        assert!(content.contains("Interactive Calculator"));
        assert!(content.contains("Display"));
        assert!(content.contains("Keypad"));
        assert!(content.contains("Help"));
        assert!(content.contains('0'));
    }

    #[test]
    fn test_render_result() {
        let mut app = CalculatorApp::new();
        app.press(CalcInput::Digit(7));
        app.press(CalcInput::Operator(BinaryOp::Add));
        app.press(CalcInput::Digit(3));
        app.press(CalcInput::Equals);

        let content = draw(&app);
        assert!(content.contains("10"));
        assert!(content.contains("7 + 3 = 10"));
    }

    #[test]
    fn test_render_preview_line() {
        let mut app = CalculatorApp::new();
        app.press(CalcInput::Digit(7));
        app.press(CalcInput::Operator(BinaryOp::Add));

        let content = draw(&app);
        assert!(content.contains("7 +"));
    }

    #[test]
    fn test_render_error_state() {
        let mut app = CalculatorApp::new();
        app.press(CalcInput::Digit(1));
        app.press(CalcInput::Operator(BinaryOp::Divide));
        app.press(CalcInput::Digit(0));
        app.press(CalcInput::Equals);

        let content = draw(&app);
        assert!(content.contains("Error"));
    }

    #[test]
    fn test_render_memory_indicator() {
        let mut app = CalculatorApp::new();
        app.press(CalcInput::Digit(5));
        app.press(CalcInput::MemoryAdd);

        let content = draw(&app);
        assert!(content.contains("M = 5"));
    }

    #[test]
    fn test_render_memory_blank_when_zero() {
        let app = CalculatorApp::new();
        let content = draw(&app);
        assert!(!content.contains("M = "));
    }

    #[test]
    fn test_render_empty_history_placeholder() {
        let app = CalculatorApp::new();
        let content = draw(&app);
        assert!(content.contains(EMPTY_HISTORY));
    }

    #[test]
    fn test_render_hidden_history() {
        let mut app = CalculatorApp::new();
        app.toggle_history();
        let content = draw(&app);
        assert!(!content.contains(EMPTY_HISTORY));
        assert!(!content.contains("History (newest first)"));
    }

    #[test]
    fn test_render_light_theme() {
        let app = CalculatorApp::with_theme(Theme::Light);
        let content = draw(&app);
        assert!(content.contains("Keypad"));
    }

    #[test]
    fn test_render_small_terminal() {
        let app = CalculatorApp::new();
        let backend = TestBackend::new(20, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();
    }

    #[test]
    fn test_render_with_keypad_highlight() {
        let app = CalculatorApp::new();
        let mut keypad = Keypad::new();
        keypad.highlight_input(CalcInput::Digit(7));
        let mut terminal = create_test_terminal();
        terminal
            .draw(|frame| render_with_keypad(&app, &keypad, frame))
            .unwrap();
        let content = buffer_content(&terminal);
        assert!(content.contains("[7]"));
    }

    #[test]
    fn test_render_history_entries_listed() {
        let mut app = CalculatorApp::new();
        for d in [1u8, 2, 3] {
            app.press(CalcInput::Digit(d));
            app.press(CalcInput::Operator(BinaryOp::Multiply));
            app.press(CalcInput::Digit(d));
            app.press(CalcInput::Equals);
        }
        let content = draw(&app);
        assert!(content.contains("3 * 3 = 9"));
        assert!(content.contains("1 * 1 = 1"));
    }

    // ===== Section render tests =====

    #[test]
    fn test_render_sections_individually() {
        let app = CalculatorApp::new();
        let ui = CalculatorUI::new(&app);
        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 30));

        ui.render_display(Rect::new(0, 0, 40, 4), &mut buf);
        ui.render_memory(Rect::new(0, 4, 40, 3), &mut buf);
        ui.render_history(Rect::new(0, 7, 40, 10), &mut buf);
        ui.render_help(Rect::new(40, 0, 24, 20), &mut buf);

        let content: String = buf.content().iter().map(ratatui::buffer::Cell::symbol).collect();
        assert!(content.contains("Display"));
        assert!(content.contains("Memory"));
        assert!(content.contains(EMPTY_HISTORY));
        assert!(content.contains("Help"));
    }

    // ===== Constant tests =====

    #[test]
    fn test_app_title() {
        assert!(APP_TITLE.contains("Calculator"));
    }

    #[test]
    fn test_help_shortcuts_cover_essentials() {
        let keys: Vec<&str> = HELP_SHORTCUTS.iter().map(|(k, _)| *k).collect();
        assert!(keys.contains(&"Enter"));
        assert!(keys.contains(&"Esc"));
        assert!(keys.contains(&"C-q"));
    }

    #[test]
    fn test_help_shortcuts_have_descriptions() {
        for (key, desc) in HELP_SHORTCUTS {
            assert!(!key.is_empty());
            assert!(!desc.is_empty());
        }
    }

    #[test]
    fn test_version_badge_names_the_crate() {
        assert!(VERSION_BADGE.contains("sumadora"));
    }
}
