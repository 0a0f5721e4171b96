//! Interactive terminal calculator.

use std::io;

use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use sumadora::tui::{
    render_with_keypad, screen_layout, CalculatorApp, InputHandler, KeyAction, Keypad, Theme,
};

/// Command-line options
#[derive(Debug, Parser)]
#[command(name = "sumadora", version, about = "Interactive calculator for the terminal")]
struct Cli {
    /// Color theme
    #[arg(long, value_enum, default_value_t = Theme::Dark)]
    theme: Theme,

    /// Start with the history panel hidden
    #[arg(long)]
    hide_history: bool,
}

fn main() -> io::Result<()> {
    // Log to stderr so warnings never land in the alternate screen
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &cli);
    teardown_terminal(&mut terminal)?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }
    Ok(())
}

/// Puts the terminal into raw mode on the alternate screen with mouse
/// capture enabled
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restores the terminal to normal mode
fn teardown_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    cli: &Cli,
) -> io::Result<()> {
    let mut app = CalculatorApp::with_theme(cli.theme);
    if cli.hide_history {
        app.hide_history();
    }
    let handler = InputHandler::new();
    let mut keypad = Keypad::new();

    loop {
        terminal.draw(|frame| render_with_keypad(&app, &keypad, frame))?;

        if app.should_quit() {
            break;
        }

        match event::read()? {
            Event::Key(key) => {
                let action = handler.handle_key(key);
                if let KeyAction::Input(input) = action {
                    keypad.highlight_input(input);
                } else {
                    keypad.release_all();
                }
                app.handle_action(action);
            }
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    let keypad_area = screen_layout(area).keypad;
                    if let Some(input) = keypad.input_at(keypad_area, mouse.column, mouse.row) {
                        keypad.highlight_input(input);
                        app.press(input);
                    }
                }
            }
            _ => {}
        }
    }

    Ok(())
}
