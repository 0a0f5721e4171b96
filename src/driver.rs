//! Unified calculator driver.
//!
//! Write the verification logic once, run it against every shell: the TUI
//! driver and the browser driver both implement [`CalculatorDriver`], so the
//! same key-press scenarios exercise whichever front end is compiled in.

use crate::core::CalcInput;

/// Abstract driver trait for calculator interactions.
///
/// Both the TUI and WASM drivers implement this trait, so a scenario written
/// against it runs unchanged on either shell.
///
/// # Example
///
/// ```rust,ignore
/// fn verify_addition<D: CalculatorDriver>(driver: &mut D) {
///     enter_number(driver, "7");
///     driver.press(CalcInput::Operator(BinaryOp::Add));
///     enter_number(driver, "3");
///     driver.press(CalcInput::Equals);
///     assert_eq!(driver.display(), "10");
/// }
/// ```
pub trait CalculatorDriver {
    /// Feeds one input event to the calculator
    fn press(&mut self, input: CalcInput);

    /// The text currently shown in the main display
    fn display(&self) -> String;

    /// The pending-operation preview line, if one is shown
    fn preview(&self) -> Option<String>;

    /// The memory register
    fn memory(&self) -> f64;

    /// Rendered history lines, newest first
    fn history_lines(&self) -> Vec<String>;

    /// Returns the calculator to its initial state
    fn reset(&mut self);

    /// Feeds a sequence of input events
    fn press_all(&mut self, inputs: &[CalcInput]) {
        for &input in inputs {
            self.press(input);
        }
    }
}

/// Presses the key sequence for a number literal, digit by digit.
///
/// Characters other than digits and `.` are ignored; negative operands are
/// entered by pressing [`CalcInput::ToggleSign`] afterwards.
pub fn enter_number<D: CalculatorDriver + ?Sized>(driver: &mut D, literal: &str) {
    for ch in literal.chars() {
        if let Some(d) = ch.to_digit(10) {
            driver.press(CalcInput::Digit(d as u8));
        } else if ch == '.' {
            driver.press(CalcInput::Decimal);
        }
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalcInput, CalculatorDriver};
    use crate::tui::CalculatorApp;

    /// TUI-specific driver wrapping the calculator app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self {
                app: CalculatorApp::new(),
            }
        }

        /// Creates a TUI driver over an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, input: CalcInput) {
            self.app.press(input);
        }

        fn display(&self) -> String {
            self.app.state().display().to_string()
        }

        fn preview(&self) -> Option<String> {
            self.app.state().pending_expression()
        }

        fn memory(&self) -> f64 {
            self.app.state().memory()
        }

        fn history_lines(&self) -> Vec<String> {
            self.app.state().history().lines()
        }

        fn reset(&mut self) {
            self.app.reset();
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified verification scenarios =====
// These run against ANY CalculatorDriver implementation.

/// Verifies the four basic operators end to end
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    use crate::core::BinaryOp;

    driver.reset();
    enter_number(driver, "7");
    driver.press(CalcInput::Operator(BinaryOp::Add));
    enter_number(driver, "3");
    driver.press(CalcInput::Equals);
    assert_eq!(driver.display(), "10");

    driver.reset();
    enter_number(driver, "10");
    driver.press(CalcInput::Operator(BinaryOp::Subtract));
    enter_number(driver, "4");
    driver.press(CalcInput::Equals);
    assert_eq!(driver.display(), "6");

    driver.reset();
    enter_number(driver, "6");
    driver.press(CalcInput::Operator(BinaryOp::Multiply));
    enter_number(driver, "7");
    driver.press(CalcInput::Equals);
    assert_eq!(driver.display(), "42");

    driver.reset();
    enter_number(driver, "20");
    driver.press(CalcInput::Operator(BinaryOp::Divide));
    enter_number(driver, "4");
    driver.press(CalcInput::Equals);
    assert_eq!(driver.display(), "5");
}

/// Verifies strict left-to-right chaining without precedence
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    use crate::core::BinaryOp;

    driver.reset();
    enter_number(driver, "2");
    driver.press(CalcInput::Operator(BinaryOp::Add));
    enter_number(driver, "3");
    driver.press(CalcInput::Operator(BinaryOp::Multiply));
    assert_eq!(driver.display(), "5");
    assert_eq!(driver.preview(), Some("5 *".to_string()));

    enter_number(driver, "4");
    driver.press(CalcInput::Equals);
    assert_eq!(driver.display(), "20");
    assert_eq!(driver.preview(), None);
}

/// Verifies the scientific functions
pub fn verify_scientific_functions<D: CalculatorDriver>(driver: &mut D) {
    use crate::core::UnaryOp;

    driver.reset();
    enter_number(driver, "9");
    driver.press(CalcInput::Unary(UnaryOp::Sqrt));
    assert_eq!(driver.display(), "3");

    driver.reset();
    enter_number(driver, "5");
    driver.press(CalcInput::Unary(UnaryOp::Factorial));
    assert_eq!(driver.display(), "120");

    driver.reset();
    enter_number(driver, "30");
    driver.press(CalcInput::Unary(UnaryOp::Sin));
    assert_eq!(driver.display(), "0.5");
}

/// Verifies the error sink and recovery from it
pub fn verify_error_recovery<D: CalculatorDriver>(driver: &mut D) {
    use crate::core::BinaryOp;

    driver.reset();
    enter_number(driver, "1");
    driver.press(CalcInput::Operator(BinaryOp::Divide));
    enter_number(driver, "0");
    driver.press(CalcInput::Equals);
    assert_eq!(driver.display(), "Error");

    // Non-exit inputs are ignored
    driver.press(CalcInput::Operator(BinaryOp::Add));
    driver.press(CalcInput::Equals);
    assert_eq!(driver.display(), "Error");

    // A fresh digit recovers
    enter_number(driver, "8");
    assert_eq!(driver.display(), "8");
}

/// Verifies history tracking, newest first
pub fn verify_history_tracking<D: CalculatorDriver>(driver: &mut D) {
    use crate::core::BinaryOp;

    driver.reset();
    for n in 1..=3 {
        enter_number(driver, &n.to_string());
        driver.press(CalcInput::Operator(BinaryOp::Add));
        enter_number(driver, &n.to_string());
        driver.press(CalcInput::Equals);
    }

    let lines = driver.history_lines();
    assert_eq!(lines, vec!["3 + 3 = 6", "2 + 2 = 4", "1 + 1 = 2"]);

    driver.press(CalcInput::ClearHistory);
    assert!(driver.history_lines().is_empty());
}

/// Verifies the memory register across clears
pub fn verify_memory_register<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    enter_number(driver, "42");
    driver.press(CalcInput::MemoryAdd);
    driver.press(CalcInput::ClearAll);
    assert_eq!(driver.memory(), 42.0);
    assert_eq!(driver.display(), "0");

    driver.press(CalcInput::MemoryRecall);
    assert_eq!(driver.display(), "42");

    driver.press(CalcInput::MemoryClear);
    assert_eq!(driver.memory(), 0.0);
}

/// Complete verification suite: runs every scenario in order
pub fn run_full_suite<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_chaining(driver);
    verify_scientific_functions(driver);
    verify_error_recovery(driver);
    verify_history_tracking(driver);
    verify_memory_register(driver);
}
