//! Sumadora - a calculator engine with terminal and browser shells.
//!
//! The engine is a single value, [`core::CalculatorState`], advanced by pure
//! transitions: every key press maps to a [`core::CalcInput`], and
//! [`core::CalculatorState::apply`] returns the next state. The terminal and
//! browser shells are thin layers over that one engine, and the shared
//! [`driver::CalculatorDriver`] trait lets the same verification scenarios
//! run against both.
//!
//! # Example
//!
//! ```rust
//! use sumadora::prelude::*;
//!
//! let state = CalculatorState::new()
//!     .apply(CalcInput::Digit(7))
//!     .apply(CalcInput::Operator(BinaryOp::Add))
//!     .apply(CalcInput::Digit(3))
//!     .apply(CalcInput::Equals);
//!
//! assert_eq!(state.display(), "10");
//! assert_eq!(state.history().lines(), vec!["7 + 3 = 10"]);
//! ```

// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// Browser shell - always compiled so the mock DOM keeps the whole widget
/// testable without a browser
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        format_value, ArithmeticError, BinaryOp, CalcInput, CalcResult, CalculatorState, History,
        HistoryEntry, UnaryOp,
    };
    pub use crate::driver::CalculatorDriver;

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::wasm::{CalculatorWidget, DomElement, DomEvent, MockDom, WasmDriver};
}
