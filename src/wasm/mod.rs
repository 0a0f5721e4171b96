//! Browser shell.
//!
//! The widget, keypad, and mock document are plain Rust and compile on
//! every target, so the whole browser behavior is covered by native tests;
//! only the `browser` module touches wasm-bindgen and needs the `wasm`
//! feature.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod keypad;
mod widget;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use dom::{DomElement, DomEvent, MockDom};
pub use driver::WasmDriver;
pub use keypad::{element_id, DomButton, DomKeypad, MockDomKeypadExt};
pub use widget::CalculatorWidget;
