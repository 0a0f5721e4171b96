//! Browser driver: the widget wired to a mock document.
//!
//! Implements [`CalculatorDriver`] by turning every pressed input into a
//! click on the corresponding keypad element, so the shared verification
//! scenarios exercise the full DOM routing path, not just the engine.

use super::dom::{DomElement, DomEvent, MockDom};
use super::keypad::{element_id, MockDomKeypadExt};
use super::widget::CalculatorWidget;
use crate::core::CalcInput;
use crate::driver::CalculatorDriver;

/// Drives a [`CalculatorWidget`] through a [`MockDom`].
///
/// After every event the widget's display, preview, memory indicator,
/// status line, and history list are written back into the document, the
/// same sync a browser page performs after each click.
#[derive(Debug)]
pub struct WasmDriver {
    widget: CalculatorWidget,
    dom: MockDom,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver over a fresh widget and document
    #[must_use]
    pub fn new() -> Self {
        let widget = CalculatorWidget::new();
        let mut dom = MockDom::calculator();
        dom.add_keypad(widget.keypad());
        Self { widget, dom }
    }

    /// Creates a driver over an existing widget and document
    #[must_use]
    pub fn with_widget_and_dom(widget: CalculatorWidget, dom: MockDom) -> Self {
        Self { widget, dom }
    }

    /// The underlying widget
    #[must_use]
    pub fn widget(&self) -> &CalculatorWidget {
        &self.widget
    }

    /// The underlying widget, mutably
    pub fn widget_mut(&mut self) -> &mut CalculatorWidget {
        &mut self.widget
    }

    /// The mock document
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// The mock document, mutably
    pub fn dom_mut(&mut self) -> &mut MockDom {
        &mut self.dom
    }

    /// Simulates a click on a keypad button element.
    ///
    /// The click is recorded in the event history even when the ID does not
    /// name a keypad button; the return value says whether it was routed.
    pub fn click_button(&mut self, button_id: &str) -> bool {
        self.dom.dispatch_event(DomEvent::click(button_id));
        let routed = self.widget.press_button(button_id);
        self.sync_dom();
        routed
    }

    /// Simulates a key-down event on the page
    pub fn send_key(&mut self, key: &str) -> bool {
        self.dom.dispatch_event(DomEvent::key_down(key));
        let routed = self.widget.press_key(key);
        self.sync_dom();
        routed
    }

    /// Writes the widget state back into the document
    fn sync_dom(&mut self) {
        self.dom
            .set_element_text("calc-display", self.widget.display());

        let is_error = self.widget.state().is_error();
        if let Some(display) = self.dom.get_element_mut("calc-display") {
            if is_error {
                display.add_class("error");
            } else {
                display.remove_class("error");
            }
        }

        let preview = self.widget.preview();
        self.dom
            .set_element_text("calc-preview", preview.as_deref().unwrap_or(""));
        if let Some(elem) = self.dom.get_element_mut("calc-preview") {
            elem.set_visible(preview.is_some());
        }

        let indicator = self.widget.memory_indicator();
        if let Some(elem) = self.dom.get_element_mut("calc-memory") {
            elem.set_text(&indicator);
            elem.set_visible(!indicator.is_empty());
        }

        self.dom
            .set_element_text("calc-status", &self.widget.status());

        self.dom.clear_children("calc-history");
        for (i, line) in self.widget.history_lines().iter().enumerate() {
            let item = DomElement::new("li")
                .with_id(&format!("history-{i}"))
                .with_class("history-item")
                .with_text(line);
            self.dom.append_child("calc-history", item);
        }
    }

    /// Text of the display element
    #[must_use]
    pub fn display_element_text(&self) -> Option<&str> {
        self.dom.get_element_text("calc-display")
    }

    /// Text of the preview element
    #[must_use]
    pub fn preview_element_text(&self) -> Option<&str> {
        self.dom.get_element_text("calc-preview")
    }

    /// Text of the status element
    #[must_use]
    pub fn status_element_text(&self) -> Option<&str> {
        self.dom.get_element_text("calc-status")
    }

    /// Text of the memory indicator element
    #[must_use]
    pub fn memory_element_text(&self) -> Option<&str> {
        self.dom.get_element_text("calc-memory")
    }

    /// Texts of the history list items, newest first
    #[must_use]
    pub fn history_list_items(&self) -> Vec<String> {
        let mut items = Vec::new();
        let mut i = 0;
        while let Some(elem) = self.dom.get_element(&format!("history-{i}")) {
            items.push(elem.text_content.clone());
            i += 1;
        }
        items
    }
}

impl CalculatorDriver for WasmDriver {
    fn press(&mut self, input: CalcInput) {
        // Every input has a keypad button, so pressing goes through the
        // same click path a browser user would take.
        self.click_button(&element_id(input));
    }

    fn display(&self) -> String {
        self.widget.display().to_string()
    }

    fn preview(&self) -> Option<String> {
        self.widget.preview()
    }

    fn memory(&self) -> f64 {
        self.widget.memory()
    }

    fn history_lines(&self) -> Vec<String> {
        self.widget.history_lines()
    }

    fn reset(&mut self) {
        self.widget.reset();
        self.sync_dom();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BinaryOp;
    use crate::driver::{
        enter_number, run_full_suite, verify_basic_arithmetic, verify_chaining,
        verify_error_recovery, verify_history_tracking, verify_memory_register,
        verify_scientific_functions,
    };

    // ===== Construction =====

    #[test]
    fn test_wasm_driver_new() {
        let driver = WasmDriver::new();
        assert_eq!(driver.display(), "0");
        assert_eq!(driver.display_element_text(), Some("0"));
    }

    #[test]
    fn test_wasm_driver_default() {
        let driver = WasmDriver::default();
        assert_eq!(driver.display(), "0");
    }

    #[test]
    fn test_wasm_driver_registers_keypad() {
        let driver = WasmDriver::new();
        assert!(driver.dom().get_element("calc-keypad").is_some());
        assert!(driver.dom().get_element("btn-7").is_some());
        assert!(driver.dom().get_element("btn-equals").is_some());
    }

    #[test]
    fn test_wasm_driver_with_widget_and_dom() {
        let widget = CalculatorWidget::new();
        let dom = MockDom::calculator();
        let driver = WasmDriver::with_widget_and_dom(widget, dom);
        assert_eq!(driver.display(), "0");
    }

    // ===== Access =====

    #[test]
    fn test_widget_access() {
        let mut driver = WasmDriver::new();
        driver.widget_mut().press(CalcInput::Digit(7));
        assert_eq!(driver.widget().display(), "7");
    }

    #[test]
    fn test_dom_access() {
        let mut driver = WasmDriver::new();
        driver.dom_mut().set_element_text("calc-display", "test");
        assert_eq!(driver.dom().get_element_text("calc-display"), Some("test"));
    }

    // ===== Click simulation =====

    #[test]
    fn test_click_button_updates_display_element() {
        let mut driver = WasmDriver::new();
        assert!(driver.click_button("btn-7"));
        assert!(driver.click_button("btn-plus"));
        assert!(driver.click_button("btn-3"));
        assert!(driver.click_button("btn-equals"));
        assert_eq!(driver.display_element_text(), Some("10"));
    }

    #[test]
    fn test_click_button_unknown_id() {
        let mut driver = WasmDriver::new();
        assert!(!driver.click_button("btn-unknown"));
        assert_eq!(driver.display_element_text(), Some("0"));
        // The click itself is still part of the event record
        assert_eq!(driver.dom().last_clicked(), Some("btn-unknown"));
    }

    // ===== Key simulation =====

    #[test]
    fn test_send_key_flow() {
        let mut driver = WasmDriver::new();
        for key in ["2", "0", "/", "4", "Enter"] {
            assert!(driver.send_key(key));
        }
        assert_eq!(driver.display_element_text(), Some("5"));
    }

    #[test]
    fn test_send_key_unbound() {
        let mut driver = WasmDriver::new();
        assert!(!driver.send_key("ArrowLeft"));
        assert_eq!(driver.display(), "0");
    }

    // ===== DOM sync =====

    #[test]
    fn test_sync_preview_element() {
        let mut driver = WasmDriver::new();
        driver.click_button("btn-7");
        driver.click_button("btn-plus");
        assert_eq!(driver.preview_element_text(), Some("7 +"));
        let preview = driver.dom().get_element("calc-preview");
        assert_eq!(preview.map(|e| e.visible), Some(true));

        driver.click_button("btn-3");
        driver.click_button("btn-equals");
        assert_eq!(driver.preview_element_text(), Some(""));
        let preview = driver.dom().get_element("calc-preview");
        assert_eq!(preview.map(|e| e.visible), Some(false));
    }

    #[test]
    fn test_sync_error_class_on_display() {
        let mut driver = WasmDriver::new();
        for id in ["btn-1", "btn-divide", "btn-0", "btn-equals"] {
            driver.click_button(id);
        }
        assert_eq!(driver.display_element_text(), Some("Error"));
        let display = driver.dom().get_element("calc-display");
        assert_eq!(display.map(|e| e.has_class("error")), Some(true));

        driver.click_button("btn-8");
        let display = driver.dom().get_element("calc-display");
        assert_eq!(display.map(|e| e.has_class("error")), Some(false));
    }

    #[test]
    fn test_sync_memory_indicator() {
        let mut driver = WasmDriver::new();
        driver.click_button("btn-5");
        driver.click_button("btn-memory-add");
        assert_eq!(driver.memory_element_text(), Some("M = 5"));
        let memory = driver.dom().get_element("calc-memory");
        assert_eq!(memory.map(|e| e.visible), Some(true));

        driver.click_button("btn-memory-clear");
        let memory = driver.dom().get_element("calc-memory");
        assert_eq!(memory.map(|e| e.visible), Some(false));
    }

    #[test]
    fn test_sync_status_element() {
        let mut driver = WasmDriver::new();
        assert_eq!(driver.status_element_text(), Some("Ready"));
        driver.click_button("btn-7");
        driver.click_button("btn-plus");
        assert_eq!(driver.status_element_text(), Some("Pending: 7 +"));
    }

    #[test]
    fn test_sync_history_items() {
        let mut driver = WasmDriver::new();
        for id in ["btn-1", "btn-plus", "btn-1", "btn-equals"] {
            driver.click_button(id);
        }
        for id in ["btn-2", "btn-plus", "btn-2", "btn-equals"] {
            driver.click_button(id);
        }
        let items = driver.history_list_items();
        assert_eq!(items, vec!["2 + 2 = 4", "1 + 1 = 2"]);
    }

    #[test]
    fn test_sync_history_clears_items() {
        let mut driver = WasmDriver::new();
        for id in ["btn-3", "btn-times", "btn-3", "btn-equals"] {
            driver.click_button(id);
        }
        assert_eq!(driver.history_list_items().len(), 1);
        driver.click_button("btn-clear-history");
        assert!(driver.history_list_items().is_empty());
    }

    // ===== CalculatorDriver trait =====

    #[test]
    fn test_press_routes_through_dom_click() {
        let mut driver = WasmDriver::new();
        driver.press(CalcInput::Digit(7));
        assert_eq!(driver.dom().last_clicked(), Some("btn-7"));

        driver.press(CalcInput::Operator(BinaryOp::Add));
        assert_eq!(driver.dom().last_clicked(), Some("btn-plus"));
    }

    #[test]
    fn test_press_all_records_every_click() {
        let mut driver = WasmDriver::new();
        driver.press_all(&[
            CalcInput::Digit(2),
            CalcInput::Operator(BinaryOp::Add),
            CalcInput::Digit(2),
            CalcInput::Equals,
        ]);
        assert_eq!(driver.display(), "4");
        let clicks = driver
            .dom()
            .event_history()
            .iter()
            .filter(|e| matches!(e, DomEvent::Click { .. }))
            .count();
        assert_eq!(clicks, 4);
    }

    #[test]
    fn test_driver_reset() {
        let mut driver = WasmDriver::new();
        driver.press_all(&[CalcInput::Digit(5), CalcInput::MemoryAdd]);
        driver.reset();
        assert_eq!(driver.display(), "0");
        assert_eq!(driver.memory(), 0.0);
        assert_eq!(driver.display_element_text(), Some("0"));
        assert_eq!(driver.status_element_text(), Some("Ready"));
    }

    #[test]
    fn test_enter_number_helper() {
        let mut driver = WasmDriver::new();
        enter_number(&mut driver, "3.25");
        assert_eq!(driver.display(), "3.25");
        assert_eq!(driver.display_element_text(), Some("3.25"));
    }

    // ===== Unified scenario tests =====

    #[test]
    fn test_unified_basic_arithmetic() {
        let mut driver = WasmDriver::new();
        verify_basic_arithmetic(&mut driver);
    }

    #[test]
    fn test_unified_chaining() {
        let mut driver = WasmDriver::new();
        verify_chaining(&mut driver);
    }

    #[test]
    fn test_unified_scientific_functions() {
        let mut driver = WasmDriver::new();
        verify_scientific_functions(&mut driver);
    }

    #[test]
    fn test_unified_error_recovery() {
        let mut driver = WasmDriver::new();
        verify_error_recovery(&mut driver);
    }

    #[test]
    fn test_unified_history_tracking() {
        let mut driver = WasmDriver::new();
        verify_history_tracking(&mut driver);
    }

    #[test]
    fn test_unified_memory_register() {
        let mut driver = WasmDriver::new();
        verify_memory_register(&mut driver);
    }

    #[test]
    fn test_full_suite() {
        let mut driver = WasmDriver::new();
        run_full_suite(&mut driver);
    }

    // ===== Event history =====

    #[test]
    fn test_event_history_records_keys() {
        let mut driver = WasmDriver::new();
        driver.send_key("7");
        driver.send_key("Enter");
        let events = driver.dom().event_history();
        assert!(events
            .iter()
            .any(|e| matches!(e, DomEvent::KeyDown { key } if key == "Enter")));
    }

    #[test]
    fn test_event_history_records_clicks() {
        let mut driver = WasmDriver::new();
        driver.click_button("btn-9");
        let events = driver.dom().event_history();
        assert!(events
            .iter()
            .any(|e| matches!(e, DomEvent::Click { element_id } if element_id == "btn-9")));
    }
}
