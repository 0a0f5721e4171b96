//! Mock DOM for exercising the browser widget natively.
//!
//! The widget renders into named elements; this module provides an in-memory
//! stand-in for that element tree so every browser behavior is testable
//! without web-sys or a real browser.

use std::collections::HashMap;

/// An element in the mock document tree
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Tag name, e.g. `"button"`
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Whether the element is shown
    pub visible: bool,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates an element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            visible: true,
            children: Vec::new(),
        }
    }

    /// Sets the element ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a CSS class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Appends a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Replaces the text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Shows or hides the element
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Adds a class unless it is already present
    pub fn add_class(&mut self, class: &str) {
        if !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Checks whether a class is present
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Looks up an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Events the widget reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click on an element
    Click {
        /// ID of the clicked element
        element_id: String,
    },
    /// Key press, carrying the browser `event.key` value
    KeyDown {
        /// The key, e.g. `"7"`, `"Enter"`, `"Backspace"`
        key: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a key-down event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }
}

/// In-memory document holding the calculator's elements.
///
/// Elements are registered by ID; dispatching an event records it in the
/// event history so tests can assert on the full interaction sequence.
#[derive(Debug)]
pub struct MockDom {
    /// Root element
    pub root: DomElement,
    elements: HashMap<String, DomElement>,
    event_history: Vec<DomEvent>,
    last_clicked: Option<String>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates an empty document
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: DomElement::new("div").with_id("root"),
            elements: HashMap::new(),
            event_history: Vec::new(),
            last_clicked: None,
        }
    }

    /// Creates the calculator widget's element tree.
    ///
    /// Keypad buttons are added separately via
    /// [`MockDomKeypadExt::add_keypad`](super::MockDomKeypadExt::add_keypad).
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();

        let display = DomElement::new("div")
            .with_id("calc-display")
            .with_class("display")
            .with_text("0");

        let preview = DomElement::new("div")
            .with_id("calc-preview")
            .with_class("preview");

        let memory = DomElement::new("div")
            .with_id("calc-memory")
            .with_class("memory-indicator");

        let status = DomElement::new("div")
            .with_id("calc-status")
            .with_class("status-line")
            .with_text("Ready");

        let history = DomElement::new("ul")
            .with_id("calc-history")
            .with_class("history-list");

        dom.root = DomElement::new("div")
            .with_id("calculator")
            .with_class("calculator-widget")
            .with_child(display.clone())
            .with_child(preview.clone())
            .with_child(memory.clone())
            .with_child(status.clone())
            .with_child(history.clone());

        dom.register_element(display);
        dom.register_element(preview);
        dom.register_element(memory);
        dom.register_element(status);
        dom.register_element(history);

        dom
    }

    /// Registers an element for ID lookup; elements without an ID are dropped
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Looks up an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Looks up an element mutably by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Dispatches an event, recording it in the event history
    pub fn dispatch_event(&mut self, event: DomEvent) {
        if let DomEvent::Click { element_id } = &event {
            self.last_clicked = Some(element_id.clone());
        }
        self.event_history.push(event);
    }

    /// All dispatched events, oldest first
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Forgets all dispatched events
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// ID of the most recently clicked element
    #[must_use]
    pub fn last_clicked(&self) -> Option<&str> {
        self.last_clicked.as_deref()
    }

    /// Sets the text of the element with the given ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Reads the text of the element with the given ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Appends a child to a parent element, registering the child's ID
    pub fn append_child(&mut self, parent_id: &str, child: DomElement) {
        let child_id = child.id.clone();
        if let Some(parent) = self.elements.get_mut(parent_id) {
            parent.children.push(child.clone());
        }
        if !child_id.is_empty() {
            self.elements.insert(child_id, child);
        }
    }

    /// Removes all children of an element, unregistering their IDs
    pub fn clear_children(&mut self, id: &str) {
        let child_ids: Vec<String> = self
            .elements
            .get(id)
            .map(|elem| {
                elem.children
                    .iter()
                    .filter(|c| !c.id.is_empty())
                    .map(|c| c.id.clone())
                    .collect()
            })
            .unwrap_or_default();

        for child_id in child_ids {
            self.elements.remove(&child_id);
        }

        if let Some(elem) = self.elements.get_mut(id) {
            elem.children.clear();
        }
    }
}
