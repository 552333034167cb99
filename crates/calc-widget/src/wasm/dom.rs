//! Mock DOM for widget testing.
//!
//! A small observable DOM stand-in so the full widget, keypad included,
//! is testable without web-sys or a real browser.

use std::collections::HashMap;

/// A DOM element as the mock sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement {
    /// Element ID.
    pub id: String,
    /// Tag name.
    pub tag: String,
    /// Text content.
    pub text_content: String,
    /// Attributes.
    pub attributes: HashMap<String, String>,
    /// CSS classes.
    pub classes: Vec<String>,
    /// Child elements.
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates an element with the given tag.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets the element ID.
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content.
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a CSS class.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute.
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child element.
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Replaces the text content.
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Whether the element carries a class.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Attribute lookup.
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Events the widget surface reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click on a button element.
    Click {
        /// ID of the clicked element.
        element_id: String,
    },
    /// Keyboard key press.
    KeyPress {
        /// The pressed key, in browser `KeyboardEvent.key` spelling.
        key: String,
    },
}

impl DomEvent {
    /// Click event constructor.
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Key-press event constructor.
    #[must_use]
    pub fn key_press(key: &str) -> Self {
        Self::KeyPress {
            key: key.to_string(),
        }
    }
}

/// Mock DOM: an element registry plus an event log.
#[derive(Debug, Default)]
pub struct MockDom {
    elements: HashMap<String, DomElement>,
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty mock DOM.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the calculator widget skeleton: trace line, display,
    /// angle-unit indicator, history list, and the header buttons.
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();

        let trace = DomElement::new("div")
            .with_id("calc-trace")
            .with_class("trace-line");

        let display = DomElement::new("div")
            .with_id("calc-display")
            .with_class("display")
            .with_text("0");

        let angle = DomElement::new("span")
            .with_id("calc-angle-unit")
            .with_class("angle-indicator")
            .with_text("deg");

        let history = DomElement::new("ul")
            .with_id("calc-history")
            .with_class("history-list");

        let mode_btn = DomElement::new("button").with_id("btn-mode").with_text("⇄");
        let export_btn = DomElement::new("button")
            .with_id("btn-export")
            .with_text("Download");

        dom.register_element(trace);
        dom.register_element(display);
        dom.register_element(angle);
        dom.register_element(history);
        dom.register_element(mode_btn);
        dom.register_element(export_btn);

        dom
    }

    /// Registers an element for ID lookup; elements without an ID are
    /// not addressable and are dropped.
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Element lookup by ID.
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Mutable element lookup by ID.
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Records an event in the log.
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// The event log, oldest first.
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Drops the event log.
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Replaces an element's text by ID.
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Reads an element's text by ID.
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Appends a child under a parent, registering it when it has an ID.
    pub fn append_child(&mut self, parent_id: &str, child: DomElement) {
        let child_id = child.id.clone();
        if let Some(parent) = self.elements.get_mut(parent_id) {
            parent.children.push(child.clone());
        }
        if !child_id.is_empty() {
            self.elements.insert(child_id, child);
        }
    }

    /// Removes all children of an element, deregistering them.
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
