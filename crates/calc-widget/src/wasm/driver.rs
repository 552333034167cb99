//! Mock-DOM driver: drives the widget the way a browser would and keeps
//! the mock DOM in sync, so DOM-level behavior is testable headlessly.

use super::calculator::CalcWidget;
use super::dom::{DomElement, DomEvent, MockDom};
use super::keypad::{Keypad, MockDomKeypadExt};
use crate::core::{CalcResult, InputEvent};
use crate::driver::CalculatorDriver;

/// Widget plus mock DOM, synced after every interaction.
#[derive(Debug)]
pub struct WidgetDriver {
    widget: CalcWidget,
    dom: MockDom,
}

impl Default for WidgetDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetDriver {
    /// Creates a driver over a fresh widget and calculator DOM. The
    /// full scientific keypad is registered so every button the widget
    /// can route is clickable.
    #[must_use]
    pub fn new() -> Self {
        let widget = CalcWidget::new();
        let mut dom = MockDom::calculator();
        dom.add_keypad(&Keypad::scientific());
        let mut driver = Self { widget, dom };
        driver.sync_dom();
        driver
    }

    /// The widget under test.
    #[must_use]
    pub fn widget(&self) -> &CalcWidget {
        &self.widget
    }

    /// Mutable widget access.
    pub fn widget_mut(&mut self) -> &mut CalcWidget {
        &mut self.widget
    }

    /// The mock DOM.
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Mutable DOM access.
    pub fn dom_mut(&mut self) -> &mut MockDom {
        &mut self.dom
    }

    /// Simulates clicking a button element.
    pub fn click(&mut self, button_id: &str) {
        self.dom.dispatch_event(DomEvent::click(button_id));
        self.widget.handle_button(button_id);
        self.sync_dom();
    }

    /// Simulates a keyboard key press.
    pub fn press_key(&mut self, key: &str) {
        self.dom.dispatch_event(DomEvent::key_press(key));
        self.widget.handle_key(key);
        self.sync_dom();
    }

    /// Simulates clicking a history panel entry.
    pub fn click_history_entry(&mut self, index: usize) -> CalcResult<()> {
        self.widget.recall_history(index)?;
        self.sync_dom();
        Ok(())
    }

    /// The export payload the download button would produce.
    #[must_use]
    pub fn export_text(&self) -> String {
        self.widget.export_history()
    }

    /// Display element text.
    #[must_use]
    pub fn display_element_text(&self) -> Option<&str> {
        self.dom.get_element_text("calc-display")
    }

    /// Trace element text.
    #[must_use]
    pub fn trace_element_text(&self) -> Option<&str> {
        self.dom.get_element_text("calc-trace")
    }

    /// History list items, newest first.
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

    /// Pushes widget state into the DOM.
    fn sync_dom(&mut self) {
        self.dom.set_element_text("calc-display", self.widget.display());
        self.dom.set_element_text("calc-trace", self.widget.trace());
        self.dom
            .set_element_text("calc-angle-unit", self.widget.angle_unit_label());

        self.dom.clear_children("calc-history");
        for (i, entry) in self.widget.history_entries_rev().iter().enumerate() {
            let item = DomElement::new("li")
                .with_id(&format!("history-{i}"))
                .with_text(entry);
            self.dom.append_child("calc-history", item);
        }
    }
}

impl CalculatorDriver for WidgetDriver {
    fn tap(&mut self, event: InputEvent) {
        self.widget.handle_event(event);
        self.sync_dom();
    }

    fn display(&self) -> String {
        self.widget.display().to_string()
    }

    fn trace(&self) -> String {
        self.widget.trace().to_string()
    }

    fn history(&self) -> Vec<String> {
        self.widget.history_entries()
    }
}
