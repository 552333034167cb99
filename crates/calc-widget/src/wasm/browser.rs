//! Real browser bindings for the calculator widget.
//!
//! Compiled only with the `wasm` feature; everything here is a thin
//! wasm-bindgen shell over [`CalcWidget`].

use wasm_bindgen::prelude::*;
use web_sys::console;

use super::calculator::CalcWidget;

/// Browser calculator - the WASM entry point the page scripts against.
#[derive(Debug, Default)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    widget: CalcWidget,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Creates a new browser calculator.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            widget: CalcWidget::new(),
        }
    }

    /// Current display string.
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.widget.display().to_string()
    }

    /// Running-expression trace.
    #[wasm_bindgen(getter)]
    pub fn trace(&self) -> String {
        self.widget.trace().to_string()
    }

    /// Angle-unit indicator label (`deg`, `rad`, `grad`).
    #[wasm_bindgen(getter, js_name = angleUnit)]
    pub fn angle_unit(&self) -> String {
        self.widget.angle_unit_label().to_string()
    }

    /// Widget header title for the current mode.
    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        self.widget.mode().title().to_string()
    }

    /// Memory register content.
    #[wasm_bindgen(getter)]
    pub fn memory(&self) -> f64 {
        self.widget.memory()
    }

    /// Routes a keyboard key; returns whether it was consumed.
    #[wasm_bindgen(js_name = pressKey)]
    pub fn press_key(&mut self, key: &str) -> bool {
        self.widget.handle_key(key)
    }

    /// Routes a keypad button click by element ID.
    #[wasm_bindgen(js_name = clickButton)]
    pub fn click_button(&mut self, button_id: &str) -> bool {
        self.widget.handle_button(button_id)
    }

    /// Replays a history entry into the display.
    #[wasm_bindgen(js_name = recallHistory)]
    pub fn recall_history(&mut self, index: usize) -> bool {
        self.widget.recall_history(index).is_ok()
    }

    /// Number of history records.
    #[wasm_bindgen(js_name = historyCount)]
    pub fn history_count(&self) -> usize {
        self.widget.history_len()
    }

    /// History as a JSON array, oldest first.
    #[wasm_bindgen(js_name = historyJson)]
    pub fn history_json(&self) -> String {
        self.widget
            .history_json()
            .unwrap_or_else(|_| "[]".to_string())
    }

    /// Plain-text payload for the history download blob.
    #[wasm_bindgen(js_name = exportHistory)]
    pub fn export_history(&self) -> String {
        self.widget.export_history()
    }
}

/// Module initialization: install the panic hook and announce readiness.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"calculator widget initialized".into());
}
