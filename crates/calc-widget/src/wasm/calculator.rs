//! Browser-ready calculator widget wrapping the core evaluator.

use serde::{Deserialize, Serialize};

use super::keypad::Keypad;
use crate::core::{CalcResult, Evaluator, History, InputEvent};

/// Keypad mode of the widget; presentation-level state, outside the
/// evaluator proper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Basic four-function keypad.
    #[default]
    Normal,
    /// Scientific keypad with functions, brackets and memory keys.
    Scientific,
}

impl Mode {
    /// Header title for the widget.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Normal => "Calculator",
            Self::Scientific => "Scientific Calculator",
        }
    }

    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Scientific,
            Self::Scientific => Self::Normal,
        }
    }
}

/// The calculator widget: one evaluator plus the keypad mode.
#[derive(Debug, Clone, Default)]
pub struct CalcWidget {
    evaluator: Evaluator,
    mode: Mode,
}

impl CalcWidget {
    /// Creates a widget at the session-start state, in normal mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one input event to the evaluator.
    pub fn handle_event(&mut self, event: InputEvent) {
        self.evaluator.apply(event);
    }

    /// Flips between the normal and scientific keypads.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Current keypad mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The keypad layout for the current mode.
    #[must_use]
    pub fn keypad(&self) -> Keypad {
        Keypad::for_mode(self.mode)
    }

    /// The wrapped evaluator.
    #[must_use]
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Current display string.
    #[must_use]
    pub fn display(&self) -> &str {
        self.evaluator.state().display()
    }

    /// Running-expression trace.
    #[must_use]
    pub fn trace(&self) -> &str {
        self.evaluator.state().trace()
    }

    /// Angle-unit indicator label.
    #[must_use]
    pub fn angle_unit_label(&self) -> &'static str {
        self.evaluator.state().angle_unit().label()
    }

    /// Memory register content.
    #[must_use]
    pub fn memory(&self) -> f64 {
        self.evaluator.state().memory()
    }

    /// Completed-calculation log.
    #[must_use]
    pub fn history(&self) -> &History {
        self.evaluator.state().history()
    }

    /// History records, oldest first.
    #[must_use]
    pub fn history_entries(&self) -> Vec<String> {
        self.history().iter().map(str::to_string).collect()
    }

    /// History records, newest first, for the history panel.
    #[must_use]
    pub fn history_entries_rev(&self) -> Vec<String> {
        self.history().iter_rev().map(str::to_string).collect()
    }

    /// Number of history records.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history().len()
    }

    /// Replays the history entry at `index` into the display. An
    /// out-of-range index is a silent no-op.
    pub fn recall_history(&mut self, index: usize) -> CalcResult<()> {
        let Some(entry) = self.history().get(index).map(str::to_string) else {
            return Ok(());
        };
        self.evaluator.recall_history_entry(&entry)
    }

    /// Plain-text export payload for the history download: one record
    /// per line, oldest first.
    #[must_use]
    pub fn export_history(&self) -> String {
        self.evaluator.export_history()
    }

    /// JSON array view of the history for the host panel.
    pub fn history_json(&self) -> serde_json::Result<String> {
        self.history().to_json()
    }

    /// Routes a keyboard key. Tab toggles the mode; everything else
    /// goes through the keypad mapping. Returns whether the key was
    /// consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Tab" {
            self.toggle_mode();
            return true;
        }
        match Keypad::key_to_event(key) {
            Some(event) => {
                self.handle_event(event);
                true
            }
            None => false,
        }
    }

    /// Routes a keypad button click by element ID. The mode button is
    /// the widget's own; keypad buttons resolve through the current
    /// layout. Returns whether the click was consumed.
    pub fn handle_button(&mut self, button_id: &str) -> bool {
        if button_id == "btn-mode" {
            self.toggle_mode();
            return true;
        }
        // Resolve against the scientific layout so function keys keep
        // working for hosts that render their own grids.
        match Keypad::scientific().handle_click(button_id) {
            Some(event) => {
                self.handle_event(event);
                true
            }
            None => false,
        }
    }
}
