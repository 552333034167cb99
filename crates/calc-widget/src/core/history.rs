//! Append-only calculation history and its plain-text export.

use serde::{Deserialize, Serialize};

/// Ordered log of completed-calculation records.
///
/// Records are plain strings, `"a op b = result"` for binary steps and
/// `"fn(x) = result"` for function applications. They are appended as
/// calculations complete and never mutated afterwards; clearing the
/// calculator leaves the log intact, and the log dies with the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a completed-calculation record.
    pub fn record(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent record, if any.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// Record at `index`, counting from the oldest.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(String::as_str)
    }

    /// Iterates newest first, for history panels.
    pub fn iter_rev(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().rev().map(String::as_str)
    }

    /// Newline-joined export, one record per line in insertion order.
    ///
    /// This is the download payload, the single artifact the widget
    /// ever persists.
    #[must_use]
    pub fn export_text(&self) -> String {
        self.entries.join("\n")
    }

    /// JSON array view for the host history panel.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.entries)
    }
}
