//! Results and logs side panes.

#[cfg(test)]
#[path = "panes_test.rs"]
mod panes_test;

/// Rendered database response. Empty means the pane is cleared.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultsState {
    pub html: String,
}

impl ResultsState {
    pub fn set(&mut self, html: String) {
        self.html = html;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

/// Log lines from the most recent chat response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogsState {
    pub lines: Vec<String>,
}

impl LogsState {
    /// Drop all previous lines and keep the new sequence in order.
    pub fn replace(&mut self, lines: Vec<String>) {
        self.lines = lines;
    }
}
