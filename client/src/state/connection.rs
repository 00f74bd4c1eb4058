#[cfg(test)]
#[path = "connection_test.rs"]
mod connection_test;

use crate::net::types::{DatabaseKind, DatabaseTarget, PageContext};

/// Known database targets and the backend's current connection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectionState {
    pub context: PageContext,
    pub loaded: bool,
}

impl ConnectionState {
    pub fn load(&mut self, context: PageContext) {
        self.context = context;
        self.loaded = true;
    }

    #[must_use]
    pub fn target(&self, kind: DatabaseKind) -> Option<&DatabaseTarget> {
        self.context.targets.iter().find(|t| t.kind == kind)
    }

    /// Header text, e.g. `Connected to chinook.db (SQLite Database)`.
    #[must_use]
    pub fn summary(&self) -> String {
        match &self.context.current {
            Some(current) => format!("Connected to {} ({})", current.name, current.kind.display_name()),
            None if self.loaded => "Not connected".to_owned(),
            None => String::new(),
        }
    }
}
