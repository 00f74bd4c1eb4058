//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the backend client, the configured targets, and the connection the
//! backend was last told to use.

use std::sync::Arc;

use client::net::types::{CurrentConnection, DatabaseKind, PageContext};
use tokio::sync::RwLock;

use crate::backend::AssistantBackend;
use crate::config::TargetsConfig;

/// Shared application state.
/// Clone is required by Axum; every inner field is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn AssistantBackend>,
    pub targets: Arc<TargetsConfig>,
    /// Last connection the backend accepted. Starts as SQLite, which the
    /// backend attaches to on its own at startup.
    pub current: Arc<RwLock<Option<CurrentConnection>>>,
}

impl AppState {
    #[must_use]
    pub fn new(backend: Arc<dyn AssistantBackend>, targets: TargetsConfig) -> Self {
        let initial = targets.connection(DatabaseKind::Sqlite);
        Self { backend, targets: Arc::new(targets), current: Arc::new(RwLock::new(Some(initial))) }
    }

    pub async fn set_current(&self, connection: CurrentConnection) {
        *self.current.write().await = Some(connection);
    }

    pub async fn page_context(&self) -> PageContext {
        let current = self.current.read().await.clone();
        PageContext { targets: self.targets.targets(), current }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
