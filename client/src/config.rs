//! Page-level configuration: endpoint paths and UI timing.
//!
//! DESIGN
//! ======
//! Constants live in one typed struct provided through Leptos context so the
//! controller never hard-codes a path or delay inline.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_CONNECT_ENDPOINT: &str = "/connect_env";
pub const DEFAULT_CHAT_ENDPOINT: &str = "/chat";
pub const DEFAULT_TARGETS_ENDPOINT: &str = "/api/targets";
pub const DEFAULT_POSTGRES_CONNECT_ENDPOINT: &str = "/api/connect/postgresql";
pub const DEFAULT_SERVICENOW_CONNECT_ENDPOINT: &str = "/api/connect/servicenow";
pub const DEFAULT_CHAT_PATH: &str = "/";
pub const DEFAULT_RECONNECT_PATH: &str = "/connect";
pub const DEFAULT_NO_CONNECTION_MARKER: &str = "No database connection";
pub const DEFAULT_STATUS_INTERVAL_MS: u32 = 1000;
pub const DEFAULT_REDIRECT_DELAY_MS: u32 = 2000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    pub connect_endpoint: String,
    pub chat_endpoint: String,
    pub targets_endpoint: String,
    pub postgres_connect_endpoint: String,
    pub servicenow_connect_endpoint: String,
    /// The chat page, where the connect page sends the browser after a
    /// successful connect.
    pub chat_path: String,
    /// Where the no-connection recovery sends the browser.
    pub reconnect_path: String,
    /// Substring of an application error that triggers the reconnect redirect.
    pub no_connection_marker: String,
    pub status_interval_ms: u32,
    pub redirect_delay_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            connect_endpoint: DEFAULT_CONNECT_ENDPOINT.to_owned(),
            chat_endpoint: DEFAULT_CHAT_ENDPOINT.to_owned(),
            targets_endpoint: DEFAULT_TARGETS_ENDPOINT.to_owned(),
            postgres_connect_endpoint: DEFAULT_POSTGRES_CONNECT_ENDPOINT.to_owned(),
            servicenow_connect_endpoint: DEFAULT_SERVICENOW_CONNECT_ENDPOINT.to_owned(),
            chat_path: DEFAULT_CHAT_PATH.to_owned(),
            reconnect_path: DEFAULT_RECONNECT_PATH.to_owned(),
            no_connection_marker: DEFAULT_NO_CONNECTION_MARKER.to_owned(),
            status_interval_ms: DEFAULT_STATUS_INTERVAL_MS,
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
        }
    }
}

impl PageConfig {
    #[must_use]
    pub fn status_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.status_interval_ms))
    }

    #[must_use]
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.redirect_delay_ms))
    }

    /// Whether an application error means the backend has no live database.
    #[must_use]
    pub fn is_no_connection_error(&self, error: &str) -> bool {
        !self.no_connection_marker.is_empty() && error.contains(&self.no_connection_marker)
    }
}
