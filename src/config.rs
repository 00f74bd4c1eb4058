//! Host configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! The host owns no database credentials of its own; the target settings are
//! read only to decide which connect buttons are usable and what to call
//! them. The backend reads the same variables when `/connect_env` arrives.

use std::path::Path;
use std::time::Duration;

use client::net::types::{CurrentConnection, DatabaseKind, DatabaseTarget};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SERVICENOW_INSTANCE_NAME: &str = "ServiceNow";
pub const DEFAULT_SQLITE_DB_PATH: &str = "data/chinook.db";
const UNKNOWN_NAME: &str = "Unknown";

/// Errors produced while reading startup configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl BackendTimeouts {
    #[must_use]
    pub fn request(self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

/// `POSTGRESQL_*` settings. Every field but `schema` is required for the
/// target to be offered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostgresSettings {
    pub host: Option<String>,
    pub port: Option<String>,
    pub database: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub schema: Option<String>,
}

impl PostgresSettings {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.host, &self.port, &self.database, &self.user, &self.password]
            .iter()
            .all(|v| v.is_some())
    }
}

/// `SERVICENOW_*` settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceNowSettings {
    pub api_base_url: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub instance_name: String,
}

impl Default for ServiceNowSettings {
    fn default() -> Self {
        Self { api_base_url: None, user: None, password: None, instance_name: DEFAULT_SERVICENOW_INSTANCE_NAME.into() }
    }
}

impl ServiceNowSettings {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.api_base_url.is_some() && self.user.is_some() && self.password.is_some()
    }
}

/// The three connect targets as configured in the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetsConfig {
    pub postgres: PostgresSettings,
    pub servicenow: ServiceNowSettings,
    pub sqlite_path: String,
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            postgres: PostgresSettings::default(),
            servicenow: ServiceNowSettings::default(),
            sqlite_path: DEFAULT_SQLITE_DB_PATH.into(),
        }
    }
}

impl TargetsConfig {
    /// Read target settings. Empty values count as unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            postgres: PostgresSettings {
                host: env_non_empty("POSTGRESQL_HOST"),
                port: env_non_empty("POSTGRESQL_PORT"),
                database: env_non_empty("POSTGRESQL_DATABASE"),
                user: env_non_empty("POSTGRESQL_USER"),
                password: env_non_empty("POSTGRESQL_PASSWORD"),
                schema: env_non_empty("POSTGRESQL_SCHEMA"),
            },
            servicenow: ServiceNowSettings {
                api_base_url: env_non_empty("SERVICENOW_API_BASE_URL"),
                user: env_non_empty("SERVICENOW_USER"),
                password: env_non_empty("SERVICENOW_PASSWORD"),
                instance_name: env_non_empty("SERVICENOW_INSTANCE_NAME")
                    .unwrap_or_else(|| DEFAULT_SERVICENOW_INSTANCE_NAME.into()),
            },
            sqlite_path: env_non_empty("SQLITE_DB_PATH").unwrap_or_else(|| DEFAULT_SQLITE_DB_PATH.into()),
        }
    }

    /// Name shown for `kind`: database name, instance name, or file name.
    #[must_use]
    pub fn display_name(&self, kind: DatabaseKind) -> String {
        match kind {
            DatabaseKind::Postgres => self
                .postgres
                .database
                .clone()
                .unwrap_or_else(|| UNKNOWN_NAME.into()),
            DatabaseKind::ServiceNow => self.servicenow.instance_name.clone(),
            DatabaseKind::Sqlite => Path::new(&self.sqlite_path)
                .file_name()
                .map_or_else(|| UNKNOWN_NAME.into(), |n| n.to_string_lossy().into_owned()),
        }
    }

    #[must_use]
    pub fn is_available(&self, kind: DatabaseKind) -> bool {
        match kind {
            DatabaseKind::Postgres => self.postgres.is_complete(),
            DatabaseKind::ServiceNow => self.servicenow.is_complete(),
            DatabaseKind::Sqlite => true,
        }
    }

    /// One target per kind, in nav order.
    #[must_use]
    pub fn targets(&self) -> Vec<DatabaseTarget> {
        DatabaseKind::ALL
            .into_iter()
            .map(|kind| DatabaseTarget { kind, name: self.display_name(kind), available: self.is_available(kind) })
            .collect()
    }

    #[must_use]
    pub fn connection(&self, kind: DatabaseKind) -> CurrentConnection {
        CurrentConnection { kind, name: self.display_name(kind) }
    }
}

/// Full host configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Backend base URL without a trailing slash.
    pub backend_url: String,
    pub timeouts: BackendTimeouts,
    pub targets: TargetsConfig,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: default `http://127.0.0.1:5000`
    /// - `BACKEND_REQUEST_TIMEOUT_SECS`: default 120
    /// - `BACKEND_CONNECT_TIMEOUT_SECS`: default 10
    /// - target settings, see [`TargetsConfig::from_env`]
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `PORT` is set but not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            Err(_) => DEFAULT_PORT,
        };
        let backend_url = normalize_base_url(
            &std::env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string()),
        );
        let timeouts = BackendTimeouts {
            request_secs: env_parse_u64("BACKEND_REQUEST_TIMEOUT_SECS", DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("BACKEND_CONNECT_TIMEOUT_SECS", DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { port, backend_url, timeouts, targets: TargetsConfig::from_env() })
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
