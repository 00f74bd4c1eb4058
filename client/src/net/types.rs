//! Shared wire-protocol DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The host server depends on this crate (`ssr` feature) and reuses these
//! types when forwarding `/connect_env` and `/chat`, so both sides agree on
//! one schema.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// DATABASE TARGETS
// =============================================================================

/// The fixed set of database backends the assistant can attach to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatabaseKind {
    #[serde(rename = "postgresql")]
    Postgres,
    #[serde(rename = "servicenow")]
    ServiceNow,
    #[serde(rename = "sqlite")]
    Sqlite,
}

impl DatabaseKind {
    pub const ALL: [Self; 3] = [Self::Postgres, Self::ServiceNow, Self::Sqlite];

    /// Wire tag sent as `db_type`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Postgres => "postgresql",
            Self::ServiceNow => "servicenow",
            Self::Sqlite => "sqlite",
        }
    }

    /// Human-readable kind used in the "Connecting to ..." message.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Postgres => "PostgreSQL Database",
            Self::ServiceNow => "ServiceNow Instance",
            Self::Sqlite => "SQLite Database",
        }
    }
}

/// One connect button in the database nav.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseTarget {
    pub kind: DatabaseKind,
    /// Database or instance name shown to the user.
    pub name: String,
    /// Clicks on an unavailable target are ignored.
    pub available: bool,
}

/// The database the backend is currently attached to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentConnection {
    pub kind: DatabaseKind,
    pub name: String,
}

/// Page context served by `GET /api/targets`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    #[serde(default)]
    pub targets: Vec<DatabaseTarget>,
    #[serde(default)]
    pub current: Option<CurrentConnection>,
}

// =============================================================================
// CONNECT
// =============================================================================

/// Body of `POST /connect_env`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectRequest {
    pub db_type: DatabaseKind,
}

/// Response of `POST /connect_env`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Manually entered PostgreSQL credentials from the connect page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostgresCredentials {
    pub host: String,
    pub port: String,
    pub database: String,
    pub user: String,
    pub password: String,
    /// Optional; blank means the server's default schema.
    #[serde(default)]
    pub schema: String,
}

impl PostgresCredentials {
    /// Names of required fields that are blank.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        blank_fields(&[
            ("host", &self.host),
            ("port", &self.port),
            ("database", &self.database),
            ("user", &self.user),
            ("password", &self.password),
        ])
    }
}

/// Manually entered ServiceNow credentials from the connect page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceNowCredentials {
    /// API base URL.
    pub api: String,
    pub user: String,
    pub password: String,
}

impl ServiceNowCredentials {
    /// Names of required fields that are blank.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        blank_fields(&[("api", &self.api), ("user", &self.user), ("password", &self.password)])
    }
}

fn blank_fields(fields: &[(&'static str, &String)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}

// =============================================================================
// CHAT
// =============================================================================

/// Body of `POST /chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Raw response of `POST /chat`.
///
/// The server sends either `{ "error": ... }` or the answer fields; every
/// field is optional here and [`ChatResponse::into_reply`] decides which.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_updates: Option<Vec<String>>,
    #[serde(default)]
    pub logs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_response: Option<String>,
}

/// A chat response after precedence has been applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatReply {
    /// Application-level error reported by the server.
    Failed(String),
    Answer(ChatAnswer),
}

/// The assistant's answer plus its side-pane payloads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatAnswer {
    /// Markdown.
    pub message: String,
    pub status_updates: Vec<String>,
    pub logs: Vec<String>,
    /// Markdown for the results pane.
    pub database_response: Option<String>,
}

impl ChatResponse {
    /// An empty `error` string counts as no error.
    #[must_use]
    pub fn into_reply(self) -> ChatReply {
        match self.error {
            Some(error) if !error.is_empty() => ChatReply::Failed(error),
            _ => ChatReply::Answer(ChatAnswer {
                message: self.message.unwrap_or_default(),
                status_updates: self.status_updates.unwrap_or_default(),
                logs: self.logs,
                database_response: self.database_response,
            }),
        }
    }
}
