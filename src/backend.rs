//! Assistant backend client.
//!
//! DESIGN
//! ======
//! The host forwards `/connect_env` and `/chat` to the assistant backend and
//! hands the JSON body back untouched, so unknown fields survive the trip.
//! Handlers depend on the [`AssistantBackend`] trait so tests can swap in a
//! mock.
//!
//! MANUAL CONNECT
//! ==============
//! Credential connects go to the backend's form endpoints `/connect` and
//! `/connect_snow`. Those answer with a redirect on success and re-render the
//! connect form on failure, so redirects are not followed: a `3xx` is
//! success, and a `2xx` carries the failure text inside the HTML.

use async_trait::async_trait;
use client::net::types::{
    ChatRequest, ConnectRequest, ConnectResponse, DatabaseKind, PostgresCredentials, ServiceNowCredentials,
};
use serde::Serialize;
use serde_json::Value;

use crate::config::{BackendTimeouts, HostConfig};

const FORM_FAILURE_PREFIX: &str = "Failed to connect";
pub const GENERIC_CONNECT_FAILURE: &str = "Failed to connect to the database.";

/// Errors produced while talking to the assistant backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The request could not be sent or the body could not be read.
    #[error("backend request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("backend responded with status {status}")]
    Status { status: u16, body: String },

    /// The backend body was not JSON.
    #[error("backend response parse failed: {0}")]
    Decode(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl BackendError {
    /// Response body of a non-success status, for logging.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

#[async_trait]
pub trait AssistantBackend: Send + Sync {
    /// Forward a connect request.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] on transport failure, non-2xx status, or a
    /// non-JSON body.
    async fn connect_env(&self, request: &ConnectRequest) -> Result<Value, BackendError>;

    /// Submit manually entered PostgreSQL credentials.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] on transport failure or an unexpected
    /// status. A refused connect is `Ok` with `success: false`.
    async fn connect_postgres(&self, credentials: &PostgresCredentials) -> Result<ConnectResponse, BackendError>;

    /// Submit manually entered ServiceNow credentials.
    ///
    /// # Errors
    ///
    /// Same as [`AssistantBackend::connect_postgres`].
    async fn connect_servicenow(&self, credentials: &ServiceNowCredentials) -> Result<ConnectResponse, BackendError>;

    /// Forward a chat message.
    ///
    /// # Errors
    ///
    /// Same as [`AssistantBackend::connect_env`].
    async fn chat(&self, request: &ChatRequest) -> Result<Value, BackendError>;
}

/// `reqwest`-backed [`AssistantBackend`].
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// # Errors
    ///
    /// Returns [`BackendError::HttpClientBuild`] if the client cannot be built.
    pub fn new(base_url: impl Into<String>, timeouts: BackendTimeouts) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(timeouts.request())
            .connect_timeout(timeouts.connect())
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| BackendError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.into() })
    }

    /// # Errors
    ///
    /// See [`HttpBackend::new`].
    pub fn from_config(config: &HostConfig) -> Result<Self, BackendError> {
        Self::new(config.backend_url.clone(), config.timeouts)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn post_json<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<Value, BackendError> {
        let url = self.endpoint_url(path);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(BackendError::Status { status, body: text });
        }

        parse_body(&text)
    }

    async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> Result<ConnectResponse, BackendError> {
        let url = self.endpoint_url(path);
        let response = self
            .http
            .post(&url)
            .form(fields)
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let status = response.status();
        if status.is_redirection() {
            return Ok(ConnectResponse { success: true, error: None });
        }

        let text = response
            .text()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(BackendError::Status { status: status.as_u16(), body: text });
        }

        let error = form_failure(&text).unwrap_or_else(|| GENERIC_CONNECT_FAILURE.into());
        Ok(ConnectResponse { success: false, error: Some(error) })
    }
}

fn parse_body(text: &str) -> Result<Value, BackendError> {
    serde_json::from_str(text).map_err(|e| BackendError::Decode(e.to_string()))
}

/// Pull the `Failed to connect ...` line out of a re-rendered connect form.
fn form_failure(html: &str) -> Option<String> {
    let start = html.find(FORM_FAILURE_PREFIX)?;
    let rest = &html[start..];
    let end = rest.find('<').unwrap_or(rest.len());
    let text = unescape_html(rest[..end].trim());
    (!text.is_empty()).then_some(text)
}

fn unescape_html(text: &str) -> String {
    text.replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[async_trait]
impl AssistantBackend for HttpBackend {
    async fn connect_env(&self, request: &ConnectRequest) -> Result<Value, BackendError> {
        self.post_json("connect_env", request).await
    }

    async fn connect_postgres(&self, credentials: &PostgresCredentials) -> Result<ConnectResponse, BackendError> {
        self.post_form(
            "connect",
            &[
                ("db_type", DatabaseKind::Postgres.as_str()),
                ("host", credentials.host.trim()),
                ("port", credentials.port.trim()),
                ("database", credentials.database.trim()),
                ("user", credentials.user.trim()),
                ("password", credentials.password.as_str()),
                ("schema", credentials.schema.trim()),
            ],
        )
        .await
    }

    async fn connect_servicenow(&self, credentials: &ServiceNowCredentials) -> Result<ConnectResponse, BackendError> {
        self.post_form(
            "connect_snow",
            &[
                ("db_type", DatabaseKind::ServiceNow.as_str()),
                ("api", credentials.api.trim()),
                ("user", credentials.user.trim()),
                ("password", credentials.password.as_str()),
            ],
        )
        .await
    }

    async fn chat(&self, request: &ChatRequest) -> Result<Value, BackendError> {
        self.post_json("chat", request).await
    }
}

#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;
