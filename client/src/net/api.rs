//! REST API helpers for communicating with the host server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode (network, non-2xx, malformed body) is an [`ApiError`].
//! The controller treats all of them as one transport-failure class;
//! application errors arrive inside a successful response instead.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    ChatRequest, ChatResponse, ConnectRequest, ConnectResponse, DatabaseKind, PageContext, PostgresCredentials,
    ServiceNowCredentials,
};
use crate::config::PageConfig;

/// Transport-level failure talking to the host server.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("response decode failed: {0}")]
    Decode(String),

    #[error("not available on server")]
    Unavailable,
}

/// The two backend operations the page controller drives.
#[allow(async_fn_in_trait)]
pub trait AssistantApi {
    /// `POST /connect_env` with `{ "db_type": kind }`.
    async fn connect_env(&self, kind: DatabaseKind) -> Result<ConnectResponse, ApiError>;

    /// Connect with credentials typed into the PostgreSQL form.
    async fn connect_postgres(&self, credentials: &PostgresCredentials) -> Result<ConnectResponse, ApiError>;

    /// Connect with credentials typed into the ServiceNow form.
    async fn connect_servicenow(&self, credentials: &ServiceNowCredentials) -> Result<ConnectResponse, ApiError>;

    /// `POST /chat` with `{ "message": message }`.
    async fn chat(&self, message: &str) -> Result<ChatResponse, ApiError>;
}

/// Browser HTTP implementation of [`AssistantApi`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    connect_endpoint: String,
    postgres_connect_endpoint: String,
    servicenow_connect_endpoint: String,
    chat_endpoint: String,
}

impl HttpApi {
    #[must_use]
    pub fn new(config: &PageConfig) -> Self {
        Self {
            connect_endpoint: config.connect_endpoint.clone(),
            postgres_connect_endpoint: config.postgres_connect_endpoint.clone(),
            servicenow_connect_endpoint: config.servicenow_connect_endpoint.clone(),
            chat_endpoint: config.chat_endpoint.clone(),
        }
    }
}

impl AssistantApi for HttpApi {
    async fn connect_env(&self, kind: DatabaseKind) -> Result<ConnectResponse, ApiError> {
        let body = ConnectRequest { db_type: kind };
        #[cfg(feature = "hydrate")]
        {
            post_json(&self.connect_endpoint, &body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.connect_endpoint, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn connect_postgres(&self, credentials: &PostgresCredentials) -> Result<ConnectResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_json(&self.postgres_connect_endpoint, credentials).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.postgres_connect_endpoint, credentials);
            Err(ApiError::Unavailable)
        }
    }

    async fn connect_servicenow(&self, credentials: &ServiceNowCredentials) -> Result<ConnectResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_json(&self.servicenow_connect_endpoint, credentials).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.servicenow_connect_endpoint, credentials);
            Err(ApiError::Unavailable)
        }
    }

    async fn chat(&self, message: &str) -> Result<ChatResponse, ApiError> {
        let body = ChatRequest { message: message.to_owned() };
        #[cfg(feature = "hydrate")]
        {
            post_json(&self.chat_endpoint, &body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.chat_endpoint, body);
            Err(ApiError::Unavailable)
        }
    }
}

/// Fetch the database targets and current connection from `/api/targets`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not parse.
pub async fn fetch_page_context(endpoint: &str) -> Result<PageContext, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(endpoint)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<PageContext>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoint;
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
