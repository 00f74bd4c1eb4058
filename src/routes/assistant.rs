//! Forwarding endpoints for the chat page.
//!
//! ERROR HANDLING
//! ==============
//! Backend JSON is returned as-is, including application-level `error`
//! fields. Only transport failures are turned into `502`, with a body shaped
//! like the endpoint's normal response so the page can still decode it.
//!
//! Manual credential connects are validated here first. Blank required
//! fields are refused without calling the backend.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use client::net::types::{
    ChatRequest, ConnectRequest, ConnectResponse, CurrentConnection, DatabaseKind, PageContext,
    PostgresCredentials, ServiceNowCredentials,
};
use serde_json::{Value, json};

use crate::backend::BackendError;
use crate::config::DEFAULT_SERVICENOW_INSTANCE_NAME;
use crate::state::AppState;

/// `POST /connect_env`
pub async fn connect_env(State(state): State<AppState>, Json(body): Json<ConnectRequest>) -> (StatusCode, Json<Value>) {
    let kind = body.db_type;
    match state.backend.connect_env(&body).await {
        Ok(value) => {
            if accepted(&value) {
                state.set_current(state.targets.connection(kind)).await;
                tracing::info!(db_type = kind.as_str(), "backend connected");
            } else {
                tracing::info!(db_type = kind.as_str(), error = ?value.get("error"), "backend refused connect");
            }
            (StatusCode::OK, Json(value))
        }
        Err(e) => {
            tracing::warn!(db_type = kind.as_str(), error = %e, body = e.body().unwrap_or_default(), "connect_env forward failed");
            (StatusCode::BAD_GATEWAY, Json(json!({ "success": false, "error": e.to_string() })))
        }
    }
}

/// `POST /api/connect/postgresql`
pub async fn connect_postgres(
    State(state): State<AppState>,
    Json(body): Json<PostgresCredentials>,
) -> (StatusCode, Json<ConnectResponse>) {
    if let Some(refusal) = missing_fields_refusal(&body.missing_fields()) {
        return (StatusCode::OK, Json(refusal));
    }
    let connection = CurrentConnection { kind: DatabaseKind::Postgres, name: body.database.trim().to_string() };
    let result = state.backend.connect_postgres(&body).await;
    finish_manual_connect(&state, connection, result).await
}

/// `POST /api/connect/servicenow`
pub async fn connect_servicenow(
    State(state): State<AppState>,
    Json(body): Json<ServiceNowCredentials>,
) -> (StatusCode, Json<ConnectResponse>) {
    if let Some(refusal) = missing_fields_refusal(&body.missing_fields()) {
        return (StatusCode::OK, Json(refusal));
    }
    let connection = CurrentConnection { kind: DatabaseKind::ServiceNow, name: DEFAULT_SERVICENOW_INSTANCE_NAME.into() };
    let result = state.backend.connect_servicenow(&body).await;
    finish_manual_connect(&state, connection, result).await
}

fn missing_fields_refusal(missing: &[&str]) -> Option<ConnectResponse> {
    (!missing.is_empty()).then(|| ConnectResponse {
        success: false,
        error: Some(format!("Missing required fields: {}", missing.join(", "))),
    })
}

async fn finish_manual_connect(
    state: &AppState,
    connection: CurrentConnection,
    result: Result<ConnectResponse, BackendError>,
) -> (StatusCode, Json<ConnectResponse>) {
    let kind = connection.kind;
    match result {
        Ok(response) => {
            if response.success {
                tracing::info!(db_type = kind.as_str(), name = %connection.name, "backend connected with credentials");
                state.set_current(connection).await;
            } else {
                tracing::info!(db_type = kind.as_str(), error = ?response.error, "backend refused credentials");
            }
            (StatusCode::OK, Json(response))
        }
        Err(e) => {
            tracing::warn!(db_type = kind.as_str(), error = %e, body = e.body().unwrap_or_default(), "manual connect forward failed");
            (StatusCode::BAD_GATEWAY, Json(ConnectResponse { success: false, error: Some(e.to_string()) }))
        }
    }
}

/// `POST /chat`
pub async fn chat(State(state): State<AppState>, Json(body): Json<ChatRequest>) -> (StatusCode, Json<Value>) {
    match state.backend.chat(&body).await {
        Ok(value) => (StatusCode::OK, Json(value)),
        Err(e) => {
            tracing::warn!(error = %e, body = e.body().unwrap_or_default(), "chat forward failed");
            (StatusCode::BAD_GATEWAY, Json(json!({ "error": e.to_string() })))
        }
    }
}

/// `GET /api/targets`
pub async fn targets(State(state): State<AppState>) -> Json<PageContext> {
    Json(state.page_context().await)
}

fn accepted(value: &Value) -> bool {
    value.get("success").and_then(Value::as_bool).unwrap_or(false)
}

#[cfg(test)]
#[path = "assistant_test.rs"]
mod tests;
