use super::*;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use client::net::types::{CurrentConnection, DatabaseKind};

use crate::backend::{AssistantBackend, BackendError};
use crate::config::TargetsConfig;

#[derive(Default)]
struct MockBackend {
    responses: Mutex<VecDeque<Result<Value, BackendError>>>,
    manual: Mutex<VecDeque<Result<ConnectResponse, BackendError>>>,
    connects: Mutex<Vec<DatabaseKind>>,
    messages: Mutex<Vec<String>>,
}

impl MockBackend {
    fn with(responses: Vec<Result<Value, BackendError>>) -> Arc<Self> {
        Arc::new(Self { responses: Mutex::new(responses.into()), ..Self::default() })
    }

    fn next(&self) -> Result<Value, BackendError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(BackendError::Request("no scripted response".into())))
    }

    fn with_manual(responses: Vec<Result<ConnectResponse, BackendError>>) -> Arc<Self> {
        Arc::new(Self { manual: Mutex::new(responses.into()), ..Self::default() })
    }

    fn next_manual(&self, kind: DatabaseKind) -> Result<ConnectResponse, BackendError> {
        self.connects.lock().unwrap().push(kind);
        self.manual
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(BackendError::Request("no scripted response".into())))
    }
}

#[async_trait::async_trait]
impl AssistantBackend for MockBackend {
    async fn connect_env(&self, request: &ConnectRequest) -> Result<Value, BackendError> {
        self.connects.lock().unwrap().push(request.db_type);
        self.next()
    }

    async fn connect_postgres(&self, _credentials: &PostgresCredentials) -> Result<ConnectResponse, BackendError> {
        self.next_manual(DatabaseKind::Postgres)
    }

    async fn connect_servicenow(&self, _credentials: &ServiceNowCredentials) -> Result<ConnectResponse, BackendError> {
        self.next_manual(DatabaseKind::ServiceNow)
    }

    async fn chat(&self, request: &ChatRequest) -> Result<Value, BackendError> {
        self.messages.lock().unwrap().push(request.message.clone());
        self.next()
    }
}

fn state_with(backend: Arc<MockBackend>) -> AppState {
    AppState::new(backend, TargetsConfig::default())
}

async fn current_kind(state: &AppState) -> Option<DatabaseKind> {
    state.current.read().await.as_ref().map(|c| c.kind)
}

fn postgres_credentials() -> PostgresCredentials {
    PostgresCredentials {
        host: "db.internal".into(),
        port: "5432".into(),
        database: " analytics ".into(),
        user: "bob".into(),
        password: "secret".into(),
        schema: String::new(),
    }
}

#[tokio::test]
async fn connect_success_records_current_connection() {
    let backend = MockBackend::with(vec![Ok(json!({ "success": true }))]);
    let state = state_with(backend.clone());

    let (status, Json(body)) =
        connect_env(State(state.clone()), Json(ConnectRequest { db_type: DatabaseKind::ServiceNow })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));
    assert_eq!(*backend.connects.lock().unwrap(), vec![DatabaseKind::ServiceNow]);
    assert_eq!(current_kind(&state).await, Some(DatabaseKind::ServiceNow));
}

#[tokio::test]
async fn connect_refusal_passes_through_and_keeps_current() {
    let refusal = json!({ "success": false, "error": "Missing PostgreSQL credentials" });
    let state = state_with(MockBackend::with(vec![Ok(refusal.clone())]));

    let (status, Json(body)) =
        connect_env(State(state.clone()), Json(ConnectRequest { db_type: DatabaseKind::Postgres })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, refusal);
    assert_eq!(current_kind(&state).await, Some(DatabaseKind::Sqlite));
}

#[tokio::test]
async fn connect_transport_failure_is_bad_gateway() {
    let state = state_with(MockBackend::with(vec![Err(BackendError::Request("connection refused".into()))]));

    let (status, Json(body)) =
        connect_env(State(state.clone()), Json(ConnectRequest { db_type: DatabaseKind::ServiceNow })).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "backend request failed: connection refused");
    assert_eq!(current_kind(&state).await, Some(DatabaseKind::Sqlite));
}

#[tokio::test]
async fn chat_passes_application_errors_through() {
    let reply = json!({ "error": "No database connection. Please connect first." });
    let backend = MockBackend::with(vec![Ok(reply.clone())]);
    let state = state_with(backend.clone());

    let (status, Json(body)) = chat(State(state), Json(ChatRequest { message: "how many albums?".into() })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, reply);
    assert_eq!(*backend.messages.lock().unwrap(), vec!["how many albums?".to_string()]);
}

#[tokio::test]
async fn chat_backend_status_is_bad_gateway() {
    let state = state_with(MockBackend::with(vec![Err(BackendError::Status { status: 500, body: "boom".into() })]));

    let (status, Json(body)) = chat(State(state), Json(ChatRequest { message: "hi".into() })).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "backend responded with status 500");
}

#[tokio::test]
async fn targets_reports_configuration_and_current() {
    let state = state_with(MockBackend::with(vec![]));

    let Json(ctx) = targets(State(state)).await;

    assert_eq!(ctx.targets.len(), 3);
    assert!(ctx.targets.iter().any(|t| t.kind == DatabaseKind::Sqlite && t.available));
    assert!(!ctx.targets.iter().any(|t| t.kind == DatabaseKind::Postgres && t.available));
    assert_eq!(ctx.current, Some(CurrentConnection { kind: DatabaseKind::Sqlite, name: "chinook.db".into() }));
}

#[test]
fn accepted_requires_boolean_true() {
    assert!(accepted(&json!({ "success": true })));
    assert!(!accepted(&json!({ "success": "true" })));
    assert!(!accepted(&json!({})));
}

#[tokio::test]
async fn manual_postgres_success_records_database_name() {
    let backend = MockBackend::with_manual(vec![Ok(ConnectResponse { success: true, error: None })]);
    let state = state_with(backend.clone());

    let (status, Json(body)) = connect_postgres(State(state.clone()), Json(postgres_credentials())).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.success);
    assert_eq!(*backend.connects.lock().unwrap(), vec![DatabaseKind::Postgres]);
    assert_eq!(
        state.page_context().await.current,
        Some(CurrentConnection { kind: DatabaseKind::Postgres, name: "analytics".into() })
    );
}

#[tokio::test]
async fn manual_connect_with_blank_fields_skips_backend() {
    let backend = MockBackend::with_manual(vec![]);
    let state = state_with(backend.clone());
    let credentials = PostgresCredentials { user: "  ".into(), password: String::new(), ..postgres_credentials() };

    let (status, Json(body)) = connect_postgres(State(state.clone()), Json(credentials)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.success);
    assert_eq!(body.error.as_deref(), Some("Missing required fields: user, password"));
    assert!(backend.connects.lock().unwrap().is_empty());
    assert_eq!(current_kind(&state).await, Some(DatabaseKind::Sqlite));
}

#[tokio::test]
async fn manual_servicenow_refusal_keeps_current() {
    let refusal = ConnectResponse { success: false, error: Some("Failed to connect to the database: 401".into()) };
    let state = state_with(MockBackend::with_manual(vec![Ok(refusal.clone())]));
    let credentials = ServiceNowCredentials { api: "https://dev.service-now.com".into(), user: "admin".into(), password: "pw".into() };

    let (status, Json(body)) = connect_servicenow(State(state.clone()), Json(credentials)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, refusal);
    assert_eq!(current_kind(&state).await, Some(DatabaseKind::Sqlite));
}

#[tokio::test]
async fn manual_servicenow_success_uses_default_instance_name() {
    let state = state_with(MockBackend::with_manual(vec![Ok(ConnectResponse { success: true, error: None })]));
    let credentials = ServiceNowCredentials { api: "https://dev.service-now.com".into(), user: "admin".into(), password: "pw".into() };

    let _ = connect_servicenow(State(state.clone()), Json(credentials)).await;

    assert_eq!(
        state.page_context().await.current,
        Some(CurrentConnection { kind: DatabaseKind::ServiceNow, name: "ServiceNow".into() })
    );
}

#[tokio::test]
async fn manual_connect_backend_status_is_bad_gateway() {
    let state = state_with(MockBackend::with_manual(vec![Err(BackendError::Status { status: 500, body: "trace".into() })]));

    let (status, Json(body)) = connect_postgres(State(state), Json(postgres_credentials())).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(!body.success);
    assert_eq!(body.error.as_deref(), Some("backend responded with status 500"));
}
