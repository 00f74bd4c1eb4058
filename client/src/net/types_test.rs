use super::*;

// =============================================================
// DatabaseKind
// =============================================================

#[test]
fn database_kind_serializes_to_wire_tags() {
    for kind in DatabaseKind::ALL {
        let json = serde_json::to_value(kind).unwrap();
        assert_eq!(json, serde_json::json!(kind.as_str()));
    }
}

#[test]
fn database_kind_rejects_unknown_tag() {
    let parsed = serde_json::from_str::<DatabaseKind>("\"mysql\"");
    assert!(parsed.is_err());
}

#[test]
fn database_kind_display_names() {
    assert_eq!(DatabaseKind::Postgres.display_name(), "PostgreSQL Database");
    assert_eq!(DatabaseKind::ServiceNow.display_name(), "ServiceNow Instance");
    assert_eq!(DatabaseKind::Sqlite.display_name(), "SQLite Database");
}

#[test]
fn connect_request_body_shape() {
    let body = ConnectRequest { db_type: DatabaseKind::Sqlite };
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({ "db_type": "sqlite" }));
}

// =============================================================
// ConnectResponse
// =============================================================

#[test]
fn connect_response_success_without_error() {
    let resp: ConnectResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
    assert!(resp.success);
    assert!(resp.error.is_none());
}

#[test]
fn connect_response_failure_carries_error() {
    let resp: ConnectResponse =
        serde_json::from_str(r#"{"success":false,"error":"Incomplete credentials for postgresql."}"#).unwrap();
    assert!(!resp.success);
    assert_eq!(resp.error.as_deref(), Some("Incomplete credentials for postgresql."));
}

#[test]
fn connect_response_missing_success_is_false() {
    let resp: ConnectResponse = serde_json::from_str("{}").unwrap();
    assert!(!resp.success);
}

// =============================================================
// ChatResponse -> ChatReply
// =============================================================

#[test]
fn chat_error_takes_precedence() {
    let resp: ChatResponse =
        serde_json::from_str(r#"{"error":"No database connection","message":"ignored"}"#).unwrap();
    assert_eq!(resp.into_reply(), ChatReply::Failed("No database connection".to_owned()));
}

#[test]
fn chat_empty_error_is_treated_as_absent() {
    let resp: ChatResponse = serde_json::from_str(r#"{"error":"","message":"hi","logs":[]}"#).unwrap();
    let ChatReply::Answer(answer) = resp.into_reply() else {
        panic!("expected answer");
    };
    assert_eq!(answer.message, "hi");
}

#[test]
fn chat_answer_fields_parse() {
    let resp: ChatResponse = serde_json::from_str(
        r#"{
            "message": "**Done**",
            "status_updates": ["Running execute_sql_function", "Generating final response"],
            "logs": ["a", "b"],
            "database_response": "| id |\n| --- |\n| 1 |"
        }"#,
    )
    .unwrap();
    let ChatReply::Answer(answer) = resp.into_reply() else {
        panic!("expected answer");
    };
    assert_eq!(answer.message, "**Done**");
    assert_eq!(answer.status_updates.len(), 2);
    assert_eq!(answer.logs, vec!["a".to_owned(), "b".to_owned()]);
    assert!(answer.database_response.is_some());
}

#[test]
fn chat_answer_defaults_missing_optional_fields() {
    let resp: ChatResponse = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
    let ChatReply::Answer(answer) = resp.into_reply() else {
        panic!("expected answer");
    };
    assert!(answer.status_updates.is_empty());
    assert!(answer.logs.is_empty());
    assert!(answer.database_response.is_none());
}

#[test]
fn page_context_parses_targets_and_current() {
    let ctx: PageContext = serde_json::from_str(
        r#"{
            "targets": [{"kind":"sqlite","name":"chinook.db","available":true}],
            "current": {"kind":"sqlite","name":"chinook.db"}
        }"#,
    )
    .unwrap();
    assert_eq!(ctx.targets.len(), 1);
    assert_eq!(ctx.current.map(|c| c.kind), Some(DatabaseKind::Sqlite));
}

// =============================================================
// Manual credentials
// =============================================================

#[test]
fn postgres_credentials_schema_is_optional() {
    let creds = PostgresCredentials {
        host: "db.internal".into(),
        port: "5432".into(),
        database: "sales".into(),
        user: "analyst".into(),
        password: "secret".into(),
        schema: String::new(),
    };
    assert!(creds.missing_fields().is_empty());
}

#[test]
fn postgres_credentials_report_blank_fields_in_form_order() {
    let creds = PostgresCredentials { host: "db".into(), database: "  ".into(), ..PostgresCredentials::default() };
    assert_eq!(creds.missing_fields(), vec!["port", "database", "user", "password"]);
}

#[test]
fn servicenow_credentials_require_every_field() {
    let creds = ServiceNowCredentials { api: "https://acme.service-now.com/api".into(), user: "admin".into(), password: String::new() };
    assert_eq!(creds.missing_fields(), vec!["password"]);
}

#[test]
fn postgres_credentials_parse_without_schema() {
    let creds: PostgresCredentials = serde_json::from_str(
        r#"{"host":"h","port":"5432","database":"d","user":"u","password":"p"}"#,
    )
    .unwrap();
    assert_eq!(creds.schema, "");
}
