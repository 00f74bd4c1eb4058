use super::*;
use crate::net::types::CurrentConnection;

fn sqlite_context() -> PageContext {
    PageContext {
        targets: vec![
            DatabaseTarget { kind: DatabaseKind::Postgres, name: "sales".to_owned(), available: false },
            DatabaseTarget { kind: DatabaseKind::Sqlite, name: "chinook.db".to_owned(), available: true },
        ],
        current: Some(CurrentConnection { kind: DatabaseKind::Sqlite, name: "chinook.db".to_owned() }),
    }
}

#[test]
fn summary_empty_before_load() {
    assert_eq!(ConnectionState::default().summary(), "");
}

#[test]
fn summary_names_current_connection() {
    let mut state = ConnectionState::default();
    state.load(sqlite_context());
    assert_eq!(state.summary(), "Connected to chinook.db (SQLite Database)");
}

#[test]
fn summary_reports_not_connected_after_load() {
    let mut state = ConnectionState::default();
    state.load(PageContext::default());
    assert_eq!(state.summary(), "Not connected");
}

#[test]
fn target_lookup_by_kind() {
    let mut state = ConnectionState::default();
    state.load(sqlite_context());
    assert!(!state.target(DatabaseKind::Postgres).unwrap().available);
    assert!(state.target(DatabaseKind::ServiceNow).is_none());
}
