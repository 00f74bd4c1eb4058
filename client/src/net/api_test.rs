use super::*;

#[test]
fn http_api_uses_configured_endpoints() {
    let config = PageConfig {
        connect_endpoint: "/x/connect_env".to_owned(),
        chat_endpoint: "/x/chat".to_owned(),
        postgres_connect_endpoint: "/x/pg".to_owned(),
        servicenow_connect_endpoint: "/x/snow".to_owned(),
        ..PageConfig::default()
    };
    let api = HttpApi::new(&config);
    assert_eq!(api.connect_endpoint, "/x/connect_env");
    assert_eq!(api.postgres_connect_endpoint, "/x/pg");
    assert_eq!(api.servicenow_connect_endpoint, "/x/snow");
    assert_eq!(api.chat_endpoint, "/x/chat");
}

#[test]
fn api_error_status_message_includes_code() {
    assert_eq!(ApiError::Status(502).to_string(), "server responded with status 502");
}

#[test]
fn api_error_request_message_wraps_cause() {
    assert_eq!(ApiError::Request("connection refused".to_owned()).to_string(), "request failed: connection refused");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_api_is_unavailable_outside_browser() {
    let api = HttpApi::new(&PageConfig::default());
    let result = futures::executor::block_on(api.chat("hello"));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn manual_connect_is_unavailable_outside_browser() {
    let api = HttpApi::new(&PageConfig::default());
    let result = futures::executor::block_on(api.connect_servicenow(&ServiceNowCredentials::default()));
    assert_eq!(result, Err(ApiError::Unavailable));
}
