use super::*;

// =============================================================
// first_error_message
// =============================================================

#[test]
fn first_error_message_picks_the_first_entry() {
    let body = serde_json::json!({
        "errors": [
            { "message": "Invalid user credentials." },
            { "message": "Second error." }
        ]
    });
    assert_eq!(first_error_message(&body).as_deref(), Some("Invalid user credentials."));
}

#[test]
fn first_error_message_rejects_empty_error_list() {
    let body = serde_json::json!({ "errors": [] });
    assert!(first_error_message(&body).is_none());
}

#[test]
fn first_error_message_rejects_foreign_shapes() {
    assert!(first_error_message(&serde_json::json!({ "message": "nope" })).is_none());
    assert!(first_error_message(&serde_json::json!(["nope"])).is_none());
    assert!(first_error_message(&serde_json::json!({ "errors": [{ "code": 401 }] })).is_none());
    assert!(first_error_message(&serde_json::json!({ "errors": "broken" })).is_none());
}

// =============================================================
// ApiError display
// =============================================================

#[test]
fn provider_error_displays_the_raw_message() {
    let err = ApiError::Provider("Invalid user credentials.".to_owned());
    assert_eq!(err.to_string(), "Invalid user credentials.");
}

#[test]
fn network_error_displays_with_prefix() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "network error: connection refused");
}

// =============================================================
// DirectusApi
// =============================================================

#[test]
fn directus_api_keeps_its_base_url() {
    let api = DirectusApi::new("http://localhost:8055");
    assert_eq!(api.base_url(), "http://localhost:8055");
}
