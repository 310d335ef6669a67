#![allow(clippy::float_cmp)]

use super::*;
use serde_json::json;

// =============================================================
// AskRequest
// =============================================================

#[test]
fn ask_request_serializes_backend_field_names() {
    let req = AskRequest {
        video_id: "abc".to_owned(),
        current_time: 12.5,
        question: "what?".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value, json!({ "video_id": "abc", "current_time": 12.5, "question": "what?" }));
}

// =============================================================
// AskResponse
// =============================================================

#[test]
fn ask_response_accepts_minimal_body() {
    let resp: AskResponse = serde_json::from_value(json!({ "response": "X" })).unwrap();
    assert_eq!(resp.response, "X");
    assert_eq!(resp.analysis, None);
}

#[test]
fn ask_response_reads_analysis_block() {
    let resp: AskResponse = serde_json::from_value(json!({
        "response": "X",
        "video_id": "abc",
        "timestamp": 42.0,
        "analysis": { "question_type": "summary", "strategy": "window", "style": "short" },
        "debug_info": "ignored"
    }))
    .unwrap();
    let analysis = resp.analysis.unwrap();
    assert_eq!(analysis.question_type.as_deref(), Some("summary"));
    assert_eq!(resp.timestamp, Some(42.0));
}

#[test]
fn ask_response_without_response_field_is_error() {
    let parsed = serde_json::from_value::<AskResponse>(json!({ "error": "boom" }));
    assert!(parsed.is_err());
}

// =============================================================
// Errors
// =============================================================

#[test]
fn backend_error_body_summary_combines_fields() {
    let body: BackendErrorBody =
        serde_json::from_value(json!({ "error": "internal", "details": "trace" })).unwrap();
    assert_eq!(body.summary().as_deref(), Some("internal: trace"));
    assert_eq!(BackendErrorBody::default().summary(), None);
}

#[test]
fn relay_error_status_display_includes_detail() {
    let err = RelayError::Status { status: 500, detail: Some("internal".to_owned()) };
    assert_eq!(err.to_string(), "backend returned status 500 (internal)");
    let bare = RelayError::Status { status: 404, detail: None };
    assert_eq!(bare.to_string(), "backend returned status 404");
}
