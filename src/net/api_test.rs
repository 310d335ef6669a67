use futures::executor::block_on;

use super::*;

#[test]
fn backend_urls_come_from_config() {
    let config = WidgetConfig { backend_base_url: "https://qa.example.com".to_owned(), ..WidgetConfig::default() };
    let backend = HttpBackend::new(&config);
    assert_eq!(backend.ask_url(), "https://qa.example.com/ask");
    assert_eq!(backend.health_url, "https://qa.example.com/health");
}

#[test]
fn status_error_uses_backend_error_body() {
    let err = status_error(400, r#"{"error":"video_id and question are required"}"#);
    assert_eq!(
        err,
        RelayError::Status { status: 400, detail: Some("video_id and question are required".to_owned()) }
    );
}

#[test]
fn status_error_falls_back_to_raw_text() {
    let err = status_error(502, "  Bad Gateway  ");
    assert_eq!(err, RelayError::Status { status: 502, detail: Some("Bad Gateway".to_owned()) });
}

#[test]
fn status_error_with_empty_body_has_no_detail() {
    assert_eq!(status_error(500, ""), RelayError::Status { status: 500, detail: None });
}

#[test]
fn status_error_truncates_long_bodies() {
    let body = "x".repeat(1_000);
    let RelayError::Status { detail: Some(detail), .. } = status_error(500, &body) else {
        panic!("expected status error with detail");
    };
    assert_eq!(detail.len(), 200);
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_build_reports_transport_failure() {
    let backend = HttpBackend::new(&WidgetConfig::default());
    let req = AskRequest { video_id: "v".to_owned(), current_time: 0.0, question: "q".to_owned() };
    assert!(matches!(block_on(backend.ask(&req)), Err(RelayError::Transport(_))));
    assert!(matches!(block_on(backend.check_health()), Err(RelayError::Transport(_))));
}
