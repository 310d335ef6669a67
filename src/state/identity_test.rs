use super::*;

#[test]
fn watch_url_is_content_page() {
    assert!(is_content_page("https://www.youtube.com/watch?v=abc123"));
}

#[test]
fn listing_url_is_not_content_page() {
    assert!(!is_content_page("https://www.youtube.com/feed/subscriptions"));
    assert!(!is_content_page("https://www.youtube.com/results?search_query=watch"));
}

#[test]
fn extract_identity_reads_v_parameter() {
    let id = extract_identity("https://www.youtube.com/watch?v=abc123&t=42s");
    assert_eq!(id.as_ref().map(ContentIdentity::as_str), Some("abc123"));
}

#[test]
fn extract_identity_ignores_parameter_order() {
    let id = extract_identity("https://www.youtube.com/watch?list=PL1&v=xyz&index=2");
    assert_eq!(id.map(|i| i.to_string()), Some("xyz".to_owned()));
}

#[test]
fn extract_identity_decodes_percent_escapes() {
    let id = extract_identity("https://www.youtube.com/watch?v=a%2Db");
    assert_eq!(id.map(|i| i.to_string()), Some("a-b".to_owned()));
}

#[test]
fn extract_identity_missing_parameter_is_none() {
    assert_eq!(extract_identity("https://www.youtube.com/watch?list=PL1"), None);
}

#[test]
fn extract_identity_empty_parameter_is_none() {
    assert_eq!(extract_identity("https://www.youtube.com/watch?v="), None);
}

#[test]
fn extract_identity_unparseable_url_is_none() {
    assert_eq!(extract_identity("not a url"), None);
}

#[test]
fn content_identity_rejects_empty() {
    assert!(ContentIdentity::new("").is_none());
    assert!(ContentIdentity::new("x").is_some());
}
