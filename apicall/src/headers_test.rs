use super::*;

#[test]
fn insert_appends_new_names_in_order() {
    let headers = Headers::new().with("A", "1").with("B", "2");
    let pairs: Vec<_> = headers.iter().collect();
    assert_eq!(pairs, vec![("A", "1"), ("B", "2")]);
}

#[test]
fn insert_replaces_case_insensitively_in_place() {
    let headers = Headers::new()
        .with(CONTENT_TYPE, APPLICATION_JSON)
        .with("X-Trace", "t1")
        .with("content-type", "text/plain");

    assert_eq!(headers.len(), 2);
    let pairs: Vec<_> = headers.iter().collect();
    assert_eq!(pairs[0], ("content-type", "text/plain"));
    assert_eq!(pairs[1], ("X-Trace", "t1"));
}

#[test]
fn get_ignores_case() {
    let headers = Headers::new().with("Authorization", "Bearer abc");
    assert_eq!(headers.get("authorization"), Some("Bearer abc"));
    assert!(headers.contains("AUTHORIZATION"));
    assert!(!headers.contains("Cookie"));
}

#[test]
fn extend_from_overrides_existing_entries() {
    let mut base = Headers::new().with(CONTENT_TYPE, APPLICATION_JSON);
    let caller: Headers = [("Accept", "text/csv"), ("CONTENT-TYPE", "application/xml")]
        .into_iter()
        .collect();
    base.extend_from(&caller);

    assert_eq!(base.len(), 2);
    assert_eq!(base.get(CONTENT_TYPE), Some("application/xml"));
    assert_eq!(base.get("accept"), Some("text/csv"));
}

#[test]
fn empty_headers() {
    let headers = Headers::new();
    assert!(headers.is_empty());
    assert_eq!(headers.get(CONTENT_TYPE), None);
}
