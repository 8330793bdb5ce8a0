use std::collections::HashMap;

use staticd::http::codec::{ConnDirective, Method, Version};
use staticd::http::request::Request;

#[test]
fn test_request_header_retrieval() {
    let mut headers = HashMap::new();
    headers.insert("HOST".to_string(), "EXAMPLE.COM".to_string());
    headers.insert("CONTENT-TYPE".to_string(), "APPLICATION/JSON".to_string());

    let req = Request {
        headers,
        ..Default::default()
    };

    assert_eq!(req.header("HOST"), Some("EXAMPLE.COM"));
    assert_eq!(req.header("CONTENT-TYPE"), Some("APPLICATION/JSON"));
    assert_eq!(req.header("MISSING"), None);
}

#[test]
fn test_request_header_lookup_is_exact() {
    // The map holds folded names; lookups use the folded form.
    let mut headers = HashMap::new();
    headers.insert("HOST".to_string(), "EXAMPLE.COM".to_string());

    let req = Request {
        headers,
        ..Default::default()
    };

    assert_eq!(req.header("Host"), None);
}

#[test]
fn test_request_defaults() {
    let req = Request::default();

    assert_eq!(req.method, Method::Unknown);
    assert_eq!(req.version, Version::Unknown);
    assert_eq!(req.conn, ConnDirective::Unknown);
    assert_eq!(req.path, "");
    assert_eq!(req.content_length, 0);
    assert!(req.headers.is_empty());
    assert!(req.body.is_empty());
}

#[test]
fn test_request_unread_zero_without_content_length() {
    let req = Request {
        body: b"stray bytes".to_vec(),
        ..Default::default()
    };

    assert_eq!(req.unread(), 0);
}

#[test]
fn test_request_unread_counts_missing_body_bytes() {
    let req = Request {
        content_length: 10,
        body: b"hell".to_vec(),
        ..Default::default()
    };

    assert_eq!(req.unread(), 6);
}

#[test]
fn test_request_unread_full_body_still_owed() {
    let req = Request {
        content_length: 8,
        ..Default::default()
    };

    assert_eq!(req.unread(), 8);
}

#[test]
fn test_request_unread_never_negative() {
    // More body than declared saturates to zero instead of underflowing.
    let req = Request {
        content_length: 3,
        body: b"too much body".to_vec(),
        ..Default::default()
    };

    assert_eq!(req.unread(), 0);
}

#[test]
fn test_request_keep_alive_requires_explicit_directive() {
    let req = Request::default();

    assert!(!req.keep_alive());
}

#[test]
fn test_request_keep_alive_directive() {
    let req = Request {
        conn: ConnDirective::KeepAlive,
        ..Default::default()
    };

    assert!(req.keep_alive());
}

#[test]
fn test_request_close_directive() {
    let req = Request {
        conn: ConnDirective::Close,
        ..Default::default()
    };

    assert!(!req.keep_alive());
}

#[test]
fn test_request_with_body() {
    let body_content = b"test body content".to_vec();
    let req = Request {
        method: Method::Post,
        path: "/api".to_string(),
        body: body_content.clone(),
        ..Default::default()
    };

    assert_eq!(req.body, body_content);
}
