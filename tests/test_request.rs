use bytes::Bytes;
use stash::http::request::{Method, Request, RequestBuilder};
use std::collections::HashMap;

#[test]
fn test_request_header_retrieval() {
    let mut headers = HashMap::new();
    headers.insert("host".to_string(), "example.com".to_string());
    headers.insert("content-type".to_string(), "application/json".to_string());

    let req = Request {
        method: Method::GET,
        path: "/".to_string(),
        version: "HTTP/1.1".to_string(),
        headers,
        body: Bytes::new(),
    };

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(req.content_type(), Some("application/json"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_content_type_missing() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .path("/a")
        .build()
        .unwrap();

    assert_eq!(req.content_type(), None);
}

#[test]
fn test_request_builder_lowercases_header_names() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .path("/a")
        .header("Content-Type", "text/plain")
        .body("hello")
        .build()
        .unwrap();

    assert!(req.headers.contains_key("content-type"));
    assert_eq!(req.version, "HTTP/1.1");
    assert_eq!(&req.body[..], b"hello");
}

#[test]
fn test_request_builder_requires_method_and_path() {
    assert!(RequestBuilder::new().path("/").build().is_err());
    assert!(RequestBuilder::new().method(Method::GET).build().is_err());
}

#[test]
fn test_request_method_from_token() {
    assert_eq!(Method::from_token("GET"), Method::GET);
    assert_eq!(Method::from_token("POST"), Method::POST);
    assert_eq!(Method::from_token("PUT"), Method::Other("PUT".to_string()));
    assert_eq!(Method::from_token("get"), Method::Other("get".to_string())); // Case-sensitive
}

#[test]
fn test_request_method_display() {
    assert_eq!(Method::GET.to_string(), "GET");
    assert_eq!(Method::Other("PATCH".to_string()).to_string(), "PATCH");
}

#[test]
fn test_request_builder_custom_version() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .path("/a.txt")
        .version("HTTP/1.0")
        .build()
        .unwrap();

    assert_eq!(req.version, "HTTP/1.0");
}
