use axum::http::HeaderValue;

use super::*;

fn base() -> Url {
    Url::parse("https://stars.test/backend/").unwrap()
}

// =============================================================================
// filter_headers
// =============================================================================

#[test]
fn filter_headers_keeps_only_allow_listed_names() {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer secret"));
    headers.insert(header::HOST, HeaderValue::from_static("frontend.test"));
    headers.insert("x-xsrf-token", HeaderValue::from_static("tok"));

    let out = filter_headers(&headers, FORWARDED_REQUEST_HEADERS);
    assert_eq!(out.len(), 2);
    assert_eq!(out.get(header::ACCEPT).unwrap(), "application/json");
    assert_eq!(out.get("x-xsrf-token").unwrap(), "tok");
    assert!(out.get(header::AUTHORIZATION).is_none());
    assert!(out.get(header::HOST).is_none());
}

#[test]
fn filter_headers_keeps_repeated_set_cookie_values() {
    let mut headers = HeaderMap::new();
    headers.append(header::SET_COOKIE, HeaderValue::from_static("a=1"));
    headers.append(header::SET_COOKIE, HeaderValue::from_static("b=2"));
    headers.insert("x-powered-by", HeaderValue::from_static("php"));

    let out = filter_headers(&headers, RELAYED_RESPONSE_HEADERS);
    let cookies: Vec<_> = out.get_all(header::SET_COOKIE).iter().collect();
    assert_eq!(cookies, vec!["a=1", "b=2"]);
    assert!(out.get("x-powered-by").is_none());
}

// =============================================================================
// endpoint_url
// =============================================================================

#[test]
fn endpoint_url_joins_under_base_path() {
    assert_eq!(endpoint_url(&base(), "api/stars").unwrap().as_str(), "https://stars.test/backend/api/stars");
    assert_eq!(endpoint_url(&base(), "/api/stars/4").unwrap().as_str(), "https://stars.test/backend/api/stars/4");
}

#[test]
fn endpoint_url_keeps_query() {
    assert_eq!(endpoint_url(&base(), "api/stars?page=2").unwrap().as_str(), "https://stars.test/backend/api/stars?page=2");
}

// =============================================================================
// parse_user_response
// =============================================================================

#[test]
fn ok_status_decodes_user() {
    let body = br#"{"id": 5, "name": "Admin", "email": "admin@example.com", "created_at": "2024-01-01"}"#;
    let user = parse_user_response(StatusCode::OK, body).unwrap().unwrap();
    assert_eq!(user.id, 5);
    assert_eq!(user.name, "Admin");
}

#[test]
fn guest_statuses_map_to_none() {
    for status in [401, 403, 419] {
        let status = StatusCode::from_u16(status).unwrap();
        assert!(parse_user_response(status, b"{}").unwrap().is_none(), "{status}");
    }
}

#[test]
fn other_statuses_are_errors() {
    let err = parse_user_response(StatusCode::INTERNAL_SERVER_ERROR, b"").unwrap_err();
    assert!(matches!(err, UpstreamError::Status { status: 500 }));
}

#[test]
fn undecodable_user_body_is_an_error() {
    let err = parse_user_response(StatusCode::OK, b"<html>").unwrap_err();
    assert!(matches!(err, UpstreamError::Decode(_)));
}
