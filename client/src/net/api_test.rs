use super::*;

#[test]
fn star_endpoint_formats_expected_path() {
    assert_eq!(star_endpoint(1), "/api/stars/1");
    assert_eq!(star_endpoint(904), "/api/stars/904");
}

#[test]
fn api_error_messages_include_status() {
    assert_eq!(ApiError::Status { status: 422 }.to_string(), "request failed with status 422");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[test]
fn payload_field_lookup_finds_first_match() {
    let payload: StarPayload<()> = StarPayload {
        fields: vec![("name", "Doe".to_owned()), ("first_name", "Jane".to_owned())],
        image: None,
    };
    assert_eq!(payload.field("name"), Some("Doe"));
    assert_eq!(payload.field("first_name"), Some("Jane"));
    assert_eq!(payload.field("description"), None);
}

#[test]
fn payload_image_part_tracks_staged_file() {
    let without: StarPayload<&str> = StarPayload { fields: Vec::new(), image: None };
    let with: StarPayload<&str> = StarPayload { fields: Vec::new(), image: Some("photo.png") };
    assert!(!without.has_part(IMAGE_FIELD));
    assert!(with.has_part(IMAGE_FIELD));
}

#[test]
fn http_api_is_unavailable_outside_browser() {
    let api = HttpStarApi;
    let result = futures::executor::block_on(api.list_stars());
    assert_eq!(result, Err(ApiError::Unavailable));
    let result = futures::executor::block_on(api.delete_star(1));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[test]
fn xsrf_token_is_found_among_other_cookies() {
    let cookies = "theme=dark; XSRF-TOKEN=abc123; laravel_session=s1";
    assert_eq!(xsrf_token(cookies).as_deref(), Some("abc123"));
}

#[test]
fn xsrf_token_is_percent_decoded() {
    assert_eq!(xsrf_token("XSRF-TOKEN=eyJpdiI6%2Bab%3D%3D").as_deref(), Some("eyJpdiI6+ab=="));
}

#[test]
fn xsrf_token_absent_or_empty_is_none() {
    assert_eq!(xsrf_token(""), None);
    assert_eq!(xsrf_token("laravel_session=s1"), None);
    assert_eq!(xsrf_token("XSRF-TOKEN="), None);
    assert_eq!(xsrf_token("MY-XSRF-TOKEN=nope"), None);
}
