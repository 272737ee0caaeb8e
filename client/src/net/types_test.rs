use super::*;

// =============================================================
// Star
// =============================================================

#[test]
fn star_parses_backend_record() {
    let star: Star = serde_json::from_str(
        r#"{"id":1,"name":"Doe","first_name":"Jane","description":"Actress","image":"https://cdn.example.com/jane.png","created_at":"2024-01-01T00:00:00Z"}"#,
    )
    .unwrap();
    assert_eq!(star.id, 1);
    assert_eq!(star.name, "Doe");
    assert_eq!(star.first_name, "Jane");
    assert_eq!(star.description, "Actress");
    assert_eq!(star.image.as_deref(), Some("https://cdn.example.com/jane.png"));
}

#[test]
fn star_null_description_reads_as_empty() {
    let star: Star = serde_json::from_str(r#"{"id":2,"name":"Roe","first_name":"Rick","description":null,"image":null}"#).unwrap();
    assert_eq!(star.description, "");
    assert!(star.image.is_none());
}

#[test]
fn star_missing_optional_fields_default() {
    let star: Star = serde_json::from_str(r#"{"id":3}"#).unwrap();
    assert_eq!(star.name, "");
    assert_eq!(star.first_name, "");
    assert!(star.image.is_none());
}

#[test]
fn star_accepts_string_id() {
    let star: Star = serde_json::from_str(r#"{"id":"42","name":"A","first_name":"B"}"#).unwrap();
    assert_eq!(star.id, 42);
}

#[test]
fn star_rejects_non_integer_id() {
    assert!(serde_json::from_str::<Star>(r#"{"id":"abc"}"#).is_err());
    assert!(serde_json::from_str::<Star>(r#"{"id":1.5}"#).is_err());
    assert!(serde_json::from_str::<Star>(r#"{"name":"no id"}"#).is_err());
}

#[test]
fn display_name_joins_name_and_first_name() {
    let star = Star {
        id: 1,
        name: "Doe".to_owned(),
        first_name: "Jane".to_owned(),
        description: String::new(),
        image: None,
    };
    assert_eq!(star.display_name(), "Doe Jane");
}

#[test]
fn display_name_skips_blank_parts() {
    let star = Star {
        id: 1,
        name: "  ".to_owned(),
        first_name: "Jane".to_owned(),
        description: String::new(),
        image: None,
    };
    assert_eq!(star.display_name(), "Jane");
}

// =============================================================
// PageProps
// =============================================================

#[test]
fn page_props_default_is_guest_with_default_routes() {
    let props = PageProps::default();
    assert!(props.user().is_none());
    assert_eq!(props.route(RouteName::Home), "/");
    assert_eq!(props.route(RouteName::Dashboard), "/dashboard");
    assert_eq!(props.route(RouteName::Login), "/login");
    assert_eq!(props.route(RouteName::Register), "/register");
    assert_eq!(props.route(RouteName::Logout), "/logout");
}

#[test]
fn page_props_missing_routes_fall_back_to_defaults() {
    let props: PageProps =
        serde_json::from_str(r#"{"auth":{"user":{"id":7,"name":"Admin","email":"a@example.com"}}}"#).unwrap();
    assert_eq!(props.user().map(|u| u.name.as_str()), Some("Admin"));
    assert_eq!(props.routes, NamedRoutes::default());
}

#[test]
fn page_props_json_round_trip_preserves_routes() {
    let props = PageProps {
        auth: AuthProps { user: None },
        routes: NamedRoutes { login: "https://api.example.com/login".to_owned(), ..NamedRoutes::default() },
    };
    let json = serde_json::to_string(&props).unwrap();
    let restored: PageProps = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, props);
}
