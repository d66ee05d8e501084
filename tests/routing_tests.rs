#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Once;

use trellis::{RouteKind, Router, RouterError, ROUTER_PATH_PARAM};

/// Handler stand-in: the engine never invokes it, so a name is enough.
type Handler = &'static str;

static TRACING_INIT: Once = Once::new();

/// Route registration and resolution emit tracing events; surface them in
/// test output when RUST_LOG asks for them.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn build_app() -> Router<Handler> {
    init_tracing();
    let mut widgets: Router<Handler> = Router::new();
    widgets
        .add_route("/widgets", "list_widgets", Some(&["GET"]), false)
        .unwrap();
    widgets
        .add_route("/widgets/{id}", "get_widget", Some(&["GET", "put"]), false)
        .unwrap();

    let mut admin: Router<Handler> = Router::new();
    admin
        .add_route("/users/{id}", "admin_get_user", Some(&["GET"]), false)
        .unwrap();

    let mut api: Router<Handler> = Router::new();
    api.mount(widgets, "/v1").unwrap();
    api.mount(admin, "/admin").unwrap();

    let mut site: Router<Handler> = Router::new();
    site.add_route("/", "static_site", None, true).unwrap();

    let mut app: Router<Handler> = Router::new();
    app.add_route("/health", "health_check", Some(&["GET", "HEAD"]), false)
        .unwrap();
    app.add_websocket_route("/ws/{channel}", "subscribe").unwrap();
    app.mount(api, "/api").unwrap();
    app.mount(site, "/static").unwrap();
    app
}

#[test]
fn top_level_route_resolves() {
    let app = build_app();

    let found = app.get_route("/health").expect("route match");
    assert_eq!(*found.route().handler(), "health_check");
    assert_eq!(found.route().kind(), RouteKind::Http);
    assert!(found.params().is_empty());
}

#[test]
fn deeply_nested_route_resolves_with_params() {
    let app = build_app();

    let found = app.get_route("/api/v1/widgets/7").expect("route match");
    assert_eq!(*found.route().handler(), "get_widget");
    assert_eq!(found.get_param("id"), Some("7"));

    let found = app.get_route("/api/admin/users/jane").expect("route match");
    assert_eq!(*found.route().handler(), "admin_get_user");
    assert_eq!(found.get_param("id"), Some("jane"));
}

#[test]
fn method_enforcement_handshake() {
    // Resolution ignores methods; the transport asks afterwards.
    let app = build_app();

    let found = app.get_route("/api/v1/widgets/7").expect("route match");
    assert!(found.route().is_valid_method("get"));
    assert!(found.route().is_valid_method("PUT"));
    assert!(!found.route().is_valid_method("DELETE"));
}

#[test]
fn websocket_registration_resolves() {
    let app = build_app();

    let found = app.get_route("/ws/news").expect("route match");
    assert_eq!(found.route().kind(), RouteKind::WebSocket);
    assert_eq!(*found.route().handler(), "subscribe");
    assert_eq!(found.get_param("channel"), Some("news"));
}

#[test]
fn static_mount_consumes_prefix_and_matches_any_remainder() {
    let app = build_app();

    let found = app
        .get_route("/static/css/deep/nested/site.css")
        .expect("route match");
    assert_eq!(found.route().kind(), RouteKind::Static);
    assert_eq!(*found.route().handler(), "static_site");
    assert_eq!(found.get_param(ROUTER_PATH_PARAM), Some("/static"));
}

#[test]
fn missing_placeholder_segment_is_no_match() {
    let app = build_app();
    assert!(app.get_route("/api/v1/nothing").is_none());
}

#[test]
fn unknown_paths_resolve_to_none() {
    let app = build_app();
    assert!(app.get_route("/nope/nope/nope").is_none());
    assert!(app.get_route("/api/v2/widgets").is_none());
}

#[test]
fn flattened_paths_reflect_the_whole_tree() {
    let app = build_app();
    let paths = app.paths();

    assert!(paths.contains(&"/health".to_string()));
    assert!(paths.contains(&"/ws/{channel}".to_string()));
    // Nested routes carry their nearest mount prefix.
    assert!(paths.contains(&"/v1/widgets".to_string()));
    assert!(paths.contains(&"/v1/widgets/{id}".to_string()));
}

#[test]
fn duplicate_full_path_across_mounts_is_rejected() {
    let mut inner: Router<Handler> = Router::new();
    inner.add_route("/widgets", "inner", None, false).unwrap();

    let mut app: Router<Handler> = Router::new();
    app.mount(inner, "/api").unwrap();

    let err = app.add_route("/api/widgets", "outer", None, false).unwrap_err();
    assert_eq!(
        err,
        RouterError::DuplicateRoute {
            path: "/api/widgets".to_string()
        }
    );
}

#[test]
fn mount_collision_rules_are_asymmetric() {
    let mut inner: Router<Handler> = Router::new();
    inner.add_route("/widgets", "inner", None, false).unwrap();

    let mut app: Router<Handler> = Router::new();
    app.mount(inner, "/api").unwrap();

    // Direct sibling key: rejected.
    let err = app.mount(Router::new(), "/api").unwrap_err();
    assert_eq!(
        err,
        RouterError::DuplicateMount {
            prefix: "/api".to_string()
        }
    );

    // Deeply nested full path: accepted. Mounting only checks direct sibling
    // keys, unlike leaf registration, which checks the flattened tree.
    app.mount(Router::new(), "/api/widgets").unwrap();
}

#[test]
fn registration_errors_display_the_offender() {
    let mut app: Router<Handler> = Router::new();
    app.add_route("/users", "users", None, false).unwrap();

    let err = app.add_route("users/", "dup", None, false).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("/users"), "unhelpful message: {message}");
}
