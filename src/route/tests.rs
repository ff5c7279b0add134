use super::{ControllerRef, MethodSet, ParameterStyle, Route, DEFAULT_CAPTURE};
use crate::error::RoutingError;
use crate::params::Parameters;
use http::Method;

fn page_route() -> Route {
    Route::new("/page/:page_id")
        .with_methods([Method::GET])
        .with_controller("SomeController::page".parse().unwrap())
        .with_target(serde_json::json!("thisIsAString"))
        .with_name("page")
}

#[test]
fn test_url_is_normalized_on_construction() {
    assert_eq!(page_route().url(), "/page/:page_id/");
}

#[test]
fn test_set_url_appends_trailing_slash_once() {
    let mut route = page_route();
    route.set_url("/pages/:page_name/");
    assert_eq!(route.url(), "/pages/:page_name/");

    route.set_url("/pages/:page_name");
    assert_eq!(route.url(), "/pages/:page_name/");

    route.set_url("/foo");
    assert_eq!(route.url(), "/foo/");
}

#[test]
fn test_methods() {
    let mut route = page_route();
    assert_eq!(route.methods().as_slice(), &[Method::GET]);

    route.set_methods([Method::POST]);
    assert_eq!(route.methods().as_slice(), &[Method::POST]);

    assert_eq!(
        Route::new("/").methods().as_slice(),
        &[Method::GET, Method::POST, Method::PUT, Method::DELETE]
    );
}

#[test]
fn test_method_set_parsing() {
    let set: MethodSet = "GET, POST,,PUT".parse().unwrap();
    assert_eq!(set.as_slice(), &[Method::GET, Method::POST, Method::PUT]);
    assert_eq!(set.to_string(), "GET,POST,PUT");

    let lower: MethodSet = "get".parse().unwrap();
    assert!(!lower.contains(&Method::GET));

    assert!(matches!(
        "GE T".parse::<MethodSet>(),
        Err(RoutingError::InvalidConfig { .. })
    ));
}

#[test]
fn test_target_and_name() {
    let mut route = page_route();
    assert_eq!(route.target(), Some(&serde_json::json!("thisIsAString")));
    route.set_target(Some(serde_json::json!("ThisIsAnotherString")));
    assert_eq!(route.target(), Some(&serde_json::json!("ThisIsAnotherString")));

    assert_eq!(route.name(), Some("page"));
    route.set_name("pageroute");
    assert_eq!(route.name(), Some("pageroute"));
}

#[test]
fn test_controller_and_action() {
    let route = page_route();
    assert_eq!(route.controller().unwrap().controller, "SomeController");
    assert_eq!(route.action(), Some("page"));

    let without_action = Route::new("/page/:page_id")
        .with_controller("SomeController".parse().unwrap());
    assert_eq!(without_action.action(), None);
    assert_eq!(without_action.controller().unwrap().to_string(), "SomeController");

    let mut route = page_route();
    route.set_action(Some("edit".to_string())).unwrap();
    assert_eq!(route.action(), Some("edit"));
    assert!(Route::new("/x").set_action(Some("edit".to_string())).is_err());

    let empty_action: ControllerRef = "SomeController::".parse().unwrap();
    assert_eq!(empty_action.action, None);
    assert!("::page".parse::<ControllerRef>().is_err());
}

#[test]
fn test_regex_uses_default_capture() {
    let route = Route::new("/user/:id");
    assert_eq!(route.regex(), r"/user/([\w-]+)/");
    assert_eq!(route.regex(), format!("/user/{DEFAULT_CAPTURE}/"));
    assert_eq!(route.placeholders(), vec!["id"]);
}

#[test]
fn test_regex_uses_filter_and_tracks_changes() {
    let mut route = Route::new("/article/:id/:title_slug");
    route
        .set_filters([(":id", r"(\d+)")], ParameterStyle::Spread)
        .unwrap();
    assert_eq!(route.regex(), r"/article/(\d+)/([\w-]+)/");

    route
        .set_filters([(":title_slug", "([[:alnum:]_-]+)")], ParameterStyle::Spread)
        .unwrap();
    assert_eq!(route.regex(), r"/article/([\w-]+)/([[:alnum:]_-]+)/");
}

#[test]
fn test_regex_escapes_literal_text() {
    let route = Route::new("/feed.xml");
    assert_eq!(route.regex(), r"/feed\.xml/");
}

#[test]
fn test_invalid_filter_name_fails_on_install() {
    let mut route = Route::new("/user/:id");
    let err = route
        .set_filters([("1bad", r"(\d+)")], ParameterStyle::Spread)
        .unwrap_err();
    assert_eq!(
        err,
        RoutingError::InvalidFilterName {
            name: "1bad".to_string()
        }
    );
    assert!(route.filters().is_empty());
}

#[test]
fn test_custom_placeholder_pattern_rejects_old_style_filters() {
    let mut route = Route::new("/user/:user_id");
    assert_eq!(route.placeholder_pattern(), ":([A-Za-z_]+)");

    route.set_placeholder_pattern(":([a-z]+):").unwrap();
    assert_eq!(route.placeholder_pattern(), ":([a-z]+):");

    let err = route
        .set_filters([(":filename", "([[:alnum:].]+).js")], ParameterStyle::Bundled)
        .unwrap_err();
    assert!(matches!(err, RoutingError::InvalidFilterName { .. }));
}

#[test]
fn test_placeholder_pattern_requires_single_group() {
    let mut route = Route::new("/user/:id");
    assert!(matches!(
        route.set_placeholder_pattern(":[a-z]+"),
        Err(RoutingError::InvalidPattern { .. })
    ));
    assert!(matches!(
        route.set_placeholder_pattern("(a*)"),
        Err(RoutingError::InvalidPattern { .. })
    ));
    assert_eq!(route.placeholder_pattern(), ":([A-Za-z_]+)");
}

#[test]
fn test_preset_parameters_merge() {
    let mut route = Route::new("/test/params")
        .with_parameters([("myParam", "isOK")].into_iter().collect());
    route.set_parameters([("myParam", "changed"), ("other", "1")].into_iter().collect());

    let expected: Parameters = [("myParam", "changed"), ("other", "1")].into_iter().collect();
    assert_eq!(route.parameters(), &expected);
}
