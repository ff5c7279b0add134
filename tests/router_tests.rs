use routekit::{
    ControllerRef, ParameterPrecedence, ParameterStyle, Parameters, RequestContext, Route,
    RouteMatch, Router, RoutingError,
};

use http::Method;
use std::sync::Arc;

fn controller(reference: &str) -> ControllerRef {
    reference.parse().expect("valid controller reference")
}

fn example_router() -> Router {
    Router::with_routes([
        Route::new("/users/")
            .with_name("users")
            .with_methods([Method::GET])
            .with_controller(controller("UserController::create")),
        Route::new("/user/:id")
            .with_name("user")
            .with_methods([Method::GET])
            .with_controller(controller("UserController::show")),
        Route::new("/")
            .with_name("home")
            .with_methods([Method::GET])
            .with_controller(controller("IndexController::home")),
    ])
    .expect("valid routes")
}

fn assert_route_match(router: &Router, method: Method, path: &str, expected_route: &str) {
    let result = router.route(&method, path);
    match result {
        Some(RouteMatch { route, .. }) => {
            let name = route.name().unwrap_or("<unnamed>");
            println!("✅ {} {} → {}", method, path, name);
            assert_eq!(
                name, expected_route,
                "Route mismatch for {} {}: expected '{}', got '{}'",
                method, path, expected_route, name
            );
        }
        None => {
            println!("❌ {} {} → no match", method, path);
            assert_eq!(
                expected_route, "<none>",
                "Expected route to match for {} {}",
                method, path
            );
        }
    }
}

#[test]
fn test_router_get_user() {
    let router = example_router();
    assert_route_match(&router, Method::GET, "/user/42", "user");
    let matched = router.match_path("/user/42").unwrap();
    assert_eq!(matched.params_map().len(), 1);
    assert_eq!(matched.get_param("id"), Some("42"));
}

#[test]
fn test_router_unknown_path() {
    let router = example_router();
    assert_route_match(&router, Method::GET, "/unknown", "<none>");
}

#[test]
fn test_router_method_mismatch() {
    let router = example_router();
    assert_route_match(&router, Method::POST, "/users/", "<none>");
    assert_route_match(&router, Method::GET, "/users/", "users");
}

#[test]
fn test_router_root_path() {
    let router = example_router();
    assert_route_match(&router, Method::GET, "/", "home");
}

#[test]
fn test_router_trailing_slash_optional() {
    let router = example_router();
    assert_route_match(&router, Method::GET, "/users", "users");
    assert_route_match(&router, Method::GET, "/user/42/", "user");
}

#[test]
fn test_router_base_path() {
    let mut router = example_router();
    router.set_base_path("/api").unwrap();
    assert_route_match(&router, Method::GET, "/api/user/42", "user");
    assert_route_match(&router, Method::GET, "/user/42", "<none>");
    assert_route_match(&router, Method::GET, "/api", "home");
}

#[test]
fn test_generate_user() {
    let mut router = example_router();
    let params: Parameters = [("id", "123")].into_iter().collect();
    assert_eq!(router.generate("user", &params).unwrap(), "/user/123/");
    assert_eq!(router.generate("users", &Parameters::new()).unwrap(), "/users/");

    router.set_base_path("/api/").unwrap();
    assert_eq!(router.generate("user", &params).unwrap(), "/api/user/123/");
}

#[test]
fn test_generate_missing_route() {
    let router = example_router();
    let err = router.generate("missing", &Parameters::new()).unwrap_err();
    assert_eq!(
        err,
        RoutingError::RouteNotFound {
            name: "missing".to_string()
        }
    );
}

#[test]
fn test_invalid_filter_name_fails_at_declaration() {
    let err = Route::new("/user/:id")
        .with_filters([("1bad", r"(\d+)")], ParameterStyle::Spread)
        .unwrap_err();
    assert_eq!(
        err,
        RoutingError::InvalidFilterName {
            name: "1bad".to_string()
        }
    );
}

#[test]
fn test_match_is_idempotent_and_does_not_touch_route() {
    let router = example_router();
    let first = router.match_path("/user/1").unwrap();
    let second = router.match_path("/user/2").unwrap();
    let third = router.match_path("/user/1").unwrap();

    assert!(Arc::ptr_eq(&first.route, &second.route));
    assert_eq!(first.get_param("id"), Some("1"));
    assert_eq!(second.get_param("id"), Some("2"));
    assert_eq!(first.parameters, third.parameters);
    assert!(first.route.parameters().is_empty());
}

#[test]
fn test_parameter_precedence_policy() {
    let route = || {
        Route::new("/page/:slug")
            .with_name("page")
            .with_parameters([("slug", "default"), ("lang", "en")].into_iter().collect())
    };

    let router = Router::with_routes([route()]).unwrap();
    let m = router.match_path("/page/about").unwrap();
    assert_eq!(m.get_param("slug"), Some("about"));
    assert_eq!(m.get_param("lang"), Some("en"));

    let mut router = Router::with_routes([route()]).unwrap();
    router.set_parameter_precedence(ParameterPrecedence::Preset);
    let m = router.match_path("/page/about").unwrap();
    assert_eq!(m.get_param("slug"), Some("default"));
}

#[test]
fn test_match_request_with_context() {
    let mut router = Router::with_routes([Route::new("/users/")
        .with_name("users")
        .with_methods([Method::GET, Method::DELETE])])
    .unwrap();
    router.set_base_path("/localhost/webroot").unwrap();

    for uri in [
        "/localhost/webroot/users/",
        "/localhost/webroot/users/?foo=bar&bar=foo",
    ] {
        let request = RequestContext::new(Method::GET, uri);
        assert!(router.match_request(&request).is_some(), "{uri}");
    }

    let tunnelled =
        RequestContext::new(Method::POST, "/localhost/webroot/users").with_form_method("DELETE");
    assert!(router.match_request(&tunnelled).is_some());

    let plain_post = RequestContext::new(Method::POST, "/localhost/webroot/users");
    assert!(router.match_request(&plain_post).is_none());
}

#[test]
fn test_router_is_shareable_across_threads() {
    let router = Arc::new(example_router());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let router = Arc::clone(&router);
            std::thread::spawn(move || {
                let path = format!("/user/{i}");
                router
                    .match_path(&path)
                    .and_then(|m| m.get_param("id").map(str::to_string))
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Some(i.to_string()));
    }
}
