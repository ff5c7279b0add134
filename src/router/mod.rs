//! # Router Module
//!
//! The router holds an ordered table of [`Route`](crate::route::Route)s and
//! resolves requests against it.
//!
//! ## Overview
//!
//! - **Matching**: each route's template is compiled into an anchored,
//!   case-insensitive regex prefixed by the base path. Routes are tried in
//!   declaration order; the first one whose method set and pattern both
//!   match wins.
//! - **Parameters**: captures are bound to placeholder names by position and
//!   merged with the route's preset parameters.
//! - **Reverse routing**: [`Router::generate`] rebuilds a URL from a route
//!   name and parameter values.
//!
//! ## Example
//!
//! ```rust
//! use http::Method;
//! use routekit::{Parameters, Route, Router};
//!
//! # fn main() -> Result<(), routekit::RoutingError> {
//! let mut router = Router::new();
//! router.add_route(Route::new("/user/:id").with_methods([Method::GET]).with_name("user"))?;
//!
//! let matched = router.route(&Method::GET, "/user/42").expect("route should match");
//! assert_eq!(matched.get_param("id"), Some("42"));
//!
//! let params: Parameters = [("id", "123")].into_iter().collect();
//! assert_eq!(router.generate("user", &params)?, "/user/123/");
//! # Ok(())
//! # }
//! ```
//!
//! ## Performance
//!
//! Matching is a linear scan: O(n) regex evaluations where n is the number
//! of routes. Matchers are compiled once, when a route is added or the base
//! path changes.

mod core;

pub use self::core::{ParameterPrecedence, RouteMatch, RouteOptions, Router};
