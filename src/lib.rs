//! # routekit
//!
//! **routekit** is a small URL router: it maps request paths to route
//! definitions, extracts the named parameters embedded in them and builds
//! URLs back from route names.
//!
//! ## Overview
//!
//! A route is declared from a template such as `/article/:id/:title_slug`.
//! Each `:name` placeholder becomes a capture group, `([\w-]+)` unless a
//! filter supplies a tighter pattern like `(\d+)`. The [`Router`] keeps
//! routes in declaration order and returns the first one whose method set
//! and template both match.
//!
//! ## Architecture
//!
//! - **[`route`]** - Route definitions: template, methods, filters, presets
//! - **[`router`]** - Ordered route table, matching and URL generation
//! - **[`request`]** - Explicit request context (method override, query, script dir)
//! - **[`dispatcher`]** - Optional registry mapping controller references to handlers
//! - **[`config`]** - YAML/JSON route tables
//! - **[`params`]** - Ordered parameter map
//! - **[`error`]** - [`RoutingError`]
//! - **[`cli`]**, **[`logging`]**, **[`runtime_config`]** - The `routekit` binary
//!
//! ## Quick Start
//!
//! ```rust
//! use http::Method;
//! use routekit::{ParameterStyle, Parameters, Route, Router};
//!
//! # fn main() -> Result<(), routekit::RoutingError> {
//! let mut router = Router::with_routes([
//!     Route::new("/article/:id/:title_slug")
//!         .with_name("article")
//!         .with_methods([Method::GET])
//!         .with_filters([(":id", r"(\d+)")], ParameterStyle::Spread)?,
//! ])?;
//! router.set_base_path("/blog")?;
//!
//! let matched = router
//!     .route(&Method::GET, "/blog/article/42/hello-world")
//!     .expect("route should match");
//! assert_eq!(matched.get_param("id"), Some("42"));
//!
//! let params: Parameters = [("id", "7"), ("title_slug", "intro")].into_iter().collect();
//! assert_eq!(router.generate("article", &params)?, "/blog/article/7/intro/");
//! # Ok(())
//! # }
//! ```
//!
//! ## Matching Rules
//!
//! - Matching is case-insensitive and the trailing `/` is optional
//! - The base path must prefix the request path
//! - A filter whose capture groups disagree with the template never matches
//! - No match is `None`, never an error
//!
//! ## Logging
//!
//! The library emits `tracing` events (route added, matched, not matched,
//! handler registered). Install a subscriber to see them; the binary uses
//! [`logging::init_logging`].

pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod logging;
pub mod params;
pub mod request;
pub mod route;
pub mod router;
pub mod runtime_config;

pub use config::{load_router, parse_config, RouteSpec, RouterConfig};
pub use dispatcher::{Dispatcher, HandlerArgs};
pub use error::RoutingError;
pub use params::Parameters;
pub use request::RequestContext;
pub use route::{ControllerRef, MethodSet, ParameterStyle, Route};
pub use router::{ParameterPrecedence, RouteMatch, RouteOptions, Router};
