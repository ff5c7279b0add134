//! # Dispatcher Module
//!
//! Optional controller dispatch for matched routes.
//!
//! ## Overview
//!
//! A route may carry a controller reference such as `"UserController::show"`.
//! The [`Dispatcher`] maps those identifiers to callables registered at
//! startup and invokes the right one for a [`RouteMatch`](crate::RouteMatch).
//!
//! ## Handler Registration
//!
//! ```rust
//! use routekit::dispatcher::{Dispatcher, HandlerArgs};
//! use routekit::{Route, Router};
//!
//! # fn main() -> Result<(), routekit::RoutingError> {
//! let mut dispatcher: Dispatcher<String> = Dispatcher::new();
//! dispatcher.register_action("UserController", "show", |args| match args {
//!     HandlerArgs::Spread(values) => format!("user {}", values.join(",")),
//!     HandlerArgs::Bundled(params) => format!("user {:?}", params.get("id")),
//! });
//!
//! let router = Router::with_routes([
//!     Route::new("/user/:id").with_controller("UserController::show".parse()?),
//! ])?;
//! let matched = router.match_path("/user/7").expect("route should match");
//! assert_eq!(dispatcher.dispatch(&matched)?, "user 7");
//! # Ok(())
//! # }
//! ```
//!
//! ## Argument Shape
//!
//! [`ParameterStyle::Spread`](crate::route::ParameterStyle::Spread) passes
//! values positionally; [`ParameterStyle::Bundled`](crate::route::ParameterStyle::Bundled)
//! passes the whole map as one argument. Controller-only handlers always
//! receive the map.

mod core;

pub use self::core::{ActionHandler, ControllerHandler, Dispatcher, HandlerArgs};
