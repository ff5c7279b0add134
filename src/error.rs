use std::fmt;

/// Errors raised while declaring, generating or dispatching routes.
///
/// A request that matches no route is not an error: [`crate::Router::route`]
/// returns `None` for that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    /// A filter key does not match the route's placeholder pattern
    ///
    /// Raised by `Route::set_filters` before any filter is installed.
    InvalidFilterName {
        /// The offending filter key
        name: String,
    },
    /// A derived or user supplied regular expression is unusable
    InvalidPattern {
        /// The expression that failed
        pattern: String,
        /// Why it was rejected
        reason: String,
    },
    /// `generate` was called with a name no route carries
    RouteNotFound {
        /// The requested route name
        name: String,
    },
    /// The matched route has no action the dispatcher can resolve
    MissingAction {
        /// URL template of the matched route
        route: String,
    },
    /// No handler is registered for the resolved controller/action pair
    HandlerNotFound {
        /// Controller identifier
        controller: String,
        /// Action identifier, if the route names one
        action: Option<String>,
    },
    /// A configuration record is structurally valid but semantically wrong
    InvalidConfig {
        /// Human readable description
        message: String,
    },
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingError::InvalidFilterName { name } => write!(
                f,
                "Invalid filter name `{name}`: it should contain only letters or underscores and start with `:`"
            ),
            RoutingError::InvalidPattern { pattern, reason } => {
                write!(f, "Invalid route pattern `{pattern}`: {reason}")
            }
            RoutingError::RouteNotFound { name } => {
                write!(f, "No route with the name {name} has been found.")
            }
            RoutingError::MissingAction { route } => {
                write!(f, "Route `{route}` has no action to dispatch to")
            }
            RoutingError::HandlerNotFound { controller, action } => match action {
                Some(action) => write!(f, "No handler registered for {controller}::{action}"),
                None => write!(f, "No handler registered for controller {controller}"),
            },
            RoutingError::InvalidConfig { message } => {
                write!(f, "Invalid router configuration: {message}")
            }
        }
    }
}

impl std::error::Error for RoutingError {}

/// Result alias used throughout the crate.
pub type Result<T, E = RoutingError> = std::result::Result<T, E>;
