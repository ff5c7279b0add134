//! # Route Module
//!
//! A [`Route`] is one URL template plus the rules used to match it: accepted
//! methods, per-placeholder filters, preset parameters, and the controller
//! it dispatches to.
//!
//! ## Template syntax
//!
//! ```text
//! /article/:id/:title_slug
//!          ^^^ ^^^^^^^^^^^ placeholders, `:` followed by [A-Za-z_]+
//! ```
//!
//! Templates are stored with a trailing `/`. Each placeholder compiles to a
//! capture group: the filter registered for its token (e.g. `":id"`), or
//! `([\w-]+)` when there is none.
//!
//! ```rust
//! use routekit::route::{ParameterStyle, Route};
//!
//! let route = Route::new("/article/:id")
//!     .with_filters([(":id", r"(\d+)")], ParameterStyle::Spread)
//!     .unwrap();
//! assert_eq!(route.url(), "/article/:id/");
//! assert_eq!(route.regex(), r"/article/(\d+)/");
//! ```

mod core;
#[cfg(test)]
mod tests;

pub use self::core::{
    ControllerRef, MethodSet, ParameterStyle, Route, DEFAULT_CAPTURE, DEFAULT_PLACEHOLDER_PATTERN,
};
pub(crate) use self::core::TemplateToken;
