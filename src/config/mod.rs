//! # Config Module
//!
//! Declarative route tables loaded from YAML or JSON.
//!
//! ## Format
//!
//! ```yaml
//! base_path: /blog
//! routes:
//!   index:
//!     route: /index
//!     _controller: PageController::index
//!     methods: GET
//!   article:
//!     route: /article/:id
//!     _controller: ArticleController::show
//!     methods: [GET, POST]
//!     filters:
//!       ":id": '(\d+)'
//!     bundle_parameters: true
//! ```
//!
//! Routes keep their declaration order, which is also their match order.
//! Each map key becomes the route's name for reverse generation.
//!
//! ## Loading
//!
//! ```rust
//! use routekit::config::{parse_config, RouterConfig};
//!
//! # fn main() -> Result<(), routekit::RoutingError> {
//! let config = RouterConfig::from_yaml_str(
//!     "routes:\n  home:\n    route: /\n    _controller: Home::index\n    methods: GET\n",
//! )?;
//! let router = parse_config(&config)?;
//! assert_eq!(router.generate("home", &Default::default())?, "/");
//! # Ok(())
//! # }
//! ```
//!
//! [`RouterConfig::load`] picks the parser from the file extension and
//! reports missing or unreadable files through `anyhow` context.

mod load;
mod types;

pub use load::{load_router, parse_config};
pub use types::{RouteSpec, RouterConfig};
