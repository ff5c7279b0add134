//! # CLI Module
//!
//! Command-line access to a route configuration file.
//!
//! ## Commands
//!
//! ### `routes`
//!
//! List every route in match order with its methods, template and regex:
//!
//! ```bash
//! routekit routes --config routes.yaml
//! ```
//!
//! ### `match`
//!
//! Match a request and print the route name and parameters:
//!
//! ```bash
//! routekit match --config routes.yaml --method POST --form-method DELETE /blog/article/12
//! ```
//!
//! ### `generate`
//!
//! Build the URL of a named route:
//!
//! ```bash
//! routekit generate --config routes.yaml article --param id=12
//! ```
//!
//! All commands print JSON to stdout. `--config` may also come from
//! `ROUTEKIT_CONFIG`.

mod commands;


pub use commands::{execute, run_cli, Cli, Commands};
