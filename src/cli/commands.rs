use crate::config::load_router;
use crate::params::Parameters;
use crate::request::RequestContext;
use crate::router::Router;
use anyhow::Context;
use clap::{Parser, Subcommand};
use http::Method;
use serde_json::{json, Value};
use std::io::{self, Write};
use std::path::PathBuf;

/// Command-line interface for routekit
///
/// Inspects a route configuration file: lists its routes, matches a
/// request against it and generates URLs from route names.
#[derive(Parser, Debug)]
#[command(name = "routekit")]
#[command(about = "Route table inspection tool", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every route in match order
    Routes {
        /// Path to the route configuration file (YAML or JSON)
        #[arg(short, long, env = "ROUTEKIT_CONFIG")]
        config: PathBuf,
    },
    /// Match a request path and print the resulting parameters
    Match {
        /// Path to the route configuration file (YAML or JSON)
        #[arg(short, long, env = "ROUTEKIT_CONFIG")]
        config: PathBuf,

        /// HTTP method of the request
        #[arg(short, long, default_value = "GET", value_parser = parse_method)]
        method: Method,

        /// Value of the `_method` form field, for tunnelled PUT/DELETE
        #[arg(long)]
        form_method: Option<String>,

        /// Request URI, optionally with a query string
        path: String,
    },
    /// Build the URL of a named route
    Generate {
        /// Path to the route configuration file (YAML or JSON)
        #[arg(short, long, env = "ROUTEKIT_CONFIG")]
        config: PathBuf,

        /// Route name
        name: String,

        /// Placeholder value as `name=value` (repeatable)
        #[arg(short, long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },
}

fn parse_method(s: &str) -> Result<Method, String> {
    Method::from_bytes(s.to_ascii_uppercase().as_bytes())
        .map_err(|_| format!("invalid HTTP method `{s}`"))
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected `name=value`, got `{s}`")),
    }
}

fn routes_json(router: &Router) -> Value {
    let routes: Vec<Value> = router
        .routes()
        .map(|route| {
            json!({
                "name": route.name(),
                "url": route.url(),
                "regex": route.regex(),
                "methods": route.methods().iter().map(Method::as_str).collect::<Vec<_>>(),
                "controller": route.controller().map(ToString::to_string),
            })
        })
        .collect();
    json!({
        "base_path": router.base_path(),
        "routes": routes,
    })
}

/// Run `cli`, writing JSON results to `out`.
pub fn execute(cli: &Cli, out: &mut dyn Write) -> anyhow::Result<()> {
    let result = match &cli.command {
        Commands::Routes { config } => {
            let router = load_router(config)?;
            routes_json(&router)
        }
        Commands::Match {
            config,
            method,
            form_method,
            path,
        } => {
            let router = load_router(config)?;
            let mut request = RequestContext::new(method.clone(), path.as_str());
            if let Some(form_method) = form_method {
                request = request.with_form_method(form_method.as_str());
            }
            let matched = router.match_request(&request).with_context(|| {
                format!("No route matches {} {}", request.effective_method(), path)
            })?;
            json!({
                "name": matched.route.name(),
                "url": matched.route.url(),
                "controller": matched.route.controller().map(ToString::to_string),
                "parameters": matched.parameters,
                "target": matched.route.target(),
            })
        }
        Commands::Generate {
            config,
            name,
            params,
        } => {
            let router = load_router(config)?;
            let params: Parameters = params.iter().cloned().collect();
            let url = router.generate(name, &params)?;
            json!({ "name": name, "url": url })
        }
    };

    serde_json::to_writer_pretty(&mut *out, &result)?;
    writeln!(out)?;
    Ok(())
}

/// Entry point used by the `routekit` binary.
pub fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &mut out)?;
    Ok(())
}
