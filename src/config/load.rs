use super::types::{RouteSpec, RouterConfig};
use crate::error::{Result, RoutingError};
use crate::route::{ParameterStyle, Route};
use crate::router::Router;
use anyhow::Context;
use std::path::Path;
use tracing::{debug, info};

impl RouterConfig {
    /// Parse a YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| RoutingError::InvalidConfig {
            message: e.to_string(),
        })
    }

    /// Parse a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| RoutingError::InvalidConfig {
            message: e.to_string(),
        })
    }

    /// Read a configuration file.
    ///
    /// `.yaml` and `.yml` files are parsed as YAML, anything else as JSON.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            anyhow::bail!("The file {} does not exist", path.display());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("The file {} is not readable", path.display()))?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml" | "yml")
        );
        let config = if is_yaml {
            Self::from_yaml_str(&content)
                .with_context(|| format!("The file {} is not a valid YAML file", path.display()))?
        } else {
            Self::from_json_str(&content)
                .with_context(|| format!("The file {} is not a valid JSON file", path.display()))?
        };

        debug!(
            path = %path.display(),
            routes = config.routes.len(),
            "Router configuration loaded"
        );
        Ok(config)
    }
}

impl RouteSpec {
    /// Build the [`Route`] this declaration describes, named `name`.
    pub fn to_route(&self, name: &str) -> Result<Route> {
        let style = if self.bundle_parameters {
            ParameterStyle::Bundled
        } else {
            ParameterStyle::Spread
        };
        let mut route = Route::new(self.route.as_str())
            .with_name(name)
            .with_methods(self.methods.clone())
            .with_controller(self.controller.clone())
            .with_parameters(self.parameters.clone())
            .with_filters(&self.filters, style)?;
        route.set_target(self.target.clone());
        Ok(route)
    }
}

/// Build a router from a parsed configuration.
///
/// Routes are added in declaration order, each named by its map key. The
/// base path and parameter precedence are applied last.
pub fn parse_config(config: &RouterConfig) -> Result<Router> {
    let mut router = Router::new();
    for (name, spec) in &config.routes {
        router.add_route(spec.to_route(name)?)?;
    }
    if let Some(base_path) = config.base_path.as_deref() {
        router.set_base_path(base_path)?;
    }
    router.set_parameter_precedence(config.parameter_precedence);
    Ok(router)
}

impl Router {
    /// Shorthand for [`parse_config`].
    pub fn from_config(config: &RouterConfig) -> Result<Self> {
        parse_config(config)
    }
}

/// Read a configuration file and build its router.
pub fn load_router(path: impl AsRef<Path>) -> anyhow::Result<Router> {
    let path = path.as_ref();
    let config = RouterConfig::load(path)?;
    let router = parse_config(&config)
        .with_context(|| format!("Invalid router configuration in {}", path.display()))?;
    info!(
        path = %path.display(),
        routes = router.len(),
        base_path = %router.base_path(),
        "Router built from configuration"
    );
    Ok(router)
}
