//! Router core: ordered route table, matching and reverse generation.

use crate::error::{Result, RoutingError};
use crate::params::Parameters;
use crate::request::RequestContext;
use crate::route::{ControllerRef, MethodSet, ParameterStyle, Route, TemplateToken};
use http::Method;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Result of matching a request against the route table.
///
/// Matching never mutates the stored [`Route`]; every call produces a fresh
/// `RouteMatch` holding the shared definition and its own parameters.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// The matched route definition
    pub route: Arc<Route>,
    /// Preset parameters merged with the values captured from the path
    pub parameters: Parameters,
}

impl RouteMatch {
    #[inline]
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.parameters.get(name)
    }

    /// Convert parameters to a `HashMap`. Allocates.
    #[must_use]
    pub fn params_map(&self) -> HashMap<String, String> {
        self.parameters.to_map()
    }
}

/// Which value survives when a captured parameter collides with a preset one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterPrecedence {
    /// Values captured from the URL override presets
    #[default]
    Extracted,
    /// Preset values override captured ones
    Preset,
}

/// Options accepted by [`Router::map`].
#[derive(Debug, Clone, Default)]
pub struct RouteOptions {
    /// Accepted methods; the route default applies when `None`
    pub methods: Option<MethodSet>,
    /// Filters keyed by placeholder token (`":id"`)
    pub filters: Vec<(String, String)>,
    /// How dispatch packages parameters
    pub parameter_style: ParameterStyle,
    /// Name used for reverse generation
    pub name: Option<String>,
    /// Preset parameters
    pub parameters: Parameters,
    /// Opaque value carried through to the caller
    pub target: Option<serde_json::Value>,
}

/// A route plus its matcher compiled against the router's base path.
#[derive(Debug, Clone)]
struct CompiledRoute {
    route: Arc<Route>,
    matcher: Regex,
    param_names: Vec<Arc<str>>,
}

impl CompiledRoute {
    fn compile(route: Arc<Route>, base_path: &str) -> Result<Self> {
        let placeholders = route.placeholders();
        if let Some(duplicate) = placeholders
            .iter()
            .enumerate()
            .find_map(|(i, name)| placeholders[..i].contains(name).then_some(*name))
        {
            return Err(RoutingError::InvalidPattern {
                pattern: route.url().to_string(),
                reason: format!("placeholder `{duplicate}` appears more than once"),
            });
        }
        let param_names: Vec<Arc<str>> = placeholders.into_iter().map(Arc::from).collect();

        let body = route.regex();
        let body = body.strip_suffix('/').unwrap_or(&body);
        let pattern = format!("(?i)^{}{}/?$", regex::escape(base_path), body);
        let matcher = Regex::new(&pattern).map_err(|e| RoutingError::InvalidPattern {
            pattern: pattern.clone(),
            reason: e.to_string(),
        })?;

        if matcher.captures_len() - 1 != param_names.len() {
            warn!(
                route = %route.url(),
                placeholders = param_names.len(),
                capture_groups = matcher.captures_len() - 1,
                "Capture group count differs from placeholder count; route will never match"
            );
        }

        Ok(Self {
            route,
            matcher,
            param_names,
        })
    }

    /// Capture parameters positionally. `None` when the path does not match,
    /// the filters produce a different number of groups than placeholders,
    /// or an optional group took no part in the match.
    fn capture(&self, path: &str) -> Option<Parameters> {
        if self.matcher.captures_len() - 1 != self.param_names.len() {
            return None;
        }
        let captures = self.matcher.captures(path)?;
        let mut params = Parameters::new();
        for (i, name) in self.param_names.iter().enumerate() {
            let value = captures.get(i + 1)?;
            params.insert(Arc::clone(name), value.as_str());
        }
        Some(params)
    }
}

/// Ordered route table with first-match-wins semantics.
///
/// Routes are evaluated in insertion order; the table is never reordered.
/// A built router is read-only for matching and can be shared across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<CompiledRoute>,
    named: HashMap<String, usize>,
    base_path: String,
    precedence: ParameterPrecedence,
}

impl Router {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a router from routes in priority order.
    pub fn with_routes(routes: impl IntoIterator<Item = Route>) -> Result<Self> {
        let mut router = Router::new();
        for route in routes {
            router.add_route(route)?;
        }
        Ok(router)
    }

    /// Append a route to the table.
    ///
    /// Fails with [`RoutingError::InvalidPattern`] when the derived matching
    /// expression does not compile. A name already in use is re-pointed at
    /// the new route.
    pub fn add_route(&mut self, route: Route) -> Result<()> {
        let compiled = CompiledRoute::compile(Arc::new(route), &self.base_path)?;
        let index = self.routes.len();

        if let Some(name) = compiled.route.name() {
            if let Some(previous) = self.named.insert(name.to_string(), index) {
                warn!(
                    route_name = %name,
                    previous_route = %self.routes[previous].route.url(),
                    route = %compiled.route.url(),
                    "Route name already registered - replacing"
                );
            }
        }

        debug!(
            route = %compiled.route.url(),
            methods = %compiled.route.methods(),
            route_name = compiled.route.name().unwrap_or(""),
            position = index,
            "Route added"
        );

        self.routes.push(compiled);
        Ok(())
    }

    /// Declare a route from a template, a `Controller::action` reference and options.
    pub fn map(&mut self, url: &str, controller: &str, options: RouteOptions) -> Result<()> {
        let controller: ControllerRef = controller.parse()?;
        let mut route = Route::new(url).with_controller(controller);
        if let Some(methods) = options.methods {
            route.set_methods(methods);
        }
        if !options.filters.is_empty() || options.parameter_style != ParameterStyle::default() {
            route.set_filters(options.filters, options.parameter_style)?;
        }
        if let Some(name) = options.name {
            route.set_name(name);
        }
        route.set_parameters(options.parameters);
        route.set_target(options.target);
        self.add_route(route)
    }

    /// Set the prefix expected on incoming paths and added to generated URLs.
    ///
    /// Trailing slashes are stripped. Matchers are recompiled; a failure
    /// leaves the previous base path in place.
    pub fn set_base_path(&mut self, base_path: &str) -> Result<()> {
        let base_path = base_path.trim_end_matches('/').to_string();
        let routes = self
            .routes
            .iter()
            .map(|c| CompiledRoute::compile(Arc::clone(&c.route), &base_path))
            .collect::<Result<Vec<_>>>()?;
        self.routes = routes;
        self.base_path = base_path;
        Ok(())
    }

    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn set_parameter_precedence(&mut self, precedence: ParameterPrecedence) {
        self.precedence = precedence;
    }

    #[must_use]
    pub fn parameter_precedence(&self) -> ParameterPrecedence {
        self.precedence
    }

    /// Routes in match-priority order.
    pub fn routes(&self) -> impl Iterator<Item = &Arc<Route>> {
        self.routes.iter().map(|c| &c.route)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    #[must_use]
    pub fn named_route(&self, name: &str) -> Option<&Arc<Route>> {
        self.named.get(name).map(|&i| &self.routes[i].route)
    }

    /// Match a method and path against the table.
    ///
    /// Returns the first route whose method set contains `method` and whose
    /// template matches `path` (case-insensitively, trailing slash optional).
    /// `None` means no route matched.
    #[must_use]
    pub fn route(&self, method: &Method, path: &str) -> Option<RouteMatch> {
        debug!(method = %method, path = %path, "Route match attempt");
        let match_start = Instant::now();

        for compiled in &self.routes {
            if !compiled.route.methods().contains(method) {
                continue;
            }
            let Some(extracted) = compiled.capture(path) else {
                continue;
            };

            let parameters = self.merge_parameters(&compiled.route, extracted);
            let match_duration = match_start.elapsed();
            if match_duration > Duration::from_millis(1) {
                warn!(
                    method = %method,
                    path = %path,
                    route = %compiled.route.url(),
                    duration_us = match_duration.as_micros(),
                    "Slow route matching detected"
                );
            } else {
                info!(
                    method = %method,
                    path = %path,
                    route = %compiled.route.url(),
                    route_name = compiled.route.name().unwrap_or(""),
                    parameters = ?parameters,
                    duration_us = match_duration.as_micros(),
                    "Route matched"
                );
            }

            return Some(RouteMatch {
                route: Arc::clone(&compiled.route),
                parameters,
            });
        }

        debug!(
            method = %method,
            path = %path,
            duration_us = match_start.elapsed().as_micros(),
            "No route matched"
        );
        None
    }

    /// [`Router::route`] with `GET`.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
        self.route(&Method::GET, path)
    }

    /// Match an explicit request context, honouring its method override
    /// and stripping its query string and script directory.
    #[must_use]
    pub fn match_request(&self, request: &RequestContext) -> Option<RouteMatch> {
        self.route(&request.effective_method(), request.path())
    }

    /// Build the URL of the route called `name`.
    ///
    /// Placeholders are replaced in template order by the value supplied for
    /// their name. `:controller` and `:action` fall back to the route's own
    /// controller reference; anything else unresolved stays in the output.
    /// Values are inserted verbatim and the base path is prefixed.
    pub fn generate(&self, name: &str, params: &Parameters) -> Result<String> {
        let route = self
            .named_route(name)
            .ok_or_else(|| RoutingError::RouteNotFound {
                name: name.to_string(),
            })?;

        let mut url = String::with_capacity(self.base_path.len() + route.url().len());
        url.push_str(&self.base_path);
        for token in route.tokens() {
            match token {
                TemplateToken::Literal(text) => url.push_str(text),
                TemplateToken::Placeholder { token, name } => {
                    let value = params.get(name).or_else(|| match name {
                        "controller" => route.controller().map(|c| c.controller.as_str()),
                        "action" => route.action(),
                        _ => None,
                    });
                    url.push_str(value.unwrap_or(token));
                }
            }
        }

        debug!(route_name = %name, url = %url, "URL generated");
        Ok(url)
    }

    fn merge_parameters(&self, route: &Route, extracted: Parameters) -> Parameters {
        let mut parameters = route.parameters().clone();
        parameters.merge(
            &extracted,
            self.precedence == ParameterPrecedence::Extracted,
        );
        parameters
    }
}
