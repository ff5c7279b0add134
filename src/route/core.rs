use crate::error::{Result, RoutingError};
use crate::params::Parameters;
use http::Method;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Placeholder syntax used unless a route overrides it.
///
/// The single capture group holds the placeholder name; the whole match is
/// the token that filters are keyed by.
pub const DEFAULT_PLACEHOLDER_PATTERN: &str = ":([A-Za-z_]+)";

/// Capture used for placeholders that have no filter.
pub const DEFAULT_CAPTURE: &str = r"([\w-]+)";

#[allow(clippy::expect_used)]
static DEFAULT_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_PLACEHOLDER_PATTERN).expect("valid placeholder regex"));

#[allow(clippy::expect_used)]
static DEFAULT_FILTER_KEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^(?:{DEFAULT_PLACEHOLDER_PATTERN})$")).expect("valid filter key regex")
});

/// HTTP verbs a route accepts, in declaration order.
///
/// Comparison is exact: `get` is an extension method distinct from `GET`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSet(Vec<Method>);

impl MethodSet {
    #[must_use]
    pub fn new(methods: Vec<Method>) -> Self {
        let mut set = MethodSet(Vec::with_capacity(methods.len()));
        for method in methods {
            if !set.0.contains(&method) {
                set.0.push(method);
            }
        }
        set
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, method: &Method) -> bool {
        self.0.contains(method)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Method> {
        self.0.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Method] {
        &self.0
    }
}

impl Default for MethodSet {
    fn default() -> Self {
        MethodSet(vec![Method::GET, Method::POST, Method::PUT, Method::DELETE])
    }
}

impl From<Vec<Method>> for MethodSet {
    fn from(methods: Vec<Method>) -> Self {
        MethodSet::new(methods)
    }
}

impl<const N: usize> From<[Method; N]> for MethodSet {
    fn from(methods: [Method; N]) -> Self {
        MethodSet::new(methods.to_vec())
    }
}

impl FromStr for MethodSet {
    type Err = RoutingError;

    /// Parse a comma separated list such as `"GET, POST"`.
    fn from_str(s: &str) -> Result<Self> {
        parse_methods(s.split(','))
    }
}

impl fmt::Display for MethodSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, method) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(method.as_str())?;
        }
        Ok(())
    }
}

fn parse_methods<'a>(items: impl IntoIterator<Item = &'a str>) -> Result<MethodSet> {
    let mut methods = Vec::new();
    for item in items {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }
        let method = Method::from_bytes(item.as_bytes()).map_err(|_| RoutingError::InvalidConfig {
            message: format!("`{item}` is not a valid HTTP method"),
        })?;
        methods.push(method);
    }
    Ok(MethodSet::new(methods))
}

impl<'de> Deserialize<'de> for MethodSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawMethods {
            List(Vec<String>),
            Joined(String),
        }

        let parsed = match RawMethods::deserialize(deserializer)? {
            RawMethods::List(items) => parse_methods(items.iter().map(String::as_str)),
            RawMethods::Joined(joined) => joined.parse(),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

/// A `Controller::action` reference naming the code a route dispatches to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerRef {
    pub controller: String,
    pub action: Option<String>,
}

impl ControllerRef {
    #[must_use]
    pub fn new(controller: impl Into<String>, action: Option<String>) -> Self {
        Self {
            controller: controller.into(),
            action,
        }
    }
}

impl FromStr for ControllerRef {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self> {
        let (controller, action) = match s.split_once("::") {
            Some((controller, action)) => (controller.trim(), Some(action.trim())),
            None => (s.trim(), None),
        };
        if controller.is_empty() {
            return Err(RoutingError::InvalidConfig {
                message: format!("controller reference `{s}` has no controller"),
            });
        }
        Ok(ControllerRef {
            controller: controller.to_string(),
            action: action.filter(|a| !a.is_empty()).map(str::to_string),
        })
    }
}

impl<'de> Deserialize<'de> for ControllerRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ControllerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.action {
            Some(action) => write!(f, "{}::{}", self.controller, action),
            None => f.write_str(&self.controller),
        }
    }
}

/// How matched parameters are handed to a dispatched handler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParameterStyle {
    /// One positional argument per parameter value
    #[default]
    Spread,
    /// The whole parameter map as a single argument
    Bundled,
}

/// One piece of a URL template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TemplateToken<'a> {
    Literal(&'a str),
    /// `token` is the full placeholder text (e.g. `:id`), `name` its name
    Placeholder { token: &'a str, name: &'a str },
}

/// A single routable URL template and its matching rules.
#[derive(Debug, Clone)]
pub struct Route {
    url: String,
    methods: MethodSet,
    filters: BTreeMap<String, String>,
    controller: Option<ControllerRef>,
    target: Option<serde_json::Value>,
    name: Option<String>,
    parameters: Parameters,
    parameter_style: ParameterStyle,
    placeholder: Regex,
    filter_key: Regex,
}

impl Route {
    /// Create a route accepting the default methods.
    pub fn new(url: impl Into<String>) -> Self {
        Route {
            url: normalize_url(url.into()),
            methods: MethodSet::default(),
            filters: BTreeMap::new(),
            controller: None,
            target: None,
            name: None,
            parameters: Parameters::new(),
            parameter_style: ParameterStyle::default(),
            placeholder: DEFAULT_PLACEHOLDER.clone(),
            filter_key: DEFAULT_FILTER_KEY.clone(),
        }
    }

    #[must_use]
    pub fn with_methods(mut self, methods: impl Into<MethodSet>) -> Self {
        self.methods = methods.into();
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_controller(mut self, controller: ControllerRef) -> Self {
        self.controller = Some(controller);
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: serde_json::Value) -> Self {
        self.target = Some(target);
        self
    }

    #[must_use]
    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.set_parameters(parameters);
        self
    }

    /// Builder form of [`Route::set_filters`].
    pub fn with_filters<I, K, V>(mut self, filters: I, style: ParameterStyle) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.set_filters(filters, style)?;
        Ok(self)
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Replace the template. A trailing `/` is appended when missing.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = normalize_url(url.into());
    }

    #[must_use]
    pub fn methods(&self) -> &MethodSet {
        &self.methods
    }

    pub fn set_methods(&mut self, methods: impl Into<MethodSet>) {
        self.methods = methods.into();
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    #[must_use]
    pub fn target(&self) -> Option<&serde_json::Value> {
        self.target.as_ref()
    }

    pub fn set_target(&mut self, target: Option<serde_json::Value>) {
        self.target = target;
    }

    #[must_use]
    pub fn controller(&self) -> Option<&ControllerRef> {
        self.controller.as_ref()
    }

    pub fn set_controller(&mut self, controller: Option<ControllerRef>) {
        self.controller = controller;
    }

    /// The action half of the controller reference, if any.
    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.controller.as_ref().and_then(|c| c.action.as_deref())
    }

    /// Replace the action half of the controller reference.
    ///
    /// Fails with [`RoutingError::InvalidConfig`] when the route has no
    /// controller to attach the action to.
    pub fn set_action(&mut self, action: Option<String>) -> Result<()> {
        match self.controller.as_mut() {
            Some(controller) => {
                controller.action = action.filter(|a| !a.is_empty());
                Ok(())
            }
            None => Err(RoutingError::InvalidConfig {
                message: format!("route `{}` has no controller to set an action on", self.url),
            }),
        }
    }

    #[must_use]
    pub fn filters(&self) -> &BTreeMap<String, String> {
        &self.filters
    }

    #[must_use]
    pub fn parameter_style(&self) -> ParameterStyle {
        self.parameter_style
    }

    /// Install per-placeholder capture patterns.
    ///
    /// Keys are full placeholder tokens such as `":id"`. Every key must
    /// match the placeholder pattern; otherwise nothing is installed and
    /// [`RoutingError::InvalidFilterName`] names the first offender.
    pub fn set_filters<I, K, V>(&mut self, filters: I, style: ParameterStyle) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let filters: BTreeMap<String, String> = filters
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        validate_filter_keys(&self.filter_key, &filters)?;
        self.filters = filters;
        self.parameter_style = style;
        Ok(())
    }

    /// Source of the placeholder pattern in effect.
    #[must_use]
    pub fn placeholder_pattern(&self) -> &str {
        self.placeholder.as_str()
    }

    /// Replace the placeholder syntax, e.g. `":([a-z]+):"`.
    ///
    /// The pattern needs exactly one capture group (the name) and must not
    /// match the empty string. Installed filters are re-checked against it.
    pub fn set_placeholder_pattern(&mut self, pattern: &str) -> Result<()> {
        let invalid = |reason: String| RoutingError::InvalidPattern {
            pattern: pattern.to_string(),
            reason,
        };
        let placeholder = Regex::new(pattern).map_err(|e| invalid(e.to_string()))?;
        if placeholder.captures_len() != 2 {
            return Err(invalid("expected exactly one capture group".to_string()));
        }
        if placeholder.is_match("") {
            return Err(invalid("pattern matches the empty string".to_string()));
        }
        let filter_key =
            Regex::new(&format!("^(?:{pattern})$")).map_err(|e| invalid(e.to_string()))?;
        validate_filter_keys(&filter_key, &self.filters)?;
        self.placeholder = placeholder;
        self.filter_key = filter_key;
        Ok(())
    }

    /// Preset parameters, merged into every match of this route.
    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Merge `parameters` into the presets; incoming values win.
    pub fn set_parameters(&mut self, parameters: Parameters) {
        self.parameters.merge(&parameters, true);
    }

    /// Placeholder names in template order.
    #[must_use]
    pub fn placeholders(&self) -> Vec<&str> {
        self.tokens()
            .into_iter()
            .filter_map(|t| match t {
                TemplateToken::Placeholder { name, .. } => Some(name),
                TemplateToken::Literal(_) => None,
            })
            .collect()
    }

    /// Derive the (unanchored) matching expression for this template.
    ///
    /// Literal text is escaped; each placeholder becomes its filter or the
    /// default capture. Always reflects the current template and filters.
    #[must_use]
    pub fn regex(&self) -> String {
        let mut pattern = String::with_capacity(self.url.len() * 2);
        for token in self.tokens() {
            match token {
                TemplateToken::Literal(text) => pattern.push_str(&regex::escape(text)),
                TemplateToken::Placeholder { token, .. } => {
                    let capture = self.filters.get(token).map_or(DEFAULT_CAPTURE, String::as_str);
                    pattern.push_str(capture);
                }
            }
        }
        pattern
    }

    pub(crate) fn tokens(&self) -> Vec<TemplateToken<'_>> {
        let mut tokens = Vec::new();
        let mut last = 0;
        for caps in self.placeholder.captures_iter(&self.url) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if whole.start() > last {
                tokens.push(TemplateToken::Literal(&self.url[last..whole.start()]));
            }
            tokens.push(TemplateToken::Placeholder {
                token: whole.as_str(),
                name: name.as_str(),
            });
            last = whole.end();
        }
        if last < self.url.len() {
            tokens.push(TemplateToken::Literal(&self.url[last..]));
        }
        tokens
    }
}

fn normalize_url(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

fn validate_filter_keys(filter_key: &Regex, filters: &BTreeMap<String, String>) -> Result<()> {
    match filters.keys().find(|k| !filter_key.is_match(k)) {
        Some(bad) => Err(RoutingError::InvalidFilterName { name: bad.clone() }),
        None => Ok(()),
    }
}
