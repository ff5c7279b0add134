use crate::params::Parameters;
use crate::route::{ControllerRef, MethodSet};
use crate::router::ParameterPrecedence;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;

/// Top level router configuration.
///
/// ```yaml
/// base_path: /blog
/// routes:
///   article:
///     route: /article/:id/:title_slug
///     _controller: ArticleController::show
///     methods: [GET]
///     filters:
///       ":id": '(\d+)'
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouterConfig {
    /// Prefix applied to every route
    #[serde(default)]
    pub base_path: Option<String>,
    /// Collision policy between captured and preset parameters
    #[serde(default)]
    pub parameter_precedence: ParameterPrecedence,
    /// Routes keyed by name, in declaration (and match) order
    #[serde(default, deserialize_with = "ordered_routes")]
    pub routes: Vec<(String, RouteSpec)>,
}

/// One route declaration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteSpec {
    /// URL template, e.g. `/article/:id`
    pub route: String,
    /// `Controller::action` reference
    #[serde(rename = "_controller", alias = "controller")]
    pub controller: ControllerRef,
    /// Accepted methods, as a list or a comma separated string
    pub methods: MethodSet,
    /// Capture patterns keyed by placeholder token
    #[serde(default)]
    pub filters: BTreeMap<String, String>,
    /// Preset parameters
    #[serde(default)]
    pub parameters: Parameters,
    /// Opaque value passed through to the caller
    #[serde(default)]
    pub target: Option<serde_json::Value>,
    /// Hand all parameters to the action as one map
    #[serde(default)]
    pub bundle_parameters: bool,
}

fn ordered_routes<'de, D>(deserializer: D) -> Result<Vec<(String, RouteSpec)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct RoutesVisitor;

    impl<'de> Visitor<'de> for RoutesVisitor {
        type Value = Vec<(String, RouteSpec)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of route names to route declarations")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut routes: Vec<(String, RouteSpec)> = Vec::new();
            while let Some((name, spec)) = access.next_entry::<String, RouteSpec>()? {
                if routes.iter().any(|(existing, _)| *existing == name) {
                    return Err(serde::de::Error::custom(format!(
                        "duplicate route name `{name}`"
                    )));
                }
                routes.push((name, spec));
            }
            Ok(routes)
        }
    }

    deserializer.deserialize_map(RoutesVisitor)
}
