use crate::error::{Result, RoutingError};
use crate::params::Parameters;
use crate::route::ParameterStyle;
use crate::router::RouteMatch;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Arguments handed to an action handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerArgs {
    /// Parameter values, one per argument, in parameter order
    Spread(Vec<String>),
    /// All parameters as a single map
    Bundled(Parameters),
}

impl HandlerArgs {
    fn for_style(style: ParameterStyle, parameters: &Parameters) -> Self {
        match style {
            ParameterStyle::Spread => {
                HandlerArgs::Spread(parameters.values().map(str::to_string).collect())
            }
            ParameterStyle::Bundled => HandlerArgs::Bundled(parameters.clone()),
        }
    }
}

/// Callable registered for a `Controller::action` pair.
pub type ActionHandler<R> = Arc<dyn Fn(HandlerArgs) -> R + Send + Sync>;

/// Callable registered for a controller invoked without an action.
///
/// It always receives the full parameter map.
pub type ControllerHandler<R> = Arc<dyn Fn(Parameters) -> R + Send + Sync>;

/// Registry resolving a matched route's controller reference to code.
///
/// Handlers are looked up by the identifiers written in the route
/// declaration (`"UserController::show"`), never by reflection.
pub struct Dispatcher<R = serde_json::Value> {
    actions: HashMap<(String, String), ActionHandler<R>>,
    controllers: HashMap<String, ControllerHandler<R>>,
}

impl<R> Default for Dispatcher<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for Dispatcher<R> {
    fn clone(&self) -> Self {
        Self {
            actions: self.actions.clone(),
            controllers: self.controllers.clone(),
        }
    }
}

impl<R> Dispatcher<R> {
    #[must_use]
    pub fn new() -> Self {
        Dispatcher {
            actions: HashMap::new(),
            controllers: HashMap::new(),
        }
    }

    /// Register the handler for `controller::action`.
    ///
    /// Registering the same pair twice replaces the earlier handler.
    pub fn register_action<F>(&mut self, controller: &str, action: &str, handler: F)
    where
        F: Fn(HandlerArgs) -> R + Send + Sync + 'static,
    {
        let key = (controller.to_string(), action.to_string());
        if self.actions.insert(key, Arc::new(handler)).is_some() {
            warn!(
                controller = %controller,
                action = %action,
                "Replaced existing action handler"
            );
        }
        info!(
            controller = %controller,
            action = %action,
            total_handlers = self.len(),
            "Action handler registered"
        );
    }

    /// Register the handler used when a route names `controller` without an action.
    pub fn register_controller<F>(&mut self, controller: &str, handler: F)
    where
        F: Fn(Parameters) -> R + Send + Sync + 'static,
    {
        if self
            .controllers
            .insert(controller.to_string(), Arc::new(handler))
            .is_some()
        {
            warn!(controller = %controller, "Replaced existing controller handler");
        }
        info!(
            controller = %controller,
            total_handlers = self.len(),
            "Controller handler registered"
        );
    }

    #[must_use]
    pub fn has_action(&self, controller: &str, action: &str) -> bool {
        self.actions
            .contains_key(&(controller.to_string(), action.to_string()))
    }

    /// Number of registered handlers of both kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len() + self.controllers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invoke the handler the matched route points at.
    ///
    /// # Errors
    ///
    /// - [`RoutingError::MissingAction`] when the route has no controller, or
    ///   names a controller without an action and no controller handler exists
    /// - [`RoutingError::HandlerNotFound`] when the `controller::action` pair
    ///   is not registered
    pub fn dispatch(&self, matched: &RouteMatch) -> Result<R> {
        let route = &matched.route;
        let Some(controller) = route.controller() else {
            return Err(RoutingError::MissingAction {
                route: route.url().to_string(),
            });
        };

        match controller.action.as_deref() {
            Some(action) => {
                let key = (controller.controller.clone(), action.to_string());
                let handler = self
                    .actions
                    .get(&key)
                    .ok_or_else(|| RoutingError::HandlerNotFound {
                        controller: controller.controller.clone(),
                        action: Some(action.to_string()),
                    })?;
                debug!(
                    controller = %controller.controller,
                    action = %action,
                    style = ?route.parameter_style(),
                    "Dispatching to action"
                );
                Ok(handler(HandlerArgs::for_style(
                    route.parameter_style(),
                    &matched.parameters,
                )))
            }
            None => {
                let handler = self.controllers.get(&controller.controller).ok_or_else(|| {
                    RoutingError::MissingAction {
                        route: route.url().to_string(),
                    }
                })?;
                debug!(controller = %controller.controller, "Dispatching to controller");
                Ok(handler(matched.parameters.clone()))
            }
        }
    }
}
