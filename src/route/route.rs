//! The route value object.

use log::debug;

use crate::route::action::{Action, ActionSpec};
use crate::route::condition::Condition;
use crate::route::content::Content;
use crate::route::error::Error;
use crate::route::method::Methods;
use crate::route::parameters::Parameters;

/// A route: the methods and host condition it answers to, and the action it
/// runs.
///
/// Methods, condition and action are fixed at construction. Parameters are
/// bound afterwards, either on the route itself with
/// [`set_parameters`](Route::set_parameters), or per request with
/// [`bind`](Route::bind), which leaves the route untouched and can be used
/// from several threads at once.
#[derive(Debug, Clone)]
pub struct Route {
    methods: Methods,
    condition: Condition,
    action: Action,
    parameters: Option<Parameters>,
}

impl Route {
    /// Create a new route.
    ///
    /// # Arguments
    ///
    /// * `methods` - A single method or a collection of methods
    /// * `condition` - The condition key, e.g. `"front"` or `"page"`
    /// * `action` - The action to run when the route matches
    ///
    /// # Returns
    ///
    /// The route, or an error if no method was given, the condition is
    /// unknown or the action has no handler
    pub fn new(methods: impl Into<Methods>, condition: &str, action: impl Into<ActionSpec>) -> Result<Self, Error> {
        let methods = methods.into();
        if methods.is_empty() {
            return Err(Error::EmptyMethods);
        }

        let condition = Condition::resolve(condition)?;
        let action = Action::normalize(action.into())?;

        debug!("Created route {methods} [{key}] -> {condition}", key = condition.key());

        Ok(Self {
            methods,
            condition,
            action,
            parameters: None,
        })
    }

    /// The HTTP methods the route responds to.
    pub fn methods(&self) -> &Methods {
        &self.methods
    }

    /// The host predicate identifier, e.g. `"is_front_page"`.
    pub fn condition(&self) -> &'static str {
        self.condition.predicate()
    }

    /// The condition key the route was declared with, e.g. `"front"`.
    pub fn condition_key(&self) -> &'static str {
        self.condition.key()
    }

    /// The normalized action.
    pub fn action(&self) -> &Action {
        &self.action
    }

    /// Bind parameters on the route itself, replacing any previous binding.
    pub fn set_parameters(&mut self, parameters: Parameters) {
        debug!("Bound route [{key}] with {len} parameter(s)", key = self.condition.key(), len = parameters.len());
        self.parameters = Some(parameters);
    }

    /// Check whether parameters were bound on the route.
    pub fn is_bound(&self) -> bool {
        self.parameters.is_some()
    }

    /// The bound parameters with string values percent-decoded.
    pub fn parameters(&self) -> Result<Parameters, Error> {
        self.parameters
            .as_ref()
            .map(Parameters::decoded)
            .ok_or(Error::UnboundRoute)
    }

    /// The bound parameters without null values.
    pub fn parameters_without_nulls(&self) -> Result<Parameters, Error> {
        Ok(self.parameters()?.without_nulls())
    }

    /// Run the route action with the bound, non-null parameters.
    ///
    /// A failing action surfaces as [`Error::Action`] holding the handler's
    /// own error.
    pub fn run(&self) -> Result<Content, Error> {
        let parameters = self.parameters_without_nulls()?;
        self.call(&parameters)
    }

    /// Bind parameters for a single request without touching the route.
    pub fn bind(&self, parameters: Parameters) -> BoundRoute<'_> {
        BoundRoute {
            route: self,
            parameters,
            decode: true,
        }
    }

    fn call(&self, parameters: &Parameters) -> Result<Content, Error> {
        debug!("Running route [{key}] with {len} parameter(s)", key = self.condition.key(), len = parameters.len());
        self.action.uses().call(parameters).map_err(Error::Action)
    }
}

/// A route together with the parameters bound for one request.
#[derive(Debug, Clone)]
pub struct BoundRoute<'a> {
    route: &'a Route,
    parameters: Parameters,
    decode: bool,
}

impl<'a> BoundRoute<'a> {
    /// Pass string parameters through as bound, without percent-decoding.
    pub fn raw(mut self) -> Self {
        self.decode = false;
        self
    }

    /// The route this binding belongs to.
    pub fn route(&self) -> &'a Route {
        self.route
    }

    /// The bound parameters with string values percent-decoded.
    pub fn parameters(&self) -> Parameters {
        if self.decode {
            self.parameters.decoded()
        } else {
            self.parameters.clone()
        }
    }

    /// The bound parameters without null values.
    pub fn parameters_without_nulls(&self) -> Parameters {
        self.parameters().without_nulls()
    }

    /// Run the route action with the bound, non-null parameters.
    pub fn run(&self) -> Result<Content, Error> {
        self.route.call(&self.parameters_without_nulls())
    }
}
