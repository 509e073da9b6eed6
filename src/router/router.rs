//! Route registration and dispatch.

use log::{debug, info, warn};

use crate::route::{ActionSpec, Content, Method, Methods, Parameters, Route};
use crate::router::config::RouterConfig;
use crate::router::context::ConditionContext;
use crate::router::error::Error;

/// A registry of condition-based routes.
///
/// Routes are tried in registration order. The router never binds
/// parameters on a registered route, so a shared router can dispatch
/// concurrent requests.
#[derive(Debug, Default)]
pub struct Router {
    /// The router configuration.
    pub config: RouterConfig,
    routes: Vec<Route>,
}

impl Router {
    /// Create a new router with the given configuration.
    pub fn new(config: RouterConfig) -> Self {
        Self {
            config,
            routes: Vec::new(),
        }
    }

    /// Register a route.
    pub fn add(
        &mut self,
        methods: impl Into<Methods>,
        condition: &str,
        action: impl Into<ActionSpec>,
    ) -> Result<&Route, Error> {
        let route = Route::new(methods, condition, action)?;
        info!("Registered route {methods} [{condition}]", methods = route.methods(), condition = route.condition_key());
        let index = self.routes.len();
        self.routes.push(route);
        Ok(&self.routes[index])
    }

    /// Register a GET route.
    pub fn get(&mut self, condition: &str, action: impl Into<ActionSpec>) -> Result<&Route, Error> {
        self.add(Method::GET, condition, action)
    }

    /// Register a POST route.
    pub fn post(&mut self, condition: &str, action: impl Into<ActionSpec>) -> Result<&Route, Error> {
        self.add(Method::POST, condition, action)
    }

    /// Register a PUT route.
    pub fn put(&mut self, condition: &str, action: impl Into<ActionSpec>) -> Result<&Route, Error> {
        self.add(Method::PUT, condition, action)
    }

    /// Register a PATCH route.
    pub fn patch(&mut self, condition: &str, action: impl Into<ActionSpec>) -> Result<&Route, Error> {
        self.add(Method::PATCH, condition, action)
    }

    /// Register a DELETE route.
    pub fn delete(&mut self, condition: &str, action: impl Into<ActionSpec>) -> Result<&Route, Error> {
        self.add(Method::DELETE, condition, action)
    }

    /// Register a route answering GET, POST, PUT, PATCH and DELETE.
    pub fn any(&mut self, condition: &str, action: impl Into<ActionSpec>) -> Result<&Route, Error> {
        self.add(Methods::any(), condition, action)
    }

    /// The registered routes, in registration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    fn accepts(&self, route: &Route, method: Method) -> bool {
        route.methods().contains(method)
            || (self.config.implicit_head && method == Method::HEAD && route.methods().contains(Method::GET))
    }

    /// Find the route answering the current request.
    ///
    /// # Arguments
    ///
    /// * `method` - The request method
    /// * `context` - The host's view of which predicates hold
    ///
    /// # Returns
    ///
    /// The first route whose condition holds and whose methods accept the
    /// request, or an error telling whether no condition held or only the
    /// method was wrong. A method error names the condition of the first
    /// satisfied route and lists the methods of every satisfied route.
    pub fn find(&self, method: Method, context: &impl ConditionContext) -> Result<&Route, Error> {
        let matching_routes: Vec<&Route> = self.routes
            .iter()
            .filter(|route| context.is_satisfied(route.condition()))
            .collect();

        let first = match matching_routes.first() {
            Some(route) => *route,
            None => {
                debug!("No route condition holds for {method} request");
                return Err(Error::NoMatch(method));
            }
        };

        match matching_routes.iter().find(|route| self.accepts(route, method)) {
            Some(route) => {
                debug!("Matched route {methods} [{condition}]", methods = route.methods(), condition = route.condition_key());
                Ok(*route)
            }
            None => {
                let mut allowed: Vec<Method> = matching_routes
                    .iter()
                    .flat_map(|route| route.methods().iter())
                    .collect();
                allowed.sort();
                allowed.dedup();

                warn!(
                    "Method {method} not allowed for condition [{condition}]",
                    condition = first.condition_key()
                );
                Err(Error::MethodNotAllowed {
                    method,
                    condition: first.condition_key().to_string(),
                    allowed,
                })
            }
        }
    }

    /// Find the matching route, bind the parameters for this request and run
    /// its action.
    pub fn dispatch(
        &self,
        method: Method,
        context: &impl ConditionContext,
        parameters: Parameters,
    ) -> Result<Content, Error> {
        let route = self.find(method, context)?;
        let bound = route.bind(parameters);
        let bound = if self.config.decode_parameters { bound } else { bound.raw() };
        Ok(bound.run()?)
    }
}
