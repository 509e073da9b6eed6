//! Error types for the router.

use thiserror::Error;

use crate::route::{Error as RouteError, Method};

/// Errors that can occur while registering or dispatching routes.
#[derive(Debug, Error)]
pub enum Error {
    /// A route could not be built, bound or run.
    #[error(transparent)]
    Route(#[from] RouteError),

    /// No route condition holds for the current request.
    #[error("No route matches the current {0} request")]
    NoMatch(Method),

    /// Routes match the current request, but none for this method.
    ///
    /// `condition` is the key of the first satisfied route; `allowed` holds
    /// the methods of all satisfied routes, whatever their condition.
    #[error("Method {method} not allowed for condition [{condition}]")]
    MethodNotAllowed {
        method: Method,
        condition: String,
        allowed: Vec<Method>,
    },

    /// The router configuration is not valid JSON.
    #[error("Invalid router configuration: {0}")]
    Config(#[from] serde_json::Error),
}
