//! Error types for route construction and execution.

use thiserror::Error;

use crate::route::action::ActionError;

/// Errors that can occur while building, binding or running a route.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP method token is not supported.
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// A route was declared without any HTTP method.
    #[error("A route needs at least one HTTP method")]
    EmptyMethods,

    /// The condition key has no entry in the condition table.
    #[error("The route condition [{0}] is not found.")]
    ConditionNotFound(String),

    /// A structured action carries no invocable handler.
    #[error("No handler found in route action [{0}]")]
    ActionResolution(String),

    /// Parameters were requested before the route was bound.
    #[error("Route is not bound.")]
    UnboundRoute,

    /// A required parameter is missing from the binding.
    #[error("Missing route parameter: {0}")]
    MissingParameter(String),

    /// Error serializing action content to JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The route action failed. The handler's own error is kept as is.
    #[error(transparent)]
    Action(ActionError),
}
