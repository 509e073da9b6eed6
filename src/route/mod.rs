//! Route module.
//!
//! This module provides the route value object: the HTTP methods and host
//! condition a route answers to, the action it runs, and the parameters bound
//! to it for a request.

mod action;
mod condition;
mod content;
mod error;
mod method;
mod parameters;
#[allow(clippy::module_inception)]
mod route;

// Re-export public items
pub use action::{Action, ActionBuilder, ActionError, ActionResult, ActionSlot, ActionSpec, Handler, HandlerFn};
pub use condition::{Condition, CONDITIONS};
pub use content::Content;
pub use error::Error;
pub use method::{Method, Methods};
pub use parameters::Parameters;
pub use route::{BoundRoute, Route};
