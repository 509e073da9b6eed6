//! Router implementation for microroute-rs.
//!
//! This module provides a small registry that selects a route the way a host
//! dispatcher would: by evaluating route conditions through the host, then
//! matching the request method, then running the route with the parameters
//! bound for that request.

mod config;
mod context;
mod error;
#[allow(clippy::module_inception)]
mod router;
mod tests;

// Re-export public items
pub use config::RouterConfig;
pub use context::ConditionContext;
pub use error::Error;
pub use router::Router;
