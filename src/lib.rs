//! Condition-based routes for CMS routing layers.
//!
//! A route in this library does not match on a URL path. It answers to a
//! set of HTTP methods and a *condition*: a named conditional tag of the host
//! platform ("is this the front page?", "is this a search results page?").
//! The library resolves condition names to host predicate identifiers,
//! normalizes the route action and runs it with the parameters bound for a
//! request. Evaluating the predicates is left to the host.
//!
//! # Features
//!
//! - Route values with normalized method sets, resolved conditions and actions
//! - Actions given as bare handlers or as descriptors carrying controller metadata
//! - Percent-decoded, insertion-ordered parameter bindings
//! - Per-request binding, so one route can serve concurrent requests
//! - A small router that selects routes by condition and method
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```
//! use microroute_rs::{ActionSpec, Content, Method, Parameters, Route};
//!
//! let mut route = Route::new(Method::GET, "page", ActionSpec::handler(|params| {
//!     Ok(Content::from(format!("page-{}", params.require("id")?)))
//! }))?;
//!
//! assert_eq!(route.condition(), "is_page");
//!
//! route.set_parameters(Parameters::new().with("id", 5));
//! assert_eq!(route.run()?, Content::from("page-5"));
//! # Ok::<(), microroute_rs::RouteError>(())
//! ```
//!
//! ## Error handling
//!
//! ```
//! use microroute_rs::{ActionSpec, Content, Method, Route, RouteError};
//!
//! match Route::new(Method::GET, "frontpage", ActionSpec::handler(|_| Ok(Content::from("home")))) {
//!     Ok(_) => println!("Route created"),
//!     Err(RouteError::ConditionNotFound(key)) => println!("Unknown condition: {}", key),
//!     Err(err) => println!("Other error: {}", err),
//! }
//! ```
//!
//! ## Dispatching
//!
//! ```
//! use microroute_rs::{ActionSpec, Content, Method, Parameters, Router};
//!
//! let mut router = Router::default();
//! router.get("search", ActionSpec::handler(|params| {
//!     Ok(Content::from(format!("results for {}", params.str("s").unwrap_or(""))))
//! }))?;
//!
//! // The host decides which predicates hold for the current request
//! let context = |predicate: &str| predicate == "is_search";
//!
//! let content = router.dispatch(Method::GET, &context, Parameters::new().with("s", "rust%20lang"))?;
//! assert_eq!(content.as_text(), Some("results for rust lang"));
//! # Ok::<(), microroute_rs::RouterError>(())
//! ```
//!
//! See the `demos` directory for a complete example.

// Export the route module
pub mod route;

// Export the router module
pub mod router;

// Re-export commonly used items for convenience
pub use route::{
    Action, ActionError, ActionResult, ActionSpec, BoundRoute, Condition, Content, Error as RouteError, Handler,
    Method, Methods, Parameters, Route,
};
pub use router::{ConditionContext, Error as RouterError, Router, RouterConfig};
