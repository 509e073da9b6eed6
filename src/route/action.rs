//! Route actions: the handler a route runs plus its descriptor.
//!
//! Callers describe an action with an [`ActionSpec`]. A route normalizes it
//! once, at construction, into an [`Action`] whose `uses` slot always holds
//! exactly one [`Handler`].

use std::fmt;
use std::sync::Arc;

use log::warn;
use serde_json::Value;

use crate::route::content::Content;
use crate::route::error::Error;
use crate::route::parameters::Parameters;

/// Key of the explicit handler slot in an action descriptor.
const USES: &str = "uses";

/// Error type returned by route handlers.
pub type ActionError = Box<dyn std::error::Error + Send + Sync>;

/// Result type returned by route handlers.
pub type ActionResult = Result<Content, ActionError>;

/// Type alias for the function behind a handler.
pub type HandlerFn = Arc<dyn Fn(&Parameters) -> ActionResult + Send + Sync>;

/// An invocable route action.
///
/// Cloning a handler is cheap and clones share the same function, see
/// [`Handler::ptr_eq`].
#[derive(Clone)]
pub struct Handler(HandlerFn);

impl Handler {
    /// Wrap a function as a handler.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Parameters) -> ActionResult + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invoke the handler with the given arguments.
    pub fn call(&self, parameters: &Parameters) -> ActionResult {
        (self.0)(parameters)
    }

    /// Check whether two handlers share the same function.
    pub fn ptr_eq(a: &Handler, b: &Handler) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

/// A value stored in an action descriptor.
#[derive(Debug, Clone)]
pub enum ActionSlot {
    Handler(Handler),
    Meta(Value),
}

impl ActionSlot {
    /// The handler in this slot, if it holds one.
    pub fn as_handler(&self) -> Option<&Handler> {
        match self {
            ActionSlot::Handler(handler) => Some(handler),
            ActionSlot::Meta(_) => None,
        }
    }

    /// The metadata value in this slot, if it holds one.
    pub fn as_meta(&self) -> Option<&Value> {
        match self {
            ActionSlot::Meta(value) => Some(value),
            ActionSlot::Handler(_) => None,
        }
    }
}

/// An action as declared by the caller.
#[derive(Debug, Clone)]
pub enum ActionSpec {
    /// A bare handler.
    Direct(Handler),
    /// A descriptor with an explicit `uses` handler.
    Named {
        uses: Handler,
        meta: Vec<(String, ActionSlot)>,
    },
    /// A descriptor whose handler still has to be found among its entries.
    Unresolved(Vec<(String, ActionSlot)>),
}

impl ActionSpec {
    /// Declare an action from a bare function.
    pub fn handler<F>(f: F) -> Self
    where
        F: Fn(&Parameters) -> ActionResult + Send + Sync + 'static,
    {
        ActionSpec::Direct(Handler::new(f))
    }

    /// Start building a structured descriptor.
    pub fn builder() -> ActionBuilder {
        ActionBuilder::default()
    }
}

impl From<Handler> for ActionSpec {
    fn from(handler: Handler) -> Self {
        ActionSpec::Direct(handler)
    }
}

/// Builder for structured action descriptors.
///
/// ```
/// use microroute_rs::{ActionSpec, Content};
///
/// let spec = ActionSpec::builder()
///     .controller("PageController")
///     .handler("show", |_| Ok(Content::from("page")))
///     .build();
///
/// assert!(matches!(spec, ActionSpec::Unresolved(_)));
/// ```
#[derive(Debug, Default)]
pub struct ActionBuilder {
    uses: Option<Handler>,
    entries: Vec<(String, ActionSlot)>,
}

impl ActionBuilder {
    /// Set the explicit `uses` handler.
    pub fn uses<F>(mut self, f: F) -> Self
    where
        F: Fn(&Parameters) -> ActionResult + Send + Sync + 'static,
    {
        self.uses = Some(Handler::new(f));
        self
    }

    /// Add a handler entry under the given key. A `"uses"` key sets the
    /// explicit handler, like [`uses`](Self::uses).
    pub fn handler<F>(mut self, key: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Parameters) -> ActionResult + Send + Sync + 'static,
    {
        let key = key.into();
        if key == USES {
            return self.uses(f);
        }
        self.entries.push((key, ActionSlot::Handler(Handler::new(f))));
        self
    }

    /// Add a metadata entry under the given key.
    pub fn meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push((key.into(), ActionSlot::Meta(value.into())));
        self
    }

    /// Record the controller the action belongs to.
    pub fn controller(self, name: impl Into<String>) -> Self {
        self.meta("controller", name.into())
    }

    /// Finish the descriptor: `Named` if a `uses` handler was set,
    /// `Unresolved` otherwise.
    pub fn build(self) -> ActionSpec {
        match self.uses {
            Some(uses) => ActionSpec::Named { uses, meta: self.entries },
            None => ActionSpec::Unresolved(self.entries),
        }
    }
}

/// A normalized route action.
#[derive(Debug, Clone)]
pub struct Action {
    uses: Handler,
    entries: Vec<(String, ActionSlot)>,
}

impl Action {
    /// Normalize a declared action.
    ///
    /// An unresolved descriptor with a `"uses"` entry keeps that entry as
    /// its handler; a `"uses"` entry holding metadata is not invocable and
    /// fails. Otherwise the first handler, in declared order, becomes `uses`
    /// and the entry itself stays in the descriptor.
    pub fn normalize(spec: ActionSpec) -> Result<Self, Error> {
        match spec {
            ActionSpec::Direct(uses) => Ok(Action { uses, entries: Vec::new() }),
            ActionSpec::Named { uses, meta } => Ok(Action { uses, entries: meta }),
            ActionSpec::Unresolved(mut entries) => {
                if let Some(index) = entries.iter().position(|(key, _)| key == USES) {
                    let (_, slot) = entries.remove(index);
                    return match slot {
                        ActionSlot::Handler(uses) => Ok(Action { uses, entries }),
                        ActionSlot::Meta(value) => {
                            warn!("Route action uses [{value}] is not a handler");
                            Err(Error::ActionResolution(format!("uses: {value}")))
                        }
                    };
                }

                let uses = entries
                    .iter()
                    .find_map(|(_, slot)| slot.as_handler())
                    .cloned();

                match uses {
                    Some(uses) => Ok(Action { uses, entries }),
                    None => {
                        let keys = entries
                            .iter()
                            .map(|(key, _)| key.as_str())
                            .collect::<Vec<&str>>()
                            .join(", ");
                        warn!("Route action [{keys}] has no handler");
                        Err(Error::ActionResolution(keys))
                    }
                }
            }
        }
    }

    /// The handler the route runs.
    pub fn uses(&self) -> &Handler {
        &self.uses
    }

    /// Get a descriptor entry.
    pub fn get(&self, key: &str) -> Option<&ActionSlot> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, slot)| slot)
    }

    /// Get a metadata entry.
    pub fn meta(&self, key: &str) -> Option<&Value> {
        self.get(key).and_then(ActionSlot::as_meta)
    }

    /// The controller name, if the descriptor names one.
    pub fn controller(&self) -> Option<&str> {
        self.meta("controller").and_then(Value::as_str)
    }

    /// Iterate over the descriptor entries other than `uses`, in declared order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ActionSlot)> {
        self.entries.iter().map(|(key, slot)| (key.as_str(), slot))
    }
}
