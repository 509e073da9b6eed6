//! Route conditions and the host platform's conditional tags.
//!
//! A route does not match on a path. It matches when a named conditional
//! tag of the host platform holds for the current request ("is this the
//! search results page?"). This module only resolves names: the key used in
//! a route declaration maps to the identifier of the host predicate. Whether
//! that predicate holds is decided by the host, see
//! [`ConditionContext`](crate::router::ConditionContext).

use std::fmt;

use log::warn;

use crate::route::error::Error;

/// Condition keys and the host predicate each one resolves to.
pub const CONDITIONS: &[(&str, &str)] = &[
    ("404", "is_404"),
    ("archive", "is_archive"),
    ("attachment", "is_attachment"),
    ("author", "is_author"),
    ("category", "is_category"),
    ("date", "is_date"),
    ("day", "is_day"),
    ("front", "is_front_page"),
    ("home", "is_home"),
    ("month", "is_month"),
    ("page", "is_page"),
    ("paged", "is_paged"),
    ("postTypeArchive", "is_post_type_archive"),
    ("search", "is_search"),
    ("subpage", "themosis_is_subpage"),
    ("single", "is_single"),
    ("sticky", "is_sticky"),
    ("singular", "is_singular"),
    ("tag", "is_tag"),
    ("tax", "is_tax"),
    ("template", "themosisIsTemplate"),
    ("time", "is_time"),
    ("year", "is_year"),
];

/// A resolved route condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Condition {
    key: &'static str,
    predicate: &'static str,
}

impl Condition {
    /// Resolve a condition key against the condition table.
    ///
    /// Keys are case-sensitive (`postTypeArchive`, not `posttypearchive`).
    pub fn resolve(key: &str) -> Result<Self, Error> {
        CONDITIONS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|&(key, predicate)| Condition { key, predicate })
            .ok_or_else(|| {
                warn!("Unknown route condition [{key}]");
                Error::ConditionNotFound(key.to_string())
            })
    }

    /// The key the route was declared with, e.g. `"front"`.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// The host predicate identifier, e.g. `"is_front_page"`.
    pub fn predicate(&self) -> &'static str {
        self.predicate
    }

    /// Iterate over every known condition.
    pub fn all() -> impl Iterator<Item = Condition> {
        CONDITIONS.iter().map(|&(key, predicate)| Condition { key, predicate })
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.predicate)
    }
}
