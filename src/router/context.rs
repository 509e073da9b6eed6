//! Host-supplied evaluation of route conditions.

use std::collections::{BTreeSet, HashSet};

/// Tells the router which host predicates hold for the current request.
///
/// Routes only carry predicate identifiers such as `"is_front_page"`. The
/// host platform owns what they mean; it answers through this trait.
pub trait ConditionContext {
    /// Returns true if the named predicate holds for the current request.
    fn is_satisfied(&self, predicate: &str) -> bool;
}

impl<F> ConditionContext for F
where
    F: Fn(&str) -> bool,
{
    fn is_satisfied(&self, predicate: &str) -> bool {
        self(predicate)
    }
}

impl ConditionContext for HashSet<String> {
    fn is_satisfied(&self, predicate: &str) -> bool {
        self.contains(predicate)
    }
}

impl ConditionContext for HashSet<&str> {
    fn is_satisfied(&self, predicate: &str) -> bool {
        self.contains(predicate)
    }
}

impl ConditionContext for BTreeSet<String> {
    fn is_satisfied(&self, predicate: &str) -> bool {
        self.contains(predicate)
    }
}
