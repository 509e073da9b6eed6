//! Route parameters bound for a matched request.

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::route::error::Error;

/// An ordered mapping from parameter name to bound value.
///
/// Positional parameters use their index as the key (`"0"`, `"1"`, ...).
/// Insertion order is kept, which is the order the action receives them in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters(Map<String, Value>);

impl Parameters {
    /// Create an empty binding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, returning the previous value under that name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Get a parameter value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Get a parameter as a string slice, if it is a string.
    pub fn str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Get a parameter that must be present and not null.
    pub fn require(&self, name: &str) -> Result<&Value, Error> {
        match self.get(name) {
            Some(Value::Null) | None => Err(Error::MissingParameter(name.to_string())),
            Some(value) => Ok(value),
        }
    }

    /// Get the value at the given argument position.
    pub fn positional(&self, index: usize) -> Option<&Value> {
        self.0.values().nth(index)
    }

    /// Check if a parameter is bound, even to null.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// The number of bound parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the binding holds no parameter.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the parameters in argument order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Return a copy with every string value percent-decoded.
    ///
    /// Only top-level strings are decoded; numbers, booleans, nulls and
    /// nested structures pass through untouched. `+` is not treated as a
    /// space and malformed escapes are kept verbatim.
    pub fn decoded(&self) -> Self {
        self.0
            .iter()
            .map(|(name, value)| {
                let value = match value {
                    Value::String(raw) => Value::String(decode(raw)),
                    other => other.clone(),
                };
                (name.clone(), value)
            })
            .collect()
    }

    /// Drop every parameter whose value is null.
    pub fn without_nulls(self) -> Self {
        self.0.into_iter().filter(|(_, value)| !value.is_null()).collect()
    }

    /// Consume the binding and return the underlying map.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

fn decode(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

impl From<Map<String, Value>> for Parameters {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl IntoIterator for Parameters {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
