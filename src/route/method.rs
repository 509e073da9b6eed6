//! HTTP request methods and method sets.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::route::error::Error;

/// HTTP request methods a route can respond to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Method {
    /// GET method: Requests a representation of the specified resource.
    GET,
    /// POST method: Submits data to be processed to the identified resource.
    POST,
    /// PUT method: Replaces all current representations of the target resource with the request payload.
    PUT,
    /// PATCH method: Applies partial modifications to a resource.
    PATCH,
    /// DELETE method: Deletes the specified resource.
    DELETE,
    /// HEAD method: Same as GET but only transfers the status line and header section.
    HEAD,
    /// OPTIONS method: Describes the communication options for the target resource.
    OPTIONS,
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Route declarations are commonly written in lowercase ("get", "post")
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::GET),
            "POST" => Ok(Method::POST),
            "PUT" => Ok(Method::PUT),
            "PATCH" => Ok(Method::PATCH),
            "DELETE" => Ok(Method::DELETE),
            "HEAD" => Ok(Method::HEAD),
            "OPTIONS" => Ok(Method::OPTIONS),
            _ => Err(Error::InvalidMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// The normalized set of methods a route responds to.
///
/// A single method, an array, a slice, a `Vec` or any iterator of methods
/// converts into a `Methods` set. Duplicates collapse and the order in which
/// methods were declared does not matter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Methods(BTreeSet<Method>);

impl Methods {
    /// The methods registered by "any" routes.
    pub const ANY: [Method; 5] = [Method::GET, Method::POST, Method::PUT, Method::PATCH, Method::DELETE];

    /// Create an empty method set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The method set used by routes that answer any verb.
    pub fn any() -> Self {
        Self::from(Self::ANY)
    }

    /// Check if the set contains the given method.
    pub fn contains(&self, method: Method) -> bool {
        self.0.contains(&method)
    }

    /// Add a method to the set. Returns false if it was already present.
    pub fn insert(&mut self, method: Method) -> bool {
        self.0.insert(method)
    }

    /// Iterate over the methods in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = Method> + '_ {
        self.0.iter().copied()
    }

    /// The number of methods in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the set holds no method.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Method> for Methods {
    fn from(method: Method) -> Self {
        Self(BTreeSet::from([method]))
    }
}

impl<const N: usize> From<[Method; N]> for Methods {
    fn from(methods: [Method; N]) -> Self {
        methods.into_iter().collect()
    }
}

impl From<&[Method]> for Methods {
    fn from(methods: &[Method]) -> Self {
        methods.iter().copied().collect()
    }
}

impl From<Vec<Method>> for Methods {
    fn from(methods: Vec<Method>) -> Self {
        methods.into_iter().collect()
    }
}

impl FromIterator<Method> for Methods {
    fn from_iter<I: IntoIterator<Item = Method>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parses a single token (`"GET"`) or a list separated by `|` or `,`
/// (`"GET|POST"`).
impl FromStr for Methods {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(['|', ','])
            .filter(|token| !token.trim().is_empty())
            .map(Method::from_str)
            .collect()
    }
}

impl fmt::Display for Methods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let methods = self.iter()
            .map(|m| m.to_string())
            .collect::<Vec<String>>()
            .join("|");
        f.write_str(&methods)
    }
}
