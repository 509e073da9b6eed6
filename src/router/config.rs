//! Router configuration.

use serde::Deserialize;

use crate::router::error::Error;

/// Router configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Whether HEAD requests are answered by GET routes.
    pub implicit_head: bool,
    /// Whether string parameters are percent-decoded before the action runs.
    pub decode_parameters: bool,
}

impl RouterConfig {
    /// Load a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            implicit_head: true,
            decode_parameters: true,
        }
    }
}
