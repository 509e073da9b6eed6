//! Content returned by route actions.

use serde::Serialize;
use serde_json::Value;

use crate::route::error::Error;

/// What a route action produced: a rendered body, a structured value or raw
/// bytes. The route hands it back unchanged; turning it into a response is
/// up to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Text(String),
    Json(Value),
    Bytes(Vec<u8>),
}

impl Content {
    /// Serialize a value into JSON content.
    pub fn json<T: Serialize>(value: &T) -> Result<Self, Error> {
        Ok(Content::Json(serde_json::to_value(value)?))
    }

    /// The media type matching the content.
    pub fn content_type(&self) -> &'static str {
        match self {
            Content::Text(_) => "text/html; charset=utf-8",
            Content::Json(_) => "application/json",
            Content::Bytes(_) => "application/octet-stream",
        }
    }

    /// The text body, if the action rendered text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Convert the content to its body bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Content::Text(text) => text.into_bytes(),
            Content::Json(value) => value.to_string().into_bytes(),
            Content::Bytes(bytes) => bytes,
        }
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<Value> for Content {
    fn from(value: Value) -> Self {
        Content::Json(value)
    }
}

impl From<Vec<u8>> for Content {
    fn from(bytes: Vec<u8>) -> Self {
        Content::Bytes(bytes)
    }
}
