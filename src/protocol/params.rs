//! Read-only view over command parameters.
//!
//! The transport decodes a request body into a [`ParameterMap`]; handlers
//! only read from it and report malformed input as
//! [`Error::InvalidArgument`].

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

// ============================================================================
// ParameterMap
// ============================================================================

/// Command parameters keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterMap(Map<String, Value>);

impl ParameterMap {
    /// Creates an empty parameter map.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw value for `key`.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if `key` is present.
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of parameters.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no parameters.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the value for `key`, failing if it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] naming the missing key.
    pub fn require(&self, key: &str) -> Result<&Value> {
        self.get(key)
            .ok_or_else(|| Error::invalid_argument(format!("Missing parameter: {key}")))
    }

    /// Joins a required array of single-character strings into one string.
    ///
    /// This is the key sequence shape of keystroke commands:
    /// `["h", "i"]` becomes `"hi"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the key is absent, the value is
    /// not an array, or any element is not a one-character string.
    pub fn character_sequence(&self, key: &str) -> Result<String> {
        let shape_error = || Error::invalid_argument(format!("{key} must be a character array"));

        let items = self.require(key)?.as_array().ok_or_else(shape_error)?;

        let mut text = String::with_capacity(items.len());
        for item in items {
            let mut chars = item.as_str().ok_or_else(shape_error)?.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => text.push(ch),
                _ => return Err(shape_error()),
            }
        }
        Ok(text)
    }
}

impl From<Map<String, Value>> for ParameterMap {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for ParameterMap {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::new()),
            _ => Err(Error::invalid_argument("parameters must be an object")),
        }
    }
}

impl FromIterator<(String, Value)> for ParameterMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ============================================================================
// Tests
// ============================================================================
