//! Open parameter map passed from caller to rule to entry hook.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised by the typed `require_*` accessors on [`Params`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParamError {
    #[error("Missing parameter '{key}'")]
    Missing { key: String },

    #[error("Parameter '{key}' is not a {expected}")]
    WrongType { key: String, expected: &'static str },
}

/// String-keyed map of arbitrary JSON values.
///
/// The machine never inspects or modifies params; each transition defines
/// the keys it expects.
///
/// # Example
///
/// ```rust
/// use waypoint::core::Params;
///
/// let params = Params::new()
///     .with("email", "user@examplemail.com")
///     .with("amount", 15.0);
///
/// assert_eq!(params.str("email"), Some("user@examplemail.com"));
/// assert_eq!(params.require_f64("amount").unwrap(), 15.0);
/// assert!(params.require_str("reason").is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params {
    values: Map<String, Value>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, returning the updated map.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    pub fn require_str(&self, key: &str) -> Result<&str, ParamError> {
        let value = self.require(key)?;
        value.as_str().ok_or_else(|| ParamError::WrongType {
            key: key.to_string(),
            expected: "string",
        })
    }

    pub fn require_f64(&self, key: &str) -> Result<f64, ParamError> {
        let value = self.require(key)?;
        value.as_f64().ok_or_else(|| ParamError::WrongType {
            key: key.to_string(),
            expected: "number",
        })
    }

    pub fn require_bool(&self, key: &str) -> Result<bool, ParamError> {
        let value = self.require(key)?;
        value.as_bool().ok_or_else(|| ParamError::WrongType {
            key: key.to_string(),
            expected: "boolean",
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    fn require(&self, key: &str) -> Result<&Value, ParamError> {
        self.values.get(key).ok_or_else(|| ParamError::Missing {
            key: key.to_string(),
        })
    }
}

impl From<Map<String, Value>> for Params {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
