//! Request parameter mapping.
//!
//! [`RequestParams`] is the "any shape of params" bag the API accepts,
//! modeled as a key-ordered map with permissive value typing (strings,
//! numbers, booleans, nested maps, sequences). Keys keep their insertion
//! order on the wire, which keeps request logs and test fixtures stable.

use serde::Serialize;
use serde_json::{Map, Value};

/// An ordered map of request parameters.
///
/// For GET and DELETE requests the parameters become the query string; for
/// POST requests they are serialized as the request body. The pipeline passes
/// them through untouched; parameter names and nesting are part of the wire
/// contract between the caller and the API.
///
/// # Example
///
/// ```rust
/// use stripe_api::RequestParams;
///
/// let params = RequestParams::new()
///     .with("limit", 3)
///     .with("email", "jenny.rosen@example.com");
///
/// assert_eq!(params.len(), 2);
/// assert_eq!(params.get("limit"), Some(&serde_json::json!(3)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RequestParams(Map<String, Value>);

impl RequestParams {
    /// Creates an empty parameter map.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Inserts a parameter, replacing any existing value under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Fluent variant of [`insert`](Self::insert) for building parameter maps.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the value for a key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Lowers the map to query string pairs in insertion order.
    ///
    /// Scalar values are rendered directly; nested maps and sequences are
    /// rendered as compact JSON so no parameter is silently dropped.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(key, value)| {
                let rendered = match value {
                    Value::String(s) => s.clone(),
                    Value::Null => String::new(),
                    other => other.to_string(),
                };
                (key.clone(), rendered)
            })
            .collect()
    }

    /// Returns the parameters as a JSON value for use as a request body.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl From<Map<String, Value>> for RequestParams {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for RequestParams {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
