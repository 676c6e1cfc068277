//! Per-call request options.

use crate::errors::GitHubResult;
use serde_json::Value;
use std::collections::BTreeMap;

/// Keys consumed by the pipeline before the wire request is built. They
/// never become query parameters or body fields.
pub const RESERVED_KEYS: &[&str] = &[
    "endpoint",
    "accept",
    "access_token",
    "oauth_token",
    "force_urlencoded",
    "authenticate",
    "raw",
    "proxy",
];

/// An open key/value map of per-call options.
///
/// Merged from call-specific arguments, caller-supplied extras, and values
/// injected by the connection builder. After the reserved keys are consumed,
/// whatever remains becomes the query string (GET) or the JSON body (write
/// verbs).
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    entries: BTreeMap<String, Value>,
}

impl RequestOptions {
    /// Creates an empty options map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a value, replacing any existing one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Inserts a value only if the key is absent. Used for layering defaults
    /// and injected values under caller-supplied ones, so caller values win
    /// on conflict.
    pub fn insert_if_absent(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.entry(key.into()).or_insert_with(|| value.into());
    }

    /// Looks up a value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Removes and returns a value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Removes a string-valued option. Empty strings count as absent, like
    /// the credential fields they typically carry.
    pub fn remove_string(&mut self, key: &str) -> Option<String> {
        match self.entries.remove(key) {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// Removes a boolean-valued option, falling back to a default.
    pub fn remove_bool(&mut self, key: &str, default: bool) -> bool {
        match self.entries.remove(key) {
            Some(Value::Bool(b)) => b,
            _ => default,
        }
    }

    /// True when no options remain.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of options present.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Serializes the remaining options as a URL query string.
    ///
    /// Scalar values serialize naturally; structured values fall back to
    /// their compact JSON text.
    pub fn to_query_string(&self) -> GitHubResult<String> {
        let pairs: Vec<(&str, String)> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), scalar_text(v)))
            .collect();

        serde_urlencoded::to_string(pairs)
            .map_err(|e| crate::errors::GitHubError::Configuration(e.to_string()))
    }

    /// Serializes the remaining options as a JSON object body.
    pub fn to_json_body(&self) -> GitHubResult<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for RequestOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        for (k, v) in iter {
            options.insert(k, v);
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layered_inserts_keep_caller_values() {
        let mut options = RequestOptions::new().set("state", "closed");
        options.insert_if_absent("state", "open");
        options.insert_if_absent("per_page", 30);

        assert_eq!(options.get("state"), Some(&Value::from("closed")));
        assert_eq!(options.get("per_page"), Some(&Value::from(30)));
    }

    #[test]
    fn query_string_is_sorted_and_encoded() {
        let options = RequestOptions::new()
            .set("state", "open")
            .set("q", "a b")
            .set("page", 2);

        assert_eq!(options.to_query_string().unwrap(), "page=2&q=a+b&state=open");
    }

    #[test]
    fn json_body_round_trips() {
        let options = RequestOptions::new()
            .set("title", "bug")
            .set("labels", serde_json::json!(["a", "b"]));

        let body: Value = serde_json::from_str(&options.to_json_body().unwrap()).unwrap();
        assert_eq!(body["title"], "bug");
        assert_eq!(body["labels"][1], "b");
    }

    #[test]
    fn remove_string_ignores_empty_and_non_strings() {
        let mut options = RequestOptions::new()
            .set("access_token", "")
            .set("page", 1);

        assert_eq!(options.remove_string("access_token"), None);
        assert_eq!(options.remove_string("page"), None);
        assert_eq!(options.remove_string("missing"), None);
    }

    #[test]
    fn remove_bool_defaults() {
        let mut options = RequestOptions::new().set("authenticate", false);
        assert!(!options.remove_bool("authenticate", true));
        assert!(options.remove_bool("authenticate", true));
        assert!(!options.remove_bool("force_urlencoded", false));
    }
}
