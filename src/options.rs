//! Configuration documents
//!
//! An [`Options`] value is the single artifact every builder produces: an
//! ordered mapping from string keys to JSON values (scalars, nested documents
//! or sequences). Insertion order is preserved so serialized output is stable.
//!
//! Writing an existing key replaces its value. Nested documents are never
//! merged recursively; the newer value overwrites the older one.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::Add;

/// Ordered key-value configuration document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(Map<String, Value>);

impl Options {
    /// Create an empty document
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build a document from optional entries.
    ///
    /// Entries whose value is `None` are left out entirely, so an unset
    /// parameter never shows up as an explicit `null`. A value that only
    /// serializes to `null` (a NaN float) is left out as well.
    pub fn of<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<Value>)>,
        K: Into<String>,
    {
        let mut options = Self::new();
        for (key, value) in entries {
            match value {
                None | Some(Value::Null) => {}
                Some(value) => {
                    options.0.insert(key.into(), value);
                }
            }
        }
        options
    }

    /// Insert or overwrite a single entry
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Insert an entry only when a value is present
    pub fn insert_opt(&mut self, key: impl Into<String>, value: Option<impl Into<Value>>) {
        match value.map(Into::into) {
            None | Some(Value::Null) => {}
            Some(value) => self.insert(key, value),
        }
    }

    /// Builder-style variant of [`Options::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Merge `other` into this document; keys from `other` win.
    pub fn merge(mut self, other: Options) -> Self {
        self.extend(other);
        self
    }

    /// In-place variant of [`Options::merge`]
    pub fn extend(&mut self, other: Options) {
        for (key, value) in other.0 {
            self.0.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying JSON map
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Convert into a JSON object value
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Interpret a JSON value as a document; only objects qualify.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }
}

impl From<Options> for Value {
    fn from(options: Options) -> Self {
        options.into_value()
    }
}

impl From<Map<String, Value>> for Options {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl Add for Options {
    type Output = Options;

    fn add(self, rhs: Options) -> Options {
        self.merge(rhs)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Options {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut options = Self::new();
        for (key, value) in iter {
            options.insert(key, value);
        }
        options
    }
}

impl IntoIterator for Options {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl std::fmt::Display for Options {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(&self.0) {
            Ok(s) => write!(f, "{}", s),
            Err(_) => Err(std::fmt::Error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_of_omits_absent_values() {
        let options = Options::of([
            ("alpha", Some(json!(0.3))),
            ("size", None),
            ("color", Some(json!("red"))),
        ]);
        assert_eq!(options.len(), 2);
        assert!(!options.contains_key("size"));
        assert_eq!(options.into_value(), json!({"alpha": 0.3, "color": "red"}));
    }

    #[test]
    fn test_null_values_are_never_written() {
        let mut options = Options::of([("alpha", Some(Value::Null)), ("size", Some(json!(1)))]);
        options.insert_opt("width", Some(f64::NAN));
        assert_eq!(options.into_value(), json!({"size": 1}));
    }

    #[test]
    fn test_of_keeps_falsy_values() {
        let options = Options::of([
            ("size", Some(json!(0))),
            ("se", Some(json!(false))),
            ("label", Some(json!(""))),
        ]);
        assert_eq!(options.get("size"), Some(&json!(0)));
        assert_eq!(options.get("se"), Some(&json!(false)));
        assert_eq!(options.get("label"), Some(&json!("")));
    }

    #[test]
    fn test_merge_last_write_wins() {
        let first = Options::new().with("fill", "A").with("alpha", 0.5);
        let second = Options::new().with("fill", "B");
        let merged = first + second;
        assert_eq!(merged.get("fill"), Some(&json!("B")));
        assert_eq!(merged.get("alpha"), Some(&json!(0.5)));
    }

    #[test]
    fn test_merge_overwrites_nested_documents() {
        let first = Options::new().with("mapping", json!({"x": "a", "y": "b"}));
        let second = Options::new().with("mapping", json!({"x": "c"}));
        let merged = first.merge(second);
        assert_eq!(merged.get("mapping"), Some(&json!({"x": "c"})));
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let options = Options::new()
            .with("zeta", 1)
            .with("alpha", 2)
            .with("mid", 3);
        let keys: Vec<&str> = options.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(options.to_string(), r#"{"zeta":1,"alpha":2,"mid":3}"#);
    }

    #[test]
    fn test_from_value_requires_object() {
        assert!(Options::from_value(json!({"kind": "plot"})).is_some());
        assert!(Options::from_value(json!([1, 2])).is_none());
        assert!(Options::from_value(json!("plot")).is_none());
    }

    proptest! {
        #[test]
        fn prop_merge_takes_right_value(key in "[a-z]{1,8}", left in any::<i64>(), right in any::<i64>()) {
            let merged = Options::new().with(key.clone(), left).merge(Options::new().with(key.clone(), right));
            prop_assert_eq!(merged.get(&key), Some(&json!(right)));
            prop_assert_eq!(merged.len(), 1);
        }

        #[test]
        fn prop_of_is_deterministic(values in proptest::collection::vec(proptest::option::of(any::<i32>()), 0..12)) {
            let entries = || values.iter().enumerate().map(|(i, v)| (format!("k{}", i), v.map(|n| json!(n))));
            let first = Options::of(entries());
            let second = Options::of(entries());
            prop_assert_eq!(first.to_string(), second.to_string());
            prop_assert_eq!(first.len(), values.iter().filter(|v| v.is_some()).count());
        }
    }
}
