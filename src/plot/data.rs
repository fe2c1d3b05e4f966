//! Column data attached to a plot or a layer

use serde::Serialize;
use serde_json::{Map, Value};

/// Ordered column map: column name to a sequence of values
///
/// Columns keep insertion order; adding a column with an existing name
/// replaces it in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Data(Map<String, Value>);

impl Data {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column: `Data::new().column("x", [1, 2, 3])`
    pub fn column<I, V>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.0.insert(name.into(), Value::Array(values));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}
