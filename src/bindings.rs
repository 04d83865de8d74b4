//! Binding sets: the name-to-value mappings substituted into templates
//!
//! Binding sets are usually built in code, but can also be loaded from a TOML
//! binding file:
//!
//! ```toml
//! [metadata]
//! name = "greeting"
//!
//! [bindings]
//! first = 1
//! second = "two"
//! third = true
//! ```

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading binding files
#[derive(Error, Debug)]
pub enum BindingsError {
    #[error("Failed to read binding file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse binding TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Binding names must not be empty")]
    EmptyName,
}

/// A value that can be bound to a placeholder
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Boolean(bool),
    Integer(i64),
    String(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Integer(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

/// Mapping from placeholder name to value
///
/// Names are unique; inserting an existing name replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingSet {
    values: HashMap<String, Value>,
}

impl BindingSet {
    /// Create an empty binding set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a binding, builder style
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add or replace a binding, returning the previous value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Bound names, in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|k| k.as_str())
    }

    /// Load the `[bindings]` table of a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, BindingsError> {
        BindingFile::from_toml_str(content).map(|f| f.bindings)
    }

    /// Load the `[bindings]` table of a TOML file
    pub fn from_file(path: &Path) -> Result<Self, BindingsError> {
        BindingFile::from_file(path).map(|f| f.bindings)
    }
}

impl<K, V> FromIterator<(K, V)> for BindingSet
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut set = BindingSet::new();
        set.extend(iter);
        set
    }
}

impl<K, V> Extend<(K, V)> for BindingSet
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

/// A binding set loaded from TOML, with its optional metadata
#[derive(Debug, Clone)]
pub struct BindingFile {
    pub name: Option<String>,
    pub description: Option<String>,
    pub bindings: BindingSet,
}

/// TOML structure for deserializing binding files
#[derive(Deserialize)]
struct TomlBindingFile {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    bindings: HashMap<String, Value>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

impl BindingFile {
    /// Load a binding file from disk
    pub fn from_file(path: &Path) -> Result<Self, BindingsError> {
        let content = std::fs::read_to_string(path)?;
        let file = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            bindings = file.bindings.len(),
            "loaded binding file"
        );
        Ok(file)
    }

    /// Parse a binding file from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, BindingsError> {
        let parsed: TomlBindingFile = toml::from_str(content)?;

        if parsed.bindings.keys().any(|k| k.is_empty()) {
            return Err(BindingsError::EmptyName);
        }

        Ok(BindingFile {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            bindings: BindingSet {
                values: parsed.bindings,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display() {
        assert_eq!(Value::from(22).to_string(), "22");
        assert_eq!(Value::from(-7i64).to_string(), "-7");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from(false).to_string(), "false");
        assert_eq!(Value::from("here's a thing").to_string(), "here's a thing");
    }

    #[test]
    fn test_builder_and_lookup() {
        let set = BindingSet::new().with("a", 1).with("b", "two").with("c", true);
        assert_eq!(set.len(), 3);
        assert_eq!(set.get("a"), Some(&Value::Integer(1)));
        assert_eq!(set.get("b"), Some(&Value::String("two".to_string())));
        assert!(set.contains("c"));
        assert!(!set.contains("d"));
    }

    #[test]
    fn test_insert_replaces() {
        let mut set = BindingSet::new();
        assert_eq!(set.insert("x", 1), None);
        assert_eq!(set.insert("x", 2), Some(Value::Integer(1)));
        assert_eq!(set.get("x"), Some(&Value::Integer(2)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_from_iterator() {
        let set: BindingSet = [("first", 1), ("second", 2)].into_iter().collect();
        let mut names: Vec<_> = set.names().collect();
        names.sort();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_parse_toml_with_metadata() {
        let toml_str = r#"
[metadata]
name = "formatter"
description = "Exercise bindings"

[bindings]
first = 1
second = "two"
third = true
"#;
        let file = BindingFile::from_toml_str(toml_str).expect("Should parse");
        assert_eq!(file.name, Some("formatter".to_string()));
        assert_eq!(file.description, Some("Exercise bindings".to_string()));
        assert_eq!(file.bindings.get("first"), Some(&Value::Integer(1)));
        assert_eq!(file.bindings.get("second"), Some(&Value::from("two")));
        assert_eq!(file.bindings.get("third"), Some(&Value::Boolean(true)));
    }

    #[test]
    fn test_parse_toml_without_bindings_table() {
        let set = BindingSet::from_toml_str("").expect("Should parse");
        assert!(set.is_empty());
    }

    #[test]
    fn test_unsupported_value_type() {
        let result = BindingSet::from_toml_str("[bindings]\nratio = 1.5\n");
        assert!(matches!(result, Err(BindingsError::Toml(_))));
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = BindingSet::from_toml_str("[bindings]\n\"\" = 1\n");
        assert!(matches!(result, Err(BindingsError::EmptyName)));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = BindingSet::from_toml_str("this is not valid toml {{{{");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = BindingSet::from_file(Path::new("/nonexistent/bindings.toml"));
        assert!(matches!(result, Err(BindingsError::Io(_))));
    }
}
