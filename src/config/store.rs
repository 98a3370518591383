//! Hierarchical key-value store interface consumed by the settings codec.
//!
//! Paths use `/` to separate nesting levels, e.g. `tools/pen/color`.

use std::collections::BTreeMap;

/// A typed, hierarchical key-value store.
///
/// Getters return `None` both for missing keys and for values stored with a
/// different type.
pub trait SettingsStore {
    fn get_string(&self, path: &str) -> Option<String>;
    fn get_int(&self, path: &str) -> Option<i64>;
    fn get_bool(&self, path: &str) -> Option<bool>;

    fn set_string(&mut self, path: &str, value: &str);
    fn set_int(&mut self, path: &str, value: i64);
    fn set_bool(&mut self, path: &str, value: bool);

    /// Removes `path` and everything nested under it. Missing paths are
    /// ignored.
    fn remove(&mut self, path: &str);
}

/// A primitive setting value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(String),
    Int(i64),
    Bool(bool),
}

/// Flat in-memory store keyed by full path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: BTreeMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates stored paths in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl SettingsStore for MemoryStore {
    fn get_string(&self, path: &str) -> Option<String> {
        match self.values.get(path) {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        }
    }

    fn get_int(&self, path: &str) -> Option<i64> {
        match self.values.get(path) {
            Some(Value::Int(v)) => Some(*v),
            _ => None,
        }
    }

    fn get_bool(&self, path: &str) -> Option<bool> {
        match self.values.get(path) {
            Some(Value::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    fn set_string(&mut self, path: &str, value: &str) {
        self.values
            .insert(path.to_string(), Value::String(value.to_string()));
    }

    fn set_int(&mut self, path: &str, value: i64) {
        self.values.insert(path.to_string(), Value::Int(value));
    }

    fn set_bool(&mut self, path: &str, value: bool) {
        self.values.insert(path.to_string(), Value::Bool(value));
    }

    fn remove(&mut self, path: &str) {
        let prefix = format!("{path}/");
        self.values
            .retain(|key, _| key != path && !key.starts_with(&prefix));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_getters_ignore_other_types() {
        let mut store = MemoryStore::new();
        store.set_int("tools/pen/color", 0x3333CC);
        assert_eq!(store.get_int("tools/pen/color"), Some(0x3333CC));
        assert_eq!(store.get_string("tools/pen/color"), None);
        assert_eq!(store.get_bool("tools/pen/missing"), None);
    }

    #[test]
    fn remove_clears_subtree_only() {
        let mut store = MemoryStore::new();
        store.set_string("tools/current", "pen");
        store.set_int("tools/pen/color", 1);
        store.set_bool("toolsExtra/flag", true);

        store.remove("tools");

        assert_eq!(store.paths().collect::<Vec<_>>(), vec!["toolsExtra/flag"]);
        store.remove("tools");
        assert_eq!(store.len(), 1);
    }
}
