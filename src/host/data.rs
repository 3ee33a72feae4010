use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Named numeric attribute storage owned by a host entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataManager {
    values: BTreeMap<String, f64>,
}

impl DataManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Store `value` under `key`, returning the previous value.
    pub fn set(&mut self, key: &str, value: f64) -> Option<f64> {
        self.values.insert(key.to_string(), value)
    }

    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<f64> {
        self.values.remove(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
