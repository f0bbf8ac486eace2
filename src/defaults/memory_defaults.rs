use crate::defaults::Defaults;
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryDefaults {
    values: RwLock<HashMap<String, f64>>,
}

impl MemoryDefaults {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Defaults for MemoryDefaults {
    fn double(&self, key: &str) -> f64 {
        let values = self.values.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        values.get(key).copied().unwrap_or_default()
    }

    fn set_double(&self, key: &str, value: f64) {
        let mut values = self.values.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        values.insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        let mut values = self.values.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        values.remove(key);
    }
}
