use std::collections::HashMap;
use std::sync::RwLock;

use super::KeyValueStore;
use crate::Result;

/// A simple in-memory backend implementation using a `HashMap` for storage.
///
/// This backend is suitable for testing or ephemeral use. Nothing survives
/// the process; use [`FileStore`](super::FileStore) for durable slots.
#[derive(Debug, Default)]
pub struct InMemory {
    slots: RwLock<HashMap<String, String>>,
}

impl InMemory {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemory {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.read().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.slots
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.slots.write().unwrap().remove(key);
        Ok(())
    }
}
