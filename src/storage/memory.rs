use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::CartStorage;
use crate::error::StorageError;

#[derive(Debug, Default)]
struct MemoryStorageState {
    values: HashMap<String, String>,
    fail_on_save: bool,
    saves: usize,
}

/// Process-local slot. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    state: Arc<RwLock<MemoryStorageState>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every save fail until reset.
    pub fn set_fail_on_save(&self, fail: bool) {
        self.write().fail_on_save = fail;
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.read().saves
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, MemoryStorageState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, MemoryStorageState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read().values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut state = self.write();
        if state.fail_on_save {
            return Err(StorageError::Backend("save disabled".to_string()));
        }
        state.values.insert(key.to_string(), value.to_string());
        state.saves += 1;
        Ok(())
    }
}
