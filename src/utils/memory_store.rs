//! In-memory configuration store for testing

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::traits::ConfigStore;
use crate::types::*;

/// In-memory configuration store for testing and development
///
/// The "path" of an in-memory file is just its filename; there is no
/// directory prefix to report.
#[derive(Debug, Clone)]
pub struct MemoryConfigStore {
    files: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryConfigStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            files: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Add or replace a configuration file
    pub fn insert(&self, filename: impl Into<String>, content: impl Into<String>) {
        self.files
            .write()
            .unwrap()
            .insert(filename.into(), content.into());
    }

    /// Clear all files (useful for testing)
    pub fn clear(&self) {
        self.files.write().unwrap().clear();
    }
}

impl Default for MemoryConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn locate(&self, filename: &str) -> Option<String> {
        self.files
            .read()
            .unwrap()
            .contains_key(filename)
            .then(|| filename.to_string())
    }

    fn read(&self, filename: &str) -> ConfigResult<String> {
        self.files
            .read()
            .unwrap()
            .get(filename)
            .cloned()
            .ok_or_else(|| ConfigError::Read(format!("{}: not present in memory store", filename)))
    }
}
