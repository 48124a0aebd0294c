//! Bank configuration catalog and the directory-backed configuration store

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::traits::ConfigStore;
use crate::types::*;

/// Mapping from a bank label to its recommended import configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankConfigEntry {
    /// Short label identifying the bank's CSV export format
    pub bank_label: String,
    /// Configuration file shipped for that bank
    pub config_filename: String,
}

impl BankConfigEntry {
    /// Create a new catalog entry
    pub fn new(bank_label: impl Into<String>, config_filename: impl Into<String>) -> Self {
        Self {
            bank_label: bank_label.into(),
            config_filename: config_filename.into(),
        }
    }
}

/// Fixed, insertion-ordered table of bank-to-configuration-file mappings
///
/// The table is defined at construction and never mutated; a given bank
/// label maps to at most one entry. Extending it for a new bank means adding
/// an entry plus shipping the corresponding configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigCatalog {
    entries: Vec<BankConfigEntry>,
}

impl ConfigCatalog {
    /// Catalog of the bank formats this crate ships configurations for
    pub fn builtin() -> Self {
        Self::new(vec![
            BankConfigEntry::new("Revolut", "Revolut_Personal_import_config_v4.json"),
            BankConfigEntry::new("Revolut Credit Card", "Revolut_CC_import_config_v3.json"),
            BankConfigEntry::new("T212", "T212_All_import_config_v6.json"),
            BankConfigEntry::new("AIB", "AIB_import_config_v2.json"),
        ])
    }

    /// Create a catalog from caller-supplied entries
    pub fn new(entries: Vec<BankConfigEntry>) -> Self {
        Self { entries }
    }

    /// Configuration filename mapped to a bank label, if any
    pub fn config_filename(&self, bank_label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.bank_label == bank_label)
            .map(|entry| entry.config_filename.as_str())
    }

    /// Known bank labels, in catalog order
    pub fn labels(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| entry.bank_label.as_str())
            .collect()
    }

    /// All catalog entries
    pub fn entries(&self) -> &[BankConfigEntry] {
        &self.entries
    }
}

impl Default for ConfigCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Configuration store backed by a directory of JSON files
///
/// Read-only file access; no mutation, no caching.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    config_dir: PathBuf,
}

impl DirectoryStore {
    /// Create a store that resolves filenames against `config_dir`
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }
}

impl ConfigStore for DirectoryStore {
    fn locate(&self, filename: &str) -> Option<String> {
        let path = self.config_dir.join(filename);
        if path.exists() {
            Some(path.display().to_string())
        } else {
            None
        }
    }

    fn read(&self, filename: &str) -> ConfigResult<String> {
        let path = self.config_dir.join(filename);
        std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Read(format!("{}: {}", path.display(), e)))
    }
}
