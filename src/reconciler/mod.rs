//! Structural reconciler that validates and normalizes CSV column lists

use std::path::PathBuf;

use crate::catalog::{ConfigCatalog, DirectoryStore};
use crate::traits::ConfigStore;
use crate::types::*;

/// Prefix for synthetic column names appended when a CSV is short of columns
const PLACEHOLDER_PREFIX: &str = "_placeholder_";

/// Reconciles CSV column lists against bank import configurations
///
/// Column position, not column name, carries the semantic meaning: bank CSV
/// exports are assumed to have a fixed, position-stable schema per bank, so
/// the reconciler never attempts name-based matching against the role list.
pub struct StructuralReconciler<S: ConfigStore> {
    catalog: ConfigCatalog,
    store: S,
}

impl StructuralReconciler<DirectoryStore> {
    /// Create a reconciler over a directory of configuration files
    pub fn from_config_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self::new(DirectoryStore::new(config_dir))
    }
}

impl<S: ConfigStore> StructuralReconciler<S> {
    /// Create a reconciler with the builtin catalog and the given store
    pub fn new(store: S) -> Self {
        Self {
            catalog: ConfigCatalog::builtin(),
            store,
        }
    }

    /// Create a reconciler with a caller-supplied catalog
    pub fn with_catalog(catalog: ConfigCatalog, store: S) -> Self {
        Self { catalog, store }
    }

    /// The catalog backing this reconciler
    pub fn catalog(&self) -> &ConfigCatalog {
        &self.catalog
    }

    /// Resolve the configuration file for a bank label
    ///
    /// Returns `None` if the label is unknown to the catalog or the mapped
    /// file does not exist in the store. The existence check keeps a stale
    /// catalog entry from producing a false positive.
    pub fn resolve_config(&self, bank_label: &str) -> Option<ResolvedConfig> {
        let config_file = self.catalog.config_filename(bank_label)?;
        let config_path = self.store.locate(config_file)?;
        Some(ResolvedConfig {
            config_file: config_file.to_string(),
            config_path,
        })
    }

    /// Load and parse a configuration file from the store
    pub fn load_configuration(&self, filename: &str) -> ConfigResult<ImportConfiguration> {
        let content = self.store.read(filename)?;
        serde_json::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", filename, e)))
    }

    /// Validate a CSV column list against the configuration for a bank label
    ///
    /// An unrecognized bank label (or a mapped file missing from the store)
    /// yields [`ValidationReport::Unresolved`], not an error. `Err` is
    /// reserved for unreadable or corrupt configuration files.
    pub fn validate(
        &self,
        csv_columns: &[String],
        bank_label: &str,
    ) -> ConfigResult<ValidationReport> {
        let Some(resolved) = self.resolve_config(bank_label) else {
            return Ok(ValidationReport::Unresolved(UnresolvedConfiguration {
                bank_label: bank_label.to_string(),
                actual_columns: csv_columns.len(),
                message: format!("No import config found for {}", bank_label),
            }));
        };

        let config = self.load_configuration(&resolved.config_file)?;
        let expected_columns = config.expected_column_count();
        let actual_columns = csv_columns.len();
        let is_match = expected_columns == actual_columns;

        // Count mismatch is strictly one-directional
        let mut extra_columns = Vec::new();
        let mut missing_count = 0;
        if actual_columns > expected_columns {
            extra_columns = csv_columns[expected_columns..].to_vec();
        } else if actual_columns < expected_columns {
            missing_count = expected_columns - actual_columns;
        }

        Ok(ValidationReport::Checked(StructureCheck {
            config_file: resolved.config_file,
            config_path: resolved.config_path,
            expected_columns,
            actual_columns,
            column_roles: config.roles,
            is_match,
            extra_columns,
            missing_count,
            csv_columns: csv_columns.to_vec(),
        }))
    }

    /// Repair a CSV column list to the length the configuration expects
    ///
    /// Extra columns are dropped from the end and missing columns are filled
    /// with `_placeholder_<i>` names appended at the end. Position-based
    /// reconciliation cannot tell which column drifted, so a column inserted
    /// or removed mid-export is repaired at the tail regardless.
    ///
    /// When no configuration resolves for the bank label, the input is
    /// returned unchanged with the unresolved message as the summary.
    pub fn normalize(
        &self,
        csv_columns: &[String],
        bank_label: &str,
    ) -> ConfigResult<NormalizedColumns> {
        let check = match self.validate(csv_columns, bank_label)? {
            ValidationReport::Unresolved(unresolved) => {
                // Never silently repair columns the caller cannot act on
                return Ok(NormalizedColumns {
                    columns: csv_columns.to_vec(),
                    summary: unresolved.message,
                });
            }
            ValidationReport::Checked(check) => check,
        };

        if check.is_match {
            return Ok(NormalizedColumns {
                columns: csv_columns.to_vec(),
                summary: "No normalization needed - columns match exactly".to_string(),
            });
        }

        let mut normalized: Vec<String> = csv_columns
            .iter()
            .take(check.expected_columns)
            .cloned()
            .collect();

        let mut summary_parts = Vec::new();

        if !check.extra_columns.is_empty() {
            summary_parts.push(format!(
                "Removed {} extra column(s): {}",
                check.extra_columns.len(),
                check.extra_columns.join(", ")
            ));
        }

        if check.missing_count > 0 {
            for i in 1..=check.missing_count {
                normalized.push(format!("{}{}", PLACEHOLDER_PREFIX, i));
            }
            summary_parts.push(format!(
                "Added {} placeholder column(s)",
                check.missing_count
            ));
        }

        Ok(NormalizedColumns {
            columns: normalized,
            summary: summary_parts.join(" | "),
        })
    }
}
