//! Core types and data structures for import configuration validation

use serde::{Deserialize, Serialize};

/// Parsed content of an import configuration file
///
/// Configuration files are JSON documents shipped one per bank, in the
/// Firefly III data-importer format. Only the `roles` field matters for
/// structural validation; every other field is ignored. A document without
/// a `roles` field parses to an empty role list rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportConfiguration {
    /// Semantic role expected at each column position ("date", "amount",
    /// "description", or an empty/ignore marker)
    #[serde(default)]
    pub roles: Vec<String>,
}

impl ImportConfiguration {
    /// Number of columns the configuration expects
    pub fn expected_column_count(&self) -> usize {
        self.roles.len()
    }
}

/// A catalog entry resolved to an existing configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedConfig {
    /// Name of the import configuration file
    pub config_file: String,
    /// Full path to the configuration file
    pub config_path: String,
}

/// Structural comparison of a CSV column list against a resolved configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureCheck {
    /// Name of the import configuration file
    pub config_file: String,
    /// Full path to the configuration file
    pub config_path: String,
    /// Number of columns the configuration expects
    pub expected_columns: usize,
    /// Number of columns in the CSV
    pub actual_columns: usize,
    /// Role mapping from the configuration, for reference
    pub column_roles: Vec<String>,
    /// True if the column counts match
    pub is_match: bool,
    /// CSV columns beyond the expected count, in original order
    pub extra_columns: Vec<String>,
    /// Shortfall when the CSV has fewer columns than expected
    pub missing_count: usize,
    /// The original CSV columns, echoed for traceability
    pub csv_columns: Vec<String>,
}

/// Validation outcome when no configuration exists for a bank label
///
/// Covers both an unknown label and a catalog entry whose mapped file is
/// absent from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnresolvedConfiguration {
    /// The bank label the caller asked about
    pub bank_label: String,
    /// Number of columns in the CSV
    pub actual_columns: usize,
    /// Human-readable description of the missing mapping
    pub message: String,
}

/// Outcome of validating a CSV column list against a bank's import configuration
///
/// An unresolved bank label is an ordinary, expected outcome (unrecognized
/// bank), not an error; callers surface it and let the user pick a different
/// bank type or proceed without validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationReport {
    /// No configuration could be resolved for the bank label
    Unresolved(UnresolvedConfiguration),
    /// Configuration found and compared against the CSV columns
    Checked(StructureCheck),
}

impl ValidationReport {
    /// True if a configuration was found and the column counts match
    pub fn is_match(&self) -> bool {
        match self {
            ValidationReport::Checked(check) => check.is_match,
            ValidationReport::Unresolved(_) => false,
        }
    }

    /// Number of columns in the validated CSV
    pub fn actual_columns(&self) -> usize {
        match self {
            ValidationReport::Checked(check) => check.actual_columns,
            ValidationReport::Unresolved(unresolved) => unresolved.actual_columns,
        }
    }
}

/// Column list repaired to the expected count, with a summary of the changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedColumns {
    /// The repaired column list
    pub columns: Vec<String>,
    /// Human-readable description of what was removed or added
    pub summary: String,
}

/// Errors that can occur while loading import configurations
///
/// Data-shape mismatches are never errors; these cover infrastructure
/// failures only.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config read error: {0}")]
    Read(String),
    #[error("Config parse error: {0}")]
    Parse(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
