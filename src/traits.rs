//! Traits for configuration storage abstraction and collaborator boundaries

use crate::types::*;

/// Storage abstraction for import configuration files
///
/// This trait allows the catalog and reconciler to work with any backing
/// store (a directory on disk, in-memory fixtures, etc.) by implementing
/// these methods. Stores are read-only from the reconciler's point of view.
pub trait ConfigStore: Send + Sync {
    /// Full displayable path for a configuration file, if it exists in the store
    ///
    /// Returning `None` for a filename the catalog maps is the safety gate
    /// that keeps a stale catalog entry from producing a false positive.
    fn locate(&self, filename: &str) -> Option<String>;

    /// Read the raw content of a configuration file
    fn read(&self, filename: &str) -> ConfigResult<String>;
}

/// Contract for the bank type detector collaborator
///
/// Detection is implemented by the host application, not this crate.
/// Implementations inspect a CSV export's header columns and return one of
/// the catalog's known labels, or `None` for an unrecognized export.
pub trait BankTypeDetector: Send + Sync {
    /// Detect the bank label for a CSV export from its header columns
    fn detect(&self, csv_columns: &[String]) -> Option<String>;
}
