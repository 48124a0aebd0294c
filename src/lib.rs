//! # Import Config Core
//!
//! Structural validation and normalization of bank CSV exports against
//! Firefly III data-importer configuration files.
//!
//! ## Features
//!
//! - **Configuration catalog**: fixed bank-to-configuration mapping with
//!   existence-gated path resolution
//! - **Structural validation**: column count/position checks producing a
//!   complete mismatch report
//! - **Column normalization**: deterministic repair of a column list by
//!   truncation or placeholder padding
//! - **Storage abstraction**: trait-based configuration store with directory
//!   and in-memory backends
//!
//! ## Quick Start
//!
//! ```rust
//! use import_config_core::{MemoryConfigStore, StructuralReconciler};
//!
//! let store = MemoryConfigStore::new();
//! store.insert(
//!     "Revolut_Personal_import_config_v4.json",
//!     r#"{"roles": ["date", "amount", "description"]}"#,
//! );
//! let reconciler = StructuralReconciler::new(store);
//!
//! let columns = vec![
//!     "Date".to_string(),
//!     "Amount".to_string(),
//!     "Description".to_string(),
//! ];
//! let report = reconciler.validate(&columns, "Revolut").unwrap();
//! assert!(report.is_match());
//! ```

pub mod catalog;
pub mod reconciler;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use catalog::*;
pub use reconciler::*;
pub use traits::*;
pub use types::*;
pub use utils::*;
