//! Integration tests for import-config-core

use import_config_core::{
    utils::MemoryConfigStore, BankConfigEntry, BankTypeDetector, ConfigCatalog, ConfigError,
    ConfigStore, StructuralReconciler, ValidationReport,
};

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn revolut_config(roles: &[&str]) -> String {
    let quoted: Vec<String> = roles.iter().map(|r| format!("\"{}\"", r)).collect();
    format!(r#"{{"version": 4, "roles": [{}]}}"#, quoted.join(", "))
}

#[test]
fn test_complete_validation_workflow() {
    let store = MemoryConfigStore::new();
    store.insert(
        "Revolut_Personal_import_config_v4.json",
        revolut_config(&["date", "amount", "description"]),
    );
    let reconciler = StructuralReconciler::new(store);

    // A statement export with a trailing balance column the importer
    // does not want
    let header = columns(&["Date", "Amount", "Description", "Balance"]);

    let report = reconciler.validate(&header, "Revolut").unwrap();
    assert!(!report.is_match());
    assert_eq!(report.actual_columns(), 4);

    let ValidationReport::Checked(check) = report else {
        panic!("expected a checked report");
    };
    assert_eq!(check.expected_columns, 3);
    assert_eq!(check.extra_columns, columns(&["Balance"]));
    assert_eq!(check.missing_count, 0);
    assert_eq!(check.csv_columns, header);

    let normalized = reconciler.normalize(&header, "Revolut").unwrap();
    assert_eq!(
        normalized.columns,
        columns(&["Date", "Amount", "Description"])
    );
    assert_eq!(normalized.summary, "Removed 1 extra column(s): Balance");

    // The repaired header now validates cleanly
    let repaired = reconciler.validate(&normalized.columns, "Revolut").unwrap();
    assert!(repaired.is_match());
}

#[test]
fn test_short_export_is_padded_with_placeholders() {
    let store = MemoryConfigStore::new();
    store.insert(
        "Revolut_Personal_import_config_v4.json",
        revolut_config(&["date", "amount", "description"]),
    );
    let reconciler = StructuralReconciler::new(store);

    let header = columns(&["Date", "Amount"]);

    let report = reconciler.validate(&header, "Revolut").unwrap();
    let ValidationReport::Checked(check) = report else {
        panic!("expected a checked report");
    };
    assert_eq!(check.missing_count, 1);
    assert!(check.extra_columns.is_empty());

    let normalized = reconciler.normalize(&header, "Revolut").unwrap();
    assert_eq!(
        normalized.columns,
        columns(&["Date", "Amount", "_placeholder_1"])
    );
    assert_eq!(normalized.summary, "Added 1 placeholder column(s)");
}

#[test]
fn test_unknown_bank_reports_without_failing() {
    let reconciler = StructuralReconciler::new(MemoryConfigStore::new());

    let header = columns(&["Date", "Amount", "Description"]);
    let report = reconciler.validate(&header, "NotARealBank").unwrap();

    assert!(!report.is_match());
    assert_eq!(report.actual_columns(), 3);
    let ValidationReport::Unresolved(unresolved) = report else {
        panic!("expected an unresolved report");
    };
    assert!(!unresolved.message.is_empty());

    // Normalization is a no-op for an unresolved bank
    let normalized = reconciler.normalize(&header, "NotARealBank").unwrap();
    assert_eq!(normalized.columns, header);
    assert_eq!(normalized.summary, unresolved.message);
}

#[test]
fn test_directory_store_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("AIB_import_config_v2.json"),
        revolut_config(&["date", "description", "amount", "balance"]),
    )
    .unwrap();

    let reconciler = StructuralReconciler::from_config_dir(dir.path());

    let report = reconciler
        .validate(
            &columns(&["Posted Transactions Date", "Description", "Debit Amount"]),
            "AIB",
        )
        .unwrap();
    let ValidationReport::Checked(check) = report else {
        panic!("expected a checked report");
    };
    assert_eq!(check.expected_columns, 4);
    assert_eq!(check.missing_count, 1);
    assert_eq!(check.config_file, "AIB_import_config_v2.json");
    assert!(check.config_path.ends_with("AIB_import_config_v2.json"));

    // Other catalog entries have no file in this directory and stay
    // unresolved rather than matching a stale mapping
    let stale = reconciler.validate(&columns(&["A", "B"]), "T212").unwrap();
    assert!(matches!(stale, ValidationReport::Unresolved(_)));
}

#[test]
fn test_corrupt_config_file_is_a_hard_failure() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("T212_All_import_config_v6.json"),
        "roles: [not, json]",
    )
    .unwrap();

    let reconciler = StructuralReconciler::from_config_dir(dir.path());
    let err = reconciler
        .validate(&columns(&["Action", "Time"]), "T212")
        .unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_injected_catalog_and_fixtures() {
    let store = MemoryConfigStore::new();
    store.insert("credit_union.json", r#"{"roles": ["date", "amount"]}"#);

    let catalog = ConfigCatalog::new(vec![BankConfigEntry::new(
        "Credit Union",
        "credit_union.json",
    )]);
    let reconciler = StructuralReconciler::with_catalog(catalog, store);

    assert_eq!(reconciler.catalog().labels(), vec!["Credit Union"]);

    let report = reconciler
        .validate(&columns(&["Date", "Amount"]), "Credit Union")
        .unwrap();
    assert!(report.is_match());

    // The builtin labels are not known to this reconciler
    let report = reconciler
        .validate(&columns(&["Date", "Amount"]), "Revolut")
        .unwrap();
    assert!(matches!(report, ValidationReport::Unresolved(_)));
}

/// Stub detector standing in for the host application's bank type detection
struct FixedDetector {
    label: Option<String>,
}

impl BankTypeDetector for FixedDetector {
    fn detect(&self, _csv_columns: &[String]) -> Option<String> {
        self.label.clone()
    }
}

#[test]
fn test_detector_fed_validation() {
    let store = MemoryConfigStore::new();
    store.insert(
        "Revolut_Personal_import_config_v4.json",
        revolut_config(&["date", "amount", "description"]),
    );
    let reconciler = StructuralReconciler::new(store);
    let header = columns(&["Date", "Amount", "Description"]);

    // Detector recognized the export
    let detector = FixedDetector {
        label: Some("Revolut".to_string()),
    };
    let label = detector.detect(&header).unwrap();
    assert!(reconciler.validate(&header, &label).unwrap().is_match());

    // Detector could not place the export; callers fall back to an
    // unknown sentinel and the reconciler reports it as unresolved
    let detector = FixedDetector { label: None };
    let label = detector.detect(&header).unwrap_or("Unknown".to_string());
    let report = reconciler.validate(&header, &label).unwrap();
    assert!(matches!(report, ValidationReport::Unresolved(_)));
}

#[test]
fn test_memory_store_operations() {
    let store = MemoryConfigStore::new();
    assert_eq!(store.locate("a.json"), None);

    store.insert("a.json", r#"{"roles": []}"#);
    assert_eq!(store.locate("a.json"), Some("a.json".to_string()));

    store.clear();
    assert_eq!(store.locate("a.json"), None);
}
