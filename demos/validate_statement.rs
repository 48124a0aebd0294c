//! Statement header validation example

use import_config_core::{MemoryConfigStore, StructuralReconciler, ValidationReport};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🏦 Import Config Core - Statement Validation Example\n");

    // Ship a Revolut personal configuration into an in-memory store. A real
    // deployment points a DirectoryStore at the directory holding the JSON
    // files instead.
    let store = MemoryConfigStore::new();
    store.insert(
        "Revolut_Personal_import_config_v4.json",
        r#"{
            "version": 4,
            "roles": [
                "_ignore",
                "_ignore",
                "date_transaction",
                "date_process",
                "description",
                "amount",
                "_ignore",
                "currency-code",
                "_ignore",
                "_ignore"
            ]
        }"#,
    );
    let reconciler = StructuralReconciler::new(store);

    println!("📋 Known bank formats:");
    for label in reconciler.catalog().labels() {
        println!("  - {}", label);
    }
    println!();

    // 1. A header that matches the configuration exactly
    let exact = vec![
        "Type".to_string(),
        "Product".to_string(),
        "Started Date".to_string(),
        "Completed Date".to_string(),
        "Description".to_string(),
        "Amount".to_string(),
        "Fee".to_string(),
        "Currency".to_string(),
        "State".to_string(),
        "Balance".to_string(),
    ];

    println!("🔍 Validating a clean Revolut export ({} columns)...", exact.len());
    report_outcome(&reconciler.validate(&exact, "Revolut")?);

    // 2. The same header with a trailing column the bank added
    let mut widened = exact.clone();
    widened.push("Beneficiary".to_string());

    println!(
        "🔍 Validating an export with a new trailing column ({} columns)...",
        widened.len()
    );
    report_outcome(&reconciler.validate(&widened, "Revolut")?);

    // 3. An export from a bank the catalog does not know
    println!("🔍 Validating an export from an unrecognized bank...");
    report_outcome(&reconciler.validate(&exact, "Monzo")?);

    println!("🎉 Example completed successfully!");
    Ok(())
}

fn report_outcome(report: &ValidationReport) {
    match report {
        ValidationReport::Checked(check) => {
            println!("  Config file: {}", check.config_file);
            println!(
                "  Expected {} columns, found {}",
                check.expected_columns, check.actual_columns
            );
            if check.is_match {
                println!("  ✅ Structure matches\n");
            } else if !check.extra_columns.is_empty() {
                println!("  ⚠️  Extra columns: {}\n", check.extra_columns.join(", "));
            } else {
                println!("  ⚠️  Missing {} column(s)\n", check.missing_count);
            }
        }
        ValidationReport::Unresolved(unresolved) => {
            println!("  ❌ {}\n", unresolved.message);
        }
    }
}
