//! Column normalization example

use import_config_core::{MemoryConfigStore, StructuralReconciler};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧹 Import Config Core - Column Normalization Example\n");

    let store = MemoryConfigStore::new();
    store.insert(
        "AIB_import_config_v2.json",
        r#"{"roles": ["date_transaction", "description", "amount", "_ignore"]}"#,
    );
    let reconciler = StructuralReconciler::new(store);

    // 1. The bank appended columns the importer does not expect
    let widened = vec![
        "Posted Transactions Date".to_string(),
        "Description".to_string(),
        "Debit Amount".to_string(),
        "Balance".to_string(),
        "Posted Currency".to_string(),
        "Transaction Type".to_string(),
    ];

    println!("✂️  Normalizing a widened AIB export ({} columns):", widened.len());
    let normalized = reconciler.normalize(&widened, "AIB")?;
    println!("  Columns: {}", normalized.columns.join(" | "));
    println!("  Summary: {}\n", normalized.summary);

    // 2. The bank dropped columns; placeholders keep the shape importable
    let narrowed = vec![
        "Posted Transactions Date".to_string(),
        "Description".to_string(),
    ];

    println!("➕ Normalizing a narrowed AIB export ({} columns):", narrowed.len());
    let normalized = reconciler.normalize(&narrowed, "AIB")?;
    println!("  Columns: {}", normalized.columns.join(" | "));
    println!("  Summary: {}\n", normalized.summary);

    // 3. Already matching input passes through untouched
    let clean = vec![
        "Posted Transactions Date".to_string(),
        "Description".to_string(),
        "Debit Amount".to_string(),
        "Balance".to_string(),
    ];

    println!("✅ Normalizing a matching AIB export ({} columns):", clean.len());
    let normalized = reconciler.normalize(&clean, "AIB")?;
    println!("  Columns: {}", normalized.columns.join(" | "));
    println!("  Summary: {}\n", normalized.summary);

    // 4. Unrecognized banks are reported, never silently repaired
    println!("❓ Normalizing an export for an unknown bank:");
    let normalized = reconciler.normalize(&clean, "Monzo")?;
    println!("  Columns: {}", normalized.columns.join(" | "));
    println!("  Summary: {}\n", normalized.summary);

    println!("🎉 Example completed successfully!");
    Ok(())
}
