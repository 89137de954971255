//! The `flashword validate` command.

use std::path::PathBuf;

use anyhow::Result;

use flashword_core::Catalog;

pub fn execute(catalog_path: PathBuf) -> Result<()> {
    let catalog = Catalog::load(&catalog_path)?;
    println!("Catalog: {} ({} words)", catalog.name(), catalog.len());

    let warnings = catalog.validate();
    for w in &warnings {
        let prefix = w
            .index
            .map(|i| format!("  [word {}]", i + 1))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Catalog valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
