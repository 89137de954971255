//! The `flashword words` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

pub fn execute(catalog_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = flashword_core::config::load_config_from(config_path.as_deref())?;
    let catalog = super::load_catalog(&config, catalog_path.as_deref())?;

    println!(
        "Catalog: {} ({} words, {} -> {})",
        catalog.name(),
        catalog.len(),
        catalog.source_language(),
        catalog.target_language()
    );
    println!("Categories: {}", catalog.categories().join(", "));

    let mut table = Table::new();
    table.set_header(vec!["#", "Word", "Translation", "Category"]);
    for (i, word) in catalog.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&word.source),
            Cell::new(&word.target),
            Cell::new(&word.category),
        ]);
    }

    println!("{table}");
    Ok(())
}
