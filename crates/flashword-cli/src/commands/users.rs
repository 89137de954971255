//! The `flashword users` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

pub fn execute(format: String, store: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let (_, session) = super::open_session(config_path.as_deref(), store)?;
    let users = session.list_users();
    let active = session.last_active_user();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&users)?);
        return Ok(());
    }

    if users.is_empty() {
        println!("No users yet. Run `flashword play` to create one.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["User", "Next word", "Points", "Active"]);

    for (key, record) in &users {
        let marker = if active.as_deref() == Some(key.as_str()) {
            "*"
        } else {
            ""
        };
        table.add_row(vec![
            Cell::new(&record.display_name),
            Cell::new(record.progress_index + 1),
            Cell::new(record.points),
            Cell::new(marker),
        ]);
    }

    println!("{table}");
    Ok(())
}
