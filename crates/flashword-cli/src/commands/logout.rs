//! The `flashword logout` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(store: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let (_, mut session) = super::open_session(config_path.as_deref(), store)?;

    match session.last_active_user() {
        Some(key) => {
            session.logout()?;
            println!("Logged out {key}.");
        }
        None => println!("No active session."),
    }

    Ok(())
}
