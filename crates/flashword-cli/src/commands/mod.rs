pub mod init;
pub mod logout;
pub mod play;
pub mod users;
pub mod validate;
pub mod words;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use flashword_core::config::{load_config_from, FlashwordConfig};
use flashword_core::{Catalog, FileStore, SessionStore};

/// Load config and open the session store it points at.
///
/// An explicit `--store` wins over `FLASHWORD_STORE` and the config file.
pub fn open_session(
    config_path: Option<&Path>,
    store: Option<PathBuf>,
) -> Result<(FlashwordConfig, SessionStore<FileStore>)> {
    let config = load_config_from(config_path)?;
    let path = store.unwrap_or_else(|| config.store_path());
    tracing::debug!("using store {}", path.display());
    Ok((config, SessionStore::new(FileStore::open(path))))
}

/// The catalog named on the command line, else in config, else the built-in one.
pub fn load_catalog(config: &FlashwordConfig, explicit: Option<&Path>) -> Result<Catalog> {
    match explicit.or(config.catalog_path.as_deref()) {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("failed to load catalog: {}", path.display())),
        None => Ok(Catalog::builtin()),
    }
}
