//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Points awarded and deducted per answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRules {
    /// Added on a correct answer.
    #[serde(default = "default_points_correct")]
    pub points_correct: u32,
    /// Subtracted on a wrong answer, floored at zero.
    #[serde(default = "default_penalty")]
    pub penalty: u32,
}

fn default_points_correct() -> u32 {
    10
}
fn default_penalty() -> u32 {
    2
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            points_correct: default_points_correct(),
            penalty: default_penalty(),
        }
    }
}

/// Top-level flashword configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlashwordConfig {
    /// Where the durable store lives. See [`FlashwordConfig::store_path`].
    #[serde(default)]
    pub store_path: Option<PathBuf>,
    /// TOML catalog to use instead of the built-in one.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// External program that speaks a word, e.g. "espeak -v en-us".
    #[serde(default)]
    pub speech_command: Option<String>,
    #[serde(default)]
    pub scoring: ScoringRules,
}

impl FlashwordConfig {
    /// Effective store path.
    ///
    /// Order: `FLASHWORD_STORE`, then `store_path`, then
    /// `~/.local/share/flashword/store.json`, then `./flashword-store.json`.
    pub fn store_path(&self) -> PathBuf {
        if let Ok(path) = std::env::var("FLASHWORD_STORE") {
            if !path.is_empty() {
                return PathBuf::from(path);
            }
        }
        if let Some(path) = &self.store_path {
            return path.clone();
        }
        match std::env::var("HOME") {
            Ok(home) => PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("flashword")
                .join("store.json"),
            Err(_) => PathBuf::from("flashword-store.json"),
        }
    }
}

/// Expand `${VAR}` references from the environment. Unset variables expand
/// to nothing; substituted values are not expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start + 2..].find('}') else {
            break;
        };
        out.push_str(&rest[..start]);
        let name = &rest[start + 2..start + 2 + len];
        out.push_str(&std::env::var(name).unwrap_or_default());
        rest = &rest[start + 2 + len + 1..];
    }
    out.push_str(rest);
    out
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `flashword.toml` in the current directory
/// 2. `~/.config/flashword/config.toml`
pub fn load_config_from(path: Option<&Path>) -> Result<FlashwordConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("flashword.toml");
        if local.exists() {
            Some(local)
        } else {
            config_dir()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<FlashwordConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => FlashwordConfig::default(),
    };

    config.store_path = config.store_path.as_deref().map(resolve_path);
    config.catalog_path = config.catalog_path.as_deref().map(resolve_path);
    config.speech_command = config.speech_command.as_deref().map(resolve_env_vars);

    Ok(config)
}

fn config_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("flashword"))
}
