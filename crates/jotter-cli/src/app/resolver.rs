//! Path resolution for the config file and the note store.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, default_store_path, read_config, JotterConfig, StoreBackend};
use crate::constants::env_vars;

/// Where the notes live and which backend reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLocation {
    pub dir: PathBuf,
    pub backend: StoreBackend,
}

/// Resolve the config file path, checking JOTTER_CONFIG first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(env_vars::CONFIG) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config if one exists; a missing file means defaults.
pub fn load_config() -> anyhow::Result<(PathBuf, Option<JotterConfig>)> {
    let path = resolve_config_path()?;
    if !path.exists() {
        return Ok((path, None));
    }
    let config = read_config(&path)?;
    Ok((path, Some(config)))
}

/// Resolve the store from `--store`/JOTTER_STORE, then the config, then
/// the XDG data directory.
///
/// The backend always comes from the config, defaulting to files.
pub fn resolve_store(cli: &Cli, config: Option<&JotterConfig>) -> anyhow::Result<StoreLocation> {
    let backend = config.map(|c| c.store.backend).unwrap_or_default();
    let configured = config.and_then(|c| c.store.path.as_deref());

    let dir = match (cli.store.as_deref(), configured) {
        (Some(flag), _) if !flag.trim().is_empty() => PathBuf::from(flag),
        (_, Some(path)) if !path.trim().is_empty() => PathBuf::from(path),
        _ => default_store_path()?,
    };
    Ok(StoreLocation { dir, backend })
}
