use std::path::PathBuf;

use jotter_core::LocalStore;

use crate::app::{open_backend, resolve_config_path, StoreLocation};
use crate::cli::{Cli, InitArgs};
use crate::config::{default_store_path, write_config, JotterConfig, StoreBackend};
use crate::errors::CliError;

pub fn handle_init(cli: &Cli, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}",
            config_path.display()
        ))
        .with_hint("Pass --force to overwrite it.")
        .into());
    }

    let backend: StoreBackend = args
        .backend
        .parse()
        .map_err(|e: anyhow::Error| CliError::invalid_input(e.to_string()))?;
    let dir = match args.path.as_deref().or(cli.store.as_deref()) {
        Some(path) => PathBuf::from(path),
        None => default_store_path()?,
    };
    let location = StoreLocation { dir, backend };

    let mut store = LocalStore::new(open_backend(&location)?);
    let existing = store.try_load()?;
    if existing.is_empty() {
        store.try_save(&existing)?;
    }

    write_config(&config_path, &JotterConfig::new(location.dir.clone(), backend))?;

    if !cli.quiet {
        println!("Initialized jotter store at {}", location.dir.display());
        if !existing.is_empty() {
            println!("- kept {} existing notes", existing.len());
        }
        println!("- config: {}", config_path.display());
    }
    Ok(())
}
