//! Resolved per-invocation state shared by the commands.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::JotterConfig;
use crate::ui::UiContext;

use super::resolver::{load_config, resolve_store, StoreLocation};
use super::store::{open_repository, Repository};

pub struct AppContext {
    pub quiet: bool,
    pub ui: UiContext,
    pub config_path: PathBuf,
    pub config: Option<JotterConfig>,
    pub location: StoreLocation,
}

impl AppContext {
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let (config_path, config) = load_config()?;
        let location = resolve_store(cli, config.as_ref())?;
        let color = config.as_ref().map(|c| c.ui.color).unwrap_or(true);
        Ok(Self {
            quiet: cli.quiet,
            ui: UiContext::from_env(color),
            config_path,
            config,
            location,
        })
    }

    pub fn open_repository(&self) -> anyhow::Result<Repository> {
        open_repository(&self.location)
    }
}
