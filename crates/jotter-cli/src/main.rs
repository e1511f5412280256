//! Jotter CLI - local notes with optional per-note password locking
//!
//! This is the command-line front end for Jotter. It drives the core
//! library's repository and editor from subcommands.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use jotter_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::constants::env_vars;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        errors::report(&err);
        std::process::exit(errors::exit_code(&err));
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let Some(command) = &cli.command else {
        println!("Jotter v{}", VERSION);
        println!("\nRun `jotter --help` for usage information.");
        return Ok(());
    };

    match command {
        Commands::Init(args) => commands::handle_init(cli, args),
        Commands::New(args) => commands::handle_new(&AppContext::resolve(cli)?, args),
        Commands::Edit(args) => commands::handle_edit(&AppContext::resolve(cli)?, args),
        Commands::Show(args) => commands::handle_show(&AppContext::resolve(cli)?, args),
        Commands::List(args) => commands::handle_list(&AppContext::resolve(cli)?, args),
        Commands::Search(args) => commands::handle_search(&AppContext::resolve(cli)?, args),
        Commands::Delete { id } => commands::handle_delete(&AppContext::resolve(cli)?, id),
        Commands::Export(args) => commands::handle_export(&AppContext::resolve(cli)?, args),
        Commands::Reminders { json } => {
            commands::handle_reminders(&AppContext::resolve(cli)?, *json)
        }
        Commands::Doctor => commands::handle_doctor(&AppContext::resolve(cli)?),
        Commands::Completions { shell } => commands::handle_completions(*shell),
    }
}

/// Log to stderr so stdout carries only command output.
///
/// JOTTER_LOG overrides the filter; `--verbose` raises the default to debug.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(env_vars::LOG).unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "jotter=debug" } else { "jotter=warn" })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}
