use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use jotter_core::VERSION;

/// Jotter - local notes with optional per-note password locking
#[derive(Parser)]
#[command(name = "jotter")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the note store
    #[arg(short, long, global = true, env = "JOTTER_STORE")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default config and create an empty store
    Init(InitArgs),

    /// Create a note
    New(NewArgs),

    /// Change fields of an existing note
    Edit(EditArgs),

    /// Show a note (prompts for the password of a locked note)
    Show(ShowArgs),

    /// List notes
    List(ListArgs),

    /// Search titles, tags and unlocked content
    Search(SearchArgs),

    /// Delete a note
    Delete {
        /// Note ID
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Export a note as a text or HTML file
    Export(ExportArgs),

    /// List notes with reminders, soonest first
    Reminders {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that the store loads cleanly
    Doctor,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Store directory to record in the config
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Storage backend (file or sqlite)
    #[arg(long, default_value = "file")]
    pub backend: String,

    /// Overwrite an existing config
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `new` command
#[derive(Args)]
pub struct NewArgs {
    /// Note title
    #[arg(short, long)]
    pub title: String,

    /// Note body (read from stdin when omitted)
    #[arg(short, long)]
    pub content: Option<String>,

    /// Comma-separated tags
    #[arg(long, value_name = "TAGS")]
    pub tags: Option<String>,

    /// Reminder (YYYY-MM-DDTHH:MM)
    #[arg(long, value_name = "WHEN")]
    pub reminder: Option<String>,

    /// Encrypt the body with a password
    #[arg(long)]
    pub lock: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Note ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// New title
    #[arg(short, long)]
    pub title: Option<String>,

    /// New body (`-` reads stdin)
    #[arg(short, long)]
    pub content: Option<String>,

    /// Replace tags with a comma-separated list
    #[arg(long, value_name = "TAGS")]
    pub tags: Option<String>,

    /// Set the reminder (YYYY-MM-DDTHH:MM)
    #[arg(long, value_name = "WHEN", conflicts_with = "clear_reminder")]
    pub reminder: Option<String>,

    /// Remove the reminder
    #[arg(long)]
    pub clear_reminder: bool,

    /// Encrypt the body with a password
    #[arg(long, conflicts_with = "unlock")]
    pub lock: bool,

    /// Store the body as plaintext
    #[arg(long)]
    pub unlock: bool,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Note ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Only notes with this tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Search query
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Note ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output format (text or html)
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Directory to write the file into
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out: String,

    /// Write to stdout instead of a file
    #[arg(long, conflicts_with = "out")]
    pub stdout: bool,
}
