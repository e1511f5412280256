//! UI primitives for the Jotter CLI.
//!
//! - **Context**: color detection for stdout
//! - **Render**: note tables, badges and notifications

mod context;
pub mod render;

pub use context::UiContext;
pub use render::{badge, notification, note_table, Badge};
