//! Command handlers, one function per subcommand.

mod browse;
mod doctor;
mod export;
mod init;
mod misc;
mod notes;

pub use browse::{handle_list, handle_reminders, handle_search};
pub use doctor::handle_doctor;
pub use export::handle_export;
pub use init::handle_init;
pub use misc::handle_completions;
pub use notes::{handle_delete, handle_edit, handle_new, handle_show};
