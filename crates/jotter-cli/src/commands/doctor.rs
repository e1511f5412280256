use jotter_core::LocalStore;

use crate::app::{open_backend, AppContext, SQLITE_FILE_NAME};
use crate::config::StoreBackend;
use crate::ui::{badge, Badge};

pub fn handle_doctor(app: &AppContext) -> anyhow::Result<()> {
    let location = &app.location;
    let store_path = match location.backend {
        StoreBackend::File => location.dir.clone(),
        StoreBackend::Sqlite => location.dir.join(SQLITE_FILE_NAME),
    };

    let notes = open_backend(location).and_then(|backend| {
        LocalStore::new(backend).try_load().map_err(anyhow::Error::from)
    });
    let notes = match notes {
        Ok(notes) => notes,
        Err(err) => {
            eprintln!("Doctor: FAILED");
            eprintln!("- store: {} ({})", badge(&app.ui, Badge::Err), store_path.display());
            eprintln!("- error: {}", err);
            eprintln!("Hint: Restore the store from a backup, or move it aside and run `jotter init`.");
            return Err(err);
        }
    };

    if app.quiet {
        return Ok(());
    }
    let locked = notes.iter().filter(|n| n.is_locked).count();
    let bad_reminders = notes
        .iter()
        .filter(|n| n.reminder.is_some() && n.reminder_at().is_none())
        .count();

    println!("Doctor: OK");
    if app.config.is_some() {
        println!("- config: {} ({})", badge(&app.ui, Badge::Ok), app.config_path.display());
    } else {
        println!(
            "- config: {} not found at {}, using defaults",
            badge(&app.ui, Badge::Warn),
            app.config_path.display()
        );
    }
    println!("- store: {} ({})", badge(&app.ui, Badge::Ok), store_path.display());
    println!("- notes: {} ({} locked)", notes.len(), locked);
    if bad_reminders > 0 {
        println!(
            "- reminders: {} {} malformed",
            badge(&app.ui, Badge::Warn),
            bad_reminders
        );
    }
    Ok(())
}
