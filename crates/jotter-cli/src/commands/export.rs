use std::path::Path;

use jotter_core::export::{ExportFormat, ExportedFile};
use jotter_core::Editor;

use crate::app::{with_password_retry, AppContext};
use crate::cli::ExportArgs;
use crate::errors::CliError;
use crate::ui;

pub fn handle_export(app: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let format: ExportFormat = args.format.parse()?;
    let repo = app.open_repository()?;
    let note = repo.find_by_id(&args.id).ok_or_else(|| {
        CliError::not_found(format!("Note {} not found", args.id))
            .with_hint("Run `jotter list` to see note IDs.")
    })?;

    let mut editor = Editor::new();
    let file = if note.is_locked {
        with_password_retry(|password| editor.export(&repo, &args.id, Some(password), format))?
    } else {
        editor.export(&repo, &args.id, None, format)?
    };

    if args.stdout {
        print!("{}", file.contents);
        return Ok(());
    }

    let path = write_export(Path::new(&args.out), &file)?;
    if app.quiet {
        println!("{}", path.display());
    } else if let Some(notification) = editor.take_notification() {
        println!("{}: {}", ui::notification(&app.ui, &notification), path.display());
    }
    Ok(())
}

fn write_export(dir: &Path, file: &ExportedFile) -> anyhow::Result<std::path::PathBuf> {
    std::fs::create_dir_all(dir)
        .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", dir.display(), e))?;
    let path = dir.join(&file.file_name);
    std::fs::write(&path, &file.contents)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))?;
    Ok(path)
}
