use jotter_core::editor::Draft;
use jotter_core::{Editor, JotterError};

use crate::app::{unlock_with_retry, AppContext, Repository};
use crate::cli::{EditArgs, NewArgs, ShowArgs};
use crate::errors::CliError;
use crate::helpers::{prompt_new_password, read_content};
use crate::output::{note_json, print_json, print_note};
use crate::ui;

pub fn handle_new(app: &AppContext, args: &NewArgs) -> anyhow::Result<()> {
    let content = read_content(args.content.clone())?;
    let mut repo = app.open_repository()?;
    let mut editor = Editor::new();

    editor.new_note();
    let draft = editor.draft_mut()?;
    draft.title = args.title.clone();
    draft.content = content;
    if let Some(tags) = &args.tags {
        draft.set_tags_from_input(tags);
    }
    draft.reminder = args.reminder.clone();
    if args.lock {
        draft.lock_with(prompt_new_password()?);
    }

    let note = editor.save(&mut repo)?;
    repo.flush()?;
    report(app, &mut editor, &note.id);
    Ok(())
}

pub fn handle_edit(app: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    if !has_changes(args) {
        return Err(CliError::invalid_input("Nothing to change")
            .with_hint("Pass at least one of --title, --content, --tags, --reminder, --clear-reminder, --lock, --unlock.")
            .into());
    }

    let mut repo = app.open_repository()?;
    let mut editor = Editor::new();
    editor.edit(&repo, &args.id)?;
    unlock_with_retry(&mut editor, &repo)?;

    let content = match &args.content {
        Some(value) => Some(read_content(Some(value.clone()))?),
        None => None,
    };
    apply_edits(editor.draft_mut()?, args, content)?;

    let note = editor.save(&mut repo)?;
    repo.flush()?;
    report(app, &mut editor, &note.id);
    Ok(())
}

fn has_changes(args: &EditArgs) -> bool {
    args.title.is_some()
        || args.content.is_some()
        || args.tags.is_some()
        || args.reminder.is_some()
        || args.clear_reminder
        || args.lock
        || args.unlock
}

fn apply_edits(draft: &mut Draft, args: &EditArgs, content: Option<String>) -> anyhow::Result<()> {
    if let Some(title) = &args.title {
        draft.title = title.clone();
    }
    if let Some(content) = content {
        draft.content = content;
    }
    if let Some(tags) = &args.tags {
        draft.set_tags_from_input(tags);
    }
    if args.clear_reminder {
        draft.reminder = None;
    } else if let Some(reminder) = &args.reminder {
        draft.reminder = Some(reminder.clone());
    }
    if args.unlock {
        draft.unlock();
    } else if args.lock && draft.password.is_none() {
        draft.lock_with(prompt_new_password()?);
    }
    Ok(())
}

pub fn handle_show(app: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let repo = app.open_repository()?;
    let mut editor = Editor::new();
    editor.preview_note(&repo, &args.id)?;
    unlock_with_retry(&mut editor, &repo)?;

    let preview = editor
        .preview()
        .ok_or_else(|| JotterError::InvalidState("note did not open for preview".to_string()))?;
    if args.json {
        print_json(&note_json(&preview.note, Some(&preview.content)))?;
    } else {
        print_note(&preview.note, &preview.content, app.quiet);
    }
    Ok(())
}

pub fn handle_delete(app: &AppContext, id: &str) -> anyhow::Result<()> {
    let mut repo = app.open_repository()?;
    ensure_exists(&repo, id)?;

    let mut editor = Editor::new();
    editor.delete(&mut repo, id);
    repo.flush()?;
    report(app, &mut editor, id);
    Ok(())
}

fn ensure_exists(repo: &Repository, id: &str) -> anyhow::Result<()> {
    if repo.find_by_id(id).is_none() {
        return Err(CliError::not_found(format!("Note {} not found", id))
            .with_hint("Run `jotter list` to see note IDs.")
            .into());
    }
    Ok(())
}

/// Print the editor's outcome; quiet mode prints only the note id.
fn report(app: &AppContext, editor: &mut Editor, id: &str) {
    if app.quiet {
        println!("{}", id);
        return;
    }
    if let Some(notification) = editor.take_notification() {
        println!("{} ({})", ui::notification(&app.ui, &notification), id);
    }
}
