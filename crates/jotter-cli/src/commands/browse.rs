use jotter_core::Note;

use crate::app::AppContext;
use crate::cli::{ListArgs, SearchArgs};
use crate::output::{notes_json, print_json, print_note_list};

pub fn handle_list(app: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let repo = app.open_repository()?;
    let notes: Vec<&Note> = match &args.tag {
        Some(tag) => repo.with_tag(tag),
        None => repo.list().iter().collect(),
    };
    emit(app, &notes, args.json)
}

pub fn handle_search(app: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let repo = app.open_repository()?;
    emit(app, &repo.search(&args.query), args.json)
}

pub fn handle_reminders(app: &AppContext, json: bool) -> anyhow::Result<()> {
    let repo = app.open_repository()?;
    emit(app, &repo.with_reminders(), json)
}

fn emit(app: &AppContext, notes: &[&Note], json: bool) -> anyhow::Result<()> {
    if json {
        print_json(&notes_json(notes))
    } else {
        print_note_list(&app.ui, notes, app.quiet);
        Ok(())
    }
}
