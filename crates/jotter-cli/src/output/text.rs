//! Text and table output formatting for notes.

use jotter_core::Note;

use crate::constants::EXCERPT_CHARS;
use crate::ui::{note_table, UiContext};

const LIST_HEADERS: [&str; 5] = ["ID", "TITLE", "TAGS", "REMINDER", "EXCERPT"];

pub fn print_note_list(ctx: &UiContext, notes: &[&Note], quiet: bool) {
    if notes.is_empty() {
        if !quiet {
            eprintln!("No notes found.");
        }
        return;
    }
    let rows: Vec<Vec<String>> = notes.iter().map(|note| list_row(note)).collect();
    println!("{}", note_table(ctx, &LIST_HEADERS, &rows));
}

/// One cell per field; piped output is one tab-separated line per note.
fn list_row(note: &Note) -> Vec<String> {
    vec![
        single_line(&note.id),
        single_line(&note.title),
        single_line(&note.tags.join(", ")),
        single_line(note.reminder.as_deref().unwrap_or_default()),
        single_line(&note.excerpt(EXCERPT_CHARS)),
    ]
}

fn single_line(value: &str) -> String {
    value.replace(['\t', '\r', '\n'], " ")
}

/// Print one note; `quiet` prints only the body.
pub fn print_note(note: &Note, content: &str, quiet: bool) {
    if !quiet {
        println!("ID: {}", note.id);
        println!("Title: {}", note.title);
        if !note.tags.is_empty() {
            println!("Tags: {}", note.tags.join(", "));
        }
        if let Some(reminder) = &note.reminder {
            println!("Reminder: {}", reminder);
        }
        if note.is_locked {
            println!("Locked: yes");
        }
        println!();
    }
    println!("{}", content);
}
