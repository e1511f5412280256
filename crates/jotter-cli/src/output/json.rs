//! JSON output formatting for notes.

use jotter_core::Note;

/// Convert a note to JSON for output.
///
/// `content` replaces the stored body, for showing an unlocked note.
pub fn note_json(note: &Note, content: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "id": note.id,
        "title": note.title,
        "content": content.unwrap_or(note.content.as_str()),
        "tags": note.tags,
        "reminder": note.reminder,
        "isLocked": note.is_locked,
    })
}

/// Convert multiple notes to a JSON array for output.
pub fn notes_json(notes: &[&Note]) -> Vec<serde_json::Value> {
    notes.iter().map(|note| note_json(note, None)).collect()
}

pub fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
