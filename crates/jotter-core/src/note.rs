//! Note data model.
//!
//! The JSON shape is the persisted record format:
//! `{id, title, content, tags, reminder, isLocked, encryptedContent}`.
//! Fields added over time default to empty/false when absent or null.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{JotterError, Result};

/// Placeholder shown instead of an excerpt for locked notes.
pub const LOCKED_EXCERPT: &str = "[locked]";

/// Accepted reminder formats (browser datetime-local, with optional seconds).
const REMINDER_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Read a field that may be stored as `null`, treating null like a missing value.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A persisted note.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Note {
    /// Timestamp-derived identifier; empty for an unsaved draft
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(deserialize_with = "null_as_default")]
    pub title: String,

    /// Plaintext body; empty while the note is locked
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,

    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    /// Local timestamp (`YYYY-MM-DDTHH:MM`)
    pub reminder: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub is_locked: bool,

    /// Ciphertext of the body; empty while the note is unlocked
    #[serde(deserialize_with = "null_as_default")]
    pub encrypted_content: String,
}

impl Note {
    /// First `max_chars` characters of the body, with `...` when cut short.
    pub fn excerpt(&self, max_chars: usize) -> String {
        if self.is_locked {
            return LOCKED_EXCERPT.to_string();
        }
        let mut chars = self.content.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{}...", head)
        } else {
            head
        }
    }

    /// True when `tag` matches one of this note's tags, ignoring case.
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.trim().to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }

    /// Case-insensitive substring match on title, tags, and unlocked content.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
            || (!self.is_locked && self.content.to_lowercase().contains(needle))
    }

    /// Parsed reminder timestamp, if present and well-formed.
    pub fn reminder_at(&self) -> Option<NaiveDateTime> {
        self.reminder.as_deref().and_then(parse_reminder)
    }
}

/// Fields for a note that has not been assigned an id yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub reminder: Option<String>,
    pub is_locked: bool,
    pub encrypted_content: String,
}

impl NewNote {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_reminder(mut self, reminder: impl Into<String>) -> Self {
        self.reminder = Some(reminder.into());
        self
    }

    /// Store `ciphertext` as the live payload and drop the plaintext.
    pub fn locked(mut self, ciphertext: impl Into<String>) -> Self {
        self.content.clear();
        self.encrypted_content = ciphertext.into();
        self.is_locked = true;
        self
    }

    pub(crate) fn into_note(self, id: String) -> Note {
        Note {
            id,
            title: self.title,
            content: self.content,
            tags: self.tags,
            reminder: self.reminder,
            is_locked: self.is_locked,
            encrypted_content: self.encrypted_content,
        }
    }
}

/// Split a comma-separated tag list, trimming entries and dropping blanks.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Trim each tag and drop blanks, preserving order.
pub fn normalize_tags<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    tags.iter()
        .map(|t| t.as_ref().trim())
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

fn parse_reminder(value: &str) -> Option<NaiveDateTime> {
    REMINDER_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value.trim(), fmt).ok())
}

/// Check a reminder string, returning it trimmed.
///
/// # Errors
///
/// Returns `JotterError::Validation` if the value is not `YYYY-MM-DDTHH:MM`
/// (seconds optional).
pub fn validate_reminder(value: &str) -> Result<String> {
    let trimmed = value.trim();
    if parse_reminder(trimmed).is_none() {
        return Err(JotterError::Validation(format!(
            "Invalid reminder (expected YYYY-MM-DDTHH:MM): {}",
            value
        )));
    }
    Ok(trimmed.to_string())
}
