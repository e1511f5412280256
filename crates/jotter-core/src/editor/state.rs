//! Editor states and the transient buffers they carry.

use crate::crypto::Password;
use crate::note::{parse_tags, Note};

/// What opened a password prompt, and so where a correct password leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptIntent {
    Edit,
    Preview,
}

/// A pending password prompt for a locked note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPrompt {
    pub note_id: String,
    pub intent: PromptIntent,
}

/// The note being composed.
///
/// `content` is always plaintext, even for a note that will be stored
/// locked. `password` is set when the draft was opened by unlocking a note,
/// or when the user asks to lock it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Empty until the draft has been saved once
    pub id: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub reminder: Option<String>,
    pub lock: bool,
    pub password: Option<Password>,
    /// Opened by decrypting a stored locked note
    pub(crate) unlocked: bool,
}

impl Draft {
    /// Load a stored note with its displayable body.
    pub(crate) fn from_note(note: &Note, content: String, password: Option<Password>) -> Self {
        Self {
            id: note.id.clone(),
            title: note.title.clone(),
            content,
            tags: note.tags.clone(),
            reminder: note.reminder.clone(),
            lock: note.is_locked,
            unlocked: note.is_locked && password.is_some(),
            password,
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_empty()
    }

    /// Replace the tags from a comma-separated input line.
    pub fn set_tags_from_input(&mut self, input: &str) {
        self.tags = parse_tags(input);
    }

    /// Ask for the body to be encrypted with `password` on save.
    pub fn lock_with(&mut self, password: impl Into<Password>) {
        self.lock = true;
        self.password = Some(password.into());
    }

    /// Store the body as plaintext on save.
    pub fn unlock(&mut self) {
        self.lock = false;
        self.password = None;
    }
}

/// A read-only view of a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub note: Note,
    /// Plaintext body (decrypted if the note is locked)
    pub content: String,
    pub(crate) password: Option<Password>,
}

impl Preview {
    /// True when this view holds decrypted text of a locked note.
    pub fn is_unlocked(&self) -> bool {
        self.password.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Idle,
    Editing(Draft),
    Previewing(Preview),
    AwaitingPassword(PasswordPrompt),
}

/// Coarse state name, distinguishing buffers decrypted from a locked note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Editing,
    Previewing,
    AwaitingPassword,
    /// Editing or previewing plaintext that is stored locked
    Unlocked,
}

impl EditorState {
    pub fn phase(&self) -> Phase {
        match self {
            EditorState::Idle => Phase::Idle,
            EditorState::Editing(draft) if draft.unlocked => Phase::Unlocked,
            EditorState::Editing(_) => Phase::Editing,
            EditorState::Previewing(preview) if preview.is_unlocked() => Phase::Unlocked,
            EditorState::Previewing(_) => Phase::Previewing,
            EditorState::AwaitingPassword(_) => Phase::AwaitingPassword,
        }
    }

    /// Id of the note the open buffer or prompt refers to.
    pub fn open_note_id(&self) -> Option<&str> {
        match self {
            EditorState::Idle => None,
            EditorState::Editing(draft) if draft.is_new() => None,
            EditorState::Editing(draft) => Some(&draft.id),
            EditorState::Previewing(preview) => Some(&preview.note.id),
            EditorState::AwaitingPassword(prompt) => Some(&prompt.note_id),
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            EditorState::Idle => "idle",
            EditorState::Editing(_) => "editing",
            EditorState::Previewing(_) => "previewing",
            EditorState::AwaitingPassword(_) => "awaiting password",
        }
    }
}
