//! The note editor state machine.
//!
//! The editor holds only transient state: the open draft, the previewed
//! note, or a pending password prompt. The repository is passed in to each
//! operation that reads or mutates notes.
//!
//! ```text
//! Idle ──new/edit──▶ Editing ──save/reset──▶ Idle
//!   │                   ▲
//!   └──preview──▶ Previewing ──edit_from_preview──┘
//!
//! edit/preview of a locked note ──▶ AwaitingPassword
//!   ──correct password──▶ Editing | Previewing (decrypted, transient)
//!   ──wrong password───▶ AwaitingPassword
//! ```
//!
//! Every operation records a [`Notification`] describing its outcome.

mod state;

use std::time::Instant;

use tracing::{debug, warn};

use crate::crypto::{decrypt, encrypt, Password};
use crate::error::{JotterError, Result};
use crate::export::{export_note, render, ExportFormat, ExportedFile};
use crate::note::{normalize_tags, validate_reminder, NewNote, Note};
use crate::notification::Notification;
use crate::repository::NoteRepository;
use crate::storage::KeyValueStore;

pub use state::{Draft, EditorState, PasswordPrompt, Phase, Preview, PromptIntent};

/// Message shown when a save is rejected for missing fields.
pub const EMPTY_NOTE_MESSAGE: &str = "Title and content cannot be empty";

#[derive(Debug, Default)]
pub struct Editor {
    state: EditorState,
    notification: Option<Notification>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn draft(&self) -> Option<&Draft> {
        match &self.state {
            EditorState::Editing(draft) => Some(draft),
            _ => None,
        }
    }

    /// Mutable access to the open draft.
    ///
    /// # Errors
    ///
    /// Returns `JotterError::InvalidState` unless the editor is `Editing`.
    pub fn draft_mut(&mut self) -> Result<&mut Draft> {
        match &mut self.state {
            EditorState::Editing(draft) => Ok(draft),
            other => Err(invalid_state("modify the draft", other)),
        }
    }

    pub fn preview(&self) -> Option<&Preview> {
        match &self.state {
            EditorState::Previewing(preview) => Some(preview),
            _ => None,
        }
    }

    pub fn prompt(&self) -> Option<&PasswordPrompt> {
        match &self.state {
            EditorState::AwaitingPassword(prompt) => Some(prompt),
            _ => None,
        }
    }

    /// The latest notification, unless it has expired by `now`.
    pub fn notification(&self, now: Instant) -> Option<&Notification> {
        self.notification.as_ref().filter(|n| !n.is_expired(now))
    }

    /// Remove and return the latest notification regardless of age.
    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }

    /// Start a blank draft, discarding whatever was open.
    pub fn new_note(&mut self) {
        self.transition(EditorState::Editing(Draft::default()));
    }

    /// Open `id` for editing, or prompt for its password if it is locked.
    ///
    /// # Errors
    ///
    /// Returns `JotterError::NotFound` if no note has `id`.
    pub fn edit<S: KeyValueStore>(&mut self, repo: &NoteRepository<S>, id: &str) -> Result<Phase> {
        self.open(repo, id, PromptIntent::Edit)
    }

    /// Show `id` read-only, or prompt for its password if it is locked.
    ///
    /// # Errors
    ///
    /// Returns `JotterError::NotFound` if no note has `id`.
    pub fn preview_note<S: KeyValueStore>(
        &mut self,
        repo: &NoteRepository<S>,
        id: &str,
    ) -> Result<Phase> {
        self.open(repo, id, PromptIntent::Preview)
    }

    fn open<S: KeyValueStore>(
        &mut self,
        repo: &NoteRepository<S>,
        id: &str,
        intent: PromptIntent,
    ) -> Result<Phase> {
        let Some(note) = repo.find_by_id(id) else {
            return self.fail(JotterError::NotFound(id.to_string()));
        };
        let next = if note.is_locked {
            EditorState::AwaitingPassword(PasswordPrompt {
                note_id: note.id.clone(),
                intent,
            })
        } else {
            opened(note, note.content.clone(), None, intent)
        };
        self.transition(next);
        Ok(self.phase())
    }

    /// Answer the pending password prompt.
    ///
    /// A wrong password keeps the prompt open.
    ///
    /// # Errors
    ///
    /// - `JotterError::InvalidState` if no prompt is pending
    /// - `JotterError::Decryption` if the password does not open the note
    /// - `JotterError::NotFound` if the note was removed meanwhile (the
    ///   prompt is closed)
    pub fn submit_password<S: KeyValueStore>(
        &mut self,
        repo: &NoteRepository<S>,
        password: &str,
    ) -> Result<Phase> {
        let prompt = match &self.state {
            EditorState::AwaitingPassword(prompt) => Ok(prompt.clone()),
            other => Err(invalid_state("submit a password", other)),
        };
        let prompt = match prompt {
            Ok(prompt) => prompt,
            Err(err) => return self.fail(err),
        };
        let Some(note) = repo.find_by_id(&prompt.note_id) else {
            self.transition(EditorState::Idle);
            return self.fail(JotterError::NotFound(prompt.note_id));
        };

        let next = if note.is_locked {
            match decrypt(&note.encrypted_content, password) {
                Ok(content) => opened(note, content, Some(Password::new(password)), prompt.intent),
                Err(err) => {
                    debug!(id = %note.id, "unlock attempt failed");
                    return self.fail(err);
                }
            }
        } else {
            opened(note, note.content.clone(), None, prompt.intent)
        };
        self.transition(next);
        Ok(self.phase())
    }

    /// Close the password prompt without opening the note.
    ///
    /// # Errors
    ///
    /// Returns `JotterError::InvalidState` if no prompt is pending.
    pub fn cancel_prompt(&mut self) -> Result<()> {
        if !matches!(self.state, EditorState::AwaitingPassword(_)) {
            let err = invalid_state("cancel the password prompt", &self.state);
            return self.fail(err);
        }
        self.transition(EditorState::Idle);
        Ok(())
    }

    /// Switch from the preview to editing the same note.
    ///
    /// # Errors
    ///
    /// Returns `JotterError::InvalidState` unless the editor is `Previewing`.
    pub fn edit_from_preview(&mut self) -> Result<()> {
        let draft = match &self.state {
            EditorState::Previewing(preview) => Ok(Draft::from_note(
                &preview.note,
                preview.content.clone(),
                preview.password.clone(),
            )),
            other => Err(invalid_state("edit from preview", other)),
        };
        match draft {
            Ok(draft) => {
                self.transition(EditorState::Editing(draft));
                Ok(())
            }
            Err(err) => self.fail(err),
        }
    }

    /// Discard the open draft.
    ///
    /// # Errors
    ///
    /// Returns `JotterError::InvalidState` unless the editor is `Editing`.
    pub fn reset(&mut self) -> Result<()> {
        if !matches!(self.state, EditorState::Editing(_)) {
            let err = invalid_state("reset the draft", &self.state);
            return self.fail(err);
        }
        self.transition(EditorState::Idle);
        Ok(())
    }

    /// Validate and store the open draft, then return to `Idle`.
    ///
    /// A draft with `lock` set and a non-empty password is stored encrypted;
    /// any other draft is stored as plaintext.
    ///
    /// # Errors
    ///
    /// - `JotterError::InvalidState` unless the editor is `Editing`
    /// - `JotterError::Validation` for a blank title or body, or a malformed
    ///   reminder (the draft stays open)
    /// - `JotterError::NotFound` if the draft's note no longer exists
    pub fn save<S: KeyValueStore>(&mut self, repo: &mut NoteRepository<S>) -> Result<Note> {
        let prepared = match &self.state {
            EditorState::Editing(draft) => prepare(draft).map(|note| (draft.id.clone(), note)),
            other => Err(invalid_state("save", other)),
        };
        let (id, new_note) = match prepared {
            Ok(value) => value,
            Err(err) => return self.fail(err),
        };

        let (saved, message) = if id.is_empty() {
            (repo.create(new_note), "New note saved")
        } else {
            match repo.update(new_note.into_note(id)) {
                Ok(note) => (note, "Note updated"),
                Err(err) => return self.fail(err),
            }
        };
        self.transition(EditorState::Idle);
        self.notify(Notification::success(message));
        Ok(saved)
    }

    /// Delete `id`, closing it if it is the open draft, preview, or prompt.
    pub fn delete<S: KeyValueStore>(&mut self, repo: &mut NoteRepository<S>, id: &str) {
        repo.delete(id);
        if self.state.open_note_id() == Some(id) {
            self.transition(EditorState::Idle);
        }
        self.notify(Notification::success("Note deleted"));
    }

    /// Export a stored note; locked notes need their password.
    ///
    /// # Errors
    ///
    /// - `JotterError::NotFound` if no note has `id`
    /// - `JotterError::Validation` if a locked note is exported without a password
    /// - `JotterError::Decryption` if the password is wrong
    pub fn export<S: KeyValueStore>(
        &mut self,
        repo: &NoteRepository<S>,
        id: &str,
        password: Option<&str>,
        format: ExportFormat,
    ) -> Result<ExportedFile> {
        let result = match repo.find_by_id(id) {
            Some(note) => export_note(note, password, format),
            None => Err(JotterError::NotFound(id.to_string())),
        };
        self.finish_export(result)
    }

    /// Export the open draft as it currently reads.
    ///
    /// # Errors
    ///
    /// Returns `JotterError::Validation` if no draft is open or its title or
    /// body is blank.
    pub fn export_draft(&mut self, format: ExportFormat) -> Result<ExportedFile> {
        let result = match &self.state {
            EditorState::Editing(draft) => {
                render(&draft.title, &draft.content, &normalize_tags(&draft.tags), format)
            }
            _ => Err(JotterError::Validation("There is no note to export".to_string())),
        };
        self.finish_export(result)
    }

    fn finish_export(&mut self, result: Result<ExportedFile>) -> Result<ExportedFile> {
        match result {
            Ok(file) => {
                self.notify(Notification::success("Note exported"));
                Ok(file)
            }
            Err(err) => self.fail(err),
        }
    }

    fn transition(&mut self, next: EditorState) {
        debug!(from = self.state.name(), to = next.name(), "editor transition");
        self.state = next;
    }

    fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    fn fail<T>(&mut self, err: JotterError) -> Result<T> {
        self.notify(Notification::error(user_message(&err)));
        Err(err)
    }
}

fn opened(note: &Note, content: String, password: Option<Password>, intent: PromptIntent) -> EditorState {
    match intent {
        PromptIntent::Edit => EditorState::Editing(Draft::from_note(note, content, password)),
        PromptIntent::Preview => EditorState::Previewing(Preview {
            note: note.clone(),
            content,
            password,
        }),
    }
}

/// Turn a draft into the record to store, encrypting when locked.
fn prepare(draft: &Draft) -> Result<NewNote> {
    if draft.title.trim().is_empty() || draft.content.trim().is_empty() {
        return Err(JotterError::Validation(EMPTY_NOTE_MESSAGE.to_string()));
    }

    let reminder = match draft.reminder.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Some(validate_reminder(value)?),
        _ => None,
    };

    let mut note = NewNote {
        title: draft.title.clone(),
        content: draft.content.clone(),
        tags: normalize_tags(&draft.tags),
        reminder,
        is_locked: false,
        encrypted_content: String::new(),
    };

    let password = draft.password.as_ref().filter(|p| !p.is_empty());
    match (draft.lock, password) {
        (true, Some(password)) => {
            let ciphertext = encrypt(&draft.content, password.expose())?;
            note = note.locked(ciphertext);
        }
        (true, None) => {
            warn!("lock requested without a password; saving as plaintext");
        }
        (false, _) => {}
    }
    Ok(note)
}

fn invalid_state(action: &str, state: &EditorState) -> JotterError {
    JotterError::InvalidState(format!("cannot {} while {}", action, state.name()))
}

fn user_message(err: &JotterError) -> String {
    match err {
        JotterError::Validation(msg) => msg.clone(),
        JotterError::Decryption(_) => "Incorrect password".to_string(),
        JotterError::NotFound(id) => format!("Note {} not found", id),
        other => other.to_string(),
    }
}
