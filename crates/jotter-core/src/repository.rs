//! The in-memory note collection and its write-through persistence.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::error::{JotterError, Result};
use crate::note::{NewNote, Note};
use crate::storage::{KeyValueStore, LocalStore};

/// Issues timestamp ids that are unique and strictly increasing.
///
/// Ids are the decimal millisecond Unix time. Two notes created in the same
/// millisecond, or a clock that steps backwards, get `last + 1`. Once
/// `last` reaches `i64::MAX` the sequence restarts from the current time.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// Generator that never issues an id at or below any id in `notes`.
    pub fn after(notes: &[Note]) -> Self {
        let last = notes
            .iter()
            .filter_map(|n| n.id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        Self { last }
    }

    pub fn next_id(&mut self) -> String {
        self.next_at(Utc::now().timestamp_millis())
    }

    fn next_at(&mut self, now_millis: i64) -> String {
        let id = match self.last.checked_add(1) {
            Some(next) => now_millis.max(next),
            None => {
                warn!("note id sequence exhausted; restarting from the clock");
                now_millis
            }
        };
        self.last = id;
        id.to_string()
    }
}

/// Owns the note collection; every mutation is saved through `LocalStore`.
#[derive(Debug)]
pub struct NoteRepository<S> {
    notes: Vec<Note>,
    store: LocalStore<S>,
    ids: IdGenerator,
}

impl<S: KeyValueStore> NoteRepository<S> {
    /// Load the collection from `backend` (empty if absent or unreadable).
    pub fn open(backend: S) -> Self {
        let store = LocalStore::new(backend);
        let notes = store.load();
        let ids = IdGenerator::after(&notes);
        info!(count = notes.len(), "opened note repository");
        Self { notes, store, ids }
    }

    pub fn store(&self) -> &LocalStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut LocalStore<S> {
        &mut self.store
    }

    /// Every note, in insertion order.
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Assign a fresh id to `draft`, append it, and persist.
    pub fn create(&mut self, draft: NewNote) -> Note {
        let mut id = self.ids.next_id();
        while self.find_by_id(&id).is_some() {
            id = self.ids.next_id();
        }
        let note = draft.into_note(id);
        debug!(id = %note.id, "created note");
        self.notes.push(note.clone());
        self.persist();
        note
    }

    /// Replace the stored note with the same id, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns `JotterError::NotFound` if no note has `note.id`; the
    /// collection is left unchanged.
    pub fn update(&mut self, note: Note) -> Result<Note> {
        let slot = self
            .notes
            .iter_mut()
            .find(|n| n.id == note.id)
            .ok_or_else(|| JotterError::NotFound(note.id.clone()))?;
        *slot = note.clone();
        debug!(id = %note.id, "updated note");
        self.persist();
        Ok(note)
    }

    /// Remove the note with `id`. Unknown ids are ignored.
    pub fn delete(&mut self, id: &str) {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() != before {
            debug!(id, "deleted note");
        }
        self.persist();
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Notes whose title, any tag, or unlocked content contains `query`,
    /// ignoring case. Collection order is preserved.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        let needle = query.to_lowercase();
        self.notes
            .iter()
            .filter(|n| n.matches_lowercase(&needle))
            .collect()
    }

    /// Notes carrying `tag` (case-insensitive exact match).
    pub fn with_tag(&self, tag: &str) -> Vec<&Note> {
        self.notes.iter().filter(|n| n.has_tag(tag)).collect()
    }

    /// Notes with a well-formed reminder, soonest first.
    pub fn with_reminders(&self) -> Vec<&Note> {
        let mut due: Vec<&Note> = self
            .notes
            .iter()
            .filter(|n| n.reminder_at().is_some())
            .collect();
        due.sort_by_key(|n| n.reminder_at());
        due
    }

    /// Save the collection again, reporting a failed write.
    ///
    /// Mutations already save through [`LocalStore::save`], which only logs
    /// failures; callers that must know the collection reached the backend
    /// follow up with `flush`.
    ///
    /// # Errors
    ///
    /// Returns `JotterError::Storage` if the backend write fails.
    pub fn flush(&mut self) -> Result<()> {
        self.store.try_save(&self.notes)
    }

    fn persist(&mut self) {
        self.store.save(&self.notes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryKeyValueStore, NOTES_KEY};

    fn repo() -> NoteRepository<MemoryKeyValueStore> {
        NoteRepository::open(MemoryKeyValueStore::new())
    }

    fn stored(repo: &NoteRepository<MemoryKeyValueStore>) -> Vec<Note> {
        serde_json::from_str(repo.store().backend().raw(NOTES_KEY).unwrap()).unwrap()
    }

    #[test]
    fn test_id_generator_is_strictly_increasing() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.next_at(1000), "1000");
        assert_eq!(ids.next_at(1000), "1001");
        assert_eq!(ids.next_at(900), "1002");
        assert_eq!(ids.next_at(5000), "5000");
    }

    #[test]
    fn test_id_generator_skips_existing_ids() {
        let existing = vec![NewNote::new("a", "b").into_note("99999999999999".to_string())];
        let mut ids = IdGenerator::after(&existing);
        assert_eq!(ids.next_at(1), "100000000000000");
    }

    #[test]
    fn test_id_generator_restarts_after_max() {
        let existing = vec![NewNote::new("a", "b").into_note(i64::MAX.to_string())];
        let mut ids = IdGenerator::after(&existing);
        assert_eq!(ids.next_at(1000), "1000");
        assert_eq!(ids.next_at(1000), "1001");
    }

    #[test]
    fn test_create_after_max_id_keeps_ids_unique() {
        let backend = MemoryKeyValueStore::new().with_value(
            NOTES_KEY,
            r#"[{"id":"9223372036854775807","title":"max","content":"x"}]"#,
        );
        let mut repo = NoteRepository::open(backend);
        let first = repo.create(NewNote::new("one", "a"));
        let second = repo.create(NewNote::new("two", "b"));

        assert_ne!(first.id, "9223372036854775807");
        assert_ne!(first.id, second.id);
        assert_eq!(stored(&repo).len(), 3);
    }

    #[test]
    fn test_create_keeps_notes_with_null_fields() {
        let backend = MemoryKeyValueStore::new().with_value(
            NOTES_KEY,
            r#"[{"id":"1","title":"Keep me","content":"a","tags":["x"]},
                {"id":"2","title":"Old","content":"b","tags":null,"isLocked":null}]"#,
        );
        let mut repo = NoteRepository::open(backend);
        assert_eq!(repo.len(), 2);

        repo.create(NewNote::new("new", "c"));
        let saved = stored(&repo);
        assert_eq!(saved.len(), 3);
        assert_eq!(saved[0].title, "Keep me");
        assert!(saved[1].tags.is_empty());
    }

    #[test]
    fn test_create_assigns_id_and_persists() {
        let mut repo = repo();
        let note = repo.create(NewNote::new("Shopping", "Milk, eggs"));

        assert!(!note.id.is_empty());
        assert_eq!(repo.len(), 1);
        assert_eq!(stored(&repo), vec![note]);
    }

    #[test]
    fn test_create_twice_gives_distinct_ids() {
        let mut repo = repo();
        let a = repo.create(NewNote::new("a", "1"));
        let b = repo.create(NewNote::new("b", "2"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut repo = repo();
        let first = repo.create(NewNote::new("first", "1"));
        repo.create(NewNote::new("second", "2"));

        let mut changed = first.clone();
        changed.title = "renamed".to_string();
        repo.update(changed).unwrap();

        assert_eq!(repo.list()[0].title, "renamed");
        assert_eq!(repo.list()[0].id, first.id);
        assert_eq!(stored(&repo)[0].title, "renamed");
    }

    #[test]
    fn test_update_missing_id_errors_and_leaves_collection() {
        let mut repo = repo();
        repo.create(NewNote::new("a", "1"));
        let ghost = NewNote::new("ghost", "x").into_note("nope".to_string());

        assert!(matches!(repo.update(ghost), Err(JotterError::NotFound(_))));
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.list()[0].title, "a");
    }

    #[test]
    fn test_delete_then_find() {
        let mut repo = repo();
        let note = repo.create(NewNote::new("a", "1"));

        repo.delete(&note.id);
        assert!(repo.find_by_id(&note.id).is_none());
        assert!(stored(&repo).is_empty());

        repo.delete("unknown");
        assert!(repo.is_empty());
    }

    #[test]
    fn test_search_title_tag_and_content() {
        let mut repo = repo();
        let shopping = repo.create(
            NewNote::new("Shopping", "Milk, eggs").with_tags(vec!["home".to_string()]),
        );
        let work = repo.create(NewNote::new("Standup", "Talk about MILK supply"));
        let tagged = repo.create(NewNote::new("Misc", "x").with_tags(vec!["Homework".to_string()]));

        let ids = |hits: Vec<&Note>| hits.into_iter().map(|n| n.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(repo.search("shop")), vec![shopping.id.clone()]);
        assert_eq!(ids(repo.search("milk")), vec![shopping.id.clone(), work.id]);
        assert_eq!(ids(repo.search("HOME")), vec![shopping.id, tagged.id]);
        assert_eq!(repo.search("").len(), 3);
    }

    #[test]
    fn test_search_skips_locked_content() {
        let mut repo = repo();
        let locked = repo.create(
            NewNote::new("Diary", "")
                .with_tags(vec!["private".to_string()])
                .locked("ciphertext-blob"),
        );

        assert!(repo.search("ciphertext").is_empty());
        assert_eq!(repo.search("diary")[0].id, locked.id);
        assert_eq!(repo.search("priv")[0].id, locked.id);
    }

    #[test]
    fn test_with_tag_and_reminders() {
        let mut repo = repo();
        repo.create(NewNote::new("late", "1").with_reminder("2026-12-01T08:00"));
        repo.create(NewNote::new("none", "2").with_tags(vec!["Home".to_string()]));
        repo.create(NewNote::new("early", "3").with_reminder("2026-01-01T08:00"));
        repo.create(NewNote::new("bad", "4").with_reminder("someday"));

        assert_eq!(repo.with_tag("home").len(), 1);
        let titles: Vec<_> = repo.with_reminders().iter().map(|n| n.title.clone()).collect();
        assert_eq!(titles, vec!["early", "late"]);
    }

    #[test]
    fn test_open_reloads_persisted_collection() {
        let mut repo = repo();
        let note = repo.create(NewNote::new("a", "1"));
        let backend = repo.store().backend().clone();

        let reopened = NoteRepository::open(backend);
        assert_eq!(reopened.find_by_id(&note.id), Some(&note));
    }

    #[test]
    fn test_save_failure_keeps_memory_state() {
        let mut backend = MemoryKeyValueStore::new();
        backend.set_fail_writes(true);
        let mut repo = NoteRepository::open(backend);

        let note = repo.create(NewNote::new("a", "1"));
        assert_eq!(repo.find_by_id(&note.id), Some(&note));
        assert!(matches!(repo.flush(), Err(JotterError::Storage(_))));

        repo.store_mut().backend_mut().set_fail_writes(false);
        repo.flush().unwrap();
        assert_eq!(stored(&repo), vec![note]);
    }
}
