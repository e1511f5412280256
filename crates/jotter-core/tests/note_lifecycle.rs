use std::path::Path;

use jotter_core::crypto::decrypt;
use jotter_core::editor::{Editor, Phase};
use jotter_core::storage::{FileKeyValueStore, KeyValueStore, SqliteKeyValueStore, NOTES_KEY};
use jotter_core::{JotterError, NoteRepository};
use tempfile::tempdir;

fn shopping_then_lock<S: KeyValueStore>(repo: &mut NoteRepository<S>) -> String {
    let mut editor = Editor::new();

    editor.new_note();
    {
        let draft = editor.draft_mut().expect("draft should be open");
        draft.title = "Shopping".to_string();
        draft.content = "Milk, eggs".to_string();
        draft.set_tags_from_input("home");
    }
    let note = editor.save(repo).expect("save should succeed");
    assert_eq!(repo.len(), 1);
    assert!(!note.id.is_empty());
    assert!(!note.is_locked);

    editor.edit(repo, &note.id).expect("edit should open");
    editor
        .draft_mut()
        .expect("draft should be open")
        .lock_with("abc123");
    let locked = editor.save(repo).expect("locked save should succeed");
    assert_eq!(locked.id, note.id);
    assert!(locked.is_locked);
    assert_eq!(locked.content, "");
    assert!(!locked.encrypted_content.is_empty());

    note.id
}

fn assert_reloaded_locked<S: KeyValueStore>(repo: &NoteRepository<S>, id: &str) {
    let note = repo.find_by_id(id).expect("note should survive reload");
    assert!(note.is_locked);
    assert_eq!(note.content, "");
    assert_eq!(note.tags, vec!["home"]);
    assert_eq!(
        decrypt(&note.encrypted_content, "abc123").expect("decrypt should succeed"),
        "Milk, eggs"
    );

    let mut editor = Editor::new();
    assert_eq!(
        editor.preview_note(repo, id).expect("preview should prompt"),
        Phase::AwaitingPassword
    );
    let wrong = editor.submit_password(repo, "wrong");
    assert!(matches!(wrong, Err(JotterError::Decryption(_))));
    assert_eq!(editor.phase(), Phase::AwaitingPassword);

    editor
        .submit_password(repo, "abc123")
        .expect("correct password should unlock");
    assert_eq!(editor.preview().map(|p| p.content.as_str()), Some("Milk, eggs"));
    assert!(repo.find_by_id(id).map(|n| n.content.is_empty()).unwrap_or(false));
}

#[test]
fn test_file_store_lifecycle_survives_reload() {
    let dir = tempdir().expect("tempdir");
    let id = {
        let backend = FileKeyValueStore::open(dir.path()).expect("open store");
        let mut repo = NoteRepository::open(backend);
        shopping_then_lock(&mut repo)
    };

    let raw = std::fs::read_to_string(dir.path().join(format!("{}.json", NOTES_KEY)))
        .expect("store file should exist");
    assert!(!raw.contains("Milk, eggs"));
    assert!(raw.contains("\"isLocked\":true"));

    let repo = NoteRepository::open(FileKeyValueStore::open(dir.path()).expect("reopen store"));
    assert_reloaded_locked(&repo, &id);
}

#[test]
fn test_sqlite_store_lifecycle_survives_reload() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("jotter.db");
    let id = {
        let mut repo = NoteRepository::open(SqliteKeyValueStore::open(&path).expect("open db"));
        shopping_then_lock(&mut repo)
    };

    let repo = NoteRepository::open(SqliteKeyValueStore::open(&path).expect("reopen db"));
    assert_reloaded_locked(&repo, &id);
}

#[test]
fn test_delete_is_persisted() {
    let dir = tempdir().expect("tempdir");
    let mut editor = Editor::new();
    let mut repo = NoteRepository::open(FileKeyValueStore::open(dir.path()).expect("open store"));

    editor.new_note();
    {
        let draft = editor.draft_mut().expect("draft");
        draft.title = "Temp".to_string();
        draft.content = "delete me".to_string();
    }
    let note = editor.save(&mut repo).expect("save");
    editor.delete(&mut repo, &note.id);
    assert!(repo.find_by_id(&note.id).is_none());

    let reopened = NoteRepository::open(FileKeyValueStore::open(dir.path()).expect("reopen"));
    assert!(reopened.find_by_id(&note.id).is_none());
    assert!(reopened.is_empty());
}

#[test]
fn test_corrupt_store_file_loads_empty_and_recovers() {
    let dir = tempdir().expect("tempdir");
    std::fs::write(dir.path().join("notes.json"), "{ definitely not notes").expect("seed");

    let backend = FileKeyValueStore::open(dir.path()).expect("open store");
    let mut repo = NoteRepository::open(backend);
    assert!(repo.is_empty());
    assert!(repo.store().try_load().is_err());

    let mut editor = Editor::new();
    editor.new_note();
    {
        let draft = editor.draft_mut().expect("draft");
        draft.title = "Fresh".to_string();
        draft.content = "start over".to_string();
    }
    editor.save(&mut repo).expect("save");
    assert_eq!(repo.store().try_load().expect("now readable").len(), 1);
}

#[test]
fn test_legacy_records_without_lock_fields_load() {
    let dir = tempdir().expect("tempdir");
    std::fs::write(
        Path::new(dir.path()).join("notes.json"),
        r#"[{"id":"1700000000000","title":"Old","content":"from before locking","tags":["a"],"reminder":null}]"#,
    )
    .expect("seed");

    let repo = NoteRepository::open(FileKeyValueStore::open(dir.path()).expect("open store"));
    let note = repo.find_by_id("1700000000000").expect("legacy note");
    assert!(!note.is_locked);
    assert_eq!(repo.search("before locking").len(), 1);
}
