use brain_core::db::open_db_in_memory;
use brain_core::{Note, SqliteStorage, StorageError, StorageGateway, StorageKey};

#[test]
fn get_returns_default_for_missing_key() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);

    let notes: Vec<Note> = storage.get(StorageKey::Notes, Vec::new());
    assert!(notes.is_empty());
    assert!(storage.decode::<Vec<Note>>(StorageKey::Notes).unwrap().is_none());
}

#[test]
fn corrupt_value_degrades_in_get_and_fails_in_decode() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);
    storage.set_raw("notes", "{not json").unwrap();

    let notes: Vec<Note> = storage.get(StorageKey::Notes, vec![Note::new("fallback", "")]);
    assert_eq!(notes, vec![Note::new("fallback", "")]);

    let err = storage.decode::<Vec<Note>>(StorageKey::Notes).unwrap_err();
    assert!(matches!(err, StorageError::Decode { ref key, .. } if key == "notes"));
}

#[test]
fn set_then_get_preserves_fields() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);
    let notes = vec![Note::new("A", "B"), Note::new("", "multi\nline")];

    storage.set(StorageKey::Notes, &notes).unwrap();

    assert_eq!(storage.get(StorageKey::Notes, Vec::<Note>::new()), notes);
    assert_eq!(
        storage.get_raw("notes").unwrap().as_deref(),
        Some(r#"[{"title":"A","content":"B"},{"title":"","content":"multi\nline"}]"#)
    );
}

#[test]
fn set_overwrites_previous_value() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);

    storage.set_raw("theme", "\"light\"").unwrap();
    storage.set_raw("theme", "\"dark\"").unwrap();

    assert_eq!(storage.get_raw("theme").unwrap().as_deref(), Some("\"dark\""));
    assert_eq!(storage.keys().unwrap(), vec!["theme".to_string()]);
}

#[test]
fn clear_and_remove_erase_keys() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);
    storage
        .set_many_raw(&[
            ("notes", "[]".to_string()),
            ("projects", "[]".to_string()),
            ("theme", "\"dark\"".to_string()),
        ])
        .unwrap();
    assert_eq!(storage.keys().unwrap(), vec!["notes", "projects", "theme"]);

    storage.remove("projects").unwrap();
    storage.remove("projects").unwrap();
    assert_eq!(storage.keys().unwrap(), vec!["notes", "theme"]);

    storage.clear().unwrap();
    assert!(storage.keys().unwrap().is_empty());
}
