use brain_core::db::open_db_in_memory;
use brain_core::{
    export_snapshot, import_snapshot, AppearanceService, CalendarStore, DayKey, FinanceForm,
    FinanceStore, Note, NoteStore, ProjectStore, SnapshotError, SqliteStorage, StorageGateway,
    StorageKey, TimetableStore,
};
use serde_json::Value;

fn day(text: &str) -> DayKey {
    DayKey::parse(text).unwrap()
}

fn seed(storage: &SqliteStorage<'_>) {
    let today = day("2024-03-01");
    NoteStore::load(storage).add(Note::new("A", "B")).unwrap();

    let mut projects = ProjectStore::load(storage);
    projects.add_project("Garden").unwrap();
    projects.add_task(0, "Plant").unwrap();
    projects.toggle_task(0, 0).unwrap();

    FinanceStore::load(storage)
        .add_from_form(
            &FinanceForm {
                description: "Salary".to_string(),
                amount: "1234.56".to_string(),
                kind: "income".to_string(),
                date: None,
            },
            today,
        )
        .unwrap();
    TimetableStore::load(storage)
        .add_entry(today, 2, "Gym")
        .unwrap();
    CalendarStore::load(storage)
        .add_event(day("2024-03-10"), "Dentist")
        .unwrap();

    let appearance = AppearanceService::new(storage);
    appearance.set_theme("dark").unwrap();
    appearance.set_accent_color("#FF0000").unwrap();
    appearance.set_avatar_letter("m").unwrap();
}

#[test]
fn export_contains_every_key() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);
    seed(&storage);

    let text = export_snapshot(&storage).unwrap();
    assert!(text.contains('\n'), "export should be pretty-printed");

    let doc: Value = serde_json::from_str(&text).unwrap();
    for key in StorageKey::DATA.into_iter().chain(StorageKey::APPEARANCE) {
        assert!(doc.get(key.as_str()).is_some(), "missing `{key}`");
    }
    assert_eq!(doc["notes"][0]["title"], "A");
    assert_eq!(doc["calendarEvents"]["2024-03-10"][0]["title"], "Dentist");
    assert_eq!(doc["theme"], "dark");
    assert_eq!(doc["accentColor"], "#ff0000");
    assert_eq!(doc["avatarLetter"], "M");
}

#[test]
fn export_of_empty_store_uses_defaults() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);

    let doc: Value = serde_json::from_str(&export_snapshot(&storage).unwrap()).unwrap();
    assert_eq!(doc["notes"], Value::Array(Vec::new()));
    assert_eq!(doc["timetableEvents"], Value::Object(Default::default()));
    assert_eq!(doc["theme"], "light");
}

#[test]
fn export_then_import_reproduces_stored_values_byte_for_byte() {
    let source_conn = open_db_in_memory().unwrap();
    let source = SqliteStorage::new(&source_conn);
    seed(&source);
    let text = export_snapshot(&source).unwrap();

    let target_conn = open_db_in_memory().unwrap();
    let target = SqliteStorage::new(&target_conn);
    let report = import_snapshot(&target, &text).unwrap();

    assert_eq!(report.applied.len(), 8);
    assert_eq!(report.ignored, 0);
    assert!(report.appearance_changed());
    assert!(report.data_changed());
    for key in StorageKey::DATA.into_iter().chain(StorageKey::APPEARANCE) {
        assert_eq!(
            target.get_raw(key.as_str()).unwrap(),
            source.get_raw(key.as_str()).unwrap(),
            "value for `{key}` differs"
        );
    }
}

#[test]
fn import_leaves_absent_keys_untouched_and_ignores_unknown_ones() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);
    seed(&storage);
    let projects_before = storage.get_raw("projects").unwrap();

    let report = import_snapshot(
        &storage,
        r#"{"notes":[{"title":"Imported","content":""}],"clock":"12:00"}"#,
    )
    .unwrap();

    assert_eq!(report.applied, vec![StorageKey::Notes]);
    assert_eq!(report.ignored, 1);
    assert!(!report.appearance_changed());
    assert_eq!(
        NoteStore::load(&storage).items(),
        &[Note::new("Imported", "")]
    );
    assert_eq!(storage.get_raw("projects").unwrap(), projects_before);
    assert!(storage.get_raw("clock").unwrap().is_none());
}

#[test]
fn malformed_snapshot_writes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);
    seed(&storage);
    let notes_before = storage.get_raw("notes").unwrap();

    assert!(matches!(
        import_snapshot(&storage, "{ definitely not json"),
        Err(SnapshotError::Parse(_))
    ));
    assert!(matches!(
        import_snapshot(&storage, "[1, 2, 3]"),
        Err(SnapshotError::NotAnObject)
    ));

    let err = import_snapshot(
        &storage,
        r#"{"notes":[{"title":"New","content":""}],"finances":[{"description":"x","amount":"abc","type":"income","date":"2024-03-01"}]}"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SnapshotError::InvalidKey {
            key: StorageKey::Finances,
            ..
        }
    ));
    assert_eq!(storage.get_raw("notes").unwrap(), notes_before);
}

#[test]
fn full_precision_amounts_survive_export_and_import() {
    let source_conn = open_db_in_memory().unwrap();
    let source = SqliteStorage::new(&source_conn);
    FinanceStore::load(&source)
        .add_from_form(
            &FinanceForm {
                description: "Interest".to_string(),
                amount: "2.4213185342637358".to_string(),
                kind: "income".to_string(),
                date: None,
            },
            day("2024-03-01"),
        )
        .unwrap();
    let text = export_snapshot(&source).unwrap();

    let target_conn = open_db_in_memory().unwrap();
    let target = SqliteStorage::new(&target_conn);
    import_snapshot(&target, &text).unwrap();

    let stored = target.get_raw("finances").unwrap();
    assert_eq!(stored, source.get_raw("finances").unwrap());
    assert!(stored.unwrap().contains("2.4213185342637358"));
}
