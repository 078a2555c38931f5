use brain_core::db::open_db_in_memory;
use brain_core::{
    CalendarEvent, CalendarStore, DayKey, EntryKind, FinanceForm, FinanceStore, Note, NoteStore,
    ProjectStore, SqliteStorage, StorageGateway, StoreError, TimetableEntry, TimetableStore,
    ValidationError,
};

fn day(text: &str) -> DayKey {
    DayKey::parse(text).unwrap()
}

fn finance_form(description: &str, amount: &str, kind: &str) -> FinanceForm {
    FinanceForm {
        description: description.to_string(),
        amount: amount.to_string(),
        kind: kind.to_string(),
        date: Some("2024-03-01".to_string()),
    }
}

#[test]
fn note_add_then_delete_scenario() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);

    let mut notes = NoteStore::load(&storage);
    notes.add(Note::new("A", "B")).unwrap();
    assert_eq!(NoteStore::load(&storage).items(), &[Note::new("A", "B")]);

    notes.remove(0).unwrap();
    assert!(NoteStore::load(&storage).items().is_empty());
    assert_eq!(storage.get_raw("notes").unwrap().as_deref(), Some("[]"));
}

#[test]
fn note_edit_updates_in_place() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);

    let mut notes = NoteStore::load(&storage);
    notes.add(Note::new("first", "")).unwrap();
    notes.add(Note::new("second", "")).unwrap();
    notes.edit(0, "renamed", "body").unwrap();

    let reloaded = NoteStore::load(&storage);
    assert_eq!(
        reloaded.items(),
        &[Note::new("renamed", "body"), Note::new("second", "")]
    );
}

#[test]
fn out_of_range_index_leaves_store_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);

    let mut notes = NoteStore::load(&storage);
    notes.add(Note::new("only", "")).unwrap();

    let err = notes.remove(3).unwrap_err();
    assert!(matches!(err, StoreError::IndexOutOfRange { index: 3, len: 1 }));
    assert_eq!(NoteStore::load(&storage).len(), 1);
}

#[test]
fn projects_keep_tasks_and_toggle_them() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);

    let mut projects = ProjectStore::load(&storage);
    let project = projects.add_project("Website").unwrap();
    projects.add_task(project, "Design").unwrap();
    projects.add_task(project, "Ship").unwrap();
    assert!(projects.toggle_task(project, 1).unwrap());

    let reloaded = ProjectStore::load(&storage);
    let saved = reloaded.get(0).unwrap();
    assert_eq!(saved.name, "Website");
    assert_eq!(saved.tasks.len(), 2);
    assert!(!saved.tasks[0].done);
    assert!(saved.tasks[1].done);

    assert!(matches!(
        projects.toggle_task(project, 5),
        Err(StoreError::IndexOutOfRange { index: 5, len: 2 })
    ));
    assert!(matches!(
        projects.toggle_task(9, 0),
        Err(StoreError::IndexOutOfRange { index: 9, len: 1 })
    ));
    assert!(matches!(
        projects.add_project("  "),
        Err(StoreError::Validation(ValidationError::EmptyField(_)))
    ));
    assert_eq!(ProjectStore::load(&storage).len(), 1);
}

#[test]
fn finance_entry_with_non_numeric_amount_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);
    let today = day("2024-03-01");

    let mut finances = FinanceStore::load(&storage);
    finances
        .add_from_form(&finance_form("Salary", "100", "income"), today)
        .unwrap();

    let err = finances
        .add_from_form(&finance_form("Coffee", "abc", "expense"), today)
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::InvalidAmount(_))
    ));
    assert!(finances
        .add_from_form(&finance_form("   ", "5", "expense"), today)
        .is_err());

    let reloaded = FinanceStore::load(&storage);
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.items()[0].kind, EntryKind::Income);
    assert_eq!(reloaded.items()[0].amount, 100.0);
}

#[test]
fn finance_entries_are_removed_by_index() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);
    let today = day("2024-03-01");

    let mut finances = FinanceStore::load(&storage);
    finances
        .add_from_form(&finance_form("Salary", "100", "income"), today)
        .unwrap();
    finances
        .add_from_form(&finance_form("Rent", "40", "expense"), today)
        .unwrap();
    let removed = finances.remove(0).unwrap();

    assert_eq!(removed.description, "Salary");
    let reloaded = FinanceStore::load(&storage);
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.items()[0].description, "Rent");
}

#[test]
fn timetable_toggle_marks_entry_done() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);
    let today = day("2024-03-01");

    let mut timetable = TimetableStore::load(&storage);
    let gym_day = timetable.add_entry(today, 0, "Gym").unwrap();
    assert_eq!(gym_day, today);
    assert!(timetable.toggle(today, 0).unwrap());

    let reloaded = TimetableStore::load(&storage);
    assert_eq!(
        reloaded.on(today),
        &[TimetableEntry {
            title: "Gym".to_string(),
            done: true,
        }]
    );
}

#[test]
fn timetable_rejects_offsets_outside_window() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);
    let today = day("2024-03-01");

    let mut timetable = TimetableStore::load(&storage);
    assert_eq!(
        timetable.add_entry(today, 13, "Last").unwrap(),
        day("2024-03-14")
    );
    assert!(matches!(
        timetable.add_entry(today, 14, "Too far"),
        Err(StoreError::Validation(
            ValidationError::DayOffsetOutOfWindow { offset: 14, .. }
        ))
    ));
    assert_eq!(TimetableStore::load(&storage).days().len(), 1);
}

#[test]
fn removing_last_event_of_a_day_drops_the_day() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);
    let dentist_day = day("2024-03-10");

    let mut calendar = CalendarStore::load(&storage);
    calendar.add_event(dentist_day, "Dentist").unwrap();
    calendar.add_event(dentist_day, "Call mum").unwrap();
    assert_eq!(
        storage.get_raw("calendarEvents").unwrap().as_deref(),
        Some(r#"{"2024-03-10":[{"title":"Dentist"},{"title":"Call mum"}]}"#)
    );

    let removed = calendar.remove(dentist_day, 0).unwrap();
    assert_eq!(removed, CalendarEvent::new("Dentist").unwrap());
    calendar.remove(dentist_day, 0).unwrap();

    assert!(CalendarStore::load(&storage).days().is_empty());
    assert_eq!(storage.get_raw("calendarEvents").unwrap().as_deref(), Some("{}"));
    assert!(matches!(
        calendar.remove(dentist_day, 0),
        Err(StoreError::IndexOutOfRange { index: 0, len: 0 })
    ));
}

#[test]
fn try_load_surfaces_corrupt_payloads() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);
    storage
        .set_raw("timetableEvents", r#"{"not-a-date":[]}"#)
        .unwrap();

    assert!(TimetableStore::try_load(&storage).is_err());
    assert!(TimetableStore::load(&storage).days().is_empty());
}

#[test]
fn finance_amount_reloads_to_the_exact_value_entered() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);

    FinanceStore::load(&storage)
        .add_from_form(
            &finance_form("Interest", "2.4213185342637358", "income"),
            day("2024-03-01"),
        )
        .unwrap();

    let reloaded = FinanceStore::load(&storage);
    assert_eq!(reloaded.items()[0].amount, 2.4213185342637358_f64);
}
