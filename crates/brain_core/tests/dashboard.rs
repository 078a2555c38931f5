use brain_core::db::open_db_in_memory;
use brain_core::{
    render_text, Action, Dashboard, DayKey, FinanceForm, Page, SqliteStorage, Tag, ViewNode,
};

fn day(text: &str) -> DayKey {
    DayKey::parse(text).unwrap()
}

fn finance(description: &str, amount: &str, kind: &str) -> Action {
    Action::AddFinance(FinanceForm {
        description: description.to_string(),
        amount: amount.to_string(),
        kind: kind.to_string(),
        date: None,
    })
}

fn text_of<'a>(view: &'a ViewNode, id: &str) -> &'a str {
    view.find_by_id(id)
        .and_then(|node| node.text.as_deref())
        .unwrap_or_else(|| panic!("no text at `{id}`"))
}

#[test]
fn rendering_twice_without_changes_is_identical() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);
    let dashboard = Dashboard::new(&storage, day("2024-03-01"));
    dashboard
        .dispatch(&Action::AddProject {
            name: "Website".to_string(),
        })
        .unwrap();

    for page in Page::ALL {
        let first = dashboard.render(page);
        let second = dashboard.render(page);
        assert_eq!(first, second, "page `{page}` rendered differently");
        assert_eq!(render_text(&first), render_text(&second));
    }
}

#[test]
fn dispatch_persists_and_rerenders_the_page() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);
    let dashboard = Dashboard::new(&storage, day("2024-03-01"));

    let view = dashboard
        .dispatch(&Action::AddNote {
            title: "A".to_string(),
            content: "B".to_string(),
        })
        .unwrap();
    assert_eq!(text_of(&view, "note-0"), "A");
    assert_eq!(text_of(&view, "note-0-content"), "B");

    let delete = view.action_of("note-0-delete").cloned().unwrap();
    let view = dashboard.dispatch(&delete).unwrap();
    assert!(view.find_by_id("note-0").is_none());
    assert_eq!(
        dashboard.render(Page::Notes),
        view,
        "re-render after dispatch must match a fresh render"
    );
}

#[test]
fn rejected_action_leaves_state_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);
    let dashboard = Dashboard::new(&storage, day("2024-03-01"));
    dashboard.dispatch(&finance("Salary", "100", "income")).unwrap();

    let before = dashboard.render(Page::Finances);
    assert!(dashboard.dispatch(&finance("Coffee", "abc", "expense")).is_err());
    assert_eq!(dashboard.render(Page::Finances), before);
}

#[test]
fn finance_page_shows_net_and_expense_ratio() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);
    let dashboard = Dashboard::new(&storage, day("2024-03-01"));
    dashboard.dispatch(&finance("Salary", "100", "income")).unwrap();
    let view = dashboard.dispatch(&finance("Rent", "40", "expense")).unwrap();

    assert_eq!(text_of(&view, "finance-net"), "Net: 60.00");
    let bar = view.find_by_id("expense-bar").unwrap();
    assert_eq!(bar.tag, Tag::Bar);
    assert_eq!(bar.attr("percent"), Some("28.6"));
    assert_eq!(text_of(&view, "finance-1"), "2024-03-01 -40.00 Rent");
}

#[test]
fn home_page_reports_next_event_and_pending_tasks() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);
    let dashboard = Dashboard::new(&storage, day("2024-03-01"));

    dashboard
        .dispatch(&Action::AddCalendarEvent {
            date: day("2024-03-10"),
            title: "Dentist".to_string(),
        })
        .unwrap();
    dashboard
        .dispatch(&Action::AddCalendarEvent {
            date: day("2024-02-01"),
            title: "Past".to_string(),
        })
        .unwrap();
    dashboard
        .dispatch(&Action::AddTimetableEntry {
            offset: 0,
            title: "Gym".to_string(),
        })
        .unwrap();
    let timetable = dashboard
        .dispatch(&Action::AddTimetableEntry {
            offset: 0,
            title: "Read".to_string(),
        })
        .unwrap();

    let home = dashboard.render(Page::Home);
    assert_eq!(
        text_of(&home, "summary-next-event"),
        "Next event: Dentist on 2024-03-10"
    );
    assert_eq!(
        text_of(&home, "summary-pending"),
        "Pending timetable tasks: 2"
    );

    let toggle = timetable
        .action_of("entry-2024-03-01-0-toggle")
        .cloned()
        .unwrap();
    let timetable = dashboard.dispatch(&toggle).unwrap();
    assert!(timetable
        .find_by_id("entry-2024-03-01-0")
        .unwrap()
        .has_class("done"));
    assert_eq!(
        text_of(&dashboard.render(Page::Home), "summary-pending"),
        "Pending timetable tasks: 1"
    );
}

#[test]
fn timetable_shows_fourteen_days_from_today_only() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);
    let earlier = Dashboard::new(&storage, day("2024-02-01"));
    earlier
        .dispatch(&Action::AddTimetableEntry {
            offset: 0,
            title: "Old".to_string(),
        })
        .unwrap();

    let dashboard = Dashboard::new(&storage, day("2024-03-01"));
    let view = dashboard.render(Page::Timetable);
    let days = view.find_by_id("timetable-days").unwrap();
    assert_eq!(days.children.len(), 14);
    assert!(view.find_by_id("day-2024-03-01").unwrap().has_class("today"));
    assert!(view.find_by_id("day-2024-03-14").is_some());
    assert!(view.find_by_id("day-2024-03-15").is_none());
    assert!(view.find_by_id("entry-2024-02-01-0").is_none());

    assert_eq!(
        text_of(&dashboard.render(Page::Home), "summary-pending"),
        "Pending timetable tasks: 1"
    );
}

#[test]
fn calendar_grid_marks_event_days_and_today() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);
    let dashboard = Dashboard::new(&storage, day("2024-03-01"));
    let view = dashboard
        .dispatch(&Action::AddCalendarEvent {
            date: day("2024-03-10"),
            title: "Dentist".to_string(),
        })
        .unwrap();

    let cell = view.find_by_id("cell-2024-03-10").unwrap();
    assert!(cell.has_class("has-events"));
    assert_eq!(cell.text.as_deref(), Some("10*"));
    assert!(view.find_by_id("cell-2024-03-01").unwrap().has_class("today"));
    assert!(view.find_by_id("cell-2024-03-31").is_some());
    assert!(view.find_by_id("cell-2024-04-01").is_none());

    let delete = view.action_of("event-2024-03-10-0-delete").cloned().unwrap();
    assert!(delete.requires_confirmation());
    let view = dashboard.dispatch(&delete).unwrap();
    assert!(view.find_by_id("event-2024-03-10-0").is_none());

    let april = Dashboard::new(&storage, day("2024-03-01"))
        .with_calendar_month(day("2024-04-20"))
        .render(Page::Calendar);
    assert_eq!(text_of(&april, "calendar-nav"), "April 2024");
}

#[test]
fn layout_highlights_active_page_and_applies_appearance() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);
    let dashboard = Dashboard::new(&storage, day("2024-03-01"));

    let view = dashboard
        .dispatch(&Action::SetAvatarLetter {
            value: "q".to_string(),
        })
        .unwrap();
    let toggle = view.action_of("theme-toggle").cloned().unwrap();
    dashboard.dispatch(&toggle).unwrap();

    let notes = dashboard.render(Page::Notes);
    assert!(notes.has_class("theme-dark"));
    assert_eq!(text_of(&notes, "avatar"), "Q");
    assert!(notes.find_by_id("nav-notes").unwrap().has_class("active"));
    assert!(!notes.find_by_id("nav-home").unwrap().has_class("active"));
}

#[test]
fn unknown_page_identifier_is_a_no_op() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);
    let dashboard = Dashboard::new(&storage, day("2024-03-01"));

    assert!(dashboard.open("clock").is_none());
    assert!(dashboard.open("notes").is_some());
}

#[test]
fn clear_all_erases_every_page() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::new(&conn);
    let dashboard = Dashboard::new(&storage, day("2024-03-01"));
    dashboard
        .dispatch(&Action::AddNote {
            title: "gone".to_string(),
            content: String::new(),
        })
        .unwrap();

    dashboard.clear_all().unwrap();
    let view = dashboard.render(Page::Notes);
    assert!(view.find_by_id("note-0").is_none());
    assert_eq!(text_of(&view, "page-notes"), "Notes");
}
