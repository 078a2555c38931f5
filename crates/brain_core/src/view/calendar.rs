//! Calendar page: month grid plus the month's event list.

use super::action::Action;
use super::node::{Tag, ViewNode};
use crate::model::calendar::CalendarEvent;
use crate::model::day::DayKey;
use chrono::Datelike;
use std::collections::BTreeMap;

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Renders the month containing `month`. Weeks start on Sunday.
pub fn render(
    events: &BTreeMap<DayKey, Vec<CalendarEvent>>,
    month: DayKey,
    today: DayKey,
) -> ViewNode {
    let start = month.month_start();
    let end = start.next_month();

    let navigation = ViewNode::new(Tag::Item)
        .with_id("calendar-nav")
        .with_text(start.date().format("%B %Y").to_string())
        .with_child(
            ViewNode::button("<", None)
                .with_id("calendar-prev")
                .with_attr("month", start.prev_month().date().format("%Y-%m").to_string()),
        )
        .with_child(
            ViewNode::button(">", None)
                .with_id("calendar-next")
                .with_attr("month", end.date().format("%Y-%m").to_string()),
        );

    let mut month_events = ViewNode::new(Tag::List).with_id("calendar-events");
    let mut any = false;
    for (day, day_events) in events.range(start..end) {
        for (index, event) in day_events.iter().enumerate() {
            any = true;
            month_events = month_events.with_child(
                ViewNode::new(Tag::Item)
                    .with_id(format!("event-{day}-{index}"))
                    .with_text(format!("{day} {}", event.title))
                    .with_child(
                        ViewNode::button(
                            "delete",
                            Some(Action::DeleteCalendarEvent { date: *day, index }),
                        )
                        .with_id(format!("event-{day}-{index}-delete"))
                        .with_attr("confirm", "true"),
                    ),
            );
        }
    }
    if !any {
        month_events =
            month_events.with_child(ViewNode::text("No events this month.").with_class("empty"));
    }

    ViewNode::new(Tag::Section)
        .with_id("calendar-view")
        .with_child(navigation)
        .with_child(render_grid(events, start, today))
        .with_child(month_events)
}

fn render_grid(
    events: &BTreeMap<DayKey, Vec<CalendarEvent>>,
    start: DayKey,
    today: DayKey,
) -> ViewNode {
    let header = ViewNode::new(Tag::Row)
        .with_class("weekdays")
        .with_children(WEEKDAYS.into_iter().map(|name| ViewNode::new(Tag::Cell).with_text(name)));

    let leading = start.date().weekday().num_days_from_sunday();
    let mut cells: Vec<ViewNode> = (0..leading).map(|_| blank_cell()).collect();
    for offset in 0..start.days_in_month() {
        cells.push(day_cell(start.offset(offset), events, today));
    }
    while cells.len() % 7 != 0 {
        cells.push(blank_cell());
    }

    let mut grid = ViewNode::new(Tag::Grid).with_id("calendar-grid").with_child(header);
    let mut cells = cells.into_iter().peekable();
    while cells.peek().is_some() {
        grid = grid.with_child(ViewNode::new(Tag::Row).with_children(cells.by_ref().take(7)));
    }
    grid
}

fn day_cell(day: DayKey, events: &BTreeMap<DayKey, Vec<CalendarEvent>>, today: DayKey) -> ViewNode {
    let count = events.get(&day).map_or(0, Vec::len);
    let marker = if count > 0 { "*" } else { "" };
    let mut cell = ViewNode::new(Tag::Cell)
        .with_id(format!("cell-{day}"))
        .with_text(format!("{}{marker}", day.date().day()))
        .with_attr("date", day.to_string())
        .with_attr("prompt", "title");
    if count > 0 {
        cell = cell
            .with_class("has-events")
            .with_attr("events", count.to_string());
    }
    if day == today {
        cell = cell.with_class("today");
    }
    cell
}

fn blank_cell() -> ViewNode {
    ViewNode::new(Tag::Cell).with_class("blank").with_text("")
}
