//! Timetable page: a rolling window of days starting today.

use super::action::Action;
use super::node::{Tag, ViewNode};
use crate::model::day::DayKey;
use crate::model::timetable::{TimetableEntry, TIMETABLE_WINDOW_DAYS};
use std::collections::BTreeMap;

/// Renders the window starting at `today`. Days outside the window are
/// kept in storage but not shown.
pub fn render(days: &BTreeMap<DayKey, Vec<TimetableEntry>>, today: DayKey) -> ViewNode {
    let sections = today
        .window(TIMETABLE_WINDOW_DAYS)
        .into_iter()
        .enumerate()
        .map(|(offset, day)| {
            let entries = days.get(&day).map(Vec::as_slice).unwrap_or(&[]);
            render_day(day, offset, entries)
        });

    ViewNode::new(Tag::Section)
        .with_id("timetable-view")
        .with_child(ViewNode::new(Tag::List).with_id("timetable-days").with_children(sections))
}

fn render_day(day: DayKey, offset: usize, entries: &[TimetableEntry]) -> ViewNode {
    let mut label = day.date().format("%a %d %b").to_string();
    if offset == 0 {
        label.push_str(" (today)");
    }

    let items = entries.iter().enumerate().map(|(index, entry)| {
        let marker = if entry.done { "[x]" } else { "[ ]" };
        let item = ViewNode::new(Tag::Item)
            .with_id(format!("entry-{day}-{index}"))
            .with_child(
                ViewNode::button(marker, Some(Action::ToggleTimetableEntry { date: day, index }))
                    .with_id(format!("entry-{day}-{index}-toggle")),
            )
            .with_child(ViewNode::text(entry.title.as_str()))
            .with_child(
                ViewNode::button("remove", Some(Action::RemoveTimetableEntry { date: day, index }))
                    .with_id(format!("entry-{day}-{index}-remove")),
            );
        if entry.done {
            item.with_class("done")
        } else {
            item
        }
    });

    let section = ViewNode::new(Tag::Section)
        .with_id(format!("day-{day}"))
        .with_text(label)
        .with_attr("offset", offset.to_string())
        .with_child(
            ViewNode::button("+", None)
                .with_id(format!("day-{day}-add"))
                .with_attr("prompt", "title")
                .with_attr("offset", offset.to_string()),
        )
        .with_child(ViewNode::new(Tag::List).with_children(items));
    if offset == 0 {
        section.with_class("today")
    } else {
        section
    }
}
