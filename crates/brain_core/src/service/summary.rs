//! Home-page aggregation across the domain stores.
//!
//! # Invariants
//! - Read-only: nothing here writes to storage.
//! - Next event: earliest day on or after `today`; within that day the
//!   first-inserted event wins.

use crate::model::calendar::CalendarEvent;
use crate::model::day::DayKey;
use crate::model::finance::{EntryKind, FinanceEntry};
use crate::model::note::Note;
use crate::model::project::Project;
use crate::model::timetable::TimetableEntry;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextEvent {
    pub date: DayKey,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FinanceSummary {
    pub income: f64,
    pub expense: f64,
}

impl FinanceSummary {
    pub fn from_entries(entries: &[FinanceEntry]) -> Self {
        entries
            .iter()
            .fold(Self::default(), |mut summary, entry| {
                match entry.kind {
                    EntryKind::Income => summary.income += entry.amount,
                    EntryKind::Expense => summary.expense += entry.amount,
                }
                summary
            })
    }

    /// Income minus expense.
    pub fn net(&self) -> f64 {
        self.income - self.expense
    }

    /// Expense share of total volume, in percent. Zero when there is no volume.
    pub fn expense_ratio_percent(&self) -> f64 {
        let total = self.income + self.expense;
        if total <= 0.0 {
            0.0
        } else {
            self.expense / total * 100.0
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeSummary {
    pub note_count: usize,
    pub project_count: usize,
    pub tasks_done: usize,
    pub tasks_total: usize,
    pub pending_timetable: usize,
    pub next_event: Option<NextEvent>,
    pub finance: FinanceSummary,
}

impl HomeSummary {
    /// Builds the summary from store snapshots.
    pub fn collect(
        notes: &[Note],
        projects: &[Project],
        finances: &[FinanceEntry],
        timetable: &BTreeMap<DayKey, Vec<TimetableEntry>>,
        calendar: &BTreeMap<DayKey, Vec<CalendarEvent>>,
        today: DayKey,
    ) -> Self {
        Self {
            note_count: notes.len(),
            project_count: projects.len(),
            tasks_done: projects.iter().map(Project::completed).sum(),
            tasks_total: projects.iter().map(|project| project.tasks.len()).sum(),
            pending_timetable: pending_count(timetable),
            next_event: next_event(calendar, today),
            finance: FinanceSummary::from_entries(finances),
        }
    }
}

/// Earliest event on or after `today`.
pub fn next_event(
    calendar: &BTreeMap<DayKey, Vec<CalendarEvent>>,
    today: DayKey,
) -> Option<NextEvent> {
    calendar
        .range(today..)
        .find_map(|(day, events)| {
            events.first().map(|event| NextEvent {
                date: *day,
                title: event.title.clone(),
            })
        })
}

/// Open timetable entries across every stored day, inside the window or not.
pub fn pending_count(timetable: &BTreeMap<DayKey, Vec<TimetableEntry>>) -> usize {
    timetable
        .values()
        .flatten()
        .filter(|entry| !entry.done)
        .count()
}
