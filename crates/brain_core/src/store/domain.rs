//! Per-domain store aliases and their use-case operations.

use super::{check_index, DateKeyedStore, DayRecord, ListRecord, ListStore, StoreResult};
use crate::model::calendar::CalendarEvent;
use crate::model::day::DayKey;
use crate::model::finance::{FinanceEntry, FinanceForm};
use crate::model::note::Note;
use crate::model::project::{Project, Task};
use crate::model::timetable::{TimetableEntry, TIMETABLE_WINDOW_DAYS};
use crate::model::validation::ValidationError;
use crate::storage::{StorageGateway, StorageKey};

pub type NoteStore<'g, G> = ListStore<'g, G, Note>;
pub type ProjectStore<'g, G> = ListStore<'g, G, Project>;
pub type FinanceStore<'g, G> = ListStore<'g, G, FinanceEntry>;
pub type TimetableStore<'g, G> = DateKeyedStore<'g, G, TimetableEntry>;
pub type CalendarStore<'g, G> = DateKeyedStore<'g, G, CalendarEvent>;

impl ListRecord for Note {
    const KEY: StorageKey = StorageKey::Notes;
}

impl ListRecord for Project {
    const KEY: StorageKey = StorageKey::Projects;
}

impl ListRecord for FinanceEntry {
    const KEY: StorageKey = StorageKey::Finances;
}

impl DayRecord for TimetableEntry {
    const KEY: StorageKey = StorageKey::TimetableEvents;
}

impl DayRecord for CalendarEvent {
    const KEY: StorageKey = StorageKey::CalendarEvents;
}

impl<G: StorageGateway> ListStore<'_, G, Note> {
    /// Replaces title and content of one note in place.
    pub fn edit(&mut self, index: usize, title: &str, content: &str) -> StoreResult<()> {
        self.update(index, |note| {
            note.title = title.to_string();
            note.content = content.to_string();
        })
    }
}

impl<G: StorageGateway> ListStore<'_, G, Project> {
    pub fn add_project(&mut self, name: &str) -> StoreResult<usize> {
        let project = Project::new(name)?;
        self.add(project)
    }

    /// Appends an open task to a project. Returns the task index.
    pub fn add_task(&mut self, project: usize, title: &str) -> StoreResult<usize> {
        let task = Task::new(title)?;
        self.update(project, |project| {
            project.tasks.push(task);
            project.tasks.len() - 1
        })
    }

    /// Flips a task's `done` flag. Returns the new state.
    pub fn toggle_task(&mut self, project: usize, task: usize) -> StoreResult<bool> {
        check_index(project, self.len())?;
        check_index(task, self.items()[project].tasks.len())?;
        self.update(project, |project| {
            let task = &mut project.tasks[task];
            task.toggle();
            task.done
        })
    }
}

impl<G: StorageGateway> ListStore<'_, G, FinanceEntry> {
    /// Validates form input and appends the entry.
    pub fn add_from_form(&mut self, form: &FinanceForm, today: DayKey) -> StoreResult<usize> {
        let entry = FinanceEntry::from_form(form, today)?;
        self.add(entry)
    }
}

impl<G: StorageGateway> DateKeyedStore<'_, G, TimetableEntry> {
    /// Adds an entry on the day `offset` days after `today`.
    ///
    /// The offset must fall inside the rolling window.
    pub fn add_entry(&mut self, today: DayKey, offset: u32, title: &str) -> StoreResult<DayKey> {
        if offset >= TIMETABLE_WINDOW_DAYS {
            return Err(ValidationError::DayOffsetOutOfWindow {
                offset,
                window: TIMETABLE_WINDOW_DAYS,
            }
            .into());
        }
        let entry = TimetableEntry::new(title)?;
        let day = today.offset(offset);
        self.add(day, entry)?;
        Ok(day)
    }

    /// Flips an entry's `done` flag. Returns the new state.
    pub fn toggle(&mut self, day: DayKey, index: usize) -> StoreResult<bool> {
        self.update(day, index, |entry| {
            entry.toggle();
            entry.done
        })
    }
}

impl<G: StorageGateway> DateKeyedStore<'_, G, CalendarEvent> {
    pub fn add_event(&mut self, day: DayKey, title: &str) -> StoreResult<usize> {
        let event = CalendarEvent::new(title)?;
        self.add(day, event)
    }
}
