use super::page::Page;
use crate::model::day::DayKey;
use crate::model::finance::FinanceForm;

/// A user interaction against one page's store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddNote { title: String, content: String },
    EditNote { index: usize, title: String, content: String },
    DeleteNote { index: usize },

    AddProject { name: String },
    AddTask { project: usize, title: String },
    ToggleTask { project: usize, task: usize },

    AddFinance(FinanceForm),
    DeleteFinance { index: usize },

    /// `offset` counts days from today inside the rolling window.
    AddTimetableEntry { offset: u32, title: String },
    ToggleTimetableEntry { date: DayKey, index: usize },
    RemoveTimetableEntry { date: DayKey, index: usize },

    AddCalendarEvent { date: DayKey, title: String },
    DeleteCalendarEvent { date: DayKey, index: usize },

    SetTheme { theme: String },
    ToggleTheme,
    SetAccentColor { value: String },
    SetAvatarLetter { value: String },
}

impl Action {
    /// Page whose store this action mutates and which re-renders afterwards.
    pub fn page(&self) -> Page {
        match self {
            Self::AddNote { .. } | Self::EditNote { .. } | Self::DeleteNote { .. } => Page::Notes,
            Self::AddProject { .. } | Self::AddTask { .. } | Self::ToggleTask { .. } => {
                Page::Projects
            }
            Self::AddFinance(_) | Self::DeleteFinance { .. } => Page::Finances,
            Self::AddTimetableEntry { .. }
            | Self::ToggleTimetableEntry { .. }
            | Self::RemoveTimetableEntry { .. } => Page::Timetable,
            Self::AddCalendarEvent { .. } | Self::DeleteCalendarEvent { .. } => Page::Calendar,
            Self::SetTheme { .. }
            | Self::ToggleTheme
            | Self::SetAccentColor { .. }
            | Self::SetAvatarLetter { .. } => Page::Settings,
        }
    }

    /// Stable name for logs; carries no user text.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddNote { .. } => "add_note",
            Self::EditNote { .. } => "edit_note",
            Self::DeleteNote { .. } => "delete_note",
            Self::AddProject { .. } => "add_project",
            Self::AddTask { .. } => "add_task",
            Self::ToggleTask { .. } => "toggle_task",
            Self::AddFinance(_) => "add_finance",
            Self::DeleteFinance { .. } => "delete_finance",
            Self::AddTimetableEntry { .. } => "add_timetable_entry",
            Self::ToggleTimetableEntry { .. } => "toggle_timetable_entry",
            Self::RemoveTimetableEntry { .. } => "remove_timetable_entry",
            Self::AddCalendarEvent { .. } => "add_calendar_event",
            Self::DeleteCalendarEvent { .. } => "delete_calendar_event",
            Self::SetTheme { .. } => "set_theme",
            Self::ToggleTheme => "toggle_theme",
            Self::SetAccentColor { .. } => "set_accent_color",
            Self::SetAvatarLetter { .. } => "set_avatar_letter",
        }
    }

    /// Destructive actions the front-end must confirm before dispatching.
    pub fn requires_confirmation(&self) -> bool {
        matches!(self, Self::DeleteCalendarEvent { .. })
    }
}
