//! Fixed storage keys.

use std::fmt::{Display, Formatter};

/// Every key the dashboard persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StorageKey {
    Theme,
    AccentColor,
    AvatarLetter,
    Notes,
    Projects,
    Finances,
    TimetableEvents,
    CalendarEvents,
}

impl StorageKey {
    /// Keys holding domain data, in export order.
    pub const DATA: [StorageKey; 5] = [
        Self::Notes,
        Self::Projects,
        Self::Finances,
        Self::TimetableEvents,
        Self::CalendarEvents,
    ];

    /// Keys holding appearance settings, in export order.
    pub const APPEARANCE: [StorageKey; 3] = [Self::AccentColor, Self::AvatarLetter, Self::Theme];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Theme => "theme",
            Self::AccentColor => "accentColor",
            Self::AvatarLetter => "avatarLetter",
            Self::Notes => "notes",
            Self::Projects => "projects",
            Self::Finances => "finances",
            Self::TimetableEvents => "timetableEvents",
            Self::CalendarEvents => "calendarEvents",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::DATA
            .into_iter()
            .chain(Self::APPEARANCE)
            .find(|key| key.as_str() == value)
    }

    pub fn is_appearance(self) -> bool {
        Self::APPEARANCE.contains(&self)
    }
}

impl Display for StorageKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
