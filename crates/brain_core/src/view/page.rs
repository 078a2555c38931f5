use std::fmt::{Display, Formatter};

/// Dashboard pages, selected by a page identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Notes,
    Projects,
    Timetable,
    Calendar,
    Finances,
    Settings,
}

impl Page {
    /// Navigation order.
    pub const ALL: [Page; 7] = [
        Self::Home,
        Self::Notes,
        Self::Projects,
        Self::Timetable,
        Self::Calendar,
        Self::Finances,
        Self::Settings,
    ];

    /// Resolves a page identifier; unknown identifiers yield `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.id() == id.trim())
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Notes => "notes",
            Self::Projects => "projects",
            Self::Timetable => "timetable",
            Self::Calendar => "calendar",
            Self::Finances => "finances",
            Self::Settings => "settings",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Notes => "Notes",
            Self::Projects => "Projects",
            Self::Timetable => "Timetable",
            Self::Calendar => "Calendar",
            Self::Finances => "Finances",
            Self::Settings => "Settings",
        }
    }
}

impl Display for Page {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
