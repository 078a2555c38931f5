//! Core of the Second Brain personal dashboard.
//!
//! Notes, projects, a timetable, a calendar and finances live as JSON values
//! in a local key/value store. Each page hydrates typed stores, renders a
//! view tree from them, and re-renders after every persisted mutation.

pub mod app;
pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod storage;
pub mod store;
pub mod view;

pub use app::{AppError, AppResult, Dashboard, PageController, RenderContext};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::appearance::{AccentColor, Appearance, AvatarLetter, Theme};
pub use model::calendar::CalendarEvent;
pub use model::day::DayKey;
pub use model::finance::{EntryKind, FinanceEntry, FinanceForm};
pub use model::note::Note;
pub use model::project::{Project, Task};
pub use model::timetable::{TimetableEntry, TIMETABLE_WINDOW_DAYS};
pub use model::validation::ValidationError;
pub use service::appearance::AppearanceService;
pub use service::snapshot::{export_snapshot, import_snapshot, ImportReport, SnapshotError};
pub use service::summary::{FinanceSummary, HomeSummary, NextEvent};
pub use storage::{SqliteStorage, StorageError, StorageGateway, StorageKey, StorageResult};
pub use store::{
    CalendarStore, DateKeyedStore, FinanceStore, ListStore, NoteStore, ProjectStore, StoreError,
    StoreResult, TimetableStore,
};
pub use view::{text::render_text, Action, Page, Tag, ViewNode};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
