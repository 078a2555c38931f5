//! Page controllers and the dashboard that drives them.
//!
//! # Responsibility
//! - Inject freshly hydrated stores into one controller per page.
//! - Run the per-page cycle: act → persist → re-render.
//!
//! # Invariants
//! - Every dispatch re-renders the full page from store state.
//! - A rejected action leaves storage untouched.
//! - Unknown page identifiers are a silent no-op.

mod pages;

pub use pages::{
    CalendarPage, FinancesPage, HomePage, NotesPage, PageController, ProjectsPage, SettingsPage,
    TimetablePage,
};

use crate::model::day::DayKey;
use crate::service::appearance::AppearanceService;
use crate::service::snapshot::{export_snapshot, import_snapshot, ImportReport, SnapshotError};
use crate::storage::{StorageError, StorageGateway};
use crate::store::{
    CalendarStore, FinanceStore, NoteStore, ProjectStore, StoreError, TimetableStore,
};
use crate::view::{render_layout, Action, LayoutContext, Page, ViewNode};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    Store(StoreError),
    Snapshot(SnapshotError),
    Storage(StorageError),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Snapshot(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Snapshot(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<SnapshotError> for AppError {
    fn from(value: SnapshotError) -> Self {
        Self::Snapshot(value)
    }
}

impl From<StorageError> for AppError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Render-time inputs that are derived from the clock, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub today: DayKey,
    /// Any day inside the month the calendar shows.
    pub calendar_month: DayKey,
}

impl RenderContext {
    pub fn new(today: DayKey) -> Self {
        Self {
            today,
            calendar_month: today.month_start(),
        }
    }
}

/// Entry point for front-ends: one gateway, one clock reading.
pub struct Dashboard<'g, G: StorageGateway> {
    gateway: &'g G,
    ctx: RenderContext,
}

impl<'g, G: StorageGateway> Dashboard<'g, G> {
    pub fn new(gateway: &'g G, today: DayKey) -> Self {
        Self {
            gateway,
            ctx: RenderContext::new(today),
        }
    }

    /// Shows the month containing `month` on the calendar page.
    pub fn with_calendar_month(mut self, month: DayKey) -> Self {
        self.ctx.calendar_month = month.month_start();
        self
    }

    /// Renders a page by identifier; unknown identifiers yield `None`.
    pub fn open(&self, page_id: &str) -> Option<ViewNode> {
        match Page::from_id(page_id) {
            Some(page) => Some(self.render(page)),
            None => {
                debug!("event=page_open module=app status=skipped reason=unknown_page");
                None
            }
        }
    }

    /// Hydrates the page's stores and renders it inside the shared layout.
    pub fn render(&self, page: Page) -> ViewNode {
        self.with_controller(page, |controller| self.wrap(page, controller))
    }

    /// Applies `action` to its page's store and returns the re-rendered page.
    pub fn dispatch(&self, action: &Action) -> AppResult<ViewNode> {
        let page = action.page();
        self.with_controller(page, |controller| {
            if let Err(err) = controller.apply(action, &self.ctx) {
                warn!(
                    "event=action_dispatch module=app status=error page={page} action={} error={err}",
                    action.name()
                );
                return Err(err);
            }
            info!(
                "event=action_dispatch module=app status=ok page={page} action={}",
                action.name()
            );
            Ok(self.wrap(page, controller))
        })
    }

    pub fn export(&self) -> AppResult<String> {
        Ok(export_snapshot(self.gateway)?)
    }

    /// Imports a snapshot. Appearance applies to the returned report's next
    /// render immediately; data pages pick changes up on their next load.
    pub fn import(&self, text: &str) -> AppResult<ImportReport> {
        Ok(import_snapshot(self.gateway, text)?)
    }

    /// Erases every key. Callers confirm before invoking this.
    pub fn clear_all(&self) -> AppResult<()> {
        self.gateway.clear()?;
        info!("event=clear_all module=app status=ok");
        Ok(())
    }

    fn wrap(&self, page: Page, controller: &dyn PageController) -> ViewNode {
        let appearance = AppearanceService::new(self.gateway).load();
        let ctx = LayoutContext {
            active: page,
            appearance: &appearance,
        };
        render_layout(&ctx, controller.render(&self.ctx))
    }

    fn with_controller<R>(&self, page: Page, f: impl FnOnce(&mut dyn PageController) -> R) -> R {
        let gateway = self.gateway;
        match page {
            Page::Home => f(&mut HomePage::new(
                NoteStore::load(gateway),
                ProjectStore::load(gateway),
                FinanceStore::load(gateway),
                TimetableStore::load(gateway),
                CalendarStore::load(gateway),
            )),
            Page::Notes => f(&mut NotesPage::new(NoteStore::load(gateway))),
            Page::Projects => f(&mut ProjectsPage::new(ProjectStore::load(gateway))),
            Page::Finances => f(&mut FinancesPage::new(FinanceStore::load(gateway))),
            Page::Timetable => f(&mut TimetablePage::new(TimetableStore::load(gateway))),
            Page::Calendar => f(&mut CalendarPage::new(CalendarStore::load(gateway))),
            Page::Settings => f(&mut SettingsPage::new(AppearanceService::new(gateway))),
        }
    }
}
