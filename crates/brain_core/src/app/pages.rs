//! One controller per page, each owning the stores it was constructed with.

use super::{AppResult, RenderContext};
use crate::model::note::Note;
use crate::service::appearance::AppearanceService;
use crate::service::summary::HomeSummary;
use crate::storage::StorageGateway;
use crate::store::{CalendarStore, FinanceStore, NoteStore, ProjectStore, TimetableStore};
use crate::view::{self, Action, Page, ViewNode};
use log::debug;

/// A page's render/act pair.
pub trait PageController {
    fn page(&self) -> Page;

    /// Builds the page body from current store state.
    fn render(&self, ctx: &RenderContext) -> ViewNode;

    /// Mutates the page's store. Actions owned by other pages are ignored.
    fn apply(&mut self, action: &Action, ctx: &RenderContext) -> AppResult<()>;
}

fn ignored(page: Page, action: &Action) -> AppResult<()> {
    debug!(
        "event=action_apply module=app status=skipped page={page} action={}",
        action.name()
    );
    Ok(())
}

pub struct HomePage<'g, G: StorageGateway> {
    notes: NoteStore<'g, G>,
    projects: ProjectStore<'g, G>,
    finances: FinanceStore<'g, G>,
    timetable: TimetableStore<'g, G>,
    calendar: CalendarStore<'g, G>,
}

impl<'g, G: StorageGateway> HomePage<'g, G> {
    pub fn new(
        notes: NoteStore<'g, G>,
        projects: ProjectStore<'g, G>,
        finances: FinanceStore<'g, G>,
        timetable: TimetableStore<'g, G>,
        calendar: CalendarStore<'g, G>,
    ) -> Self {
        Self {
            notes,
            projects,
            finances,
            timetable,
            calendar,
        }
    }

    pub fn summary(&self, ctx: &RenderContext) -> HomeSummary {
        HomeSummary::collect(
            self.notes.items(),
            self.projects.items(),
            self.finances.items(),
            self.timetable.days(),
            self.calendar.days(),
            ctx.today,
        )
    }
}

impl<G: StorageGateway> PageController for HomePage<'_, G> {
    fn page(&self) -> Page {
        Page::Home
    }

    fn render(&self, ctx: &RenderContext) -> ViewNode {
        view::home::render(&self.summary(ctx))
    }

    fn apply(&mut self, action: &Action, _ctx: &RenderContext) -> AppResult<()> {
        ignored(self.page(), action)
    }
}

pub struct NotesPage<'g, G: StorageGateway> {
    store: NoteStore<'g, G>,
}

impl<'g, G: StorageGateway> NotesPage<'g, G> {
    pub fn new(store: NoteStore<'g, G>) -> Self {
        Self { store }
    }
}

impl<G: StorageGateway> PageController for NotesPage<'_, G> {
    fn page(&self) -> Page {
        Page::Notes
    }

    fn render(&self, _ctx: &RenderContext) -> ViewNode {
        view::notes::render(self.store.items())
    }

    fn apply(&mut self, action: &Action, _ctx: &RenderContext) -> AppResult<()> {
        match action {
            Action::AddNote { title, content } => {
                self.store.add(Note::new(title.as_str(), content.as_str()))?;
            }
            Action::EditNote {
                index,
                title,
                content,
            } => self.store.edit(*index, title, content)?,
            Action::DeleteNote { index } => {
                self.store.remove(*index)?;
            }
            other => return ignored(self.page(), other),
        }
        Ok(())
    }
}

pub struct ProjectsPage<'g, G: StorageGateway> {
    store: ProjectStore<'g, G>,
}

impl<'g, G: StorageGateway> ProjectsPage<'g, G> {
    pub fn new(store: ProjectStore<'g, G>) -> Self {
        Self { store }
    }
}

impl<G: StorageGateway> PageController for ProjectsPage<'_, G> {
    fn page(&self) -> Page {
        Page::Projects
    }

    fn render(&self, _ctx: &RenderContext) -> ViewNode {
        view::projects::render(self.store.items())
    }

    fn apply(&mut self, action: &Action, _ctx: &RenderContext) -> AppResult<()> {
        match action {
            Action::AddProject { name } => {
                self.store.add_project(name)?;
            }
            Action::AddTask { project, title } => {
                self.store.add_task(*project, title)?;
            }
            Action::ToggleTask { project, task } => {
                self.store.toggle_task(*project, *task)?;
            }
            other => return ignored(self.page(), other),
        }
        Ok(())
    }
}

pub struct FinancesPage<'g, G: StorageGateway> {
    store: FinanceStore<'g, G>,
}

impl<'g, G: StorageGateway> FinancesPage<'g, G> {
    pub fn new(store: FinanceStore<'g, G>) -> Self {
        Self { store }
    }
}

impl<G: StorageGateway> PageController for FinancesPage<'_, G> {
    fn page(&self) -> Page {
        Page::Finances
    }

    fn render(&self, ctx: &RenderContext) -> ViewNode {
        view::finances::render(self.store.items(), ctx.today)
    }

    fn apply(&mut self, action: &Action, ctx: &RenderContext) -> AppResult<()> {
        match action {
            Action::AddFinance(form) => {
                self.store.add_from_form(form, ctx.today)?;
            }
            Action::DeleteFinance { index } => {
                self.store.remove(*index)?;
            }
            other => return ignored(self.page(), other),
        }
        Ok(())
    }
}

pub struct TimetablePage<'g, G: StorageGateway> {
    store: TimetableStore<'g, G>,
}

impl<'g, G: StorageGateway> TimetablePage<'g, G> {
    pub fn new(store: TimetableStore<'g, G>) -> Self {
        Self { store }
    }
}

impl<G: StorageGateway> PageController for TimetablePage<'_, G> {
    fn page(&self) -> Page {
        Page::Timetable
    }

    fn render(&self, ctx: &RenderContext) -> ViewNode {
        view::timetable::render(self.store.days(), ctx.today)
    }

    fn apply(&mut self, action: &Action, ctx: &RenderContext) -> AppResult<()> {
        match action {
            Action::AddTimetableEntry { offset, title } => {
                self.store.add_entry(ctx.today, *offset, title)?;
            }
            Action::ToggleTimetableEntry { date, index } => {
                self.store.toggle(*date, *index)?;
            }
            Action::RemoveTimetableEntry { date, index } => {
                self.store.remove(*date, *index)?;
            }
            other => return ignored(self.page(), other),
        }
        Ok(())
    }
}

pub struct CalendarPage<'g, G: StorageGateway> {
    store: CalendarStore<'g, G>,
}

impl<'g, G: StorageGateway> CalendarPage<'g, G> {
    pub fn new(store: CalendarStore<'g, G>) -> Self {
        Self { store }
    }
}

impl<G: StorageGateway> PageController for CalendarPage<'_, G> {
    fn page(&self) -> Page {
        Page::Calendar
    }

    fn render(&self, ctx: &RenderContext) -> ViewNode {
        view::calendar::render(self.store.days(), ctx.calendar_month, ctx.today)
    }

    fn apply(&mut self, action: &Action, _ctx: &RenderContext) -> AppResult<()> {
        match action {
            Action::AddCalendarEvent { date, title } => {
                self.store.add_event(*date, title)?;
            }
            Action::DeleteCalendarEvent { date, index } => {
                self.store.remove(*date, *index)?;
            }
            other => return ignored(self.page(), other),
        }
        Ok(())
    }
}

pub struct SettingsPage<'g, G: StorageGateway> {
    appearance: AppearanceService<'g, G>,
}

impl<'g, G: StorageGateway> SettingsPage<'g, G> {
    pub fn new(appearance: AppearanceService<'g, G>) -> Self {
        Self { appearance }
    }
}

impl<G: StorageGateway> PageController for SettingsPage<'_, G> {
    fn page(&self) -> Page {
        Page::Settings
    }

    fn render(&self, _ctx: &RenderContext) -> ViewNode {
        view::settings::render(&self.appearance.load())
    }

    fn apply(&mut self, action: &Action, _ctx: &RenderContext) -> AppResult<()> {
        match action {
            Action::SetTheme { theme } => {
                self.appearance.set_theme(theme)?;
            }
            Action::ToggleTheme => {
                self.appearance.toggle_theme()?;
            }
            Action::SetAccentColor { value } => {
                self.appearance.set_accent_color(value)?;
            }
            Action::SetAvatarLetter { value } => {
                self.appearance.set_avatar_letter(value)?;
            }
            other => return ignored(self.page(), other),
        }
        Ok(())
    }
}
