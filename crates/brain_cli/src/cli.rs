use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// brain: personal dashboard for notes, projects, timetable, calendar and finances
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// SQLite file holding the dashboard data.
    #[arg(long, global = true, env = "BRAIN_DB")]
    pub db: Option<PathBuf>,
    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, global = true, env = "BRAIN_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
    /// Log level: trace, debug, info, warn or error.
    #[arg(long, global = true, env = "BRAIN_LOG_LEVEL")]
    pub log_level: Option<String>,
    /// Pretend today is this day (YYYY-MM-DD).
    #[arg(long, global = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Overview across every page.
    Home,
    /// Render a page by identifier (home, notes, projects, timetable, calendar, finances, settings).
    Page { id: String },
    /// Notes page.
    Notes {
        #[command(subcommand)]
        action: Option<NotesCommand>,
    },
    /// Projects page.
    Projects {
        #[command(subcommand)]
        action: Option<ProjectsCommand>,
    },
    /// Finances page.
    Finances {
        #[command(subcommand)]
        action: Option<FinancesCommand>,
    },
    /// Rolling 14-day timetable.
    Timetable {
        #[command(subcommand)]
        action: Option<TimetableCommand>,
    },
    /// Month calendar.
    Calendar {
        /// Month to show (YYYY-MM); defaults to the current month.
        #[arg(long)]
        month: Option<String>,
        #[command(subcommand)]
        action: Option<CalendarCommand>,
    },
    /// Appearance settings.
    Settings {
        #[command(subcommand)]
        action: Option<SettingsCommand>,
    },
    /// Write a JSON snapshot of every key.
    Export {
        /// Output file; prints to stdout when omitted.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Overwrite keys from a JSON snapshot file.
    Import { file: PathBuf },
    /// Erase all stored data.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
}

/// Indices are zero-based and match the rendered element ids.
#[derive(Subcommand, Debug)]
pub enum NotesCommand {
    Add(NoteFields),
    Edit {
        index: usize,
        #[command(flatten)]
        fields: NoteFields,
    },
    Delete { index: usize },
}

#[derive(Args, Debug)]
pub struct NoteFields {
    #[arg(long, short, default_value = "")]
    pub title: String,
    #[arg(long, short, default_value = "")]
    pub content: String,
}

#[derive(Subcommand, Debug)]
pub enum ProjectsCommand {
    Add { name: String },
    AddTask { project: usize, title: String },
    Toggle { project: usize, task: usize },
}

#[derive(Subcommand, Debug)]
pub enum FinancesCommand {
    Add {
        #[arg(long, short)]
        description: String,
        /// Kept as text; validation happens in the core.
        #[arg(long, short, allow_hyphen_values = true)]
        amount: String,
        #[arg(long = "type", short = 't', value_enum, default_value_t = EntryType::Expense)]
        kind: EntryType,
        /// YYYY-MM-DD; defaults to today.
        #[arg(long)]
        date: Option<String>,
    },
    Delete { index: usize },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum EntryType {
    Income,
    Expense,
}

impl EntryType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum TimetableCommand {
    /// Add an entry `offset` days from today (0-13).
    Add { offset: u32, title: String },
    Toggle { date: String, index: usize },
    Remove { date: String, index: usize },
}

#[derive(Subcommand, Debug)]
pub enum CalendarCommand {
    Add { date: String, title: String },
    Delete {
        date: String,
        index: usize,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// `light`, `dark` or `toggle`.
    Theme { value: String },
    Accent { color: String },
    Avatar { letter: String },
}
