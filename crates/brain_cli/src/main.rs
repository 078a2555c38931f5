mod cli;
mod config;

use anyhow::{bail, Context, Result};
use brain_core::db::open_db;
use brain_core::{
    default_log_level, init_logging, render_text, Action, Dashboard, DayKey, FinanceForm, Page,
    SqliteStorage, StorageGateway,
};
use clap::Parser;
use cli::{
    CalendarCommand, Cli, Command, FinancesCommand, NotesCommand, ProjectsCommand,
    SettingsCommand, TimetableCommand,
};
use log::info;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::{fs, path::Path};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("brain: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, &log_dir.to_string_lossy()).map_err(anyhow::Error::msg)?;
    }

    let db_path = cli.db.clone().unwrap_or_else(config::default_db_path);
    let conn = open_db(&db_path).with_context(|| format!("opening {}", db_path.display()))?;
    let storage = SqliteStorage::new(&conn);
    let today = config::resolve_today(cli.today.as_deref())?;
    info!("event=cli_start module=cli status=ok today={today}");

    execute(&storage, today, cli.command.unwrap_or(Command::Home))
}

fn execute<G: StorageGateway>(storage: &G, today: DayKey, command: Command) -> Result<()> {
    let dashboard = Dashboard::new(storage, today);
    let view = match command {
        Command::Home => dashboard.render(Page::Home),
        Command::Page { id } => match dashboard.open(&id) {
            Some(view) => view,
            None => return Ok(()),
        },
        Command::Notes { action } => match action {
            None => dashboard.render(Page::Notes),
            Some(action) => dashboard.dispatch(&notes_action(action))?,
        },
        Command::Projects { action } => match action {
            None => dashboard.render(Page::Projects),
            Some(action) => dashboard.dispatch(&projects_action(action))?,
        },
        Command::Finances { action } => match action {
            None => dashboard.render(Page::Finances),
            Some(action) => dashboard.dispatch(&finances_action(action))?,
        },
        Command::Timetable { action } => match action {
            None => dashboard.render(Page::Timetable),
            Some(action) => dashboard.dispatch(&timetable_action(action)?)?,
        },
        Command::Calendar { month, action } => {
            let dashboard = match month.as_deref() {
                Some(month) => dashboard.with_calendar_month(
                    DayKey::parse_month(month).with_context(|| "parsing --month")?,
                ),
                None => dashboard,
            };
            match action {
                None => dashboard.render(Page::Calendar),
                Some(action) => {
                    let yes = matches!(action, CalendarCommand::Delete { yes: true, .. });
                    let action = calendar_action(action)?;
                    if action.requires_confirmation() && !yes && !confirm("Delete this event?")? {
                        return Ok(());
                    }
                    dashboard.dispatch(&action)?
                }
            }
        }
        Command::Settings { action } => match action {
            None => dashboard.render(Page::Settings),
            Some(action) => dashboard.dispatch(&settings_action(action))?,
        },
        Command::Export { output } => {
            let snapshot = dashboard.export()?;
            match output {
                Some(path) => write_file(&path, &snapshot)?,
                None => println!("{snapshot}"),
            }
            return Ok(());
        }
        Command::Import { file } => {
            let text = fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let report = dashboard.import(&text)?;
            println!(
                "Imported {} key(s); {} unknown key(s) ignored.",
                report.applied.len(),
                report.ignored
            );
            if report.appearance_changed() {
                dashboard.render(Page::Settings)
            } else {
                return Ok(());
            }
        }
        Command::Clear { yes } => {
            if !yes && !confirm("Erase all data? This cannot be undone.")? {
                return Ok(());
            }
            dashboard.clear_all()?;
            dashboard.render(Page::Home)
        }
    };

    print!("{}", render_text(&view));
    Ok(())
}

fn notes_action(command: NotesCommand) -> Action {
    match command {
        NotesCommand::Add(fields) => Action::AddNote {
            title: fields.title,
            content: fields.content,
        },
        NotesCommand::Edit { index, fields } => Action::EditNote {
            index,
            title: fields.title,
            content: fields.content,
        },
        NotesCommand::Delete { index } => Action::DeleteNote { index },
    }
}

fn projects_action(command: ProjectsCommand) -> Action {
    match command {
        ProjectsCommand::Add { name } => Action::AddProject { name },
        ProjectsCommand::AddTask { project, title } => Action::AddTask { project, title },
        ProjectsCommand::Toggle { project, task } => Action::ToggleTask { project, task },
    }
}

fn finances_action(command: FinancesCommand) -> Action {
    match command {
        FinancesCommand::Add {
            description,
            amount,
            kind,
            date,
        } => Action::AddFinance(FinanceForm {
            description,
            amount,
            kind: kind.as_str().to_string(),
            date,
        }),
        FinancesCommand::Delete { index } => Action::DeleteFinance { index },
    }
}

fn timetable_action(command: TimetableCommand) -> Result<Action> {
    Ok(match command {
        TimetableCommand::Add { offset, title } => Action::AddTimetableEntry { offset, title },
        TimetableCommand::Toggle { date, index } => Action::ToggleTimetableEntry {
            date: DayKey::parse(&date)?,
            index,
        },
        TimetableCommand::Remove { date, index } => Action::RemoveTimetableEntry {
            date: DayKey::parse(&date)?,
            index,
        },
    })
}

fn calendar_action(command: CalendarCommand) -> Result<Action> {
    Ok(match command {
        CalendarCommand::Add { date, title } => Action::AddCalendarEvent {
            date: DayKey::parse(&date)?,
            title,
        },
        CalendarCommand::Delete { date, index, .. } => Action::DeleteCalendarEvent {
            date: DayKey::parse(&date)?,
            index,
        },
    })
}

fn settings_action(command: SettingsCommand) -> Action {
    match command {
        SettingsCommand::Theme { value } if value.trim().eq_ignore_ascii_case("toggle") => {
            Action::ToggleTheme
        }
        SettingsCommand::Theme { value } => Action::SetTheme { theme: value },
        SettingsCommand::Accent { color } => Action::SetAccentColor { value: color },
        SettingsCommand::Avatar { letter } => Action::SetAvatarLetter { value: letter },
    }
}

fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(false);
    }
    match answer.to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        other => bail!("unrecognized answer `{other}`"),
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
    println!("Exported to {}", path.display());
    Ok(())
}
