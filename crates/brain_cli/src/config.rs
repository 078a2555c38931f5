use anyhow::{Context, Result};
use brain_core::DayKey;
use chrono::Local;
use directories::BaseDirs;
use std::path::PathBuf;

const APP_DIR: &str = "second-brain";
const DB_FILE_NAME: &str = "brain.sqlite3";

/// Default database location: `{data_dir}/second-brain/brain.sqlite3`
/// - macOS:   `~/Library/Application Support/second-brain`
/// - Linux:   `$XDG_DATA_HOME/second-brain` or `~/.local/share/second-brain`
/// - Windows: `%APPDATA%\second-brain`
pub fn default_db_path() -> PathBuf {
    match BaseDirs::new() {
        Some(base) => base.data_dir().join(APP_DIR).join(DB_FILE_NAME),
        None => PathBuf::from(DB_FILE_NAME),
    }
}

/// `--today` override, or the local clock.
pub fn resolve_today(value: Option<&str>) -> Result<DayKey> {
    match value {
        Some(text) => DayKey::parse(text).with_context(|| "parsing --today"),
        None => Ok(DayKey::new(Local::now().date_naive())),
    }
}
