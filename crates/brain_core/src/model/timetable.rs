//! Timetable entries keyed by day.

use super::validation::{require_text, ValidationError};
use serde::{Deserialize, Serialize};

/// Days shown by the rolling timetable, starting today.
pub const TIMETABLE_WINDOW_DAYS: u32 = 14;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableEntry {
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

impl TimetableEntry {
    pub fn new(title: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            title: require_text("entry title", title)?,
            done: false,
        })
    }

    pub fn toggle(&mut self) {
        self.done = !self.done;
    }
}
