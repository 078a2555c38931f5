//! Calendar events keyed by day.

use super::validation::{require_text, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub title: String,
}

impl CalendarEvent {
    pub fn new(title: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            title: require_text("event title", title)?,
        })
    }
}
