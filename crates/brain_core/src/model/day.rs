//! Calendar day keys used by date-keyed stores.

use super::validation::ValidationError;
use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};

const DAY_FORMAT: &str = "%Y-%m-%d";

/// A calendar day, persisted as a `YYYY-MM-DD` string.
///
/// Ordering follows the calendar, which matches string ordering of the
/// persisted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parses strict `YYYY-MM-DD` text.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if trimmed.len() != 10 {
            return Err(ValidationError::InvalidDate(trimmed.to_string()));
        }
        NaiveDate::parse_from_str(trimmed, DAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// Returns the day `days` after this one.
    pub fn offset(self, days: u32) -> Self {
        Self(self.0 + Duration::days(i64::from(days)))
    }

    /// Returns `days` consecutive keys starting at this one.
    pub fn window(self, days: u32) -> Vec<DayKey> {
        (0..days).map(|offset| self.offset(offset)).collect()
    }

    /// Parses `YYYY-MM` into the first day of that month.
    pub fn parse_month(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if trimmed.len() != 7 {
            return Err(ValidationError::InvalidDate(trimmed.to_string()));
        }
        Self::parse(&format!("{trimmed}-01"))
    }

    /// First day of this key's month.
    pub fn month_start(self) -> Self {
        Self(self.0.with_day(1).unwrap_or(self.0))
    }

    /// First day of the following month.
    pub fn next_month(self) -> Self {
        let start = self.month_start().0;
        Self(start.checked_add_months(Months::new(1)).unwrap_or(start))
    }

    /// First day of the preceding month.
    pub fn prev_month(self) -> Self {
        let start = self.month_start().0;
        Self(start.checked_sub_months(Months::new(1)).unwrap_or(start))
    }

    /// Number of days in this key's month.
    pub fn days_in_month(self) -> u32 {
        let days = (self.next_month().0 - self.month_start().0).num_days();
        u32::try_from(days).unwrap_or(0)
    }
}

impl Display for DayKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DAY_FORMAT))
    }
}

impl From<NaiveDate> for DayKey {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl Serialize for DayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
