//! Input validation errors raised at record construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejected user input. State is never modified when one of these is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required text field is empty after trimming.
    EmptyField(&'static str),
    /// Amount text does not parse as a finite number.
    InvalidAmount(String),
    /// Amount parsed but is negative.
    NegativeAmount(f64),
    /// Finance entry type is neither `income` nor `expense`.
    InvalidEntryKind(String),
    /// Date text is not `YYYY-MM-DD`.
    InvalidDate(String),
    /// Timetable day offset falls outside the rolling window.
    DayOffsetOutOfWindow { offset: u32, window: u32 },
    /// Theme is neither `light` nor `dark`.
    InvalidTheme(String),
    /// Accent colour is not `#rgb` or `#rrggbb`.
    InvalidAccentColor(String),
    /// Avatar input holds no visible character.
    InvalidAvatarLetter,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "{field} cannot be empty"),
            Self::InvalidAmount(value) => write!(f, "amount `{value}` is not a number"),
            Self::NegativeAmount(value) => write!(f, "amount {value} cannot be negative"),
            Self::InvalidEntryKind(value) => {
                write!(f, "entry type `{value}` must be `income` or `expense`")
            }
            Self::InvalidDate(value) => write!(f, "date `{value}` must use YYYY-MM-DD"),
            Self::DayOffsetOutOfWindow { offset, window } => {
                write!(f, "day offset {offset} is outside the {window}-day window")
            }
            Self::InvalidTheme(value) => write!(f, "theme `{value}` must be `light` or `dark`"),
            Self::InvalidAccentColor(value) => {
                write!(f, "accent colour `{value}` must look like #rgb or #rrggbb")
            }
            Self::InvalidAvatarLetter => write!(f, "avatar letter cannot be empty"),
        }
    }
}

impl Error for ValidationError {}

/// Trims `value` and rejects it when nothing is left.
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}
