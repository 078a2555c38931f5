//! Income and expense records.

use super::day::DayKey;
use super::validation::{require_text, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(ValidationError::InvalidEntryKind(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceEntry {
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub date: DayKey,
}

/// Raw form input as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinanceForm {
    pub description: String,
    pub amount: String,
    pub kind: String,
    /// Blank or absent means "today".
    pub date: Option<String>,
}

impl FinanceEntry {
    /// Validates form input into an entry.
    ///
    /// # Errors
    /// - Blank description.
    /// - Amount that is not a finite number, or is negative.
    /// - Unknown entry type or malformed date.
    pub fn from_form(form: &FinanceForm, today: DayKey) -> Result<Self, ValidationError> {
        let description = require_text("description", &form.description)?;
        let amount = parse_amount(&form.amount)?;
        let kind = EntryKind::parse(&form.kind)?;
        let date = match form.date.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => DayKey::parse(text)?,
            _ => today,
        };
        Ok(Self {
            description,
            amount,
            kind,
            date,
        })
    }
}

fn parse_amount(value: &str) -> Result<f64, ValidationError> {
    let trimmed = value.trim();
    let amount = trimmed
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| ValidationError::InvalidAmount(trimmed.to_string()))?;
    if amount < 0.0 {
        return Err(ValidationError::NegativeAmount(amount));
    }
    Ok(amount)
}
