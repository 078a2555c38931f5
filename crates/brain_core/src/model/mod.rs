//! Typed records for every dashboard domain.
//!
//! # Responsibility
//! - Define the persisted shapes of notes, projects, finances, timetable and
//!   calendar entries, and appearance settings.
//! - Validate user input at construction so stores only see well-formed data.
//!
//! # Invariants
//! - JSON field names match the persisted key/value payloads exactly.
//! - Date keys are always `YYYY-MM-DD`.

pub mod appearance;
pub mod calendar;
pub mod day;
pub mod finance;
pub mod note;
pub mod project;
pub mod timetable;
pub mod validation;
