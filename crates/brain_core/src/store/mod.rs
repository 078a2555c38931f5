//! Domain stores: in-memory mirrors of one storage key each.
//!
//! # Responsibility
//! - Hydrate a collection from the storage gateway with an empty default.
//! - Apply add/update/remove and persist synchronously after every mutation.
//!
//! # Invariants
//! - Every successful mutation is followed by exactly one gateway write.
//! - A failed mutation (bad index, bad input, failed write) leaves both the
//!   in-memory collection and storage as they were.

use crate::model::validation::ValidationError;
use crate::storage::{StorageError, StorageKey};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod date_keyed_store;
mod domain;
mod list_store;

pub use date_keyed_store::DateKeyedStore;
pub use domain::{CalendarStore, FinanceStore, NoteStore, ProjectStore, TimetableStore};
pub use list_store::ListStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Storage(StorageError),
    Validation(ValidationError),
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for {len} item(s)")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Validation(err) => Some(err),
            Self::IndexOutOfRange { .. } => None,
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// A record kept in an ordered list under one storage key.
pub trait ListRecord: Serialize + DeserializeOwned + Clone {
    const KEY: StorageKey;
}

/// A record kept in a day-keyed mapping under one storage key.
pub trait DayRecord: Serialize + DeserializeOwned + Clone {
    const KEY: StorageKey;
}

fn check_index(index: usize, len: usize) -> StoreResult<()> {
    if index >= len {
        return Err(StoreError::IndexOutOfRange { index, len });
    }
    Ok(())
}
