//! Storage gateway: named JSON values in a persistent key/value store.
//!
//! # Responsibility
//! - Define the raw key/value contract (`StorageGateway`).
//! - Layer typed JSON encode/decode on top of raw text values.
//!
//! # Invariants
//! - `get` never fails: missing or corrupt values degrade to the default.
//! - `decode` reports corrupt values explicitly instead of masking them.
//! - `set_many` writes all entries or none.

use crate::db::DbError;
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod keys;
mod sqlite;

pub use keys::StorageKey;
pub use sqlite::SqliteStorage;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    Decode {
        key: String,
        source: serde_json::Error,
    },
    Encode {
        key: String,
        source: serde_json::Error,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Decode { key, source } => {
                write!(f, "stored value for `{key}` is malformed: {source}")
            }
            Self::Encode { key, source } => {
                write!(f, "value for `{key}` cannot be serialized: {source}")
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Decode { source, .. } | Self::Encode { source, .. } => Some(source),
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Raw key/value persistence with JSON text values.
pub trait StorageGateway {
    /// Returns the stored JSON text, or `None` when the key is absent.
    fn get_raw(&self, key: &str) -> StorageResult<Option<String>>;
    /// Stores JSON text under `key`, replacing any previous value.
    fn set_raw(&self, key: &str, json: &str) -> StorageResult<()>;
    /// Stores every entry in one all-or-nothing write.
    fn set_many_raw(&self, entries: &[(&str, String)]) -> StorageResult<()>;
    /// Removes one key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;
    /// Erases every key.
    fn clear(&self) -> StorageResult<()>;
    /// Lists present keys in ascending order.
    fn keys(&self) -> StorageResult<Vec<String>>;

    /// Decodes the value under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent and `Err(Decode)` when the
    /// stored text is not a valid `T`.
    fn decode<T: DeserializeOwned>(&self, key: StorageKey) -> StorageResult<Option<T>>
    where
        Self: Sized,
    {
        let Some(raw) = self.get_raw(key.as_str())? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Decode {
                key: key.as_str().to_string(),
                source,
            })
    }

    /// Reads `key`, falling back to `default` when absent, corrupt, or unreadable.
    fn get<T: DeserializeOwned>(&self, key: StorageKey, default: T) -> T
    where
        Self: Sized,
    {
        match self.decode(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(err) => {
                warn!(
                    "event=storage_get module=storage status=degraded key={} error={}",
                    key.as_str(),
                    err
                );
                default
            }
        }
    }

    /// Serializes `value` and stores it under `key`.
    fn set<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) -> StorageResult<()>
    where
        Self: Sized,
    {
        let json = encode(key, value)?;
        self.set_raw(key.as_str(), &json)
    }
}

/// Serializes a value the way it is persisted (compact JSON).
pub fn encode<T: Serialize + ?Sized>(key: StorageKey, value: &T) -> StorageResult<String> {
    serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.as_str().to_string(),
        source,
    })
}
