//! Whole-store JSON snapshot export and import.
//!
//! # Responsibility
//! - Export every data and appearance key as one pretty-printed JSON object.
//! - Import such an object, overwriting only the keys it contains.
//!
//! # Invariants
//! - Import decodes every present key before writing any of them; a
//!   malformed document writes nothing.
//! - Keys absent from the document are left untouched; unknown keys are ignored.
//! - Imported values are stored in the same canonical encoding the stores
//!   write, so export → import reproduces stored values byte for byte.

use crate::model::appearance::{AccentColor, AvatarLetter, Theme};
use crate::model::calendar::CalendarEvent;
use crate::model::day::DayKey;
use crate::model::finance::FinanceEntry;
use crate::model::note::Note;
use crate::model::project::Project;
use crate::model::timetable::TimetableEntry;
use crate::service::appearance::AppearanceService;
use crate::storage::{encode, StorageError, StorageGateway, StorageKey};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SnapshotResult<T> = Result<T, SnapshotError>;

#[derive(Debug)]
pub enum SnapshotError {
    /// The document is not valid JSON.
    Parse(serde_json::Error),
    /// The document is valid JSON but not an object.
    NotAnObject,
    /// One present key does not hold a value of the expected shape.
    InvalidKey {
        key: StorageKey,
        source: serde_json::Error,
    },
    Storage(StorageError),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "snapshot is not valid JSON: {err}"),
            Self::NotAnObject => write!(f, "snapshot must be a JSON object"),
            Self::InvalidKey { key, source } => {
                write!(f, "snapshot key `{key}` is malformed: {source}")
            }
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::InvalidKey { source, .. } => Some(source),
            Self::Storage(err) => Some(err),
            Self::NotAnObject => None,
        }
    }
}

impl From<StorageError> for SnapshotError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Outcome of a successful import.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImportReport {
    /// Keys overwritten, in export order.
    pub applied: Vec<StorageKey>,
    /// Number of top-level keys that were not recognized.
    pub ignored: usize,
}

impl ImportReport {
    /// Whether any appearance key changed and should be re-applied now.
    pub fn appearance_changed(&self) -> bool {
        self.applied.iter().any(|key| key.is_appearance())
    }

    /// Whether any data key changed; data pages pick it up on next load.
    pub fn data_changed(&self) -> bool {
        self.applied.iter().any(|key| !key.is_appearance())
    }
}

/// Builds the pretty-printed export document from current storage.
pub fn export_snapshot<G: StorageGateway>(gateway: &G) -> SnapshotResult<String> {
    let mut doc = Map::new();
    for key in StorageKey::DATA {
        let value = match key {
            StorageKey::Notes => to_value::<Vec<Note>>(gateway, key)?,
            StorageKey::Projects => to_value::<Vec<Project>>(gateway, key)?,
            StorageKey::Finances => to_value::<Vec<FinanceEntry>>(gateway, key)?,
            StorageKey::TimetableEvents => {
                to_value::<BTreeMap<DayKey, Vec<TimetableEntry>>>(gateway, key)?
            }
            _ => to_value::<BTreeMap<DayKey, Vec<CalendarEvent>>>(gateway, key)?,
        };
        doc.insert(key.as_str().to_string(), value);
    }

    let appearance = AppearanceService::new(gateway).load();
    doc.insert(
        StorageKey::Theme.as_str().to_string(),
        Value::String(appearance.theme.as_str().to_string()),
    );
    doc.insert(
        StorageKey::AccentColor.as_str().to_string(),
        Value::String(appearance.accent_color.as_str().to_string()),
    );
    doc.insert(
        StorageKey::AvatarLetter.as_str().to_string(),
        Value::String(appearance.avatar_letter.as_str().to_string()),
    );

    let text = serde_json::to_string_pretty(&Value::Object(doc))
        .map_err(|source| StorageError::Encode {
            key: "snapshot".to_string(),
            source,
        })?;
    info!(
        "event=snapshot_export module=service status=ok bytes={}",
        text.len()
    );
    Ok(text)
}

/// Validates `text` and overwrites every key it contains in one write.
pub fn import_snapshot<G: StorageGateway>(gateway: &G, text: &str) -> SnapshotResult<ImportReport> {
    let doc = match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(doc)) => doc,
        Ok(_) => return Err(reject(SnapshotError::NotAnObject)),
        Err(err) => return Err(reject(SnapshotError::Parse(err))),
    };

    let mut report = ImportReport::default();
    let mut writes = Vec::new();
    for key in StorageKey::DATA.into_iter().chain(StorageKey::APPEARANCE) {
        let Some(value) = doc.get(key.as_str()) else {
            continue;
        };
        let encoded = match key {
            StorageKey::Notes => canonical::<Vec<Note>>(key, value),
            StorageKey::Projects => canonical::<Vec<Project>>(key, value),
            StorageKey::Finances => canonical::<Vec<FinanceEntry>>(key, value),
            StorageKey::TimetableEvents => {
                canonical::<BTreeMap<DayKey, Vec<TimetableEntry>>>(key, value)
            }
            StorageKey::CalendarEvents => {
                canonical::<BTreeMap<DayKey, Vec<CalendarEvent>>>(key, value)
            }
            StorageKey::Theme => canonical::<Theme>(key, value),
            StorageKey::AccentColor => canonical::<AccentColor>(key, value),
            StorageKey::AvatarLetter => canonical::<AvatarLetter>(key, value),
        }
        .map_err(reject)?;
        writes.push((key.as_str(), encoded));
        report.applied.push(key);
    }
    report.ignored = doc
        .keys()
        .filter(|name| StorageKey::parse(name).is_none())
        .count();

    gateway.set_many_raw(&writes)?;
    info!(
        "event=snapshot_import module=service status=ok applied={} ignored={}",
        report.applied.len(),
        report.ignored
    );
    Ok(report)
}

fn to_value<T>(gateway: &impl StorageGateway, key: StorageKey) -> SnapshotResult<Value>
where
    T: DeserializeOwned + Serialize + Default,
{
    let typed: T = gateway.get(key, T::default());
    serde_json::to_value(&typed).map_err(|source| {
        SnapshotError::Storage(StorageError::Encode {
            key: key.as_str().to_string(),
            source,
        })
    })
}

fn canonical<T>(key: StorageKey, value: &Value) -> SnapshotResult<String>
where
    T: DeserializeOwned + Serialize,
{
    let typed = T::deserialize(value).map_err(|source| SnapshotError::InvalidKey { key, source })?;
    Ok(encode(key, &typed)?)
}

fn reject(err: SnapshotError) -> SnapshotError {
    warn!("event=snapshot_import module=service status=error error={err}");
    err
}
