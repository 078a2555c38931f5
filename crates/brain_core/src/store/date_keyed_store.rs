//! Day-keyed store (timetable, calendar).

use super::{DayRecord, StoreError, StoreResult};
use crate::model::day::DayKey;
use crate::storage::{StorageGateway, StorageResult};
use log::debug;
use std::collections::BTreeMap;

/// Mapping from day to the records on that day, in insertion order.
///
/// Days with no records are dropped from the mapping.
pub struct DateKeyedStore<'g, G: StorageGateway, T: DayRecord> {
    gateway: &'g G,
    days: BTreeMap<DayKey, Vec<T>>,
}

impl<'g, G: StorageGateway, T: DayRecord> DateKeyedStore<'g, G, T> {
    /// Hydrates from storage; missing or corrupt data yields an empty mapping.
    pub fn load(gateway: &'g G) -> Self {
        let days = gateway.get(T::KEY, BTreeMap::new());
        Self { gateway, days }
    }

    /// Hydrates from storage, surfacing corrupt data as an error.
    pub fn try_load(gateway: &'g G) -> StorageResult<Self> {
        let days = gateway.decode(T::KEY)?.unwrap_or_default();
        Ok(Self { gateway, days })
    }

    /// All days with at least one record, ascending.
    pub fn days(&self) -> &BTreeMap<DayKey, Vec<T>> {
        &self.days
    }

    /// Records on `day`; empty when none.
    pub fn on(&self, day: DayKey) -> &[T] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Appends `item` to `day` and persists. Returns its index within the day.
    pub fn add(&mut self, day: DayKey, item: T) -> StoreResult<usize> {
        let entries = self.days.entry(day).or_default();
        entries.push(item);
        let index = entries.len() - 1;
        if let Err(err) = self.persist("add") {
            self.drop_at(day, index);
            return Err(err);
        }
        Ok(index)
    }

    /// Applies `patch` to one record and persists.
    pub fn update<R>(
        &mut self,
        day: DayKey,
        index: usize,
        patch: impl FnOnce(&mut T) -> R,
    ) -> StoreResult<R> {
        let len = self.on(day).len();
        let Some(entry) = self
            .days
            .get_mut(&day)
            .and_then(|entries| entries.get_mut(index))
        else {
            return Err(StoreError::IndexOutOfRange { index, len });
        };
        let previous = entry.clone();
        let result = patch(entry);
        if let Err(err) = self.persist("update") {
            if let Some(entry) = self
                .days
                .get_mut(&day)
                .and_then(|entries| entries.get_mut(index))
            {
                *entry = previous;
            }
            return Err(err);
        }
        Ok(result)
    }

    /// Removes one record and persists. Returns the removed record.
    pub fn remove(&mut self, day: DayKey, index: usize) -> StoreResult<T> {
        let len = self.on(day).len();
        let removed = self
            .drop_at(day, index)
            .ok_or(StoreError::IndexOutOfRange { index, len })?;
        if let Err(err) = self.persist("remove") {
            self.days.entry(day).or_default().insert(index, removed);
            return Err(err);
        }
        Ok(removed)
    }

    fn drop_at(&mut self, day: DayKey, index: usize) -> Option<T> {
        let entries = self.days.get_mut(&day)?;
        if index >= entries.len() {
            return None;
        }
        let removed = entries.remove(index);
        if entries.is_empty() {
            self.days.remove(&day);
        }
        Some(removed)
    }

    fn persist(&self, op: &str) -> StoreResult<()> {
        self.gateway.set(T::KEY, &self.days)?;
        debug!(
            "event=store_mutation module=store status=ok key={} op={op} days={}",
            T::KEY,
            self.days.len()
        );
        Ok(())
    }
}
