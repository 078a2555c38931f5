//! Ordered-list store (notes, projects, finances).

use super::{check_index, ListRecord, StoreResult};
use crate::storage::{StorageGateway, StorageResult};
use log::debug;

pub struct ListStore<'g, G: StorageGateway, T: ListRecord> {
    gateway: &'g G,
    items: Vec<T>,
}

impl<'g, G: StorageGateway, T: ListRecord> ListStore<'g, G, T> {
    /// Hydrates from storage; missing or corrupt data yields an empty list.
    pub fn load(gateway: &'g G) -> Self {
        let items = gateway.get(T::KEY, Vec::new());
        Self { gateway, items }
    }

    /// Hydrates from storage, surfacing corrupt data as an error.
    pub fn try_load(gateway: &'g G) -> StorageResult<Self> {
        let items = gateway.decode(T::KEY)?.unwrap_or_default();
        Ok(Self { gateway, items })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends `item` and persists. Returns the new item's index.
    pub fn add(&mut self, item: T) -> StoreResult<usize> {
        self.items.push(item);
        if let Err(err) = self.persist("add") {
            self.items.pop();
            return Err(err);
        }
        Ok(self.items.len() - 1)
    }

    /// Applies `patch` to the item at `index` and persists.
    pub fn update<R>(&mut self, index: usize, patch: impl FnOnce(&mut T) -> R) -> StoreResult<R> {
        check_index(index, self.items.len())?;
        let previous = self.items[index].clone();
        let result = patch(&mut self.items[index]);
        if let Err(err) = self.persist("update") {
            self.items[index] = previous;
            return Err(err);
        }
        Ok(result)
    }

    /// Removes the item at `index` and persists. Returns the removed item.
    pub fn remove(&mut self, index: usize) -> StoreResult<T> {
        check_index(index, self.items.len())?;
        let removed = self.items.remove(index);
        if let Err(err) = self.persist("remove") {
            self.items.insert(index, removed);
            return Err(err);
        }
        Ok(removed)
    }

    fn persist(&self, op: &str) -> StoreResult<()> {
        self.gateway.set(T::KEY, &self.items)?;
        debug!(
            "event=store_mutation module=store status=ok key={} op={op} count={}",
            T::KEY,
            self.items.len()
        );
        Ok(())
    }
}
