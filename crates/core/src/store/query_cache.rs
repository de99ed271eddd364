use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::debug;

use super::Identifiable;

/// Shared cache of one collection.
///
/// The cache is `None` until the first successful load; every mutation
/// treats an unloaded cache as an empty list. Clones share the same data.
pub struct QueryCache<T> {
    key: &'static str,
    data: Arc<RwLock<Option<Vec<T>>>>,
}

impl<T> Clone for QueryCache<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            data: Arc::clone(&self.data),
        }
    }
}

impl<T: Identifiable + Clone> QueryCache<T> {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            data: Arc::new(RwLock::new(None)),
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn is_loaded(&self) -> bool {
        self.read().is_some()
    }

    /// Current contents, empty when nothing has been loaded.
    pub fn snapshot(&self) -> Vec<T> {
        self.read().clone().unwrap_or_default()
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.read()
            .as_ref()
            .and_then(|items| items.iter().find(|item| item.id() == id).cloned())
    }

    /// Replaces the whole collection.
    pub fn set(&self, items: Vec<T>) {
        debug!("[{}] cache set with {} items", self.key, items.len());
        *self.write() = Some(items);
    }

    /// Swaps the collection for `f(previous)`.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(Vec<T>) -> Vec<T>,
    {
        let mut guard = self.write();
        let previous = guard.take().unwrap_or_default();
        *guard = Some(f(previous));
    }

    pub fn push(&self, item: T) {
        debug!("[{}] cache append {}", self.key, item.id());
        self.update(|mut items| {
            items.push(item);
            items
        });
    }

    /// Replaces the item with the same id. Returns the replaced item.
    pub fn replace(&self, item: T) -> Option<T> {
        let mut replaced = None;
        self.update(|items| {
            items
                .into_iter()
                .map(|existing| {
                    if existing.id() == item.id() {
                        replaced = Some(existing);
                        item.clone()
                    } else {
                        existing
                    }
                })
                .collect()
        });
        replaced
    }

    /// Removes the item with `id`, returning it with its former position.
    pub fn remove(&self, id: &str) -> Option<(usize, T)> {
        let mut guard = self.write();
        let items = guard.as_mut()?;
        let index = items.iter().position(|item| item.id() == id)?;
        debug!("[{}] cache remove {}", self.key, id);
        Some((index, items.remove(index)))
    }

    /// Puts an item back at `index` (clamped to the end) unless it is
    /// already present.
    pub fn insert(&self, index: usize, item: T) {
        self.update(|mut items| {
            if !items.iter().any(|existing| existing.id() == item.id()) {
                let index = index.min(items.len());
                items.insert(index, item);
            }
            items
        });
    }

    /// Drops the cached data so the next read is treated as unloaded.
    pub fn invalidate(&self) {
        *self.write() = None;
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<Vec<T>>> {
        self.data
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<Vec<T>>> {
        self.data
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
