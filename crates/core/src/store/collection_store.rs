use std::future::Future;
use std::sync::Arc;

use log::{debug, warn};

use super::{Identifiable, QueryCache};
use crate::errors::{Error, Result};
use crate::notifications::{Notification, NotificationSink};

/// Messages shown after mutations of one collection.
///
/// A failure shows the server's message when it sent one, otherwise the
/// generic message, otherwise the error itself.
#[derive(Debug, Clone, Copy)]
pub struct StoreMessages {
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub create_failed: Option<&'static str>,
    pub update_failed: Option<&'static str>,
    pub delete_failed: Option<&'static str>,
}

/// Keeps a [`QueryCache`] in step with remote mutations.
///
/// Creates are appended once the server returns the stored record. Updates
/// and deletes are applied to the cache before the request completes and
/// rolled back when it fails. Every mutation ends with a notification, and
/// errors are still returned to the caller.
pub struct CollectionStore<T> {
    cache: QueryCache<T>,
    notifier: Arc<dyn NotificationSink>,
    messages: StoreMessages,
}

impl<T> CollectionStore<T>
where
    T: Identifiable + Clone + Send + Sync,
{
    pub fn new(
        key: &'static str,
        notifier: Arc<dyn NotificationSink>,
        messages: StoreMessages,
    ) -> Self {
        Self {
            cache: QueryCache::new(key),
            notifier,
            messages,
        }
    }

    pub fn cache(&self) -> &QueryCache<T> {
        &self.cache
    }

    /// Fetches the collection and replaces the cache with it.
    pub async fn load<F>(&self, request: F) -> Result<Vec<T>>
    where
        F: Future<Output = Result<Vec<T>>>,
    {
        let items = request.await.map_err(|e| {
            warn!("[{}] failed to load: {}", self.cache.key(), e);
            e
        })?;
        self.cache.set(items.clone());
        Ok(items)
    }

    pub async fn create<F>(&self, request: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match request.await {
            Ok(created) => {
                self.cache.push(created.clone());
                self.notifier
                    .notify(Notification::success(self.messages.created));
                Ok(created)
            }
            Err(e) => Err(self.fail(self.messages.create_failed, e)),
        }
    }

    /// Applies `optimistic` (the locally merged record) right away, then the
    /// record returned by the server.
    pub async fn update<F>(&self, id: &str, optimistic: Option<T>, request: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let previous = match optimistic {
            Some(record) => self.cache.replace(record),
            None => None,
        };

        match request.await {
            Ok(updated) => {
                self.cache.replace(updated.clone());
                self.notifier
                    .notify(Notification::success(self.messages.updated));
                Ok(updated)
            }
            Err(e) => {
                if let Some(previous) = previous {
                    debug!("[{}] rolling back update of {}", self.cache.key(), id);
                    self.cache.replace(previous);
                }
                Err(self.fail(self.messages.update_failed, e))
            }
        }
    }

    pub async fn delete<F>(&self, id: &str, request: F) -> Result<()>
    where
        F: Future<Output = Result<()>>,
    {
        let removed = self.cache.remove(id);

        match request.await {
            Ok(()) => {
                self.notifier
                    .notify(Notification::success(self.messages.deleted));
                Ok(())
            }
            Err(e) => {
                if let Some((index, record)) = removed {
                    debug!("[{}] rolling back delete of {}", self.cache.key(), id);
                    self.cache.insert(index, record);
                }
                Err(self.fail(self.messages.delete_failed, e))
            }
        }
    }

    fn fail(&self, generic: Option<&'static str>, err: Error) -> Error {
        warn!("[{}] mutation failed: {}", self.cache.key(), err);
        let message = err
            .server_message()
            .map(str::to_string)
            .or_else(|| generic.map(str::to_string))
            .unwrap_or_else(|| err.to_string());
        self.notifier.notify(Notification::error(message));
        err
    }
}
