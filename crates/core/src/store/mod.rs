//! Client-side cache of remote collections.
//!
//! Each remote collection (accounts, journals, strategies) is cached under a
//! query key. A [`CollectionStore`] keeps that cache in step with remote
//! mutations and reports their outcome through a notification sink.

mod collection_store;
mod query_cache;

pub use collection_store::{CollectionStore, StoreMessages};
pub use query_cache::QueryCache;

/// Records that carry a server-assigned identifier.
pub trait Identifiable {
    fn id(&self) -> &str;
}
