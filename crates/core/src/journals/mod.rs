//! Journals module - trade journal entries, service, and traits.

mod journals_model;
mod journals_service;
mod journals_traits;


pub use journals_model::{Journal, JournalUpdate, NewJournal};
pub use journals_service::JournalService;
pub use journals_traits::{JournalRepositoryTrait, JournalServiceTrait};
