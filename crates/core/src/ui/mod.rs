//! Headless state for small interactive pieces of the dashboard.

mod disclosure;

pub use disclosure::Disclosure;
