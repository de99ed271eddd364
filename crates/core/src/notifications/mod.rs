//! User-facing notifications.
//!
//! Stores emit a notification after every remote mutation, success or
//! failure. Front ends implement the sink to show them as toasts.

mod notification;
mod sink;

pub use notification::*;
pub use sink::*;
