//! kvconf: thread-safe key-value configuration store
//!
//! [`ConfigStore`] keeps string keys and values in memory behind a
//! reader/writer lock and persists them as `key = value` text files.

pub mod error;
pub mod format;
pub mod store;

pub use error::{ConfigError, Result};
pub use store::ConfigStore;
