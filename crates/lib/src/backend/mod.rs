//! Backend implementations for portalgate storage
//!
//! This module provides the [`KeyValueStore`] trait and its implementations.
//!
//! The trait is the only storage capability the core depends on: a flat set of
//! named string slots, each read and overwritten as a whole. This keeps
//! `RecordStore` and `SessionStore` independent of where the bytes end up.

use crate::Result;

pub mod errors;
pub mod file;
pub mod in_memory;

pub use errors::BackendError;
pub use file::FileStore;
pub use in_memory::InMemory;

/// Storage capability for named string slots.
///
/// Implementations must make every successful `set` visible to later `get`
/// calls on the same store, and must replace the previous value as a whole:
/// a reader never observes a partially written slot.
///
/// All implementations must be `Send` and `Sync` so a store can be shared
/// behind an `Arc`. No arbitration between concurrent writers is attempted;
/// the last write wins.
pub trait KeyValueStore: Send + Sync {
    /// Read a slot.
    ///
    /// # Returns
    /// `Ok(None)` if the slot has never been written or was removed.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a slot with `value`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a slot. Removing a missing slot is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
