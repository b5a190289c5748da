//! Durable key-value storage for the counters.
//!
//! The table only needs two operations, `get` and `set`, keyed by a fixed
//! identifier. Counters are stored as a JSON object:
//! `{"player":3,"banker":5,"ties":1}`.
//!
//! ## Backends
//!
//! - `MemoryStore`: lives as long as the process (a browsing session)
//! - `FileStore`: one `<key>.json` file per key in a directory

mod error;
mod file;
mod memory;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;

use crate::table::Counters;

/// String key-value storage.
pub trait KeyValueStore {
    /// Value stored under `key`, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Load counters stored under `key`.
///
/// Returns `Ok(None)` when nothing has been stored yet.
pub fn read_counters<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
) -> Result<Option<Counters>, StorageError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    let counters = serde_json::from_str(&raw).map_err(|e| StorageError::malformed(key, e))?;
    Ok(Some(counters))
}

/// Store counters under `key`.
pub fn write_counters<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    counters: &Counters,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(counters).map_err(|e| StorageError::malformed(key, e))?;
    store.set(key, &raw)
}
