//! Key/value persistence boundary.
//!
//! # Responsibility
//! - Define the single-key blob storage contract the task store persists
//!   through.
//! - Provide the shipped backends: SQLite for durable local state, an
//!   in-memory map for tests and demos.
//!
//! # Invariants
//! - One key maps to at most one value; `set` replaces atomically.
//! - Backends report transport failures through `StorageError`; they never
//!   interpret the stored blob.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;

mod memory;
mod sqlite;

pub use memory::MemoryKvStore;
pub use sqlite::{open_db, open_db_in_memory, SqliteKvStore};

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport-level storage error.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "storage schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Single-key blob storage contract.
///
/// The whole task list serializes into one value under one fixed key, so the
/// contract stays a plain get/set pair.
pub trait KvStore {
    /// Returns the stored value for `key`, or `None` when absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

impl<T: KvStore + ?Sized> KvStore for &mut T {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}
