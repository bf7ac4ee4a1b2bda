//! Best-effort persistence for the learner-state stores
//!
//! Both stores keep their record in memory as the authoritative copy and
//! treat persistence as fire-and-forget: read a named value once at
//! startup, write it back after every mutation, delete it on clear. The
//! [`KeyValue`] trait is that whole contract, so the stores never know
//! whether they sit on a real data directory or a throwaway map.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, PersistError>;

/// Named-value persistence backend.
///
/// Keys are opaque strings owned by the stores. Implementations must treat
/// a missing key as a normal condition, not an error.
pub trait KeyValue {
    /// Read the value stored under `key`, or `None` when nothing is stored.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<()>;
}
