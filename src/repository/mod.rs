//! Storage port for todos.
//!
//! The handlers only ever talk to a [`TodoRepo`]; the concrete store is
//! picked at startup and handed over at construction.

#[cfg(test)]
pub mod mock;
pub mod sled;

use thiserror::Error;

use crate::models::Todo;

pub use self::sled::SledTodoRepo;

/// Any failure of the underlying store. The cause is kept for logging only.
#[derive(Debug, Error)]
#[error("{0:#}")]
pub struct StorageError(anyhow::Error);

impl StorageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(anyhow::anyhow!(message.into()))
    }
}

impl From<anyhow::Error> for StorageError {
    fn from(err: anyhow::Error) -> Self {
        Self(err)
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;

pub trait TodoRepo: Send + Sync {
    /// `Ok(None)` when no record matches.
    fn get(&self, id: &str) -> Result<Option<Todo>>;

    /// Every stored todo, in no particular order.
    fn get_all(&self) -> Result<Vec<Todo>>;

    /// Creates or overwrites `todo`.
    ///
    /// An empty id gets a fresh one written back into `todo`, and `mod_time`
    /// is refreshed on every call.
    fn save(&self, todo: &mut Todo) -> Result<()>;

    /// Removing an id that doesn't exist is not an error.
    fn delete(&self, id: &str) -> Result<()>;
}
