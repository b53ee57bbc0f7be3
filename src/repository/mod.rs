//! Storage collaborators for tracking entries.
//!
//! The rest of the crate only talks to [`EntryRepository`]; which backend
//! sits behind it is decided by whoever constructs the repository.

mod memory;
mod sqlite;

pub use memory::MemoryRepository;
pub use sqlite::SqliteRepository;

use crate::errors::AppResult;
use crate::models::{EntryFields, TrackingEntry};

pub trait EntryRepository {
    /// Append a new entry and return its assigned id.
    fn create(&mut self, fields: &EntryFields) -> AppResult<i64>;

    /// Every stored entry, ascending id.
    fn list_all(&self) -> AppResult<Vec<TrackingEntry>>;

    /// Fetch one entry; `AppError::NotFound` when absent.
    fn get(&self, id: i64) -> AppResult<TrackingEntry>;

    /// Replace all mutable fields of entry `id`.
    fn update(&mut self, id: i64, fields: &EntryFields) -> AppResult<()>;

    /// Hard-delete entry `id`.
    fn delete(&mut self, id: i64) -> AppResult<()>;

    /// Insert a batch that has already been validated as a whole.
    fn create_many(&mut self, batch: &[EntryFields]) -> AppResult<Vec<i64>> {
        batch.iter().map(|f| self.create(f)).collect()
    }
}
