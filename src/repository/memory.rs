use super::EntryRepository;
use crate::errors::{AppError, AppResult};
use crate::models::{EntryFields, TrackingEntry};

/// Volatile store with the same id and error semantics as the SQLite one.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    entries: Vec<TrackingEntry>,
    last_id: i64,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: i64) -> AppResult<usize> {
        self.entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(AppError::NotFound(id))
    }
}

impl EntryRepository for MemoryRepository {
    fn create(&mut self, fields: &EntryFields) -> AppResult<i64> {
        // ids are never reused, like AUTOINCREMENT
        self.last_id += 1;
        self.entries
            .push(TrackingEntry::from_fields(self.last_id, fields.clone()));
        Ok(self.last_id)
    }

    fn list_all(&self) -> AppResult<Vec<TrackingEntry>> {
        Ok(self.entries.clone())
    }

    fn get(&self, id: i64) -> AppResult<TrackingEntry> {
        let idx = self.position(id)?;
        Ok(self.entries[idx].clone())
    }

    fn update(&mut self, id: i64, fields: &EntryFields) -> AppResult<()> {
        let idx = self.position(id)?;
        self.entries[idx] = TrackingEntry::from_fields(id, fields.clone());
        Ok(())
    }

    fn delete(&mut self, id: i64) -> AppResult<()> {
        let idx = self.position(id)?;
        self.entries.remove(idx);
        Ok(())
    }
}
