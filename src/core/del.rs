use crate::errors::AppResult;
use crate::models::TrackingEntry;
use crate::repository::EntryRepository;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove entry `id`, returning what was deleted.
    pub fn apply<R: EntryRepository + ?Sized>(repo: &mut R, id: i64) -> AppResult<TrackingEntry> {
        let existing = repo.get(id)?;
        repo.delete(id)?;
        Ok(existing)
    }
}
