use crate::core::validate::EntryValidator;
use crate::errors::AppResult;
use crate::models::{EntryInput, TrackingEntry};
use crate::repository::EntryRepository;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate and store a new entry; returns the stored record.
    pub fn apply<R: EntryRepository + ?Sized>(
        repo: &mut R,
        validator: &EntryValidator,
        input: &EntryInput,
    ) -> AppResult<TrackingEntry> {
        let fields = validator.validate(input)?;
        let id = repo.create(&fields)?;
        Ok(TrackingEntry::from_fields(id, fields))
    }
}
