use crate::core::validate::EntryValidator;
use crate::errors::AppResult;
use crate::models::{EntryInput, TrackingEntry};
use crate::repository::EntryRepository;

/// Fields supplied to `edit`; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub started: Option<String>,
    pub scheduled_tx: Option<String>,
    pub same_day_srp: Option<String>,
    pub note: Option<String>,
}

impl EntryPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.started.is_none()
            && self.scheduled_tx.is_none()
            && self.same_day_srp.is_none()
            && self.note.is_none()
    }

    pub fn overlay(self, base: EntryInput) -> EntryInput {
        EntryInput {
            name: self.name.unwrap_or(base.name),
            date: self.date.unwrap_or(base.date),
            time: self.time.unwrap_or(base.time),
            started: self.started.or(base.started),
            scheduled_tx: self.scheduled_tx.or(base.scheduled_tx),
            same_day_srp: self.same_day_srp.or(base.same_day_srp),
            note: self.note.or(base.note),
        }
    }
}

pub struct EditLogic;

impl EditLogic {
    /// Merge `patch` over entry `id`, revalidate the whole record and store
    /// it. Returns the updated entry.
    pub fn apply<R: EntryRepository + ?Sized>(
        repo: &mut R,
        validator: &EntryValidator,
        id: i64,
        patch: EntryPatch,
    ) -> AppResult<TrackingEntry> {
        let current = repo.get(id)?;
        let merged = patch.overlay(current.to_input());
        let fields = validator.validate(&merged)?;
        repo.update(id, &fields)?;
        Ok(TrackingEntry::from_fields(id, fields))
    }
}
