pub mod entry;
pub mod flag;

pub use entry::{EntryFields, EntryInput, TrackingEntry};
pub use flag::FlagField;
