pub mod add;
pub mod backup;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod report;
pub mod slots;

use crate::cli::parser::EntryArgs;
use crate::config::Config;
use crate::core::edit::EntryPatch;
use crate::errors::AppResult;
use crate::repository::SqliteRepository;

/// Open the configured database, migrating it if needed.
pub(crate) fn open_repo(cfg: &Config) -> AppResult<SqliteRepository> {
    SqliteRepository::open(&cfg.database)
}

impl From<&EntryArgs> for EntryPatch {
    fn from(a: &EntryArgs) -> Self {
        EntryPatch {
            name: a.name.clone(),
            date: a.date.clone(),
            time: a.time.clone(),
            started: a.started.clone(),
            scheduled_tx: a.scheduled_tx.clone(),
            same_day_srp: a.same_day_srp.clone(),
            note: a.note.clone(),
        }
    }
}
