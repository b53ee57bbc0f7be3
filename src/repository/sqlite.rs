use super::EntryRepository;
use crate::db::initialize::init_db;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::{EntryFields, TrackingEntry};

/// Repository over the `tracking` table of a SQLite file.
///
/// Owns the process' single connection. Every mutation is one autocommitted
/// statement, followed by a best-effort line in the `log` table.
pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    /// Open `path` and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn open_in_memory() -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn pool(&mut self) -> &mut DbPool {
        &mut self.pool
    }
}

fn describe(fields: &EntryFields) -> String {
    format!(
        "{} {} {}",
        fields.name,
        fields.date.format("%Y-%m-%d"),
        crate::utils::time::format_slot(fields.time)
    )
}

impl EntryRepository for SqliteRepository {
    fn create(&mut self, fields: &EntryFields) -> AppResult<i64> {
        let id = queries::insert_entry(&self.pool.conn, fields)?;
        ttlog_soft(&self.pool.conn, "add", &format!("#{}", id), &describe(fields));
        Ok(id)
    }

    fn list_all(&self) -> AppResult<Vec<TrackingEntry>> {
        Ok(queries::load_all_entries(&self.pool.conn)?)
    }

    fn get(&self, id: i64) -> AppResult<TrackingEntry> {
        queries::load_entry(&self.pool.conn, id)?.ok_or(AppError::NotFound(id))
    }

    fn update(&mut self, id: i64, fields: &EntryFields) -> AppResult<()> {
        if queries::update_entry(&self.pool.conn, id, fields)? == 0 {
            return Err(AppError::NotFound(id));
        }
        ttlog_soft(&self.pool.conn, "edit", &format!("#{}", id), &describe(fields));
        Ok(())
    }

    fn delete(&mut self, id: i64) -> AppResult<()> {
        if queries::delete_entry(&self.pool.conn, id)? == 0 {
            return Err(AppError::NotFound(id));
        }
        ttlog_soft(&self.pool.conn, "del", &format!("#{}", id), "Entry deleted");
        Ok(())
    }

    /// The whole batch lands in one transaction: an import either fully
    /// succeeds or leaves the table untouched.
    fn create_many(&mut self, batch: &[EntryFields]) -> AppResult<Vec<i64>> {
        let tx = self.pool.conn.transaction()?;
        let mut ids = Vec::with_capacity(batch.len());
        for fields in batch {
            ids.push(queries::insert_entry(&tx, fields)?);
        }
        tx.commit()?;

        ttlog_soft(
            &self.pool.conn,
            "import",
            &format!("{} entries", ids.len()),
            "Entries imported",
        );
        Ok(ids)
    }
}
