use crate::core::validate::EntryValidator;
use crate::errors::{AppError, AppResult};
use crate::models::{EntryFields, EntryInput};
use crate::repository::EntryRepository;
use crate::ui::messages::info;
use csv::{ErrorKind, ReaderBuilder, Trim};
use std::path::Path;

pub struct ImportLogic;

impl ImportLogic {
    /// Load a CSV export of the tracking sheet.
    ///
    /// Every row is validated before anything is written; the first bad row
    /// aborts the import and names its line. Returns the new ids.
    pub fn apply<R: EntryRepository + ?Sized>(
        repo: &mut R,
        validator: &EntryValidator,
        path: &Path,
    ) -> AppResult<Vec<i64>> {
        info(format!("Importing from CSV: {}", path.display()));

        let mut rdr = ReaderBuilder::new().trim(Trim::All).from_path(path)?;

        let mut batch: Vec<EntryFields> = Vec::new();
        for (i, record) in rdr.deserialize::<EntryInput>().enumerate() {
            // header is line 1
            let line = i + 2;
            let input = record.map_err(|e| malformed_row(line, e))?;
            let fields = validator.validate(&input).map_err(|e| match e {
                AppError::Validation { field, message } => AppError::Validation {
                    field,
                    message: format!("line {}: {}", line, message),
                },
                other => other,
            })?;
            batch.push(fields);
        }

        if batch.is_empty() {
            return Ok(Vec::new());
        }

        repo.create_many(&batch)
    }
}

/// Rows the reader cannot turn into an entry are bad input, not storage
/// failures.
fn malformed_row(line: usize, err: csv::Error) -> AppError {
    match err.kind() {
        ErrorKind::Deserialize { err: de, .. } => {
            AppError::validation("row", format!("line {}: {}", line, de))
        }
        ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => AppError::validation(
            "row",
            format!("line {}: expected {} fields, found {}", line, expected_len, len),
        ),
        _ => AppError::Csv(err),
    }
}
