// src/export/logic.rs

use crate::core::filter::filter;
use crate::core::range::resolve_window;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::export::xlsx::export_xlsx;
use crate::repository::EntryRepository;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

/// What to export and where.
pub struct ExportRequest<'a> {
    pub format: ExportFormat,
    pub file: &'a str,
    pub range: Option<&'a str>,
    pub person: Option<&'a str>,
    pub force: bool,
}

impl ExportLogic {
    /// Export the entries selected by `req` (newest first).
    ///
    /// Returns how many entries were written; nothing is written for an
    /// empty selection.
    pub fn export<R: EntryRepository + ?Sized>(
        repo: &R,
        req: &ExportRequest<'_>,
    ) -> AppResult<usize> {
        let path = Path::new(req.file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {}",
                req.file
            )));
        }

        let all = repo.list_all()?;
        let selected = match resolve_window(req.range, None, None, &all)? {
            Some((start, end)) => filter(&all, start, end, req.person),
            None => Vec::new(),
        };

        if selected.is_empty() {
            warning("No entries found for the selected range. Nothing to export.");
            return Ok(0);
        }

        ensure_writable(path, req.force)?;

        let rows: Vec<EntryExport> = selected.iter().map(EntryExport::from).collect();

        match req.format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        Ok(rows.len())
    }
}
