use crate::db::log::ttlog_soft;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use rusqlite::Connection;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, or zip it straight into an
    /// archive when `compress` is set.
    ///
    /// Returns the final path, or `None` if the user declined to overwrite
    /// an existing file.
    pub fn backup(
        db_path: &str,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = Path::new(db_path);

        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        let dest = if compress {
            archive_path(Path::new(dest_file))
        } else {
            PathBuf::from(dest_file)
        };

        if dest == src {
            return Err(AppError::Export(format!(
                "backup destination is the database itself: {}",
                dest.display()
            )));
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        if dest.exists() && !force && !confirm_overwrite(&dest)? {
            info("Backup cancelled.");
            return Ok(None);
        }

        if compress {
            compress_into(src, &dest)?;
            success(format!("Compressed backup created: {}", dest.display()));
        } else {
            fs::copy(src, &dest)?;
            success(format!("Backup created: {}", dest.display()));
        }

        if let Ok(conn) = Connection::open(src) {
            ttlog_soft(
                &conn,
                "backup",
                &dest.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            );
        }

        Ok(Some(dest))
    }
}

/// `backup.zip` stays as is, anything else gets its extension replaced.
fn archive_path(dest: &Path) -> PathBuf {
    let is_zip = dest
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("zip"));
    if is_zip {
        dest.to_path_buf()
    } else {
        dest.with_extension("zip")
    }
}

fn confirm_overwrite(dest: &Path) -> AppResult<bool> {
    warning(format!("The file '{}' already exists.", dest.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

/// Write the database file as the single entry of a Deflated archive.
fn compress_into(src: &Path, zip_path: &Path) -> AppResult<()> {
    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Export(format!("invalid database path: {}", src.display())))?;

    let mut input = fs::File::open(src)?;
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(entry_name, options)
        .map_err(io::Error::other)?;

    io::copy(&mut input, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    Ok(())
}
