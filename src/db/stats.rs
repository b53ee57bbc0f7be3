use crate::db::pool::DbPool;
use ansi_term::Colour::{Cyan, Green, Yellow};
use ansi_term::Style;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    let label = |s: &str| Cyan.paint(format!("• {}:", s)).to_string();
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{} {}", label("File"), Yellow.paint(db_path));
    println!("{} {:.1} KB", label("Size"), file_kb);

    //
    // 2) TOTAL ENTRIES
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM tracking", [], |row| row.get(0))?;
    println!("{} {}", label("Total entries"), Green.paint(count.to_string()));

    //
    // 3) DATE RANGE
    //
    let bounds: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row("SELECT MIN(date), MAX(date) FROM tracking", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()?;

    let dim = Style::new().dimmed().paint("--").to_string();
    let (first, last) = bounds.unwrap_or((None, None));
    println!("{}", label("Date range"));
    println!("    from: {}", first.unwrap_or_else(|| dim.clone()));
    println!("    to:   {}", last.unwrap_or(dim));

    //
    // 4) ENTRIES PER PERSON
    //
    let mut stmt = pool
        .conn
        .prepare("SELECT name, COUNT(*) FROM tracking GROUP BY name ORDER BY name ASC")?;
    let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?;

    println!("{}", label("Entries per person"));
    for r in rows {
        let (name, n) = r?;
        println!("    {}: {}", name, n);
    }

    println!();
    Ok(())
}
