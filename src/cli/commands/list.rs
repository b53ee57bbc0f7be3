use crate::cli::commands::open_repo;
use crate::cli::parser::{Commands, WindowArgs};
use crate::config::Config;
use crate::core::filter::filter;
use crate::core::range::resolve_window;
use crate::errors::AppResult;
use crate::models::TrackingEntry;
use crate::repository::EntryRepository;
use crate::ui::messages::info;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { window } = cmd {
        let repo = open_repo(cfg)?;
        let all = repo.list_all()?;

        if all.is_empty() {
            info("No data yet.");
            return Ok(());
        }

        let (entries, start, end) = select(&all, window)?;

        if entries.is_empty() {
            info(format!("No entries between {} and {}.", start, end));
            return Ok(());
        }

        println!("Entries from {} to {} ({}):\n", start, end, entries.len());
        print!("{}", render_entries(&entries));
    }

    Ok(())
}

/// Resolve the window against the stored entries and apply it.
pub(crate) fn select(
    all: &[TrackingEntry],
    window: &WindowArgs,
) -> AppResult<(Vec<TrackingEntry>, String, String)> {
    match resolve_window(
        window.range.as_deref(),
        window.from.as_deref(),
        window.to.as_deref(),
        all,
    )? {
        Some((start, end)) => Ok((
            filter(all, start, end, window.name.as_deref()),
            start.to_string(),
            end.to_string(),
        )),
        None => Ok((Vec::new(), "-".to_string(), "-".to_string())),
    }
}

fn mark(v: bool) -> String {
    if v { "✔".to_string() } else { "·".to_string() }
}

pub(crate) fn render_entries(entries: &[TrackingEntry]) -> String {
    let mut table = Table::new([
        "ID", "NAME", "DATE", "TIME", "STARTED", "SCHED TX", "SD SRP", "NOTE",
    ]);

    for e in entries {
        table.add_row(vec![
            e.id.to_string(),
            e.name.clone(),
            e.date_str(),
            e.time_str(),
            mark(e.started),
            mark(e.scheduled_tx),
            mark(e.same_day_srp),
            e.note.clone(),
        ]);
    }

    table.render()
}
