use crate::cli::commands::open_repo;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::validate::EntryValidator;
use crate::errors::{AppError, AppResult};
use crate::models::EntryInput;
use crate::ui::messages::success;
use crate::utils::date;

/// Add a new tracking entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { entry } = cmd {
        let input = EntryInput {
            name: entry
                .name
                .clone()
                .ok_or_else(|| AppError::validation("name", "--name is required"))?,
            date: entry
                .date
                .clone()
                .unwrap_or_else(|| date::today().format("%Y-%m-%d").to_string()),
            time: entry
                .time
                .clone()
                .ok_or_else(|| AppError::validation("time", "--time is required"))?,
            started: entry.started.clone(),
            scheduled_tx: entry.scheduled_tx.clone(),
            same_day_srp: entry.same_day_srp.clone(),
            note: entry.note.clone(),
        };

        let validator = EntryValidator::from_config(cfg)?;
        let mut repo = open_repo(cfg)?;

        let saved = AddLogic::apply(&mut repo, &validator, &input)?;

        success(format!(
            "Entry #{} added: {} on {} at {}.",
            saved.id,
            saved.name,
            saved.date_str(),
            saved.time_str()
        ));
    }

    Ok(())
}
