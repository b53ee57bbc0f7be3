use crate::cli::commands::open_repo;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, EntryPatch};
use crate::core::validate::EntryValidator;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, entry } = cmd {
        let patch = EntryPatch::from(entry);
        if patch.is_empty() {
            info("Nothing to change: pass at least one field to edit.");
            return Ok(());
        }

        let validator = EntryValidator::from_config(cfg)?;
        let mut repo = open_repo(cfg)?;

        let updated = EditLogic::apply(&mut repo, &validator, *id, patch)?;

        success(format!(
            "Entry #{} updated: {} on {} at {}.",
            updated.id,
            updated.name,
            updated.date_str(),
            updated.time_str()
        ));
    }

    Ok(())
}
