use crate::cli::commands::open_repo;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::core::validate::EntryValidator;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let validator = EntryValidator::from_config(cfg)?;
        let mut repo = open_repo(cfg)?;

        let ids = ImportLogic::apply(&mut repo, &validator, Path::new(file))?;

        if ids.is_empty() {
            info("The file contains no entries.");
        } else {
            success(format!("Imported {} entries.", ids.len()));
        }
    }
    Ok(())
}
