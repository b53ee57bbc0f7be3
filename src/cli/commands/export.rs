use crate::cli::commands::open_repo;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportRequest};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        name,
        force,
    } = cmd
    {
        let repo = open_repo(cfg)?;
        let req = ExportRequest {
            format: *format,
            file,
            range: range.as_deref(),
            person: name.as_deref(),
            force: *force,
        };
        ExportLogic::export(&repo, &req)?;
    }
    Ok(())
}
