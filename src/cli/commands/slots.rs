use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::time::format_slot;

/// Print the time slots accepted by `add`/`edit`.
pub fn handle(cfg: &Config) -> AppResult<()> {
    for slot in cfg.slots()? {
        println!("{}", format_slot(slot));
    }
    Ok(())
}
