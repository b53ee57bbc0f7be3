use crate::cli::parser::Cli;
use crate::config::Config;
use crate::config_path;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = config_path(cli);
    let (cfg, db_path) = Config::init_all(&path, cli.db.as_deref(), cli.test)?;

    println!("⚙️  Initializing rTracklog…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Database   : {}", db_path.display());

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    for problem in cfg.check() {
        warning(format!("Config: {}", problem));
    }

    log::ttlog_soft(
        &conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", db_path.display()),
    );

    success(format!("Database initialized at {}", db_path.display()));
    Ok(())
}
