use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rTracklog
#[derive(Parser)]
#[command(
    name = "rtracklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log per-person daily tracking entries and report checkbox statistics using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Use a specific configuration file instead of the default one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config_file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Entry fields shared by `add` and `edit`.
///
/// Checkbox flags can be given bare (`--started`) or with an explicit
/// value (`--started=no`).
#[derive(Args, Debug, Clone, Default)]
pub struct EntryArgs {
    /// Person name (one of the configured names)
    #[arg(long)]
    pub name: Option<String>,

    /// Date of the entry (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Time slot (e.g. "08:00 AM" or 13:30)
    #[arg(long)]
    pub time: Option<String>,

    /// Started same day
    #[arg(long, num_args = 0..=1, default_missing_value = "yes", value_name = "YES|NO")]
    pub started: Option<String>,

    /// Scheduled Tx
    #[arg(long = "scheduled-tx", num_args = 0..=1, default_missing_value = "yes", value_name = "YES|NO")]
    pub scheduled_tx: Option<String>,

    /// Same-day SRP
    #[arg(long = "same-day-srp", num_args = 0..=1, default_missing_value = "yes", value_name = "YES|NO")]
    pub same_day_srp: Option<String>,

    /// Free-text note
    #[arg(long)]
    pub note: Option<String>,
}

/// Date window and person selection shared by the read-only views.
#[derive(Args, Debug, Clone, Default)]
pub struct WindowArgs {
    /// YYYY, YYYY-MM, YYYY-MM-DD or A:B of the same format ("all" for everything)
    #[arg(long, short = 'r', value_name = "RANGE")]
    pub range: Option<String>,

    /// First date to include (overrides the start of --range)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Last date to include (overrides the end of --range)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,

    /// Only entries for this person
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration for invalid values")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Print the valid time slots
    Slots,

    /// Add a tracking entry
    Add {
        #[command(flatten)]
        entry: EntryArgs,
    },

    /// List entries, newest first (read-only)
    List {
        #[command(flatten)]
        window: WindowArgs,
    },

    /// Edit an existing entry; omitted fields keep their value
    Edit {
        /// Entry id
        id: i64,

        #[command(flatten)]
        entry: EntryArgs,
    },

    /// Delete an entry by id
    Del {
        /// Entry id
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Checkbox statistics per person and overall
    Report {
        #[command(flatten)]
        window: WindowArgs,

        #[arg(long, help = "Print the report as JSON")]
        json: bool,
    },

    /// Export entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_name = "RANGE", help = "Filter export by year/month/day or a custom range")]
        range: Option<String>,

        #[arg(long, help = "Only entries for this person")]
        name: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import entries from a CSV export of the tracking sheet
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing backup without asking")]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}
