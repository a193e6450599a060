use crate::models::RangeKind;
use clap::{ArgGroup, Parser, Subcommand};

/// Command-line interface definition for dayflow
/// CLI application to log hourly work status, todos and inactive ranges
#[derive(Parser)]
#[command(
    name = "dayflow",
    version = env!("CARGO_PKG_VERSION"),
    about = "A daily activity tracker: log hourly work status, five daily todos and sleep/commute ranges, then review focus statistics",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(
            long = "migrate",
            help = "Run pending database migrations and upgrade stored day records"
        )]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record the work status of one hour
    Mark {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Hour of the day (0-23, or HH:00)
        hour: String,

        /// Status: slacking|s, normal|n|work, focused|f, empty|e|clear
        status: String,

        /// Clear the hour when it already has this status
        #[arg(long = "toggle")]
        toggle: bool,
    },

    /// Edit one of the five daily todo slots
    #[command(group(ArgGroup::new("state").args(["done", "undone", "toggle"])))]
    Todo {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Slot number (1-5)
        index: usize,

        /// New text of the slot
        #[arg(long = "text")]
        text: Option<String>,

        #[arg(long = "done", help = "Mark the slot as completed")]
        done: bool,

        #[arg(long = "undone", help = "Mark the slot as not completed")]
        undone: bool,

        #[arg(long = "toggle", help = "Flip the completed flag")]
        toggle: bool,
    },

    /// Configure an inactive range (sleep1, sleep2 or out) for one day
    #[command(group(ArgGroup::new("switch").args(["enable", "disable", "toggle"])))]
    Range {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Which range to edit
        #[arg(value_enum)]
        kind: RangeKind,

        /// Start hour (0-23)
        #[arg(long = "start")]
        start: Option<String>,

        /// End hour (0-23); an end before the start crosses midnight
        #[arg(long = "end")]
        end: Option<String>,

        #[arg(long = "enable")]
        enable: bool,

        #[arg(long = "disable")]
        disable: bool,

        #[arg(long = "toggle")]
        toggle: bool,
    },

    /// Show one day: active hours, todos, ranges and statistics
    Show {
        /// Date (YYYY-MM-DD); defaults to today
        date: Option<String>,

        #[arg(long = "today", conflicts_with = "date", help = "Show today's record")]
        now: bool,
    },

    /// Show the status trend over the days ending at DATE
    Trend {
        /// Last date of the window (YYYY-MM-DD); defaults to today
        date: Option<String>,

        /// Window length in days, 0-366 (default from configuration)
        #[arg(long = "days", short = 'd', value_parser = clap::value_parser!(u32).range(0..=366))]
        days: Option<u32>,

        /// Read the stored payload as is, without migrating it
        #[arg(long = "raw", hide = true)]
        raw: bool,
    },

    /// Ask the AI service for a short review of one day
    Summary {
        /// Date (YYYY-MM-DD); defaults to today
        date: Option<String>,
    },

    /// Export the whole store as pretty-printed JSON
    Export {
        /// Output file (default: workflow_backup_YYYYMMDD.json in export_dir)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
