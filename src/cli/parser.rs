use crate::export::ExportFormat;
use crate::models::{DateRange, TypeFilter};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for CareSync
/// Browse, filter, share and export a patient's health timeline
#[derive(Parser)]
#[command(
    name = "caresync",
    version = env!("CARGO_PKG_VERSION"),
    about = "CareSync health timeline: filter, browse, share and export health records",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Load event records from a JSON file instead of the built-in history
    #[arg(global = true, long = "records", value_name = "FILE")]
    pub records: Option<PathBuf>,

    /// Pretend today is this date (YYYY-MM-DD) when applying date ranges
    #[arg(global = true, long = "today", hide = true)]
    pub today: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filter controls shared by `timeline` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Event type to show
    #[arg(long, value_enum, value_name = "TYPE")]
    pub filter: Option<TypeFilter>,

    /// Date window relative to today
    #[arg(long, value_enum, value_name = "RANGE")]
    pub range: Option<DateRange>,

    /// Case-insensitive text to find in titles and descriptions
    #[arg(long, short = 's', value_name = "TEXT")]
    pub search: Option<String>,

    /// Start from a shared query string (e.g. "filter=lab&range=1y")
    #[arg(long, short = 'q', value_name = "QUERY")]
    pub query: Option<String>,

    /// Reset every filter to its default
    #[arg(long = "clear")]
    pub clear: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

    /// Show the filtered health timeline
    Timeline {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long = "details", short = 'd', help = "Show full event cards")]
        details: bool,

        #[arg(long = "share", help = "Print a shareable link for the current filters")]
        share: bool,
    },

    /// Browse the timeline interactively, one filter change per line
    Browse {
        #[arg(long, short = 'q', value_name = "QUERY")]
        query: Option<String>,
    },

    /// Show the result history of a lab record
    Trend {
        /// Record id
        id: u32,

        #[arg(long, value_name = "FILE", help = "Also write the trend sparkline as SVG")]
        svg: Option<PathBuf>,
    },

    /// Export the filtered timeline
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Show, dismiss or restore the privacy banner
    Banner {
        #[arg(long, conflicts_with = "reset")]
        dismiss: bool,

        #[arg(long)]
        reset: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
