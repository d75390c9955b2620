use crate::core::list::ListFilter;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for subtracker
/// CLI application to keep track of recurring subscriptions and their renewals
#[derive(Parser)]
#[command(
    name = "subtracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track recurring subscriptions, their renewal dates and upcoming payments",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Use the HTTP store at this base URL instead of the local database
    #[arg(global = true, long = "api", value_name = "URL", conflicts_with = "db")]
    pub api: Option<String>,

    /// Compute renewals as of this date (YYYY-MM-DD) instead of today
    #[arg(global = true, long = "on", value_name = "DATE")]
    pub on: Option<String>,

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

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a subscription
    Add {
        /// Display name (e.g. "Netflix")
        name: String,

        #[arg(long = "price", help = "Price per period (e.g. 9.99 or 9,99)")]
        price: String,

        #[arg(
            long = "type",
            help = "Renewal cadence: mensal/monthly or anual/yearly"
        )]
        renewal_type: String,

        #[arg(long = "start", help = "First billing date (YYYY-MM-DD)")]
        start: String,

        #[arg(long = "category", help = "Category (e.g. Streaming)")]
        category: String,

        #[arg(long = "description", help = "Optional free text")]
        description: Option<String>,
    },

    /// Change one or more fields of a subscription
    Edit {
        /// Subscription id
        id: String,

        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "price")]
        price: Option<String>,

        #[arg(long = "type", help = "Renewal cadence: mensal/monthly or anual/yearly")]
        renewal_type: Option<String>,

        #[arg(long = "start", help = "First billing date (YYYY-MM-DD)")]
        start: Option<String>,

        #[arg(long = "category")]
        category: Option<String>,

        #[arg(long = "description")]
        description: Option<String>,
    },

    /// Delete a subscription by id
    Del {
        /// Subscription id
        id: String,

        #[arg(long = "force", help = "Do not ask for confirmation")]
        force: bool,
    },

    /// List subscriptions with their next renewal
    List {
        #[arg(long, short, value_enum, default_value_t = ListFilter::All)]
        filter: ListFilter,
    },

    /// Show renewals inside their notification window
    Notify,

    /// Monthly and yearly totals
    Summary,

    /// Export subscriptions with their renewal data
    Export {
        #[arg(long, value_enum, help = "Output format")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Absolute path of the output file")]
        file: String,

        #[arg(long, help = "Overwrite the output file without asking")]
        force: bool,
    },
}
