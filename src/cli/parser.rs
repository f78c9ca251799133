use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for machlog
/// CLI application to analyze machine status logs and daily sales
#[derive(Parser)]
#[command(
    name = "machlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Derive machine operating KPIs (idle time, utilization, unit price) from status logs and sales",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and dataset directory
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Single-machine daily report
    Daily {
        /// Machine to report on
        #[arg(long, help = "Machine id (e.g. M1-1)")]
        machine: String,

        /// Report date (YYYY-MM-DD); defaults to yesterday
        #[arg(long, help = "Report date (YYYY-MM-DD), defaults to yesterday")]
        date: Option<String>,

        #[arg(long = "details", help = "Also print the raw event rows")]
        details: bool,
    },

    /// Multi-machine period analysis
    Analysis {
        /// Comma-separated machine ids, or "all" for the configured roster
        #[arg(long, value_delimiter = ',', help = "Machine ids (comma-separated, or 'all')")]
        machines: Vec<String>,

        /// Range start (YYYY-MM-DD); defaults to 7 days before the end
        #[arg(long = "from", help = "Range start (YYYY-MM-DD)")]
        from: Option<String>,

        /// Range end (YYYY-MM-DD); defaults to yesterday
        #[arg(long = "to", help = "Range end (YYYY-MM-DD)")]
        to: Option<String>,
    },

    /// Export a period analysis to a file
    Export {
        #[arg(long, value_delimiter = ',', help = "Machine ids (comma-separated, or 'all')")]
        machines: Vec<String>,

        #[arg(long = "from", help = "Range start (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long = "to", help = "Range end (YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },
}
