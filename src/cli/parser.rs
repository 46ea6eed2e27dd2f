use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for TimeLoom
#[derive(Parser)]
#[command(
    name = "timeloom",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple time tracking CLI: start/stop task timers, summarize by category, export to CSV",
    long_about = None
)]
pub struct Cli {
    /// Override data file path (useful for tests or a custom file)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Without a subcommand the interactive menu is opened
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the data file and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

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

    /// Interactive numbered menu (start, stop, list, summarize, delete, exit)
    Menu,

    /// Full-screen dashboard with live timer, charts and theme toggle
    Dashboard,

    /// List all logged entries
    List,

    /// Total minutes per category
    Summary,

    /// Bar chart of total minutes per category
    Chart,

    /// Heatmap of total minutes per day over the last seven days
    Heatmap,

    /// Delete an entry by its number (as shown by `list`)
    Del {
        /// Entry number (0-based)
        index: usize,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Update an existing entry
    Edit {
        /// Entry number (0-based)
        index: usize,

        /// New task name
        #[arg(long)]
        task: Option<String>,

        /// New category
        #[arg(long)]
        category: Option<String>,

        /// New start time (YYYY-MM-DD HH:MM:SS)
        #[arg(long)]
        start: Option<String>,

        /// New end time (YYYY-MM-DD HH:MM:SS)
        #[arg(long)]
        end: Option<String>,
    },

    /// Export all entries
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (defaults to `export_file` from the configuration)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the data file
    Backup {
        /// Destination file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup (zip on Windows, tar.gz on Unix)
        #[arg(long)]
        compress: bool,

        /// Overwrite destination without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print the internal log")]
        print: bool,
    },
}
