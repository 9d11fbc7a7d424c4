use crate::export::ExportFormat;
use crate::models::job_type::JobType;
use clap::{Parser, Subcommand};

/// Command-line interface definition for jobcard
/// CLI application to log maintenance jobs into a shared sheet
#[derive(Parser)]
#[command(
    name = "jobcard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log field maintenance jobs (site, technicians, materials) into a shared sheet",
    long_about = None
)]
pub struct Cli {
    /// Override the sheet address (CSV path, .sqlite path or sqlite://path)
    #[arg(global = true, long = "sheet")]
    pub sheet: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, the sheet and the journal
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
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

    /// Show sites, technicians, materials (with default units) and units
    Catalog,

    /// Save one job card in a single command
    Add {
        /// Description of the work done
        #[arg(long = "desc", short = 'd')]
        desc: String,

        /// Site (from the catalog)
        #[arg(long = "site", short = 's')]
        site: Option<String>,

        /// Date of the job (YYYY-MM-DD, default today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Start time (HH:MM)
        #[arg(long = "start")]
        start: Option<String>,

        /// End time (HH:MM)
        #[arg(long = "end")]
        end: Option<String>,

        /// Job type
        #[arg(long = "type", value_enum, default_value = "job")]
        job_type: JobType,

        /// Technician on the job (repeatable)
        #[arg(long = "tech", short = 't')]
        techs: Vec<String>,

        /// Material as NAME=QTY or NAME=QTY:UNIT (repeatable)
        #[arg(long = "material", short = 'm')]
        materials: Vec<String>,

        /// Refuse to save if the sheet changed while saving
        #[arg(long = "conflict-check")]
        conflict_check: bool,
    },

    /// Build a job card interactively, line by line
    Session,

    /// Show the most recent rows of the sheet
    History {
        #[arg(long = "last", short = 'n', help = "Number of rows (default from config)")]
        last: Option<usize>,
    },

    /// Export the whole sheet
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal journal
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
