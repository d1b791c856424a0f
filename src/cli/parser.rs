use crate::export::ExportFormat;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for rInvoicer
#[derive(Parser)]
#[command(
    name = "rinvoicer",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn a personnel roster, a jobcode table and a time ledger into monthly project invoices",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of the default one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the personnel roster CSV
    #[arg(global = true, long = "personnel", value_name = "FILE")]
    pub personnel: Option<String>,

    /// Override the jobcode table CSV
    #[arg(global = true, long = "jobcodes", value_name = "FILE")]
    pub jobcodes: Option<String>,

    /// Override the time ledger CSV
    #[arg(global = true, long = "ledger", value_name = "FILE")]
    pub ledger: Option<String>,

    /// Increase diagnostic output (-v info, -vv debug)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// Print the ordered client / month / project hierarchy with totals
    Summary,

    /// Report every ledger row that cannot be classified, plus format warnings
    Check,

    /// Export the invoice lines of every project month to a single file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Generate one invoice PDF per project month
    Generate {
        #[arg(long, value_name = "DIR", help = "Output folder (default: output_dir from config)")]
        out: Option<String>,

        #[arg(long, help = "Recreate month folders that already exist")]
        overwrite: bool,
    },
}
