use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Writes the default configuration file (skipped in test mode).
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::init_all(cli.test)?;

    info("Initializing rInvoicer…");
    if cli.test {
        info(format!("Test mode: configuration not written ({})", path.display()));
    } else {
        success(format!("Config file: {}", path.display()));
    }

    Ok(())
}
