pub mod cli;
pub mod core;
pub mod store;

use crate::core::config::FeedConfig;
use crate::store::jsonl::WriteMode;
use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

pub enum AppCommand {
    /// Emit currency documents to stdout
    Currencies { input: Option<PathBuf> },
    /// Add native-market prices to the items file
    Enrich { path: Option<PathBuf>, atomic: bool },
}

/// Runs a feed command. Arguments given on the command line take precedence over
/// the config file, which takes precedence over the working-directory defaults.
pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    let config = FeedConfig::load(config_path)?;
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Currencies { input } => {
            let input = input.unwrap_or(config.currency_xml);
            let stdout = std::io::stdout();
            cli::currencies::run(&input, &mut stdout.lock())?;
        }
        AppCommand::Enrich { path, atomic } => {
            let path = path.unwrap_or(config.items_path);
            let mode = if atomic || config.atomic_write {
                WriteMode::Atomic
            } else {
                WriteMode::Overwrite
            };
            cli::enrich::run(&path, mode)?;
        }
    }
    Ok(())
}
