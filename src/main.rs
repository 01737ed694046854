use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use shopping_feed::core::config::DEFAULT_CONFIG_FILE;
use shopping_feed::core::log::init_logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for shopping_feed::AppCommand {
    fn from(cmd: Commands) -> shopping_feed::AppCommand {
        match cmd {
            Commands::Currencies { input } => shopping_feed::AppCommand::Currencies { input },
            Commands::Enrich { path, atomic } => shopping_feed::AppCommand::Enrich { path, atomic },
            Commands::Setup { .. } => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write an example configuration file
    Setup {
        /// Where to write the configuration
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,
    },
    /// Convert the exchange-rate XML into currency documents on stdout
    Currencies {
        /// Exchange-rate XML file [default: currency.xml]
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Add each item's native-market price to its per-market prices
    Enrich {
        /// Line-delimited item documents, rewritten in place [default: items.jsonl]
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Replace the file through a temporary file and rename
        #[arg(long)]
        atomic: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup { path }) => shopping_feed::cli::setup::run(path),
        Some(cmd) => shopping_feed::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Command failed");
    }
    result
}
