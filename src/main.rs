use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fxconv::cli::setup::{setup, setup_at_path};
use fxconv::core::log::init_logging;

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

impl From<Commands> for fxconv::AppCommand {
    fn from(cmd: Commands) -> fxconv::AppCommand {
        match cmd {
            Commands::Currencies => fxconv::AppCommand::Currencies,
            Commands::Convert {
                amount,
                from,
                to,
                swap,
            } => fxconv::AppCommand::Convert {
                amount,
                from,
                to,
                swap,
            },
            Commands::Watch { amount, from, to } => fxconv::AppCommand::Watch { amount, from, to },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// List the currencies available for conversion
    Currencies,
    /// Convert an amount between two currencies
    Convert {
        /// Amount to convert, defaults to the configured amount
        amount: Option<String>,
        /// Source currency code
        from: Option<String>,
        /// Target currency code
        to: Option<String>,
        /// Exchange source and target currencies
        #[arg(short, long)]
        swap: bool,
    },
    /// Keep a conversion up to date until interrupted
    Watch {
        amount: Option<String>,
        from: Option<String>,
        to: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => match cli.config_path.as_deref() {
            Some(path) => setup_at_path(path),
            None => setup(),
        },
        Some(cmd) => fxconv::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
