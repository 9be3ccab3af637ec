pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use crate::core::ConversionQuery;
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Commands that run against a configured resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Currencies,
    Convert {
        amount: Option<String>,
        from: Option<String>,
        to: Option<String>,
        swap: bool,
    },
    Watch {
        amount: Option<String>,
        from: Option<String>,
        to: Option<String>,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("fxconv starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let resolver = Arc::new(providers::resolver_from_config(&config)?);
    let defaults = &config.defaults;

    match command {
        AppCommand::Currencies => cli::currencies::run(&resolver).await,
        AppCommand::Convert {
            amount,
            from,
            to,
            swap,
        } => {
            cli::convert::run(
                &resolver,
                from.as_deref().unwrap_or(&defaults.from),
                to.as_deref().unwrap_or(&defaults.to),
                amount.as_deref().unwrap_or(&defaults.amount),
                swap,
            )
            .await
        }
        AppCommand::Watch { amount, from, to } => {
            let query = ConversionQuery::parse(
                from.as_deref().unwrap_or(&defaults.from),
                to.as_deref().unwrap_or(&defaults.to),
                amount.as_deref().unwrap_or(&defaults.amount),
            )?;
            cli::watch::run(resolver, query, config.refresh_interval()).await
        }
    }
}
