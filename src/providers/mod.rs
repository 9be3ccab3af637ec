pub mod http;
pub mod shape;
pub mod util;

use crate::core::config::{AppConfig, ProviderConfig};
use crate::core::resolver::RateResolver;
use crate::core::source::RateSource;
use anyhow::{Context, Result};
use http::HttpRateSource;
use std::sync::Arc;
use std::time::Duration;

/// Builds HTTP sources in configured order.
pub fn build_sources(
    configs: &[ProviderConfig],
    default_timeout: Duration,
) -> Result<Vec<Arc<dyn RateSource>>> {
    configs
        .iter()
        .map(|config| {
            let source = HttpRateSource::new(config, default_timeout)
                .with_context(|| format!("Failed to set up provider {}", config.name))?;
            Ok(Arc::new(source) as Arc<dyn RateSource>)
        })
        .collect()
}

/// Wires a resolver from the configured provider lists.
pub fn resolver_from_config(config: &AppConfig) -> Result<RateResolver> {
    let timeout = config.timeout();
    Ok(RateResolver::new(
        build_sources(&config.providers.catalog, timeout)?,
        build_sources(&config.providers.conversion, timeout)?,
        config.anchor_currency.clone(),
    ))
}
