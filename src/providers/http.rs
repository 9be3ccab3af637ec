use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

use super::shape::ResponseShape;
use super::util::render_endpoint;
use crate::core::config::ProviderConfig;
use crate::core::currency::CurrencyCode;
use crate::core::source::{RateSource, RateTable};

/// A JSON-over-HTTP rate provider with a fixed response shape.
pub struct HttpRateSource {
    name: String,
    url_template: String,
    shape: ResponseShape,
    client: reqwest::Client,
}

impl HttpRateSource {
    /// Builds the source, using `default_timeout` unless the provider sets its own.
    pub fn new(config: &ProviderConfig, default_timeout: Duration) -> Result<Self> {
        let timeout = config
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(default_timeout);
        let client = reqwest::Client::builder()
            .user_agent("fxconv/1.0")
            .timeout(timeout)
            .build()?;
        Ok(HttpRateSource {
            name: config.name.clone(),
            url_template: config.url.clone(),
            shape: config.shape,
            client,
        })
    }
}

#[async_trait]
impl RateSource for HttpRateSource {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(
        name = "RateFetch",
        skip(self),
        fields(provider = %self.name, base = %base)
    )]
    async fn fetch_rates(&self, base: &CurrencyCode) -> Result<RateTable> {
        let url = render_endpoint(&self.url_template, base);
        debug!("Requesting rates from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} from {} URL: {}", e, self.name, url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} from {}",
                response.status(),
                self.name
            ));
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            bail!("Empty response from {}", self.name);
        }

        let body: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse JSON response from {}: {}", self.name, e))?;

        let table = self.shape.extract(&body).ok_or_else(|| {
            anyhow!(
                "No usable `{}` rates in response from {}",
                self.shape.field(),
                self.name
            )
        })?;
        debug!(count = table.len(), "Parsed rates");
        Ok(table)
    }
}
