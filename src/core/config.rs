use crate::core::currency::CurrencyCode;
use crate::core::refresh::DEFAULT_REFRESH_INTERVAL;
use crate::providers::shape::ResponseShape;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use std::{fs, path::PathBuf};
use tracing::debug;

/// One HTTP rate provider. `{base}` in the URL is replaced by the base currency.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProviderConfig {
    pub name: String,
    pub url: String,
    pub shape: ResponseShape,
    /// Overrides the global `timeout_secs` for this provider.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ProviderConfig {
    fn new(name: &str, url: &str, shape: ResponseShape) -> Self {
        ProviderConfig {
            name: name.to_string(),
            url: url.to_string(),
            shape,
            timeout_secs: None,
        }
    }
}

/// Ordered provider lists, most reliable first.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ProvidersConfig {
    pub catalog: Vec<ProviderConfig>,
    pub conversion: Vec<ProviderConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            catalog: vec![
                ProviderConfig::new(
                    "exchangerate-api",
                    "https://api.exchangerate-api.com/v4/latest/{base}",
                    ResponseShape::Rates,
                ),
                ProviderConfig::new(
                    "fixer",
                    "https://api.fixer.io/latest?access_key=demo",
                    ResponseShape::Rates,
                ),
                ProviderConfig::new(
                    "open-er-api",
                    "https://open.er-api.com/v6/latest/{base}",
                    ResponseShape::Rates,
                ),
            ],
            conversion: vec![
                ProviderConfig::new(
                    "exchangerate-api",
                    "https://api.exchangerate-api.com/v4/latest/{base}",
                    ResponseShape::Rates,
                ),
                ProviderConfig::new(
                    "open-er-api",
                    "https://open.er-api.com/v6/latest/{base}",
                    ResponseShape::Rates,
                ),
                ProviderConfig::new(
                    "fixer",
                    "https://api.fixer.io/latest?base={base}&access_key=demo",
                    ResponseShape::Rates,
                ),
                ProviderConfig::new(
                    "currencyapi",
                    "https://api.currencyapi.com/v3/latest?apikey=demo&base_currency={base}",
                    ResponseShape::DataValue,
                ),
                ProviderConfig::new(
                    "exchangerate-api-v6",
                    "https://v6.exchangerate-api.com/v6/demo/latest/{base}",
                    ResponseShape::ConversionRates,
                ),
            ],
        }
    }
}

/// Values preselected when the user leaves an input out.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct DefaultsConfig {
    pub from: String,
    pub to: String,
    pub amount: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        DefaultsConfig {
            from: "USD".to_string(),
            to: "EUR".to_string(),
            amount: "1".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    /// Currency the catalog providers quote against.
    pub anchor_currency: CurrencyCode,
    pub timeout_secs: u64,
    pub refresh_interval_secs: u64,
    pub defaults: DefaultsConfig,
    pub providers: ProvidersConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            anchor_currency: CurrencyCode::usd(),
            timeout_secs: 10,
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL.as_secs(),
            defaults: DefaultsConfig::default(),
            providers: ProvidersConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, or built-in defaults if there is none.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using built-in defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "fxconv", "fxconv")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}
