//! Currency identifiers and display metadata

use super::tables;
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// A currency identifier such as `USD`.
///
/// Codes are normalized to uppercase. They are not checked against ISO-4217:
/// anything in the static tables or returned by a provider is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// The currency the approximate rate table is quoted against.
    pub fn usd() -> Self {
        CurrencyCode(tables::APPROXIMATE_ANCHOR.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn symbol(&self) -> Option<&'static str> {
        tables::symbol(self.as_str())
    }

    /// Display name from the static table, or `"<CODE> Currency"` when unknown.
    pub fn display_name(&self) -> String {
        tables::name(self.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} Currency", self.0))
    }
}

impl FromStr for CurrencyCode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.is_empty() {
            return Err(anyhow!("Currency code is empty"));
        }
        if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(anyhow!("Invalid currency code: {}", code));
        }
        Ok(CurrencyCode(code.to_ascii_uppercase()))
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> String {
        code.0
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: CurrencyCode,
    pub display_name: String,
    pub symbol: Option<String>,
}

impl CurrencyInfo {
    /// Builds an entry from the static name and symbol tables.
    pub fn from_code(code: CurrencyCode) -> Self {
        CurrencyInfo {
            display_name: code.display_name(),
            symbol: code.symbol().map(str::to_string),
            code,
        }
    }

    /// Builds an entry with an explicit display name, symbol still from the table.
    pub fn with_name(code: CurrencyCode, display_name: &str) -> Self {
        CurrencyInfo {
            display_name: display_name.to_string(),
            symbol: code.symbol().map(str::to_string),
            code,
        }
    }

    pub fn is_popular(&self) -> bool {
        tables::popular_rank(self.code.as_str()).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        let code: CurrencyCode = " eur ".parse().unwrap();
        assert_eq!(code.as_str(), "EUR");
        assert_eq!(code.to_string(), "EUR");
    }

    #[test]
    fn test_parse_rejects_empty_and_garbage() {
        assert!("".parse::<CurrencyCode>().is_err());
        assert!("   ".parse::<CurrencyCode>().is_err());
        assert!("U$D".parse::<CurrencyCode>().is_err());
    }

    #[test]
    fn test_display_name_falls_back_for_unknown_codes() {
        let known: CurrencyCode = "INR".parse().unwrap();
        assert_eq!(known.display_name(), "Indian Rupee");

        let unknown: CurrencyCode = "ZZZ".parse().unwrap();
        assert_eq!(unknown.display_name(), "ZZZ Currency");
        assert!(unknown.symbol().is_none());
    }

    #[test]
    fn test_currency_info_from_code() {
        let info = CurrencyInfo::from_code("GBP".parse().unwrap());
        assert_eq!(info.display_name, "British Pound Sterling");
        assert_eq!(info.symbol.as_deref(), Some("£"));
        assert!(info.is_popular());

        let info = CurrencyInfo::from_code("ISK".parse().unwrap());
        assert!(!info.is_popular());
    }

    #[test]
    fn test_deserialize_from_yaml_string() {
        let code: CurrencyCode = serde_yaml::from_str("\"jpy\"").unwrap();
        assert_eq!(code.as_str(), "JPY");
        assert!(serde_yaml::from_str::<CurrencyCode>("\"\"").is_err());
    }
}
