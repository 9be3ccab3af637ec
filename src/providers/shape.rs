//! Adapters for the JSON shapes exchange-rate providers answer with.
//!
//! Every provider is configured with exactly one shape and only that shape
//! is tried on its responses.

use crate::core::source::RateTable;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseShape {
    /// `{"rates": {"EUR": 0.85}}`
    Rates,
    /// `{"data": {"EUR": {"value": 0.85}}}`
    DataValue,
    /// `{"conversion_rates": {"EUR": 0.85}}`
    ConversionRates,
}

impl ResponseShape {
    /// Top-level field holding the rates.
    pub fn field(&self) -> &'static str {
        match self {
            ResponseShape::Rates => "rates",
            ResponseShape::DataValue => "data",
            ResponseShape::ConversionRates => "conversion_rates",
        }
    }

    /// Extracts every usable rate, or `None` if the body does not have this shape
    /// or holds no positive numeric rate.
    pub fn extract(&self, body: &Value) -> Option<RateTable> {
        let entries = body.get(self.field())?.as_object()?;
        let table: RateTable = entries
            .iter()
            .filter_map(|(code, entry)| {
                let rate = match self {
                    ResponseShape::DataValue => entry.get("value")?,
                    ResponseShape::Rates | ResponseShape::ConversionRates => entry,
                };
                positive_decimal(rate).map(|rate| (code.clone(), rate))
            })
            .collect();
        (!table.is_empty()).then_some(table)
    }
}

impl Display for ResponseShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field())
    }
}

/// Reads a JSON number as an exact decimal, keeping only positive values.
fn positive_decimal(value: &Value) -> Option<Decimal> {
    let text = value.as_number()?.to_string();
    let rate = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()?;
    (rate > Decimal::ZERO).then_some(rate)
}
