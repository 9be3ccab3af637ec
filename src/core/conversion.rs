//! Conversion requests, results and the errors surfaced to the user.

use super::currency::CurrencyCode;
use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use thiserror::Error;

/// Decimal places kept on a converted amount.
pub const AMOUNT_SCALE: u32 = 4;

/// Input rejected before any provider is contacted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select both currencies.")]
    MissingCurrency,
    #[error("Please enter a valid amount.")]
    InvalidAmount(String),
}

/// Failures a conversion can surface to the presentation layer.
///
/// Individual provider failures never appear here; they are logged and the
/// next provider is tried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(
        "Unable to get current exchange rates for {from} to {to}. Please try again later or check your internet connection."
    )]
    NoRouteAvailable { from: CurrencyCode, to: CurrencyCode },
    #[error("Amount is too large or too small to convert.")]
    AmountOutOfRange,
    #[error("Conversion was replaced by a newer request.")]
    Superseded,
}

/// A validated conversion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionQuery {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub amount: Decimal,
}

impl ConversionQuery {
    /// Validates raw user input.
    ///
    /// A positive amount too large or too small to hold as a [`Decimal`] is
    /// reported as [`ConversionError::AmountOutOfRange`], not as invalid input.
    pub fn parse(from: &str, to: &str, amount: &str) -> Result<Self, ConversionError> {
        let from: CurrencyCode = from.parse().map_err(|_| ValidationError::MissingCurrency)?;
        let to: CurrencyCode = to.parse().map_err(|_| ValidationError::MissingCurrency)?;
        let amount = parse_amount(amount)?;
        Ok(ConversionQuery { from, to, amount })
    }

    pub fn swapped(self) -> Self {
        ConversionQuery {
            from: self.to,
            to: self.from,
            amount: self.amount,
        }
    }
}

fn parse_amount(raw: &str) -> Result<Decimal, ConversionError> {
    let trimmed = raw.trim();
    let invalid = || ConversionError::from(ValidationError::InvalidAmount(raw.to_string()));
    // Digit separators are not part of a plain number.
    if trimmed.contains('_') {
        return Err(invalid());
    }

    match Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed)) {
        Ok(amount) if amount > Decimal::ZERO => Ok(amount),
        _ => match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => {
                Err(ConversionError::AmountOutOfRange)
            }
            _ => Err(invalid()),
        },
    }
}

/// A resolved conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub source_amount: Decimal,
    pub rate: Decimal,
    pub converted_amount: Decimal,
    /// Set when the rate came from the static fallback table.
    pub is_approximate: bool,
    /// Name of the live provider that supplied the rate.
    pub provider: Option<String>,
    pub fetched_at: DateTime<Utc>,
}

impl ConversionResult {
    /// Same-currency result: rate 1 and the amount passed through untouched.
    pub fn identity(query: &ConversionQuery) -> Self {
        ConversionResult {
            from: query.from.clone(),
            to: query.to.clone(),
            source_amount: query.amount,
            rate: Decimal::ONE,
            converted_amount: query.amount,
            is_approximate: false,
            provider: None,
            fetched_at: Utc::now(),
        }
    }

    /// Result backed by a live provider's rate.
    pub fn live(
        query: &ConversionQuery,
        rate: Decimal,
        provider: &str,
    ) -> Result<Self, ConversionError> {
        Self::with_rate(query, rate, Some(provider.to_string()))
    }

    /// Result backed by the static approximate table.
    pub fn approximate(query: &ConversionQuery, rate: Decimal) -> Result<Self, ConversionError> {
        Self::with_rate(query, rate, None)
    }

    fn with_rate(
        query: &ConversionQuery,
        rate: Decimal,
        provider: Option<String>,
    ) -> Result<Self, ConversionError> {
        let converted_amount = convert_amount(query.amount, rate)?;
        Ok(ConversionResult {
            from: query.from.clone(),
            to: query.to.clone(),
            source_amount: query.amount,
            rate,
            converted_amount,
            is_approximate: provider.is_none(),
            provider,
            fetched_at: Utc::now(),
        })
    }
}

/// `round(amount * rate, 4)`, midpoint away from zero, always carrying four places.
pub fn convert_amount(amount: Decimal, rate: Decimal) -> Result<Decimal, ConversionError> {
    let mut converted = amount
        .checked_mul(rate)
        .ok_or(ConversionError::AmountOutOfRange)?
        .round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    converted.rescale(AMOUNT_SCALE);
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_valid_query() {
        let query = ConversionQuery::parse("usd", "EUR", " 100 ").unwrap();
        assert_eq!(query.from.as_str(), "USD");
        assert_eq!(query.to.as_str(), "EUR");
        assert_eq!(query.amount, dec!(100));
    }

    #[test]
    fn test_parse_accepts_scientific_notation() {
        let query = ConversionQuery::parse("USD", "EUR", "1e3").unwrap();
        assert_eq!(query.amount, dec!(1000));
    }

    #[test]
    fn test_parse_rejects_missing_currency() {
        assert_eq!(
            ConversionQuery::parse("", "EUR", "1"),
            Err(ValidationError::MissingCurrency.into())
        );
        assert_eq!(
            ConversionQuery::parse("USD", "  ", "1"),
            Err(ValidationError::MissingCurrency.into())
        );
    }

    #[test]
    fn test_parse_rejects_bad_amounts() {
        for amount in ["-5", "abc", "", "0", "0.0", "NaN", "inf", "1_000", "-1e40"] {
            let err = ConversionQuery::parse("USD", "EUR", amount).unwrap_err();
            assert_eq!(
                err,
                ConversionError::Validation(ValidationError::InvalidAmount(amount.to_string()))
            );
            assert_eq!(err.to_string(), "Please enter a valid amount.");
        }
    }

    #[test]
    fn test_parse_reports_unrepresentable_amounts_as_out_of_range() {
        for amount in [
            "1e29",
            "100000000000000000000000000000",
            "1e-30",
            "0.00000000000000000000000000001",
        ] {
            assert_eq!(
                ConversionQuery::parse("USD", "EUR", amount),
                Err(ConversionError::AmountOutOfRange),
                "amount {amount}"
            );
        }
    }

    #[test]
    fn test_convert_amount_rounds_to_four_places() {
        assert_eq!(convert_amount(dec!(100), dec!(0.85)).unwrap().to_string(), "85.0000");
        assert_eq!(
            convert_amount(dec!(1), dec!(1.23456)).unwrap(),
            dec!(1.2346)
        );
        assert_eq!(
            convert_amount(dec!(3), dec!(0.00005)).unwrap(),
            dec!(0.0002)
        );
    }

    #[test]
    fn test_convert_amount_overflow() {
        assert_eq!(
            convert_amount(Decimal::MAX, dec!(2)),
            Err(ConversionError::AmountOutOfRange)
        );
    }

    #[test]
    fn test_identity_keeps_amount_exactly() {
        let query = ConversionQuery::parse("EUR", "EUR", "12.345678").unwrap();
        let result = ConversionResult::identity(&query);
        assert_eq!(result.rate, Decimal::ONE);
        assert_eq!(result.converted_amount.to_string(), "12.345678");
        assert!(!result.is_approximate);
    }

    #[test]
    fn test_swapped_query() {
        let query = ConversionQuery::parse("USD", "JPY", "5").unwrap().swapped();
        assert_eq!(query.from.as_str(), "JPY");
        assert_eq!(query.to.as_str(), "USD");
    }
}
