//! Resolves catalogs and conversions against ordered provider lists.

use super::catalog::Catalog;
use super::conversion::{ConversionError, ConversionQuery, ConversionResult};
use super::currency::CurrencyCode;
use super::source::{RateSource, first_success};
use super::state::{ResolverEvent, ResolverState};
use super::tables;
use anyhow::anyhow;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info, instrument, warn};

pub struct RateResolver {
    catalog_sources: Vec<Arc<dyn RateSource>>,
    conversion_sources: Vec<Arc<dyn RateSource>>,
    anchor: CurrencyCode,
    state: Arc<ResolverState>,
}

impl RateResolver {
    pub fn new(
        catalog_sources: Vec<Arc<dyn RateSource>>,
        conversion_sources: Vec<Arc<dyn RateSource>>,
        anchor: CurrencyCode,
    ) -> Self {
        Self::with_state(
            catalog_sources,
            conversion_sources,
            anchor,
            Arc::new(ResolverState::new()),
        )
    }

    pub fn with_state(
        catalog_sources: Vec<Arc<dyn RateSource>>,
        conversion_sources: Vec<Arc<dyn RateSource>>,
        anchor: CurrencyCode,
        state: Arc<ResolverState>,
    ) -> Self {
        Self {
            catalog_sources,
            conversion_sources,
            anchor,
            state,
        }
    }

    pub fn state(&self) -> &Arc<ResolverState> {
        &self.state
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ResolverEvent> {
        self.state.subscribe()
    }

    /// Loads the currency catalog and publishes it.
    ///
    /// This never fails: when no catalog provider answers, the compiled-in
    /// offline catalog is used, and callers can tell from
    /// [`Catalog::is_offline`].
    #[instrument(name = "LoadCatalog", skip(self), fields(anchor = %self.anchor))]
    pub async fn load_catalog(&self) -> Arc<Catalog> {
        let resolved = first_success(&self.catalog_sources, &self.anchor, |table| {
            if table.is_empty() {
                return Err(anyhow!("Provider returned an empty catalog"));
            }
            Ok(table.into_keys().collect::<Vec<_>>())
        })
        .await;

        let catalog = match resolved {
            Some(resolved) => {
                Catalog::from_provider(&resolved.provider, resolved.value, &self.anchor)
            }
            None => {
                warn!("All catalog providers failed, using offline catalog");
                Catalog::offline()
            }
        };
        info!(count = catalog.len(), offline = catalog.is_offline(), "Catalog loaded");

        let catalog = Arc::new(catalog);
        self.state.publish_catalog(Arc::clone(&catalog)).await;
        catalog
    }

    /// Validates raw input, then converts.
    ///
    /// Invalid input is rejected before any provider is contacted.
    pub async fn convert_input(
        &self,
        from: &str,
        to: &str,
        amount: &str,
    ) -> Result<ConversionResult, ConversionError> {
        let query = ConversionQuery::parse(from, to, amount)?;
        self.convert(&query).await
    }

    /// Converts and records the result in the shared state.
    pub async fn convert(
        &self,
        query: &ConversionQuery,
    ) -> Result<ConversionResult, ConversionError> {
        let result = self.resolve(query).await?;
        self.state.record_conversion(&result).await;
        Ok(result)
    }

    /// Finds a rate and computes the result without touching the shared state.
    #[instrument(
        name = "Convert",
        skip(self),
        fields(from = %query.from, to = %query.to, amount = %query.amount)
    )]
    pub(crate) async fn resolve(
        &self,
        query: &ConversionQuery,
    ) -> Result<ConversionResult, ConversionError> {
        if query.from == query.to {
            debug!("Same currency, skipping providers");
            return Ok(ConversionResult::identity(query));
        }

        let to = query.to.as_str();
        let resolved = first_success(&self.conversion_sources, &query.from, |table| {
            table
                .get(to)
                .copied()
                .ok_or_else(|| anyhow!("No rate for {} in response", to))
        })
        .await;

        match resolved {
            Some(resolved) => ConversionResult::live(query, resolved.value, &resolved.provider),
            None => {
                let rate = approximate_rate(&query.from, &query.to).ok_or_else(|| {
                    warn!("No live or approximate rate available");
                    ConversionError::NoRouteAvailable {
                        from: query.from.clone(),
                        to: query.to.clone(),
                    }
                })?;
                warn!(%rate, "All conversion providers failed, using approximate rate");
                ConversionResult::approximate(query, rate)
            }
        }
    }
}

/// Cross rate through the USD-anchored approximate table.
///
/// Both currencies have to be in the table.
pub fn approximate_rate(from: &CurrencyCode, to: &CurrencyCode) -> Option<Decimal> {
    let from_rate = tables::approximate_rate(from.as_str())?;
    let to_rate = tables::approximate_rate(to.as_str())?;
    to_rate.checked_div(from_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::CatalogSource;
    use crate::core::conversion::ValidationError;
    use crate::core::source::testing::{StubSource, sources};
    use rust_decimal::RoundingStrategy;
    use rust_decimal_macros::dec;

    fn usd() -> CurrencyCode {
        "USD".parse().unwrap()
    }

    fn resolver_with(conversion: &[&Arc<StubSource>]) -> RateResolver {
        RateResolver::new(Vec::new(), sources(conversion), usd())
    }

    #[tokio::test]
    async fn test_same_currency_skips_providers() {
        let a = StubSource::rates("a", &[("EUR", dec!(0.85))]);
        let resolver = resolver_with(&[&a]);

        for code in ["USD", "EUR", "XYZ"] {
            let result = resolver.convert_input(code, code, "42.5").await.unwrap();
            assert_eq!(result.rate, Decimal::ONE);
            assert_eq!(result.converted_amount, result.source_amount);
            assert!(!result.is_approximate);
        }
        assert_eq!(a.calls(), 0);
    }

    #[tokio::test]
    async fn test_usd_to_eur_end_to_end() {
        let a = StubSource::rates("a", &[("EUR", dec!(0.85))]);
        let resolver = resolver_with(&[&a]);

        let result = resolver.convert_input("USD", "EUR", "100").await.unwrap();
        assert_eq!(result.converted_amount.to_string(), "85.0000");
        assert_eq!(result.rate, dec!(0.85));
        assert_eq!(result.source_amount, dec!(100));
        assert!(!result.is_approximate);
        assert_eq!(result.provider.as_deref(), Some("a"));
    }

    #[tokio::test]
    async fn test_converted_amount_is_rounded_product() {
        let rate = dec!(1.234567);
        let a = StubSource::rates("a", &[("EUR", rate)]);
        let resolver = resolver_with(&[&a]);

        for amount in [dec!(1), dec!(0.5), dec!(19.99), dec!(1234567.891), dec!(0.0001)] {
            let query = ConversionQuery {
                from: usd(),
                to: "EUR".parse().unwrap(),
                amount,
            };
            let result = resolver.convert(&query).await.unwrap();
            assert_eq!(
                result.converted_amount,
                (amount * rate).round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero)
            );
        }
    }

    #[tokio::test]
    async fn test_provider_loop_short_circuits() {
        let a = StubSource::failing("a");
        let b = StubSource::rates("b", &[("EUR", dec!(2))]);
        let c = StubSource::rates("c", &[("EUR", dec!(3))]);
        let resolver = resolver_with(&[&a, &b, &c]);

        let result = resolver.convert_input("USD", "EUR", "1").await.unwrap();
        assert_eq!(result.rate, dec!(2));
        assert_eq!((a.calls(), b.calls(), c.calls()), (1, 1, 0));
    }

    #[tokio::test]
    async fn test_provider_without_target_rate_is_skipped() {
        let a = StubSource::rates("a", &[("GBP", dec!(0.7))]);
        let b = StubSource::rates("b", &[("EUR", dec!(0.9))]);
        let resolver = resolver_with(&[&a, &b]);

        let result = resolver.convert_input("USD", "EUR", "10").await.unwrap();
        assert_eq!(result.provider.as_deref(), Some("b"));
        assert_eq!(result.converted_amount, dec!(9));
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_providers() {
        let a = StubSource::rates("a", &[("EUR", dec!(0.85))]);
        let resolver = resolver_with(&[&a]);

        for amount in ["-5", "abc"] {
            let err = resolver.convert_input("USD", "EUR", amount).await.unwrap_err();
            assert_eq!(
                err,
                ConversionError::Validation(ValidationError::InvalidAmount(amount.to_string()))
            );
        }
        let err = resolver.convert_input("", "EUR", "1").await.unwrap_err();
        assert_eq!(err, ConversionError::Validation(ValidationError::MissingCurrency));
        let err = resolver.convert_input("USD", "EUR", "1e29").await.unwrap_err();
        assert_eq!(err, ConversionError::AmountOutOfRange);
        assert_eq!(a.calls(), 0);
    }

    #[tokio::test]
    async fn test_falls_back_to_approximate_rate() {
        let a = StubSource::failing("a");
        let b = StubSource::failing("b");
        let resolver = resolver_with(&[&a, &b]);
        let mut events = resolver.subscribe();

        let result = resolver.convert_input("EUR", "JPY", "10").await.unwrap();
        assert!(result.is_approximate);
        assert_eq!(result.rate, dec!(150.0) / dec!(0.85));
        assert_eq!(
            result.converted_amount,
            (dec!(10) * result.rate)
                .round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero)
        );
        assert!(result.provider.is_none());
        assert_eq!((a.calls(), b.calls()), (1, 1));

        assert!(matches!(
            events.recv().await.unwrap(),
            ResolverEvent::ApproximateRateUsed { .. }
        ));
    }

    #[tokio::test]
    async fn test_no_route_when_currency_missing_from_approximate_table() {
        let a = StubSource::failing("a");
        let resolver = resolver_with(&[&a]);

        let err = resolver.convert_input("USD", "ISK", "10").await.unwrap_err();
        assert_eq!(
            err,
            ConversionError::NoRouteAvailable {
                from: usd(),
                to: "ISK".parse().unwrap(),
            }
        );
        assert!(resolver.state().last_updated().await.is_none());
    }

    #[tokio::test]
    async fn test_conversion_updates_last_updated() {
        let a = StubSource::rates("a", &[("EUR", dec!(0.85))]);
        let resolver = resolver_with(&[&a]);

        let result = resolver.convert_input("USD", "EUR", "1").await.unwrap();
        assert_eq!(
            resolver.state().last_updated().await,
            Some(result.fetched_at)
        );
    }

    #[tokio::test]
    async fn test_load_catalog_uses_first_provider() {
        let a = StubSource::failing("a");
        let b = StubSource::rates("b", &[("EUR", dec!(0.85)), ("ZZZ", dec!(4))]);
        let c = StubSource::rates("c", &[("GBP", dec!(0.73))]);
        let resolver = RateResolver::new(sources(&[&a, &b, &c]), Vec::new(), usd());

        let catalog = resolver.load_catalog().await;
        assert_eq!(catalog.source, CatalogSource::Live {
            provider: "b".to_string()
        });
        let codes: Vec<_> = catalog.currencies.iter().map(|info| info.code.as_str()).collect();
        assert_eq!(codes, ["USD", "EUR", "ZZZ"]);
        assert_eq!(c.calls(), 0);
        assert!(Arc::ptr_eq(
            &resolver.state().catalog().await.unwrap(),
            &catalog
        ));
    }

    #[tokio::test]
    async fn test_load_catalog_skips_empty_tables() {
        let a = StubSource::rates("a", &[]);
        let b = StubSource::rates("b", &[("EUR", dec!(0.85))]);
        let resolver = RateResolver::new(sources(&[&a, &b]), Vec::new(), usd());

        let catalog = resolver.load_catalog().await;
        assert!(!catalog.is_offline());
        assert_eq!(b.calls(), 1);
    }

    #[tokio::test]
    async fn test_load_catalog_falls_back_to_offline() {
        let a = StubSource::failing("a");
        let b = StubSource::failing("b");
        let resolver = RateResolver::new(sources(&[&a, &b]), Vec::new(), usd());
        let mut events = resolver.subscribe();

        let catalog = resolver.load_catalog().await;
        assert!(catalog.is_offline());
        assert_eq!(catalog.len(), Catalog::offline().len());
        assert!(resolver.state().last_updated().await.is_some());
        assert!(matches!(
            events.recv().await.unwrap(),
            ResolverEvent::CatalogRefreshed {
                source: CatalogSource::Offline,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_injected_state_is_shared() {
        let a = StubSource::rates("a", &[("EUR", dec!(0.85))]);
        let state = Arc::new(ResolverState::new());
        let resolver =
            RateResolver::with_state(sources(&[&a]), Vec::new(), usd(), Arc::clone(&state));

        let catalog = resolver.load_catalog().await;
        assert!(Arc::ptr_eq(&state.catalog().await.unwrap(), &catalog));
        assert_eq!(state.last_updated().await, Some(catalog.fetched_at));
    }

    #[test]
    fn test_approximate_rate_cross_rate() {
        let eur: CurrencyCode = "EUR".parse().unwrap();
        let gbp: CurrencyCode = "GBP".parse().unwrap();
        assert_eq!(approximate_rate(&usd(), &eur), Some(dec!(0.85)));
        assert_eq!(approximate_rate(&eur, &gbp), Some(dec!(0.73) / dec!(0.85)));
        assert_eq!(approximate_rate(&eur, &"ISK".parse().unwrap()), None);
    }
}
