//! Rate source abstraction and the ordered first-success resolution loop.

use super::currency::CurrencyCode;
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Positive rates keyed by currency code, all quoted against one base.
pub type RateTable = BTreeMap<String, Decimal>;

#[async_trait]
pub trait RateSource: Send + Sync {
    /// Name used in logs and on results.
    fn name(&self) -> &str;

    /// Fetches every rate the source quotes against `base`.
    async fn fetch_rates(&self, base: &CurrencyCode) -> Result<RateTable>;
}

/// A value produced by one of the sources.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub provider: String,
    pub value: T,
}

/// Asks each source in order and returns the first value `extract` accepts.
///
/// Sources are awaited one at a time. Once one succeeds, the rest are not
/// contacted. Failures are logged and never returned.
pub async fn first_success<T>(
    sources: &[Arc<dyn RateSource>],
    base: &CurrencyCode,
    extract: impl Fn(RateTable) -> Result<T>,
) -> Option<Resolved<T>> {
    for source in sources {
        match source.fetch_rates(base).await.and_then(&extract) {
            Ok(value) => {
                info!(provider = source.name(), %base, "Resolved from provider");
                return Some(Resolved {
                    provider: source.name().to_string(),
                    value,
                });
            }
            Err(e) => {
                warn!(
                    provider = source.name(),
                    %base,
                    error = %e,
                    "Provider failed, trying next"
                );
            }
        }
    }
    None
}


#[cfg(test)]
mod tests {
    use super::testing::{StubSource, sources};
    use super::*;
    use anyhow::anyhow;
    use rust_decimal_macros::dec;

    fn usd() -> CurrencyCode {
        "USD".parse().unwrap()
    }

    #[tokio::test]
    async fn test_first_success_short_circuits() {
        let a = StubSource::failing("a");
        let b = StubSource::rates("b", &[("EUR", dec!(2))]);
        let c = StubSource::rates("c", &[("EUR", dec!(3))]);

        let resolved = first_success(&sources(&[&a, &b, &c]), &usd(), |table| {
            table.get("EUR").copied().ok_or_else(|| anyhow!("missing"))
        })
        .await
        .unwrap();

        assert_eq!(resolved.provider, "b");
        assert_eq!(resolved.value, dec!(2));
        assert_eq!((a.calls(), b.calls(), c.calls()), (1, 1, 0));
    }

    #[tokio::test]
    async fn test_first_success_skips_rejected_values() {
        let a = StubSource::rates("a", &[("GBP", dec!(0.7))]);
        let b = StubSource::rates("b", &[("EUR", dec!(0.9))]);

        let resolved = first_success(&sources(&[&a, &b]), &usd(), |table| {
            table.get("EUR").copied().ok_or_else(|| anyhow!("missing"))
        })
        .await
        .unwrap();

        assert_eq!(resolved.provider, "b");
        assert_eq!(a.calls(), 1);
    }

    #[tokio::test]
    async fn test_first_success_exhausted() {
        let a = StubSource::failing("a");
        let b = StubSource::failing("b");

        let resolved = first_success(&sources(&[&a, &b]), &usd(), Ok).await;
        assert!(resolved.is_none());
        assert_eq!((a.calls(), b.calls()), (1, 1));
    }

    #[tokio::test]
    async fn test_first_success_with_no_sources() {
        assert!(first_success(&[], &usd(), Ok).await.is_none());
    }
}
