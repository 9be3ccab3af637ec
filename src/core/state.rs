//! Resolver-owned state shared with the presentation layer.

use super::catalog::{Catalog, CatalogSource};
use super::conversion::ConversionResult;
use super::currency::CurrencyCode;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::{RwLock, broadcast};
use tracing::debug;

const EVENT_CAPACITY: usize = 32;

/// Notifications for whoever renders results.
#[derive(Debug, Clone)]
pub enum ResolverEvent {
    CatalogRefreshed { source: CatalogSource, count: usize },
    ConversionCompleted(ConversionResult),
    /// Advisory only: the result came from the static approximate table.
    ApproximateRateUsed { from: CurrencyCode, to: CurrencyCode },
}

/// The catalog cache and the "last updated" timestamp.
///
/// Only the resolver writes here. A catalog is fully built before it is
/// published, so readers either see the old `Arc` or the new one.
pub struct ResolverState {
    catalog: RwLock<Option<Arc<Catalog>>>,
    last_updated: RwLock<Option<DateTime<Utc>>>,
    events: broadcast::Sender<ResolverEvent>,
}

impl ResolverState {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            catalog: RwLock::new(None),
            last_updated: RwLock::new(None),
            events,
        }
    }

    pub async fn catalog(&self) -> Option<Arc<Catalog>> {
        self.catalog.read().await.clone()
    }

    pub async fn last_updated(&self) -> Option<DateTime<Utc>> {
        *self.last_updated.read().await
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ResolverEvent> {
        self.events.subscribe()
    }

    pub(crate) async fn publish_catalog(&self, catalog: Arc<Catalog>) {
        let event = ResolverEvent::CatalogRefreshed {
            source: catalog.source.clone(),
            count: catalog.len(),
        };
        let fetched_at = catalog.fetched_at;
        *self.catalog.write().await = Some(catalog);
        *self.last_updated.write().await = Some(fetched_at);
        debug!("Catalog published");
        self.notify(event);
    }

    pub(crate) async fn record_conversion(&self, result: &ConversionResult) {
        *self.last_updated.write().await = Some(result.fetched_at);
        if result.is_approximate {
            self.notify(ResolverEvent::ApproximateRateUsed {
                from: result.from.clone(),
                to: result.to.clone(),
            });
        }
        self.notify(ResolverEvent::ConversionCompleted(result.clone()));
    }

    fn notify(&self, event: ResolverEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}

impl Default for ResolverState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::conversion::ConversionQuery;

    #[tokio::test]
    async fn test_publish_catalog_replaces_and_notifies() {
        let state = ResolverState::new();
        let mut events = state.subscribe();
        assert!(state.catalog().await.is_none());
        assert!(state.last_updated().await.is_none());

        let first = Arc::new(Catalog::offline());
        state.publish_catalog(Arc::clone(&first)).await;
        let held = state.catalog().await.unwrap();

        let usd = "USD".parse().unwrap();
        let second = Arc::new(Catalog::from_provider("live", ["EUR"], &usd));
        state.publish_catalog(Arc::clone(&second)).await;

        // A reader holding the old catalog keeps a complete copy.
        assert!(held.is_offline());
        assert!(Arc::ptr_eq(&state.catalog().await.unwrap(), &second));
        assert_eq!(state.last_updated().await, Some(second.fetched_at));

        match events.recv().await.unwrap() {
            ResolverEvent::CatalogRefreshed { source, count } => {
                assert_eq!(source, CatalogSource::Offline);
                assert_eq!(count, first.len());
            }
            other => panic!("Unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_record_approximate_conversion() {
        let state = ResolverState::new();
        let mut events = state.subscribe();
        let query = ConversionQuery::parse("USD", "EUR", "1").unwrap();
        let result = ConversionResult::approximate(&query, rust_decimal::Decimal::ONE).unwrap();

        state.record_conversion(&result).await;

        assert_eq!(state.last_updated().await, Some(result.fetched_at));
        assert!(matches!(
            events.recv().await.unwrap(),
            ResolverEvent::ApproximateRateUsed { .. }
        ));
        assert!(matches!(
            events.recv().await.unwrap(),
            ResolverEvent::ConversionCompleted(r) if r == result
        ));
    }
}
