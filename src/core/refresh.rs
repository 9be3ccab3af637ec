//! Periodic background reload of the currency catalog.

use super::catalog::Catalog;
use super::resolver::RateResolver;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::debug;

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

pub struct CatalogRefresher {
    resolver: Arc<RateResolver>,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag even if the refresh future is dropped midway.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl CatalogRefresher {
    pub fn new(resolver: Arc<RateResolver>) -> Self {
        Self {
            resolver,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Reloads the catalog unless a reload is already running.
    ///
    /// Returns `None` when the call was skipped.
    pub async fn refresh(&self) -> Option<Arc<Catalog>> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Catalog refresh already in flight, skipping");
            return None;
        }
        let _guard = InFlightGuard(&self.in_flight);
        Some(self.resolver.load_catalog().await)
    }

    /// One scheduled tick: only reloads a catalog that has been loaded before.
    pub async fn tick(&self) -> Option<Arc<Catalog>> {
        if self.resolver.state().catalog().await.is_none() {
            debug!("No catalog loaded yet, skipping scheduled refresh");
            return None;
        }
        self.refresh().await
    }

    /// Runs [`tick`](Self::tick) every `period` on a background task.
    ///
    /// The first tick fires one full period after spawning.
    pub fn spawn(self: Arc<Self>, period: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                self.tick().await;
            }
        })
    }
}
