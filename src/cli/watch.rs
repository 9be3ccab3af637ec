use super::{convert, ui};
use crate::core::refresh::CatalogRefresher;
use crate::core::session::ConversionSession;
use crate::core::{ConversionError, ConversionQuery, RateResolver, ResolverEvent};
use anyhow::Result;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Keeps a conversion on screen, refreshing it whenever the catalog is reloaded.
pub async fn run(
    resolver: Arc<RateResolver>,
    query: ConversionQuery,
    refresh_interval: Duration,
) -> Result<()> {
    let shown = run_until(resolver, query, refresh_interval, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
        }
    })
    .await?;
    info!(shown, "Stopped watching");
    Ok(())
}

/// Like [`run`], stopping when `shutdown` completes. Returns the number of
/// conversions shown.
///
/// Conversions run in the background: a refresh supersedes a conversion still
/// waiting on providers, and `shutdown` abandons whatever is in flight.
pub async fn run_until(
    resolver: Arc<RateResolver>,
    query: ConversionQuery,
    refresh_interval: Duration,
    shutdown: impl Future<Output = ()>,
) -> Result<usize> {
    tokio::pin!(shutdown);

    let spinner = ui::new_spinner("Loading currencies...");
    tokio::select! {
        _ = &mut shutdown => {
            spinner.finish_and_clear();
            return Ok(0);
        }
        _ = resolver.load_catalog() => spinner.finish_and_clear(),
    }

    let mut events = resolver.subscribe();
    let session = Arc::new(ConversionSession::new(Arc::clone(&resolver)));
    let mut conversions = JoinSet::new();
    conversions.spawn(show(Arc::clone(&session), query.clone()));

    let handle = Arc::new(CatalogRefresher::new(Arc::clone(&resolver))).spawn(refresh_interval);
    info!(?refresh_interval, "Watching for rate updates");

    let mut shown = 0;
    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            Some(joined) = conversions.join_next() => match joined {
                Ok(count) => shown += count,
                Err(e) => debug!(error = %e, "Conversion task did not finish"),
            },
            event = events.recv() => match event {
                Ok(ResolverEvent::CatalogRefreshed { source, count }) => {
                    debug!(?source, count, "Catalog refreshed, converting again");
                    ui::print_separator();
                    conversions.spawn(show(Arc::clone(&session), query.clone()));
                }
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    debug!(skipped, "Missed resolver events");
                }
                Err(RecvError::Closed) => break,
            },
        }
    }

    conversions.abort_all();
    handle.abort();
    Ok(shown)
}

/// Prints one conversion. Failures are printed and watching goes on.
async fn show(session: Arc<ConversionSession>, query: ConversionQuery) -> usize {
    match session.submit(&query).await {
        Ok(result) => {
            println!("{}", convert::render_result(&result));
            1
        }
        Err(ConversionError::Superseded) => {
            debug!("Dropped a superseded conversion");
            0
        }
        Err(e) => {
            println!("{}", ui::style_text(&e.to_string(), ui::StyleType::Error));
            0
        }
    }
}
