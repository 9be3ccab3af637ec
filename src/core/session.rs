//! Cancel-and-replace handling of successive conversion requests.
//!
//! When the user changes the input while a conversion is still waiting on
//! providers, the newer request wins: the older one is dropped at its next
//! await point and reports [`ConversionError::Superseded`]. Only accepted
//! results reach the shared state.

use super::conversion::{ConversionError, ConversionQuery, ConversionResult};
use super::resolver::RateResolver;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

pub struct ConversionSession {
    resolver: Arc<RateResolver>,
    generation: watch::Sender<u64>,
}

impl ConversionSession {
    pub fn new(resolver: Arc<RateResolver>) -> Self {
        let (generation, _) = watch::channel(0);
        Self {
            resolver,
            generation,
        }
    }

    /// Converts `query`, superseding any conversion still in flight.
    pub async fn submit(
        &self,
        query: &ConversionQuery,
    ) -> Result<ConversionResult, ConversionError> {
        let mut newer = self.generation.subscribe();
        let mut ticket = 0;
        self.generation.send_modify(|current| {
            *current += 1;
            ticket = *current;
        });
        newer.borrow_and_update();

        tokio::select! {
            result = self.resolver.resolve(query) => {
                if *self.generation.borrow() != ticket {
                    debug!(ticket, "Conversion finished after being superseded");
                    return Err(ConversionError::Superseded);
                }
                let result = result?;
                self.resolver.state().record_conversion(&result).await;
                Ok(result)
            }
            _ = newer.changed() => {
                debug!(ticket, "Conversion superseded by a newer request");
                Err(ConversionError::Superseded)
            }
        }
    }
}
