//! The set of currencies offered for conversion.

use super::currency::{CurrencyCode, CurrencyInfo};
use super::tables;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use tracing::debug;

/// Where a catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Live { provider: String },
    /// Compiled-in list used when no provider answered.
    Offline,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    /// Popular currencies first, in popular order, then alphabetical.
    pub currencies: Vec<CurrencyInfo>,
    pub source: CatalogSource,
    pub fetched_at: DateTime<Utc>,
}

impl Catalog {
    /// Builds a catalog from the codes a provider quoted against `anchor`.
    ///
    /// Providers quote relative to the anchor and often leave it out of the
    /// listing, so it is always added back.
    pub fn from_provider<I, S>(provider: &str, codes: I, anchor: &CurrencyCode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut currencies: Vec<CurrencyInfo> = codes
            .into_iter()
            .filter_map(|code| match code.as_ref().parse::<CurrencyCode>() {
                Ok(code) => Some(CurrencyInfo::from_code(code)),
                Err(e) => {
                    debug!("Dropping catalog entry from {}: {}", provider, e);
                    None
                }
            })
            .collect();

        if !currencies.iter().any(|info| &info.code == anchor) {
            currencies.push(CurrencyInfo::from_code(anchor.clone()));
        }

        Self::new(currencies, CatalogSource::Live {
            provider: provider.to_string(),
        })
    }

    /// The compiled-in catalog. Building it cannot fail.
    pub fn offline() -> Self {
        let currencies = tables::offline_catalog()
            .filter_map(|(code, name)| {
                code.parse()
                    .ok()
                    .map(|code| CurrencyInfo::with_name(code, name))
            })
            .collect();
        Self::new(currencies, CatalogSource::Offline)
    }

    fn new(mut currencies: Vec<CurrencyInfo>, source: CatalogSource) -> Self {
        currencies.sort_by(|a, b| display_order(&a.code, &b.code));
        currencies.dedup_by(|a, b| a.code == b.code);
        Catalog {
            currencies,
            source,
            fetched_at: Utc::now(),
        }
    }

    pub fn is_offline(&self) -> bool {
        self.source == CatalogSource::Offline
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    pub fn get(&self, code: &CurrencyCode) -> Option<&CurrencyInfo> {
        self.currencies.iter().find(|info| &info.code == code)
    }

    /// Splits into the popular section and everything else, both in display order.
    pub fn sections(&self) -> (&[CurrencyInfo], &[CurrencyInfo]) {
        let split = self
            .currencies
            .iter()
            .position(|info| !info.is_popular())
            .unwrap_or(self.currencies.len());
        self.currencies.split_at(split)
    }
}

/// Popular currencies first by their fixed rank, the rest alphabetically.
fn display_order(a: &CurrencyCode, b: &CurrencyCode) -> Ordering {
    match (
        tables::popular_rank(a.as_str()),
        tables::popular_rank(b.as_str()),
    ) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
