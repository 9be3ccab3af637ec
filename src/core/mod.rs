//! Core business logic: currency data, rate resolution and shared state

pub mod catalog;
pub mod config;
pub mod conversion;
pub mod currency;
pub mod log;
pub mod refresh;
pub mod resolver;
pub mod session;
pub mod source;
pub mod state;
pub mod tables;

// Re-export main types for cleaner imports
pub use catalog::{Catalog, CatalogSource};
pub use conversion::{ConversionError, ConversionQuery, ConversionResult, ValidationError};
pub use currency::{CurrencyCode, CurrencyInfo};
pub use resolver::RateResolver;
pub use source::{RateSource, RateTable};
pub use state::{ResolverEvent, ResolverState};
