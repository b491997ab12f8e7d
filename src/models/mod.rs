//! Data models for the market snapshot
//!
//! Each fetcher returns one of these; `DashboardSnapshot` combines them for output.

pub mod quote;
pub mod fx;
pub mod crypto;
pub mod dashboard;

// Re-export commonly used types for convenience
pub use quote::QuoteRecord;
pub use fx::{FxRates, DashboardFx};
pub use crypto::CryptoPrices;
pub use dashboard::DashboardSnapshot;

/// String-keyed map that serializes in insertion order
pub type OrderedMap<V> = indexmap::IndexMap<String, V>;
