//! Upstream market data APIs
//!
//! Each provider lives in its own module with a `client` and its wire `models`.
//! All clients share one `HttpFetch` transport.

pub mod http;
pub mod stooq;
pub mod nbu;
pub mod coingecko;

pub use http::{ApiError, HttpFetch, ReqwestFetcher};
