pub mod client;
pub mod models;

pub use client::NbuClient;
pub use models::NbuRate;
