pub mod client;
pub mod models;

pub use client::StooqClient;
pub use models::QuoteRow;
