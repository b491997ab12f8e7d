pub mod stock_service;
pub mod fx_service;
pub mod crypto_service;
pub mod snapshot_service;
