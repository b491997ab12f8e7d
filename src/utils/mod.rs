pub mod errors;
pub mod number;

pub use errors::SnapshotError;
