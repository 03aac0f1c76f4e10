//! Data module - CSV loading, joining and export

mod exporter;
mod joiner;
mod loader;
pub mod schema;

pub use exporter::{ExportError, ExportSummary, Exporter};
pub use joiner::{JoinError, Joiner};
pub use loader::{DataLoader, LoaderError};
