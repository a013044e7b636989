mod catalog;
mod fetch_error;
pub mod models;

pub use catalog::{CatalogClient, Inventory};
pub use fetch_error::FetchError;
pub use models::SourceRecord;
