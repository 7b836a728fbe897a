pub mod client;
pub mod models;
pub mod query;

pub use client::{CatalogClient, CatalogError};
pub use models::{GameRecord, Genre};
pub use query::GameFilter;
