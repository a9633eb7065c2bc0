//! Application services orchestrating the scraping pipeline.

pub mod search_service;

pub use search_service::{ProductSearchService, SearchError};
