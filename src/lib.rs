//! shopscan - keyword product-search scraping service
//!
//! Fetches a product-search results page from an e-commerce site for a given
//! keyword, extracts structured product records from the loosely-structured
//! markup, and serves them over a small HTTP API.

// Module declarations
pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easier access
pub use application::search_service::{ProductSearchService, SearchError};
pub use domain::product::ProductRecord;
pub use infrastructure::config::FetcherConfig;
