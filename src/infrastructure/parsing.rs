//! HTML extraction for search result pages.
//!
//! Turns a loosely-structured, versioned, and inconsistently-marked-up
//! document into a sequence of product records. Candidate elements are
//! located through an ordered list of fallback strategies, and every field is
//! extracted through its own ordered fallbacks, so one page-layout experiment
//! or malformed element never takes down the whole batch.

pub mod config;
pub mod error;
pub mod search_result_parser;

pub use config::SearchPageSelectors;
pub use error::{ExtractError, ExtractResult};
pub use search_result_parser::SearchResultParser;
