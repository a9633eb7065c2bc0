//! Keyword search orchestration: fetch a results page, extract records.

use thiserror::Error;
use tracing::info;

use crate::domain::product::ProductRecord;
use crate::infrastructure::config::FetcherConfig;
use crate::infrastructure::http_client::{FetchError, SearchFetcher};
use crate::infrastructure::parsing::{ExtractError, SearchPageSelectors, SearchResultParser};

#[derive(Error, Debug)]
pub enum SearchError {
    /// Keyword empty after trimming. The serving layer validates presence
    /// and length up front; this guard keeps the core safe on direct use.
    #[error("search keyword must not be empty")]
    EmptyKeyword,

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// The single inbound call of the scraping core.
///
/// Stateless across invocations: concurrent searches share only the
/// immutable HTTP client and compiled selectors, so no admission control or
/// deduplication happens here.
pub struct ProductSearchService {
    fetcher: SearchFetcher,
    parser: SearchResultParser,
}

impl ProductSearchService {
    pub fn new(config: FetcherConfig) -> Result<Self, SearchError> {
        Self::with_selectors(config, &SearchPageSelectors::default())
    }

    pub fn with_selectors(
        config: FetcherConfig,
        selectors: &SearchPageSelectors,
    ) -> Result<Self, SearchError> {
        Ok(Self {
            fetcher: SearchFetcher::new(config)?,
            parser: SearchResultParser::with_config(selectors)?,
        })
    }

    /// Fetch the results page for `keyword` and extract product records.
    ///
    /// One outbound request per call, no retries. Failures propagate whole:
    /// no partial record list accompanies an error. Zero extracted records
    /// is a valid "no results" outcome, not a failure.
    pub async fn search(&self, keyword: &str) -> Result<Vec<ProductRecord>, SearchError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(SearchError::EmptyKeyword);
        }

        info!(keyword, "searching products");
        let body = self.fetcher.fetch(keyword).await?;
        let records = self.parser.extract(&body)?;
        info!(keyword, total = records.len(), "search finished");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_keyword_is_rejected_before_any_request() {
        let service = ProductSearchService::new(FetcherConfig::default()).unwrap();
        for keyword in ["", "   ", "\t\n"] {
            let result = service.search(keyword).await;
            assert!(matches!(result, Err(SearchError::EmptyKeyword)));
        }
    }
}
