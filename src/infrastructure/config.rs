//! Fetcher configuration.
//!
//! The target site, header set, and timeout are an explicit configuration
//! value handed to the fetcher, so tests can point the pipeline at a local
//! server instead of the live site.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Target-site constants for the product search page.
pub mod amazon {
    /// Search results page; the keyword goes into the query parameter below.
    pub const SEARCH_URL: &str = "https://www.amazon.com/s";
    pub const SEARCH_QUERY_PARAM: &str = "k";
}

/// Configuration for the outbound search-page request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Search page URL the keyword query parameter is appended to.
    pub search_url: String,
    /// Name of the query parameter carrying the keyword.
    pub query_param: String,
    /// Header set impersonating a desktop browser. The target serves
    /// materially different (or blocking) markup to requests that do not
    /// resemble one. `Accept-Encoding` is not listed here: reqwest adds it
    /// from the enabled compression features and decompresses the response.
    pub headers: Vec<(String, String)>,
    /// Upper bound on the whole request, connect to last body byte.
    pub timeout_seconds: u64,
}

impl FetcherConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            search_url: amazon::SEARCH_URL.to_string(),
            query_param: amazon::SEARCH_QUERY_PARAM.to_string(),
            headers: browser_headers(),
            timeout_seconds: 10,
        }
    }
}

fn browser_headers() -> Vec<(String, String)> {
    [
        (
            "User-Agent",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
        ),
        (
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
        ("Accept-Language", "en-US,en;q=0.5"),
        ("Connection", "keep-alive"),
        ("Upgrade-Insecure-Requests", "1"),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value.to_string()))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_the_search_page() {
        let config = FetcherConfig::default();
        assert_eq!(config.search_url, "https://www.amazon.com/s");
        assert_eq!(config.query_param, "k");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn default_headers_impersonate_a_browser() {
        let config = FetcherConfig::default();
        let names: Vec<&str> = config.headers.iter().map(|(n, _)| n.as_str()).collect();
        assert!(names.contains(&"User-Agent"));
        assert!(names.contains(&"Accept"));
        assert!(names.contains(&"Accept-Language"));
        assert!(names.contains(&"Upgrade-Insecure-Requests"));
    }
}
