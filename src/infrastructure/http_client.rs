//! Outbound HTTP fetch for search result pages.
//!
//! One GET per invocation with browser-impersonating headers and a bounded
//! timeout. No retries: a single attempt succeeds or fails, and the caller
//! decides what a failure means. Dropping the returned future aborts the
//! in-flight request, which is how caller-side cancellation works.

use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::infrastructure::config::FetcherConfig;

#[derive(Error, Debug)]
pub enum FetchError {
    /// The request exceeded the configured time bound. Retryable by the
    /// caller; the fetcher itself never retries.
    #[error("search request timed out")]
    Timeout,

    /// DNS, connection, body-read failure, or a non-2xx status.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The configured base URL or header set could not be used.
    #[error("invalid fetcher configuration: {0}")]
    Configuration(String),
}

/// Fetches the raw search results page for a keyword.
pub struct SearchFetcher {
    client: Client,
    config: FetcherConfig,
}

impl SearchFetcher {
    pub fn new(config: FetcherConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| FetchError::Configuration(format!("header name '{name}': {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| FetchError::Configuration(format!("header value for {name}: {e}")))?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| FetchError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Build the search URL for a keyword, percent-encoding it into the
    /// query component.
    pub fn search_url(&self, keyword: &str) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.config.search_url).map_err(|e| {
            FetchError::Configuration(format!("search URL '{}': {e}", self.config.search_url))
        })?;
        url.query_pairs_mut()
            .append_pair(&self.config.query_param, keyword);
        Ok(url)
    }

    /// Fetch the raw results page for `keyword`.
    ///
    /// Returns the response body as an opaque text document; content type
    /// and markup well-formedness are the extractor's concern.
    pub async fn fetch(&self, keyword: &str) -> Result<String, FetchError> {
        let url = self.search_url(keyword)?;
        info!(%url, "fetching search results page");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Transport(format!("HTTP {status} from {url}")));
        }

        let body = response.text().await.map_err(classify)?;
        debug!(chars = body.len(), "fetched search results page");
        Ok(body)
    }
}

fn classify(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::AsyncWriteExt;
    use tokio::net::TcpListener;

    fn fetcher() -> SearchFetcher {
        SearchFetcher::new(FetcherConfig::default()).unwrap()
    }

    fn local_config(addr: std::net::SocketAddr) -> FetcherConfig {
        FetcherConfig {
            search_url: format!("http://{addr}/s"),
            timeout_seconds: 1,
            ..FetcherConfig::default()
        }
    }

    #[test]
    fn keyword_is_encoded_into_the_query() {
        let url = fetcher().search_url("coffee maker & filter 100%").unwrap();
        assert!(!url.as_str().contains(' '));
        assert!(!url.as_str().contains("& filter"));
    }

    #[test]
    fn keyword_encoding_round_trips() {
        let keywords = [
            "laptop",
            "coffee maker & filter",
            "100% cotton t-shirt",
            "q?a=b#c",
            "cafe com leite",
        ];
        for keyword in keywords {
            let url = fetcher().search_url(keyword).unwrap();
            let decoded = url
                .query_pairs()
                .find(|(name, _)| name == "k")
                .map(|(_, value)| value.into_owned())
                .unwrap();
            assert_eq!(decoded, keyword);
        }
    }

    #[test]
    fn bad_base_url_is_a_configuration_error() {
        let config = FetcherConfig {
            search_url: "not a url".to_string(),
            ..FetcherConfig::default()
        };
        let fetcher = SearchFetcher::new(config).unwrap();
        assert!(matches!(
            fetcher.search_url("laptop"),
            Err(FetchError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn stalled_endpoint_times_out_instead_of_hanging() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        // Accept the connection but never answer it.
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let fetcher = SearchFetcher::new(local_config(addr)).unwrap();
        let result = fetcher.fetch("laptop").await;
        assert!(matches!(result, Err(FetchError::Timeout)));
    }

    #[tokio::test]
    async fn non_success_status_is_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            socket
                .write_all(
                    b"HTTP/1.1 503 Service Unavailable\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
                )
                .await
                .unwrap();
        });

        let fetcher = SearchFetcher::new(local_config(addr)).unwrap();
        match fetcher.fetch("laptop").await {
            Err(FetchError::Transport(message)) => assert!(message.contains("503")),
            other => panic!("expected transport error, got {other:?}"),
        }
    }
}
