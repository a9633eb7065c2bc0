//! Selector configuration for search result pages.

use serde::{Deserialize, Serialize};

/// Ordered CSS selector fallbacks for locating product data on a search
/// results page.
///
/// Lists are tried front to back and the first hit wins. The target site
/// renders results under one of several structural conventions depending on
/// page version and experiment bucket, so every field carries more than one
/// way to find it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPageSelectors {
    /// Candidate product-card containers, most to least specific.
    pub product_container: Vec<String>,

    /// Locations known to carry the product title.
    pub title: Vec<String>,

    /// Rating-bearing elements (icon alt text, off-screen accessible text).
    pub rating: Vec<String>,

    /// Review-count-bearing elements.
    pub review_count: Vec<String>,

    /// Product image elements.
    pub image: Vec<String>,

    /// Price elements.
    pub price: Vec<String>,
}

impl Default for SearchPageSelectors {
    fn default() -> Self {
        Self {
            product_container: vec![
                r#"[data-component-type="s-search-result"]"#.to_string(),
                ".s-result-item".to_string(),
                r#"[data-asin]:not([data-asin=""])"#.to_string(),
            ],
            title: vec![
                "h2 a span".to_string(),
                "h2 span".to_string(),
                ".a-text-normal".to_string(),
                r#"[data-cy="title-recipe-title"]"#.to_string(),
            ],
            rating: vec![".a-icon-alt".to_string(), ".a-offscreen".to_string()],
            review_count: vec![
                ".a-size-base".to_string(),
                ".a-link-normal .a-size-base".to_string(),
                r#"a[href*="customerReviews"]"#.to_string(),
            ],
            image: vec![
                "img.s-image".to_string(),
                ".a-dynamic-image".to_string(),
                "img[data-src]".to_string(),
            ],
            price: vec![
                ".a-price .a-offscreen".to_string(),
                ".a-price-whole".to_string(),
            ],
        }
    }
}
