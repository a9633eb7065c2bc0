//! Parser for product search result pages.
//!
//! Robust HTML parsing with fallback selection strategies and per-candidate
//! error isolation: one malformed product card never prevents extraction of
//! the remaining ones.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use super::config::SearchPageSelectors;
use super::error::{ExtractError, ExtractResult};
use crate::domain::product::ProductRecord;

/// Numeric rating alternation: "N out of 5", the localized "N de 5" variant,
/// or a bare decimal. Alternatives are tried leftmost-first, so the most
/// specific form wins when a text matches more than one. Both `.` and `,`
/// are accepted as the decimal separator.
const RATING_PATTERN: &str =
    r"(\d+[.,]?\d*)\s*out\s*of\s*5|(\d+[.,]?\d*)\s*de\s*5|(\d+[.,]?\d*)";

/// First run of digits and thousands separators in a review-count text.
const REVIEW_COUNT_PATTERN: &str = r"[\d,]+";

/// Extracts product records from a search results document.
///
/// `extract` is a pure function of its input: identical documents yield
/// identical output, and nothing is shared mutably across invocations.
pub struct SearchResultParser {
    container_selectors: Vec<Selector>,
    title_selectors: Vec<Selector>,
    rating_selectors: Vec<Selector>,
    review_selectors: Vec<Selector>,
    image_selectors: Vec<Selector>,
    price_selectors: Vec<Selector>,
    rating_pattern: Regex,
    review_count_pattern: Regex,
}

/// Fields pulled out of one candidate element, before id assignment.
struct CandidateFields {
    title: String,
    rating: Option<f64>,
    review_count: Option<String>,
    image_url: Option<String>,
    price: Option<String>,
}

impl SearchResultParser {
    /// Create a parser with the default selector configuration.
    pub fn new() -> ExtractResult<Self> {
        Self::with_config(&SearchPageSelectors::default())
    }

    /// Create a parser with a custom selector configuration.
    pub fn with_config(selectors: &SearchPageSelectors) -> ExtractResult<Self> {
        Ok(Self {
            container_selectors: compile_selectors("product_container", &selectors.product_container)?,
            title_selectors: compile_selectors("title", &selectors.title)?,
            rating_selectors: compile_selectors("rating", &selectors.rating)?,
            review_selectors: compile_selectors("review_count", &selectors.review_count)?,
            image_selectors: compile_selectors("image", &selectors.image)?,
            price_selectors: compile_selectors("price", &selectors.price)?,
            rating_pattern: Regex::new(RATING_PATTERN)
                .map_err(|e| ExtractError::InvalidPattern(e.to_string()))?,
            review_count_pattern: Regex::new(REVIEW_COUNT_PATTERN)
                .map_err(|e| ExtractError::InvalidPattern(e.to_string()))?,
        })
    }

    /// Extract product records from a raw results page.
    ///
    /// Malformed markup is never a hard error; the worst case is an empty
    /// sequence. Only a body that is not a document at all fails, with
    /// [`ExtractError::UnparsableDocument`].
    pub fn extract(&self, html: &str) -> ExtractResult<Vec<ProductRecord>> {
        if html.trim().is_empty() {
            return Err(ExtractError::UnparsableDocument);
        }
        let document = Html::parse_document(html);

        let candidates = self.locate_candidates(&document);
        let mut records = Vec::new();

        for (index, element) in candidates.iter().enumerate() {
            match self.extract_fields(element) {
                Ok(fields) => {
                    // Ids are 1-based over the records that survive, in
                    // document order; discarded candidates leave no gap.
                    let id = records.len() as u32 + 1;
                    records.push(ProductRecord {
                        id,
                        title: fields.title,
                        rating: fields.rating,
                        review_count: fields.review_count,
                        image_url: fields.image_url,
                        price: fields.price,
                    });
                }
                Err(err) => {
                    debug!(candidate = index, %err, "skipping candidate element");
                }
            }
        }

        debug!(total = records.len(), "extracted product records");
        Ok(records)
    }

    /// Locate candidate elements: the first strategy that yields at least
    /// one match wins, and later strategies are never consulted. Zero
    /// matches under every strategy is a valid "no results" outcome.
    fn locate_candidates<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        for (strategy, selector) in self.container_selectors.iter().enumerate() {
            let found: Vec<ElementRef<'a>> = document.select(selector).collect();
            if !found.is_empty() {
                debug!(strategy, count = found.len(), "located candidate elements");
                return found;
            }
        }
        Vec::new()
    }

    /// Extract all fields from one candidate. Title is the minimum-viability
    /// gate; everything else degrades to unavailable.
    fn extract_fields(&self, element: &ElementRef<'_>) -> ExtractResult<CandidateFields> {
        let title = self
            .first_text(element, &self.title_selectors)
            .ok_or_else(|| ExtractError::required_field_missing("title"))?;

        Ok(CandidateFields {
            title,
            rating: self.extract_rating(element),
            review_count: self.extract_review_count(element),
            image_url: self.extract_image_url(element),
            price: self.first_text(element, &self.price_selectors),
        })
    }

    fn extract_rating(&self, element: &ElementRef<'_>) -> Option<f64> {
        let text = self.first_text(element, &self.rating_selectors)?;
        let captures = self.rating_pattern.captures(&text)?;
        let raw = captures
            .get(1)
            .or_else(|| captures.get(2))
            .or_else(|| captures.get(3))?;
        let value: f64 = raw.as_str().replace(',', ".").parse().ok()?;
        (0.0..=5.0).contains(&value).then_some(value)
    }

    fn extract_review_count(&self, element: &ElementRef<'_>) -> Option<String> {
        let text = self.first_text(element, &self.review_selectors)?;
        let run = self.review_count_pattern.find(&text)?;
        let digits = run.as_str().replace(',', "");
        (!digits.is_empty()).then_some(digits)
    }

    fn extract_image_url(&self, element: &ElementRef<'_>) -> Option<String> {
        let image = self.first_element(element, &self.image_selectors)?;
        let attr = |name: &str| {
            image
                .value()
                .attr(name)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        // Prefer the direct source, fall back to the lazy-load attribute.
        attr("src").or_else(|| attr("data-src"))
    }

    /// First element matched by any selector in the list, in list order.
    fn first_element<'a>(
        &self,
        element: &ElementRef<'a>,
        selectors: &[Selector],
    ) -> Option<ElementRef<'a>> {
        selectors
            .iter()
            .find_map(|selector| element.select(selector).next())
    }

    /// First non-empty trimmed text found under any selector in the list.
    fn first_text(&self, element: &ElementRef<'_>, selectors: &[Selector]) -> Option<String> {
        selectors.iter().find_map(|selector| {
            element
                .select(selector)
                .next()
                .map(|e| e.text().collect::<String>().trim().to_string())
                .filter(|text| !text.is_empty())
        })
    }
}

/// Compile a selector list, skipping entries that fail to parse. An entirely
/// unusable list is a construction error.
fn compile_selectors(field: &'static str, selector_strings: &[String]) -> ExtractResult<Vec<Selector>> {
    let mut selectors = Vec::new();
    let mut errors = Vec::new();

    for selector_str in selector_strings {
        match Selector::parse(selector_str) {
            Ok(selector) => selectors.push(selector),
            Err(e) => {
                warn!(field, selector = %selector_str, "failed to compile selector: {e}");
                errors.push(format!("'{selector_str}': {e}"));
            }
        }
    }

    if selectors.is_empty() {
        return Err(ExtractError::invalid_selector(field, errors.join(", ")));
    }
    Ok(selectors)
}
