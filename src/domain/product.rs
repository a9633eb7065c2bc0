use serde::{Serialize, Serializer};

/// Wire sentinel for fields that could not be determined.
///
/// A distinguished placeholder rather than an omitted field, so the record
/// shape stays uniform for clients.
pub const UNAVAILABLE: &str = "N/A";

/// One product extracted from a search results page.
///
/// `id` is the 1-based position among the records that survived extraction in
/// this batch; it is not stable across batches. `title` is the only required
/// field; candidates without one are discarded before a record is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRecord {
    pub id: u32,
    pub title: String,
    /// Star rating in [0, 5], parsed from free-text rating markers.
    #[serde(serialize_with = "na_when_missing")]
    pub rating: Option<f64>,
    /// Digit string with thousands separators stripped, e.g. "1234".
    #[serde(rename = "reviewCount", serialize_with = "na_when_missing")]
    pub review_count: Option<String>,
    /// Absolute or relative image reference, as found in the markup.
    #[serde(rename = "imageUrl", serialize_with = "na_when_missing")]
    pub image_url: Option<String>,
    /// Price as displayed (currency-formatted text), not parsed to a number.
    #[serde(serialize_with = "na_when_missing")]
    pub price: Option<String>,
}

fn na_when_missing<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(v) => v.serialize(serializer),
        None => serializer.serialize_str(UNAVAILABLE),
    }
}
