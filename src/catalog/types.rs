//! Catalog Data Types
//!
//! Defines the ingestion shape of a listing, the validated in-memory record,
//! and the JSON projection served to clients.

use crate::extraction::{self, Fact};
use crate::search::price::format_price;
use serde::{Deserialize, Deserializer, Serialize};

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x300?text=No+Image";
pub const DEFAULT_PRICE: &str = "0";
pub const DEFAULT_RATING: &str = "0";
pub const DEFAULT_RATING_COUNT: &str = "0 đánh giá";
pub const FEATURED_RATING: f64 = 4.8;

/// One entry of the catalog file, keyed the way the scraper writes it.
///
/// Every field is optional. Scalars are accepted as text whether the file
/// stores them as strings or numbers (ratings are often bare numbers).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProduct {
    #[serde(rename = "Tên sản phẩm", default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(rename = "Ảnh", default, deserialize_with = "lenient_text")]
    pub image: Option<String>,
    #[serde(rename = "Giá", default, deserialize_with = "lenient_text")]
    pub price: Option<String>,
    #[serde(rename = "Giá cũ", default, deserialize_with = "lenient_text")]
    pub old_price: Option<String>,
    #[serde(rename = "Mô tả sản phẩm", default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(
        rename = "Điểm đánh giá trung bình",
        default,
        deserialize_with = "lenient_text"
    )]
    pub rating: Option<String>,
    #[serde(rename = "Số lượt đánh giá", default, deserialize_with = "lenient_text")]
    pub rating_count: Option<String>,
    #[serde(rename = "Nguồn dữ liệu", default, deserialize_with = "lenient_text")]
    pub source: Option<String>,
    #[serde(rename = "Loại sản phẩm", default, deserialize_with = "lenient_text")]
    pub product_type: Option<String>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

/// A validated product listing. Immutable once built; `name` is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub name: String,
    pub image: String,
    pub price: String,
    pub old_price: Option<String>,
    pub description: String,
    pub rating: String,
    pub rating_count: String,
    pub source: String,
    pub product_type: String,
}

impl CatalogRecord {
    pub fn facts(&self) -> Vec<Fact> {
        extraction::extract_facts(&self.description)
    }

    pub fn summary(&self) -> String {
        extraction::summarize(&self.description)
    }

    pub fn is_featured(&self) -> bool {
        is_featured_rating(&self.rating)
    }

    pub fn price_amount(&self) -> u64 {
        crate::search::price::parse_display_price(&self.price)
    }
}

/// Ratings that do not parse are simply not featured.
pub fn is_featured_rating(rating: &str) -> bool {
    rating
        .trim()
        .parse::<f64>()
        .map(|value| value >= FEATURED_RATING)
        .unwrap_or(false)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecificationView {
    pub label: String,
    pub value: String,
}

impl From<Fact> for SpecificationView {
    fn from(fact: Fact) -> Self {
        Self {
            label: fact.label,
            value: fact.value,
        }
    }
}

/// Wire projection of a record: the stored fields plus the derived
/// specifications, summary line and featured flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductView {
    #[serde(rename = "Tên sản phẩm")]
    pub name: String,
    #[serde(rename = "Ảnh")]
    pub image: String,
    #[serde(rename = "Giá")]
    pub price: String,
    /// Parsed price re-rendered canonically, `"0₫"` when unparsable.
    #[serde(default)]
    pub formatted_price: String,
    #[serde(rename = "Điểm đánh giá trung bình")]
    pub rating: String,
    #[serde(rename = "Số lượt đánh giá")]
    pub rating_count: String,
    #[serde(rename = "Mô tả sản phẩm")]
    pub description: String,
    #[serde(rename = "Giá cũ", default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<String>,
    #[serde(rename = "Nguồn dữ liệu", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub specifications: Vec<SpecificationView>,
    pub key_info: String,
    pub is_featured: bool,
}

impl From<&CatalogRecord> for ProductView {
    fn from(record: &CatalogRecord) -> Self {
        Self {
            name: record.name.clone(),
            image: record.image.clone(),
            price: record.price.clone(),
            formatted_price: format_price(record.price_amount()),
            rating: record.rating.clone(),
            rating_count: record.rating_count.clone(),
            description: record.description.clone(),
            old_price: record
                .old_price
                .clone()
                .filter(|price| !price.is_empty()),
            source: Some(record.source.clone()).filter(|source| !source.is_empty()),
            specifications: record
                .facts()
                .into_iter()
                .map(SpecificationView::from)
                .collect(),
            key_info: record.summary(),
            is_featured: record.is_featured(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
