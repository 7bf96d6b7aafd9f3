use super::types::{
    CatalogRecord, DEFAULT_PRICE, DEFAULT_RATING, DEFAULT_RATING_COUNT, PLACEHOLDER_IMAGE,
    RawProduct,
};
use crate::extraction::fact_value;
use crate::extraction::rules::{CAPACITY, RELEASE_YEAR, SCREEN_SIZE};

const FALLBACK_CATEGORY: &str = "Sản phẩm";

// Checked in this order: fridge, TV, washer.
const CATEGORY_MARKERS: &[(&str, &str)] = &[
    ("Kiểu tủ:", "Tủ lạnh"),
    ("Loại Tivi:", "Tivi"),
    ("Loại máy giặt:", "Máy giặt"),
];

/// Turns a raw catalog entry into a record.
///
/// Returns `None` when the entry has neither a name nor a description; such
/// entries carry nothing to show or search and the caller must skip them.
/// A missing name is synthesized from the description.
/// Whitespace-only names and descriptions count as empty.
pub fn build(raw: RawProduct) -> Option<CatalogRecord> {
    let name = raw.name.unwrap_or_default();
    let description = raw.description.unwrap_or_default();

    if is_blank(&name) && is_blank(&description) {
        return None;
    }

    let name = if is_blank(&name) {
        infer_name(&description)
    } else {
        name
    };

    Some(CatalogRecord {
        name,
        image: raw.image.unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        price: raw.price.unwrap_or_else(|| DEFAULT_PRICE.to_string()),
        old_price: raw.old_price,
        description,
        rating: raw.rating.unwrap_or_else(|| DEFAULT_RATING.to_string()),
        rating_count: raw
            .rating_count
            .unwrap_or_else(|| DEFAULT_RATING_COUNT.to_string()),
        source: raw.source.unwrap_or_default(),
        product_type: raw.product_type.unwrap_or_default(),
    })
}

/// Builds a display name like `"Tivi 55 inch (2022)"` from the description:
/// category word, then capacity or screen size, then release year.
pub fn infer_name(description: &str) -> String {
    let category = CATEGORY_MARKERS
        .iter()
        .find(|(marker, _)| description.contains(marker))
        .map(|(_, category)| *category)
        .unwrap_or(FALLBACK_CATEGORY);

    let mut name = category.to_string();

    let size = fact_value(description, CAPACITY).or_else(|| fact_value(description, SCREEN_SIZE));
    if let Some(size) = size.filter(|size| !size.is_empty()) {
        name.push(' ');
        name.push_str(&size);
    }

    if let Some(year) = fact_value(description, RELEASE_YEAR).filter(|year| !year.is_empty()) {
        name.push_str(&format!(" ({})", year));
    }

    name
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
