use crate::catalog::types::CatalogRecord;

pub fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// Whitespace-separated, lower-cased query words. Order and duplicates are kept.
pub fn tokenize_query(query: &str) -> Vec<String> {
    fold(query)
        .split_whitespace()
        .map(|word| word.to_string())
        .collect()
}

/// Lower-cased `name + " " + description`, the text query words are matched against.
pub fn searchable_text(record: &CatalogRecord) -> String {
    fold(&format!("{} {}", record.name, record.description))
}
