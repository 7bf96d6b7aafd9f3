//! Attribute Extraction Module
//!
//! Mines structured facts out of free-text Vietnamese product descriptions.
//!
//! ## Overview
//! Listings arrive with a single prose description such as
//! `"Kiểu tủ: Ngăn đá trên. Dung tích sử dụng: 300 lít. Sản xuất tại: Việt Nam."`.
//! This module walks a fixed, ordered table of `label: value` patterns over that text
//! and returns every labeled value it can find.
//!
//! ## Responsibilities
//! - **Facts**: Ordered `(label, value)` pairs, table order first, household size last.
//! - **Summary**: A short `" • "`-joined line of the most useful facts for listings.
//! - **Lookup**: Single-label access used when synthesizing product names.
//!
//! ## Submodules
//! - **`rules`**: The static rule table, label constants and household phrases.
//! - **`types`**: The `Fact` value type.

pub mod rules;
pub mod types;


use rules::{
    CABINET_TYPE, CAPACITY, FACT_RULES, HOUSEHOLD_PHRASES, HOUSEHOLD_SIZE, ORIGIN, RELEASE_YEAR,
    SCREEN_SIZE, TV_TYPE, WASHER_TYPE,
};
pub use types::Fact;

const SUMMARY_SEPARATOR: &str = " • ";

// (label, prefix) in the order they appear in the summary line.
const SUMMARY_FIELDS: &[(&str, &str)] = &[
    (CAPACITY, ""),
    (SCREEN_SIZE, ""),
    (CABINET_TYPE, ""),
    (TV_TYPE, ""),
    (WASHER_TYPE, ""),
    (ORIGIN, "Sản xuất: "),
    (RELEASE_YEAR, "Năm: "),
];

pub fn extract_facts(description: &str) -> Vec<Fact> {
    if description.is_empty() {
        return Vec::new();
    }

    let mut facts: Vec<Fact> = FACT_RULES
        .iter()
        .filter_map(|rule| {
            rule.apply(description)
                .map(|value| Fact::new(rule.label, value))
        })
        .collect();

    if let Some(phrase) = HOUSEHOLD_PHRASES
        .iter()
        .find(|phrase| description.contains(*phrase))
    {
        facts.push(Fact::new(HOUSEHOLD_SIZE, *phrase));
    }

    facts
}

/// Key facts of a description on one line, e.g. `"300 lít • Sản xuất: Việt Nam"`.
/// Empty when nothing was found.
pub fn summarize(description: &str) -> String {
    let facts = extract_facts(description);

    SUMMARY_FIELDS
        .iter()
        .filter_map(|(label, prefix)| {
            facts
                .iter()
                .find(|fact| fact.label == *label)
                .map(|fact| format!("{}{}", prefix, fact.value))
        })
        .collect::<Vec<_>>()
        .join(SUMMARY_SEPARATOR)
}

/// Value of a single labeled fact, without running the whole table.
pub fn fact_value(description: &str, label: &str) -> Option<String> {
    rules::rule_for(label)?.apply(description)
}
