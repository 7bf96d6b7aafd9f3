//! Relevance scoring of one catalog record against one query.
//!
//! The score is the sum of independent rules. Every rule sees the same
//! prepared query and the record, and contributes zero or more points.

use super::price::parse_quantity_from_query;
use super::tokenizer::{fold, searchable_text, tokenize_query};
use crate::catalog::types::CatalogRecord;
use crate::extraction::rules::{HOUSEHOLD_LARGE, HOUSEHOLD_MEDIUM, HOUSEHOLD_SMALL};

pub const LESS_THAN_ANCHORS: &[&str] = &["dưới", "nhỏ hơn", "it hon"];
pub const GREATER_THAN_ANCHORS: &[&str] = &["trên", "lớn hơn", "lon hon"];
pub const PEOPLE_CUES: &[&str] = &["người", "nguoi"];

pub const TEXT_HIT: u32 = 1;
pub const NAME_HIT: u32 = 2;
pub const CLAUSE_HIT: u32 = 3;

/// A household bracket: every cue group must have at least one word in the
/// query, and the description must carry the bracket phrase verbatim.
pub struct HouseholdClause {
    pub cue_groups: &'static [&'static [&'static str]],
    pub phrase: &'static str,
}

pub static HOUSEHOLD_CLAUSES: [HouseholdClause; 3] = [
    HouseholdClause {
        cue_groups: &[&["2", "hai"], &["3", "ba"]],
        phrase: HOUSEHOLD_SMALL,
    },
    HouseholdClause {
        cue_groups: &[&["4", "bốn", "bon"], &["5", "năm", "nam"]],
        phrase: HOUSEHOLD_MEDIUM,
    },
    HouseholdClause {
        cue_groups: &[&["5", "năm", "nam", "nhiều", "nhieu"]],
        phrase: HOUSEHOLD_LARGE,
    },
];

pub struct OriginClause {
    pub cues: &'static [&'static str],
    pub phrase: &'static str,
}

pub static ORIGIN_CLAUSES: [OriginClause; 3] = [
    OriginClause {
        cues: &["việt nam", "viet nam"],
        phrase: "Sản xuất tại: Việt Nam",
    },
    OriginClause {
        cues: &["thái lan", "thai lan"],
        phrase: "Sản xuất tại: Thái Lan",
    },
    OriginClause {
        cues: &["trung quốc", "trung quoc", "tàu", "tau"],
        phrase: "Sản xuất tại: Trung Quốc",
    },
];

/// Query-side work done once per search rather than once per record.
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    pub folded: String,
    pub tokens: Vec<String>,
    /// Price ceiling from a "less than" clause, `0` when absent.
    pub max_price: u64,
    /// Price floor from a "greater than" clause, `0` when absent.
    pub min_price: u64,
}

impl PreparedQuery {
    pub fn new(query: &str) -> Self {
        let folded = fold(query);
        let tokens = tokenize_query(&folded);
        let max_price = parse_quantity_from_query(&folded, LESS_THAN_ANCHORS);
        let min_price = parse_quantity_from_query(&folded, GREATER_THAN_ANCHORS);

        Self {
            folded,
            tokens,
            max_price,
            min_price,
        }
    }

    fn mentions(&self, cue: &str) -> bool {
        self.folded.contains(cue)
    }

    fn mentions_any(&self, cues: &[&str]) -> bool {
        cues.iter().any(|cue| self.mentions(cue))
    }
}

pub type ScoreRule = fn(&PreparedQuery, &CatalogRecord) -> u32;

/// Applied in order and summed. No rule can cancel another.
pub const SCORE_RULES: &[ScoreRule] = &[
    keyword_matches,
    price_ceiling,
    price_floor,
    household_small,
    household_medium,
    household_large,
    origin_vietnam,
    origin_thailand,
    origin_china,
];

pub fn score(query: &str, record: &CatalogRecord) -> u32 {
    score_prepared(&PreparedQuery::new(query), record)
}

pub fn score_prepared(query: &PreparedQuery, record: &CatalogRecord) -> u32 {
    SCORE_RULES.iter().map(|rule| rule(query, record)).sum()
}

/// +1 per query word found in name or description, +2 more when it is in the name.
pub fn keyword_matches(query: &PreparedQuery, record: &CatalogRecord) -> u32 {
    let text = searchable_text(record);
    let name = fold(&record.name);

    query
        .tokens
        .iter()
        .map(|token| {
            let mut points = 0;
            if text.contains(token.as_str()) {
                points += TEXT_HIT;
            }
            if name.contains(token.as_str()) {
                points += NAME_HIT;
            }
            points
        })
        .sum()
}

pub fn price_ceiling(query: &PreparedQuery, record: &CatalogRecord) -> u32 {
    if query.max_price > 0 && record.price_amount() <= query.max_price {
        CLAUSE_HIT
    } else {
        0
    }
}

pub fn price_floor(query: &PreparedQuery, record: &CatalogRecord) -> u32 {
    if query.min_price > 0 && record.price_amount() >= query.min_price {
        CLAUSE_HIT
    } else {
        0
    }
}

fn household(query: &PreparedQuery, record: &CatalogRecord, clause: &HouseholdClause) -> u32 {
    let cued = query.mentions_any(PEOPLE_CUES)
        && clause
            .cue_groups
            .iter()
            .all(|group| query.mentions_any(group));

    if cued && record.description.contains(clause.phrase) {
        CLAUSE_HIT
    } else {
        0
    }
}

pub fn household_small(query: &PreparedQuery, record: &CatalogRecord) -> u32 {
    household(query, record, &HOUSEHOLD_CLAUSES[0])
}

pub fn household_medium(query: &PreparedQuery, record: &CatalogRecord) -> u32 {
    household(query, record, &HOUSEHOLD_CLAUSES[1])
}

pub fn household_large(query: &PreparedQuery, record: &CatalogRecord) -> u32 {
    household(query, record, &HOUSEHOLD_CLAUSES[2])
}

fn origin(query: &PreparedQuery, record: &CatalogRecord, clause: &OriginClause) -> u32 {
    if query.mentions_any(clause.cues) && record.description.contains(clause.phrase) {
        CLAUSE_HIT
    } else {
        0
    }
}

pub fn origin_vietnam(query: &PreparedQuery, record: &CatalogRecord) -> u32 {
    origin(query, record, &ORIGIN_CLAUSES[0])
}

pub fn origin_thailand(query: &PreparedQuery, record: &CatalogRecord) -> u32 {
    origin(query, record, &ORIGIN_CLAUSES[1])
}

pub fn origin_china(query: &PreparedQuery, record: &CatalogRecord) -> u32 {
    origin(query, record, &ORIGIN_CLAUSES[2])
}
