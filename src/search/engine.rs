use super::scorer::{PreparedQuery, score_prepared};
use crate::catalog::types::CatalogRecord;

pub const MAX_RESULTS: usize = 15;

/// A record paired with its score for one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMatch<'a> {
    pub record: &'a CatalogRecord,
    pub score: u32,
}

/// Best matches for `query`, at most [`MAX_RESULTS`], highest score first.
/// Equal scores keep catalog order. A blank query returns the whole catalog.
pub fn search<'a>(query: &str, catalog: &'a [CatalogRecord]) -> Vec<&'a CatalogRecord> {
    if query.trim().is_empty() {
        return catalog.iter().collect();
    }

    search_scored(query, catalog)
        .into_iter()
        .map(|scored| scored.record)
        .collect()
}

/// Ranked matches with their scores. Records scoring zero are left out.
/// Empty for a blank query, which carries no signal to score.
pub fn search_scored<'a>(query: &str, catalog: &'a [CatalogRecord]) -> Vec<ScoredMatch<'a>> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let prepared = PreparedQuery::new(query);

    let mut results: Vec<ScoredMatch<'a>> = catalog
        .iter()
        .map(|record| ScoredMatch {
            record,
            score: score_prepared(&prepared, record),
        })
        .filter(|scored| scored.score > 0)
        .collect();

    // sort_by is stable: ties stay in catalog order
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(MAX_RESULTS);
    results
}
