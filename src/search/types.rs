use super::engine::ScoredMatch;
use serde::{Deserialize, Serialize};

/// Query string of `GET /api/search`. A missing `q` lists the whole catalog.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Name and score of one ranked match, used in debug output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredName {
    pub name: String,
    pub score: u32,
}

impl From<&ScoredMatch<'_>> for ScoredName {
    fn from(scored: &ScoredMatch<'_>) -> Self {
        Self {
            name: scored.record.name.clone(),
            score: scored.score,
        }
    }
}
