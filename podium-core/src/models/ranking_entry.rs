use serde::{Deserialize, Serialize};

/// One row of a full ranking, ordered descending by score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub name: String,
    /// Current weighted score as of the ranking instant.
    pub score: f64,
    /// Number of recorded observations — display only, never affects
    /// ordering.
    pub observation_count: usize,
}
