use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One point of a single-team trajectory: the weighted score restated
/// over all observations up to and including this date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub date: NaiveDate,
    pub score: f64,
}
