use chrono::NaiveDate;

use podium_core::config::ScoringConfig;
use podium_core::roster::Observation;

use crate::formula;

/// Decay engine bound to one configuration snapshot.
///
/// Construct one per batch so every score in a ranking or trajectory
/// request sees the same default rate.
pub struct DecayEngine {
    config: ScoringConfig,
}

impl DecayEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// The configuration snapshot this engine computes with.
    pub fn config(&self) -> ScoringConfig {
        self.config
    }

    /// Current weighted score as of `as_of` (day-granular recurrence).
    pub fn current_score(&self, observations: &[Observation], as_of: NaiveDate) -> f64 {
        formula::weighted_score(observations, as_of, self.config.default_lambda)
    }

    /// Score of a date-ordered prefix (index-granular recurrence).
    pub fn prefix_score(&self, observations: &[Observation]) -> f64 {
        formula::prefix_score(observations, self.config.default_lambda)
    }
}

impl Default for DecayEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}
