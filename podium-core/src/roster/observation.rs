use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::RosterError;
use crate::roster::DecayRate;

/// A single recorded test result for a team. Immutable once recorded.
///
/// `decay_rate` is the rate in force when the observation was recorded,
/// if the roster chose to snapshot one; scoring falls back to the
/// current default rate when it is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub score: f64,
    pub occurred_at: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decay_rate: Option<DecayRate>,
}

impl Observation {
    /// Admit a new observation. Scores must be finite and non-negative;
    /// this is the only place that rule is enforced — the scoring kernel
    /// assumes pre-validated input.
    pub fn new(
        score: f64,
        occurred_at: NaiveDate,
        decay_rate: Option<DecayRate>,
    ) -> Result<Self, RosterError> {
        if !score.is_finite() || score < 0.0 {
            return Err(RosterError::InvalidScore { value: score });
        }
        Ok(Self {
            score,
            occurred_at,
            decay_rate,
        })
    }

    /// Admit an observation from raw wire parts (ISO-8601 date string).
    pub fn from_parts(
        score: f64,
        date: &str,
        decay_rate: Option<DecayRate>,
    ) -> Result<Self, RosterError> {
        let occurred_at = date
            .parse::<NaiveDate>()
            .map_err(|_| RosterError::InvalidDate {
                raw: date.to_string(),
            })?;
        Self::new(score, occurred_at, decay_rate)
    }
}
