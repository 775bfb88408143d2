use serde::{Deserialize, Serialize};

use crate::errors::RosterError;
use crate::roster::{DecayRate, Observation};

/// A team and its full observation history.
///
/// Observations are kept in insertion order; computations sort by date
/// with a stable sort, so insertion order is the tie-break for
/// observations sharing a date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub observations: Vec<Observation>,
}

impl Team {
    /// Create an empty team with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            observations: Vec::new(),
        }
    }

    /// Record a pre-validated observation.
    pub fn record(&mut self, observation: Observation) {
        self.observations.push(observation);
    }

    /// Validate and record a new observation in one step.
    pub fn record_score(
        &mut self,
        score: f64,
        date: &str,
        decay_rate: Option<DecayRate>,
    ) -> Result<(), RosterError> {
        let observation = Observation::from_parts(score, date, decay_rate)?;
        self.record(observation);
        Ok(())
    }

    /// Observations sorted ascending by date (stable — insertion order
    /// preserved within a date).
    pub fn sorted_observations(&self) -> Vec<Observation> {
        let mut sorted = self.observations.clone();
        sorted.sort_by_key(|o| o.occurred_at);
        sorted
    }

    pub fn observation_count(&self) -> usize {
        self.observations.len()
    }
}
