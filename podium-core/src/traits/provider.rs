use crate::config::ScoringConfig;
use crate::errors::PodiumResult;
use crate::roster::{DecayRate, Team};

/// Read access to the roster: every team with its full, ordered
/// observation history.
pub trait ITeamProvider: Send + Sync {
    /// All teams in insertion order. Insertion order is the tie-break
    /// for equal ranking scores, so providers must keep it stable.
    fn teams(&self) -> PodiumResult<Vec<Team>>;

    /// Look up one team by display name. `Ok(None)` means the name is
    /// unknown; callers decide whether that is an error.
    fn team(&self, name: &str) -> PodiumResult<Option<Team>>;
}

/// Read/write access to the scalar scoring configuration.
pub trait IConfigProvider: Send + Sync {
    /// Current configuration snapshot.
    fn scoring_config(&self) -> PodiumResult<ScoringConfig>;

    /// Replace the default decay rate. The value has already passed
    /// `DecayRate` validation by construction.
    fn set_default_lambda(&self, rate: DecayRate) -> PodiumResult<()>;
}
