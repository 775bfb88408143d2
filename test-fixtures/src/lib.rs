//! Shared test fixtures: roster builders and an in-memory provider
//! implementing both `podium-core` provider traits.

use std::sync::RwLock;

use podium_core::config::ScoringConfig;
use podium_core::errors::{PodiumResult, RosterError};
use podium_core::roster::{DecayRate, Observation, Team};
use podium_core::traits::{IConfigProvider, ITeamProvider};

/// Build an observation from a score and an ISO date. Panics on
/// invalid input — fixtures are for tests.
pub fn observation(score: f64, date: &str) -> Observation {
    Observation::from_parts(score, date, None).unwrap()
}

/// Build a team with a fixed history.
pub fn team(name: &str, history: &[(f64, &str)]) -> Team {
    let mut team = Team::new(name);
    for &(score, date) in history {
        team.record(observation(score, date));
    }
    team
}

struct RosterState {
    teams: Vec<Team>,
    config: ScoringConfig,
}

/// In-memory reference provider: teams in insertion order, unique
/// display names, and a read/write default decay rate. Each recorded
/// score snapshots the rate in force at recording time, mirroring how
/// a persistent roster stores it.
pub struct InMemoryRoster {
    state: RwLock<RosterState>,
}

impl InMemoryRoster {
    pub fn new() -> Self {
        Self::with_config(ScoringConfig::default())
    }

    pub fn with_config(config: ScoringConfig) -> Self {
        Self {
            state: RwLock::new(RosterState {
                teams: Vec::new(),
                config,
            }),
        }
    }

    /// Register a new team. Display names are unique.
    pub fn add_team(&self, name: &str) -> PodiumResult<()> {
        let mut state = self.state.write().expect("roster lock poisoned");
        if state.teams.iter().any(|t| t.name == name) {
            return Err(RosterError::DuplicateTeam {
                name: name.to_string(),
            }
            .into());
        }
        state.teams.push(Team::new(name));
        Ok(())
    }

    /// Validate and record a score for a team, snapshotting the
    /// current default rate onto the observation.
    pub fn record_score(&self, team_name: &str, score: f64, date: &str) -> PodiumResult<()> {
        let mut state = self.state.write().expect("roster lock poisoned");
        let snapshot = state.config.default_lambda;
        let team = state
            .teams
            .iter_mut()
            .find(|t| t.name == team_name)
            .ok_or_else(|| RosterError::UnknownTeam {
                name: team_name.to_string(),
            })?;
        team.record_score(score, date, Some(snapshot))
            .map_err(Into::into)
    }
}

impl Default for InMemoryRoster {
    fn default() -> Self {
        Self::new()
    }
}

impl ITeamProvider for InMemoryRoster {
    fn teams(&self) -> PodiumResult<Vec<Team>> {
        let state = self.state.read().expect("roster lock poisoned");
        Ok(state.teams.clone())
    }

    fn team(&self, name: &str) -> PodiumResult<Option<Team>> {
        let state = self.state.read().expect("roster lock poisoned");
        Ok(state.teams.iter().find(|t| t.name == name).cloned())
    }
}

impl IConfigProvider for InMemoryRoster {
    fn scoring_config(&self) -> PodiumResult<ScoringConfig> {
        let state = self.state.read().expect("roster lock poisoned");
        Ok(state.config)
    }

    fn set_default_lambda(&self, rate: DecayRate) -> PodiumResult<()> {
        let mut state = self.state.write().expect("roster lock poisoned");
        state.config.default_lambda = rate;
        Ok(())
    }
}
