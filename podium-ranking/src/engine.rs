use chrono::{NaiveDate, Utc};
use tracing::debug;

use podium_core::config::ScoringConfig;
use podium_core::errors::{PodiumResult, RosterError};
use podium_core::models::{AlignedSeries, RankingEntry, TrajectoryPoint};
use podium_core::traits::ITeamProvider;

use crate::rank;
use crate::trajectory;

/// Boundary layer between the roster provider and the pure ranking and
/// trajectory builders.
///
/// Holds one configuration snapshot; construct a new engine per batch
/// so a whole request sees a consistent default rate.
pub struct RankingEngine<'a> {
    provider: &'a dyn ITeamProvider,
    config: ScoringConfig,
}

impl<'a> RankingEngine<'a> {
    pub fn new(provider: &'a dyn ITeamProvider, config: ScoringConfig) -> Self {
        Self { provider, config }
    }

    /// The configuration snapshot this engine computes with.
    pub fn config(&self) -> ScoringConfig {
        self.config
    }

    /// Full ranking of all teams as of `as_of`, descending by score.
    pub fn rank(&self, as_of: NaiveDate) -> PodiumResult<Vec<RankingEntry>> {
        let teams = self.provider.teams()?;
        debug!(teams = teams.len(), %as_of, "ranking roster");
        Ok(rank::rank(&teams, as_of, self.config.default_lambda))
    }

    /// Full ranking as of today (UTC), snapshotted once for the batch.
    pub fn rank_today(&self) -> PodiumResult<Vec<RankingEntry>> {
        self.rank(Utc::now().date_naive())
    }

    /// Score trajectory for one team, evaluated at its own observation
    /// dates. Unknown names are an error, never a silent zero.
    pub fn team_trajectory(&self, name: &str) -> PodiumResult<Vec<TrajectoryPoint>> {
        let team = self
            .provider
            .team(name)?
            .ok_or_else(|| RosterError::UnknownTeam {
                name: name.to_string(),
            })?;
        debug!(team = %team.name, observations = team.observation_count(), "building trajectory");
        Ok(trajectory::team_trajectory(&team, self.config.default_lambda))
    }

    /// All teams' trajectories aligned on the shared date axis.
    pub fn aligned_trajectories(&self) -> PodiumResult<AlignedSeries> {
        let teams = self.provider.teams()?;
        debug!(teams = teams.len(), "building aligned trajectories");
        Ok(trajectory::aligned_trajectories(
            &teams,
            self.config.default_lambda,
        ))
    }
}
