use chrono::NaiveDate;

use podium_core::models::RankingEntry;
use podium_core::roster::{DecayRate, Team};
use podium_decay::formula;

/// Rank every team by its current weighted score as of `as_of`.
///
/// Teams with no observations score exactly 0 and still appear in the
/// output. The sort is stable and descending, so teams with equal
/// scores keep their input order.
pub fn rank(teams: &[Team], as_of: NaiveDate, default_lambda: DecayRate) -> Vec<RankingEntry> {
    let mut entries: Vec<RankingEntry> = teams
        .iter()
        .map(|team| RankingEntry {
            name: team.name.clone(),
            score: formula::weighted_score(&team.observations, as_of, default_lambda),
            observation_count: team.observation_count(),
        })
        .collect();

    entries.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    entries
}
