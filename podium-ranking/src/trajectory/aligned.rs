use std::collections::BTreeSet;

use chrono::NaiveDate;

use podium_core::models::{AlignedSeries, TeamSeries};
use podium_core::roster::{DecayRate, Team};
use podium_decay::formula;

/// Multi-team trajectories aligned on a shared date axis.
///
/// The axis is the sorted union of every distinct observation date
/// across all teams. For each team and axis date `d`, the value is the
/// prefix score over that team's observations dated on or before `d`,
/// or `None` if the team has no observations that early. Teams with
/// zero observations are omitted entirely.
pub fn aligned_trajectories(teams: &[Team], default_lambda: DecayRate) -> AlignedSeries {
    // BTreeSet gives the sorted, de-duplicated axis in one pass.
    let dates: Vec<NaiveDate> = teams
        .iter()
        .flat_map(|t| t.observations.iter().map(|o| o.occurred_at))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let series = teams
        .iter()
        .filter(|t| !t.observations.is_empty())
        .map(|team| {
            let sorted = team.sorted_observations();
            let points = dates
                .iter()
                .map(|&d| {
                    let len = sorted.partition_point(|o| o.occurred_at <= d);
                    if len == 0 {
                        None // True gap — never zero.
                    } else {
                        Some(formula::prefix_score(&sorted[..len], default_lambda))
                    }
                })
                .collect();

            TeamSeries {
                name: team.name.clone(),
                points,
            }
        })
        .collect();

    AlignedSeries { dates, series }
}
