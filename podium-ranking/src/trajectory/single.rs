use podium_core::models::TrajectoryPoint;
use podium_core::roster::{DecayRate, Team};
use podium_decay::formula;

/// One team's score trajectory, evaluated at each of its own
/// observation dates.
///
/// Observations are sorted ascending by date (stable); the point at
/// index `i` is the prefix score over observations `0..=i`. Exactly
/// one point per observation, in chronological order.
pub fn team_trajectory(team: &Team, default_lambda: DecayRate) -> Vec<TrajectoryPoint> {
    let sorted = team.sorted_observations();

    (1..=sorted.len())
        .map(|len| TrajectoryPoint {
            date: sorted[len - 1].occurred_at,
            score: formula::prefix_score(&sorted[..len], default_lambda),
        })
        .collect()
}
