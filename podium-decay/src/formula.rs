use chrono::NaiveDate;

use podium_core::roster::{DecayRate, Observation};

use crate::weight;

/// Current weighted score as of a reference date.
///
/// ```text
/// score = (1 - λ_default) × Σ_i  λ_i ^ (daysDiff_i / 7) × score_i
/// ```
///
/// where `λ_i` is the observation's own rate if it carries one, else
/// the default. Observations are sorted ascending by date with a
/// stable sort before summing, so the result is independent of input
/// order and ties resolve by insertion order.
///
/// The normalizer always uses the *default* rate, even for
/// observations that override their own — the default acts as the
/// system-wide normalization scale. This asymmetry is intentional and
/// matches long-standing scoring behavior; do not "fix" it.
pub fn weighted_score(
    observations: &[Observation],
    as_of: NaiveDate,
    default_lambda: DecayRate,
) -> f64 {
    if observations.is_empty() {
        return 0.0;
    }

    let mut sorted = observations.to_vec();
    sorted.sort_by_key(|o| o.occurred_at);

    let weighted_sum: f64 = sorted
        .iter()
        .map(|o| {
            let lambda = o.decay_rate.unwrap_or(default_lambda);
            weight::day_weight(o.occurred_at, as_of, lambda) * o.score
        })
        .sum();

    default_lambda.normalizer() * weighted_sum
}

/// Weighted score over a date-ordered prefix of observations, decaying
/// per observation index rather than per elapsed day.
///
/// ```text
/// score = (1 - λ_default) × Σ_j  λ_j ^ (n - j - 1) × score_j
/// ```
///
/// The caller supplies the prefix already sorted ascending by date;
/// the last element is the "as of" event and gets weight 1. Same
/// default-rate normalizer as [`weighted_score`].
pub fn prefix_score(observations: &[Observation], default_lambda: DecayRate) -> f64 {
    if observations.is_empty() {
        return 0.0;
    }

    let n = observations.len();
    let weighted_sum: f64 = observations
        .iter()
        .enumerate()
        .map(|(j, o)| {
            let lambda = o.decay_rate.unwrap_or(default_lambda);
            weight::index_weight(n - j - 1, lambda) * o.score
        })
        .sum();

    default_lambda.normalizer() * weighted_sum
}
