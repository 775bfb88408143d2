use chrono::NaiveDate;

use podium_core::constants::DAYS_PER_DECAY_PERIOD;
use podium_core::roster::DecayRate;

/// Wall-clock decay weight: `λ ^ (daysBetween(asOf, occurredAt) / 7)`.
///
/// The day difference may be negative (observation dated after `as_of`),
/// which yields a weight above 1 — extrapolation, not an error.
pub fn day_weight(occurred_at: NaiveDate, as_of: NaiveDate, lambda: DecayRate) -> f64 {
    let days_diff = (as_of - occurred_at).num_days() as f64;
    lambda.value().powf(days_diff / DAYS_PER_DECAY_PERIOD)
}

/// Prefix-index decay weight: `λ ^ rank_from_newest`.
///
/// The most recent observation in a prefix has rank 0 (weight 1); each
/// older one decays by a further integer power of λ, regardless of how
/// many days separate them.
pub fn index_weight(rank_from_newest: usize, lambda: DecayRate) -> f64 {
    lambda.value().powi(rank_from_newest as i32)
}
