/// Podium system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Length of one decay period in days. The day-based recurrence applies
/// the decay rate once per elapsed week.
pub const DAYS_PER_DECAY_PERIOD: f64 = 7.0;
