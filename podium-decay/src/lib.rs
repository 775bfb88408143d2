//! # podium-decay
//!
//! The scoring kernel: collapses a team's observation history into a
//! single recency-biased scalar. Two separately named recurrences are
//! provided because they answer different questions:
//!
//! - [`formula::weighted_score`] — "score right now", decaying per
//!   elapsed wall-clock week relative to a reference date.
//! - [`formula::prefix_score`] — "score as of each own event", decaying
//!   per observation index within a date-ordered prefix.
//!
//! The kernel performs no validation; inputs are admitted and checked
//! at the roster boundary in `podium-core`.

pub mod engine;
pub mod formula;
pub mod weight;

pub use engine::DecayEngine;
