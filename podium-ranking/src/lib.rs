//! # podium-ranking
//!
//! The Ranking & Series Builder: turns roster data into the three
//! presentation shapes — a full ranking as of a reference date, a
//! single-team score trajectory, and a multi-team trajectory aligned
//! on the union of all observation dates.
//!
//! All computations are pure and take one configuration snapshot per
//! batch; [`RankingEngine`] is the boundary layer that resolves teams
//! through a provider and surfaces lookup failures.

pub mod engine;
pub mod rank;
pub mod trajectory;

pub use engine::RankingEngine;
