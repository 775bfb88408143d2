//! # podium-core
//!
//! Foundation crate for the Podium team rating system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod roster;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ScoringConfig;
pub use errors::{PodiumError, PodiumResult};
pub use roster::{DecayRate, Observation, Team};
