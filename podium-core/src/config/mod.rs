pub mod defaults;
pub mod scoring_config;

pub use scoring_config::ScoringConfig;
