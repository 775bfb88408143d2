use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::roster::DecayRate;

/// Scoring subsystem configuration.
///
/// Passed by value into every ranking or trajectory computation so a
/// whole batch sees one consistent snapshot of the default rate, even
/// if the stored configuration changes mid-request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Default decay rate, used for every observation that does not
    /// carry its own override, and always used for the normalizer.
    pub default_lambda: DecayRate,
}

impl ScoringConfig {
    pub fn new(default_lambda: DecayRate) -> Self {
        Self { default_lambda }
    }

    /// Parse from a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            default_lambda: DecayRate::DEFAULT,
        }
    }
}
