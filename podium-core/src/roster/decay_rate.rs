use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ConfigError;

/// Decay rate λ, valid only on the open interval (0, 1).
///
/// Closer to 1 retains old scores longer. Values at or outside the
/// endpoints make every score saturate or collapse, so construction
/// rejects them outright rather than clamping.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct DecayRate(f64);

impl DecayRate {
    /// Default decay rate used when no configuration is present.
    pub const DEFAULT: DecayRate = DecayRate(0.95);

    /// Create a new DecayRate, rejecting anything outside (0, 1).
    pub fn new(value: f64) -> Result<Self, ConfigError> {
        if value.is_finite() && value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(ConfigError::InvalidDecayRate { value })
        }
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// The normalization factor `1 - λ` applied to every weighted sum.
    pub fn normalizer(self) -> f64 {
        1.0 - self.0
    }
}

impl Default for DecayRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for DecayRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl TryFrom<f64> for DecayRate {
    type Error = ConfigError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DecayRate> for f64 {
    fn from(rate: DecayRate) -> Self {
        rate.0
    }
}

// Hand-written so deserialized configs go through the same range check
// as programmatic construction.
impl<'de> Deserialize<'de> for DecayRate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
