/// Configuration subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid decay rate {value}: must lie strictly between 0 and 1")]
    InvalidDecayRate { value: f64 },

    #[error("config parse failed: {reason}")]
    ParseFailed { reason: String },
}
