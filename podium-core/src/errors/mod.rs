pub mod config_error;
pub mod roster_error;

pub use config_error::ConfigError;
pub use roster_error::RosterError;

/// Top-level error type wrapping all subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum PodiumError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Roster(#[from] RosterError),
}

/// Convenience alias used across the workspace.
pub type PodiumResult<T> = Result<T, PodiumError>;
