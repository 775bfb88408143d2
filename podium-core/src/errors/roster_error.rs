/// Roster subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("invalid score {value}: must be a finite number >= 0")]
    InvalidScore { value: f64 },

    #[error("invalid observation date '{raw}'")]
    InvalidDate { raw: String },

    #[error("unknown team '{name}'")]
    UnknownTeam { name: String },

    #[error("team name '{name}' already exists")]
    DuplicateTeam { name: String },
}
