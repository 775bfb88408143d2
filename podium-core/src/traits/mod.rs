pub mod provider;

pub use provider::{IConfigProvider, ITeamProvider};
