pub mod decay_rate;
pub mod observation;
pub mod team;

pub use decay_rate::DecayRate;
pub use observation::Observation;
pub use team::Team;
