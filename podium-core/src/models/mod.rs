pub mod aligned_series;
pub mod ranking_entry;
pub mod trajectory_point;

pub use aligned_series::{AlignedSeries, TeamSeries};
pub use ranking_entry::RankingEntry;
pub use trajectory_point::TrajectoryPoint;
