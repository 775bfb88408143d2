//! Trajectory builders: cumulative weighted-score curves over time.
//!
//! Both variants use the index-granular prefix recurrence — each point
//! is restated from scratch over the observations up to that point,
//! not smoothed from the previous point.

pub mod aligned;
pub mod single;

pub use aligned::aligned_trajectories;
pub use single::team_trajectory;
