use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Multi-team trajectories aligned on a shared date axis.
///
/// The axis is the sorted union of every distinct observation date
/// across all teams. A team's series has one slot per axis date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedSeries {
    pub dates: Vec<NaiveDate>,
    pub series: Vec<TeamSeries>,
}

/// One team's values along the shared axis. `None` is a true gap — the
/// team had no observations on or before that date. Renderers must not
/// interpolate or connect across gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSeries {
    pub name: String,
    pub points: Vec<Option<f64>>,
}
