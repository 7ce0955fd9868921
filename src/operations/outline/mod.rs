mod joined;
mod unjoined;

pub use joined::JoinedOutline;
pub use unjoined::UnjoinedOutline;

use crate::math::intersect_2d::CornerTolerances;

/// Parameters controlling outline generation and corner joining.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineParams {
    /// Squared chord length below which an arc wall is outlined as straight.
    pub degenerate_chord_sq: f64,
    /// Maximum angular gap allowed between the last arc sample and the arc end.
    pub arc_closure: f64,
    /// Slope magnitude above which a side line is handled as vertical.
    pub vertical_slope: f64,
    /// Slopes closer than this never produce a joined corner.
    pub parallel_slope_delta: f64,
    /// Same-sign slopes with a magnitude ratio at most this never produce a joined corner.
    pub parallel_slope_ratio: f64,
    /// Per-axis distance under which a corner reuses the neighbor's cached corner.
    pub snap_tolerance: f64,
    /// A joined corner may move at most this many wall thicknesses.
    pub join_limit_factor: f64,
}

impl Default for OutlineParams {
    fn default() -> Self {
        Self {
            degenerate_chord_sq: 1e-10,
            arc_closure: 1e-6,
            vertical_slope: 4000.0,
            parallel_slope_delta: 1e-5,
            parallel_slope_ratio: 1.004,
            snap_tolerance: 0.01,
            join_limit_factor: 2.0,
        }
    }
}

impl OutlineParams {
    /// Returns the thresholds used when intersecting side lines.
    #[must_use]
    pub fn corner_tolerances(&self) -> CornerTolerances {
        CornerTolerances {
            vertical_slope: self.vertical_slope,
            parallel_slope_delta: self.parallel_slope_delta,
            parallel_slope_ratio: self.parallel_slope_ratio,
        }
    }
}
