/// 2D arc math for curved walls.
///
/// A curved wall is described by its chord endpoints and a signed arc extent:
/// - `extent > 0`: counter-clockwise sweep from start to end around the center
/// - `extent < 0`: clockwise sweep
/// - `|extent| = π`: semicircle, the center sits on the chord midpoint
use std::f64::consts::PI;

use super::{left_normal, Point2, Vector2};

/// Computes the center of the circle carrying an arc from `start` to `end`
/// with the given signed `extent` in radians.
///
/// The center lies on the perpendicular bisector of the chord, at a signed
/// distance `tan(φ) * chord / 2` along the left normal, where
/// `φ = (π - extent) / 2` for arcs up to a semicircle and
/// `φ = -(π + extent) / 2` beyond, so major arcs pick the far side.
///
/// Returns `None` for a zero-length chord.
#[must_use]
pub fn arc_circle_center(start: &Point2, end: &Point2, extent: f64) -> Option<Point2> {
    let chord = end - start;
    let chord_len = chord.norm();
    if chord_len < 1e-12 {
        return None;
    }

    let phi = if extent.abs() > PI {
        -(PI + extent) / 2.0
    } else {
        (PI - extent) / 2.0
    };
    let center_to_chord = phi.tan() * chord_len / 2.0;

    let middle = Point2::new((start.x + end.x) * 0.5, (start.y + end.y) * 0.5);
    let normal = left_normal(chord / chord_len);
    Some(middle + normal * center_to_chord)
}

/// Upper bound on the steps of one tessellated arc side.
pub const MAX_ARC_STEPS: usize = 16_384;

/// Angular stepping used to tessellate an arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSteps {
    /// Signed angle between two consecutive samples.
    pub delta: f64,
    /// Number of steps; samples are taken at `0..=count`.
    pub count: usize,
}

impl ArcSteps {
    /// Chooses the angular step for an arc of the given signed `extent` whose
    /// outermost side is `exterior_arc_length` long.
    ///
    /// The step is `extent / sqrt(exterior_arc_length)`, so longer arcs get
    /// finer angular steps, up to [`MAX_ARC_STEPS`]. When the resulting step
    /// count does not reach `extent` within `closure`, one more step is added
    /// and the step is recomputed as `extent / count`, so the last sample
    /// lands on the arc end. The count is always at least 1.
    #[must_use]
    pub fn adaptive(extent: f64, exterior_arc_length: f64, closure: f64) -> Self {
        let mut delta = extent / exterior_arc_length.sqrt();
        let ratio = extent / delta;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let mut count = if ratio.is_finite() && ratio > 0.0 {
            ratio.floor().min(MAX_ARC_STEPS as f64) as usize
        } else {
            0
        };
        #[allow(clippy::cast_precision_loss)]
        let reached = count as f64 * delta;
        let capped = count == MAX_ARC_STEPS;
        if capped || count == 0 || !reached.is_finite() || (extent - reached).abs() > closure {
            count = count.saturating_add(1).min(MAX_ARC_STEPS);
            #[allow(clippy::cast_precision_loss)]
            {
                delta = extent / count as f64;
            }
        }
        Self { delta, count }
    }

    /// Returns the angle of sample `index` for an arc starting at `start_angle`.
    #[must_use]
    pub fn angle_at(&self, start_angle: f64, index: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let steps = index as f64;
        start_angle + self.delta * steps
    }
}

/// Evaluates the point at `angle` on the circle of `radius` around `center`.
#[must_use]
pub fn circle_point(center: &Point2, radius: f64, angle: f64) -> Point2 {
    center + Vector2::new(angle.cos(), angle.sin()) * radius
}
