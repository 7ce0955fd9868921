use super::Point2;

/// Thresholds used by [`corner_intersection`].
#[derive(Debug, Clone, Copy)]
pub struct CornerTolerances {
    /// Slope magnitude above which a line is handled as vertical.
    pub vertical_slope: f64,
    /// Slopes closer than this are treated as parallel.
    pub parallel_slope_delta: f64,
    /// Same-sign slopes whose magnitude ratio is at most this are treated as parallel.
    pub parallel_slope_ratio: f64,
}

/// Why a corner was left where it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerRejection {
    /// Both lines have the same slope, or both are vertical.
    Parallel,
    /// The slopes are close enough that the intersection would be unstable.
    NearlyParallel,
    /// The intersection lies farther than the allowed limit from the corner.
    TooFar,
}

/// Moves the corner `p1` of line `p1 → p2` to the intersection of that line
/// with line `p3 → p4`.
///
/// Lines are handled in slope-intercept form. A line whose slope magnitude
/// exceeds `vertical_slope` is solved as `x = const`. The intersection is only
/// accepted when it lies within `limit` of `p1`.
///
/// # Errors
///
/// Returns the [`CornerRejection`] reason when `p1` must be kept.
pub fn corner_intersection(
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
    p4: &Point2,
    limit: f64,
    tol: &CornerTolerances,
) -> Result<Point2, CornerRejection> {
    let alpha1 = (p2.y - p1.y) / (p2.x - p1.x);
    let alpha2 = (p4.y - p3.y) / (p4.x - p3.x);
    #[allow(clippy::float_cmp)]
    if alpha1 == alpha2 {
        return Err(CornerRejection::Parallel);
    }

    let vertical = tol.vertical_slope;
    let (x, y) = if alpha1.abs() > vertical {
        if alpha2.abs() >= vertical {
            return Err(CornerRejection::Parallel);
        }
        let beta2 = p4.y - alpha2 * p4.x;
        (p1.x, alpha2 * p1.x + beta2)
    } else if alpha2.abs() > vertical {
        if alpha1.abs() >= vertical {
            return Err(CornerRejection::Parallel);
        }
        let beta1 = p2.y - alpha1 * p2.x;
        (p3.x, alpha1 * p3.x + beta1)
    } else {
        if nearly_parallel(alpha1, alpha2, tol) {
            return Err(CornerRejection::NearlyParallel);
        }
        let beta1 = p2.y - alpha1 * p2.x;
        let beta2 = p4.y - alpha2 * p4.x;
        let x = (beta2 - beta1) / (alpha1 - alpha2);
        (x, alpha1 * x + beta1)
    };

    let dist_sq = (x - p1.x).powi(2) + (y - p1.y).powi(2);
    if dist_sq < limit * limit {
        Ok(Point2::new(x, y))
    } else {
        Err(CornerRejection::TooFar)
    }
}

/// Slopes are nearly parallel when their difference is tiny, or when they
/// share a sign and one is at most `parallel_slope_ratio` times the other.
/// Undefined slopes (NaN) are reported as nearly parallel.
fn nearly_parallel(alpha1: f64, alpha2: f64, tol: &CornerTolerances) -> bool {
    let distinct = (alpha1 - alpha2).abs() > tol.parallel_slope_delta;
    if !distinct {
        return true;
    }
    let same_sign = (alpha1 > 0.0 && alpha2 > 0.0) || (alpha1 < 0.0 && alpha2 < 0.0);
    if !same_sign {
        return false;
    }
    let ratio = if alpha1.abs() > alpha2.abs() {
        alpha1 / alpha2
    } else {
        alpha2 / alpha1
    };
    ratio <= tol.parallel_slope_ratio
}
