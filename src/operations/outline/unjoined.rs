use crate::geometry::Side;
use crate::math::arc_2d::{circle_point, ArcSteps};
use crate::math::{left_normal, Point2, Vector2, TOLERANCE};
use crate::topology::WallData;

use super::OutlineParams;

/// Computes the outline of a single wall, ignoring its joins.
///
/// A straight wall yields 4 points: left-start, left-end, right-end,
/// right-start. An arc wall yields an even number of points: the left side
/// from start to end followed by the right side from end to start.
#[derive(Debug, Clone, Copy)]
pub struct UnjoinedOutline {
    include_baseboards: bool,
    params: OutlineParams,
}

impl UnjoinedOutline {
    /// Creates a new unjoined outline operation with default parameters.
    #[must_use]
    pub fn new(include_baseboards: bool) -> Self {
        Self {
            include_baseboards,
            params: OutlineParams::default(),
        }
    }

    /// Overrides the outline parameters.
    #[must_use]
    pub fn with_params(mut self, params: OutlineParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the outline generation for `wall`.
    #[must_use]
    pub fn execute(&self, wall: &WallData) -> Vec<Point2> {
        let chord_sq = (wall.end() - wall.start()).norm_squared();
        if chord_sq > self.params.degenerate_chord_sq {
            if let (Some(extent), Some(center)) =
                (wall.shape().effective_extent(), wall.arc_circle_center())
            {
                return self.arc_outline(wall, center, extent);
            }
        }
        straight_outline(
            wall.start(),
            wall.end(),
            wall.side_offset(Side::Left, self.include_baseboards),
            wall.side_offset(Side::Right, self.include_baseboards),
        )
    }

    fn arc_outline(&self, wall: &WallData, center: Point2, extent: f64) -> Vec<Point2> {
        let start = wall.start();
        let radius = (start - center).norm();

        // Sweeping counter-clockwise keeps the left side toward the center.
        let (inner_side, outer_side) = if extent > 0.0 {
            (Side::Left, Side::Right)
        } else {
            (Side::Right, Side::Left)
        };
        let exterior_radius = radius + wall.side_offset(outer_side, self.include_baseboards);
        let interior_radius = (radius - wall.side_offset(inner_side, self.include_baseboards)).max(0.0);

        // Baseboards never change the sampling, so both outlines share angles.
        let wall_exterior_radius = radius + wall.side_offset(outer_side, false);
        let steps = ArcSteps::adaptive(
            extent,
            wall_exterior_radius * extent.abs(),
            self.params.arc_closure,
        );
        let start_angle = (start.y - center.y).atan2(start.x - center.x);

        let mut interior = Vec::with_capacity(steps.count + 1);
        let mut exterior = Vec::with_capacity(steps.count + 1);
        for i in 0..=steps.count {
            let angle = steps.angle_at(start_angle, i);
            interior.push(circle_point(&center, interior_radius, angle));
            exterior.push(circle_point(&center, exterior_radius, angle));
        }

        let (mut points, right) = if extent > 0.0 {
            (interior, exterior)
        } else {
            (exterior, interior)
        };
        points.extend(right.into_iter().rev());
        points
    }
}

/// Outline of a straight wall from `start` to `end` offset by `left` and
/// `right` on each side. A zero-length wall is oriented along +X.
#[must_use]
pub fn straight_outline(start: Point2, end: Point2, left: f64, right: f64) -> Vec<Point2> {
    let d = end - start;
    let len = d.norm();
    let dir = if len > TOLERANCE {
        d / len
    } else {
        Vector2::new(1.0, 0.0)
    };
    let normal = left_normal(dir);
    vec![
        start + normal * left,
        end + normal * left,
        end - normal * right,
        start - normal * right,
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Baseboard;
    use crate::math::polygon_2d::signed_area_2d;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-9;

    fn assert_point(p: &Point2, x: f64, y: f64) {
        assert_abs_diff_eq!(p.x, x, epsilon = TOL);
        assert_abs_diff_eq!(p.y, y, epsilon = TOL);
    }

    fn wall(x0: f64, y0: f64, x1: f64, y1: f64, thickness: f64) -> WallData {
        WallData::new(Point2::new(x0, y0), Point2::new(x1, y1), thickness).unwrap()
    }

    #[test]
    fn straight_wall_is_centered_rectangle() {
        let pts = UnjoinedOutline::new(false).execute(&wall(0.0, 0.0, 100.0, 0.0, 10.0));
        assert_eq!(pts.len(), 4);
        assert_point(&pts[0], 0.0, 5.0);
        assert_point(&pts[1], 100.0, 5.0);
        assert_point(&pts[2], 100.0, -5.0);
        assert_point(&pts[3], 0.0, -5.0);
        assert_abs_diff_eq!(signed_area_2d(&pts).abs(), 1000.0, epsilon = TOL);
    }

    #[test]
    fn zero_thickness_collapses_onto_centerline() {
        let pts = UnjoinedOutline::new(false).execute(&wall(1.0, 2.0, 4.0, 6.0, 0.0));
        assert_point(&pts[0], 1.0, 2.0);
        assert_point(&pts[1], 4.0, 6.0);
        assert_point(&pts[2], 4.0, 6.0);
        assert_point(&pts[3], 1.0, 2.0);
    }

    #[test]
    fn asymmetric_baseboards_widen_each_side() {
        let w = wall(0.0, 0.0, 0.0, 50.0, 10.0)
            .with_baseboard(Side::Left, Some(Baseboard::new(1.0, 10.0, None).unwrap()))
            .with_baseboard(Side::Right, Some(Baseboard::new(2.0, 10.0, None).unwrap()));
        // Heading +Y, left is -X.
        let with = UnjoinedOutline::new(true).execute(&w);
        assert_point(&with[0], -6.0, 0.0);
        assert_point(&with[1], -6.0, 50.0);
        assert_point(&with[2], 7.0, 50.0);
        assert_point(&with[3], 7.0, 0.0);
        let without = UnjoinedOutline::new(false).execute(&w);
        assert_point(&without[0], -5.0, 0.0);
        assert_point(&without[2], 5.0, 50.0);
    }

    #[test]
    fn degenerate_wall_uses_straight_formula() {
        let w = wall(3.0, 3.0, 3.0, 3.0, 2.0).with_arc_extent(Some(PI / 2.0)).unwrap();
        let pts = UnjoinedOutline::new(false).execute(&w);
        assert_eq!(pts.len(), 4);
        assert_point(&pts[0], 3.0, 4.0);
        assert_point(&pts[1], 3.0, 4.0);
        assert_point(&pts[2], 3.0, 2.0);
        assert_point(&pts[3], 3.0, 2.0);
    }

    #[test]
    fn arc_outline_has_two_equal_halves() {
        let w = wall(0.0, 0.0, 200.0, 0.0, 10.0).with_arc_extent(Some(PI / 2.0)).unwrap();
        let pts = UnjoinedOutline::new(false).execute(&w);
        assert!(pts.len() >= 4);
        assert_eq!(pts.len() % 2, 0);
        let center = w.arc_circle_center().unwrap();
        let r = (w.start() - center).norm();
        let h = pts.len() / 2;
        // CCW sweep: first half is the interior side.
        for p in &pts[..h] {
            assert_abs_diff_eq!((p - center).norm(), r - 5.0, epsilon = 1e-6);
        }
        for p in &pts[h..] {
            assert_abs_diff_eq!((p - center).norm(), r + 5.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn arc_outline_closes_on_end_angle() {
        for &extent in &[PI / 3.0, -PI / 3.0, 1.2 * PI, -1.7 * PI] {
            let w = wall(10.0, 20.0, 150.0, 80.0, 0.0).with_arc_extent(Some(extent)).unwrap();
            let pts = UnjoinedOutline::new(false).execute(&w);
            let h = pts.len() / 2;
            let center = w.arc_circle_center().unwrap();
            let end_angle = (w.end().y - center.y).atan2(w.end().x - center.x);
            let last = pts[h - 1];
            let last_angle = (last.y - center.y).atan2(last.x - center.x);
            let gap = (last_angle - end_angle).sin().abs();
            assert!(gap < 1e-6, "extent={extent} gap={gap}");
            assert_point(&pts[0], 10.0, 20.0);
            assert_abs_diff_eq!(last.x, 150.0, epsilon = 1e-4);
            assert_abs_diff_eq!(last.y, 80.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn clockwise_arc_puts_exterior_first() {
        let w = wall(0.0, 0.0, 100.0, 0.0, 4.0).with_arc_extent(Some(-PI / 2.0)).unwrap();
        let pts = UnjoinedOutline::new(false).execute(&w);
        let center = w.arc_circle_center().unwrap();
        let r = (w.start() - center).norm();
        assert_abs_diff_eq!((pts[0] - center).norm(), r + 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!((pts[pts.len() - 1] - center).norm(), r - 2.0, epsilon = 1e-6);
        // Clockwise from (0,0) to (100,0) bulges toward +Y, left of travel.
        assert!(pts.iter().any(|p| p.y > 20.0));
    }

    #[test]
    fn arc_baseboards_follow_inner_and_outer_sides() {
        let w = wall(0.0, 0.0, 100.0, 0.0, 4.0)
            .with_arc_extent(Some(PI / 2.0))
            .unwrap()
            .with_baseboard(Side::Left, Some(Baseboard::new(1.0, 10.0, None).unwrap()))
            .with_baseboard(Side::Right, Some(Baseboard::new(3.0, 10.0, None).unwrap()));
        let pts = UnjoinedOutline::new(true).execute(&w);
        let center = w.arc_circle_center().unwrap();
        let r = (w.start() - center).norm();
        // Left is inner for a counter-clockwise sweep.
        assert_abs_diff_eq!((pts[0] - center).norm(), r - 3.0, epsilon = 1e-6);
        assert_abs_diff_eq!((pts[pts.len() - 1] - center).norm(), r + 5.0, epsilon = 1e-6);
    }

    #[test]
    fn baseboards_keep_arc_sampling_angles() {
        let w = wall(0.0, 0.0, 300.0, 0.0, 10.0)
            .with_arc_extent(Some(-PI / 2.0))
            .unwrap()
            .with_baseboard(Side::Left, Some(Baseboard::new(40.0, 10.0, None).unwrap()))
            .with_baseboard(Side::Right, Some(Baseboard::new(3.0, 10.0, None).unwrap()));
        let bare = UnjoinedOutline::new(false).execute(&w);
        let with = UnjoinedOutline::new(true).execute(&w);
        assert_eq!(bare.len(), with.len());
        let center = w.arc_circle_center().unwrap();
        let angle = |p: &Point2| (p.y - center.y).atan2(p.x - center.x);
        for (a, b) in bare.iter().zip(&with) {
            assert_abs_diff_eq!(angle(a), angle(b), epsilon = 1e-9);
        }
    }

    #[test]
    fn huge_extent_yields_bounded_even_outline() {
        let w = wall(0.0, 0.0, 100.0, 0.0, 10.0).with_arc_extent(Some(1e12)).unwrap();
        let pts = UnjoinedOutline::new(false).execute(&w);
        assert!(pts.len() >= 4);
        assert_eq!(pts.len() % 2, 0);
        assert!(pts.len() <= 2 * (crate::math::arc_2d::MAX_ARC_STEPS + 1));
    }

    #[test]
    fn zero_extent_matches_straight_outline() {
        let straight = UnjoinedOutline::new(false).execute(&wall(0.0, 0.0, 30.0, 40.0, 6.0));
        let zero = wall(0.0, 0.0, 30.0, 40.0, 6.0).with_arc_extent(Some(0.0)).unwrap();
        let pts = UnjoinedOutline::new(false).execute(&zero);
        assert_eq!(pts.len(), 4);
        for (a, b) in pts.iter().zip(&straight) {
            assert_point(a, b.x, b.y);
        }
    }

    #[test]
    fn interior_radius_never_negative() {
        // Semicircle of radius 1 with a wall 10 thick.
        let w = wall(0.0, 0.0, 2.0, 0.0, 10.0).with_arc_extent(Some(PI)).unwrap();
        let pts = UnjoinedOutline::new(false).execute(&w);
        let h = pts.len() / 2;
        for p in &pts[..h] {
            assert_point(p, 1.0, 0.0);
        }
    }
}
