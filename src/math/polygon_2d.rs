use super::{Point2, TOLERANCE};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns the minimum distance from `p` to the segment `a → b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let d = b - a;
    let len_sq = d.norm_squared();
    if len_sq < 1e-20 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    (p - (a + d * t)).norm()
}

/// Even-odd test of `p` against the closed polygon `points`.
#[must_use]
pub fn polygon_contains_point(points: &[Point2], p: &Point2) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (&points[i], &points[j]);
        if (pi.y > p.y) != (pj.y > p.y) {
            let x_cross = pj.x + (p.y - pj.y) * (pi.x - pj.x) / (pi.y - pj.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Returns `true` if `p` is inside the polygon or within `margin` of its boundary.
#[must_use]
pub fn polygon_contains_point_with_margin(points: &[Point2], p: &Point2, margin: f64) -> bool {
    if polygon_contains_point(points, p) {
        return true;
    }
    if margin <= 0.0 {
        return false;
    }
    let n = points.len();
    (0..n).any(|i| point_to_segment_dist(p, &points[i], &points[(i + 1) % n]) <= margin)
}

/// Returns `true` if the closed polygon and the axis-aligned rectangle
/// spanned by `corner_a` and `corner_b` overlap.
#[must_use]
pub fn polygon_intersects_rectangle(points: &[Point2], corner_a: &Point2, corner_b: &Point2) -> bool {
    if points.is_empty() {
        return false;
    }
    let min = Point2::new(corner_a.x.min(corner_b.x), corner_a.y.min(corner_b.y));
    let max = Point2::new(corner_a.x.max(corner_b.x), corner_a.y.max(corner_b.y));
    let in_rect = |p: &Point2| p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y;

    if points.iter().any(in_rect) {
        return true;
    }

    let rect = [
        min,
        Point2::new(max.x, min.y),
        max,
        Point2::new(min.x, max.y),
    ];
    if rect.iter().any(|c| polygon_contains_point(points, c)) {
        return true;
    }

    let n = points.len();
    (0..n).any(|i| {
        let a0 = &points[i];
        let a1 = &points[(i + 1) % n];
        (0..4).any(|k| segments_intersect(a0, a1, &rect[k], &rect[(k + 1) % 4]))
    })
}

/// Bounded segment-segment intersection test, endpoints included.
fn segments_intersect(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let da = a1 - a0;
    let db = b1 - b0;
    let cross = da.x * db.y - da.y * db.x;
    if cross.abs() < TOLERANCE {
        return false;
    }
    let d = b0 - a0;
    let t = (d.x * db.y - d.y * db.x) / cross;
    let u = (d.x * da.y - d.y * da.x) / cross;
    let eps = TOLERANCE;
    t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps
}
