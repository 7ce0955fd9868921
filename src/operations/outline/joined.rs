use tracing::trace;

use crate::error::Result;
use crate::math::intersect_2d::{corner_intersection, CornerTolerances};
use crate::math::Point2;
use crate::topology::{WallData, WallEnd, WallId, WallStore};

/// Computes the outline of a wall with its corners resolved against the
/// walls joined at its start and end.
///
/// Each joined end moves the left and right corners to the intersection of
/// this wall's side line with the matching side line of the neighbor, then
/// snaps them onto the neighbor's cached corners when they agree within the
/// snap tolerance, so both walls share bit-identical corner points.
#[derive(Debug, Clone, Copy)]
pub struct JoinedOutline {
    wall: WallId,
    include_baseboards: bool,
}

/// Outline indices of the corner at one wall end on one side, and of the
/// next point along that side, which fixes the side line direction.
#[derive(Debug, Clone, Copy)]
struct SideCorner {
    corner: usize,
    inner: usize,
}

#[derive(Debug, Clone, Copy)]
struct EndCorners {
    left: SideCorner,
    right: SideCorner,
}

impl EndCorners {
    /// Corner indices at `end` of an outline of `len` points laid out as
    /// `[left start..left end, right end..right start]`.
    fn at(len: usize, end: WallEnd) -> Self {
        let half = len / 2;
        match end {
            WallEnd::Start => Self {
                left: SideCorner { corner: 0, inner: 1 },
                right: SideCorner { corner: len - 1, inner: len - 2 },
            },
            WallEnd::End => Self {
                left: SideCorner { corner: half - 1, inner: half - 2 },
                right: SideCorner { corner: half, inner: half + 1 },
            },
        }
    }
}

impl JoinedOutline {
    /// Creates a new joined outline operation.
    #[must_use]
    pub fn new(wall: WallId, include_baseboards: bool) -> Self {
        Self {
            wall,
            include_baseboards,
        }
    }

    /// Executes the corner resolution against the wall's current neighbors.
    ///
    /// Self joins and joins to removed walls are ignored.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::EntityNotFound` if the wall is not in `store`.
    pub fn execute(&self, store: &WallStore) -> Result<Vec<Point2>> {
        let wall = store.wall(self.wall)?;
        let mut points = store.unjoined_points(self.wall, self.include_baseboards)?.to_vec();
        let params = store.params();
        let limit = params.join_limit_factor * wall.thickness();
        let tol = params.corner_tolerances();

        for end in [WallEnd::Start, WallEnd::End] {
            let Some(other_id) = wall.joined_wall(end) else {
                continue;
            };
            if other_id == self.wall {
                trace!(?end, "ignoring wall joined to itself");
                continue;
            }
            let Ok(other) = store.wall(other_id) else {
                trace!(?end, "ignoring join to a removed wall");
                continue;
            };
            let Some(other_end) = matching_end(self.wall, wall, end, other, params.degenerate_chord_sq)
            else {
                trace!(?end, "neighbor does not join back");
                continue;
            };
            let other_points = store.unjoined_points(other_id, self.include_baseboards)?;
            let joint = Joint {
                end,
                other_end,
                other_points,
                other_cache: other.cached_points(self.include_baseboards),
                limit,
                snap: params.snap_tolerance,
                tol: &tol,
            };
            joint.resolve(&mut points);
        }

        trace!(points = points.len(), include_baseboards = self.include_baseboards, "joined outline computed");
        Ok(points)
    }
}

/// Finds which end of `other` meets `end` of `wall`.
///
/// `other` must reference `wall` back. When it does so at both ends, the
/// end whose point coincides with this wall's point wins.
fn matching_end(
    wall_id: WallId,
    wall: &WallData,
    end: WallEnd,
    other: &WallData,
    coincident_sq: f64,
) -> Option<WallEnd> {
    let point = wall.point(end);
    let at_start = other.wall_at_start() == Some(wall_id);
    let at_end = other.wall_at_end() == Some(wall_id);
    let coincides = |p: Point2| (p - point).norm_squared() < coincident_sq;

    if at_end && (!at_start || coincides(other.end())) {
        Some(WallEnd::End)
    } else if at_start && (!at_end || coincides(other.start())) {
        Some(WallEnd::Start)
    } else {
        None
    }
}

struct Joint<'a> {
    end: WallEnd,
    other_end: WallEnd,
    other_points: &'a [Point2],
    other_cache: Option<&'a [Point2]>,
    limit: f64,
    snap: f64,
    tol: &'a CornerTolerances,
}

impl Joint<'_> {
    fn resolve(&self, points: &mut [Point2]) {
        let own = EndCorners::at(points.len(), self.end);
        let theirs = EndCorners::at(self.other_points.len(), self.other_end);
        // Walls meeting end to start run the same way and pair left with left.
        let (for_left, for_right) = if self.end == self.other_end {
            (theirs.right, theirs.left)
        } else {
            (theirs.left, theirs.right)
        };

        for (mine, their) in [(own.left, for_left), (own.right, for_right)] {
            match corner_intersection(
                &points[mine.corner],
                &points[mine.inner],
                &self.other_points[their.corner],
                &self.other_points[their.inner],
                self.limit,
                self.tol,
            ) {
                Ok(p) => points[mine.corner] = p,
                Err(reason) => trace!(?reason, end = ?self.end, "kept unjoined corner"),
            }

            let cached = self
                .other_cache
                .and_then(|cache| cache.get(their.corner))
                .copied();
            if let Some(cached) = cached {
                let p = points[mine.corner];
                if (p.x - cached.x).abs() < self.snap && (p.y - cached.y).abs() < self.snap {
                    points[mine.corner] = cached;
                }
            }
        }
    }
}
