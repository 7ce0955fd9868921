use std::cell::OnceCell;

use crate::error::{ensure_finite, Result};
use crate::geometry::{Baseboard, Side, WallShape};
use crate::math::arc_2d::arc_circle_center;
use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a wall in the wall store.
    pub struct WallId;
}

/// One of the two ends of a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallEnd {
    Start,
    End,
}

/// Memoized outlines of a wall.
///
/// Index `0` holds the outline without baseboards, index `1` the outline
/// including them.
#[derive(Debug, Clone, Default)]
pub(crate) struct WallCache {
    arc_circle_center: OnceCell<Option<Point2>>,
    unjoined: [OnceCell<Vec<Point2>>; 2],
    joined: [OnceCell<Vec<Point2>>; 2],
}

impl WallCache {
    pub(crate) fn unjoined(&self, include_baseboards: bool) -> &OnceCell<Vec<Point2>> {
        &self.unjoined[usize::from(include_baseboards)]
    }

    pub(crate) fn joined(&self, include_baseboards: bool) -> &OnceCell<Vec<Point2>> {
        &self.joined[usize::from(include_baseboards)]
    }

    /// Drops everything derived from the wall's own geometry.
    pub(crate) fn clear(&mut self) {
        self.arc_circle_center.take();
        for cell in &mut self.unjoined {
            cell.take();
        }
        self.clear_joined();
    }

    /// Drops the joined outlines only; they also depend on the neighbors.
    pub(crate) fn clear_joined(&mut self) {
        for cell in &mut self.joined {
            cell.take();
        }
    }
}

/// Data associated with a wall.
///
/// Geometry is changed through [`WallStore`](super::WallStore) so that cached
/// outlines of the wall and of its joined neighbors stay consistent.
#[derive(Debug, Clone)]
pub struct WallData {
    pub(crate) start: Point2,
    pub(crate) end: Point2,
    pub(crate) thickness: f64,
    pub(crate) shape: WallShape,
    pub(crate) height: Option<f64>,
    pub(crate) height_at_end: Option<f64>,
    pub(crate) left_baseboard: Option<Baseboard>,
    pub(crate) right_baseboard: Option<Baseboard>,
    pub(crate) left_side_color: Option<u32>,
    pub(crate) right_side_color: Option<u32>,
    pub(crate) top_color: Option<u32>,
    pub(crate) wall_at_start: Option<WallId>,
    pub(crate) wall_at_end: Option<WallId>,
    pub(crate) cache: WallCache,
}

impl WallData {
    /// Creates a straight wall from `start` to `end` with no joins.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` if a coordinate or the thickness is
    /// NaN or infinite.
    pub fn new(start: Point2, end: Point2, thickness: f64) -> Result<Self> {
        Ok(Self {
            start: finite_point("start", start)?,
            end: finite_point("end", end)?,
            thickness: ensure_finite("thickness", thickness)?,
            shape: WallShape::Straight,
            height: None,
            height_at_end: None,
            left_baseboard: None,
            right_baseboard: None,
            left_side_color: None,
            right_side_color: None,
            top_color: None,
            wall_at_start: None,
            wall_at_end: None,
            cache: WallCache::default(),
        })
    }

    /// Bends the wall into an arc of the given extent, or straightens it with `None`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` if the extent is NaN or infinite.
    pub fn with_arc_extent(mut self, extent: Option<f64>) -> Result<Self> {
        self.shape = WallShape::from_arc_extent(extent)?;
        self.cache.clear();
        Ok(self)
    }

    /// Sets the baseboard on one side.
    #[must_use]
    pub fn with_baseboard(mut self, side: Side, baseboard: Option<Baseboard>) -> Self {
        *self.baseboard_slot(side) = baseboard;
        self.cache.clear();
        self
    }

    /// Sets the height at start and, when different, at end.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` if a height is NaN or infinite.
    pub fn with_heights(mut self, height: Option<f64>, height_at_end: Option<f64>) -> Result<Self> {
        self.height = finite_opt("height", height)?;
        self.height_at_end = finite_opt("height_at_end", height_at_end)?;
        Ok(self)
    }

    /// Sets the color of one side.
    #[must_use]
    pub fn with_side_color(mut self, side: Side, color: Option<u32>) -> Self {
        match side {
            Side::Left => self.left_side_color = color,
            Side::Right => self.right_side_color = color,
        }
        self
    }

    /// Returns the start point of the centerline.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    /// Returns the end point of the centerline.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.end
    }

    /// Returns the given end point.
    #[must_use]
    pub fn point(&self, end: WallEnd) -> Point2 {
        match end {
            WallEnd::Start => self.start,
            WallEnd::End => self.end,
        }
    }

    /// Returns the thickness of the wall body.
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Returns the centerline shape.
    #[must_use]
    pub fn shape(&self) -> WallShape {
        self.shape
    }

    /// Returns the arc extent, or `None` for a straight wall.
    #[must_use]
    pub fn arc_extent(&self) -> Option<f64> {
        self.shape.arc_extent()
    }

    #[must_use]
    pub fn height(&self) -> Option<f64> {
        self.height
    }

    #[must_use]
    pub fn height_at_end(&self) -> Option<f64> {
        self.height_at_end
    }

    /// Returns `true` if the wall top slopes between start and end.
    #[must_use]
    pub fn is_trapezoidal(&self) -> bool {
        match (self.height, self.height_at_end) {
            (Some(start), Some(end)) => (start - end).abs() > f64::EPSILON,
            _ => false,
        }
    }

    /// Returns the baseboard on `side`, if any.
    #[must_use]
    pub fn baseboard(&self, side: Side) -> Option<&Baseboard> {
        match side {
            Side::Left => self.left_baseboard.as_ref(),
            Side::Right => self.right_baseboard.as_ref(),
        }
    }

    /// Returns the color of `side`, if any.
    #[must_use]
    pub fn side_color(&self, side: Side) -> Option<u32> {
        match side {
            Side::Left => self.left_side_color,
            Side::Right => self.right_side_color,
        }
    }

    #[must_use]
    pub fn top_color(&self) -> Option<u32> {
        self.top_color
    }

    /// Returns the wall declared as joined at the start point.
    #[must_use]
    pub fn wall_at_start(&self) -> Option<WallId> {
        self.wall_at_start
    }

    /// Returns the wall declared as joined at the end point.
    #[must_use]
    pub fn wall_at_end(&self) -> Option<WallId> {
        self.wall_at_end
    }

    /// Returns the wall declared as joined at `end`.
    #[must_use]
    pub fn joined_wall(&self, end: WallEnd) -> Option<WallId> {
        match end {
            WallEnd::Start => self.wall_at_start,
            WallEnd::End => self.wall_at_end,
        }
    }

    /// Distance from the centerline to the outline on `side`.
    #[must_use]
    pub fn side_offset(&self, side: Side, include_baseboards: bool) -> f64 {
        let baseboard = if include_baseboards {
            self.baseboard(side).map_or(0.0, Baseboard::thickness)
        } else {
            0.0
        };
        self.thickness / 2.0 + baseboard
    }

    /// Returns the center of the circle carrying an arc wall.
    ///
    /// `None` for straight walls, negligible extents and coincident endpoints.
    #[must_use]
    pub fn arc_circle_center(&self) -> Option<Point2> {
        *self.cache.arc_circle_center.get_or_init(|| {
            self.shape
                .effective_extent()
                .and_then(|extent| arc_circle_center(&self.start, &self.end, extent))
        })
    }

    /// Returns `true` if the joined outline is currently memoized.
    #[must_use]
    pub fn has_cached_points(&self, include_baseboards: bool) -> bool {
        self.cache.joined(include_baseboards).get().is_some()
    }

    /// Returns the memoized joined outline, if any.
    #[must_use]
    pub fn cached_points(&self, include_baseboards: bool) -> Option<&[Point2]> {
        self.cache.joined(include_baseboards).get().map(Vec::as_slice)
    }

    /// Returns `true` if `point` is within `margin` of the start point.
    #[must_use]
    pub fn contains_start_at(&self, point: &Point2, margin: f64) -> bool {
        (self.start - point).norm_squared() <= margin * margin
    }

    /// Returns `true` if `point` is within `margin` of the end point.
    #[must_use]
    pub fn contains_end_at(&self, point: &Point2, margin: f64) -> bool {
        (self.end - point).norm_squared() <= margin * margin
    }

    pub(crate) fn baseboard_slot(&mut self, side: Side) -> &mut Option<Baseboard> {
        match side {
            Side::Left => &mut self.left_baseboard,
            Side::Right => &mut self.right_baseboard,
        }
    }

    pub(crate) fn joined_slot(&mut self, end: WallEnd) -> &mut Option<WallId> {
        match end {
            WallEnd::Start => &mut self.wall_at_start,
            WallEnd::End => &mut self.wall_at_end,
        }
    }
}

pub(crate) fn finite_point(name: &'static str, p: Point2) -> Result<Point2> {
    ensure_finite(name, p.x)?;
    ensure_finite(name, p.y)?;
    Ok(p)
}

pub(crate) fn finite_opt(name: &'static str, value: Option<f64>) -> Result<Option<f64>> {
    value.map(|v| ensure_finite(name, v)).transpose().map_err(Into::into)
}
