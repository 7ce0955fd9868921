pub mod wall;

pub use wall::{WallData, WallEnd, WallId};

use slotmap::{SecondaryMap, SlotMap};
use tracing::debug;

use crate::error::{ensure_finite, Result, TopologyError};
use crate::geometry::{Baseboard, Side, WallShape};
use crate::math::{Point2, Vector2};
use crate::operations::outline::{JoinedOutline, OutlineParams, UnjoinedOutline};

use wall::{finite_opt, finite_point};

/// Central arena that owns all walls of a plan.
///
/// Walls reference their joined neighbors via [`WallId`]s (generational
/// indices), so joins never own the wall they point at and a removed wall
/// simply stops resolving.
///
/// Every geometry mutator clears the wall's own cached outlines and the
/// joined outlines of the walls at its start and end. Outlines are recomputed
/// lazily by [`WallStore::points`].
#[derive(Debug, Default)]
pub struct WallStore {
    walls: SlotMap<WallId, WallData>,
    params: OutlineParams,
}

impl WallStore {
    /// Creates a new, empty wall store with default outline parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new, empty wall store with the given outline parameters.
    #[must_use]
    pub fn with_params(params: OutlineParams) -> Self {
        Self {
            walls: SlotMap::with_key(),
            params,
        }
    }

    /// Returns the outline parameters.
    #[must_use]
    pub fn params(&self) -> &OutlineParams {
        &self.params
    }

    /// Replaces the outline parameters and drops every cached outline.
    pub fn set_params(&mut self, params: OutlineParams) {
        self.params = params;
        for wall in self.walls.values_mut() {
            wall.cache.clear();
        }
        debug!(walls = self.walls.len(), "outline parameters changed, caches cleared");
    }

    // --- Wall lifecycle ---

    /// Inserts a wall and returns its ID.
    ///
    /// Joins are established afterwards with [`set_wall_at_start`](Self::set_wall_at_start)
    /// and [`set_wall_at_end`](Self::set_wall_at_end).
    pub fn add_wall(&mut self, mut data: WallData) -> WallId {
        data.wall_at_start = None;
        data.wall_at_end = None;
        data.cache.clear();
        self.walls.insert(data)
    }

    /// Removes a wall after detaching every wall joined to it.
    ///
    /// The returned data has no joins and no cached outlines.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is not in the store.
    pub fn remove_wall(&mut self, id: WallId) -> Result<WallData> {
        self.wall(id)?;
        let referencing: Vec<(WallId, WallEnd)> = self
            .walls
            .iter()
            .filter(|(other, _)| *other != id)
            .flat_map(|(other, data)| {
                [WallEnd::Start, WallEnd::End]
                    .into_iter()
                    .filter(move |&end| data.joined_wall(end) == Some(id))
                    .map(move |end| (other, end))
            })
            .collect();
        for (other, end) in referencing {
            self.set_join(other, end, None, false)?;
        }
        self.invalidate(id);

        let mut data = self
            .walls
            .remove(id)
            .ok_or_else(|| TopologyError::EntityNotFound("wall".into()))?;
        data.wall_at_start = None;
        data.wall_at_end = None;
        data.cache.clear();
        debug!(?id, "wall removed");
        Ok(data)
    }

    /// Copies the given walls.
    ///
    /// Joins between copied walls are carried over to the copies; joins to
    /// walls outside `ids` are dropped. Returns the new IDs in input order,
    /// skipping repeated IDs.
    ///
    /// # Errors
    ///
    /// Returns an error if one of the walls is not in the store.
    pub fn duplicate(&mut self, ids: &[WallId]) -> Result<Vec<WallId>> {
        let mut copies: SecondaryMap<WallId, WallId> = SecondaryMap::new();
        let mut order = Vec::with_capacity(ids.len());
        for &id in ids {
            if copies.contains_key(id) {
                continue;
            }
            let data = self.wall(id)?.clone();
            let copy = self.add_wall(data);
            copies.insert(id, copy);
            order.push(id);
        }
        for &id in &order {
            let original = self.wall(id)?;
            let at_start = original.wall_at_start.and_then(|w| copies.get(w).copied());
            let at_end = original.wall_at_end.and_then(|w| copies.get(w).copied());
            let copy = self.wall_mut(copies[id])?;
            copy.wall_at_start = at_start;
            copy.wall_at_end = at_end;
        }
        Ok(order.iter().map(|&id| copies[id]).collect())
    }

    /// Returns a reference to the wall data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn wall(&self, id: WallId) -> Result<&WallData> {
        self.walls
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("wall".into()).into())
    }

    fn wall_mut(&mut self, id: WallId) -> Result<&mut WallData> {
        self.walls
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("wall".into()).into())
    }

    /// Iterates over all walls.
    pub fn walls(&self) -> impl Iterator<Item = (WallId, &WallData)> {
        self.walls.iter()
    }

    /// Returns the number of walls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    /// Returns `true` if the store holds no wall.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    // --- Geometry mutators ---

    /// Moves the start point of a wall.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is missing or the point is not finite.
    pub fn set_start_point(&mut self, id: WallId, point: Point2) -> Result<()> {
        let point = finite_point("start", point)?;
        self.mutate_geometry(id, |w| w.start = point)
    }

    /// Moves the end point of a wall.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is missing or the point is not finite.
    pub fn set_end_point(&mut self, id: WallId, point: Point2) -> Result<()> {
        let point = finite_point("end", point)?;
        self.mutate_geometry(id, |w| w.end = point)
    }

    /// Translates both end points of a wall.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is missing or the offset is not finite.
    pub fn move_wall(&mut self, id: WallId, dx: f64, dy: f64) -> Result<()> {
        let offset = Vector2::new(ensure_finite("dx", dx)?, ensure_finite("dy", dy)?);
        self.mutate_geometry(id, |w| {
            w.start += offset;
            w.end += offset;
        })
    }

    /// Changes the thickness of a wall.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is missing or the thickness is not finite.
    pub fn set_thickness(&mut self, id: WallId, thickness: f64) -> Result<()> {
        let thickness = ensure_finite("thickness", thickness)?;
        self.mutate_geometry(id, |w| w.thickness = thickness)
    }

    /// Bends a wall into an arc, or straightens it with `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is missing or the extent is not finite.
    pub fn set_arc_extent(&mut self, id: WallId, extent: Option<f64>) -> Result<()> {
        let shape = WallShape::from_arc_extent(extent)?;
        self.mutate_geometry(id, |w| w.shape = shape)
    }

    /// Sets or removes the baseboard on one side of a wall.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is missing.
    pub fn set_baseboard(&mut self, id: WallId, side: Side, baseboard: Option<Baseboard>) -> Result<()> {
        self.mutate_geometry(id, |w| *w.baseboard_slot(side) = baseboard)
    }

    // --- Descriptive attributes (no effect on outlines) ---

    /// Sets the height at the start of a wall.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is missing or the height is not finite.
    pub fn set_height(&mut self, id: WallId, height: Option<f64>) -> Result<()> {
        let height = finite_opt("height", height)?;
        self.wall_mut(id)?.height = height;
        Ok(())
    }

    /// Sets the height at the end of a wall; `None` means same as start.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is missing or the height is not finite.
    pub fn set_height_at_end(&mut self, id: WallId, height: Option<f64>) -> Result<()> {
        let height = finite_opt("height_at_end", height)?;
        self.wall_mut(id)?.height_at_end = height;
        Ok(())
    }

    /// Sets the color of one side of a wall.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is missing.
    pub fn set_side_color(&mut self, id: WallId, side: Side, color: Option<u32>) -> Result<()> {
        let wall = self.wall_mut(id)?;
        match side {
            Side::Left => wall.left_side_color = color,
            Side::Right => wall.right_side_color = color,
        }
        Ok(())
    }

    /// Sets the color of the top of a wall.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is missing.
    pub fn set_top_color(&mut self, id: WallId, color: Option<u32>) -> Result<()> {
        self.wall_mut(id)?.top_color = color;
        Ok(())
    }

    // --- Joins ---

    /// Declares the wall joined at the start of `id`.
    ///
    /// The previously joined wall, if it referenced `id` back, is detached
    /// from it.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` or `wall_at_start` is not in the store.
    pub fn set_wall_at_start(&mut self, id: WallId, wall_at_start: Option<WallId>) -> Result<()> {
        self.set_join(id, WallEnd::Start, wall_at_start, true)
    }

    /// Declares the wall joined at the end of `id`.
    ///
    /// The previously joined wall, if it referenced `id` back, is detached
    /// from it.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` or `wall_at_end` is not in the store.
    pub fn set_wall_at_end(&mut self, id: WallId, wall_at_end: Option<WallId>) -> Result<()> {
        self.set_join(id, WallEnd::End, wall_at_end, true)
    }

    fn set_join(&mut self, id: WallId, end: WallEnd, target: Option<WallId>, detach_previous: bool) -> Result<()> {
        if let Some(target) = target {
            self.wall(target)?;
        }
        let previous = self.wall(id)?.joined_wall(end);
        if previous == target {
            return Ok(());
        }

        // Once for the neighbors being left, once for the new one.
        self.invalidate(id);
        *self.wall_mut(id)?.joined_slot(end) = target;
        self.invalidate(id);
        debug!(?id, ?end, ?previous, ?target, "wall join changed");

        if !detach_previous {
            return Ok(());
        }
        let Some(previous) = previous.filter(|&p| p != id) else {
            return Ok(());
        };
        let Ok(previous_data) = self.wall(previous) else {
            return Ok(());
        };
        let back = if previous_data.wall_at_start == Some(id) {
            Some(WallEnd::Start)
        } else if previous_data.wall_at_end == Some(id) {
            Some(WallEnd::End)
        } else {
            None
        };
        if let Some(back) = back {
            debug!(wall = ?previous, end = ?back, "detaching previously joined wall");
            self.set_join(previous, back, None, false)?;
        }
        Ok(())
    }

    // --- Outlines ---

    /// Returns the joined outline of a wall, computing it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is not in the store.
    pub fn points(&self, id: WallId, include_baseboards: bool) -> Result<&[Point2]> {
        let cell = self.wall(id)?.cache.joined(include_baseboards);
        if let Some(points) = cell.get() {
            return Ok(points.as_slice());
        }
        let points = JoinedOutline::new(id, include_baseboards).execute(self)?;
        Ok(cell.get_or_init(|| points).as_slice())
    }

    /// Returns the outline of a wall ignoring its joins, computing it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is not in the store.
    pub fn unjoined_points(&self, id: WallId, include_baseboards: bool) -> Result<&[Point2]> {
        let wall = self.wall(id)?;
        let points = wall.cache.unjoined(include_baseboards).get_or_init(|| {
            UnjoinedOutline::new(include_baseboards)
                .with_params(self.params)
                .execute(wall)
        });
        Ok(points.as_slice())
    }

    /// Returns the center of the circle carrying an arc wall.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is not in the store.
    pub fn arc_circle_center(&self, id: WallId) -> Result<Option<Point2>> {
        Ok(self.wall(id)?.arc_circle_center())
    }

    fn mutate_geometry(&mut self, id: WallId, change: impl FnOnce(&mut WallData)) -> Result<()> {
        change(self.wall_mut(id)?);
        self.invalidate(id);
        Ok(())
    }

    /// Clears the caches of `id` and the joined outlines of its two neighbors.
    fn invalidate(&mut self, id: WallId) {
        let Some(wall) = self.walls.get_mut(id) else {
            return;
        };
        wall.cache.clear();
        let neighbors = [wall.wall_at_start, wall.wall_at_end];
        for neighbor in neighbors.into_iter().flatten() {
            if let Some(other) = self.walls.get_mut(neighbor) {
                other.cache.clear_joined();
            }
        }
    }
}
