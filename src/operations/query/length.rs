use crate::error::Result;
use crate::topology::{WallId, WallStore};

/// Computes the length of a wall along its centerline.
pub struct WallLength {
    wall: WallId,
}

impl WallLength {
    /// Creates a new `WallLength` query.
    #[must_use]
    pub fn new(wall: WallId) -> Self {
        Self { wall }
    }

    /// Executes the query, returning the wall length.
    ///
    /// For a straight wall, this is the distance between its end points.
    /// For an arc wall, this is `radius * |extent|`.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is not found.
    pub fn execute(&self, store: &WallStore) -> Result<f64> {
        let wall = store.wall(self.wall)?;
        let chord = (wall.end() - wall.start()).norm();
        match (wall.shape().effective_extent(), wall.arc_circle_center()) {
            (Some(extent), Some(center)) => Ok((wall.start() - center).norm() * extent.abs()),
            _ => Ok(chord),
        }
    }
}
