use crate::error::{ensure_finite, Result};

/// A baseboard running along one side of a wall.
///
/// Only the thickness widens the wall outline; height and color are carried
/// for the 3D and rendering collaborators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseboard {
    thickness: f64,
    height: f64,
    color: Option<u32>,
}

impl Baseboard {
    /// Creates a new baseboard.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` if a dimension is NaN or infinite.
    pub fn new(thickness: f64, height: f64, color: Option<u32>) -> Result<Self> {
        Ok(Self {
            thickness: ensure_finite("baseboard_thickness", thickness)?,
            height: ensure_finite("baseboard_height", height)?,
            color,
        })
    }

    /// Returns the thickness added to the wall side.
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Returns the height of the baseboard.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the RGB color of the baseboard, if any.
    #[must_use]
    pub fn color(&self) -> Option<u32> {
        self.color
    }
}
