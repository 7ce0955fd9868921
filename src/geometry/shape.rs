use crate::error::{ensure_finite, Result};
use crate::math::TOLERANCE;

/// Side of a wall when traversing it from start to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Shape of a wall's centerline between its two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WallShape {
    /// A straight segment.
    Straight,
    /// A circular arc subtending `extent` radians; positive sweeps counter-clockwise.
    Arc { extent: f64 },
}

impl WallShape {
    /// Builds a shape from an optional arc extent.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` if the extent is NaN or infinite.
    pub fn from_arc_extent(extent: Option<f64>) -> Result<Self> {
        Ok(match extent {
            Some(extent) => Self::Arc {
                extent: ensure_finite("arc_extent", extent)?,
            },
            None => Self::Straight,
        })
    }

    /// Returns the arc extent, or `None` for a straight wall.
    #[must_use]
    pub fn arc_extent(&self) -> Option<f64> {
        match self {
            Self::Straight => None,
            Self::Arc { extent } => Some(*extent),
        }
    }

    /// Returns the arc extent when it is large enough to bend the wall.
    #[must_use]
    pub fn effective_extent(&self) -> Option<f64> {
        self.arc_extent().filter(|e| e.abs() > TOLERANCE)
    }
}
