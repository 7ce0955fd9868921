use thiserror::Error;

/// Top-level error type for the wallplan crate.
#[derive(Debug, Error)]
pub enum WallplanError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Errors related to wall geometry input.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is not a finite number")]
    NonFinite { parameter: &'static str, value: f64 },
}

/// Errors related to the wall arena and its joins.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

/// Convenience type alias for results using [`WallplanError`].
pub type Result<T> = std::result::Result<T, WallplanError>;

/// Checks that a geometry input is finite.
///
/// # Errors
///
/// Returns `GeometryError::NonFinite` for NaN or infinite values.
pub fn ensure_finite(parameter: &'static str, value: f64) -> std::result::Result<f64, GeometryError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonFinite { parameter, value })
    }
}
