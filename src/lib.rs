//! Wall outline generation and junction resolution for 2D home plans.
//!
//! Walls live in a [`WallStore`] arena and reference the walls joined at
//! their ends by [`WallId`]. [`WallStore::points`] returns the joined outline
//! of a wall: its rectangle (or curved band for arc walls) with the corners
//! at each joined end moved onto the intersection of the neighboring sides.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod topology;

pub use error::{Result, WallplanError};
pub use geometry::{Baseboard, Side, WallShape};
pub use math::Point2;
pub use operations::OutlineParams;
pub use topology::{WallData, WallEnd, WallId, WallStore};
