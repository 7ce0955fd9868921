pub mod baseboard;
pub mod shape;

pub use baseboard::Baseboard;
pub use shape::{Side, WallShape};
