mod length;

pub use hit_test::{ContainsPoint, IntersectsRectangle};
pub use length::WallLength;
