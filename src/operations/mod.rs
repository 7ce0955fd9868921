pub mod outline;
pub mod query;

pub use outline::{JoinedOutline, OutlineParams, UnjoinedOutline};
pub use query::{ContainsPoint, IntersectsRectangle, WallLength};
