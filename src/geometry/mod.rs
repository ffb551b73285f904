pub mod pose;
pub mod segment;
pub mod vector2;

pub use pose::Pose;
pub use segment::{Crossing, Segment};
pub use vector2::{cross, Vector2};
