pub mod config;
pub mod loader;
pub mod ray_cast;
pub mod wall_map;

pub use config::{MapConfig, ParityConvention};
pub use ray_cast::{RayCastResult, RayHit};
pub use wall_map::WallMap;
