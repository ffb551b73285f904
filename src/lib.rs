//! Static wall-segment maps for mobile-robot simulation.
//!
//! A [`WallMap`] is loaded once from a list of wall segments and then answers
//! read-only geometric queries: bidirectional ray casts for simulated range
//! sensors, point-in-obstacle tests, wall-crossing tests for planner edges and
//! rejection sampling of free points.
//!
//! ```
//! use wall_map::{MapConfig, Vector2, WallMap};
//!
//! let map = WallMap::<f64>::from_json_str(
//!     r#"{"segments": [[[0, 0], [0, 2]]]}"#,
//!     MapConfig::default(),
//! )
//! .unwrap();
//!
//! let cast = map.cast_ray(Vector2::new(1.0, 1.0), std::f64::consts::PI);
//! assert!((cast.forward.distance - 1.0).abs() < 1e-9);
//! assert!(map.crosses_wall(Vector2::new(-1.0, 1.0), Vector2::new(1.0, 1.0)));
//! ```

pub mod error;
pub mod geometry;
pub mod map;
pub mod planning;

pub use error::{MapError, MapResult};
pub use geometry::{Pose, Segment, Vector2};
pub use map::{MapConfig, ParityConvention, RayCastResult, RayHit, WallMap};
