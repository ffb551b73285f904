//! Bidirectional ray casting and simulated laser scans.
//!
//! A cast builds one segment of length `2 * ray_length` centered on the query
//! position, so a single pass over the walls yields the nearest hit in front
//! of the position and the nearest hit behind it.

use crate::geometry::{Pose, Segment, Vector2};
use crate::map::WallMap;
use num_traits::Float;

/// The nearest wall found on one half of a cast ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit<F: Float> {
    /// The intersection point, or `None` if no wall was found.
    pub point: Option<Vector2<F>>,
    /// Distance from the query position to `point`, or the ray length if no
    /// wall was found.
    pub distance: F,
    /// Index of the wall that was hit, if any.
    pub wall: Option<usize>,
}

impl<F: Float> RayHit<F> {
    /// Create a result indicating no hit.
    pub fn miss(ray_length: F) -> Self {
        Self {
            point: None,
            distance: ray_length,
            wall: None,
        }
    }

    pub fn is_hit(&self) -> bool {
        self.point.is_some()
    }

    // Strict comparison keeps the first wall found on equal distances.
    fn update(&mut self, wall: usize, point: Vector2<F>, distance: F) {
        if distance < self.distance {
            self.point = Some(point);
            self.distance = distance;
            self.wall = Some(wall);
        }
    }
}

/// Result of a bidirectional cast.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayCastResult<F: Float> {
    /// Nearest hit along the cast angle.
    pub forward: RayHit<F>,
    /// Nearest hit in the opposite direction.
    pub backward: RayHit<F>,
}

impl<F: Float> WallMap<F> {
    /// Casts a ray through `position` along `angle` (map frame, radians).
    ///
    /// Hits are found with closed-interval tests, so a ray touching a wall
    /// endpoint still registers. For each half the hit nearest to `position`
    /// is kept; when two walls are hit at the same distance the one listed
    /// first in the map wins.
    pub fn cast_ray(&self, position: Vector2<F>, angle: F) -> RayCastResult<F> {
        let ray_length = self.ray_length();
        let mut result = RayCastResult {
            forward: RayHit::miss(ray_length),
            backward: RayHit::miss(ray_length),
        };

        let ray = match Segment::through(position, angle, ray_length) {
            Ok(ray) => ray,
            Err(_) => return result,
        };
        let half = F::from(0.5).unwrap_or_else(F::zero);

        for (index, wall) in self.walls().iter().enumerate() {
            let crossing = match wall.crossing(&ray) {
                Some(crossing) if crossing.is_within() => crossing,
                _ => continue,
            };

            let point = wall.point_at(crossing.t);
            let distance = point.euclidean_distance(&position);

            // Past the midpoint of the ray means in front of the position
            if crossing.s >= half {
                result.forward.update(index, point, distance);
            } else {
                result.backward.update(index, point, distance);
            }
        }

        result
    }

    /// Casts a ray through the pose position at `relative_angle` from the pose
    /// heading.
    pub fn cast_ray_from_pose(&self, pose: &Pose<F>, relative_angle: F) -> RayCastResult<F> {
        self.cast_ray(pose.position(), pose.absolute_angle(relative_angle))
    }

    /// Simulates a laser scan of `beam_count` evenly spaced beams.
    ///
    /// Beam `i` points at `heading + i * 2π / beam_count`. The returned ranges
    /// are ordered by beam index; beams that hit nothing report the ray length.
    /// With an even beam count each cast serves two opposite beams.
    pub fn scan(&self, pose: &Pose<F>, beam_count: usize) -> Vec<F> {
        if beam_count == 0 {
            return Vec::new();
        }
        let Some(step) = F::from(2.0 * std::f64::consts::PI / beam_count as f64) else {
            return Vec::new();
        };
        let beam_angle = |i: usize| F::from(i).map_or(F::zero(), |i| i * step);

        let mut ranges = vec![self.ray_length(); beam_count];
        if beam_count % 2 == 0 {
            let half = beam_count / 2;
            for i in 0..half {
                let cast = self.cast_ray_from_pose(pose, beam_angle(i));
                ranges[i] = cast.forward.distance;
                ranges[i + half] = cast.backward.distance;
            }
        } else {
            for (i, range) in ranges.iter_mut().enumerate() {
                *range = self.cast_ray_from_pose(pose, beam_angle(i)).forward.distance;
            }
        }
        ranges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::MapConfig;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn wall(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment<f64> {
        Segment::new(Vector2::new(x1, y1), Vector2::new(x2, y2)).unwrap()
    }

    fn map(walls: Vec<Segment<f64>>) -> WallMap<f64> {
        WallMap::new(walls, MapConfig::default()).unwrap()
    }

    #[test]
    fn test_empty_map_misses_both_ways() {
        let map = map(Vec::new());

        let result = map.cast_ray(Vector2::new(1.0, 1.0), 0.7);

        assert_eq!(result.forward, RayHit::miss(5.32));
        assert_eq!(result.backward, RayHit::miss(5.32));
        assert!(!result.forward.is_hit());
    }

    #[test]
    fn test_wall_in_front() {
        let map = map(vec![wall(0.0, 0.0, 0.0, 2.0)]);

        let result = map.cast_ray(Vector2::new(1.0, 1.0), PI);

        let point = result.forward.point.unwrap();
        assert_relative_eq!(point.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(point.y, 1.0, epsilon = 1e-9);
        assert_relative_eq!(result.forward.distance, 1.0, epsilon = 1e-9);
        assert_eq!(result.backward, RayHit::miss(5.32));
    }

    #[test]
    fn test_wall_behind() {
        let map = map(vec![wall(0.0, 0.0, 0.0, 2.0)]);

        let result = map.cast_ray(Vector2::new(1.0, 1.0), 0.0);

        assert!(!result.forward.is_hit());
        assert_relative_eq!(result.backward.distance, 1.0, epsilon = 1e-9);
        assert_relative_eq!(result.backward.point.unwrap().y, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_nearest_wall_wins_per_half() {
        let map = map(vec![
            wall(3.0, 0.0, 3.0, 2.0),
            wall(2.0, 0.0, 2.0, 2.0),
            wall(-1.0, 0.0, -1.0, 2.0),
            wall(0.5, 0.0, 0.5, 2.0),
        ]);

        let result = map.cast_ray(Vector2::new(1.0, 1.0), 0.0);

        assert_relative_eq!(result.forward.distance, 1.0, epsilon = 1e-9);
        assert_eq!(result.forward.wall, Some(1));
        assert_relative_eq!(result.backward.distance, 0.5, epsilon = 1e-9);
        assert_eq!(result.backward.wall, Some(3));
    }

    #[test]
    fn test_grazing_endpoint_counts_as_hit() {
        // Ray along y = 2 touches the top endpoint of the wall
        let map = map(vec![wall(0.0, 0.0, 0.0, 2.0)]);

        let result = map.cast_ray(Vector2::new(-1.0, 2.0), 0.0);

        assert!(result.forward.is_hit());
        assert_eq!(result.forward.point, Some(Vector2::new(0.0, 2.0)));
        assert_relative_eq!(result.forward.distance, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_wall_beyond_ray_length_is_missed() {
        let map = map(vec![wall(10.0, -1.0, 10.0, 1.0)]);

        let result = map.cast_ray(Vector2::zero(), 0.0);

        assert_eq!(result.forward, RayHit::miss(5.32));
    }

    #[test]
    fn test_equal_distances_keep_first_wall() {
        // Two walls meeting at (0, 1); the ray hits the shared vertex
        let map = map(vec![wall(0.0, 0.0, 0.0, 1.0), wall(0.0, 1.0, 0.0, 2.0)]);

        let result = map.cast_ray(Vector2::new(-1.0, 1.0), 0.0);

        assert_eq!(result.forward.wall, Some(0));
        assert_eq!(result.forward.point, Some(Vector2::new(0.0, 1.0)));
        assert_relative_eq!(result.forward.distance, 1.0);
    }

    #[test]
    fn test_cast_from_pose_adds_heading() {
        let map = map(vec![wall(-1.0, 3.0, 3.0, 3.0)]);
        let pose = Pose::new(1.0, 1.0, FRAC_PI_2);

        let result = map.cast_ray_from_pose(&pose, 0.0);

        assert_relative_eq!(result.forward.distance, 2.0, epsilon = 1e-9);
        assert!(!result.backward.is_hit());
    }

    #[test]
    fn test_scan_in_square_room() {
        let map = map(vec![
            wall(0.0, 0.0, 4.0, 0.0),
            wall(4.0, 0.0, 4.0, 3.0),
            wall(4.0, 3.0, 0.0, 3.0),
            wall(0.0, 3.0, 0.0, 0.0),
        ]);
        let pose = Pose::new(1.0, 1.0, 0.0);

        let ranges = map.scan(&pose, 4);

        assert_eq!(ranges.len(), 4);
        assert_relative_eq!(ranges[0], 3.0, epsilon = 1e-9); // east
        assert_relative_eq!(ranges[1], 2.0, epsilon = 1e-9); // north
        assert_relative_eq!(ranges[2], 1.0, epsilon = 1e-9); // west
        assert_relative_eq!(ranges[3], 1.0, epsilon = 1e-9); // south
    }

    #[test]
    fn test_scan_odd_beam_count() {
        let map = map(vec![wall(2.0, -5.0, 2.0, 5.0)]);
        let pose = Pose::new(0.0, 0.0, 0.0);

        let ranges = map.scan(&pose, 3);

        assert_eq!(ranges.len(), 3);
        assert_relative_eq!(ranges[0], 2.0, epsilon = 1e-9);
        // 120 and 240 degrees point away from the wall
        assert_relative_eq!(ranges[1], 5.32);
        assert_relative_eq!(ranges[2], 5.32);
        assert!(map.scan(&pose, 0).is_empty());
    }
}
