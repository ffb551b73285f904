use crate::error::{MapError, MapResult};
use crate::geometry::Vector2;
use num_traits::Float;

/// An oriented line segment from `p1` to `p2`.
///
/// The segment is stored in vector form: `p1` is the origin and
/// `direction = p2 - p1` gives both orientation and length. A point on the
/// segment is `p1 + t * direction` for `t` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<F: Float> {
    p1: Vector2<F>,
    p2: Vector2<F>,
    direction: Vector2<F>,
    perpendicular: Vector2<F>,
}

/// The parameters at which the infinite lines through two segments cross.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing<F: Float> {
    /// Position along the wall (0 at `p1`, 1 at `p2`).
    pub t: F,
    /// Position along the query segment (0 at `p1`, 1 at `p2`).
    pub s: F,
}

impl<F: Float> Crossing<F> {
    /// True if the crossing lies on both segments, endpoints included.
    pub fn is_within(&self) -> bool {
        let zero = F::zero();
        let one = F::one();
        zero <= self.t && self.t <= one && zero <= self.s && self.s <= one
    }

    /// True if the crossing lies strictly inside both segments.
    ///
    /// Touching an endpoint does not count, so a vertex shared by two walls is
    /// not counted twice.
    pub fn is_strictly_within(&self) -> bool {
        let zero = F::zero();
        let one = F::one();
        zero < self.t && self.t < one && zero < self.s && self.s < one
    }
}

impl<F: Float> Segment<F> {
    /// Creates a new segment from its two endpoints.
    ///
    /// Returns `MapError::DegenerateSegment` if the endpoints coincide or any
    /// coordinate is not finite.
    pub fn new(p1: Vector2<F>, p2: Vector2<F>) -> MapResult<Self> {
        if !p1.is_finite() || !p2.is_finite() || p1 == p2 {
            return Err(MapError::DegenerateSegment {
                x: p1.x.to_f64().unwrap_or(f64::NAN),
                y: p1.y.to_f64().unwrap_or(f64::NAN),
            });
        }
        let direction = p2 - p1;
        Ok(Self {
            p1,
            p2,
            direction,
            perpendicular: direction.rotate90(),
        })
    }

    /// Creates a segment of total length `2 * half_length` centered on `center`
    /// and oriented along `angle`.
    pub fn through(center: Vector2<F>, angle: F, half_length: F) -> MapResult<Self> {
        let offset = Vector2::from_angle(angle) * half_length;
        Self::new(center - offset, center + offset)
    }

    /// Creates a segment starting at `origin` heading along `angle` for `length`.
    pub fn from_origin(origin: Vector2<F>, angle: F, length: F) -> MapResult<Self> {
        Self::new(origin, origin + Vector2::from_angle(angle) * length)
    }

    pub fn p1(&self) -> &Vector2<F> {
        &self.p1
    }

    pub fn p2(&self) -> &Vector2<F> {
        &self.p2
    }

    pub fn direction(&self) -> &Vector2<F> {
        &self.direction
    }

    pub fn perpendicular(&self) -> &Vector2<F> {
        &self.perpendicular
    }

    pub fn length(&self) -> F {
        self.direction.norm()
    }

    /// Returns the point `p1 + t * direction`.
    pub fn point_at(&self, t: F) -> Vector2<F> {
        self.p1 + self.direction * t
    }

    /// Computes where the line through `query` crosses the line through `self`.
    ///
    /// Parameters:
    /// - `query`: The ray or query segment.
    ///
    /// Returns:
    /// The crossing parameters, `t` along `self` and `s` along `query`, or
    /// `None` when the segments are parallel. Collinear segments are treated
    /// as parallel even when they overlap.
    pub fn crossing(&self, query: &Segment<F>) -> Option<Crossing<F>> {
        let denom = self.direction.cross(&query.direction);
        if denom == F::zero() {
            return None;
        }

        // cross(b, a) == -cross(a, b), hence the negated denominator for s
        let t = (query.p1 - self.p1).cross(&query.direction) / denom;
        let s = (self.p1 - query.p1).cross(&self.direction) / -denom;
        Some(Crossing { t, s })
    }

    /// Returns true if `query` crosses `self` strictly inside both segments.
    pub fn strictly_crosses(&self, query: &Segment<F>) -> bool {
        self.crossing(query)
            .map_or(false, |crossing| crossing.is_strictly_within())
    }
}

impl<F: Float + std::fmt::Display> std::fmt::Display for Segment<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[[{}, {}], [{}, {}]]",
            self.p1.x, self.p1.y, self.p2.x, self.p2.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment<f64> {
        Segment::new(Vector2::new(x1, y1), Vector2::new(x2, y2)).unwrap()
    }

    #[test]
    fn test_cached_fields() {
        let s = segment(1.0, 1.0, 4.0, 5.0);

        assert_eq!(*s.direction(), Vector2::new(3.0, 4.0));
        assert_eq!(*s.perpendicular(), Vector2::new(-4.0, 3.0));
        assert_relative_eq!(s.length(), 5.0);
        assert_eq!(s.point_at(1.0), *s.p2());
    }

    #[test]
    fn test_degenerate_segment_rejected() {
        let p = Vector2::new(2.0, 3.0);
        let err = Segment::new(p, p).unwrap_err();
        assert!(matches!(err, MapError::DegenerateSegment { x, y } if x == 2.0 && y == 3.0));

        let nan = Vector2::new(f64::NAN, 0.0);
        assert!(Segment::new(nan, p).is_err());
    }

    #[test]
    fn test_crossing_satisfies_both_parametrisations() {
        let cases = [
            (segment(0.0, 0.0, 0.0, 2.0), segment(-1.0, 1.0, 1.0, 1.0)),
            (segment(0.0, 0.0, 4.0, 1.0), segment(1.0, -3.0, 2.5, 7.0)),
            (segment(-2.0, 5.0, 3.0, -1.0), segment(10.0, 10.0, 11.0, 12.0)),
        ];

        for (wall, query) in cases {
            let crossing = wall.crossing(&query).unwrap();
            let on_wall = wall.point_at(crossing.t);
            let on_query = query.point_at(crossing.s);
            assert_relative_eq!(on_wall.x, on_query.x, epsilon = 1e-9);
            assert_relative_eq!(on_wall.y, on_query.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_crossing_parameters_at_midpoints() {
        let wall = segment(0.0, 0.0, 0.0, 2.0);
        let query = segment(-1.0, 1.0, 1.0, 1.0);

        let crossing = wall.crossing(&query).unwrap();
        assert_relative_eq!(crossing.t, 0.5);
        assert_relative_eq!(crossing.s, 0.5);
        assert!(crossing.is_within());
        assert!(crossing.is_strictly_within());
    }

    #[test]
    fn test_parallel_segments_never_cross() {
        let wall = segment(0.0, 0.0, 2.0, 0.0);

        assert!(wall.crossing(&segment(0.0, 1.0, 2.0, 1.0)).is_none());
        assert!(wall.crossing(&segment(4.0, 3.0, -2.0, 3.0)).is_none());
        // Collinear and overlapping is still reported as no crossing
        assert!(wall.crossing(&segment(1.0, 0.0, 3.0, 0.0)).is_none());
        assert!(!wall.strictly_crosses(&segment(-1.0, 0.0, 5.0, 0.0)));
    }

    #[test]
    fn test_endpoint_touch_is_closed_but_not_strict() {
        let wall = segment(0.0, 0.0, 0.0, 2.0);
        // Query ends exactly on the wall
        let query = segment(-1.0, 1.0, 0.0, 1.0);

        let crossing = wall.crossing(&query).unwrap();
        assert!(crossing.is_within());
        assert!(!crossing.is_strictly_within());
        assert!(!wall.strictly_crosses(&query));
    }

    #[test]
    fn test_lines_crossing_outside_segments() {
        let wall = segment(0.0, 0.0, 0.0, 2.0);
        let query = segment(-1.0, 3.0, 1.0, 3.0);

        let crossing = wall.crossing(&query).unwrap();
        assert_relative_eq!(crossing.t, 1.5);
        assert!(!crossing.is_within());
    }

    #[test]
    fn test_through_is_centered() {
        let ray = Segment::through(Vector2::new(1.0, 1.0), 0.0, 3.0).unwrap();

        assert_eq!(*ray.p1(), Vector2::new(-2.0, 1.0));
        assert_eq!(*ray.p2(), Vector2::new(4.0, 1.0));
        assert_eq!(ray.point_at(0.5), Vector2::new(1.0, 1.0));
    }

    #[test]
    fn test_display() {
        let s = segment(0.0, 0.5, 2.0, 1.0);
        assert_eq!(s.to_string(), "[[0, 0.5], [2, 1]]");
    }
}
