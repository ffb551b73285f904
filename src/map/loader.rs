//! Loading and saving wall maps in their JSON description format.
//!
//! The description is an object whose `segments` entry lists the walls. Each
//! wall is a pair of points and each point is a pair of coordinates in
//! metres:
//!
//! ```json
//! { "segments": [ [[0.0, 0.0], [0.0, 2.0]], [[0.0, 2.0], [3.0, 2.0]] ] }
//! ```

use crate::error::{MapError, MapResult};
use crate::geometry::{Segment, Vector2};
use crate::map::{MapConfig, WallMap};
use json::JsonValue;
use num_traits::Float;
use std::path::Path;

const SEGMENTS_KEY: &str = "segments";

impl<F: Float> WallMap<F> {
    /// Loads a map from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P, config: MapConfig<F>) -> MapResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        log::debug!("loading wall map from {}", path.display());
        Self::from_json_str(&text, config)
    }

    /// Parses a map from the text of a JSON description.
    pub fn from_json_str(text: &str, config: MapConfig<F>) -> MapResult<Self> {
        let data = json::parse(text)?;
        Self::from_json(&data, config)
    }

    /// Builds a map from a parsed JSON description.
    ///
    /// Returns `MapError::MalformedMapData` if the `segments` entry is missing
    /// or any wall does not decode to two 2D points, and
    /// `MapError::DegenerateSegment` for zero-length walls.
    pub fn from_json(data: &JsonValue, config: MapConfig<F>) -> MapResult<Self> {
        let segments = &data[SEGMENTS_KEY];
        if !segments.is_array() {
            return Err(MapError::malformed(format!(
                "expected '{SEGMENTS_KEY}' to be an array"
            )));
        }

        let walls = segments
            .members()
            .enumerate()
            .map(|(index, entry)| parse_wall(index, entry))
            .collect::<MapResult<Vec<_>>>()?;

        log::debug!(
            "loaded {} walls, world {:?} x {:?}",
            walls.len(),
            config.world_width.to_f64(),
            config.world_height.to_f64()
        );
        Self::new(walls, config)
    }

    /// Serialises the walls back into the JSON description format.
    pub fn to_json(&self) -> JsonValue {
        let segments = self
            .walls()
            .iter()
            .map(|wall| json::array![point_to_json(wall.p1()), point_to_json(wall.p2())])
            .collect();
        json::object! { "segments" => JsonValue::Array(segments) }
    }
}

fn parse_wall<F: Float>(index: usize, entry: &JsonValue) -> MapResult<Segment<F>> {
    if !entry.is_array() || entry.len() != 2 {
        return Err(MapError::malformed(format!(
            "wall {index} must be a pair of points"
        )));
    }
    let p1 = parse_point(index, &entry[0])?;
    let p2 = parse_point(index, &entry[1])?;
    Segment::new(p1, p2)
}

fn parse_point<F: Float>(index: usize, entry: &JsonValue) -> MapResult<Vector2<F>> {
    if !entry.is_array() || entry.len() != 2 {
        return Err(MapError::malformed(format!(
            "wall {index} has a point that is not an [x, y] pair"
        )));
    }
    let coordinate = |value: &JsonValue| {
        value
            .as_f64()
            .and_then(|v| F::from(v))
            .ok_or_else(|| MapError::malformed(format!("wall {index} has a non-numeric coordinate")))
    };
    Ok(Vector2::new(coordinate(&entry[0])?, coordinate(&entry[1])?))
}

fn point_to_json<F: Float>(point: &Vector2<F>) -> JsonValue {
    let x = point.x.to_f64().unwrap_or(f64::NAN);
    let y = point.y.to_f64().unwrap_or(f64::NAN);
    json::array![x, y]
}
