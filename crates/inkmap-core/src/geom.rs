//! Map-degree coordinate space.
//!
//! Anchor coordinates and cluster placements live in the same unit as the
//! anchor table: unprojected map degrees (longitude along +x, latitude along
//! +y with north pointing to negative offsets in the placement directions).

/// Unit tag for map-degree coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapUnit;

pub type MapPoint = euclid::Point2D<f64, MapUnit>;
pub type MapVector = euclid::Vector2D<f64, MapUnit>;

pub fn map_point(lon: f64, lat: f64) -> MapPoint {
    euclid::point2(lon, lat)
}

pub fn map_vector(dx: f64, dy: f64) -> MapVector {
    euclid::vec2(dx, dy)
}

/// Euclidean distance between two map positions, in degrees.
pub fn distance(a: MapPoint, b: MapPoint) -> f64 {
    (a - b).length()
}
