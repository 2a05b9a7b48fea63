use serde::{Deserialize, Serialize};

/// A WGS84 coordinate, longitude first to match the fixture `coords` arrays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl From<[f64; 2]> for LngLat {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self { lng, lat }
    }
}

/// Axis-aligned map viewport, inclusive on all four edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl Bounds {
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Builds bounds from southwest and northeast corners, the shape map
    /// libraries hand back from `getBounds()`.
    pub fn from_corners(south_west: LngLat, north_east: LngLat) -> Self {
        Self {
            west: south_west.lng,
            south: south_west.lat,
            east: north_east.lng,
            north: north_east.lat,
        }
    }

    pub fn contains(&self, point: LngLat) -> bool {
        point.lng >= self.west
            && point.lng <= self.east
            && point.lat >= self.south
            && point.lat <= self.north
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_bounds() -> Bounds {
        Bounds::from_corners(
            LngLat {
                lng: 100.0,
                lat: -5.0,
            },
            LngLat {
                lng: 110.0,
                lat: 5.0,
            },
        )
    }

    #[test]
    fn contains_interior_point() {
        assert!(test_bounds().contains(LngLat { lng: 105.0, lat: 0.0 }));
    }

    #[test]
    fn excludes_point_east_of_box() {
        assert!(!test_bounds().contains(LngLat { lng: 150.0, lat: 0.0 }));
    }

    #[test]
    fn edges_are_inclusive() {
        let bounds = test_bounds();

        assert!(bounds.contains(LngLat {
            lng: 100.0,
            lat: -5.0
        }));
        assert!(bounds.contains(LngLat {
            lng: 110.0,
            lat: 5.0
        }));
    }

    #[test]
    fn coords_array_converts_longitude_first() {
        let point = LngLat::from([106.8456, -6.2088]);

        assert_eq!(point.lng, 106.8456);
        assert_eq!(point.lat, -6.2088);
    }
}
