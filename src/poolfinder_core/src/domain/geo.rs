use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GeoError {
    #[error("Latitude must be within [-90, 90] and longitude within [-180, 180]")]
    OutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Result<Self, GeoError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(GeoError::OutOfRange);
        }
        Ok(Self { lat, lng })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    pub short_name: String,
    pub types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeocodeResult {
    pub coordinates: Coordinates,
    pub formatted_address: String,
    pub place_id: String,
    pub address_components: Vec<AddressComponent>,
}

/// Smallest axis-aligned box enclosing a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub northeast: Coordinates,
    pub southwest: Coordinates,
}

impl Bounds {
    pub fn enclosing(points: &[Coordinates]) -> Option<Self> {
        let first = points.first()?;
        let (mut north, mut south, mut east, mut west) = (first.lat, first.lat, first.lng, first.lng);

        for point in &points[1..] {
            north = north.max(point.lat);
            south = south.min(point.lat);
            east = east.max(point.lng);
            west = west.min(point.lng);
        }

        Some(Self {
            northeast: Coordinates { lat: north, lng: east },
            southwest: Coordinates { lat: south, lng: west },
        })
    }
}
