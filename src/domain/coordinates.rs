//! Geographic coordinates for fixture events
//!
//! Center points are validated against the sampling range; the derived
//! bounding box is not, since its edges may legitimately overhang it.

use crate::domain::constants::coordinates::BOUNDS_HALF_SPAN;
use nutype::nutype;
use serde::{Deserialize, Serialize};

/// Latitude of an event center, in degrees (-80.0 to 80.0)
#[nutype(
    validate(finite, greater_or_equal = -80.0, less_or_equal = 80.0),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        PartialOrd,
        Serialize,
        Deserialize,
        Display
    )
)]
pub struct Latitude(f64);

/// Longitude of an event center, in degrees (-170.0 to 170.0)
#[nutype(
    validate(finite, greater_or_equal = -170.0, less_or_equal = 170.0),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        PartialOrd,
        Serialize,
        Deserialize,
        Display
    )
)]
pub struct Longitude(f64);

/// Box around an event center, offset by a fixed half span on each axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl Bounds {
    pub fn around(lat: Latitude, lng: Longitude) -> Self {
        let lat = lat.into_inner();
        let lng = lng.into_inner();
        Self {
            north: lat + BOUNDS_HALF_SPAN,
            south: lat - BOUNDS_HALF_SPAN,
            east: lng + BOUNDS_HALF_SPAN,
            west: lng - BOUNDS_HALF_SPAN,
        }
    }
}

/// Event location: center point plus its bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: Latitude,
    pub lng: Longitude,
    pub bounds: Bounds,
}

impl Coordinates {
    pub fn new(lat: Latitude, lng: Longitude) -> Self {
        Self {
            lat,
            lng,
            bounds: Bounds::around(lat, lng),
        }
    }

    /// True when `bounds` is exactly the box derived from the center
    pub fn has_derived_bounds(&self) -> bool {
        self.bounds == Bounds::around(self.lat, self.lng)
    }
}
