//! Geographic coordinate type and validation.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Side classification works on
//! offsets of a few metres around a node, where `f32` rounding at mid
//! latitudes is already in the same order of magnitude as the offset.

use crate::{CurbError, CurbResult};

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `true` if both components are finite and inside the WGS-84 ranges
    /// (`|lat| <= 90`, `|lon| <= 180`).
    #[inline]
    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && self.lat.abs() <= 90.0
            && self.lon.abs() <= 180.0
    }

    /// Return `self` if it is a usable coordinate, otherwise
    /// [`CurbError::InvalidCoordinate`].
    pub fn validated(self) -> CurbResult<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(CurbError::InvalidCoordinate(self))
        }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
