//! Storm-center coordinates.

use serde::{Deserialize, Serialize};

/// A tropical-cyclone center position in degrees.
///
/// Centers move between model times, so diagnostics take a fresh `Center`
/// on every call rather than storing one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Center {
    /// Longitude, degrees east.
    pub lon: f64,
    /// Latitude, degrees north.
    pub lat: f64,
}

impl Center {
    /// Create a center from longitude/latitude in degrees.
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl std::fmt::Display for Center {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}E, {:.3}N)", self.lon, self.lat)
    }
}
