//! Great-circle geometry for irregular lon/lat grids.
//!
//! The diagnostics core needs exactly one geometric primitive from the
//! outside world: a distance function `(lon1, lat1, lon2, lat2) -> km`
//! that is symmetric and consistent with a standard great-circle formula.
//! This crate provides it (haversine on a spherical Earth) together with
//! the two grid-spacing derivations the diagnostics use when the caller
//! does not supply `(dx, dy)` explicitly.

pub mod haversine;
pub mod spacing;

pub use haversine::{distance_km, EARTH_RADIUS_KM};
pub use spacing::{local_spacing_km, mean_spacing_km, GeodesyError, Result};
