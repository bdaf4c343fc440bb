//! Test data generators for creating synthetic vortex-like fields.
//!
//! These generators create predictable, verifiable data patterns with
//! known analytic structure that can be used across the test suite.

use tc_common::{Center, Grid2D, GridCoords};

/// Creates a uniform lon/lat grid with `step_deg` spacing.
///
/// Cell `(row, col)` sits at `(lon0 + col * step_deg, lat0 + row * step_deg)`,
/// so rows walk north and columns walk east.
///
/// # Arguments
///
/// * `ny` - Number of rows (latitude direction)
/// * `nx` - Number of columns (longitude direction)
/// * `lon0` - Longitude of the first column, degrees east
/// * `lat0` - Latitude of the first row, degrees north
/// * `step_deg` - Grid spacing in degrees
pub fn uniform_lonlat_grid(ny: usize, nx: usize, lon0: f64, lat0: f64, step_deg: f64) -> GridCoords {
    let lon = Grid2D::from_fn(ny, nx, |_, col| lon0 + col as f64 * step_deg)
        .expect("valid grid dimensions");
    let lat = Grid2D::from_fn(ny, nx, |row, _| lat0 + row as f64 * step_deg)
        .expect("valid grid dimensions");
    GridCoords::new(lon, lat).expect("matching shapes")
}

/// Creates a spatially constant field on the given grid.
pub fn constant_field(coords: &GridCoords, value: f64) -> Grid2D {
    let (ny, nx) = coords.shape();
    Grid2D::from_elem(ny, nx, value).expect("valid grid dimensions")
}

/// Creates a Gaussian-ring wind field: calm at the center, peaking at a
/// known radius, decaying outward.
///
/// The wind speed at distance `r` km from the center is
/// `max_wind * exp(-((r - peak_radius_km) / width_km)^2)`, which makes
/// the field perfectly axisymmetric with its azimuthal-mean maximum at
/// exactly `peak_radius_km`.
///
/// # Arguments
///
/// * `coords` - Grid coordinates
/// * `center` - Vortex center
/// * `peak_radius_km` - Radius of maximum wind of the synthetic vortex
/// * `width_km` - Gaussian e-folding width of the ring
/// * `max_wind` - Peak wind speed
pub fn gaussian_ring_wind(
    coords: &GridCoords,
    center: Center,
    peak_radius_km: f64,
    width_km: f64,
    max_wind: f64,
) -> Grid2D {
    let (ny, nx) = coords.shape();
    Grid2D::from_fn(ny, nx, |row, col| {
        let r = geodesy::distance_km(
            coords.lon().at(row, col),
            coords.lat().at(row, col),
            center.lon,
            center.lat,
        );
        max_wind * (-((r - peak_radius_km) / width_km).powi(2)).exp()
    })
    .expect("valid grid dimensions")
}

/// Creates a Gaussian-ring wind field with a wavenumber-1 azimuthal
/// perturbation of relative amplitude `asymmetry`.
///
/// With `asymmetry = 0` this reduces to [`gaussian_ring_wind`]; larger
/// values lower the axisymmetricity of the field in a controlled way.
pub fn asymmetric_ring_wind(
    coords: &GridCoords,
    center: Center,
    peak_radius_km: f64,
    width_km: f64,
    max_wind: f64,
    asymmetry: f64,
) -> Grid2D {
    let (ny, nx) = coords.shape();
    Grid2D::from_fn(ny, nx, |row, col| {
        let lon = coords.lon().at(row, col);
        let lat = coords.lat().at(row, col);
        let r = geodesy::distance_km(lon, lat, center.lon, center.lat);
        let azimuth = (lat - center.lat).atan2(lon - center.lon);
        let ring = max_wind * (-((r - peak_radius_km) / width_km).powi(2)).exp();
        ring * (1.0 + asymmetry * azimuth.cos())
    })
    .expect("valid grid dimensions")
}
