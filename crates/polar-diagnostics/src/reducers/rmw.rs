//! Radius of maximum azimuthal-mean wind.

use crate::config::{RmwOptions, SamplerOptions, BOUNDARY_SHRINK_CELLS};
use crate::error::{DiagnosticsError, Result};
use crate::reducers::azimuthal::circular_avg;
use geodesy::distance_km;
use tc_common::{Center, Grid2D, GridCoords};
use tracing::warn;

/// Largest search radius the domain safely supports from this center.
///
/// The domain is shrunk by [`BOUNDARY_SHRINK_CELLS`] on every edge, then
/// the maximum east-west and north-south great-circle extents from the
/// center are measured; the smaller of the two bounds the search. A
/// `maxdist` beyond this would push circles into (or past) the boundary
/// cells.
pub fn safe_search_radius(coords: &GridCoords, center: Center) -> Result<f64> {
    let (ny, nx) = coords.shape();
    let n = BOUNDARY_SHRINK_CELLS;
    if ny <= 2 * n || nx <= 2 * n {
        return Err(DiagnosticsError::InvalidArgument(format!(
            "grid {:?} is too small for an RMW search ({} boundary cells are excluded per edge)",
            (ny, nx),
            n
        )));
    }

    let lon = coords.lon();
    let lat = coords.lat();

    let mut max_x: f64 = 0.0;
    let mut max_y: f64 = 0.0;
    for row in n..ny - n {
        for col in n..nx - n {
            let cell_lon = lon.at(row, col);
            let cell_lat = lat.at(row, col);
            max_x = max_x.max(distance_km(center.lon, cell_lat, cell_lon, cell_lat));
            max_y = max_y.max(distance_km(cell_lon, center.lat, cell_lon, cell_lat));
        }
    }

    Ok(max_x.min(max_y))
}

/// Find the radius of maximum azimuthal-mean wind speed, in km.
///
/// Scans radii `0, dr, 2·dr, … < maxdist` and returns the radius whose
/// circular-average wind peaks (first occurrence on ties). An oversized
/// `maxdist` is a recoverable request: it is clamped to
/// [`safe_search_radius`] with a warning, and the scan proceeds.
pub fn rmw(
    coords: &GridCoords,
    wind_speed: &Grid2D,
    center: Center,
    options: &RmwOptions,
) -> Result<f64> {
    coords.check_field(wind_speed)?;

    let bound = safe_search_radius(coords, center)?;
    let maxdist = match options.max_distance_km {
        None => bound,
        Some(requested) if requested > bound => {
            warn!(
                requested,
                clamped = bound,
                "maximum search radius exceeds the safe domain extent; clamped"
            );
            bound
        }
        Some(requested) => requested,
    };

    let (dx, dy) = match options.spacing_km {
        Some(s) => s,
        None => geodesy::mean_spacing_km(coords)?,
    };

    let dr = options.radius_step_km.unwrap_or_else(|| dx.max(dy));
    if !(dr > 0.0) {
        return Err(DiagnosticsError::InvalidArgument(format!(
            "radius step must be positive, got {}",
            dr
        )));
    }

    let mut radii = Vec::new();
    let mut r = 0.0;
    while r < maxdist {
        radii.push(r);
        r += dr;
    }
    if radii.is_empty() {
        return Err(DiagnosticsError::InvalidArgument(format!(
            "empty radius scan: maxdist = {}, dr = {}",
            maxdist, dr
        )));
    }

    let sampler_options = SamplerOptions {
        spacing_km: Some((dx, dy)),
        ..Default::default()
    };
    let mean_wind = circular_avg(coords, wind_speed, center, &radii, &sampler_options)?;

    // First occurrence of the maximum; NaN rings never win.
    let mut best_idx = 0;
    let mut best = f64::NEG_INFINITY;
    for (idx, &w) in mean_wind.iter().enumerate() {
        if w > best {
            best = w;
            best_idx = idx;
        }
    }

    Ok(radii[best_idx])
}
