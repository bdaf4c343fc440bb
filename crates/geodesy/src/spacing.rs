//! Grid-spacing derivation from coordinate arrays.
//!
//! Two variants exist because the diagnostics inherited two conventions:
//! the circle sampler sizes its window from the spacing at one corner of
//! the grid, while the RMW search averages over every adjacent cell pair
//! to tolerate non-uniform grids.

use crate::haversine::distance_km;
use tc_common::GridCoords;
use thiserror::Error;

/// Errors raised while deriving grid spacing.
#[derive(Error, Debug)]
pub enum GeodesyError {
    /// Spacing needs at least two cells along each axis.
    #[error("grid must span at least 2x2 cells to derive spacing, got {0:?}")]
    GridTooSmall((usize, usize)),
}

/// Result type for geodesy operations.
pub type Result<T> = std::result::Result<T, GeodesyError>;

/// Grid spacing `(dx, dy)` in km from the first pair of adjacent cells.
///
/// `dx` is the distance between cells `(0, 0)` and `(0, 1)`, `dy` between
/// `(0, 0)` and `(1, 0)`. Cheap, and adequate when the grid is close to
/// uniform near the region of interest.
pub fn local_spacing_km(coords: &GridCoords) -> Result<(f64, f64)> {
    let (ny, nx) = coords.shape();
    if ny < 2 || nx < 2 {
        return Err(GeodesyError::GridTooSmall((ny, nx)));
    }

    let lon = coords.lon();
    let lat = coords.lat();
    let dx = distance_km(lon.at(0, 0), lat.at(0, 0), lon.at(0, 1), lat.at(0, 0));
    let dy = distance_km(lon.at(0, 0), lat.at(0, 0), lon.at(0, 0), lat.at(1, 0));
    Ok((dx, dy))
}

/// Grid spacing `(dx, dy)` in km averaged over all adjacent cell pairs.
///
/// More robust than [`local_spacing_km`] on stretched grids; used by the
/// RMW search to choose its radius step.
pub fn mean_spacing_km(coords: &GridCoords) -> Result<(f64, f64)> {
    let (ny, nx) = coords.shape();
    if ny < 2 || nx < 2 {
        return Err(GeodesyError::GridTooSmall((ny, nx)));
    }

    let lon = coords.lon();
    let lat = coords.lat();

    let mut dx_sum = 0.0;
    for row in 0..ny {
        for col in 0..nx - 1 {
            dx_sum += distance_km(
                lon.at(row, col + 1),
                lat.at(row, col + 1),
                lon.at(row, col),
                lat.at(row, col),
            );
        }
    }
    let dx = dx_sum / (ny * (nx - 1)) as f64;

    let mut dy_sum = 0.0;
    for row in 0..ny - 1 {
        for col in 0..nx {
            dy_sum += distance_km(
                lon.at(row + 1, col),
                lat.at(row + 1, col),
                lon.at(row, col),
                lat.at(row, col),
            );
        }
    }
    let dy = dy_sum / ((ny - 1) * nx) as f64;

    Ok((dx, dy))
}
