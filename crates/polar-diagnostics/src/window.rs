//! Windowed sub-grid selection around a storm center.
//!
//! Triangulating the full model domain dominates the cost of circle
//! sampling, so the sampler first carves out a rectangular window just
//! large enough to contain every circle point for the largest requested
//! radius, plus a margin for non-uniform grid spacing.

use crate::config::WINDOW_MARGIN_CELLS;
use crate::error::{DiagnosticsError, Result};
use geodesy::distance_km;
use tc_common::{Center, Grid2D, GridCoords};
use tracing::debug;

/// A half-open rectangular index slice of the full grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub row_start: usize,
    pub row_end: usize,
    pub col_start: usize,
    pub col_end: usize,
}

impl Window {
    /// Rows spanned.
    pub fn nrows(&self) -> usize {
        self.row_end - self.row_start
    }

    /// Columns spanned.
    pub fn ncols(&self) -> usize {
        self.col_end - self.col_start
    }

    /// Cells spanned.
    pub fn len(&self) -> usize {
        self.nrows() * self.ncols()
    }

    /// Whether the window spans no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Crop a full-grid field to this window, row-major.
    pub fn extract(&self, field: &Grid2D) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.len());
        for row in self.row_start..self.row_end {
            for col in self.col_start..self.col_end {
                out.push(field.at(row, col));
            }
        }
        out
    }
}

/// Signed local Cartesian offsets of every grid cell from a center.
///
/// For each cell this computes the zonal and meridional great-circle
/// distances to the center and signs them by position: cells west of the
/// center get negative x, cells south of it negative y. The result is a
/// local tangent-plane coordinate system in km with the storm at the
/// origin — the space the circle sample points live in.
pub struct SignedOffsets {
    /// Zonal (east-west) offset in km, negative west of center.
    pub x: Grid2D,
    /// Meridional (north-south) offset in km, negative south of center.
    pub y: Grid2D,
    /// Total great-circle-composed distance in km, always non-negative.
    pub total: Grid2D,
}

/// Compute [`SignedOffsets`] for every cell of the grid.
pub fn signed_offsets(coords: &GridCoords, center: Center) -> Result<SignedOffsets> {
    let (ny, nx) = coords.shape();
    let lon = coords.lon();
    let lat = coords.lat();

    let mut xs = Vec::with_capacity(ny * nx);
    let mut ys = Vec::with_capacity(ny * nx);
    let mut totals = Vec::with_capacity(ny * nx);

    for row in 0..ny {
        for col in 0..nx {
            let cell_lon = lon.at(row, col);
            let cell_lat = lat.at(row, col);

            // Zonal distance measured along the cell's own latitude circle,
            // meridional distance along its own meridian.
            let mut dist_x = distance_km(center.lon, cell_lat, cell_lon, cell_lat);
            let mut dist_y = distance_km(cell_lon, center.lat, cell_lon, cell_lat);
            let total = (dist_x * dist_x + dist_y * dist_y).sqrt();

            if cell_lon < center.lon {
                dist_x = -dist_x;
            }
            if cell_lat < center.lat {
                dist_y = -dist_y;
            }

            xs.push(dist_x);
            ys.push(dist_y);
            totals.push(total);
        }
    }

    Ok(SignedOffsets {
        x: Grid2D::from_vec(xs, ny, nx)?,
        y: Grid2D::from_vec(ys, ny, nx)?,
        total: Grid2D::from_vec(totals, ny, nx)?,
    })
}

/// The window around a center plus the windowed sample-space coordinates.
pub struct WindowedGeometry {
    pub window: Window,
    /// Signed (x, y) offsets in km of each windowed cell, row-major —
    /// the source points handed to the triangulation.
    pub offsets: Vec<[f64; 2]>,
}

/// Select the sampling window for circles up to `max_radius_km`.
///
/// The window is centered on the grid cell nearest the storm center and
/// extends `max_radius / spacing` cells plus [`WINDOW_MARGIN_CELLS`] in
/// each direction, clamped to the domain. A window clipped by the domain
/// edge is allowed; circle points that consequently fall outside the
/// windowed hull surface as NaN in the interpolated rings.
pub fn select_window(
    coords: &GridCoords,
    center: Center,
    max_radius_km: f64,
    spacing_km: (f64, f64),
) -> Result<WindowedGeometry> {
    let (dx, dy) = spacing_km;
    if !(dx > 0.0) || !(dy > 0.0) {
        return Err(DiagnosticsError::InvalidArgument(format!(
            "grid spacing must be positive, got ({}, {})",
            dx, dy
        )));
    }
    if !(max_radius_km >= 0.0) {
        return Err(DiagnosticsError::InvalidArgument(format!(
            "maximum radius must be non-negative, got {}",
            max_radius_km
        )));
    }

    let offsets = signed_offsets(coords, center)?;
    let (ny, nx) = coords.shape();

    let half_cols = (max_radius_km / dx).floor() as usize + WINDOW_MARGIN_CELLS;
    let half_rows = (max_radius_km / dy).floor() as usize + WINDOW_MARGIN_CELLS;

    let (center_row, center_col) = offsets.total.argmin();
    let window = Window {
        row_start: center_row.saturating_sub(half_rows),
        row_end: (center_row + half_rows).min(ny),
        col_start: center_col.saturating_sub(half_cols),
        col_end: (center_col + half_cols).min(nx),
    };

    if window.len() < 3 {
        return Err(DiagnosticsError::InvalidArgument(format!(
            "sampling window {:?} is too small to triangulate",
            window
        )));
    }

    debug!(
        rows = window.nrows(),
        cols = window.ncols(),
        center_row,
        center_col,
        "sampling window selected"
    );

    let mut windowed = Vec::with_capacity(window.len());
    for row in window.row_start..window.row_end {
        for col in window.col_start..window.col_end {
            windowed.push([offsets.x.at(row, col), offsets.y.at(row, col)]);
        }
    }

    Ok(WindowedGeometry {
        window,
        offsets: windowed,
    })
}
