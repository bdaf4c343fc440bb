//! Configuration constants and per-operation option structs.

use crate::types::{CoordinateSystem, Integration};
use serde::{Deserialize, Serialize};

/// Extra cells added to each side of the sampling window beyond
/// `max_radius / spacing`. Covers the drift between the nominal spacing
/// and the true cell sizes of a non-uniform grid, so the largest circle
/// never samples outside the window.
pub const WINDOW_MARGIN_CELLS: usize = 6;

/// Cells stripped from every edge of the domain before measuring the
/// available search extent for the RMW scan. Keeps the search away from
/// boundary artifacts in model output.
pub const BOUNDARY_SHRINK_CELLS: usize = 5;

/// Azimuthal resolution of the default angle set, degrees.
pub const DEFAULT_AZIMUTH_STEP_DEG: f64 = 1.0;

/// The default full-circle angle set: `[0, 360)` degrees at
/// [`DEFAULT_AZIMUTH_STEP_DEG`] resolution, in radians.
pub fn default_azimuths() -> Vec<f64> {
    let steps = (360.0 / DEFAULT_AZIMUTH_STEP_DEG) as usize;
    (0..steps)
        .map(|i| (i as f64 * DEFAULT_AZIMUTH_STEP_DEG).to_radians())
        .collect()
}

/// Options for circle sampling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SamplerOptions {
    /// Angles (radians) of the sample points on each circle.
    /// `None` selects the full-circle default at 1° resolution.
    pub azimuths: Option<Vec<f64>>,
    /// Grid spacing `(dx, dy)` in km. `None` derives it from the first
    /// adjacent cell pair of the coordinate arrays.
    pub spacing_km: Option<(f64, f64)>,
    /// Coordinate system of the input arrays.
    pub coord: CoordinateSystem,
}

/// Options for the radius-of-maximum-wind search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RmwOptions {
    /// Maximum search radius in km. Values beyond the safe domain extent
    /// are clamped with a warning; `None` uses the extent itself.
    pub max_distance_km: Option<f64>,
    /// Radius step in km. `None` uses `max(dx, dy)` of the mean grid
    /// spacing.
    pub radius_step_km: Option<f64>,
    /// Grid spacing `(dx, dy)` in km. `None` derives the mean spacing
    /// from the coordinate arrays.
    pub spacing_km: Option<(f64, f64)>,
}

/// Options for the axisymmetricity diagnostic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AxisymOptions {
    /// Grid spacing `(dx, dy)` in km; `None` derives it as the sampler
    /// does. The angle set is not configurable here: the metric always
    /// integrates over the full circle at 1° resolution.
    pub spacing_km: Option<(f64, f64)>,
    /// Integration rule for the azimuthal deviance integral.
    pub integration: Integration,
}
