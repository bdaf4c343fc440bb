//! Circle sampling of gridded fields around a storm center.
//!
//! [`CircleSampler`] is the build-once path: construction fixes the
//! center, radius set, angle set and coordinate mode, selects the window,
//! lays out the sample points and builds one interpolation cache. After
//! that, [`interpolate`](CircleSampler::interpolate) costs one windowed
//! crop plus one cached linear combination per sample point — cheap
//! enough to push a whole time series of fields through the same
//! geometry. [`interp_circle`] is the one-shot convenience.

use crate::config::{default_azimuths, SamplerOptions};
use crate::error::{DiagnosticsError, Result};
use crate::triangulation::TriangulationCache;
use crate::types::{CoordinateSystem, RingMatrix};
use crate::window::{select_window, Window};
use rayon::prelude::*;
use tc_common::{Center, Grid2D, GridCoords};
use tracing::debug;

/// Reusable circle-sampling geometry bound to one center and radius set.
pub struct CircleSampler {
    radii: Vec<f64>,
    azimuths: Vec<f64>,
    window: Window,
    cache: TriangulationCache,
    grid_shape: (usize, usize),
}

impl CircleSampler {
    /// Fix the sampling geometry and precompute the interpolation cache.
    ///
    /// Only the lon/lat coordinate mode is implemented; selecting
    /// [`CoordinateSystem::Cartesian`] fails with `NotImplemented` rather
    /// than guessing a planar geometry.
    pub fn new(
        coords: &GridCoords,
        center: Center,
        radii: &[f64],
        options: &SamplerOptions,
    ) -> Result<Self> {
        match options.coord {
            CoordinateSystem::LonLat => {}
            CoordinateSystem::Cartesian => {
                return Err(DiagnosticsError::NotImplemented(
                    "planar Cartesian circle sampling".to_string(),
                ));
            }
        }

        if radii.is_empty() {
            return Err(DiagnosticsError::InvalidArgument(
                "radius set must not be empty".to_string(),
            ));
        }
        for &r in radii {
            if !r.is_finite() || r < 0.0 {
                return Err(DiagnosticsError::InvalidArgument(format!(
                    "radii must be finite and non-negative, got {}",
                    r
                )));
            }
        }

        let azimuths = match &options.azimuths {
            Some(az) if az.is_empty() => {
                return Err(DiagnosticsError::InvalidArgument(
                    "angle set must not be empty".to_string(),
                ));
            }
            Some(az) => az.clone(),
            None => default_azimuths(),
        };

        let spacing = match options.spacing_km {
            Some(s) => s,
            None => geodesy::local_spacing_km(coords)?,
        };

        let max_radius = radii.iter().cloned().fold(0.0, f64::max);
        let geometry = select_window(coords, center, max_radius, spacing)?;

        // Flattened (radius x angle) sample offsets from the center;
        // index i * n_theta + j maps to (radii[i], azimuths[j]).
        let mut samples = Vec::with_capacity(radii.len() * azimuths.len());
        for &r in radii {
            for &theta in &azimuths {
                samples.push([r * theta.cos(), r * theta.sin()]);
            }
        }

        let cache = TriangulationCache::new(&geometry.offsets, &samples)?;
        debug!(
            radii = radii.len(),
            azimuths = azimuths.len(),
            window_cells = geometry.window.len(),
            resolved = cache.resolved_count(),
            "circle sampler ready"
        );

        Ok(Self {
            radii: radii.to_vec(),
            azimuths,
            window: geometry.window,
            cache,
            grid_shape: coords.shape(),
        })
    }

    /// The fixed radius set, km.
    pub fn radii(&self) -> &[f64] {
        &self.radii
    }

    /// The fixed angle set, radians.
    pub fn azimuths(&self) -> &[f64] {
        &self.azimuths
    }

    /// Shape of every ring matrix this sampler produces.
    pub fn ring_shape(&self) -> (usize, usize) {
        (self.radii.len(), self.azimuths.len())
    }

    /// Sample one field on the fixed circles.
    ///
    /// `values` must share the coordinate grid's shape. Sample points the
    /// windowed triangulation cannot cover come back as NaN.
    pub fn interpolate(&self, values: &Grid2D) -> Result<RingMatrix> {
        if values.shape() != self.grid_shape {
            return Err(DiagnosticsError::InvalidArgument(format!(
                "field shape {:?} does not match sampler grid {:?}",
                values.shape(),
                self.grid_shape
            )));
        }

        let windowed = self.window.extract(values);
        let flat = self.cache.interpolate(&windowed)?;
        RingMatrix::new(flat, self.radii.len(), self.azimuths.len())
    }

    /// Sample several independent fields against the shared geometry.
    ///
    /// The cached state is immutable, so the fields run in parallel.
    pub fn interpolate_many(&self, fields: &[&Grid2D]) -> Result<Vec<RingMatrix>> {
        fields
            .par_iter()
            .map(|values| self.interpolate(values))
            .collect()
    }
}

/// One-shot circle sampling: build the geometry, use it once.
///
/// Prefer [`CircleSampler`] when the same center/radii/angles are reused
/// across many fields — the triangulation is the expensive part.
pub fn interp_circle(
    coords: &GridCoords,
    values: &Grid2D,
    center: Center,
    radii: &[f64],
    options: &SamplerOptions,
) -> Result<RingMatrix> {
    CircleSampler::new(coords, center, radii, options)?.interpolate(values)
}
