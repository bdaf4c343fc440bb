//! Axisymmetricity after Miyamoto and Takemi (2013).
//!
//! For each radius `r`, with `m(r)` the azimuthal mean and
//! `d(r, theta) = f(r, theta) - m(r)` the azimuthal deviation:
//!
//! ```text
//! A(r) = m(r)^2 / ( m(r)^2 + (1 / 2 pi) * integral d(r, theta)^2 dtheta )
//! ```
//!
//! A perfectly symmetric field gives A = 1, a zero-mean asymmetric field
//! A = 0. The deviance integral always spans the full circle, so this
//! module fixes its own 0-360 degree angle set at 1 degree resolution
//! regardless of any angle set used elsewhere.
//!
//! Reference: Miyamoto, Y. and T. Takemi, 2013: "A Transition Mechanism
//! for the Spontaneous Axisymmetric Intensification of Tropical
//! Cyclones", J. Atmos. Sci., 70, 112-129.

use crate::config::{AxisymOptions, SamplerOptions};
use crate::error::Result;
use crate::integrate::integrate;
use crate::sampler::CircleSampler;
use crate::types::Integration;
use std::f64::consts::TAU;
use tc_common::{Center, Grid2D, GridCoords};

/// Reusable axisymmetricity geometry bound to one center and radius set.
pub struct Axisymmetricity {
    sampler: CircleSampler,
    integration: Integration,
    dtheta: f64,
}

impl Axisymmetricity {
    /// Fix the geometry and precompute the sampling cache.
    ///
    /// The angle set is always the full circle at 1 degree resolution;
    /// only the spacing and the integration rule are configurable.
    pub fn new(
        coords: &GridCoords,
        center: Center,
        radii: &[f64],
        options: &AxisymOptions,
    ) -> Result<Self> {
        let sampler_options = SamplerOptions {
            azimuths: None, // full-circle default, required by the formula
            spacing_km: options.spacing_km,
            ..Default::default()
        };
        let sampler = CircleSampler::new(coords, center, radii, &sampler_options)?;
        let azimuths = sampler.azimuths();
        let dtheta = azimuths[1] - azimuths[0];

        Ok(Self {
            sampler,
            integration: options.integration,
            dtheta,
        })
    }

    /// Axisymmetricity of one field at each fixed radius, in [0, 1].
    ///
    /// A ring that is identically zero has a zero denominator; it is
    /// defined here as perfectly symmetric (A = 1). Rings with NaN
    /// samples (outside the windowed hull) produce NaN.
    pub fn compute(&self, var: &Grid2D) -> Result<Vec<f64>> {
        let ring = self.sampler.interpolate(var)?;

        let result = ring
            .rings()
            .map(|samples| {
                let mean = samples.iter().sum::<f64>() / samples.len() as f64;
                let dev_sq: Vec<f64> = samples.iter().map(|&v| (v - mean).powi(2)).collect();
                let variance = integrate(self.integration, &dev_sq, self.dtheta) / TAU;

                let denom = mean * mean + variance;
                if denom == 0.0 {
                    // Identically-zero ring: trivially symmetric.
                    1.0
                } else {
                    mean * mean / denom
                }
            })
            .collect();

        Ok(result)
    }

    /// The underlying sampler.
    pub fn sampler(&self) -> &CircleSampler {
        &self.sampler
    }
}

/// One-shot axisymmetricity: one value per requested radius.
pub fn axisymmetricity(
    coords: &GridCoords,
    var: &Grid2D,
    radii: &[f64],
    center: Center,
    options: &AxisymOptions,
) -> Result<Vec<f64>> {
    Axisymmetricity::new(coords, center, radii, options)?.compute(var)
}
