//! Azimuthal (circular) mean per radius.

use crate::config::SamplerOptions;
use crate::error::Result;
use crate::sampler::CircleSampler;
use tc_common::{Center, Grid2D, GridCoords};

/// Reusable azimuthal-mean geometry bound to one center and radius set.
///
/// Amortizes the sampler's triangulation across many fields: build once,
/// then [`compute`](Self::compute) per field.
pub struct CircularMean {
    sampler: CircleSampler,
}

impl CircularMean {
    /// Fix the geometry and precompute the sampling cache.
    pub fn new(
        coords: &GridCoords,
        center: Center,
        radii: &[f64],
        options: &SamplerOptions,
    ) -> Result<Self> {
        Ok(Self {
            sampler: CircleSampler::new(coords, center, radii, options)?,
        })
    }

    /// Azimuthal mean of one field at each fixed radius.
    pub fn compute(&self, values: &Grid2D) -> Result<Vec<f64>> {
        Ok(self.sampler.interpolate(values)?.mean_per_radius())
    }

    /// The underlying sampler, e.g. for its radius set.
    pub fn sampler(&self) -> &CircleSampler {
        &self.sampler
    }
}

/// One-shot azimuthal mean: one scalar per requested radius.
pub fn circular_avg(
    coords: &GridCoords,
    values: &Grid2D,
    center: Center,
    radii: &[f64],
    options: &SamplerOptions,
) -> Result<Vec<f64>> {
    CircularMean::new(coords, center, radii, options)?.compute(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(ny: usize, nx: usize, step: f64) -> GridCoords {
        let lon = Grid2D::from_fn(ny, nx, |_, col| 120.0 + col as f64 * step).unwrap();
        let lat = Grid2D::from_fn(ny, nx, |row, _| 20.0 + row as f64 * step).unwrap();
        GridCoords::new(lon, lat).unwrap()
    }

    #[test]
    fn test_constant_field_mean() {
        let coords = coords(61, 61, 0.05);
        let center = Center::new(121.5, 21.5);
        let field = Grid2D::from_elem(61, 61, 12.5).unwrap();
        let means = circular_avg(
            &coords,
            &field,
            center,
            &[10.0, 25.0, 40.0],
            &SamplerOptions::default(),
        )
        .unwrap();
        assert_eq!(means.len(), 3);
        for m in means {
            assert!((m - 12.5).abs() < 1e-9, "got {}", m);
        }
    }

    #[test]
    fn test_closure_reuse_matches_one_shot() {
        let coords = coords(61, 61, 0.05);
        let center = Center::new(121.5, 21.5);
        let radii = [15.0, 30.0];

        let f1 = Grid2D::from_fn(61, 61, |row, col| (row + col) as f64).unwrap();
        let f2 = Grid2D::from_fn(61, 61, |row, col| (row as f64 - col as f64) * 0.5).unwrap();

        let mean = CircularMean::new(&coords, center, &radii, &SamplerOptions::default()).unwrap();
        let r1 = mean.compute(&f1).unwrap();
        let r2 = mean.compute(&f2).unwrap();

        let o1 = circular_avg(&coords, &f1, center, &radii, &SamplerOptions::default()).unwrap();
        let o2 = circular_avg(&coords, &f2, center, &radii, &SamplerOptions::default()).unwrap();

        for (a, b) in r1.iter().zip(&o1) {
            assert!((a - b).abs() < 1e-12);
        }
        for (a, b) in r2.iter().zip(&o2) {
            assert!((a - b).abs() < 1e-12);
        }
    }
}
