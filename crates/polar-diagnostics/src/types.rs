//! Core types for polar diagnostics.

use crate::error::{DiagnosticsError, Result};
use serde::{Deserialize, Serialize};

/// Coordinate system of the input grid arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CoordinateSystem {
    /// Longitude/latitude in degrees; circle geometry uses great-circle
    /// distances to build local Cartesian offsets.
    #[default]
    LonLat,
    /// Planar x/y coordinates. Present in the API but not implemented;
    /// selecting it fails loudly rather than guessing a geometry.
    Cartesian,
}

impl CoordinateSystem {
    /// Parse a coordinate-system name, rejecting anything unknown.
    pub fn from_name(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "lonlat" => Ok(Self::LonLat),
            "xy" => Ok(Self::Cartesian),
            _ => Err(DiagnosticsError::UnknownCoordinateSystem(s.to_string())),
        }
    }
}

impl std::fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LonLat => write!(f, "lonlat"),
            Self::Cartesian => write!(f, "xy"),
        }
    }
}

/// Numerical integration rule for azimuthal integrals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Integration {
    /// Trapezoidal rule.
    #[default]
    Trapezoidal,
    /// Composite Simpson's rule.
    Simpson,
}

impl Integration {
    /// Parse an integration-rule name, rejecting anything unknown.
    pub fn from_name(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trapz" | "trapezoidal" => Ok(Self::Trapezoidal),
            "simps" | "simpson" => Ok(Self::Simpson),
            _ => Err(DiagnosticsError::UnknownIntegrationRule(s.to_string())),
        }
    }
}

impl std::fmt::Display for Integration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trapezoidal => write!(f, "trapz"),
            Self::Simpson => write!(f, "simps"),
        }
    }
}

/// Field values sampled on concentric circles, shape `(n_radii, n_theta)`.
///
/// Row `i` holds one circle: the samples at `radius[i]` for every angle in
/// the sampler's angle set, in angle order. Out-of-hull samples are NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct RingMatrix {
    data: Vec<f64>,
    n_radii: usize,
    n_theta: usize,
}

impl RingMatrix {
    /// Build from row-major data, checking the length.
    pub fn new(data: Vec<f64>, n_radii: usize, n_theta: usize) -> Result<Self> {
        if data.len() != n_radii * n_theta {
            return Err(DiagnosticsError::InvalidArgument(format!(
                "ring data length {} does not match shape ({}, {})",
                data.len(),
                n_radii,
                n_theta
            )));
        }
        Ok(Self {
            data,
            n_radii,
            n_theta,
        })
    }

    /// Shape as `(n_radii, n_theta)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_radii, self.n_theta)
    }

    /// Number of circles.
    pub fn n_radii(&self) -> usize {
        self.n_radii
    }

    /// Samples per circle.
    pub fn n_theta(&self) -> usize {
        self.n_theta
    }

    /// Sample at circle `i`, angle index `j`.
    pub fn at(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.n_radii && j < self.n_theta);
        self.data[i * self.n_theta + j]
    }

    /// One circle's samples.
    pub fn ring(&self, i: usize) -> &[f64] {
        let start = i * self.n_theta;
        &self.data[start..start + self.n_theta]
    }

    /// Iterator over circles, innermost radius first.
    pub fn rings(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.n_theta)
    }

    /// Azimuthal mean per circle. NaN samples propagate into their ring's
    /// mean, marking radii the triangulation could not cover.
    pub fn mean_per_radius(&self) -> Vec<f64> {
        self.rings()
            .map(|ring| ring.iter().sum::<f64>() / ring.len() as f64)
            .collect()
    }

    /// The raw row-major data.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}
