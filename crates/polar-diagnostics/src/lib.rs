//! Polar-coordinate diagnostics of gridded fields around a storm center.
//!
//! Given a 2-D meteorological field on an irregular lon/lat grid and a
//! tropical-cyclone center, this crate samples the field on concentric
//! circles and reduces the rings into azimuthal statistics: the circular
//! mean, the radius of maximum wind, and the Miyamoto-Takemi
//! axisymmetricity.
//!
//! # Architecture
//!
//! ```text
//! field + coordinates + center
//!      │
//!      ▼
//! window::select_window ──► signed local offsets, clipped sub-grid
//!      │
//!      ▼
//! CircleSampler ──► sample points on circles
//!      │                  │
//!      │                  ▼
//!      │          TriangulationCache (Delaunay + barycentric weights,
//!      │                  │           built once per geometry)
//!      │◄─────────────────┘
//!      ▼
//! RingMatrix (n_radius × n_theta)
//!      │
//!      ▼
//! reducers: circular_avg │ rmw │ axisymmetricity
//! ```
//!
//! # Example
//!
//! ```ignore
//! use polar_diagnostics::{circular_avg, SamplerOptions};
//! use tc_common::Center;
//!
//! let center = Center::new(121.5, 23.5);
//! let radii = [25.0, 50.0, 75.0, 100.0];
//! let mean_wind = circular_avg(&coords, &wind, center, &radii, &SamplerOptions::default())?;
//! ```
//!
//! The `*Sampler`/`CircularMean`/`Axisymmetricity` structs are the
//! build-once path: construction performs the expensive triangulation,
//! and each subsequent call against a new field is a cheap cached linear
//! combination. Use them whenever the same center and radii are applied
//! to many fields (ensemble members, model times).

pub mod config;
pub mod error;
pub mod integrate;
pub mod reducers;
pub mod sampler;
pub mod triangulation;
pub mod types;
pub mod window;

// Re-export commonly used items at crate root
pub use config::{
    default_azimuths, AxisymOptions, RmwOptions, SamplerOptions, BOUNDARY_SHRINK_CELLS,
    DEFAULT_AZIMUTH_STEP_DEG, WINDOW_MARGIN_CELLS,
};
pub use error::{DiagnosticsError, Result};
pub use reducers::{
    axisymmetricity, circular_avg, rmw, safe_search_radius, Axisymmetricity, CircularMean,
};
pub use sampler::{interp_circle, CircleSampler};
pub use triangulation::{Delaunay, TriangulationCache};
pub use types::{CoordinateSystem, Integration, RingMatrix};
pub use window::{select_window, signed_offsets, Window};
