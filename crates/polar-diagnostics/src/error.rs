//! Error types for the diagnostics core.

use thiserror::Error;

/// Errors that can occur while building or running polar diagnostics.
#[derive(Error, Debug)]
pub enum DiagnosticsError {
    /// Unknown coordinate-system name in a configuration string.
    #[error("unknown coordinate system: {0:?} (expected \"lonlat\" or \"xy\")")]
    UnknownCoordinateSystem(String),

    /// Unknown integration-rule name in a configuration string.
    #[error("unknown integration rule: {0:?} (expected \"trapz\" or \"simps\")")]
    UnknownIntegrationRule(String),

    /// A code path that exists in the API but has no implementation yet.
    #[error("not implemented: {0}")]
    NotImplemented(String),

    /// An argument outside the accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The source point set could not be triangulated.
    #[error("triangulation failed: {0}")]
    TriangulationFailed(String),

    /// Shape or construction error from the shared data model.
    #[error("grid error: {0}")]
    Grid(#[from] tc_common::GridError),

    /// Spacing-derivation error from the geodesy crate.
    #[error("geodesy error: {0}")]
    Geodesy(#[from] geodesy::GeodesyError),
}

/// Result type for diagnostics operations.
pub type Result<T> = std::result::Result<T, DiagnosticsError>;
