//! Precomputed interpolation weights for a fixed source/query geometry.

use super::Delaunay;
use crate::error::{DiagnosticsError, Result};
use rayon::prelude::*;
use tracing::debug;

/// Cached triangle vertices and barycentric weights for one query point.
#[derive(Debug, Clone, Copy)]
struct CacheEntry {
    vertices: [usize; 3],
    weights: [f64; 3],
}

/// Build-once, apply-many linear interpolation on scattered points.
///
/// Construction triangulates the source points and resolves every query
/// point to its enclosing triangle and barycentric weights. After that,
/// [`interpolate`](Self::interpolate) is a fixed-cost linear combination
/// per query point, however many value fields are pushed through.
///
/// Query points outside the source convex hull have no entry; their
/// output is NaN, never an extrapolated number.
#[derive(Debug, Clone)]
pub struct TriangulationCache {
    source_len: usize,
    entries: Vec<Option<CacheEntry>>,
}

impl TriangulationCache {
    /// Precompute weights for interpolating from `sources` onto `queries`.
    pub fn new(sources: &[[f64; 2]], queries: &[[f64; 2]]) -> Result<Self> {
        let tri = Delaunay::new(sources)?;

        let entries: Vec<Option<CacheEntry>> = queries
            .iter()
            .map(|&q| {
                let simplex = tri.find_simplex(q)?;
                let weights = tri.barycentric(simplex, q)?;
                Some(CacheEntry {
                    vertices: tri.triangle(simplex),
                    weights,
                })
            })
            .collect();

        let resolved = entries.iter().filter(|e| e.is_some()).count();
        debug!(
            sources = sources.len(),
            queries = queries.len(),
            resolved,
            "interpolation cache built"
        );

        Ok(Self {
            source_len: sources.len(),
            entries,
        })
    }

    /// Number of query points.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no query points.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of query points that fell inside the source hull.
    pub fn resolved_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Expected length of every `values` argument.
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    /// Interpolate one value field onto the cached query points.
    ///
    /// `values` must index identically to the source points the cache was
    /// built from; a different length is a caller error and is rejected.
    /// Out-of-hull query points come back as NaN.
    pub fn interpolate(&self, values: &[f64]) -> Result<Vec<f64>> {
        if values.len() != self.source_len {
            return Err(DiagnosticsError::InvalidArgument(format!(
                "values length {} does not match the {} source points this cache was built from",
                values.len(),
                self.source_len
            )));
        }

        Ok(self
            .entries
            .iter()
            .map(|entry| match entry {
                Some(e) => {
                    let [a, b, c] = e.vertices;
                    let [wa, wb, wc] = e.weights;
                    values[a] * wa + values[b] * wb + values[c] * wc
                }
                None => f64::NAN,
            })
            .collect())
    }

    /// Interpolate several independent value fields against this cache.
    ///
    /// The cache is immutable after construction, so the fields are
    /// evaluated in parallel.
    pub fn interpolate_many(&self, fields: &[&[f64]]) -> Result<Vec<Vec<f64>>> {
        fields
            .par_iter()
            .map(|values| self.interpolate(values))
            .collect()
    }
}
