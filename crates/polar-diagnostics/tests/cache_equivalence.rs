//! Equivalence tests for the triangulation cache.
//!
//! The cache must produce the same numbers as a direct (uncached)
//! triangulation lookup per query point, for any number of value fields
//! pushed through the same cache.

use polar_diagnostics::{Delaunay, TriangulationCache};

/// Direct reference interpolation: triangulate, locate, and combine per
/// call, with no precomputed state.
fn reference_interpolate(sources: &[[f64; 2]], queries: &[[f64; 2]], values: &[f64]) -> Vec<f64> {
    let tri = Delaunay::new(sources).expect("triangulation");
    queries
        .iter()
        .map(|&q| match tri.find_simplex(q) {
            Some(s) => {
                let w = tri.barycentric(s, q).expect("non-degenerate simplex");
                let [a, b, c] = tri.triangle(s);
                values[a] * w[0] + values[b] * w[1] + values[c] * w[2]
            }
            None => f64::NAN,
        })
        .collect()
}

fn scattered_sources() -> Vec<[f64; 2]> {
    // Deterministic pseudo-irregular point cloud: a jittered grid, the
    // kind of geometry windowed lon/lat offsets produce.
    let mut pts = Vec::new();
    for j in 0..20 {
        for i in 0..20 {
            let jitter_x = ((i * 7 + j * 13) % 10) as f64 / 30.0;
            let jitter_y = ((i * 11 + j * 3) % 10) as f64 / 30.0;
            pts.push([i as f64 + jitter_x, j as f64 + jitter_y]);
        }
    }
    pts
}

fn query_ring() -> Vec<[f64; 2]> {
    // Circle samples around the middle of the cloud, some outside it.
    let mut queries = Vec::new();
    for &radius in &[2.0, 5.0, 8.0, 14.0] {
        for k in 0..36 {
            let theta = (k as f64) * 10.0_f64.to_radians();
            queries.push([9.5 + radius * theta.cos(), 9.5 + radius * theta.sin()]);
        }
    }
    queries
}

#[test]
fn cache_matches_reference_for_three_fields() {
    let sources = scattered_sources();
    let queries = query_ring();
    let cache = TriangulationCache::new(&sources, &queries).unwrap();

    let fields: Vec<Vec<f64>> = vec![
        sources.iter().map(|p| (p[0] * 0.3).cos() * (p[1] * 0.2).sin()).collect(),
        sources.iter().map(|p| p[0] * p[0] - 2.0 * p[1]).collect(),
        sources.iter().map(|p| (p[0] + p[1]).sqrt()).collect(),
    ];

    for values in &fields {
        let cached = cache.interpolate(values).unwrap();
        let reference = reference_interpolate(&sources, &queries, values);
        assert_eq!(cached.len(), reference.len());
        for (c, r) in cached.iter().zip(&reference) {
            if r.is_nan() {
                assert!(c.is_nan());
            } else {
                assert!((c - r).abs() < 1e-10, "{} vs {}", c, r);
            }
        }
    }
}

#[test]
fn weights_sum_to_one_and_reproduce_constants() {
    let sources = scattered_sources();
    let queries = query_ring();

    let tri = Delaunay::new(&sources).unwrap();
    for &q in &queries {
        if let Some(s) = tri.find_simplex(q) {
            let w = tri.barycentric(s, q).unwrap();
            assert!(
                (w.iter().sum::<f64>() - 1.0).abs() < 1e-9,
                "weights {:?} do not sum to 1 at {:?}",
                w,
                q
            );
        }
    }

    // A constant field must interpolate to the constant at every in-hull
    // query, exactly up to floating error.
    let cache = TriangulationCache::new(&sources, &queries).unwrap();
    let constant = vec![42.0; sources.len()];
    let out = cache.interpolate(&constant).unwrap();
    let mut in_hull = 0;
    for v in out {
        if !v.is_nan() {
            assert!((v - 42.0).abs() < 1e-9, "got {}", v);
            in_hull += 1;
        }
    }
    assert!(in_hull > 0, "no query fell inside the hull");
}

#[test]
fn far_queries_are_all_nan() {
    let sources = scattered_sources();
    let queries = vec![[100.0, 100.0], [-50.0, 3.0], [10.0, -40.0]];
    let cache = TriangulationCache::new(&sources, &queries).unwrap();
    assert_eq!(cache.resolved_count(), 0);

    let values: Vec<f64> = (0..sources.len()).map(|i| i as f64).collect();
    assert!(cache.interpolate(&values).unwrap().iter().all(|v| v.is_nan()));
}
