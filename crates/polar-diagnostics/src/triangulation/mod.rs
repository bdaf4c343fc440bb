//! Delaunay triangulation of scattered 2-D points.
//!
//! Bowyer–Watson incremental construction: a super-triangle encloses the
//! point set, points are inserted one at a time, and each insertion
//! replaces the triangles whose circumcircle contains the point with a fan
//! around the cavity boundary. Triangles touching the super-triangle are
//! dropped at the end, leaving a triangulation of the convex hull.
//! Circumcircles are computed once per triangle and cached, so the cavity
//! search is a squared-distance comparison per triangle.
//!
//! Point location uses a uniform bucket grid over the hull's bounding box;
//! queries outside the hull return `None`, the explicit sentinel callers
//! must turn into missing data rather than extrapolating.

mod cache;

pub use cache::TriangulationCache;

use crate::error::{DiagnosticsError, Result};
use nalgebra::{Matrix2, Vector2};
use std::collections::HashMap;
use tracing::debug;

/// Tolerance on barycentric coordinates when testing triangle membership.
/// Slightly negative weights are accepted so hull-edge queries are not
/// lost to rounding.
const BARY_EPS: f64 = 1e-9;

/// A triangle with its cached circumcircle.
#[derive(Debug, Clone, Copy)]
struct Triangle {
    verts: [usize; 3],
    circum_x: f64,
    circum_y: f64,
    /// Squared circumradius; infinite for a (near-)degenerate triangle.
    circum_rr: f64,
}

impl Triangle {
    fn new(points: &[[f64; 2]], ids: [usize; 3]) -> Self {
        let verts = oriented(points, ids);
        let a = points[verts[0]];
        let b = points[verts[1]];
        let c = points[verts[2]];

        let d = 2.0 * (a[0] * (b[1] - c[1]) + b[0] * (c[1] - a[1]) + c[0] * (a[1] - b[1]));
        if d == 0.0 {
            return Self {
                verts,
                circum_x: 0.0,
                circum_y: 0.0,
                circum_rr: f64::INFINITY,
            };
        }

        let a2 = a[0] * a[0] + a[1] * a[1];
        let b2 = b[0] * b[0] + b[1] * b[1];
        let c2 = c[0] * c[0] + c[1] * c[1];
        let ux = (a2 * (b[1] - c[1]) + b2 * (c[1] - a[1]) + c2 * (a[1] - b[1])) / d;
        let uy = (a2 * (c[0] - b[0]) + b2 * (a[0] - c[0]) + c2 * (b[0] - a[0])) / d;
        let rr = (a[0] - ux) * (a[0] - ux) + (a[1] - uy) * (a[1] - uy);

        Self {
            verts,
            circum_x: ux,
            circum_y: uy,
            circum_rr: rr,
        }
    }

    /// Whether `p` lies strictly inside the cached circumcircle.
    #[inline]
    fn circumcircle_contains(&self, p: [f64; 2]) -> bool {
        let dx = p[0] - self.circum_x;
        let dy = p[1] - self.circum_y;
        dx * dx + dy * dy < self.circum_rr
    }
}

/// A Delaunay triangulation of a fixed point set.
#[derive(Debug, Clone)]
pub struct Delaunay {
    points: Vec<[f64; 2]>,
    triangles: Vec<Triangle>,
    locator: BucketGrid,
}

impl Delaunay {
    /// Triangulate a point set.
    ///
    /// Fails when fewer than three points are given or when the set is
    /// entirely collinear/duplicated (no triangle survives).
    pub fn new(points: &[[f64; 2]]) -> Result<Self> {
        let n = points.len();
        if n < 3 {
            return Err(DiagnosticsError::TriangulationFailed(format!(
                "need at least 3 points, got {}",
                n
            )));
        }

        let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
        let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in points {
            if !p[0].is_finite() || !p[1].is_finite() {
                return Err(DiagnosticsError::TriangulationFailed(
                    "non-finite source coordinate".to_string(),
                ));
            }
            min_x = min_x.min(p[0]);
            min_y = min_y.min(p[1]);
            max_x = max_x.max(p[0]);
            max_y = max_y.max(p[1]);
        }

        let span = (max_x - min_x).max(max_y - min_y).max(1e-12);
        let cx = (min_x + max_x) / 2.0;
        let cy = (min_y + max_y) / 2.0;

        // Vertex list with the three super-triangle vertices appended.
        let mut verts: Vec<[f64; 2]> = points.to_vec();
        let big = 32.0 * span;
        verts.push([cx - big, cy - span]);
        verts.push([cx + big, cy - span]);
        verts.push([cx, cy + big]);
        let super_base = n;

        let mut triangles: Vec<Triangle> = vec![Triangle::new(
            &verts,
            [super_base, super_base + 1, super_base + 2],
        )];

        let mut bad: Vec<usize> = Vec::new();
        let mut edge_count: HashMap<(usize, usize), usize> = HashMap::new();

        for p_idx in 0..n {
            let p = verts[p_idx];

            bad.clear();
            for (t_idx, tri) in triangles.iter().enumerate() {
                if tri.circumcircle_contains(p) {
                    bad.push(t_idx);
                }
            }
            if bad.is_empty() {
                // Duplicate of an existing vertex; it stays out of the mesh.
                debug!(point = p_idx, "skipping degenerate insertion");
                continue;
            }

            edge_count.clear();
            for &t_idx in &bad {
                let [a, b, c] = triangles[t_idx].verts;
                for (u, v) in [(a, b), (b, c), (c, a)] {
                    let key = if u < v { (u, v) } else { (v, u) };
                    *edge_count.entry(key).or_insert(0) += 1;
                }
            }

            // Remove the cavity, highest index first so swap_remove is safe.
            bad.sort_unstable_by(|a, b| b.cmp(a));
            for &t_idx in &bad {
                triangles.swap_remove(t_idx);
            }

            // Re-triangulate: fan from the new point to each boundary edge.
            for (&(u, v), &count) in edge_count.iter() {
                if count == 1 && orient2d(verts[u], verts[v], p) != 0.0 {
                    triangles.push(Triangle::new(&verts, [u, v, p_idx]));
                }
            }
        }

        triangles.retain(|t| t.verts.iter().all(|&v| v < n));
        if triangles.is_empty() {
            return Err(DiagnosticsError::TriangulationFailed(
                "all input points are collinear or duplicated".to_string(),
            ));
        }

        let locator = BucketGrid::build(&verts, &triangles);
        debug!(
            points = n,
            triangles = triangles.len(),
            "triangulation complete"
        );

        Ok(Self {
            points: points.to_vec(),
            triangles,
            locator,
        })
    }

    /// The source points, in construction order.
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Vertex indices of a triangle.
    pub fn triangle(&self, idx: usize) -> [usize; 3] {
        self.triangles[idx].verts
    }

    /// Index of the triangle enclosing `p`, or `None` outside the hull.
    pub fn find_simplex(&self, p: [f64; 2]) -> Option<usize> {
        for &t_idx in self.locator.candidates(p) {
            if let Some(w) = self.barycentric(t_idx as usize, p) {
                if w.iter().all(|&x| x >= -BARY_EPS) {
                    return Some(t_idx as usize);
                }
            }
        }
        None
    }

    /// Barycentric coordinates of `p` in triangle `idx`.
    ///
    /// `None` for a degenerate (zero-area) triangle. The weights sum to 1
    /// by construction: the third is `1 - w1 - w2`.
    pub fn barycentric(&self, idx: usize, p: [f64; 2]) -> Option<[f64; 3]> {
        let [a, b, c] = self.triangles[idx].verts;
        let pa = self.points[a];
        let pb = self.points[b];
        let pc = self.points[c];

        let t = Matrix2::new(pa[0] - pc[0], pb[0] - pc[0], pa[1] - pc[1], pb[1] - pc[1]);
        let inv = t.try_inverse()?;
        let lambda = inv * Vector2::new(p[0] - pc[0], p[1] - pc[1]);
        Some([lambda.x, lambda.y, 1.0 - lambda.x - lambda.y])
    }
}

/// Orientation test: positive when `a`, `b`, `c` wind counter-clockwise.
fn orient2d(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> f64 {
    (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])
}

/// Reorder a vertex triple to counter-clockwise winding.
fn oriented(verts: &[[f64; 2]], [a, b, c]: [usize; 3]) -> [usize; 3] {
    if orient2d(verts[a], verts[b], verts[c]) < 0.0 {
        [a, c, b]
    } else {
        [a, b, c]
    }
}

/// Uniform bucket grid mapping a query point to candidate triangles.
///
/// Each triangle is registered in every bucket its bounding box overlaps,
/// so a point inside a triangle always finds it in the point's own bucket.
#[derive(Debug, Clone)]
struct BucketGrid {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
    inv_dx: f64,
    inv_dy: f64,
    cols: usize,
    rows: usize,
    cells: Vec<Vec<u32>>,
}

impl BucketGrid {
    fn build(verts: &[[f64; 2]], triangles: &[Triangle]) -> Self {
        let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
        let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for tri in triangles {
            for &v in &tri.verts {
                min_x = min_x.min(verts[v][0]);
                min_y = min_y.min(verts[v][1]);
                max_x = max_x.max(verts[v][0]);
                max_y = max_y.max(verts[v][1]);
            }
        }

        let side = (triangles.len() as f64).sqrt().ceil() as usize;
        let cols = side.max(1);
        let rows = side.max(1);
        let width = (max_x - min_x).max(1e-12);
        let height = (max_y - min_y).max(1e-12);
        let inv_dx = cols as f64 / width;
        let inv_dy = rows as f64 / height;

        let mut cells = vec![Vec::new(); cols * rows];
        for (t_idx, tri) in triangles.iter().enumerate() {
            let xs = tri.verts.map(|v| verts[v][0]);
            let ys = tri.verts.map(|v| verts[v][1]);
            let x_lo = xs.iter().cloned().fold(f64::INFINITY, f64::min);
            let x_hi = xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let y_lo = ys.iter().cloned().fold(f64::INFINITY, f64::min);
            let y_hi = ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

            let c0 = cell_index(x_lo, min_x, inv_dx, cols);
            let c1 = cell_index(x_hi, min_x, inv_dx, cols);
            let r0 = cell_index(y_lo, min_y, inv_dy, rows);
            let r1 = cell_index(y_hi, min_y, inv_dy, rows);
            for row in r0..=r1 {
                for col in c0..=c1 {
                    cells[row * cols + col].push(t_idx as u32);
                }
            }
        }

        Self {
            min_x,
            min_y,
            max_x,
            max_y,
            inv_dx,
            inv_dy,
            cols,
            rows,
            cells,
        }
    }

    /// Candidate triangles for a query point; empty outside the hull's
    /// bounding box (the hull is contained in it, so that is conclusive).
    fn candidates(&self, p: [f64; 2]) -> &[u32] {
        if p[0] < self.min_x || p[0] > self.max_x || p[1] < self.min_y || p[1] > self.max_y {
            return &[];
        }
        let col = cell_index(p[0], self.min_x, self.inv_dx, self.cols);
        let row = cell_index(p[1], self.min_y, self.inv_dy, self.rows);
        &self.cells[row * self.cols + col]
    }
}

#[inline]
fn cell_index(coord: f64, origin: f64, inv_step: f64, count: usize) -> usize {
    (((coord - origin) * inv_step) as usize).min(count - 1)
}
