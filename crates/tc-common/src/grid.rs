//! 2-D gridded fields and paired coordinate arrays.

use crate::error::{GridError, Result};
use serde::{Deserialize, Serialize};

/// A 2-D field stored row-major, shape `(ny, nx)`.
///
/// Rows index latitude (the `y` direction), columns index longitude (the
/// `x` direction). The coordinates themselves live in [`GridCoords`]; a
/// `Grid2D` only knows its shape and values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid2D {
    data: Vec<f64>,
    ny: usize,
    nx: usize,
}

impl Grid2D {
    /// Create a grid from row-major data, checking the length.
    pub fn from_vec(data: Vec<f64>, ny: usize, nx: usize) -> Result<Self> {
        if ny == 0 || nx == 0 {
            return Err(GridError::EmptyGrid((ny, nx)));
        }
        if data.len() != ny * nx {
            return Err(GridError::LengthMismatch {
                len: data.len(),
                shape: (ny, nx),
            });
        }
        Ok(Self { data, ny, nx })
    }

    /// Create a grid by evaluating `f(row, col)` at every cell.
    pub fn from_fn(ny: usize, nx: usize, mut f: impl FnMut(usize, usize) -> f64) -> Result<Self> {
        if ny == 0 || nx == 0 {
            return Err(GridError::EmptyGrid((ny, nx)));
        }
        let mut data = Vec::with_capacity(ny * nx);
        for row in 0..ny {
            for col in 0..nx {
                data.push(f(row, col));
            }
        }
        Ok(Self { data, ny, nx })
    }

    /// Create a grid filled with a constant value.
    pub fn from_elem(ny: usize, nx: usize, value: f64) -> Result<Self> {
        Self::from_vec(vec![value; ny * nx], ny, nx)
    }

    /// Grid shape as `(ny, nx)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.ny, self.nx)
    }

    /// Number of rows (latitude direction).
    pub fn nrows(&self) -> usize {
        self.ny
    }

    /// Number of columns (longitude direction).
    pub fn ncols(&self) -> usize {
        self.nx
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the grid holds no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.ny || col >= self.nx {
            return None;
        }
        self.data.get(row * self.nx + col).copied()
    }

    /// Value at `(row, col)` without bounds checking beyond debug asserts.
    ///
    /// Callers must guarantee `row < nrows()` and `col < ncols()`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f64 {
        debug_assert!(row < self.ny && col < self.nx);
        self.data[row * self.nx + col]
    }

    /// The raw row-major data.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Index of the minimum value, as `(row, col)`.
    ///
    /// NaN cells never win; an all-NaN grid returns `(0, 0)`.
    pub fn argmin(&self) -> (usize, usize) {
        let mut best = f64::INFINITY;
        let mut best_idx = 0;
        for (idx, &v) in self.data.iter().enumerate() {
            if v < best {
                best = v;
                best_idx = idx;
            }
        }
        (best_idx / self.nx, best_idx % self.nx)
    }

    /// Apply `f` to every cell, producing a new grid of the same shape.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            data: self.data.iter().map(|&v| f(v)).collect(),
            ny: self.ny,
            nx: self.nx,
        }
    }
}

/// Paired longitude/latitude coordinate arrays, one per grid cell.
///
/// Both arrays share shape `(ny, nx)`; the invariant is enforced at
/// construction. Coordinates are degrees and need not be uniformly
/// spaced — model output grids rarely are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCoords {
    lon: Grid2D,
    lat: Grid2D,
}

impl GridCoords {
    /// Pair two coordinate arrays, checking that the shapes agree.
    pub fn new(lon: Grid2D, lat: Grid2D) -> Result<Self> {
        if lon.shape() != lat.shape() {
            return Err(GridError::ShapeMismatch {
                expected: lon.shape(),
                actual: lat.shape(),
            });
        }
        Ok(Self { lon, lat })
    }

    /// Longitude array, degrees east.
    pub fn lon(&self) -> &Grid2D {
        &self.lon
    }

    /// Latitude array, degrees north.
    pub fn lat(&self) -> &Grid2D {
        &self.lat
    }

    /// Shared shape `(ny, nx)`.
    pub fn shape(&self) -> (usize, usize) {
        self.lon.shape()
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.lon.nrows()
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.lon.ncols()
    }

    /// Check that a value field matches this coordinate grid's shape.
    pub fn check_field(&self, values: &Grid2D) -> Result<()> {
        if values.shape() != self.shape() {
            return Err(GridError::ShapeMismatch {
                expected: self.shape(),
                actual: values.shape(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_length_check() {
        assert!(Grid2D::from_vec(vec![0.0; 6], 2, 3).is_ok());
        assert!(matches!(
            Grid2D::from_vec(vec![0.0; 5], 2, 3),
            Err(GridError::LengthMismatch { .. })
        ));
        assert!(matches!(
            Grid2D::from_vec(vec![], 0, 3),
            Err(GridError::EmptyGrid(_))
        ));
    }

    #[test]
    fn test_get_row_major() {
        let g = Grid2D::from_fn(2, 3, |row, col| (row * 10 + col) as f64).unwrap();
        assert_eq!(g.get(0, 0), Some(0.0));
        assert_eq!(g.get(0, 2), Some(2.0));
        assert_eq!(g.get(1, 0), Some(10.0));
        assert_eq!(g.get(1, 2), Some(12.0));
        assert_eq!(g.get(2, 0), None);
        assert_eq!(g.get(0, 3), None);
    }

    #[test]
    fn test_argmin() {
        let g = Grid2D::from_vec(vec![3.0, 1.0, 2.0, 0.5, 4.0, 9.0], 2, 3).unwrap();
        assert_eq!(g.argmin(), (1, 0));
    }

    #[test]
    fn test_argmin_ignores_nan() {
        let g = Grid2D::from_vec(vec![f64::NAN, 2.0, 1.0, f64::NAN], 2, 2).unwrap();
        assert_eq!(g.argmin(), (1, 0));
    }

    #[test]
    fn test_coords_shape_check() {
        let lon = Grid2D::from_elem(2, 3, 120.0).unwrap();
        let lat = Grid2D::from_elem(3, 2, 20.0).unwrap();
        assert!(matches!(
            GridCoords::new(lon, lat),
            Err(GridError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_check_field() {
        let lon = Grid2D::from_elem(2, 3, 120.0).unwrap();
        let lat = Grid2D::from_elem(2, 3, 20.0).unwrap();
        let coords = GridCoords::new(lon, lat).unwrap();

        let ok = Grid2D::from_elem(2, 3, 1.0).unwrap();
        assert!(coords.check_field(&ok).is_ok());

        let bad = Grid2D::from_elem(3, 3, 1.0).unwrap();
        assert!(coords.check_field(&bad).is_err());
    }
}
