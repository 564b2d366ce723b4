//! Positions, displacements, and the [`Grid`] of cell positions.
//!
//! Geometry is fixed after construction: nothing in this module hands
//! out mutable access to positions, so coupling kernels computed at
//! registration stay valid for the lifetime of an entity.

use crate::error::GeometryError;

/// A point in 3-D space, in metres.
pub type Position = [f64; 3];

/// Vector from `from` to `to`.
pub fn displacement(from: &Position, to: &Position) -> [f64; 3] {
    [to[0] - from[0], to[1] - from[1], to[2] - from[2]]
}

/// Euclidean length of a vector.
pub fn norm(v: &[f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

/// Dot product of two vectors.
pub fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// A 3-D grid of cell positions stored in canonical order.
///
/// Cell `(i, j, k)` of a grid with shape `[n0, n1, n2]` lives at flat
/// index `(i * n1 + j) * n2 + k`. Every per-cell buffer in the workspace
/// (reflector states, probe fields, coupling rows) uses this ordering.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    shape: [usize; 3],
    positions: Vec<Position>,
}

impl Grid {
    /// Cartesian product of three coordinate axes (a meshgrid).
    ///
    /// The resulting shape is `[xs.len(), ys.len(), zs.len()]`.
    pub fn lattice(xs: &[f64], ys: &[f64], zs: &[f64]) -> Result<Self, GeometryError> {
        let mut positions = Vec::with_capacity(xs.len() * ys.len() * zs.len());
        for &x in xs {
            for &y in ys {
                for &z in zs {
                    positions.push([x, y, z]);
                }
            }
        }
        Self::from_positions([xs.len(), ys.len(), zs.len()], positions)
    }

    /// Build a grid from explicit positions in canonical order.
    pub fn from_positions(shape: [usize; 3], positions: Vec<Position>) -> Result<Self, GeometryError> {
        let expected = shape[0] * shape[1] * shape[2];
        if expected == 0 || positions.is_empty() {
            return Err(GeometryError::EmptyGrid);
        }
        if expected != positions.len() {
            return Err(GeometryError::ShapeMismatch {
                expected,
                actual: positions.len(),
            });
        }
        if let Some(index) = positions
            .iter()
            .position(|p| !p.iter().all(|c| c.is_finite()))
        {
            return Err(GeometryError::NonFinitePosition { index });
        }
        Ok(Self { shape, positions })
    }

    /// A single-cell grid at `position`.
    pub fn point(position: Position) -> Result<Self, GeometryError> {
        Self::from_positions([1, 1, 1], vec![position])
    }

    /// Grid dimensions `[n0, n1, n2]`.
    pub fn shape(&self) -> [usize; 3] {
        self.shape
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// All cell positions in canonical order.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Flat index of cell `(i, j, k)`, or `None` if out of bounds.
    pub fn index(&self, i: usize, j: usize, k: usize) -> Option<usize> {
        let [n0, n1, n2] = self.shape;
        (i < n0 && j < n1 && k < n2).then(|| (i * n1 + j) * n2 + k)
    }
}
