//! Complex field vectors and incident field buffers.

use num_complex::Complex64;

/// A 3-component complex electric field `[Ex, Ey, Ez]`.
pub type FieldVector = [Complex64; 3];

/// The zero field.
pub const ZERO_FIELD: FieldVector = [Complex64::new(0.0, 0.0); 3];

/// Cartesian field component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// x component.
    X,
    /// y component.
    Y,
    /// z component.
    Z,
}

impl Axis {
    /// All three axes in component order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index into a [`FieldVector`].
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

/// Real magnitude `sqrt(|Ex|² + |Ey|² + |Ez|²)` of a field vector.
pub fn magnitude(v: &FieldVector) -> f64 {
    v.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt()
}

/// `acc += v`, component-wise.
pub fn accumulate(acc: &mut FieldVector, v: &FieldVector) {
    for (a, b) in acc.iter_mut().zip(v) {
        *a += b;
    }
}

/// A scalar deposited identically on every axis.
///
/// Used where a scalar contribution (plane wave, point-to-point kernel)
/// feeds a 3-axis accumulator: there is no polarisation model, so each
/// axis receives the same value.
pub fn isotropic(s: Complex64) -> FieldVector {
    [s; 3]
}

/// Replace a non-finite complex value with zero.
pub fn finite_or_zero(c: Complex64) -> Complex64 {
    if c.re.is_finite() && c.im.is_finite() {
        c
    } else {
        Complex64::new(0.0, 0.0)
    }
}

/// Field arriving at a receiver, one entry per receiver cell.
#[derive(Clone, Debug, PartialEq)]
pub enum Incident {
    /// Direction-free complex amplitude per cell.
    Scalar(Vec<Complex64>),
    /// Direction-resolved field per cell.
    Vector(Vec<FieldVector>),
}

impl Incident {
    /// Number of receiver cells covered.
    pub fn cells(&self) -> usize {
        match self {
            Self::Scalar(v) => v.len(),
            Self::Vector(v) => v.len(),
        }
    }

    /// Per-cell field vectors, expanding scalars isotropically.
    pub fn into_vectors(self) -> Vec<FieldVector> {
        match self {
            Self::Scalar(v) => v.into_iter().map(isotropic).collect(),
            Self::Vector(v) => v,
        }
    }

    /// Sum of the per-cell field vectors (spatial collapse).
    pub fn collapse(&self) -> FieldVector {
        let mut total = ZERO_FIELD;
        match self {
            Self::Scalar(v) => {
                for s in v {
                    accumulate(&mut total, &isotropic(*s));
                }
            }
            Self::Vector(v) => {
                for f in v {
                    accumulate(&mut total, f);
                }
            }
        }
        total
    }
}
