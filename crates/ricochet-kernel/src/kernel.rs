//! The [`Kernel`] trait and the free-space Green's functions.

use num_complex::Complex64;
use ricochet_core::geometry::norm;
use ricochet_core::FieldVector;
use std::f64::consts::PI;

use crate::bessel::hankel1_0;

/// Spatial dimensionality of the free-space Green's function.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dimension {
    /// Cylindrical waves: `H0⁽¹⁾(k0 r)`.
    Two,
    /// Spherical waves: `i/(4π) · e^{i|k0 r|} / |r|`.
    #[default]
    Three,
}

/// A pure, stateless coupling kernel.
///
/// # Contract
///
/// - `evaluate()` MUST be deterministic and symmetric in the sense that
///   it depends only on `|r|`: swapping emitter and receiver yields the
///   same scalar value.
/// - Implementations return the raw value. Non-finite results at
///   coincident points are normalised to zero by [`Coupling`](crate::Coupling)
///   construction, which also counts them so a caller can reject
///   degenerate geometry instead.
///
/// # Object safety
///
/// This trait is object-safe; the engine stores its kernel as
/// `Box<dyn Kernel>`.
pub trait Kernel: Send + Sync + 'static {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Scalar coupling at separation `distance` for wavenumber `k0`.
    fn evaluate(&self, k0: f64, distance: f64) -> Complex64;

    /// Direction-resolved coupling along `displacement` (emitter to
    /// receiver): the scalar value scaled by the unit displacement.
    ///
    /// At zero displacement the components are `NaN`; callers normalise.
    fn evaluate_vector(&self, k0: f64, displacement: &[f64; 3]) -> FieldVector {
        let r = norm(displacement);
        let g = self.evaluate(k0, r);
        [
            g * (displacement[0] / r),
            g * (displacement[1] / r),
            g * (displacement[2] / r),
        ]
    }
}

/// Free-space Green's function in two or three dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FreeSpace {
    dimension: Dimension,
}

impl FreeSpace {
    /// Kernel for the given dimensionality.
    pub fn new(dimension: Dimension) -> Self {
        Self { dimension }
    }

    /// The configured dimensionality.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }
}

impl Kernel for FreeSpace {
    fn name(&self) -> &str {
        match self.dimension {
            Dimension::Two => "free_space_2d",
            Dimension::Three => "free_space_3d",
        }
    }

    fn evaluate(&self, k0: f64, distance: f64) -> Complex64 {
        match self.dimension {
            Dimension::Two => hankel1_0((k0 * distance).abs()),
            Dimension::Three => {
                let phase = Complex64::new(0.0, (k0 * distance).abs()).exp();
                Complex64::new(0.0, 1.0 / (4.0 * PI)) * phase / distance.abs()
            }
        }
    }
}
