//! Plane-wave source.

use num_complex::Complex64;
use ricochet_core::geometry::norm;
use ricochet_core::{GeometryError, Position};

use crate::entity::Emitter;

/// Source defined by a wave vector rather than a radiating point.
///
/// The phase at a receiver cell is set by the cell's projected distance
/// along the propagation direction, measured from `origin`. It has no
/// receiving aperture and is never coupled as a receiver.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaneWaveGenerator {
    origin: Position,
    wave_vector: [f64; 3],
    power: Complex64,
}

impl PlaneWaveGenerator {
    /// Plane wave through `origin` with wave vector `(kx, ky, kz)`.
    pub fn new(origin: Position, wave_vector: [f64; 3], power: f64) -> Result<Self, GeometryError> {
        let k = norm(&wave_vector);
        if !k.is_finite() || k == 0.0 {
            return Err(GeometryError::ZeroWaveVector);
        }
        Ok(Self {
            origin,
            wave_vector,
            power: Complex64::new(power, 0.0),
        })
    }

    /// Phase reference point.
    pub fn origin(&self) -> &Position {
        &self.origin
    }

    /// Wave vector `(kx, ky, kz)`.
    pub fn wave_vector(&self) -> [f64; 3] {
        self.wave_vector
    }

    /// Wavenumber `|k|`.
    pub fn wavenumber(&self) -> f64 {
        norm(&self.wave_vector)
    }

    /// Unit propagation direction `k / |k|`.
    pub fn direction(&self) -> [f64; 3] {
        let k = self.wavenumber();
        self.wave_vector.map(|c| c / k)
    }

    /// Output amplitude.
    pub fn power(&self) -> f64 {
        self.power.re
    }
}

impl Emitter for PlaneWaveGenerator {
    fn emission(&self) -> &[Complex64] {
        std::slice::from_ref(&self.power)
    }
}
