//! Passive point dipole.

use num_complex::Complex64;
use ricochet_core::field::{accumulate, magnitude};
use ricochet_core::{Axis, FieldVector, Incident, Position, PropagationError, ZERO_FIELD};

use crate::entity::{EntityKind, Emitter, Receiver};

/// Point scatterer whose re-radiated power is `alpha · |E|`.
///
/// Like a reflector cell, a dipole models instantaneous re-radiation:
/// each illumination overwrites its field rather than adding to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Dipole {
    position: Position,
    alpha: f64,
    field: FieldVector,
    power: Complex64,
}

impl Dipole {
    /// Dipole at `position` with polarisability `alpha`.
    pub fn new(position: Position, alpha: f64) -> Self {
        Self {
            position,
            alpha,
            field: ZERO_FIELD,
            power: Complex64::new(0.0, 0.0),
        }
    }

    /// Dipole position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Polarisability.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Most recent received field.
    pub fn field(&self) -> FieldVector {
        self.field
    }

    /// One received component.
    pub fn component(&self, axis: Axis) -> Complex64 {
        self.field[axis.index()]
    }

    /// Magnitude of the received field.
    pub fn s11(&self) -> f64 {
        magnitude(&self.field)
    }

    /// Current re-radiated power.
    pub fn power(&self) -> f64 {
        self.power.re
    }

    /// Overwrite the received field and recompute the re-radiated power.
    ///
    /// Returns the new power.
    pub fn update_state(&mut self, field: FieldVector) -> f64 {
        self.field = field;
        self.power = Complex64::new(self.alpha * magnitude(&self.field), 0.0);
        self.power.re
    }
}

impl Emitter for Dipole {
    fn emission(&self) -> &[Complex64] {
        std::slice::from_ref(&self.power)
    }
}

impl Receiver for Dipole {
    fn kind(&self) -> EntityKind {
        EntityKind::Dipole
    }

    fn accumulate(&mut self, incident: Incident) -> Result<(), PropagationError> {
        let mut field = self.field;
        accumulate(&mut field, &incident.collapse());
        self.update_state(field);
        Ok(())
    }

    fn clear(&mut self) {
        self.update_state(ZERO_FIELD);
    }
}
