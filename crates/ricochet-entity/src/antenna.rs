//! The driving transceiver antenna.

use num_complex::Complex64;
use ricochet_core::field::{accumulate, magnitude};
use ricochet_core::{Axis, FieldVector, Incident, Position, PropagationError, ZERO_FIELD};

use crate::entity::{EntityKind, Emitter, Receiver};

/// Point source with a fixed scalar output power.
///
/// Also acts as the sink of every route: incoming fields are collapsed
/// over the emitter's cells and summed into a running 3-axis
/// accumulator, which is the antenna's measured return signal.
#[derive(Clone, Debug, PartialEq)]
pub struct Antenna {
    position: Position,
    power: Complex64,
    field: FieldVector,
}

impl Antenna {
    /// Antenna at `position` driving `power`.
    pub fn new(position: Position, power: f64) -> Self {
        Self {
            position,
            power: Complex64::new(power, 0.0),
            field: ZERO_FIELD,
        }
    }

    /// An unregistered antenna at the same position and power, with a
    /// fresh accumulator.
    pub fn copy(&self) -> Self {
        Self::new(self.position, self.power.re)
    }

    /// Antenna position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Output power.
    pub fn power(&self) -> f64 {
        self.power.re
    }

    /// Change the output power. Takes effect on the next propagation.
    pub fn set_power(&mut self, power: f64) {
        self.power = Complex64::new(power, 0.0);
    }

    /// Accumulated field `[Ex, Ey, Ez]`.
    pub fn field(&self) -> FieldVector {
        self.field
    }

    /// One accumulated component.
    pub fn component(&self, axis: Axis) -> Complex64 {
        self.field[axis.index()]
    }

    /// Magnitude of the accumulated field.
    pub fn s11(&self) -> f64 {
        magnitude(&self.field)
    }
}

impl Emitter for Antenna {
    fn emission(&self) -> &[Complex64] {
        std::slice::from_ref(&self.power)
    }
}

impl Receiver for Antenna {
    fn kind(&self) -> EntityKind {
        EntityKind::Antenna
    }

    fn accumulate(&mut self, incident: Incident) -> Result<(), PropagationError> {
        accumulate(&mut self.field, &incident.collapse());
        Ok(())
    }

    fn clear(&mut self) {
        self.field = ZERO_FIELD;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn receive_accumulates_collapsed_field() {
        let mut a = Antenna::new([0.0; 3], 1.0);
        a.receive(Incident::Vector(vec![
            [c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
            [c(1.0, 0.0), c(0.0, 1.0), c(0.0, 0.0)],
        ]))
        .unwrap();
        a.receive(Incident::Vector(vec![[c(0.5, 0.0), c(0.0, 0.0), c(2.0, 0.0)]]))
            .unwrap();
        assert_eq!(a.field(), [c(2.5, 0.0), c(0.0, 1.0), c(2.0, 0.0)]);
        assert_eq!(a.component(Axis::Z), c(2.0, 0.0));
    }

    #[test]
    fn scalar_incident_lands_on_every_axis() {
        let mut a = Antenna::new([0.0; 3], 1.0);
        a.receive(Incident::Scalar(vec![c(0.0, 3.0)])).unwrap();
        assert_eq!(a.field(), [c(0.0, 3.0); 3]);
        assert!((a.s11() - 27.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn clear_resets_accumulator_but_not_power() {
        let mut a = Antenna::new([1.0, 2.0, 3.0], 2.0);
        a.receive(Incident::Scalar(vec![c(1.0, 0.0)])).unwrap();
        a.clear();
        assert_eq!(a.field(), ZERO_FIELD);
        assert_eq!(a.emission(), &[c(2.0, 0.0)]);
    }

    #[test]
    fn copy_has_fresh_state() {
        let mut a = Antenna::new([1.0, 2.0, 3.0], 0.5);
        a.receive(Incident::Scalar(vec![c(1.0, 0.0)])).unwrap();
        let b = a.copy();
        assert_eq!(b.position(), a.position());
        assert_eq!(b.power(), 0.5);
        assert_eq!(b.field(), ZERO_FIELD);
    }
}
