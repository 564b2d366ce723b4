//! Field probe.

use num_complex::Complex64;
use ricochet_core::field::accumulate;
use ricochet_core::{Axis, FieldVector, Grid, Incident, PropagationError, ZERO_FIELD};

use crate::entity::{EntityKind, Receiver};

/// Passive grid of observation points.
///
/// Accumulates a 3-axis complex field per cell and never emits.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldRecorder {
    grid: Grid,
    field: Vec<FieldVector>,
}

impl FieldRecorder {
    /// Probe covering `grid`.
    pub fn new(grid: Grid) -> Self {
        let field = vec![ZERO_FIELD; grid.len()];
        Self { grid, field }
    }

    /// Observation grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Accumulated field per cell, in grid order.
    pub fn field(&self) -> &[FieldVector] {
        &self.field
    }

    /// Accumulated field at cell `(i, j, k)`.
    pub fn field_at(&self, i: usize, j: usize, k: usize) -> Option<FieldVector> {
        self.grid.index(i, j, k).map(|idx| self.field[idx])
    }

    /// One component for every cell, in grid order.
    pub fn component(&self, axis: Axis) -> Vec<Complex64> {
        self.field.iter().map(|f| f[axis.index()]).collect()
    }
}

impl Receiver for FieldRecorder {
    fn kind(&self) -> EntityKind {
        EntityKind::Probe
    }

    fn accumulate(&mut self, incident: Incident) -> Result<(), PropagationError> {
        if incident.cells() != self.field.len() {
            return Err(PropagationError::ShapeMismatch {
                expected: self.field.len(),
                actual: incident.cells(),
            });
        }
        for (acc, v) in self.field.iter_mut().zip(incident.into_vectors()) {
            accumulate(acc, &v);
        }
        Ok(())
    }

    fn clear(&mut self) {
        self.field.fill(ZERO_FIELD);
    }
}
