//! Dense coupling matrices between an emitter and a receiver.
//!
//! A [`Coupling`] holds one kernel value per `(emitter cell, receiver
//! cell)` pair in emitter-major order. Point entities contribute a
//! single cell. Applying a coupling to an emitter's per-cell output
//! sums over the emitter cells and yields an [`Incident`] buffer with
//! one entry per receiver cell.

use num_complex::Complex64;
use ricochet_core::field::{accumulate, finite_or_zero};
use ricochet_core::geometry::{displacement, dot, norm};
use ricochet_core::{FieldVector, Incident, Position, PropagationError, ZERO_FIELD};

use crate::kernel::Kernel;

/// Kernel values of a coupling, emitter-major.
#[derive(Clone, Debug, PartialEq)]
pub enum CouplingValues {
    /// One complex scalar per cell pair.
    Scalar(Vec<Complex64>),
    /// One direction-resolved field per cell pair.
    Vector(Vec<FieldVector>),
}

/// Precomputed coupling from one entity to another.
#[derive(Clone, Debug, PartialEq)]
pub struct Coupling {
    emitter_cells: usize,
    receiver_cells: usize,
    values: CouplingValues,
    degenerate: usize,
}

impl Coupling {
    /// Scalar coupling: `kernel(|r_ij|)` for every cell pair.
    pub fn scalar(
        kernel: &dyn Kernel,
        k0: f64,
        emitters: &[Position],
        receivers: &[Position],
    ) -> Self {
        let mut degenerate = 0;
        let mut values = Vec::with_capacity(emitters.len() * receivers.len());
        for e in emitters {
            for r in receivers {
                let raw = kernel.evaluate(k0, norm(&displacement(e, r)));
                let value = finite_or_zero(raw);
                if value != raw {
                    degenerate += 1;
                }
                values.push(value);
            }
        }
        Self {
            emitter_cells: emitters.len(),
            receiver_cells: receivers.len(),
            values: CouplingValues::Scalar(values),
            degenerate,
        }
    }

    /// Direction-resolved coupling: `kernel(|r_ij|) · r̂_ij` for every
    /// cell pair, with `r̂` pointing from emitter cell to receiver cell.
    pub fn vector(
        kernel: &dyn Kernel,
        k0: f64,
        emitters: &[Position],
        receivers: &[Position],
    ) -> Self {
        let mut degenerate = 0;
        let mut values = Vec::with_capacity(emitters.len() * receivers.len());
        for e in emitters {
            for r in receivers {
                let raw = kernel.evaluate_vector(k0, &displacement(e, r));
                let value = raw.map(finite_or_zero);
                if value != raw {
                    degenerate += 1;
                }
                values.push(value);
            }
        }
        Self {
            emitter_cells: emitters.len(),
            receiver_cells: receivers.len(),
            values: CouplingValues::Vector(values),
            degenerate,
        }
    }

    /// Plane-wave coupling from a single virtual emitter cell.
    ///
    /// Each receiver cell at `p` gets `exp(i·k·|n̂·(p − origin)|)`, the
    /// phase accumulated along the propagation direction `n̂`.
    pub fn plane_wave(
        origin: &Position,
        direction: &[f64; 3],
        wavenumber: f64,
        receivers: &[Position],
    ) -> Self {
        let values = receivers
            .iter()
            .map(|p| {
                let projected = dot(direction, &displacement(origin, p)).abs();
                finite_or_zero(Complex64::new(0.0, wavenumber * projected).exp())
            })
            .collect();
        Self {
            emitter_cells: 1,
            receiver_cells: receivers.len(),
            values: CouplingValues::Scalar(values),
            degenerate: 0,
        }
    }

    /// Number of emitter cells (rows).
    pub fn emitter_cells(&self) -> usize {
        self.emitter_cells
    }

    /// Number of receiver cells (columns).
    pub fn receiver_cells(&self) -> usize {
        self.receiver_cells
    }

    /// Whether the coupling is direction-resolved.
    pub fn is_vector(&self) -> bool {
        matches!(self.values, CouplingValues::Vector(_))
    }

    /// Raw kernel values.
    pub fn values(&self) -> &CouplingValues {
        &self.values
    }

    /// Entries that were non-finite and normalised to zero.
    pub fn degenerate_entries(&self) -> usize {
        self.degenerate
    }

    /// Scalar value for a cell pair, if this is a scalar coupling.
    pub fn scalar_at(&self, emitter_cell: usize, receiver_cell: usize) -> Option<Complex64> {
        match &self.values {
            CouplingValues::Scalar(v) if emitter_cell < self.emitter_cells => v
                .get(emitter_cell * self.receiver_cells + receiver_cell)
                .copied(),
            _ => None,
        }
    }

    /// Vector value for a cell pair, if this is a vector coupling.
    pub fn vector_at(&self, emitter_cell: usize, receiver_cell: usize) -> Option<FieldVector> {
        match &self.values {
            CouplingValues::Vector(v) if emitter_cell < self.emitter_cells => v
                .get(emitter_cell * self.receiver_cells + receiver_cell)
                .copied(),
            _ => None,
        }
    }

    /// Push an emitter's per-cell output through the coupling.
    ///
    /// Returns the field at each receiver cell, summed over emitter
    /// cells and weighted by each emitter cell's output amplitude.
    pub fn apply(&self, emission: &[Complex64]) -> Result<Incident, PropagationError> {
        if emission.len() != self.emitter_cells {
            return Err(PropagationError::ShapeMismatch {
                expected: self.emitter_cells,
                actual: emission.len(),
            });
        }
        let n = self.receiver_cells;
        if n == 0 {
            return Ok(match &self.values {
                CouplingValues::Scalar(_) => Incident::Scalar(Vec::new()),
                CouplingValues::Vector(_) => Incident::Vector(Vec::new()),
            });
        }
        match &self.values {
            CouplingValues::Scalar(values) => {
                let mut out = vec![Complex64::new(0.0, 0.0); n];
                for (row, &amp) in values.chunks_exact(n).zip(emission) {
                    for (o, &k) in out.iter_mut().zip(row) {
                        *o += amp * k;
                    }
                }
                Ok(Incident::Scalar(out))
            }
            CouplingValues::Vector(values) => {
                let mut out = vec![ZERO_FIELD; n];
                for (row, &amp) in values.chunks_exact(n).zip(emission) {
                    for (o, k) in out.iter_mut().zip(row) {
                        accumulate(o, &k.map(|c| amp * c));
                    }
                }
                Ok(Incident::Vector(out))
            }
        }
    }
}
