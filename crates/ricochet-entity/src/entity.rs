//! The [`Entity`] variant, its role/capability table, and the
//! [`Emitter`] / [`Receiver`] traits.

use num_complex::Complex64;
use ricochet_core::{Incident, Position, PropagationError};
use std::fmt;

use crate::antenna::Antenna;
use crate::dipole::Dipole;
use crate::plane_wave::PlaneWaveGenerator;
use crate::probe::FieldRecorder;
use crate::reflector::ReflectorArray;

/// Concrete entity type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Driving transceiver antenna.
    Antenna,
    /// Passive point dipole.
    Dipole,
    /// Plane-wave source.
    PlaneWave,
    /// Binary-modulated reflector array.
    Reflector,
    /// Field probe grid.
    Probe,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Antenna => "antenna",
            Self::Dipole => "dipole",
            Self::PlaneWave => "plane_wave",
            Self::Reflector => "reflector",
            Self::Probe => "probe",
        };
        f.write_str(name)
    }
}

/// Engine role an entity plays in route enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// The single driving antenna; every route terminates here.
    Driver,
    /// Bounce-capable scatterer, eligible for route hops.
    Bounce,
    /// The optional field probe.
    Probe,
    /// The optional plane-wave source.
    PlaneWave,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Driver => "driving antenna",
            Self::Bounce => "bounce entity",
            Self::Probe => "probe",
            Self::PlaneWave => "plane-wave generator",
        };
        f.write_str(name)
    }
}

/// How a receiver combines successive incident fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accumulation {
    /// Running sum of every contribution.
    Sum,
    /// Only the most recent illumination is kept.
    Overwrite,
    /// The entity never receives.
    None,
}

/// What an entity kind can do. One row of the dispatch table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    /// Has an outgoing field.
    pub emits: bool,
    /// Has a receiving aperture.
    pub receives: bool,
    /// Combination rule for incoming fields.
    pub accumulation: Accumulation,
    /// Stores a 3-axis field per cell rather than a complex scalar.
    pub vector_state: bool,
    /// Occupies a grid of cells rather than a single point.
    pub array: bool,
}

impl EntityKind {
    /// The dispatch table.
    pub fn capabilities(self) -> Capabilities {
        match self {
            Self::Antenna => Capabilities {
                emits: true,
                receives: true,
                accumulation: Accumulation::Sum,
                vector_state: true,
                array: false,
            },
            Self::Dipole => Capabilities {
                emits: true,
                receives: true,
                accumulation: Accumulation::Overwrite,
                vector_state: true,
                array: false,
            },
            Self::PlaneWave => Capabilities {
                emits: true,
                receives: false,
                accumulation: Accumulation::None,
                vector_state: false,
                array: false,
            },
            Self::Reflector => Capabilities {
                emits: true,
                receives: true,
                accumulation: Accumulation::Overwrite,
                vector_state: false,
                array: true,
            },
            Self::Probe => Capabilities {
                emits: false,
                receives: true,
                accumulation: Accumulation::Sum,
                vector_state: true,
                array: true,
            },
        }
    }

    /// Engine role of this kind.
    pub fn role(self) -> Role {
        match self {
            Self::Antenna => Role::Driver,
            Self::Dipole | Self::Reflector => Role::Bounce,
            Self::Probe => Role::Probe,
            Self::PlaneWave => Role::PlaneWave,
        }
    }
}

/// Form of the kernel cached for an `(emitter, receiver)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CouplingMode {
    /// Complex scalar per cell pair.
    Scalar,
    /// Direction-resolved field per cell pair.
    Vector,
    /// Plane-wave phase per receiver cell.
    PlaneWave,
}

/// Kernel form for an `(emitter, receiver)` pair, or `None` when no
/// coupling exists (probe as emitter, plane wave as receiver).
///
/// Point-to-point and anything-into-reflector couplings are scalar.
/// Array emitters feeding a point, and anything feeding a probe, are
/// direction-resolved.
pub fn coupling_mode(emitter: EntityKind, receiver: EntityKind) -> Option<CouplingMode> {
    let tx = emitter.capabilities();
    let rx = receiver.capabilities();
    if !tx.emits || !rx.receives {
        return None;
    }
    if emitter == EntityKind::PlaneWave {
        return Some(CouplingMode::PlaneWave);
    }
    let mode = match (tx.array, rx.vector_state, rx.array) {
        (_, false, _) => CouplingMode::Scalar,
        (_, true, true) => CouplingMode::Vector,
        (true, true, false) => CouplingMode::Vector,
        (false, true, false) => CouplingMode::Scalar,
    };
    Some(mode)
}

/// An entity with an outgoing field.
pub trait Emitter {
    /// Current per-cell output amplitude (one entry for point entities).
    fn emission(&self) -> &[Complex64];
}

/// An entity with a receiving aperture.
///
/// Implementors only know how to add an incident field to their state.
/// Whether a new illumination replaces or adds to the old one comes from
/// the [`Capabilities::accumulation`] row of the entity's kind.
pub trait Receiver {
    /// Kind whose capability row governs [`Receiver::receive`].
    fn kind(&self) -> EntityKind;

    /// Add an incident field to the received state and recompute any
    /// derived output.
    fn accumulate(&mut self, incident: Incident) -> Result<(), PropagationError>;

    /// Reset received state (and any derived output) to zero.
    fn clear(&mut self);

    /// Fold an incident field into the received state under the kind's
    /// accumulation rule. An overwriting receiver is cleared first, so a
    /// rejected incident leaves it zeroed.
    fn receive(&mut self, incident: Incident) -> Result<(), PropagationError> {
        if self.kind().capabilities().accumulation == Accumulation::Overwrite {
            self.clear();
        }
        self.accumulate(incident)
    }
}

/// A registered simulation participant.
#[derive(Clone, Debug)]
pub enum Entity {
    /// Driving transceiver antenna.
    Antenna(Antenna),
    /// Passive point dipole.
    Dipole(Dipole),
    /// Plane-wave source.
    PlaneWave(PlaneWaveGenerator),
    /// Binary-modulated reflector array.
    Reflector(ReflectorArray),
    /// Field probe grid.
    Probe(FieldRecorder),
}

impl Entity {
    /// Concrete kind.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Antenna(_) => EntityKind::Antenna,
            Self::Dipole(_) => EntityKind::Dipole,
            Self::PlaneWave(_) => EntityKind::PlaneWave,
            Self::Reflector(_) => EntityKind::Reflector,
            Self::Probe(_) => EntityKind::Probe,
        }
    }

    /// Engine role.
    pub fn role(&self) -> Role {
        self.kind().role()
    }

    /// Cell positions in canonical order. A plane-wave generator
    /// reports its phase origin.
    pub fn positions(&self) -> &[Position] {
        match self {
            Self::Antenna(a) => std::slice::from_ref(a.position()),
            Self::Dipole(d) => std::slice::from_ref(d.position()),
            Self::PlaneWave(p) => std::slice::from_ref(p.origin()),
            Self::Reflector(r) => r.grid().positions(),
            Self::Probe(p) => p.grid().positions(),
        }
    }

    /// Number of cells.
    pub fn cells(&self) -> usize {
        self.positions().len()
    }

    /// Emitter view, or `None` for probes.
    pub fn as_emitter(&self) -> Option<&dyn Emitter> {
        match self {
            Self::Antenna(a) => Some(a),
            Self::Dipole(d) => Some(d),
            Self::PlaneWave(p) => Some(p),
            Self::Reflector(r) => Some(r),
            Self::Probe(_) => None,
        }
    }

    /// Receiver view, or `None` for plane-wave generators.
    pub fn as_receiver_mut(&mut self) -> Option<&mut dyn Receiver> {
        match self {
            Self::Antenna(a) => Some(a),
            Self::Dipole(d) => Some(d),
            Self::PlaneWave(_) => None,
            Self::Reflector(r) => Some(r),
            Self::Probe(p) => Some(p),
        }
    }

    /// Reset all received and derived state.
    pub fn clear(&mut self) {
        if let Some(rx) = self.as_receiver_mut() {
            rx.clear();
        }
    }

    /// The antenna, if this is one.
    pub fn as_antenna(&self) -> Option<&Antenna> {
        match self {
            Self::Antenna(a) => Some(a),
            _ => None,
        }
    }

    /// The dipole, if this is one.
    pub fn as_dipole(&self) -> Option<&Dipole> {
        match self {
            Self::Dipole(d) => Some(d),
            _ => None,
        }
    }

    /// The plane-wave generator, if this is one.
    pub fn as_plane_wave(&self) -> Option<&PlaneWaveGenerator> {
        match self {
            Self::PlaneWave(p) => Some(p),
            _ => None,
        }
    }

    /// The reflector array, if this is one.
    pub fn as_reflector(&self) -> Option<&ReflectorArray> {
        match self {
            Self::Reflector(r) => Some(r),
            _ => None,
        }
    }

    /// Mutable reflector array access, for swapping patterns between runs.
    pub fn as_reflector_mut(&mut self) -> Option<&mut ReflectorArray> {
        match self {
            Self::Reflector(r) => Some(r),
            _ => None,
        }
    }

    /// The field probe, if this is one.
    pub fn as_probe(&self) -> Option<&FieldRecorder> {
        match self {
            Self::Probe(p) => Some(p),
            _ => None,
        }
    }
}

impl From<Antenna> for Entity {
    fn from(a: Antenna) -> Self {
        Self::Antenna(a)
    }
}

impl From<Dipole> for Entity {
    fn from(d: Dipole) -> Self {
        Self::Dipole(d)
    }
}

impl From<PlaneWaveGenerator> for Entity {
    fn from(p: PlaneWaveGenerator) -> Self {
        Self::PlaneWave(p)
    }
}

impl From<ReflectorArray> for Entity {
    fn from(r: ReflectorArray) -> Self {
        Self::Reflector(r)
    }
}

impl From<FieldRecorder> for Entity {
    fn from(p: FieldRecorder) -> Self {
        Self::Probe(p)
    }
}
