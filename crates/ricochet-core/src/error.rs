//! Error types raised while building geometry and propagating fields.
//!
//! Organised by subsystem like the rest of the workspace: geometry
//! (construction and coupling evaluation) and propagation (applying a
//! cached coupling). Registration and experiment errors live in the
//! engine crate, which wraps these.

use std::error::Error;
use std::fmt;

use crate::id::EntityId;

/// Errors arising from entity geometry or coupling evaluation.
#[derive(Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// A coupling between two entities evaluated to a non-finite value
    /// (coincident points). Only raised under the reject policy; the
    /// default policy normalises such values to zero.
    Degenerate {
        /// The emitting entity.
        emitter: EntityId,
        /// The receiving entity.
        receiver: EntityId,
        /// Number of coupling entries that were non-finite.
        entries: usize,
    },
    /// A grid was constructed with zero cells.
    EmptyGrid,
    /// A position component is NaN or infinite.
    NonFinitePosition {
        /// Index of the offending position within its grid.
        index: usize,
    },
    /// The declared grid shape does not match the number of positions.
    ShapeMismatch {
        /// Cells implied by the shape.
        expected: usize,
        /// Positions supplied.
        actual: usize,
    },
    /// A reflector pattern is malformed.
    InvalidPattern {
        /// Description of the problem.
        reason: String,
    },
    /// A plane-wave generator was given a zero or non-finite wave vector.
    ZeroWaveVector,
    /// A modulation wavenumber is NaN, infinite, zero, or negative.
    InvalidWavenumber {
        /// The invalid value.
        value: f64,
    },
    /// A cell pitch is non-finite or negative, or zero along an axis
    /// with more than one cell.
    InvalidPitch {
        /// Spacing along x.
        dx: f64,
        /// Spacing along y.
        dy: f64,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degenerate {
                emitter,
                receiver,
                entries,
            } => write!(
                f,
                "degenerate coupling {emitter} -> {receiver}: {entries} non-finite entries"
            ),
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::NonFinitePosition { index } => {
                write!(f, "position {index} has a non-finite component")
            }
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "grid shape implies {expected} cells, got {actual} positions")
            }
            Self::InvalidPattern { reason } => write!(f, "invalid pattern: {reason}"),
            Self::ZeroWaveVector => write!(f, "wave vector must be finite and non-zero"),
            Self::InvalidWavenumber { value } => {
                write!(f, "wavenumber must be finite and positive, got {value}")
            }
            Self::InvalidPitch { dx, dy } => write!(f, "invalid cell pitch ({dx}, {dy})"),
        }
    }
}

impl Error for GeometryError {}

/// Errors from a single propagation hop.
///
/// These are programmer errors: the requested emitter/receiver pair has
/// no coupling, or a handle does not name a registered entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropagationError {
    /// No coupling is defined for the pair (probe as emitter, plane-wave
    /// generator as receiver, or an entity paired with itself).
    NoCoupling {
        /// The requested emitter.
        emitter: EntityId,
        /// The requested receiver.
        receiver: EntityId,
    },
    /// The handle does not name a registered entity.
    UnknownEntity {
        /// The unknown handle.
        id: EntityId,
    },
    /// The entity never emits (field probes).
    NotAnEmitter {
        /// The offending entity.
        id: EntityId,
    },
    /// The entity never receives (plane-wave generators).
    NotAReceiver {
        /// The offending entity.
        id: EntityId,
    },
    /// A buffer's cell count disagrees with the coupling or entity shape.
    ShapeMismatch {
        /// Cells the consumer expected.
        expected: usize,
        /// Cells actually supplied.
        actual: usize,
    },
    /// The receiver cannot consume this kind of incident field
    /// (a direction-resolved field sent into a scalar receiver).
    UnsupportedIncident {
        /// The kind of incident the receiver accepts.
        expected: &'static str,
    },
}

impl fmt::Display for PropagationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCoupling { emitter, receiver } => {
                write!(f, "no coupling defined from entity {emitter} to entity {receiver}")
            }
            Self::UnknownEntity { id } => write!(f, "entity {id} is not registered"),
            Self::NotAnEmitter { id } => write!(f, "entity {id} cannot emit"),
            Self::NotAReceiver { id } => write!(f, "entity {id} cannot receive"),
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
            Self::UnsupportedIncident { expected } => {
                write!(f, "receiver only accepts {expected} incident fields")
            }
        }
    }
}

impl Error for PropagationError {}
