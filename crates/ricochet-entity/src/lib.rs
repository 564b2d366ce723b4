//! Scattering entities for Ricochet.
//!
//! Every participant in a simulation is an [`Entity`]: a tagged variant
//! over the physical roles (driving antenna, passive dipole, plane-wave
//! generator, reflector array, field probe). Behaviour is selected through
//! one dispatch table ([`Capabilities`] and [`coupling_mode`]) and two
//! capability traits ([`Emitter`], [`Receiver`]) instead of comparing
//! runtime types at each call site.
//!
//! State transitions are explicit: a reflector or dipole recomputes its
//! re-radiated output whenever its received field changes, and
//! [`Receiver::receive`] clears an overwriting receiver before adding
//! the new illumination.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod antenna;
pub mod dipole;
pub mod entity;
pub mod pattern;
pub mod plane_wave;
pub mod probe;
pub mod reflector;

pub use antenna::Antenna;
pub use dipole::Dipole;
pub use entity::{
    coupling_mode, Accumulation, Capabilities, CouplingMode, Emitter, Entity, EntityKind,
    Receiver, Role,
};
pub use pattern::{Pattern, PatternGenerator};
pub use plane_wave::PlaneWaveGenerator;
pub use probe::FieldRecorder;
pub use reflector::{ReflectorArray, ReflectorArrayBuilder};
