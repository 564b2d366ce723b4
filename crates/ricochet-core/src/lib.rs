//! Core types for the Ricochet multi-bounce scattering simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary shared by the rest of the workspace:
//! entity handles, positions and grids, complex field vectors, incident
//! field buffers, and the error types raised at geometry and
//! propagation time.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod geometry;
pub mod id;

pub use error::{GeometryError, PropagationError};
pub use field::{Axis, FieldVector, Incident, ZERO_FIELD};
pub use geometry::{Grid, Position};
pub use id::EntityId;
pub use num_complex::Complex64;
