//! Coupling kernels for Ricochet.
//!
//! The [`Kernel`] trait is the pure, stateless seam through which every
//! pairwise coupling is evaluated. [`FreeSpace`] provides the 2-D
//! (Hankel) and 3-D (dipole) free-space Green's functions, and
//! [`Coupling`] turns a kernel plus two sets of positions into the
//! dense matrix the engine caches and applies on every hop.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bessel;
pub mod coupling;
pub mod kernel;

pub use coupling::{Coupling, CouplingValues};
pub use kernel::{Dimension, FreeSpace, Kernel};
