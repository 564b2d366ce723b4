//! Ricochet: multi-bounce electromagnetic scattering among antennas,
//! reconfigurable reflector arrays and field probes.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Ricochet sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use ricochet::prelude::*;
//!
//! let mut scene = Container::new(ContainerConfig::from_frequency(2.7e9)).unwrap();
//! let k0 = scene.config().k0;
//! let antenna = scene.register(Antenna::new([0.0, 0.0, 0.0], 1.0)).unwrap();
//! let pattern = Pattern::uniform(4, 4, true).unwrap();
//! scene
//!     .register(ReflectorArray::new([0.0, 0.0, 1.0], 0.02, 0.02, k0, pattern).unwrap())
//!     .unwrap();
//!
//! let config = ExperimentConfig { max_degree: 1, ..Default::default() };
//! let report = scene.run_experiment(antenna, &config).unwrap();
//! assert_eq!(report.metrics.routes(), 1);
//! assert!(scene.antenna().unwrap().s11() > 0.0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ricochet-core` | IDs, geometry, field vectors, error types |
//! | [`kernel`] | `ricochet-kernel` | Green's functions and coupling matrices |
//! | [`entity`] | `ricochet-entity` | Antennas, dipoles, reflectors, probes, plane waves |
//! | [`engine`] | `ricochet-engine` | Container, route enumeration, experiments |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`ricochet-core`).
///
/// Entity handles, grids, complex field vectors, and the geometry and
/// propagation error types.
pub use ricochet_core as types;

/// Kernels and couplings (`ricochet-kernel`).
///
/// The [`kernel::Kernel`] trait is the extension point for media other
/// than free space.
pub use ricochet_kernel as kernel;

/// Scattering entities (`ricochet-entity`).
pub use ricochet_entity as entity;

/// Propagation engine (`ricochet-engine`).
///
/// [`engine::Container`] registers entities and runs experiments.
pub use ricochet_engine as engine;

/// Common imports for typical Ricochet usage.
///
/// ```rust
/// use ricochet::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use ricochet_core::{Axis, Complex64, EntityId, FieldVector, Grid, Position};

    // Errors
    pub use ricochet_core::{GeometryError, PropagationError};
    pub use ricochet_engine::{ConfigError, ExperimentError};

    // Kernels
    pub use ricochet_kernel::{Dimension, FreeSpace, Kernel};

    // Entities
    pub use ricochet_entity::{
        Antenna, Dipole, Entity, FieldRecorder, Pattern, PatternGenerator, PlaneWaveGenerator,
        ReflectorArray,
    };

    // Engine
    pub use ricochet_engine::{
        CancelToken, Container, ContainerConfig, DegeneratePolicy, ExperimentConfig,
        ExperimentMetrics, ExperimentReport,
    };
}
