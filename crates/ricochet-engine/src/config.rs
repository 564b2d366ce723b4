//! Container and experiment configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use ricochet_core::{EntityId, GeometryError};
use ricochet_entity::Role;
use ricochet_kernel::Dimension;

// ── DegeneratePolicy ───────────────────────────────────────────────

/// What registration does with couplings that evaluate to a non-finite
/// value (coincident points).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Replace non-finite entries with zero and log a warning.
    #[default]
    Normalize,
    /// Refuse the registration with [`GeometryError::Degenerate`].
    Reject,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during configuration validation or registration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The first registered entity must be the driving antenna.
    FirstNotAntenna,
    /// A single-instance role was registered twice.
    DuplicateRole {
        /// The role already taken.
        role: Role,
    },
    /// `k0` is NaN, infinite, zero, or negative.
    InvalidWavenumber {
        /// The invalid value.
        value: f64,
    },
    /// `max_degree` is zero.
    InvalidMaxDegree,
    /// The run would walk more routes than the configured cap.
    RouteCapExceeded {
        /// Routes the run would walk (saturated at `u64::MAX`).
        routes: u64,
        /// The configured cap.
        cap: u64,
    },
    /// `record` was requested but no probe is registered.
    NoProbe,
    /// The experiment source is not a registered entity.
    UnknownSource {
        /// The offending handle.
        id: EntityId,
    },
    /// The experiment source has no outgoing field.
    SourceCannotEmit {
        /// The offending handle.
        id: EntityId,
    },
    /// The handle does not name a registered entity.
    UnknownEntity {
        /// The offending handle.
        id: EntityId,
    },
    /// A pattern was addressed to an entity that is not a reflector.
    NotAReflector {
        /// The offending handle.
        id: EntityId,
    },
    /// Entity count exceeds `u32::MAX`.
    TooManyEntities,
    /// Geometry evaluation failed during registration.
    Geometry(GeometryError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstNotAntenna => {
                write!(f, "the first registered entity must be the driving antenna")
            }
            Self::DuplicateRole { role } => write!(f, "a {role} is already registered"),
            Self::InvalidWavenumber { value } => {
                write!(f, "k0 must be finite and positive, got {value}")
            }
            Self::InvalidMaxDegree => write!(f, "max_degree must be at least 1"),
            Self::RouteCapExceeded { routes, cap } => {
                write!(f, "run would walk {routes} routes, cap is {cap}")
            }
            Self::NoProbe => write!(f, "recording requested but no probe is registered"),
            Self::UnknownSource { id } => write!(f, "source {id} is not registered"),
            Self::SourceCannotEmit { id } => write!(f, "source {id} cannot emit"),
            Self::UnknownEntity { id } => write!(f, "entity {id} is not registered"),
            Self::NotAReflector { id } => write!(f, "entity {id} is not a reflector array"),
            Self::TooManyEntities => write!(f, "entity count exceeds u32::MAX"),
            Self::Geometry(e) => write!(f, "geometry: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Geometry(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GeometryError> for ConfigError {
    fn from(e: GeometryError) -> Self {
        Self::Geometry(e)
    }
}

// ── ContainerConfig ────────────────────────────────────────────────

/// Physical parameters shared by every coupling in a container.
#[derive(Clone, Debug, PartialEq)]
pub struct ContainerConfig {
    /// Free-space wavenumber `2π f / c`.
    pub k0: f64,
    /// Kernel dimensionality. Default: three.
    pub dimension: Dimension,
    /// Handling of non-finite couplings. Default: normalise to zero.
    pub degenerate: DegeneratePolicy,
}

impl ContainerConfig {
    /// Config for wavenumber `k0` with default dimension and policy.
    pub fn new(k0: f64) -> Self {
        Self {
            k0,
            ..Self::default()
        }
    }

    /// Config for a carrier frequency in hertz.
    pub fn from_frequency(hz: f64) -> Self {
        Self::new(2.0 * std::f64::consts::PI * hz / SPEED_OF_LIGHT)
    }

    /// Check that `k0` is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.k0.is_finite() || self.k0 <= 0.0 {
            return Err(ConfigError::InvalidWavenumber { value: self.k0 });
        }
        Ok(())
    }
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            k0: 1.0,
            dimension: Dimension::default(),
            degenerate: DegeneratePolicy::default(),
        }
    }
}

/// Speed of light in vacuum, m/s.
pub const SPEED_OF_LIGHT: f64 = 3e8;

// ── ExperimentConfig ───────────────────────────────────────────────

/// Parameters of a single experiment run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExperimentConfig {
    /// Longest route, in hops. Default: 4. Minimum: 1.
    pub max_degree: usize,
    /// Sample the probe directly from the source and after every route.
    pub record: bool,
    /// Upper bound on the total number of routes walked. `None` = no cap.
    pub route_cap: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            max_degree: 4,
            record: false,
            route_cap: None,
        }
    }
}

impl ExperimentConfig {
    /// Check structural invariants that do not depend on the container.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_degree == 0 {
            return Err(ConfigError::InvalidMaxDegree);
        }
        Ok(())
    }
}
