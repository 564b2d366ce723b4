//! Experiment state machine, report, and error types.

use std::error::Error;
use std::fmt;

use ricochet_core::PropagationError;

use crate::config::ConfigError;
use crate::metrics::ExperimentMetrics;

/// Where an experiment run is.
///
/// `Idle → Seeded → Expanding { 1 } → … → Expanding { max_degree } → Done`.
/// A failed or cancelled run stays in the phase it reached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExperimentPhase {
    /// No run started, or the container changed since the last one.
    #[default]
    Idle,
    /// The direct source-to-probe sample (if any) has been taken.
    Seeded,
    /// Walking routes of `degree` hops.
    Expanding {
        /// Hop count being walked.
        degree: usize,
    },
    /// Every degree has been walked.
    Done,
}

/// Outcome of a completed run.
#[derive(Clone, Debug, PartialEq)]
pub struct ExperimentReport {
    /// Terminal phase; always [`ExperimentPhase::Done`] for a returned report.
    pub phase: ExperimentPhase,
    /// Counters collected during the run.
    pub metrics: ExperimentMetrics,
}

/// Errors that abort an experiment run.
///
/// All of these are fatal to the run. Partial accumulations at the
/// antenna and probe are left in place; call
/// [`Container::clear`](crate::Container::clear) before retrying.
#[derive(Clone, Debug, PartialEq)]
pub enum ExperimentError {
    /// The run was misconfigured.
    Config(ConfigError),
    /// A hop failed.
    Propagation(PropagationError),
    /// The cancel token fired.
    Cancelled {
        /// Degree being walked when the run stopped.
        degree: usize,
        /// Routes fully walked before stopping, across all degrees.
        routes_completed: u64,
    },
}

impl fmt::Display for ExperimentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Propagation(e) => write!(f, "propagation: {e}"),
            Self::Cancelled {
                degree,
                routes_completed,
            } => write!(
                f,
                "cancelled at degree {degree} after {routes_completed} routes"
            ),
        }
    }
}

impl Error for ExperimentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Propagation(e) => Some(e),
            Self::Cancelled { .. } => None,
        }
    }
}

impl From<ConfigError> for ExperimentError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<PropagationError> for ExperimentError {
    fn from(e: PropagationError) -> Self {
        Self::Propagation(e)
    }
}
