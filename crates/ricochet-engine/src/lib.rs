//! Propagation engine for Ricochet.
//!
//! A [`Container`] owns the registered entities and a cache of pairwise
//! couplings computed once at registration. Experiments walk every
//! admissible scattering route up to a hop bound, pushing the source's
//! field hop by hop and collecting terminal contributions at the driving
//! antenna (and optionally a field probe).
//!
//! Routes are produced lazily by [`RouteEnumerator`], so memory stays
//! bounded regardless of pool size or depth. Long runs can be bounded
//! with [`ExperimentConfig::route_cap`] or interrupted with a
//! [`CancelToken`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod cancel;
pub mod config;
pub mod container;
pub mod experiment;
pub mod metrics;
pub mod route;

pub use cache::CouplingCache;
pub use cancel::CancelToken;
pub use config::{ConfigError, ContainerConfig, DegeneratePolicy, ExperimentConfig};
pub use container::Container;
pub use experiment::{ExperimentError, ExperimentPhase, ExperimentReport};
pub use metrics::ExperimentMetrics;
pub use route::{Route, RouteEnumerator, Routes};
