//! Per-run counters for the experiment loop.

/// Timing and volume counters collected during one experiment.
///
/// Durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExperimentMetrics {
    /// Wall-clock time for the whole run, in microseconds.
    pub total_us: u64,
    /// Routes walked at each degree; index 0 is degree 1.
    pub routes_per_degree: Vec<u64>,
    /// Single-hop propagations performed.
    pub propagations: u64,
    /// Propagations into the probe.
    pub probe_samples: u64,
}

impl ExperimentMetrics {
    /// Total routes walked across all degrees.
    pub fn routes(&self) -> u64 {
        self.routes_per_degree.iter().sum()
    }
}
