//! Entity registry, coupling cache, and the experiment loop.
//!
//! Registration computes every coupling the new entity takes part in
//! before anything is committed, so a rejected registration leaves the
//! container unchanged. Propagation is a cache lookup plus one
//! matrix-vector product; the experiment loop is nothing more than a
//! sequence of propagations driven by [`RouteEnumerator`].

use std::time::Instant;

use ricochet_core::{EntityId, GeometryError, PropagationError};
use ricochet_entity::{
    coupling_mode, Antenna, CouplingMode, Entity, FieldRecorder, Pattern, Role,
};
use ricochet_kernel::{Coupling, FreeSpace, Kernel};
use tracing::{debug, info, trace, warn};

use crate::cache::CouplingCache;
use crate::cancel::CancelToken;
use crate::config::{ConfigError, ContainerConfig, DegeneratePolicy, ExperimentConfig};
use crate::experiment::{ExperimentError, ExperimentPhase, ExperimentReport};
use crate::metrics::ExperimentMetrics;
use crate::route::{RouteEnumerator, Routes};

/// Registry of simulation entities and their pairwise couplings.
///
/// Holds exactly one driving antenna (always [`EntityId(0)`](EntityId)),
/// at most one probe and at most one plane-wave generator. Every other
/// entity is bounce-capable and joins the route pool.
pub struct Container {
    config: ContainerConfig,
    kernel: Box<dyn Kernel>,
    entities: Vec<Entity>,
    cache: CouplingCache,
    pool: RouteEnumerator,
    antenna: Option<EntityId>,
    probe: Option<EntityId>,
    plane_wave: Option<EntityId>,
    phase: ExperimentPhase,
}

impl Container {
    /// Empty container using the free-space kernel for `config.dimension`.
    pub fn new(config: ContainerConfig) -> Result<Self, ConfigError> {
        let kernel = FreeSpace::new(config.dimension);
        Self::with_kernel(config, kernel)
    }

    /// Empty container using a caller-supplied kernel.
    pub fn with_kernel(config: ContainerConfig, kernel: impl Kernel) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            kernel: Box::new(kernel),
            entities: Vec::new(),
            cache: CouplingCache::new(),
            pool: RouteEnumerator::default(),
            antenna: None,
            probe: None,
            plane_wave: None,
            phase: ExperimentPhase::Idle,
        })
    }

    // ── Registration ───────────────────────────────────────────────

    /// Register an entity and compute its couplings to and from every
    /// entity already present.
    ///
    /// The first entity must be the driving antenna, and every position
    /// must be finite. No coupling is computed out of a probe or into a
    /// plane-wave generator.
    pub fn register(&mut self, entity: impl Into<Entity>) -> Result<EntityId, ConfigError> {
        let entity = entity.into();
        let kind = entity.kind();
        let role = kind.role();

        if self.entities.is_empty() && role != Role::Driver {
            return Err(ConfigError::FirstNotAntenna);
        }
        let taken = match role {
            Role::Driver => self.antenna.is_some(),
            Role::Probe => self.probe.is_some(),
            Role::PlaneWave => self.plane_wave.is_some(),
            Role::Bounce => false,
        };
        if taken {
            return Err(ConfigError::DuplicateRole { role });
        }
        if let Some(index) = entity
            .positions()
            .iter()
            .position(|p| p.iter().any(|c| !c.is_finite()))
        {
            return Err(GeometryError::NonFinitePosition { index }.into());
        }
        let id = u32::try_from(self.entities.len())
            .map(EntityId)
            .map_err(|_| ConfigError::TooManyEntities)?;

        let mut computed = Vec::with_capacity(2 * self.entities.len());
        for (i, other) in self.entities.iter().enumerate() {
            let other_id = EntityId(i as u32);
            if let Some(mode) = coupling_mode(kind, other.kind()) {
                let c = self.couple(mode, (id, &entity), (other_id, other))?;
                computed.push((id, other_id, c));
            }
            if let Some(mode) = coupling_mode(other.kind(), kind) {
                let c = self.couple(mode, (other_id, other), (id, &entity))?;
                computed.push((other_id, id, c));
            }
        }

        let couplings = computed.len();
        for (e, r, c) in computed {
            self.cache.insert(e, r, c);
        }
        match role {
            Role::Driver => self.antenna = Some(id),
            Role::Probe => self.probe = Some(id),
            Role::PlaneWave => self.plane_wave = Some(id),
            Role::Bounce => self.pool.push(id),
        }
        self.entities.push(entity);
        self.phase = ExperimentPhase::Idle;
        debug!(id = %id, kind = %kind, couplings, cells = self.entities[id.index()].cells(), "registered entity");
        Ok(id)
    }

    fn couple(
        &self,
        mode: CouplingMode,
        (emitter_id, emitter): (EntityId, &Entity),
        (receiver_id, receiver): (EntityId, &Entity),
    ) -> Result<Coupling, GeometryError> {
        let k0 = self.config.k0;
        let coupling = match (mode, emitter) {
            (CouplingMode::PlaneWave, Entity::PlaneWave(p)) => Coupling::plane_wave(
                p.origin(),
                &p.direction(),
                p.wavenumber(),
                receiver.positions(),
            ),
            (CouplingMode::Vector, _) => {
                Coupling::vector(&*self.kernel, k0, emitter.positions(), receiver.positions())
            }
            _ => Coupling::scalar(&*self.kernel, k0, emitter.positions(), receiver.positions()),
        };
        let entries = coupling.degenerate_entries();
        if entries > 0 {
            if self.config.degenerate == DegeneratePolicy::Reject {
                return Err(GeometryError::Degenerate {
                    emitter: emitter_id,
                    receiver: receiver_id,
                    entries,
                });
            }
            warn!(
                emitter = %emitter_id,
                receiver = %receiver_id,
                entries,
                "non-finite coupling entries normalised to zero"
            );
        }
        Ok(coupling)
    }

    // ── Accessors ──────────────────────────────────────────────────

    /// Container configuration.
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// Kernel used for point and array couplings.
    pub fn kernel(&self) -> &dyn Kernel {
        &*self.kernel
    }

    /// Number of registered entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entity by handle.
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    /// Every entity with its handle, in registration order.
    pub fn entities(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities
            .iter()
            .enumerate()
            .map(|(i, e)| (EntityId(i as u32), e))
    }

    /// Handle of the driving antenna.
    pub fn antenna_id(&self) -> Option<EntityId> {
        self.antenna
    }

    /// Handle of the probe.
    pub fn probe_id(&self) -> Option<EntityId> {
        self.probe
    }

    /// Handle of the plane-wave generator.
    pub fn plane_wave_id(&self) -> Option<EntityId> {
        self.plane_wave
    }

    /// The driving antenna.
    pub fn antenna(&self) -> Option<&Antenna> {
        self.antenna
            .and_then(|id| self.entity(id))
            .and_then(Entity::as_antenna)
    }

    /// The probe.
    pub fn probe(&self) -> Option<&FieldRecorder> {
        self.probe
            .and_then(|id| self.entity(id))
            .and_then(Entity::as_probe)
    }

    /// Cached coupling for `emitter → receiver`.
    pub fn coupling(&self, emitter: EntityId, receiver: EntityId) -> Option<&Coupling> {
        self.cache.get(emitter, receiver)
    }

    /// The coupling cache.
    pub fn cache(&self) -> &CouplingCache {
        &self.cache
    }

    /// Bounce-capable entities routes are drawn from.
    pub fn route_pool(&self) -> &RouteEnumerator {
        &self.pool
    }

    /// Lazily enumerate routes of `degree` hops.
    pub fn routes(&self, degree: usize) -> Routes<'_> {
        self.pool.routes(degree)
    }

    /// Phase reached by the most recent run.
    pub fn phase(&self) -> ExperimentPhase {
        self.phase
    }

    /// Swap the modulation pattern of reflector `id`.
    ///
    /// This is the only mutation a registered entity accepts from
    /// outside the engine. Cell positions are untouched, so every cached
    /// coupling stays valid.
    pub fn set_pattern(&mut self, id: EntityId, pattern: Pattern) -> Result<(), ConfigError> {
        let reflector = self
            .entities
            .get_mut(id.index())
            .ok_or(ConfigError::UnknownEntity { id })?
            .as_reflector_mut()
            .ok_or(ConfigError::NotAReflector { id })?;
        reflector.set_pattern(pattern)?;
        debug!(id = %id, "reflector pattern replaced");
        Ok(())
    }

    /// Zero every entity's received and derived state.
    pub fn clear(&mut self) {
        for e in &mut self.entities {
            e.clear();
        }
        self.phase = ExperimentPhase::Idle;
    }

    // ── Propagation ────────────────────────────────────────────────

    /// Push `emitter`'s current output through the cached coupling into
    /// `receiver`. Only `receiver` is mutated.
    pub fn propagate(&mut self, emitter: EntityId, receiver: EntityId) -> Result<(), PropagationError> {
        let tx = self
            .entities
            .get(emitter.index())
            .ok_or(PropagationError::UnknownEntity { id: emitter })?;
        let emission = tx
            .as_emitter()
            .ok_or(PropagationError::NotAnEmitter { id: emitter })?
            .emission();
        let rx = self
            .entities
            .get(receiver.index())
            .ok_or(PropagationError::UnknownEntity { id: receiver })?;
        if !rx.kind().capabilities().receives {
            return Err(PropagationError::NotAReceiver { id: receiver });
        }
        let incident = self
            .cache
            .get(emitter, receiver)
            .ok_or(PropagationError::NoCoupling { emitter, receiver })?
            .apply(emission)?;
        self.entities
            .get_mut(receiver.index())
            .and_then(Entity::as_receiver_mut)
            .ok_or(PropagationError::NotAReceiver { id: receiver })?
            .receive(incident)
    }

    // ── Experiments ────────────────────────────────────────────────

    /// Run one experiment seeded from `source`.
    pub fn run_experiment(
        &mut self,
        source: EntityId,
        config: &ExperimentConfig,
    ) -> Result<ExperimentReport, ExperimentError> {
        self.run_experiment_with_cancel(source, config, &CancelToken::new())
    }

    /// Run one experiment, checking `cancel` before every route.
    ///
    /// For each degree `1..=max_degree`, every route is walked from a
    /// fresh start at `source`, then its last entity reports into the
    /// antenna (and the probe, when recording). Routes whose first hop
    /// would be `source` itself are skipped. Antenna and probe
    /// accumulations add to whatever earlier runs left behind.
    pub fn run_experiment_with_cancel(
        &mut self,
        source: EntityId,
        config: &ExperimentConfig,
        cancel: &CancelToken,
    ) -> Result<ExperimentReport, ExperimentError> {
        let start = Instant::now();
        config.validate()?;
        let src = self
            .entity(source)
            .ok_or(ConfigError::UnknownSource { id: source })?;
        if src.as_emitter().is_none() {
            return Err(ConfigError::SourceCannotEmit { id: source }.into());
        }
        let antenna = self.antenna.ok_or(ConfigError::FirstNotAntenna)?;
        let probe = match (config.record, self.probe) {
            (false, _) => None,
            (true, Some(p)) => Some(p),
            (true, None) => return Err(ConfigError::NoProbe.into()),
        };
        let pool = self.pool.clone();
        if let Some(cap) = config.route_cap {
            let routes = pool
                .count_up_to_from(source, config.max_degree)
                .unwrap_or(u64::MAX);
            if routes > cap {
                return Err(ConfigError::RouteCapExceeded { routes, cap }.into());
            }
        }

        info!(
            source = %source,
            max_degree = config.max_degree,
            record = config.record,
            pool = pool.pool().len(),
            "experiment started"
        );
        self.phase = ExperimentPhase::Idle;
        let mut metrics = ExperimentMetrics::default();

        if let Some(probe) = probe {
            self.propagate(source, probe)?;
            metrics.propagations += 1;
            metrics.probe_samples += 1;
        }
        self.phase = ExperimentPhase::Seeded;

        let mut completed = 0u64;
        for degree in 1..=config.max_degree {
            self.phase = ExperimentPhase::Expanding { degree };
            let mut walked = 0u64;
            for route in pool.routes(degree) {
                if cancel.is_cancelled() {
                    info!(degree, routes_completed = completed, "experiment cancelled");
                    return Err(ExperimentError::Cancelled {
                        degree,
                        routes_completed: completed,
                    });
                }
                if route.first() == Some(&source) {
                    continue;
                }
                trace!(degree, route = ?route, "walking route");
                let mut current = source;
                for &hop in &route {
                    self.propagate(current, hop)?;
                    current = hop;
                }
                self.propagate(current, antenna)?;
                metrics.propagations += route.len() as u64 + 1;
                if let Some(probe) = probe {
                    self.propagate(current, probe)?;
                    metrics.propagations += 1;
                    metrics.probe_samples += 1;
                }
                walked += 1;
                completed += 1;
            }
            metrics.routes_per_degree.push(walked);
        }

        self.phase = ExperimentPhase::Done;
        metrics.total_us = start.elapsed().as_micros() as u64;
        info!(
            routes = completed,
            propagations = metrics.propagations,
            total_us = metrics.total_us,
            "experiment finished"
        );
        Ok(ExperimentReport {
            phase: self.phase,
            metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ricochet_core::{Complex64, Grid, ZERO_FIELD};
    use ricochet_entity::{Dipole, PlaneWaveGenerator, ReflectorArray};

    const K0: f64 = 56.548_667_764_616_276;

    fn container() -> Container {
        Container::new(ContainerConfig::new(K0)).unwrap()
    }

    fn probe_at(z: f64) -> FieldRecorder {
        FieldRecorder::new(Grid::lattice(&[0.0, 0.05], &[0.0], &[z]).unwrap())
    }

    fn reflector() -> ReflectorArray {
        ReflectorArray::new([0.0, 0.0, 1.0], 0.02, 0.02, K0, Pattern::uniform(2, 2, true).unwrap())
            .unwrap()
    }

    #[test]
    fn first_entity_must_be_antenna() {
        let mut c = container();
        assert_eq!(
            c.register(Dipole::new([0.0; 3], 1.0)),
            Err(ConfigError::FirstNotAntenna)
        );
        assert!(c.is_empty());
        assert_eq!(c.register(Antenna::new([0.0; 3], 1.0)), Ok(EntityId(0)));
    }

    #[test]
    fn non_finite_positions_rejected_at_registration() {
        let mut c = container();
        assert_eq!(
            c.register(Antenna::new([f64::NAN, 0.0, 0.0], 1.0)),
            Err(ConfigError::Geometry(GeometryError::NonFinitePosition { index: 0 }))
        );
        assert!(c.is_empty());
        c.register(Antenna::new([0.0; 3], 1.0)).unwrap();
        assert_eq!(
            c.register(Dipole::new([0.0, f64::INFINITY, 0.0], 1.0)),
            Err(ConfigError::Geometry(GeometryError::NonFinitePosition { index: 0 }))
        );
        assert_eq!(c.len(), 1);
        assert!(c.route_pool().pool().is_empty());
    }

    #[test]
    fn single_instance_roles_enforced() {
        let mut c = container();
        c.register(Antenna::new([0.0; 3], 1.0)).unwrap();
        assert_eq!(
            c.register(Antenna::new([1.0, 0.0, 0.0], 1.0)),
            Err(ConfigError::DuplicateRole { role: Role::Driver })
        );
        c.register(probe_at(0.5)).unwrap();
        assert_eq!(
            c.register(probe_at(0.7)),
            Err(ConfigError::DuplicateRole { role: Role::Probe })
        );
        c.register(PlaneWaveGenerator::new([0.0; 3], [0.0, 0.0, K0], 1.0).unwrap())
            .unwrap();
        assert_eq!(
            c.register(PlaneWaveGenerator::new([0.0; 3], [K0, 0.0, 0.0], 1.0).unwrap()),
            Err(ConfigError::DuplicateRole {
                role: Role::PlaneWave
            })
        );
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn probe_never_emits_and_plane_wave_never_receives() {
        let mut c = container();
        let a = c.register(Antenna::new([0.0; 3], 1.0)).unwrap();
        let p = c.register(probe_at(0.5)).unwrap();
        let w = c
            .register(PlaneWaveGenerator::new([0.0; 3], [0.0, 0.0, K0], 1.0).unwrap())
            .unwrap();
        let r = c.register(reflector()).unwrap();

        assert!(c.coupling(a, p).is_some());
        assert!(c.coupling(r, p).is_some());
        assert!(c.coupling(w, p).is_some());
        for other in [a, w, r] {
            assert!(c.coupling(p, other).is_none());
            assert!(c.coupling(other, w).is_none());
        }
        assert!(c.coupling(a, a).is_none());
        // a<->r, a->p, r->p, w->a, w->p, w->r
        assert_eq!(c.cache().len(), 7);
        assert_eq!(c.route_pool().pool(), &[r]);
    }

    #[test]
    fn propagate_reports_invalid_pairs() {
        let mut c = container();
        let a = c.register(Antenna::new([0.0; 3], 1.0)).unwrap();
        let p = c.register(probe_at(0.5)).unwrap();
        let w = c
            .register(PlaneWaveGenerator::new([0.0; 3], [0.0, 0.0, K0], 1.0).unwrap())
            .unwrap();
        assert_eq!(
            c.propagate(p, a),
            Err(PropagationError::NotAnEmitter { id: p })
        );
        assert_eq!(
            c.propagate(a, w),
            Err(PropagationError::NotAReceiver { id: w })
        );
        assert_eq!(
            c.propagate(a, a),
            Err(PropagationError::NoCoupling {
                emitter: a,
                receiver: a
            })
        );
        assert_eq!(
            c.propagate(a, EntityId(9)),
            Err(PropagationError::UnknownEntity { id: EntityId(9) })
        );
    }

    #[test]
    fn coincident_entities_normalise_by_default() {
        let mut c = container();
        let a = c.register(Antenna::new([0.0; 3], 1.0)).unwrap();
        let d = c.register(Dipole::new([0.0; 3], 1.0)).unwrap();
        assert_eq!(c.cache().degenerate_entries(), 2);
        c.propagate(a, d).unwrap();
        assert_eq!(c.entity(d).and_then(Entity::as_dipole).unwrap().field(), ZERO_FIELD);
    }

    #[test]
    fn reject_policy_leaves_container_unchanged() {
        let config = ContainerConfig {
            degenerate: DegeneratePolicy::Reject,
            ..ContainerConfig::new(K0)
        };
        let mut c = Container::new(config).unwrap();
        c.register(Antenna::new([0.0; 3], 1.0)).unwrap();
        let err = c.register(Dipole::new([0.0; 3], 1.0)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Geometry(GeometryError::Degenerate { entries: 1, .. })
        ));
        assert_eq!(c.len(), 1);
        assert!(c.cache().is_empty());
        assert!(c.route_pool().pool().is_empty());
    }

    #[test]
    fn set_pattern_matches_a_fresh_registration() {
        let striped = Pattern::from_rows(&[vec![true, false], vec![false, true]]).unwrap();
        let mut swapped = container();
        let a = swapped.register(Antenna::new([0.0; 3], 1.0)).unwrap();
        let r = swapped.register(reflector()).unwrap();
        let positions = swapped.entity(r).unwrap().positions().to_vec();
        let couplings = swapped.cache().len();
        swapped.set_pattern(r, striped.clone()).unwrap();
        swapped.propagate(a, r).unwrap();

        let mut fresh = container();
        fresh.register(Antenna::new([0.0; 3], 1.0)).unwrap();
        fresh
            .register(ReflectorArray::new([0.0, 0.0, 1.0], 0.02, 0.02, K0, striped).unwrap())
            .unwrap();
        fresh.propagate(a, r).unwrap();

        assert_eq!(swapped.entity(r).unwrap().positions(), &positions[..]);
        assert_eq!(swapped.cache().len(), couplings);
        let got = swapped.entity(r).and_then(Entity::as_reflector).unwrap();
        let want = fresh.entity(r).and_then(Entity::as_reflector).unwrap();
        assert_eq!(got.received(), want.received());
        assert_eq!(got.output(), want.output());
    }

    #[test]
    fn set_pattern_rejects_bad_targets_and_shapes() {
        let mut c = container();
        let a = c.register(Antenna::new([0.0; 3], 1.0)).unwrap();
        let r = c.register(reflector()).unwrap();
        assert_eq!(
            c.set_pattern(a, Pattern::uniform(2, 2, false).unwrap()),
            Err(ConfigError::NotAReflector { id: a })
        );
        assert_eq!(
            c.set_pattern(EntityId(7), Pattern::uniform(2, 2, false).unwrap()),
            Err(ConfigError::UnknownEntity { id: EntityId(7) })
        );
        assert!(matches!(
            c.set_pattern(r, Pattern::uniform(1, 4, false).unwrap()),
            Err(ConfigError::Geometry(GeometryError::InvalidPattern { .. }))
        ));
        let kept = c.entity(r).and_then(Entity::as_reflector).unwrap();
        assert_eq!(kept.pattern(), &Pattern::uniform(2, 2, true).unwrap());
        assert_eq!(c.antenna_id(), Some(a));
    }

    #[test]
    fn plane_wave_drives_the_antenna_isotropically() {
        let mut c = container();
        let a = c.register(Antenna::new([0.0, 0.0, 0.25], 1.0)).unwrap();
        let w = c
            .register(PlaneWaveGenerator::new([0.0; 3], [0.0, 0.0, 4.0], 2.0).unwrap())
            .unwrap();
        c.propagate(w, a).unwrap();
        let expected = Complex64::new(0.0, 1.0).exp() * 2.0;
        for v in c.antenna().unwrap().field() {
            assert!((v - expected).norm() < 1e-12);
        }
    }

    #[test]
    fn run_rejects_bad_sources_and_missing_probe() {
        let mut c = container();
        let a = c.register(Antenna::new([0.0; 3], 1.0)).unwrap();
        let cfg = ExperimentConfig {
            record: true,
            ..ExperimentConfig::default()
        };
        assert_eq!(
            c.run_experiment(a, &cfg),
            Err(ExperimentError::Config(ConfigError::NoProbe))
        );
        assert_eq!(
            c.run_experiment(EntityId(4), &ExperimentConfig::default()),
            Err(ExperimentError::Config(ConfigError::UnknownSource {
                id: EntityId(4)
            }))
        );
        let p = c.register(probe_at(0.5)).unwrap();
        assert_eq!(
            c.run_experiment(p, &ExperimentConfig::default()),
            Err(ExperimentError::Config(ConfigError::SourceCannotEmit { id: p }))
        );
    }

    #[test]
    fn route_cap_checked_before_any_propagation() {
        let mut c = container();
        let a = c.register(Antenna::new([0.0; 3], 1.0)).unwrap();
        for i in 0..3 {
            c.register(Dipole::new([i as f64 + 1.0, 0.0, 0.0], 1.0)).unwrap();
        }
        let cfg = ExperimentConfig {
            max_degree: 3,
            route_cap: Some(20),
            ..ExperimentConfig::default()
        };
        assert_eq!(
            c.run_experiment(a, &cfg),
            Err(ExperimentError::Config(ConfigError::RouteCapExceeded {
                routes: 21,
                cap: 20
            }))
        );
        assert_eq!(c.antenna().unwrap().field(), ZERO_FIELD);
        assert_eq!(c.phase(), ExperimentPhase::Idle);
    }

    #[test]
    fn cancelled_run_stops_before_first_route() {
        let mut c = container();
        let a = c.register(Antenna::new([0.0; 3], 1.0)).unwrap();
        c.register(Dipole::new([1.0, 0.0, 0.0], 1.0)).unwrap();
        let token = CancelToken::new();
        token.cancel();
        assert_eq!(
            c.run_experiment_with_cancel(a, &ExperimentConfig::default(), &token),
            Err(ExperimentError::Cancelled {
                degree: 1,
                routes_completed: 0
            })
        );
        assert_eq!(c.phase(), ExperimentPhase::Expanding { degree: 1 });
    }

    #[test]
    fn metrics_count_routes_and_hops() {
        let mut c = container();
        let a = c.register(Antenna::new([0.0; 3], 1.0)).unwrap();
        c.register(Dipole::new([1.0, 0.0, 0.0], 1.0)).unwrap();
        c.register(Dipole::new([0.0, 1.0, 0.0], 1.0)).unwrap();
        c.register(probe_at(0.5)).unwrap();
        let cfg = ExperimentConfig {
            max_degree: 3,
            record: true,
            route_cap: None,
        };
        let report = c.run_experiment(a, &cfg).unwrap();
        assert_eq!(report.phase, ExperimentPhase::Done);
        assert_eq!(report.metrics.routes_per_degree, vec![2, 2, 2]);
        // 1 direct probe hop, then per route: degree hops + antenna + probe.
        assert_eq!(report.metrics.propagations, 1 + 2 * (3 + 4 + 5));
        assert_eq!(report.metrics.probe_samples, 7);
    }
}
