//! Overwrite versus accumulate semantics of single-hop propagation.

use ricochet_core::{Complex64, EntityId, Grid};
use ricochet_engine::{Container, ContainerConfig};
use ricochet_entity::{Antenna, Dipole, Entity, FieldRecorder, Pattern, ReflectorArray};
use ricochet_test_utils::{assert_complex_close, assert_field_close, K0_2_7_GHZ};

const TOL: f64 = 1e-12;

struct Scene {
    container: Container,
    antenna: EntityId,
    dipole: EntityId,
    reflector: EntityId,
    probe: EntityId,
}

fn scene() -> Scene {
    let mut container = Container::new(ContainerConfig::new(K0_2_7_GHZ)).unwrap();
    let antenna = container.register(Antenna::new([0.0; 3], 1.0)).unwrap();
    let dipole = container.register(Dipole::new([0.4, 0.0, 0.3], 2.0)).unwrap();
    let reflector = container
        .register(
            ReflectorArray::new(
                [0.0, 0.0, 1.0],
                0.05,
                0.05,
                K0_2_7_GHZ,
                Pattern::from_rows(&[vec![true, false]]).unwrap(),
            )
            .unwrap(),
        )
        .unwrap();
    let probe = container
        .register(FieldRecorder::new(
            Grid::lattice(&[-0.1, 0.1], &[0.2], &[0.6]).unwrap(),
        ))
        .unwrap();
    Scene {
        container,
        antenna,
        dipole,
        reflector,
        probe,
    }
}

fn reflector(c: &Container, id: EntityId) -> Vec<Complex64> {
    c.entity(id)
        .and_then(Entity::as_reflector)
        .unwrap()
        .received()
        .to_vec()
}

#[test]
fn reflector_keeps_only_the_last_illumination() {
    let mut s = scene();
    s.container.propagate(s.antenna, s.dipole).unwrap();
    s.container.propagate(s.dipole, s.reflector).unwrap();
    assert!(reflector(&s.container, s.reflector)
        .iter()
        .all(|c| c.norm() > 0.0));
    s.container.propagate(s.antenna, s.reflector).unwrap();
    let after_both = reflector(&s.container, s.reflector);

    let mut fresh = scene();
    fresh.container.propagate(fresh.antenna, fresh.reflector).unwrap();
    let antenna_only = reflector(&fresh.container, fresh.reflector);

    for (a, b) in after_both.iter().zip(&antenna_only) {
        assert_complex_close(*a, *b, TOL);
    }
}

#[test]
fn probe_sums_every_illumination() {
    let mut s = scene();
    s.container.propagate(s.antenna, s.reflector).unwrap();
    s.container.propagate(s.antenna, s.probe).unwrap();
    s.container.propagate(s.reflector, s.probe).unwrap();
    let both = s.container.probe().unwrap().field().to_vec();

    let mut a = scene();
    a.container.propagate(a.antenna, a.probe).unwrap();
    let direct = a.container.probe().unwrap().field().to_vec();

    let mut r = scene();
    r.container.propagate(r.antenna, r.reflector).unwrap();
    r.container.propagate(r.reflector, r.probe).unwrap();
    let bounced = r.container.probe().unwrap().field().to_vec();

    for i in 0..both.len() {
        let expected = [
            direct[i][0] + bounced[i][0],
            direct[i][1] + bounced[i][1],
            direct[i][2] + bounced[i][2],
        ];
        assert_field_close(&both[i], &expected, TOL);
    }
}

#[test]
fn antenna_sums_and_dipole_overwrites() {
    let mut s = scene();
    s.container.propagate(s.antenna, s.reflector).unwrap();
    s.container.propagate(s.reflector, s.antenna).unwrap();
    let first = s.container.antenna().unwrap().field();
    s.container.propagate(s.reflector, s.antenna).unwrap();
    let second = s.container.antenna().unwrap().field();
    assert_field_close(&second, &first.map(|c| c * 2.0), TOL);

    s.container.propagate(s.reflector, s.dipole).unwrap();
    s.container.propagate(s.reflector, s.dipole).unwrap();
    let d = s.container.entity(s.dipole).and_then(Entity::as_dipole).unwrap();
    let once = {
        let mut t = scene();
        t.container.propagate(t.antenna, t.reflector).unwrap();
        t.container.propagate(t.reflector, t.dipole).unwrap();
        t.container
            .entity(t.dipole)
            .and_then(Entity::as_dipole)
            .unwrap()
            .field()
    };
    assert_field_close(&d.field(), &once, TOL);
    assert!((d.power() - 2.0 * d.s11()).abs() < TOL);
}

#[test]
fn reflector_output_follows_pattern() {
    let mut s = scene();
    s.container.propagate(s.antenna, s.reflector).unwrap();
    let r = s
        .container
        .entity(s.reflector)
        .and_then(Entity::as_reflector)
        .unwrap();
    let shift = Complex64::new(0.0, K0_2_7_GHZ * std::f64::consts::PI).exp();
    assert_complex_close(r.output()[0], r.received()[0] * 0.7, TOL);
    assert_complex_close(r.output()[1], r.received()[1] * shift, TOL);
}

#[test]
fn swapping_the_pattern_keeps_couplings() {
    let mut s = scene();
    let before = s.container.cache().len();
    s.container
        .set_pattern(s.reflector, Pattern::from_rows(&[vec![false, true]]).unwrap())
        .unwrap();
    assert_eq!(s.container.cache().len(), before);
    s.container.propagate(s.antenna, s.reflector).unwrap();
    let r = s
        .container
        .entity(s.reflector)
        .and_then(Entity::as_reflector)
        .unwrap();
    assert_complex_close(r.output()[1], r.received()[1] * 0.7, TOL);
}
