//! Canonical scenes.
//!
//! - [`golden_scene`]: antenna, one single-cell reflector, one probe cell.
//! - [`dipole_ring`]: antenna plus `n` dipoles on a circle.
//! - [`metasurface_scene`]: striped reflector, probe plane, plane wave.

use ricochet_core::{EntityId, Grid, Position};
use ricochet_engine::{Container, ContainerConfig};
use ricochet_entity::{
    Antenna, Dipole, FieldRecorder, Pattern, PatternGenerator, PlaneWaveGenerator, ReflectorArray,
};

use crate::K0_2_7_GHZ;

/// Handles and positions of [`golden_scene`].
pub struct GoldenScene {
    pub container: Container,
    pub antenna: EntityId,
    pub reflector: EntityId,
    pub probe: EntityId,
    pub antenna_at: Position,
    pub reflector_at: Position,
    pub probe_at: Position,
    pub amplitude: f64,
}

/// Antenna at the origin with power 1, a single "on" reflector cell with
/// amplitude 0.7 half a metre above it, and one probe cell off to the side.
pub fn golden_scene() -> GoldenScene {
    let antenna_at = [0.0, 0.0, 0.0];
    let reflector_at = [0.0, 0.0, 0.5];
    let probe_at = [0.3, 0.1, 0.2];
    let amplitude = 0.7;

    let mut container = Container::new(ContainerConfig::new(K0_2_7_GHZ)).unwrap();
    let antenna = container.register(Antenna::new(antenna_at, 1.0)).unwrap();
    let pattern = Pattern::uniform(1, 1, true).unwrap();
    let reflector = container
        .register(
            ReflectorArray::builder(pattern, K0_2_7_GHZ)
                .center(reflector_at)
                .pitch(0.02, 0.02)
                .amplitude(amplitude)
                .build()
                .unwrap(),
        )
        .unwrap();
    let probe = container
        .register(FieldRecorder::new(Grid::point(probe_at).unwrap()))
        .unwrap();
    GoldenScene {
        container,
        antenna,
        reflector,
        probe,
        antenna_at,
        reflector_at,
        probe_at,
        amplitude,
    }
}

/// Antenna at the origin plus `n` unit-polarisability dipoles on a
/// circle of `radius` in the z = 0.3 plane. Returns the antenna handle.
pub fn dipole_ring(n: usize, radius: f64) -> (Container, EntityId) {
    let mut container = Container::new(ContainerConfig::new(K0_2_7_GHZ)).unwrap();
    let antenna = container.register(Antenna::new([0.0; 3], 1.0)).unwrap();
    for i in 0..n {
        let theta = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
        container
            .register(Dipole::new(
                [radius * theta.cos(), radius * theta.sin(), 0.3],
                1.0,
            ))
            .unwrap();
    }
    (container, antenna)
}

/// Handles of [`metasurface_scene`].
pub struct MetasurfaceScene {
    pub container: Container,
    pub antenna: EntityId,
    pub reflector: EntityId,
    pub probe: EntityId,
    pub plane_wave: EntityId,
}

/// A `rows × cols` seeded stripe reflector one metre above an antenna at
/// the origin, a coarse probe plane between them and a plane wave
/// travelling along +z.
pub fn metasurface_scene(rows: usize, cols: usize, seed: u64) -> MetasurfaceScene {
    let mut container = Container::new(ContainerConfig::new(K0_2_7_GHZ)).unwrap();
    let antenna = container.register(Antenna::new([0.0; 3], 1.0)).unwrap();
    let patterns = PatternGenerator::new(rows, cols, 1, seed).unwrap();
    let reflector = container
        .register(
            ReflectorArray::new([0.0, 0.0, 1.0], 0.02, 0.02, K0_2_7_GHZ, patterns[0].clone())
                .unwrap(),
        )
        .unwrap();
    let xs: Vec<f64> = (0..5).map(|i| -0.2 + 0.1 * i as f64).collect();
    let probe = container
        .register(FieldRecorder::new(Grid::lattice(&xs, &[0.0], &[0.5]).unwrap()))
        .unwrap();
    let plane_wave = container
        .register(PlaneWaveGenerator::new([0.0, 0.0, -1.0], [0.0, 0.0, K0_2_7_GHZ], 1.0).unwrap())
        .unwrap();
    MetasurfaceScene {
        container,
        antenna,
        reflector,
        probe,
        plane_wave,
    }
}
