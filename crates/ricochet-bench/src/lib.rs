//! Benchmark profiles for the Ricochet propagation engine.
//!
//! - [`reference_profile`]: antenna, 8×20 stripe reflector, and a few
//!   dipoles, the scale of a typical metasurface study.
//! - [`dipole_profile`]: antenna plus `n` dipoles, for isolating route
//!   enumeration cost from coupling size.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ricochet_core::EntityId;
use ricochet_engine::{Container, ContainerConfig};
use ricochet_entity::{Antenna, Dipole, PatternGenerator, ReflectorArray};

/// 2.7 GHz, the carrier used throughout the profiles.
pub const FREQUENCY_HZ: f64 = 2.7e9;

/// Antenna at the origin, one seeded 8×20 stripe reflector one metre up,
/// and `dipoles` dipoles scattered on a ring between them.
///
/// Returns the container and the antenna handle.
pub fn reference_profile(dipoles: usize, seed: u64) -> (Container, EntityId) {
    let config = ContainerConfig::from_frequency(FREQUENCY_HZ);
    let k0 = config.k0;
    let mut container = Container::new(config).unwrap();
    let antenna = container.register(Antenna::new([0.0; 3], 1.0)).unwrap();
    let patterns = PatternGenerator::new(8, 20, 1, seed).unwrap();
    container
        .register(ReflectorArray::new([0.0, 0.0, 1.0], 0.02, 0.02, k0, patterns[0].clone()).unwrap())
        .unwrap();
    add_ring(&mut container, dipoles);
    (container, antenna)
}

/// Antenna at the origin plus `n` dipoles on a ring.
pub fn dipole_profile(n: usize) -> (Container, EntityId) {
    let mut container = Container::new(ContainerConfig::from_frequency(FREQUENCY_HZ)).unwrap();
    let antenna = container.register(Antenna::new([0.0; 3], 1.0)).unwrap();
    add_ring(&mut container, n);
    (container, antenna)
}

fn add_ring(container: &mut Container, n: usize) {
    for i in 0..n {
        let theta = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
        container
            .register(Dipole::new([0.4 * theta.cos(), 0.4 * theta.sin(), 0.5], 1.0))
            .unwrap();
    }
}
