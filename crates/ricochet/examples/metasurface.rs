//! 2.7 GHz metasurface scene driven by a plane wave.
//!
//! An 8×20 reflector with a four-column stripe pattern hangs one metre
//! above the driving antenna. A probe plane in y = 0 records the field
//! between them. Afterwards a handful of seeded random stripe patterns
//! are swapped in to compare the antenna's return.
//!
//! Run with `RUST_LOG=ricochet_engine=info` to see engine events.

use ricochet::prelude::*;
use tracing_subscriber::EnvFilter;

fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ContainerConfig::from_frequency(2.7e9);
    let k0 = config.k0;
    let mut scene = Container::new(config)?;

    let stripes: Vec<bool> = (0..20).map(|c| (c / 4) % 2 == 0).collect();
    let pattern = Pattern::striped(8, &stripes)?;

    scene.register(Antenna::new([0.0, 0.0, 0.0], 1.0))?;
    let surface = scene.register(ReflectorArray::new([0.0, 0.0, 1.0], 0.02, 0.02, k0, pattern)?)?;
    let probe = Grid::lattice(&linspace(-0.3, 0.3, 50), &[0.0], &linspace(0.0, 1.01, 100))?;
    scene.register(FieldRecorder::new(probe))?;
    let plane_wave = scene.register(PlaneWaveGenerator::new([0.0; 3], [0.0, 0.0, k0], 1.0)?)?;

    let run = ExperimentConfig {
        record: true,
        ..ExperimentConfig::default()
    };
    let report = scene.run_experiment(plane_wave, &run)?;
    tracing::info!(
        routes = report.metrics.routes(),
        propagations = report.metrics.propagations,
        total_us = report.metrics.total_us,
        "striped run complete"
    );

    let recorder = scene.probe().ok_or("probe missing")?;
    let ex = recorder.component(Axis::X);
    let peak = ex.iter().map(|c| c.norm()).fold(0.0, f64::max);
    println!("antenna |S11| = {:.6e}", scene.antenna().ok_or("antenna missing")?.s11());
    println!("probe peak |Ex| = {peak:.6e} over {} cells", ex.len());

    let candidates = PatternGenerator::new(8, 20, 5, 42)?;
    for (i, p) in candidates.iter().enumerate() {
        scene.clear();
        scene.set_pattern(surface, p.clone())?;
        scene.run_experiment(plane_wave, &ExperimentConfig::default())?;
        println!(
            "pattern {i}: antenna |S11| = {:.6e}",
            scene.antenna().ok_or("antenna missing")?.s11()
        );
    }
    Ok(())
}
