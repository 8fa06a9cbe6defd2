//! Headless N-body driver: reads a YAML input file, evolves the
//! system with the leapfrog integrator, and optionally writes one
//! positions snapshot per step.

use std::env;
use std::path::Path;

use anyhow::Result;
use log::info;

use nbody_core::{SimConfig, Time, Vec3};
use nbody_sim::{Discard, Observer, Simulation};
use nbody_storage::SnapshotWriter;

/// Observer that persists positions through `nbody_storage`.
struct SnapshotObserver {
    writer: SnapshotWriter,
}

impl Observer for SnapshotObserver {
    fn record(&mut self, time: &Time, positions: &[Vec3], _center_of_mass: Vec3) -> Result<()> {
        self.writer.write(positions, time)?;
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => SimConfig::from_path(Path::new(&path))?,
        None => SimConfig::default(),
    };
    info!(
        "N = {}, dt = {}, timesteps = {}, seed = {}",
        config.particles.n,
        config.evolution.initial_dt,
        config.evolution.timesteps,
        config.evolution.seed
    );

    let mut simulation = Simulation::new(config.clone())?;
    if config.observers.observing {
        let writer = SnapshotWriter::new(
            Path::new(&config.observers.filename),
            &config.observers.groupname,
        )?;
        simulation.run(&mut SnapshotObserver { writer })?;
    } else {
        simulation.run(&mut Discard)?;
    }
    Ok(())
}
