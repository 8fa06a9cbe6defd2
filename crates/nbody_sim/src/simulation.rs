use anyhow::Result;
use log::{debug, info};

use nbody_core::{ConfigError, SimConfig, Time, Vec3};
use nbody_physics::{center_of_mass, interaction, Interaction, PhaseSpace, RandomDistribution};

use crate::leapfrog::Leapfrog;

/// Receives `(Time, positions, center of mass)` after every step.
/// Implementations persist or plot the data; they never mutate core
/// state. A failing observer aborts the run.
pub trait Observer {
    fn record(&mut self, time: &Time, positions: &[Vec3], center_of_mass: Vec3) -> Result<()>;
}

/// Observer for runs with observing disabled.
pub struct Discard;

impl Observer for Discard {
    fn record(&mut self, _time: &Time, _positions: &[Vec3], _center_of_mass: Vec3) -> Result<()> {
        Ok(())
    }
}

/// Owns the full state of one run: the configuration, the masses, the
/// single phase space, and the configured interaction.
pub struct Simulation {
    config: SimConfig,
    masses: Vec<f64>,
    phase_space: PhaseSpace,
    interaction: Box<dyn Interaction>,
    initial_state: RandomDistribution,
}

impl Simulation {
    /// Build a simulation from its configuration. Particles carry unit
    /// mass; the interaction is looked up in the registry.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let n = config.particles.n;
        let interaction = interaction::from_config(&config.interaction)?;
        Ok(Self {
            masses: vec![1.0; n],
            phase_space: PhaseSpace::new(n),
            initial_state: RandomDistribution::new(config.evolution.seed),
            interaction,
            config,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn phase_space(&self) -> &PhaseSpace {
        &self.phase_space
    }

    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    pub fn center_of_mass(&self) -> Vec3 {
        center_of_mass(&self.masses, self.phase_space.positions())
    }

    /// Seed positions and velocities, then compute the accelerations
    /// consistent with them. The integrator requires this before the
    /// first step.
    fn load_initial_data(&mut self) {
        info!(
            "loading initial data: {} particles, seed {}",
            self.masses.len(),
            self.initial_state.seed()
        );
        self.initial_state.set_variables(&mut self.phase_space);
        self.interaction.exert(&mut self.phase_space, &self.masses);
    }

    /// Run the evolution, handing every step (including step 0) to the
    /// observer.
    pub fn run(&mut self, observer: &mut dyn Observer) -> Result<()> {
        let dt = self.config.evolution.initial_dt;
        let timesteps = self.config.evolution.timesteps;

        self.load_initial_data();
        observer.record(
            &Time::new(0, 0.0),
            self.phase_space.positions(),
            self.center_of_mass(),
        )?;

        info!(
            "running evolution: {} steps with dt = {} under {}",
            timesteps,
            dt,
            self.interaction.name()
        );
        for id in 1..=timesteps {
            Leapfrog::evolve(
                &mut self.phase_space,
                dt,
                &self.masses,
                self.interaction.as_ref(),
            );
            let time = Time::new(id, id as f64 * dt);
            debug!("step {} done (t = {})", time.id(), time.value());
            observer.record(&time, self.phase_space.positions(), self.center_of_mass())?;
        }
        info!("evolution finished after {timesteps} steps");
        Ok(())
    }
}
