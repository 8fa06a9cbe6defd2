// Simulation-scaled units: distances in AU, times in years, masses in
// solar masses. Kepler's third law then gives G = 4π² almost exactly.
use std::f64::consts::PI;

/// Gravitational constant in simulation units
pub const G: f64 = 4.0 * PI * PI;

/// Default softening length for the inverse-square law
pub const SOFTENING: f64 = 1.0e-2;

/// Default fixed time step (yr)
pub const DT: f64 = 1.0e-3;

/// Default RNG seed for the initial distribution
pub const DEFAULT_SEED: u64 = 25092020;

/// Default number of evolution steps
pub const DEFAULT_TIMESTEPS: u64 = 10;

/// Default particle count
pub const DEFAULT_PARTICLE_COUNT: usize = 16;
