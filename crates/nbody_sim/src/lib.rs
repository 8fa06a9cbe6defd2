pub mod leapfrog;
pub mod simulation;

pub use leapfrog::Leapfrog;
pub use simulation::{Discard, Observer, Simulation};
