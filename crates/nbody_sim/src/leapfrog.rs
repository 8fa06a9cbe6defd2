use nbody_physics::{Interaction, PhaseSpace};

/// The synchronized second-order leapfrog integrator
/// (kick-drift-kick), the standard symplectic scheme for oscillatory
/// problems.
pub struct Leapfrog;

impl Leapfrog {
    /// Advance the phase space by one fixed step `dt`.
    ///
    /// The stored accelerations must already reflect the current
    /// positions (the driving loop performs one force evaluation
    /// before the first call); `exert` refreshes them mid-step.
    ///
    /// `dt` must be small against the dominant oscillation period,
    /// otherwise energy conservation degrades. That is the caller's
    /// concern; no error is raised.
    pub fn evolve(
        phase_space: &mut PhaseSpace,
        dt: f64,
        masses: &[f64],
        interaction: &dyn Interaction,
    ) {
        let half_dt = 0.5 * dt;

        // Half-kick with the previous step's accelerations.
        let mut velocities = phase_space.velocities().to_vec();
        for (velocity, acceleration) in velocities.iter_mut().zip(phase_space.accelerations()) {
            for i in 0..3 {
                velocity[i] += half_dt * acceleration[i];
            }
        }

        // Drift with the half-kicked velocities.
        let mut positions = phase_space.positions().to_vec();
        for (position, velocity) in positions.iter_mut().zip(&velocities) {
            for i in 0..3 {
                position[i] += dt * velocity[i];
            }
        }
        phase_space.set_positions(&positions);

        // Refresh accelerations at the new positions.
        interaction.exert(phase_space, masses);

        // Second half-kick with the fresh accelerations.
        for (velocity, acceleration) in velocities.iter_mut().zip(phase_space.accelerations()) {
            for i in 0..3 {
                velocity[i] += half_dt * acceleration[i];
            }
        }
        phase_space.set_velocities(&velocities);
    }
}
