use nbody_core::Vec3;

/// The mass-weighted average position of the system. Read-only; no
/// side effects on the phase space.
pub fn center_of_mass(masses: &[f64], positions: &[Vec3]) -> Vec3 {
    assert_eq!(masses.len(), positions.len(), "masses length mismatch");

    let total: f64 = masses.iter().sum();
    let mut weighted = [0.0f64; 3];
    for (mass, position) in masses.iter().zip(positions) {
        weighted[0] += mass * position[0];
        weighted[1] += mass * position[1];
        weighted[2] += mass * position[2];
    }
    [
        weighted[0] / total,
        weighted[1] / total,
        weighted[2] / total,
    ]
}
