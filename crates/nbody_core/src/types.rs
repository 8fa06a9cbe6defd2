/// A real 3-vector, the component type of positions, velocities, and
/// accelerations.
pub type Vec3 = [f64; 3];
