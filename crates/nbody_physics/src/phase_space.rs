use nbody_core::Vec3;

/// The phase space of the system: positions, velocities, and
/// accelerations of all N particles, index-aligned with particle
/// identity. N is fixed at construction and all three arrays keep that
/// length for the lifetime of the object.
///
/// There is exactly one `PhaseSpace` per run; the driving loop and the
/// components it calls mutate it strictly sequentially.
#[derive(Debug, Clone)]
pub struct PhaseSpace {
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    accelerations: Vec<Vec3>,
}

impl PhaseSpace {
    /// Allocate for `n` particles. Every component starts as NaN and
    /// stays that way until explicitly set.
    pub fn new(n: usize) -> Self {
        Self {
            positions: vec![[f64::NAN; 3]; n],
            velocities: vec![[f64::NAN; 3]; n],
            accelerations: vec![[f64::NAN; 3]; n],
        }
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    pub fn accelerations(&self) -> &[Vec3] {
        &self.accelerations
    }

    /// Overwrite all positions. `value` must have length N.
    pub fn set_positions(&mut self, value: &[Vec3]) {
        assert_eq!(value.len(), self.positions.len(), "positions length mismatch");
        self.positions.copy_from_slice(value);
    }

    /// Overwrite all velocities. `value` must have length N.
    pub fn set_velocities(&mut self, value: &[Vec3]) {
        assert_eq!(value.len(), self.velocities.len(), "velocities length mismatch");
        self.velocities.copy_from_slice(value);
    }

    /// Overwrite all accelerations. `value` must have length N.
    pub fn set_accelerations(&mut self, value: &[Vec3]) {
        assert_eq!(
            value.len(),
            self.accelerations.len(),
            "accelerations length mismatch"
        );
        self.accelerations.copy_from_slice(value);
    }
}
