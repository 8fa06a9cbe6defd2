use std::collections::BTreeMap;

use nbody_core::ConfigError;

use crate::interaction::Interaction;
use crate::phase_space::PhaseSpace;

/// Newton's classic inverse-square law of gravitation, softened so
/// that close encounters stay bounded.
///
/// The acceleration on particle j is the direct sum over every other
/// particle k of
///
/// ```text
/// constant * masses[k] * (x[k] - x[j]) / (|x[k] - x[j]|^2 + softening^2)^1.5
/// ```
#[derive(Debug, Clone, Copy)]
pub struct InverseSquareLaw {
    constant: f64,
    softening: f64,
}

impl InverseSquareLaw {
    pub const NAME: &'static str = "InverseSquareLaw";

    const EXPECTED_KEYS: &'static [&'static str] = &["Constant", "Softening"];

    pub fn new(constant: f64, softening: f64) -> Self {
        Self {
            constant,
            softening,
        }
    }

    /// Construct from the parameter map of the configuration. Fails
    /// naming the missing key(s) when `Constant` or `Softening` is
    /// absent.
    pub fn from_params(params: &BTreeMap<String, f64>) -> Result<Self, ConfigError> {
        let missing: Vec<String> = Self::EXPECTED_KEYS
            .iter()
            .filter(|key| !params.contains_key(**key))
            .map(|key| key.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingKeys {
                interaction: Self::NAME,
                missing,
                expected: Self::EXPECTED_KEYS,
            });
        }
        Ok(Self::new(params["Constant"], params["Softening"]))
    }

    /// The gravitational constant.
    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// The softening length.
    pub fn softening(&self) -> f64 {
        self.softening
    }
}

impl Interaction for InverseSquareLaw {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn exert(&self, phase_space: &mut PhaseSpace, masses: &[f64]) {
        let n = phase_space.len();
        assert_eq!(masses.len(), n, "masses length mismatch");

        let softening_squared = self.softening * self.softening;
        let positions = phase_space.positions();
        let mut accelerations = vec![[0.0f64; 3]; n];

        for j in 0..n {
            let mut acc = [0.0f64; 3];
            for (k, &mass) in masses.iter().enumerate() {
                // The j = k term vanishes anyway; skip it explicitly so
                // the loop stays correct for any softening form.
                if k == j {
                    continue;
                }
                let dx = positions[k][0] - positions[j][0];
                let dy = positions[k][1] - positions[j][1];
                let dz = positions[k][2] - positions[j][2];

                let r2 = dx * dx + dy * dy + dz * dz + softening_squared;
                let r = r2.sqrt();

                let f = self.constant * mass / (r2 * r);
                acc[0] += f * dx;
                acc[1] += f * dy;
                acc[2] += f * dz;
            }
            accelerations[j] = acc;
        }

        phase_space.set_accelerations(&accelerations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1.0e-12;

    #[test]
    fn test_two_body_reference() {
        let constant = 2.5;
        let softening = 0.1;
        let law = InverseSquareLaw::new(constant, softening);

        let mut phase_space = PhaseSpace::new(2);
        phase_space.set_positions(&[[-1.0, 0.0, 0.0], [1.0, 0.0, 0.0]]);
        law.exert(&mut phase_space, &[1.0, 1.0]);

        // Separation 2 along x: a_0 = G * (2, 0, 0) / (2^2 + eps^2)^1.5.
        let expected = constant * 2.0 / (4.0 + softening * softening).powf(1.5);
        let accelerations = phase_space.accelerations();
        assert!((accelerations[0][0] - expected).abs() < TOLERANCE);
        assert!((accelerations[1][0] + expected).abs() < TOLERANCE);
        for i in 1..3 {
            assert_eq!(accelerations[0][i], 0.0);
            assert_eq!(accelerations[1][i], 0.0);
        }
    }

    #[test]
    fn test_newtons_third_law() {
        let law = InverseSquareLaw::new(1.7, 0.05);
        let masses = [2.0, 3.0];

        let mut phase_space = PhaseSpace::new(2);
        phase_space.set_positions(&[[0.3, -1.2, 0.7], [-0.4, 0.9, 2.1]]);
        law.exert(&mut phase_space, &masses);

        // Forces, not accelerations, must be antiparallel and equal in
        // magnitude: m_0 a_0 = -m_1 a_1.
        let accelerations = phase_space.accelerations();
        for i in 0..3 {
            let force_on_0 = masses[0] * accelerations[0][i];
            let force_on_1 = masses[1] * accelerations[1][i];
            assert!((force_on_0 + force_on_1).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_coincident_particles_stay_finite() {
        let law = InverseSquareLaw::new(1.0, 0.5);
        let mut phase_space = PhaseSpace::new(2);
        phase_space.set_positions(&[[0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]);
        law.exert(&mut phase_space, &[1.0, 1.0]);

        for acceleration in phase_space.accelerations() {
            for component in acceleration {
                assert!(component.is_finite());
                assert_eq!(*component, 0.0);
            }
        }
    }

    #[test]
    fn test_from_params() {
        let params = BTreeMap::from([
            ("Constant".to_string(), 39.0),
            ("Softening".to_string(), 0.01),
        ]);
        let law = InverseSquareLaw::from_params(&params).unwrap();
        assert_eq!(law.constant(), 39.0);
        assert_eq!(law.softening(), 0.01);
    }

    #[test]
    fn test_from_params_names_missing_keys() {
        let params = BTreeMap::from([("Softening".to_string(), 0.01)]);
        let err = InverseSquareLaw::from_params(&params).unwrap_err();
        match err {
            ConfigError::MissingKeys {
                interaction,
                missing,
                expected,
            } => {
                assert_eq!(interaction, InverseSquareLaw::NAME);
                assert_eq!(missing, vec!["Constant".to_string()]);
                assert!(expected.contains(&"Constant"));
                assert!(expected.contains(&"Softening"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
