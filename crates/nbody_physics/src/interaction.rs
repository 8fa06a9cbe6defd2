use nbody_core::config::InteractionConfig;
use nbody_core::ConfigError;

use crate::inverse_square_law::InverseSquareLaw;
use crate::phase_space::PhaseSpace;

/// A pairwise interaction able to refresh the accelerations of the
/// system from its current positions.
pub trait Interaction: std::fmt::Debug {
    /// The identifier used to select this interaction in configuration.
    fn name(&self) -> &'static str;

    /// Overwrite the accelerations in `phase_space` from its positions
    /// and the given masses. `masses` must have length N.
    fn exert(&self, phase_space: &mut PhaseSpace, masses: &[f64]);
}

/// Names of every registered interaction type.
pub fn available() -> Vec<&'static str> {
    vec![InverseSquareLaw::NAME]
}

/// Construct the interaction selected by the configuration.
///
/// Fails if the name matches no registered type or if required
/// parameter keys are absent.
pub fn from_config(config: &InteractionConfig) -> Result<Box<dyn Interaction>, ConfigError> {
    match config.name.as_str() {
        InverseSquareLaw::NAME => Ok(Box::new(InverseSquareLaw::from_params(&config.params)?)),
        other => Err(ConfigError::UnknownInteraction {
            name: other.to_string(),
            available: available(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use nbody_core::SimConfig;

    use super::*;

    #[test]
    fn test_default_config_selects_inverse_square_law() {
        let config = SimConfig::default();
        let interaction = from_config(&config.interaction).unwrap();
        assert_eq!(interaction.name(), "InverseSquareLaw");
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let config = InteractionConfig {
            name: "HookeanSpring".into(),
            params: BTreeMap::new(),
        };
        let err = from_config(&config).unwrap_err();
        match err {
            ConfigError::UnknownInteraction { name, available } => {
                assert_eq!(name, "HookeanSpring");
                assert!(available.contains(&InverseSquareLaw::NAME));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
