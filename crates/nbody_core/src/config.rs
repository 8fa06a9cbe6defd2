use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::ConfigError;

/// Simulation configuration, read from a YAML input file.
///
/// The key scheme is capitalized to match the input files:
///
/// ```yaml
/// Particles:
///   N: 16
/// Evolution:
///   InitialDt: 1.0e-3
///   Timesteps: 10
///   Seed: 25092020
/// Interaction:
///   Name: InverseSquareLaw
///   Constant: 39.478
///   Softening: 1.0e-2
/// Observers:
///   Observing: true
///   Filename: snapshots
///   Groupname: Positions
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SimConfig {
    pub particles: ParticlesConfig,
    pub evolution: EvolutionConfig,
    pub interaction: InteractionConfig,
    pub observers: ObserversConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticlesConfig {
    /// Number of particles
    #[serde(rename = "N")]
    pub n: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EvolutionConfig {
    /// Fixed time step
    pub initial_dt: f64,
    /// Number of evolution steps
    pub timesteps: u64,
    /// Seed for the initial distribution
    #[serde(default = "default_seed")]
    pub seed: u64,
}

/// Selects the interaction type by name. Every key other than `Name`
/// is collected into the parameter map handed to the constructor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InteractionConfig {
    pub name: String,
    #[serde(flatten)]
    pub params: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ObserversConfig {
    /// Whether snapshots are handed to the observer after each step
    pub observing: bool,
    /// Folder snapshots are written under
    pub filename: String,
    /// Group the datasets belong to
    pub groupname: String,
}

fn default_seed() -> u64 {
    constants::DEFAULT_SEED
}

impl SimConfig {
    /// Load the configuration from a YAML file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
            origin: path.display().to_string(),
            source,
        })
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            particles: ParticlesConfig {
                n: constants::DEFAULT_PARTICLE_COUNT,
            },
            evolution: EvolutionConfig {
                initial_dt: constants::DT,
                timesteps: constants::DEFAULT_TIMESTEPS,
                seed: constants::DEFAULT_SEED,
            },
            interaction: InteractionConfig {
                name: "InverseSquareLaw".into(),
                params: BTreeMap::from([
                    ("Constant".to_string(), constants::G),
                    ("Softening".to_string(), constants::SOFTENING),
                ]),
            },
            observers: ObserversConfig {
                observing: false,
                filename: "snapshots".into(),
                groupname: "Positions".into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "
Particles:
  N: 8
Evolution:
  InitialDt: 0.5
  Timesteps: 100
Interaction:
  Name: InverseSquareLaw
  Constant: 2.0
  Softening: 0.25
Observers:
  Observing: true
  Filename: out
  Groupname: Positions
";

    #[test]
    fn test_parse() {
        let config: SimConfig = serde_yaml::from_str(INPUT).unwrap();
        assert_eq!(config.particles.n, 8);
        assert_eq!(config.evolution.initial_dt, 0.5);
        assert_eq!(config.evolution.timesteps, 100);
        // Seed is optional and falls back to the default.
        assert_eq!(config.evolution.seed, constants::DEFAULT_SEED);
        assert_eq!(config.interaction.name, "InverseSquareLaw");
        assert_eq!(config.interaction.params["Constant"], 2.0);
        assert_eq!(config.interaction.params["Softening"], 0.25);
        assert!(config.observers.observing);
        assert_eq!(config.observers.filename, "out");
    }

    #[test]
    fn test_missing_section_fails() {
        let truncated = "
Particles:
  N: 8
Evolution:
  InitialDt: 0.5
  Timesteps: 100
";
        assert!(serde_yaml::from_str::<SimConfig>(truncated).is_err());
    }

    #[test]
    fn test_missing_key_fails() {
        let incomplete = INPUT.replace("  Timesteps: 100\n", "");
        assert!(serde_yaml::from_str::<SimConfig>(&incomplete).is_err());
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = SimConfig::from_path(Path::new("does-not-exist.yml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_default_round_trips() {
        let text = serde_yaml::to_string(&SimConfig::default()).unwrap();
        let config: SimConfig = serde_yaml::from_str(&text).unwrap();
        assert_eq!(config.particles.n, constants::DEFAULT_PARTICLE_COUNT);
        assert_eq!(config.interaction.params["Constant"], constants::G);
    }
}
