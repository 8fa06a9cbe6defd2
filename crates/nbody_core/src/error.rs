use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading simulation options or constructing an
/// interaction from them. All of these are fatal to the run.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required parameter keys absent from an interaction's parameter map.
    #[error("{interaction}: missing key(s) {missing:?}, expected keys {expected:?}")]
    MissingKeys {
        interaction: &'static str,
        missing: Vec<String>,
        expected: &'static [&'static str],
    },

    /// The configured interaction name matches no registered type.
    #[error("unknown interaction {name:?}, available: {available:?}")]
    UnknownInteraction {
        name: String,
        available: Vec<&'static str>,
    },

    #[error("cannot read input file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse input {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },
}
