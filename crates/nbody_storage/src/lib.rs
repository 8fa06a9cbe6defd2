use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use nbody_core::{Time, Vec3};

/// Particle positions at one instant, together with the time they
/// belong to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub time_id: u64,
    pub time_value: f64,
    pub positions: Vec<Vec3>,
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot encode snapshot {id:06}: {source}")]
    Encode {
        id: u64,
        #[source]
        source: bincode::Error,
    },

    #[error("cannot decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },
}

/// Writes one bincode snapshot per step under `<folder>/<groupname>/`,
/// keyed by the step id formatted as a fixed-width 6-digit identifier.
pub struct SnapshotWriter {
    group_dir: PathBuf,
}

impl SnapshotWriter {
    /// Create the group folder (and parents) if needed.
    pub fn new(folder: &Path, groupname: &str) -> Result<Self, SnapshotError> {
        let group_dir = folder.join(groupname);
        fs::create_dir_all(&group_dir).map_err(|source| SnapshotError::Io {
            path: group_dir.clone(),
            source,
        })?;
        debug!("writing snapshots under {}", group_dir.display());
        Ok(Self { group_dir })
    }

    fn dataset_path(&self, id: u64) -> PathBuf {
        self.group_dir.join(format!("{id:06}.bin"))
    }

    /// Write the positions observed at `time`. Returns the absolute
    /// path of the file written.
    pub fn write(&self, positions: &[Vec3], time: &Time) -> Result<PathBuf, SnapshotError> {
        let snapshot = Snapshot {
            time_id: time.id(),
            time_value: time.value(),
            positions: positions.to_vec(),
        };
        let data = bincode::serialize(&snapshot).map_err(|source| SnapshotError::Encode {
            id: time.id(),
            source,
        })?;

        let path = self.dataset_path(time.id());
        fs::write(&path, data).map_err(|source| SnapshotError::Io {
            path: path.clone(),
            source,
        })?;
        path.canonicalize()
            .map_err(|source| SnapshotError::Io { path, source })
    }

    /// Read back the snapshot with the given step id.
    pub fn read(&self, id: u64) -> Result<Snapshot, SnapshotError> {
        let path = self.dataset_path(id);
        let data = fs::read(&path).map_err(|source| SnapshotError::Io {
            path: path.clone(),
            source,
        })?;
        bincode::deserialize(&data).map_err(|source| SnapshotError::Decode { path, source })
    }
}
