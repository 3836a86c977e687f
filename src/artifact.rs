use crate::error::ArtifactError;
use crate::kinematics::Waypoint;
use crate::path::SampledCurve;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// One complete compile result: the generated program text plus the
/// trajectory data it was derived from.
///
/// Persisting the artifact lets users diff generated programs across graph
/// edits and re-open a preview without recompiling.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct CompiledAutonomy {
    pub program: String,
    pub waypoints: Vec<Waypoint>,
    pub curve: SampledCurve,
}

impl CompiledAutonomy {
    pub fn new(program: String, waypoints: Vec<Waypoint>, curve: SampledCurve) -> Self {
        Self {
            program,
            waypoints,
            curve,
        }
    }

    /// Saves the artifact to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes =
            encode_to_vec(self, standard()).map_err(|e| ArtifactError::Encode(e.to_string()))?;
        let mut file = fs::File::create(path).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        file.write_all(&bytes).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Loads a previously saved artifact.
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let mut file = fs::File::open(path).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes an artifact from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        decode_from_slice(bytes, standard())
            .map(|(artifact, _)| artifact) // bincode 2 returns (data, bytes_read)
            .map_err(|e| ArtifactError::Decode(e.to_string()))
    }
}
