use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain one of the read-only artifacts (cluster profiles,
/// classifier, rule table). Never fatal: the caller disables the feature.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Artifact not found: {}", path.display())]
    Missing { path: PathBuf },
    #[error("Could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid artifact: {0}")]
    Invalid(String),
}

impl ArtifactError {
    /// True when the file simply is not there, as opposed to a broken file.
    pub fn is_missing(&self) -> bool {
        matches!(self, ArtifactError::Missing { .. })
    }
}

/// Read a JSON artifact, mapping each failure to its [`ArtifactError`] kind.
pub fn read_artifact(path: &std::path::Path) -> Result<String, ArtifactError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => ArtifactError::Missing { path: path.to_path_buf() },
        _ => ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Rejected form input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("Unknown value '{value}' for field '{field}'")]
    UnknownValue { field: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
