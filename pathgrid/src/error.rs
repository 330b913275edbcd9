//! The application-level [`SessionError`].

use std::fmt;
use std::path::PathBuf;

use pathgrid_core::{GridError, MatrixError};
use pathgrid_paths::PathError;

/// Anything that can go wrong while configuring or driving a session.
#[derive(Debug)]
pub enum SessionError {
    Grid(GridError),
    Matrix(MatrixError),
    Path(PathError),
    /// The configuration file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The configuration file is not valid TOML for [`SessionConfig`](crate::SessionConfig).
    Toml(toml::de::Error),
    /// The configuration parsed but holds an unusable value.
    InvalidConfig(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid edit failed: {e}"),
            Self::Matrix(e) => write!(f, "bad occupancy snapshot: {e}"),
            Self::Path(e) => write!(f, "route search failed: {e}"),
            Self::Io { path, source } => {
                write!(f, "cannot read config {}: {source}", path.display())
            }
            Self::Toml(e) => write!(f, "cannot parse config: {e}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Matrix(e) => Some(e),
            Self::Path(e) => Some(e),
            Self::Io { source, .. } => Some(source),
            Self::Toml(e) => Some(e),
            Self::InvalidConfig(_) => None,
        }
    }
}

impl From<GridError> for SessionError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<MatrixError> for SessionError {
    fn from(e: MatrixError) -> Self {
        Self::Matrix(e)
    }
}

impl From<PathError> for SessionError {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}

impl From<toml::de::Error> for SessionError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}
