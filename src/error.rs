//! Error type shared by discovery, loading and the generate pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a documentation run.
///
/// Missing optional files (headers, footers, readmes) are never errors; they
/// simply leave the corresponding field empty.
#[derive(Debug, Error)]
pub enum Error {
    #[error("project does not exist: {}", path.display())]
    ProjectNotFound { path: PathBuf },

    #[error("templates directory does not exist: {}", path.display())]
    TemplatesNotFound { path: PathBuf },

    #[error("invalid discovery pattern {pattern}: {message}")]
    Pattern { pattern: String, message: String },

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: SpecError,
    },
}

/// Why a component file could not be turned into a spec.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Not valid YAML.
    #[error(transparent)]
    Syntax(#[from] yaml_rust2::ScanError),

    /// Valid YAML, but `spec:` has the wrong shape.
    #[error(transparent)]
    Shape(#[from] serde_yaml::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
