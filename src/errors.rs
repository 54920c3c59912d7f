use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the numerical core when the input geometry cannot produce a meaningful
/// result. Every variant corresponds to a condition that would otherwise leak NaNs, infinities or
/// an ill-posed spline into the output.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("invalid point loop: {0}")]
    Shape(String),

    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("insufficient data: {needed} points required, {found} provided")]
    InsufficientData { needed: usize, found: usize },

    #[error("angular parameter is not strictly monotonic at index {index}")]
    UnorderedProfile { index: usize },
}

/// Top-level error for the smoothing pipeline, covering the file formats and the external tool
/// boundary in addition to the geometric core.
#[derive(Debug, Error)]
pub enum SmoothError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("expected tool output {path} was not produced")]
    MissingOutput { path: PathBuf },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl SmoothError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SmoothError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        SmoothError::Parse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SmoothError>;
