use std::{error::Error, fmt, io, path::PathBuf};

/// The model crate's result type.
pub type Result<T> = std::result::Result<T, ModelErr>;

/// Failures while loading or evaluating a model artifact.
#[derive(Debug)]
pub enum ModelErr {
    NotFound {
        path: PathBuf,
    },
    Io(io::Error),
    Json(serde_json::Error),
    InvalidModel(String),
    UnsupportedObjective(String),
    UnsupportedBooster(String),
    FeatureCountMismatch {
        got: usize,
        expected: usize,
    },
}

impl fmt::Display for ModelErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelErr::NotFound { path } => {
                write!(f, "model file '{}' not found", path.display())
            }
            ModelErr::Io(e) => write!(f, "io error: {e}"),
            ModelErr::Json(e) => write!(f, "malformed model json: {e}"),
            ModelErr::InvalidModel(msg) => write!(f, "invalid model: {msg}"),
            ModelErr::UnsupportedObjective(name) => {
                write!(f, "unsupported objective: {name}")
            }
            ModelErr::UnsupportedBooster(name) => write!(f, "unsupported booster: {name}"),
            ModelErr::FeatureCountMismatch { got, expected } => write!(
                f,
                "feature shape mismatch, expected: {expected}, got: {got}"
            ),
        }
    }
}

impl Error for ModelErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ModelErr::Io(e) => Some(e),
            ModelErr::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ModelErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ModelErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
