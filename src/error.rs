use std::{error::Error, fmt, io, path::PathBuf};

use model::ModelErr;

/// The application's result type.
pub type Result<T> = std::result::Result<T, AppErr>;

/// Everything that ends a session early. Bad answers at a prompt are not errors, they are
/// asked again.
#[derive(Debug)]
pub enum AppErr {
    /// There is no model file at the configured path.
    ModelMissing(PathBuf),
    /// The model file exists but could not be decoded.
    ModelLoad(ModelErr),
    /// The model rejected the encoded features.
    Prediction(ModelErr),
    /// The model returned no value for the submitted row.
    EmptyPrediction,
    /// Input ended while waiting for an answer.
    InputCancelled,
    Io(io::Error),
}

impl AppErr {
    /// Classifies a model loading failure.
    pub fn from_load(err: ModelErr) -> Self {
        match err {
            ModelErr::NotFound { path } => Self::ModelMissing(path),
            other => Self::ModelLoad(other),
        }
    }

    /// The single line shown to the user before exiting.
    pub fn report(&self) -> String {
        match self {
            Self::ModelMissing(path) => {
                format!("Error: Model file '{}' not found!", path.display())
            }
            other => format!("An error occurred: {other}"),
        }
    }
}

impl fmt::Display for AppErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelMissing(path) => write!(f, "model file '{}' not found", path.display()),
            Self::ModelLoad(e) => write!(f, "failed to load model: {e}"),
            Self::Prediction(e) => write!(f, "prediction failed: {e}"),
            Self::EmptyPrediction => write!(f, "the model returned no prediction"),
            Self::InputCancelled => write!(f, "input cancelled"),
            Self::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl Error for AppErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ModelLoad(e) | Self::Prediction(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for AppErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}
