use std::{env, path::PathBuf};

pub const DEFAULT_MODEL_PATH: &str = "xgb_model.json";
pub const MODEL_PATH_VAR: &str = "MODEL_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub model_path: PathBuf,
}

impl Config {
    /// Reads the configuration from the process: the first command line argument, then the
    /// `MODEL_PATH` environment variable, then the default file name.
    pub fn from_env() -> Self {
        Self::resolve(env::args().nth(1), env::var(MODEL_PATH_VAR).ok())
    }

    pub fn resolve(arg: Option<String>, var: Option<String>) -> Self {
        let given = |p: &String| !p.trim().is_empty();
        let model_path = arg
            .filter(given)
            .or(var.filter(given))
            .unwrap_or_else(|| DEFAULT_MODEL_PATH.to_string());

        Self {
            model_path: model_path.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}
