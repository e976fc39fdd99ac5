pub mod booster;
pub mod error;
pub mod objective;
pub mod predictor;
mod schema;
mod tree;

pub use booster::Booster;
pub use error::{ModelErr, Result};
pub use objective::Objective;
pub use predictor::Predictor;
