pub mod config;
pub mod console;
pub mod error;
pub mod features;
pub mod session;

use std::io::{BufRead, Write};

use model::Booster;

pub use config::Config;
pub use console::Console;
pub use error::{AppErr, Result};

/// Loads the configured model and runs the interactive session.
///
/// # Errors
/// `ModelMissing` if there is no model file, before anything is asked. Otherwise whatever
/// ended the session.
pub fn run<R: BufRead, W: Write>(config: &Config, console: &mut Console<R, W>) -> Result<usize> {
    let booster = Booster::load(&config.model_path).map_err(AppErr::from_load)?;
    session::run(&booster, console)
}
