use std::{io, process::ExitCode};

use anyhow::{Context, Result};
use log::debug;

use rental_price::{Config, Console};

fn main() -> Result<ExitCode> {
    env_logger::init();

    let config = Config::from_env();
    let mut console = Console::new(io::stdin().lock(), io::stdout());

    match rental_price::run(&config, &mut console) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            debug!("session ended with {e:?}");
            console
                .say(&e.report())
                .context("failed to write the error report")?;
            Ok(ExitCode::FAILURE)
        }
    }
}
