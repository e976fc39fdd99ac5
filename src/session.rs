use std::io::{BufRead, Write};

use log::{debug, info};
use model::Predictor;

use crate::{AppErr, Result, console::Console, features};

pub const CURRENCY: &str = "Rupees";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Collecting,
    Done,
}

impl State {
    /// Only an answer of `yes`, in any ASCII case, asks for another round.
    fn after(answer: &str) -> Self {
        if answer.eq_ignore_ascii_case("yes") {
            State::Collecting
        } else {
            State::Done
        }
    }
}

/// Runs prediction rounds until the user declines to continue.
///
/// # Arguments
/// * `model` - The loaded model.
/// * `console` - Where to prompt and read answers.
///
/// # Returns
/// The amount of completed rounds, or the error that ended the session.
pub fn run<P, R, W>(model: &P, console: &mut Console<R, W>) -> Result<usize>
where
    P: Predictor,
    R: BufRead,
    W: Write,
{
    let mut state = State::Collecting;
    let mut rounds = 0;

    while state == State::Collecting {
        let features = features::collect(console)?;
        let price = predict(model, &features)?;

        console.say(&format!(
            "\nPredicted Rental Price: {CURRENCY}{price:.2} per day"
        ))?;
        rounds += 1;

        let answer = console.ask("\nWould you like to make another prediction? (yes/no): ")?;
        state = State::after(&answer);
    }

    info!("session finished after {rounds} prediction(s)");
    Ok(rounds)
}

fn predict<P: Predictor>(model: &P, features: &features::FeatureVector) -> Result<f32> {
    let preds = model
        .predict(features.as_row())
        .map_err(AppErr::Prediction)?;
    debug!("raw prediction: {preds:?}");

    preds.first().copied().ok_or(AppErr::EmptyPrediction)
}
