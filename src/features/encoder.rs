use std::io::{BufRead, Write};

use log::debug;
use ndarray::{ArrayView2, Axis, aview1};

use super::table::{CATEGORICAL_FEATURES, NUMERIC_FEATURES};
use crate::{Result, console::Console};

pub const NUM_FEATURES: usize = 16;

#[derive(Debug, Clone, Copy)]
enum Slot {
    Categorical(usize),
    Numeric(usize),
}

/// Column order the model was trained with, as indices into the two feature tables.
const FEATURE_ORDER: [Slot; NUM_FEATURES] = [
    Slot::Categorical(0),  // equipment_type
    Slot::Categorical(1),  // equipment_name
    Slot::Categorical(2),  // brand
    Slot::Numeric(0),      // age
    Slot::Categorical(3),  // condition
    Slot::Categorical(4),  // usage_frequency
    Slot::Categorical(5),  // fuel_type
    Slot::Numeric(1),      // horsepower
    Slot::Numeric(2),      // maintenance_score
    Slot::Categorical(6),  // location
    Slot::Categorical(7),  // demand_level
    Slot::Categorical(8),  // rental_duration_preference
    Slot::Numeric(3),      // fuel_efficiency
    Slot::Categorical(9),  // technology_level
    Slot::Categorical(10), // weather_dependency
    Slot::Numeric(4),      // seasonal_demand_multiplier
];

/// Returns the feature names in model column order.
pub fn feature_order() -> [&'static str; NUM_FEATURES] {
    FEATURE_ORDER.map(|slot| match slot {
        Slot::Categorical(i) => CATEGORICAL_FEATURES[i].name,
        Slot::Numeric(i) => NUMERIC_FEATURES[i].name,
    })
}

/// The validated answers of one round, grouped the way they are asked for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Answers {
    pub categorical: [u8; CATEGORICAL_FEATURES.len()],
    pub numeric: [f32; NUMERIC_FEATURES.len()],
}

impl Answers {
    pub fn encode(&self) -> FeatureVector {
        FeatureVector(FEATURE_ORDER.map(|slot| match slot {
            Slot::Categorical(i) => f32::from(self.categorical[i]),
            Slot::Numeric(i) => self.numeric[i],
        }))
    }
}

/// One sample in model column order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f32; NUM_FEATURES]);

impl FeatureVector {
    pub fn values(&self) -> &[f32; NUM_FEATURES] {
        &self.0
    }

    /// Views the vector as a `(1, 16)` matrix.
    pub fn as_row(&self) -> ArrayView2<'_, f32> {
        aview1(&self.0).insert_axis(Axis(0))
    }
}

/// Asks for every feature, re-asking until each answer is valid.
///
/// # Arguments
/// * `console` - Where to prompt and read answers.
///
/// # Returns
/// The encoded feature vector, or an error if the console fails or its input runs out.
pub fn collect<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<FeatureVector> {
    console.say("\nPlease provide the following information:")?;

    let mut categorical = [0; CATEGORICAL_FEATURES.len()];
    for (code, feature) in categorical.iter_mut().zip(&CATEGORICAL_FEATURES) {
        *code = loop {
            console.say(&format!(
                "\n{} options: {}",
                feature.name,
                feature.labels.join(", ")
            ))?;

            let answer = console.ask(&format!("Enter {}: ", feature.name))?;
            match feature.code(answer.trim()) {
                Some(c) => break c,
                None => console.say("Invalid input! Please choose from the given options.")?,
            }
        };
    }

    let mut numeric = [0.0; NUMERIC_FEATURES.len()];
    for (value, feature) in numeric.iter_mut().zip(&NUMERIC_FEATURES) {
        *value = loop {
            let answer = console.ask(&format!("{}: ", feature.prompt))?;
            match parse_number(&answer) {
                Some(v) => break v,
                None => console.say("Please enter a valid number!")?,
            }
        };
    }

    let features = Answers {
        categorical,
        numeric,
    }
    .encode();
    debug!("encoded features: {:?}", features.values());

    Ok(features)
}

/// Parses a numeric answer. Surrounding whitespace is ignored and single underscores may
/// group digits (`1_000`).
fn parse_number(answer: &str) -> Option<f32> {
    let answer = answer.trim();
    let bytes = answer.as_bytes();
    let is_digit = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_digit);

    let mut digits = String::with_capacity(answer.len());
    for (i, c) in answer.char_indices() {
        if c != '_' {
            digits.push(c);
        } else if !(i > 0 && is_digit(i - 1) && is_digit(i + 1)) {
            return None;
        }
    }

    digits.parse().ok()
}
