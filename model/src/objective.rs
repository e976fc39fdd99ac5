use crate::{ModelErr, Result};

/// How the raw margin of the ensemble maps to a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    /// Squared, absolute, Huber and quantile regression: the margin is the prediction.
    Identity,
    /// Logistic regression: predictions are probabilities.
    Logistic,
    /// Poisson, gamma and Tweedie regression: a log link.
    Log,
}

impl Objective {
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "reg:squarederror"
            | "reg:linear"
            | "reg:squaredlogerror"
            | "reg:pseudohubererror"
            | "reg:absoluteerror"
            | "reg:quantileerror" => Ok(Self::Identity),
            "reg:logistic" | "binary:logistic" => Ok(Self::Logistic),
            "count:poisson" | "reg:gamma" | "reg:tweedie" => Ok(Self::Log),
            other => Err(ModelErr::UnsupportedObjective(other.to_string())),
        }
    }

    /// Maps `base_score`, which is stored in prediction space, back to margin space.
    pub fn base_margin(self, base_score: f32) -> Result<f32> {
        match self {
            Self::Identity => Ok(base_score),
            Self::Logistic if base_score > 0.0 && base_score < 1.0 => {
                Ok((base_score / (1.0 - base_score)).ln())
            }
            Self::Log if base_score > 0.0 => Ok(base_score.ln()),
            _ => Err(ModelErr::InvalidModel(format!(
                "base_score {base_score} is out of range for a {self:?} objective"
            ))),
        }
    }

    pub fn transform(self, margin: f32) -> f32 {
        match self {
            Self::Identity => margin,
            Self::Logistic => 1.0 / (1.0 + (-margin).exp()),
            Self::Log => margin.exp(),
        }
    }
}
