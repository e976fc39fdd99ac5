//! The subset of XGBoost's JSON model document needed to evaluate a tree ensemble.
//!
//! XGBoost writes most scalar parameters as strings (`"num_feature": "16"`), and the encoding
//! of a few fields changed between releases, so the types here accept both spellings.

use serde::Deserialize;

use crate::{ModelErr, Result};

#[derive(Debug, Deserialize)]
pub struct ModelDoc {
    pub learner: LearnerDoc,
}

#[derive(Debug, Deserialize)]
pub struct LearnerDoc {
    #[serde(default)]
    pub attributes: AttributesDoc,
    pub learner_model_param: LearnerParamDoc,
    pub objective: ObjectiveDoc,
    pub gradient_booster: BoosterDoc,
}

#[derive(Debug, Deserialize)]
pub struct LearnerParamDoc {
    pub base_score: Scalar,
    pub num_feature: Scalar,
    #[serde(default)]
    pub num_target: Option<Scalar>,
}

/// Free-form string attributes saved with the booster. Training with early stopping records
/// `best_iteration` here.
#[derive(Debug, Default, Deserialize)]
pub struct AttributesDoc {
    #[serde(default)]
    pub best_iteration: Option<Scalar>,
}

#[derive(Debug, Deserialize)]
pub struct ObjectiveDoc {
    pub name: String,
}

/// Either `gbtree` (trees under `model`) or `dart` (trees under `gbtree.model`, scaled by
/// `weight_drop`). Anything else is rejected once the name is known.
#[derive(Debug, Deserialize)]
pub struct BoosterDoc {
    pub name: String,
    #[serde(default)]
    pub model: Option<ForestDoc>,
    #[serde(default)]
    pub gbtree: Option<Box<BoosterDoc>>,
    #[serde(default)]
    pub weight_drop: Option<Vec<f32>>,
}

#[derive(Debug, Deserialize)]
pub struct ForestDoc {
    #[serde(default)]
    pub gbtree_model_param: Option<ForestParamDoc>,
    #[serde(default)]
    pub iteration_indptr: Option<Vec<usize>>,
    #[serde(default)]
    pub trees: Vec<TreeDoc>,
}

#[derive(Debug, Deserialize)]
pub struct ForestParamDoc {
    pub num_parallel_tree: Scalar,
}

#[derive(Debug, Deserialize)]
pub struct TreeDoc {
    pub left_children: Vec<i32>,
    pub right_children: Vec<i32>,
    pub split_indices: Vec<u32>,
    pub split_conditions: Vec<f32>,
    pub default_left: Vec<Flag>,
    #[serde(default)]
    pub split_type: Vec<u8>,
}

/// A numeric parameter written either as a JSON number or as a string. Newer releases wrap
/// vector-valued parameters in brackets (`"[5E-1]"`), in which case the first entry is used.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    pub fn as_f32(&self, field: &str) -> Result<f32> {
        match self {
            Scalar::Number(n) => Ok(*n as f32),
            Scalar::Text(s) => {
                let first = s
                    .trim()
                    .trim_start_matches('[')
                    .trim_end_matches(']')
                    .split(',')
                    .next()
                    .unwrap_or_default()
                    .trim();

                first.parse().map_err(|_| {
                    ModelErr::InvalidModel(format!("{field}: cannot parse '{s}' as a number"))
                })
            }
        }
    }

    pub fn as_usize(&self, field: &str) -> Result<usize> {
        let value = self.as_f32(field)?;
        if value < 0.0 || value.fract() != 0.0 {
            return Err(ModelErr::InvalidModel(format!(
                "{field}: expected a non-negative integer, got {value}"
            )));
        }

        Ok(value as usize)
    }
}

/// `default_left` is an array of 0/1 integers in current releases and of booleans in older ones.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Int(i64),
}

impl Flag {
    pub fn is_set(self) -> bool {
        match self {
            Flag::Bool(b) => b,
            Flag::Int(i) => i != 0,
        }
    }
}
