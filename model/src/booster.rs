use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

use log::info;
use ndarray::{Array1, ArrayView2};

use crate::{
    ModelErr, Result,
    objective::Objective,
    predictor::Predictor,
    schema::{BoosterDoc, ModelDoc, TreeDoc},
    tree::RegressionTree,
};

/// A gradient boosted tree ensemble decoded from an XGBoost JSON model.
#[derive(Debug, Clone)]
pub struct Booster {
    trees: Vec<RegressionTree>,
    tree_weights: Vec<f32>,
    base_margin: f32,
    objective: Objective,
    num_feature: usize,
}

impl Booster {
    /// Loads a booster from a JSON model file.
    ///
    /// # Arguments
    /// * `path` - The location of the model file.
    ///
    /// # Returns
    /// The booster, `NotFound` if nothing exists at `path`, or the error that prevented
    /// decoding it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("loading model from {}", path.display());

        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ModelErr::NotFound {
                path: path.to_path_buf(),
            },
            _ => ModelErr::Io(e),
        })?;

        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let doc: ModelDoc = serde_json::from_reader(reader)?;
        Self::from_doc(doc)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let doc: ModelDoc = serde_json::from_str(json)?;
        Self::from_doc(doc)
    }

    fn from_doc(doc: ModelDoc) -> Result<Self> {
        let learner = doc.learner;
        let num_feature = learner
            .learner_model_param
            .num_feature
            .as_usize("num_feature")?;
        let base_score = learner
            .learner_model_param
            .base_score
            .as_f32("base_score")?;

        if let Some(num_target) = &learner.learner_model_param.num_target {
            let num_target = num_target.as_usize("num_target")?;
            if num_target > 1 {
                return Err(ModelErr::InvalidModel(format!(
                    "model has {num_target} targets, only single-target models are supported"
                )));
            }
        }

        let objective = Objective::from_name(&learner.objective.name)?;
        let base_margin = objective.base_margin(base_score)?;

        let mut forest = Forest::from_doc(learner.gradient_booster)?;
        let mut tree_weights = forest
            .weights
            .take()
            .unwrap_or_else(|| vec![1.0; forest.trees.len()]);
        if tree_weights.len() != forest.trees.len() {
            return Err(ModelErr::InvalidModel(format!(
                "weight_drop has {} entries for {} trees",
                tree_weights.len(),
                forest.trees.len()
            )));
        }

        // Early stopping keeps the extra rounds in the file, prediction only uses the rounds
        // up to and including `best_iteration`.
        let used = match &learner.attributes.best_iteration {
            Some(best) => forest.trees_in(best.as_usize("best_iteration")? + 1)?,
            None => forest.trees.len(),
        };
        tree_weights.truncate(used);

        let trees = forest.trees[..used]
            .iter()
            .enumerate()
            .map(|(id, tree)| RegressionTree::from_doc(tree, id, num_feature))
            .collect::<Result<Vec<_>>>()?;

        info!(
            "decoded {} of {} tree(s) with {} node(s), objective {}, {num_feature} feature(s)",
            trees.len(),
            forest.trees.len(),
            trees.iter().map(RegressionTree::num_nodes).sum::<usize>(),
            learner.objective.name
        );

        Ok(Self {
            trees,
            tree_weights,
            base_margin,
            objective,
            num_feature,
        })
    }

    pub fn num_feature(&self) -> usize {
        self.num_feature
    }

    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }
}

/// The trees of a booster section in boosting order.
struct Forest {
    trees: Vec<TreeDoc>,
    weights: Option<Vec<f32>>,
    iteration_indptr: Option<Vec<usize>>,
    num_parallel_tree: usize,
}

impl Forest {
    /// Resolves a `gbtree` or `dart` section. For dart, `weights` holds the per-tree scale.
    fn from_doc(booster: BoosterDoc) -> Result<Self> {
        match booster.name.as_str() {
            "gbtree" => {
                let model = booster.model.ok_or_else(|| {
                    ModelErr::InvalidModel("gbtree booster without a model".into())
                })?;
                let num_parallel_tree = match &model.gbtree_model_param {
                    Some(param) => param.num_parallel_tree.as_usize("num_parallel_tree")?,
                    None => 1,
                };

                Ok(Self {
                    trees: model.trees,
                    weights: None,
                    iteration_indptr: model.iteration_indptr.filter(|p| !p.is_empty()),
                    num_parallel_tree: num_parallel_tree.max(1),
                })
            }
            "dart" => {
                let weights = booster.weight_drop.ok_or_else(|| {
                    ModelErr::InvalidModel("dart booster without weight_drop".into())
                })?;
                let inner = booster.gbtree.ok_or_else(|| {
                    ModelErr::InvalidModel("dart booster without a gbtree section".into())
                })?;

                Ok(Self {
                    weights: Some(weights),
                    ..Self::from_doc(*inner)?
                })
            }
            other => Err(ModelErr::UnsupportedBooster(other.to_string())),
        }
    }

    /// Returns how many trees the first `iterations` boosting rounds consist of.
    fn trees_in(&self, iterations: usize) -> Result<usize> {
        let end = match &self.iteration_indptr {
            Some(indptr) => indptr.get(iterations).copied().ok_or_else(|| {
                ModelErr::InvalidModel(format!(
                    "best_iteration {} is past the {} recorded round(s)",
                    iterations - 1,
                    indptr.len() - 1
                ))
            })?,
            None => iterations.saturating_mul(self.num_parallel_tree),
        };

        if end > self.trees.len() {
            return Err(ModelErr::InvalidModel(format!(
                "best_iteration {} needs {end} trees, model has {}",
                iterations - 1,
                self.trees.len()
            )));
        }

        Ok(end)
    }
}

impl Predictor for Booster {
    fn predict(&self, x: ArrayView2<f32>) -> Result<Array1<f32>> {
        if x.ncols() != self.num_feature {
            return Err(ModelErr::FeatureCountMismatch {
                got: x.ncols(),
                expected: self.num_feature,
            });
        }

        let preds = x
            .rows()
            .into_iter()
            .map(|row| {
                let margin = self
                    .trees
                    .iter()
                    .zip(&self.tree_weights)
                    .fold(self.base_margin, |acc, (tree, w)| {
                        acc + w * tree.leaf_value(row)
                    });
                self.objective.transform(margin)
            })
            .collect();

        Ok(preds)
    }
}
