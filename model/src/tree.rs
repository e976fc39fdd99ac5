use ndarray::ArrayView1;

use crate::{ModelErr, Result, schema::TreeDoc};

const NO_CHILD: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Node {
    Split {
        feature: usize,
        threshold: f32,
        left: usize,
        right: usize,
        default_left: bool,
    },
    Leaf {
        value: f32,
    },
}

/// A single regression tree stored as a flat node array, root at index 0.
///
/// Children always sit at a higher index than their parent, which `from_doc` checks, so a
/// walk from the root is guaranteed to reach a leaf.
#[derive(Debug, Clone)]
pub struct RegressionTree {
    nodes: Vec<Node>,
}

impl RegressionTree {
    /// Builds a tree from its JSON representation.
    ///
    /// # Arguments
    /// * `doc` - The decoded tree.
    /// * `id` - The tree's position in the ensemble, for error messages.
    /// * `num_feature` - The width of the rows the tree will be evaluated on.
    ///
    /// # Returns
    /// The tree, or an `InvalidModel` error describing the first inconsistency found.
    pub fn from_doc(doc: &TreeDoc, id: usize, num_feature: usize) -> Result<Self> {
        let invalid = |msg: String| ModelErr::InvalidModel(format!("tree {id}: {msg}"));

        let n = doc.left_children.len();
        if n == 0 {
            return Err(invalid("has no nodes".into()));
        }

        let lengths = [
            ("right_children", doc.right_children.len()),
            ("split_indices", doc.split_indices.len()),
            ("split_conditions", doc.split_conditions.len()),
            ("default_left", doc.default_left.len()),
        ];
        for (field, len) in lengths {
            if len != n {
                return Err(invalid(format!(
                    "{field} has {len} entries, left_children has {n}"
                )));
            }
        }

        if !doc.split_type.is_empty() && doc.split_type.len() != n {
            return Err(invalid(format!(
                "split_type has {} entries, left_children has {n}",
                doc.split_type.len()
            )));
        }

        let child = |i: usize, raw: i32| -> Result<usize> {
            match usize::try_from(raw) {
                Ok(c) if c > i && c < n => Ok(c),
                _ => Err(invalid(format!("node {i} has invalid child {raw}"))),
            }
        };

        let mut nodes = Vec::with_capacity(n);
        for i in 0..n {
            if doc.left_children[i] == NO_CHILD {
                nodes.push(Node::Leaf {
                    value: doc.split_conditions[i],
                });
                continue;
            }

            if doc.split_type.get(i).copied().unwrap_or(0) != 0 {
                return Err(invalid(format!("node {i} uses a categorical split")));
            }

            let feature = doc.split_indices[i] as usize;
            if feature >= num_feature {
                return Err(invalid(format!(
                    "node {i} splits on feature {feature}, model has {num_feature}"
                )));
            }

            nodes.push(Node::Split {
                feature,
                threshold: doc.split_conditions[i],
                left: child(i, doc.left_children[i])?,
                right: child(i, doc.right_children[i])?,
                default_left: doc.default_left[i].is_set(),
            });
        }

        Ok(Self { nodes })
    }

    /// Returns the value of the leaf `row` falls into. `NaN` features follow the node's
    /// default direction.
    pub fn leaf_value(&self, row: ArrayView1<f32>) -> f32 {
        let mut idx = 0;
        loop {
            match self.nodes[idx] {
                Node::Leaf { value } => return value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    default_left,
                } => {
                    let x = row[feature];
                    idx = if x.is_nan() {
                        if default_left { left } else { right }
                    } else if x < threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use ndarray::arr1;

    use super::*;
    use crate::schema::Flag;

    /// feature 0 < 2.0 ? (feature 1 < 0.5 ? 10 : 20) : 30, missing goes right at the root and
    /// left at node 1.
    fn doc() -> TreeDoc {
        TreeDoc {
            left_children: vec![1, 3, -1, -1, -1],
            right_children: vec![2, 4, -1, -1, -1],
            split_indices: vec![0, 1, 0, 0, 0],
            split_conditions: vec![2.0, 0.5, 30.0, 10.0, 20.0],
            default_left: vec![Flag::Int(0), Flag::Int(1), Flag::Int(0), Flag::Int(0), Flag::Int(0)],
            split_type: vec![],
        }
    }

    #[test]
    fn routes_on_strict_less_than() {
        let tree = RegressionTree::from_doc(&doc(), 0, 2).unwrap();
        assert_eq!(tree.num_nodes(), 5);
        assert_eq!(tree.leaf_value(arr1(&[1.0, 0.0]).view()), 10.0);
        assert_eq!(tree.leaf_value(arr1(&[1.0, 0.5]).view()), 20.0);
        assert_eq!(tree.leaf_value(arr1(&[2.0, 0.0]).view()), 30.0);
    }

    #[test]
    fn missing_values_follow_default_direction() {
        let tree = RegressionTree::from_doc(&doc(), 0, 2).unwrap();
        assert_eq!(tree.leaf_value(arr1(&[f32::NAN, 0.0]).view()), 30.0);
        assert_eq!(tree.leaf_value(arr1(&[0.0, f32::NAN]).view()), 10.0);
    }

    #[test]
    fn single_leaf_tree() {
        let doc = TreeDoc {
            left_children: vec![-1],
            right_children: vec![-1],
            split_indices: vec![0],
            split_conditions: vec![-0.25],
            default_left: vec![Flag::Bool(false)],
            split_type: vec![0],
        };
        let tree = RegressionTree::from_doc(&doc, 0, 16).unwrap();
        assert_eq!(tree.leaf_value(arr1(&[0.0; 16]).view()), -0.25);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let mut doc = doc();
        doc.split_conditions.pop();
        let err = RegressionTree::from_doc(&doc, 3, 2).unwrap_err();
        assert!(err.to_string().contains("tree 3: split_conditions"));
    }

    #[test]
    fn rejects_backward_and_out_of_range_children() {
        let mut cyclic = doc();
        cyclic.left_children[1] = 0;
        assert!(RegressionTree::from_doc(&cyclic, 0, 2).is_err());

        let mut dangling = doc();
        dangling.right_children[0] = 9;
        assert!(RegressionTree::from_doc(&dangling, 0, 2).is_err());
    }

    #[test]
    fn rejects_out_of_range_features_and_categorical_splits() {
        assert!(RegressionTree::from_doc(&doc(), 0, 1).is_err());

        let mut categorical = doc();
        categorical.split_type = vec![1, 0, 0, 0, 0];
        let err = RegressionTree::from_doc(&categorical, 0, 2).unwrap_err();
        assert!(err.to_string().contains("categorical"));
    }

    #[test]
    fn rejects_empty_tree() {
        let empty = TreeDoc {
            left_children: vec![],
            right_children: vec![],
            split_indices: vec![],
            split_conditions: vec![],
            default_left: vec![],
            split_type: vec![],
        };
        assert!(RegressionTree::from_doc(&empty, 0, 2).is_err());
    }
}
