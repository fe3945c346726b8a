//! Random forest evaluation
//!
//! Trees use the flat array layout of a fitted scikit-learn `tree_`:
//! node `i` splits on `feature[i]` at `threshold[i]`, with children
//! `children_left[i]` / `children_right[i]`, and `-1` marking a leaf.
//! `value[i]` holds the per-class weights reaching node `i`.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SymptomaticError};

const LEAF: i64 = -1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<Vec<f64>>,
}

impl DecisionTree {
    pub fn node_count(&self) -> usize {
        self.children_left.len()
    }

    /// Check array shapes and index ranges against the forest dimensions
    pub fn validate(&self, n_features: usize, n_classes: usize) -> std::result::Result<(), String> {
        let n = self.node_count();
        if n == 0 {
            return Err("tree has no nodes".to_string());
        }
        if self.children_right.len() != n
            || self.feature.len() != n
            || self.threshold.len() != n
            || self.value.len() != n
        {
            return Err(format!(
                "tree arrays have mismatched lengths (children_left={}, children_right={}, feature={}, threshold={}, value={})",
                n,
                self.children_right.len(),
                self.feature.len(),
                self.threshold.len(),
                self.value.len()
            ));
        }

        for node in 0..n {
            let (left, right) = (self.children_left[node], self.children_right[node]);
            let is_leaf = left == LEAF;
            if is_leaf != (right == LEAF) {
                return Err(format!("node {} has exactly one child", node));
            }
            if !is_leaf {
                for child in [left, right] {
                    if child <= node as i64 || child >= n as i64 {
                        return Err(format!("node {} has out-of-range child {}", node, child));
                    }
                }
                let feature = self.feature[node];
                if feature < 0 || feature as usize >= n_features {
                    return Err(format!(
                        "node {} splits on feature {} but the model has {} features",
                        node, feature, n_features
                    ));
                }
            }
            if self.value[node].len() != n_classes {
                return Err(format!(
                    "node {} has {} class weights, expected {}",
                    node,
                    self.value[node].len(),
                    n_classes
                ));
            }
        }
        Ok(())
    }

    fn leaf_for(&self, x: &[f64]) -> usize {
        let mut node = 0usize;
        while self.children_left[node] != LEAF {
            let feature = self.feature[node] as usize;
            node = if x[feature] <= self.threshold[node] {
                self.children_left[node] as usize
            } else {
                self.children_right[node] as usize
            };
        }
        node
    }

    /// Class probabilities for one sample: the reached leaf's weights, normalized
    pub fn predict_proba(&self, x: &[f64]) -> Vec<f64> {
        let weights = &self.value[self.leaf_for(x)];
        let total: f64 = weights.iter().sum();
        if total > 0.0 {
            weights.iter().map(|w| w / total).collect()
        } else {
            vec![0.0; weights.len()]
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForest {
    pub n_features: usize,
    pub n_classes: usize,
    pub trees: Vec<DecisionTree>,
}

impl RandomForest {
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.trees.is_empty() {
            return Err("forest has no trees".to_string());
        }
        if self.n_classes == 0 {
            return Err("forest has no classes".to_string());
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(self.n_features, self.n_classes)
                .map_err(|e| format!("tree {}: {}", i, e))?;
        }
        Ok(())
    }

    /// Mean of the per-tree class probabilities
    pub fn predict_proba(&self, x: &[f64]) -> Result<Vec<f64>> {
        if x.len() != self.n_features {
            return Err(SymptomaticError::prediction(format!(
                "Input has {} features, model expects {}",
                x.len(),
                self.n_features
            )));
        }

        let mut probs = vec![0.0; self.n_classes];
        for tree in &self.trees {
            for (acc, p) in probs.iter_mut().zip(tree.predict_proba(x)) {
                *acc += p;
            }
        }
        let n_trees = self.trees.len() as f64;
        probs.iter_mut().for_each(|p| *p /= n_trees);
        Ok(probs)
    }
}
