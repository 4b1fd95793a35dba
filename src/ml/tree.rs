//! CART decision tree for binary classification.

use rand::Rng;
use rand::seq::SliceRandom;

/// Growth limits for a single tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeParams {
    /// Maximum depth (`None` for unlimited).
    pub max_depth: Option<usize>,
    /// Minimum samples required to split a node.
    pub min_samples_split: usize,
    /// Minimum samples in each child of a split.
    pub min_samples_leaf: usize,
    /// Features examined per split.
    pub max_features: usize,
}

/// Binary classification tree split on Gini impurity.
#[derive(Debug, Clone)]
pub struct DecisionTree {
    root: TreeNode,
}

#[derive(Debug, Clone)]
enum TreeNode {
    Leaf {
        /// Fraction of positive samples that reached this leaf.
        positive_fraction: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

/// Training data shared by every recursive call.
struct TreeBuilder<'a, R> {
    features: &'a [Vec<f64>],
    labels: &'a [bool],
    n_features: usize,
    params: TreeParams,
    rng: &'a mut R,
}

/// Best split found at a node.
struct SplitCandidate {
    feature: usize,
    threshold: f64,
    impurity: f64,
}

impl DecisionTree {
    /// Fit a tree to the rows selected by `indices`.
    ///
    /// `indices` may repeat rows (bootstrap samples). Every row must have the
    /// same width and `indices` must not be empty.
    pub fn fit<R: Rng>(
        features: &[Vec<f64>],
        labels: &[bool],
        indices: &[usize],
        params: TreeParams,
        rng: &mut R,
    ) -> Self {
        let n_features = features.first().map_or(0, Vec::len);
        let mut builder = TreeBuilder {
            features,
            labels,
            n_features,
            params,
            rng,
        };
        let mut indices = indices.to_vec();
        let root = builder.build_tree(&mut indices, 0);
        Self { root }
    }

    /// Probability of the positive class for one feature row.
    pub fn predict_proba(&self, row: &[f64]) -> f64 {
        Self::predict_node(&self.root, row)
    }

    /// Depth of the deepest leaf (a single leaf has depth 0).
    pub fn depth(&self) -> usize {
        fn depth_of(node: &TreeNode) -> usize {
            match node {
                TreeNode::Leaf { .. } => 0,
                TreeNode::Split { left, right, .. } => 1 + depth_of(left).max(depth_of(right)),
            }
        }
        depth_of(&self.root)
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        fn count(node: &TreeNode) -> usize {
            match node {
                TreeNode::Leaf { .. } => 1,
                TreeNode::Split { left, right, .. } => count(left) + count(right),
            }
        }
        count(&self.root)
    }

    fn predict_node(node: &TreeNode, row: &[f64]) -> f64 {
        match node {
            TreeNode::Leaf { positive_fraction } => *positive_fraction,
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                if row[*feature] <= *threshold {
                    Self::predict_node(left, row)
                } else {
                    Self::predict_node(right, row)
                }
            }
        }
    }
}

impl<R: Rng> TreeBuilder<'_, R> {
    /// Recursively build the tree.
    ///
    /// Stops splitting when the node is pure, the depth limit is reached,
    /// the node is too small, or no valid split exists.
    fn build_tree(&mut self, indices: &mut [usize], depth: usize) -> TreeNode {
        let samples = indices.len();
        let positives = indices.iter().filter(|&&i| self.labels[i]).count();

        let depth_reached = self.params.max_depth.is_some_and(|d| depth >= d);
        if positives == 0
            || positives == samples
            || depth_reached
            || samples < self.params.min_samples_split
        {
            return Self::leaf(positives, samples);
        }

        let Some(split) = self.find_best_split(indices) else {
            return Self::leaf(positives, samples);
        };

        // Partition in place: rows going left first.
        let mut boundary = 0;
        for i in 0..indices.len() {
            if self.features[indices[i]][split.feature] <= split.threshold {
                indices.swap(i, boundary);
                boundary += 1;
            }
        }
        let (left_indices, right_indices) = indices.split_at_mut(boundary);

        let left = self.build_tree(left_indices, depth + 1);
        let right = self.build_tree(right_indices, depth + 1);

        TreeNode::Split {
            feature: split.feature,
            threshold: split.threshold,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Find the split with the lowest weighted Gini impurity.
    ///
    /// Features are visited in a random order. At least `max_features` are
    /// examined, and the search continues past that only while no valid split
    /// has been found.
    fn find_best_split(&mut self, indices: &[usize]) -> Option<SplitCandidate> {
        let mut candidates: Vec<usize> = (0..self.n_features).collect();
        candidates.shuffle(&mut *self.rng);

        let min_leaf = self.params.min_samples_leaf;
        let n = indices.len();
        let total_positive = indices.iter().filter(|&&i| self.labels[i]).count();

        let mut best: Option<SplitCandidate> = None;
        let mut values: Vec<(f64, bool)> = Vec::with_capacity(n);

        for (visited, &feature) in candidates.iter().enumerate() {
            if visited >= self.params.max_features && best.is_some() {
                break;
            }

            values.clear();
            values.extend(
                indices
                    .iter()
                    .map(|&i| (self.features[i][feature], self.labels[i])),
            );
            values.sort_by(|a, b| a.0.total_cmp(&b.0));

            let mut left_positive = 0;
            for split_at in 1..n {
                if values[split_at - 1].1 {
                    left_positive += 1;
                }

                let (prev, next) = (values[split_at - 1].0, values[split_at].0);
                if prev >= next || split_at < min_leaf || n - split_at < min_leaf {
                    continue;
                }

                let impurity = weighted_gini(split_at, left_positive, n, total_positive);
                if best.as_ref().is_none_or(|b| impurity < b.impurity) {
                    let mut threshold = prev + (next - prev) / 2.0;
                    if threshold >= next {
                        threshold = prev;
                    }
                    best = Some(SplitCandidate {
                        feature,
                        threshold,
                        impurity,
                    });
                }
            }
        }

        best
    }

    fn leaf(positives: usize, samples: usize) -> TreeNode {
        TreeNode::Leaf {
            positive_fraction: if samples == 0 {
                0.0
            } else {
                positives as f64 / samples as f64
            },
        }
    }
}

/// Weighted Gini impurity of a two-way split.
fn weighted_gini(left_n: usize, left_pos: usize, n: usize, total_pos: usize) -> f64 {
    let right_n = n - left_n;
    let right_pos = total_pos - left_pos;
    let gini = |pos: usize, count: usize| {
        let p = pos as f64 / count as f64;
        2.0 * p * (1.0 - p)
    };
    (left_n as f64 * gini(left_pos, left_n) + right_n as f64 * gini(right_pos, right_n)) / n as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn params() -> TreeParams {
        TreeParams {
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            max_features: 2,
        }
    }

    #[test]
    fn test_single_threshold() {
        let features: Vec<Vec<f64>> = (0..10).map(|i| vec![i as f64, 0.0]).collect();
        let labels: Vec<bool> = (0..10).map(|i| i >= 6).collect();
        let indices: Vec<usize> = (0..10).collect();
        let mut rng = StdRng::seed_from_u64(7);

        let tree = DecisionTree::fit(&features, &labels, &indices, params(), &mut rng);

        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.leaf_count(), 2);
        assert_eq!(tree.predict_proba(&[5.4, 0.0]), 0.0);
        assert_eq!(tree.predict_proba(&[5.6, 0.0]), 1.0);
    }

    #[test]
    fn test_pure_node_is_leaf() {
        let features = vec![vec![1.0], vec![2.0], vec![3.0]];
        let labels = vec![true, true, true];
        let mut rng = StdRng::seed_from_u64(1);

        let tree = DecisionTree::fit(&features, &labels, &[0, 1, 2], params(), &mut rng);

        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.predict_proba(&[100.0]), 1.0);
    }

    #[test]
    fn test_identical_rows_with_mixed_labels() {
        let features = vec![vec![1.0], vec![1.0], vec![1.0], vec![1.0]];
        let labels = vec![true, false, true, true];
        let mut rng = StdRng::seed_from_u64(1);

        let tree = DecisionTree::fit(&features, &labels, &[0, 1, 2, 3], params(), &mut rng);

        assert_eq!(tree.leaf_count(), 1);
        assert!((tree.predict_proba(&[1.0]) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_max_depth_limits_growth() {
        let features: Vec<Vec<f64>> = (0..16).map(|i| vec![i as f64]).collect();
        let labels: Vec<bool> = (0..16).map(|i| i % 2 == 0).collect();
        let indices: Vec<usize> = (0..16).collect();
        let mut rng = StdRng::seed_from_u64(3);
        let limited = TreeParams {
            max_depth: Some(2),
            ..params()
        };

        let tree = DecisionTree::fit(&features, &labels, &indices, limited, &mut rng);
        assert!(tree.depth() <= 2);
    }

    #[test]
    fn test_bootstrap_indices_with_repeats() {
        let features = vec![vec![0.0], vec![10.0]];
        let labels = vec![false, true];
        let mut rng = StdRng::seed_from_u64(5);

        let tree = DecisionTree::fit(&features, &labels, &[0, 0, 1, 0], params(), &mut rng);

        assert_eq!(tree.predict_proba(&[0.0]), 0.0);
        assert_eq!(tree.predict_proba(&[10.0]), 1.0);
    }

    #[test]
    fn test_weighted_gini() {
        assert_eq!(weighted_gini(2, 0, 4, 2), 0.0);
        assert!((weighted_gini(2, 1, 4, 2) - 0.5).abs() < 1e-12);
    }
}
