//! Gradient-boosted classifier over the four engineered match features.
//!
//! Boosting with logistic loss: the base score is the log-odds of the training
//! label mean, each round fits a depth-limited regression tree to the current
//! residuals, and leaf values are Newton steps. Fitting is a deterministic
//! greedy search, so repeated runs on the same split produce the same model.

use crate::historical::{FEATURE_COUNT, TrainSample};

const PRIOR_EPS: f64 = 1e-6;
const HESSIAN_FLOOR: f64 = 1e-9;
const MAX_LEAF_VALUE: f64 = 10.0;

#[derive(Debug, Clone, Copy)]
pub struct GbdtParams {
    pub rounds: usize,
    pub learning_rate: f64,
    pub max_depth: usize,
    pub min_leaf: usize,
}

impl Default for GbdtParams {
    fn default() -> Self {
        Self {
            rounds: 100,
            learning_rate: 0.1,
            max_depth: 3,
            min_leaf: 1,
        }
    }
}

#[derive(Debug, Clone)]
enum Node {
    Leaf {
        value: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

#[derive(Debug, Clone)]
pub struct GbdtModel {
    base_score: f64,
    learning_rate: f64,
    trees: Vec<Node>,
    split_gain: [f64; FEATURE_COUNT],
}

impl GbdtModel {
    pub fn fit(samples: &[TrainSample], params: GbdtParams) -> Self {
        let positives = samples.iter().filter(|s| s.p1_won).count();
        let prior = if samples.is_empty() {
            0.5
        } else {
            (positives as f64 / samples.len() as f64).clamp(PRIOR_EPS, 1.0 - PRIOR_EPS)
        };

        let mut model = Self {
            base_score: (prior / (1.0 - prior)).ln(),
            learning_rate: params.learning_rate,
            trees: Vec::with_capacity(params.rounds),
            split_gain: [0.0; FEATURE_COUNT],
        };
        if samples.is_empty() {
            return model;
        }

        let mut scores = vec![model.base_score; samples.len()];
        let all_idx: Vec<usize> = (0..samples.len()).collect();

        for _ in 0..params.rounds {
            let mut residuals = Vec::with_capacity(samples.len());
            let mut hessians = Vec::with_capacity(samples.len());
            for (sample, score) in samples.iter().zip(&scores) {
                let p = sigmoid(*score);
                let y = if sample.p1_won { 1.0 } else { 0.0 };
                residuals.push(y - p);
                hessians.push((p * (1.0 - p)).max(HESSIAN_FLOOR));
            }

            let tree = grow_tree(
                samples,
                &residuals,
                &hessians,
                &all_idx,
                params.max_depth,
                params.min_leaf,
                &mut model.split_gain,
            );
            for (i, score) in scores.iter_mut().enumerate() {
                *score += params.learning_rate * eval_node(&tree, &samples[i].x);
            }
            model.trees.push(tree);
        }

        model
    }

    fn raw_score(&self, x: &[f64; FEATURE_COUNT]) -> f64 {
        let mut score = self.base_score;
        for tree in &self.trees {
            score += self.learning_rate * eval_node(tree, x);
        }
        score
    }

    /// Probability that player 1 wins; the player-2 probability is the
    /// complement.
    pub fn predict_proba(&self, x: [f64; FEATURE_COUNT]) -> f64 {
        sigmoid(self.raw_score(&x))
    }

    /// Per-feature share of the total split gain. Sums to 1 unless no split
    /// ever fired, in which case every share is 0.
    pub fn feature_importances(&self) -> [f64; FEATURE_COUNT] {
        let total: f64 = self.split_gain.iter().sum();
        if total <= 0.0 {
            return [0.0; FEATURE_COUNT];
        }
        let mut out = self.split_gain;
        for v in &mut out {
            *v /= total;
        }
        out
    }
}

/// Fraction of samples where the >0.5 winner rule matches the label.
pub fn accuracy(model: &GbdtModel, samples: &[TrainSample]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let correct = samples
        .iter()
        .filter(|s| (model.predict_proba(s.x) > 0.5) == s.p1_won)
        .count();
    correct as f64 / samples.len() as f64
}

fn grow_tree(
    samples: &[TrainSample],
    residuals: &[f64],
    hessians: &[f64],
    idx: &[usize],
    depth: usize,
    min_leaf: usize,
    gain_out: &mut [f64; FEATURE_COUNT],
) -> Node {
    if depth == 0 || idx.len() < 2 * min_leaf.max(1) {
        return Node::Leaf {
            value: leaf_value(residuals, hessians, idx),
        };
    }

    let Some((feature, threshold, gain)) = best_split(samples, residuals, idx, min_leaf) else {
        return Node::Leaf {
            value: leaf_value(residuals, hessians, idx),
        };
    };
    gain_out[feature] += gain;

    let mut left_idx = Vec::new();
    let mut right_idx = Vec::new();
    for &i in idx {
        if samples[i].x[feature] <= threshold {
            left_idx.push(i);
        } else {
            right_idx.push(i);
        }
    }

    Node::Split {
        feature,
        threshold,
        left: Box::new(grow_tree(
            samples, residuals, hessians, &left_idx, depth - 1, min_leaf, gain_out,
        )),
        right: Box::new(grow_tree(
            samples, residuals, hessians, &right_idx, depth - 1, min_leaf, gain_out,
        )),
    }
}

/// Best squared-error split over all features, thresholds at midpoints between
/// distinct neighboring values. Returns None when nothing improves on the
/// parent.
fn best_split(
    samples: &[TrainSample],
    residuals: &[f64],
    idx: &[usize],
    min_leaf: usize,
) -> Option<(usize, f64, f64)> {
    let min_leaf = min_leaf.max(1);
    let total: f64 = idx.iter().map(|&i| residuals[i]).sum();
    let parent_score = total * total / idx.len() as f64;

    let mut best: Option<(usize, f64, f64)> = None;
    for feature in 0..FEATURE_COUNT {
        let mut order = idx.to_vec();
        order.sort_by(|&a, &b| {
            samples[a].x[feature]
                .partial_cmp(&samples[b].x[feature])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut left_sum = 0.0;
        for (pos, &i) in order.iter().enumerate().take(order.len() - 1) {
            left_sum += residuals[i];
            let left_n = pos + 1;
            let right_n = order.len() - left_n;
            if left_n < min_leaf || right_n < min_leaf {
                continue;
            }

            let here = samples[i].x[feature];
            let next = samples[order[pos + 1]].x[feature];
            if next <= here {
                continue;
            }

            let right_sum = total - left_sum;
            let gain = left_sum * left_sum / left_n as f64
                + right_sum * right_sum / right_n as f64
                - parent_score;
            if gain > best.map(|(_, _, g)| g).unwrap_or(1e-12) {
                best = Some((feature, (here + next) / 2.0, gain));
            }
        }
    }
    best
}

fn leaf_value(residuals: &[f64], hessians: &[f64], idx: &[usize]) -> f64 {
    if idx.is_empty() {
        return 0.0;
    }
    let residual_sum: f64 = idx.iter().map(|&i| residuals[i]).sum();
    let hessian_sum: f64 = idx.iter().map(|&i| hessians[i]).sum();
    (residual_sum / hessian_sum.max(HESSIAN_FLOOR)).clamp(-MAX_LEAF_VALUE, MAX_LEAF_VALUE)
}

fn eval_node(node: &Node, x: &[f64; FEATURE_COUNT]) -> f64 {
    match node {
        Node::Leaf { value } => *value,
        Node::Split {
            feature,
            threshold,
            left,
            right,
        } => {
            if x[*feature] <= *threshold {
                eval_node(left, x)
            } else {
                eval_node(right, x)
            }
        }
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
