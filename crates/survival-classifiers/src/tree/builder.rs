//! Greedy top-down induction of categorical decision trees.
use rayon::prelude::*;

use crate::config::TreeConfig;
use crate::data_handling::{Label, TrainingExample};
use crate::tree::gain::{gain, partition};
use crate::tree::{AnnotatedTree, Feature, LabelCounts, Tree};

/// Builds unpruned trees by repeatedly splitting on the feature with the
/// highest information gain.
#[derive(Debug, Clone, Copy)]
pub struct TreeBuilder {
    parallel_gain: bool,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self {
            parallel_gain: true,
        }
    }
}

impl TreeBuilder {
    /// Create a builder
    ///
    /// # Arguments
    ///
    /// * `parallel_gain` - Score candidate features on the rayon pool. Results
    ///   are identical either way.
    pub fn new(parallel_gain: bool) -> Self {
        Self { parallel_gain }
    }

    pub fn from_config(config: &TreeConfig) -> Self {
        Self::new(config.parallel_gain)
    }

    /// Build an unpruned tree.
    pub fn build(&self, examples: &[TrainingExample], features: &[Feature]) -> Tree {
        self.induce(examples, features).to_tree()
    }

    /// Build an unpruned tree annotated with the label counts of the examples
    /// that reached each node.
    ///
    /// Splitting stops with a majority leaf when no candidate features are
    /// left, the examples share a single label, or no feature has positive
    /// gain. A split feature is removed from the candidates of its own
    /// subtree only; sibling branches choose independently.
    pub fn induce(
        &self,
        examples: &[TrainingExample],
        features: &[Feature],
    ) -> AnnotatedTree<LabelCounts> {
        let counts = LabelCounts::from_examples(examples);
        let leaf = |counts: LabelCounts| AnnotatedTree::Leaf {
            label: counts.majority(),
            annotation: counts,
        };

        if features.is_empty() || counts.is_pure() {
            return leaf(counts);
        }

        let (best_idx, best_gain) = self.select_feature(examples, features);
        if best_gain == 0.0 {
            return leaf(counts);
        }

        let feature = features[best_idx];
        let remaining: Vec<Feature> = features
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != best_idx)
            .map(|(_, f)| *f)
            .collect();

        log::trace!(
            "Splitting {} examples on '{}' (gain {:.4})",
            examples.len(),
            feature.name(),
            best_gain
        );

        let children = partition(examples, &feature)
            .into_iter()
            .map(|(value, part)| (value, self.induce(&part, &remaining)))
            .collect();

        AnnotatedTree::Node {
            feature,
            children,
            annotation: counts,
        }
    }

    /// Index and gain of the best candidate. The first feature wins ties.
    fn select_feature(&self, examples: &[TrainingExample], features: &[Feature]) -> (usize, f64) {
        let gains: Vec<f64> = if self.parallel_gain {
            features.par_iter().map(|f| gain(examples, f)).collect()
        } else {
            features.iter().map(|f| gain(examples, f)).collect()
        };

        gains
            .iter()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |(best_idx, best_gain), (i, &g)| {
                if g > best_gain {
                    (i, g)
                } else {
                    (best_idx, best_gain)
                }
            })
    }
}

/// Build an unpruned tree with the default builder.
pub fn build(examples: &[TrainingExample], features: &[Feature]) -> Tree {
    TreeBuilder::default().build(examples, features)
}

/// Most frequent label among `examples`; ties go to `Survived`.
pub fn most_common_label(examples: &[TrainingExample]) -> Label {
    LabelCounts::from_examples(examples).majority()
}
