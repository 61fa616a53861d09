//! Cost-complexity bookkeeping for pruning.
//!
//! `annotate_costs` folds a label-count annotated tree bottom-up into one
//! carrying `CostInfo`, from which `cost` derives the weakest-link value of
//! every internal node.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tree::{AnnotatedTree, FeatureValue, LabelCounts};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostInfo {
    /// Leaves in the subtree rooted here.
    pub leaf_count: usize,
    /// Sum of the resubstitution risk of those leaves.
    pub cumulative_risk: usize,
    /// Labels of the training examples that reached this node.
    pub label_counts: LabelCounts,
}

impl CostInfo {
    pub fn leaf(label_counts: LabelCounts) -> Self {
        Self {
            leaf_count: 1,
            cumulative_risk: resubstitution_risk(&label_counts),
            label_counts,
        }
    }

    /// Aggregate over already annotated children. The node keeps its own
    /// label counts; its risk is the sum of its children's.
    pub fn node(
        label_counts: LabelCounts,
        children: &BTreeMap<FeatureValue, AnnotatedTree<CostInfo>>,
    ) -> Self {
        let (leaf_count, cumulative_risk) = children
            .values()
            .map(AnnotatedTree::annotation)
            .fold((0, 0), |(leaves, risk), info| {
                (leaves + info.leaf_count, risk + info.cumulative_risk)
            });
        Self {
            leaf_count,
            cumulative_risk,
            label_counts,
        }
    }
}

/// Training examples misclassified if a node became a majority-label leaf.
pub fn resubstitution_risk(counts: &LabelCounts) -> usize {
    counts.total() - counts.majority_count()
}

/// Derive `CostInfo` for every node of a label-count annotated tree.
pub fn annotate_costs(tree: &AnnotatedTree<LabelCounts>) -> AnnotatedTree<CostInfo> {
    match tree {
        AnnotatedTree::Leaf { label, annotation } => AnnotatedTree::Leaf {
            label: *label,
            annotation: CostInfo::leaf(*annotation),
        },
        AnnotatedTree::Node {
            feature,
            children,
            annotation,
        } => {
            let children: BTreeMap<_, _> = children
                .iter()
                .map(|(value, child)| (*value, annotate_costs(child)))
                .collect();
            AnnotatedTree::Node {
                feature: *feature,
                annotation: CostInfo::node(*annotation, &children),
                children,
            }
        }
    }
}

/// Risk added per leaf removed when collapsing `tree` into a single leaf.
///
/// Leaves, and any subtree with a single leaf, cost `+inf` so they are never
/// chosen for collapsing.
pub fn cost(tree: &AnnotatedTree<CostInfo>) -> f64 {
    let info = tree.annotation();
    if tree.is_leaf() || info.leaf_count <= 1 {
        return f64::INFINITY;
    }
    let own_risk = resubstitution_risk(&info.label_counts) as f64;
    (own_risk - info.cumulative_risk as f64) / (info.leaf_count - 1) as f64
}
