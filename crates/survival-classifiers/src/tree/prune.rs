//! Weakest-link (cost-complexity) pruning.
use std::collections::BTreeMap;

use crate::tree::cost::{cost, CostInfo};
use crate::tree::AnnotatedTree;

/// Smallest `cost` over the internal nodes of `tree`, or `None` for a leaf.
pub fn weakest_link(tree: &AnnotatedTree<CostInfo>) -> Option<f64> {
    match tree {
        AnnotatedTree::Leaf { .. } => None,
        AnnotatedTree::Node { children, .. } => Some(
            children
                .values()
                .filter_map(weakest_link)
                .fold(cost(tree), f64::min),
        ),
    }
}

/// Collapse every internal node whose cost equals `alpha` into a leaf
/// predicting its majority label, re-deriving `CostInfo` on the way up.
///
/// Costs are read from the input tree, so a node and one of its descendants
/// may both match; the outermost collapse wins.
fn collapse(tree: &AnnotatedTree<CostInfo>, alpha: f64) -> AnnotatedTree<CostInfo> {
    match tree {
        AnnotatedTree::Leaf { .. } => tree.clone(),
        AnnotatedTree::Node {
            feature,
            children,
            annotation,
        } => {
            if cost(tree) == alpha {
                return AnnotatedTree::Leaf {
                    label: annotation.label_counts.majority(),
                    annotation: CostInfo::leaf(annotation.label_counts),
                };
            }
            let children: BTreeMap<_, _> = children
                .iter()
                .map(|(value, child)| (*value, collapse(child, alpha)))
                .collect();
            AnnotatedTree::Node {
                feature: *feature,
                annotation: CostInfo::node(annotation.label_counts, &children),
                children,
            }
        }
    }
}

/// Generate the nested sequence of pruned trees.
///
/// The sequence starts with `tree` itself and ends with a single leaf; each
/// element collapses every weakest link of its predecessor, so leaf counts
/// strictly decrease along the sequence.
pub fn pruning_sequence(tree: AnnotatedTree<CostInfo>) -> Vec<AnnotatedTree<CostInfo>> {
    let mut sequence = vec![tree];
    while let Some(alpha) = sequence.last().and_then(weakest_link) {
        let current = &sequence[sequence.len() - 1];
        let next = collapse(current, alpha);
        log::debug!(
            "Pruning step {}: alpha = {:.4}, leaves {} -> {}",
            sequence.len(),
            alpha,
            current.leaf_count(),
            next.leaf_count()
        );
        sequence.push(next);
    }
    sequence
}
