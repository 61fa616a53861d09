use std::collections::BTreeMap;

use crate::data_handling::{Example, Label, PassengerId, PassengerRow};
use crate::tree::Tree;

/// Prediction for an example whose value was never seen at a node while the
/// tree was built.
pub const UNMATCHED_BRANCH_LABEL: Label = Label::Died;

/// Classify one example by walking the tree from the root.
///
/// Falls back to `UNMATCHED_BRANCH_LABEL` when a node has no child for the
/// example's value, regardless of the node's majority label.
pub fn predict(tree: &Tree, example: &Example) -> Label {
    let mut node = tree;
    loop {
        match node {
            Tree::Leaf(label) => return *label,
            Tree::Node { feature, children } => match children.get(&feature.value(example)) {
                Some(child) => node = child,
                None => return UNMATCHED_BRANCH_LABEL,
            },
        }
    }
}

/// Classify every row, keyed by passenger id.
pub fn predict_all(tree: &Tree, rows: &[PassengerRow]) -> BTreeMap<PassengerId, Label> {
    rows.iter()
        .map(|row| (row.passenger_id, predict(tree, &row.extract_example())))
        .collect()
}
