//! Categorical decision trees.
//!
//! A `Tree` is either a leaf carrying a prediction or a node that splits on a
//! `Feature`, with one child per feature value observed while building it.
//! `AnnotatedTree` has the same shape with a per-node annotation: label
//! counts right after induction, `CostInfo` once prepared for pruning.
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data_handling::{Label, TrainingExample};

pub mod builder;
pub mod cost;
pub mod feature;
pub mod gain;
pub mod predict;
pub mod prune;
pub mod select;

pub use builder::{build, most_common_label, TreeBuilder};
pub use cost::{annotate_costs, cost, resubstitution_risk, CostInfo};
pub use feature::{Feature, FeatureValue};
pub use gain::{entropy, gain};
pub use predict::{predict, predict_all, UNMATCHED_BRANCH_LABEL};
pub use prune::{pruning_sequence, weakest_link};
pub use select::{select_best, Selection};

/// Histogram of labels among the training examples reaching a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabelCounts {
    pub survived: usize,
    pub died: usize,
}

impl LabelCounts {
    pub fn new(survived: usize, died: usize) -> Self {
        Self { survived, died }
    }

    pub fn from_labels<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = Label>,
    {
        let mut counts = LabelCounts::default();
        for label in labels {
            counts.add(label);
        }
        counts
    }

    pub fn from_examples(examples: &[TrainingExample]) -> Self {
        Self::from_labels(examples.iter().map(|e| e.label))
    }

    pub fn add(&mut self, label: Label) {
        match label {
            Label::Survived => self.survived += 1,
            Label::Died => self.died += 1,
        }
    }

    pub fn get(&self, label: Label) -> usize {
        match label {
            Label::Survived => self.survived,
            Label::Died => self.died,
        }
    }

    pub fn total(&self) -> usize {
        self.survived + self.died
    }

    /// True when at most one label occurs.
    pub fn is_pure(&self) -> bool {
        self.survived == 0 || self.died == 0
    }

    /// Label with the largest count. Ties go to `Survived`, an empty
    /// histogram yields `Died`.
    pub fn majority(&self) -> Label {
        if self.total() == 0 || self.died > self.survived {
            Label::Died
        } else {
            Label::Survived
        }
    }

    pub fn majority_count(&self) -> usize {
        self.survived.max(self.died)
    }
}

/// A decision tree over categorical features.
#[derive(Debug, Clone, PartialEq)]
pub enum Tree {
    Leaf(Label),
    Node {
        feature: Feature,
        children: BTreeMap<FeatureValue, Tree>,
    },
}

impl Tree {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Tree::Leaf(_))
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Tree::Leaf(_) => 1,
            Tree::Node { children, .. } => children.values().map(Tree::leaf_count).sum(),
        }
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Tree::Leaf(_) => 0,
            Tree::Node { children, .. } => {
                1 + children.values().map(Tree::depth).max().unwrap_or(0)
            }
        }
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter, indent: usize) -> fmt::Result {
        match self {
            Tree::Leaf(label) => writeln!(f, "{}", label),
            Tree::Node { feature, children } => {
                writeln!(f, "[{}]", feature.name())?;
                for (value, child) in children {
                    write!(f, "{:width$}{} -> ", "", value, width = indent + 2)?;
                    child.fmt_indented(f, indent + 2)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

/// A tree whose leaves and nodes each carry an annotation of type `A`.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotatedTree<A> {
    Leaf {
        label: Label,
        annotation: A,
    },
    Node {
        feature: Feature,
        children: BTreeMap<FeatureValue, AnnotatedTree<A>>,
        annotation: A,
    },
}

impl<A> AnnotatedTree<A> {
    pub fn annotation(&self) -> &A {
        match self {
            AnnotatedTree::Leaf { annotation, .. } | AnnotatedTree::Node { annotation, .. } => {
                annotation
            }
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, AnnotatedTree::Leaf { .. })
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            AnnotatedTree::Leaf { .. } => 1,
            AnnotatedTree::Node { children, .. } => {
                children.values().map(AnnotatedTree::leaf_count).sum()
            }
        }
    }

    /// Drop the annotations, keeping the shape and predictions.
    pub fn to_tree(&self) -> Tree {
        match self {
            AnnotatedTree::Leaf { label, .. } => Tree::Leaf(*label),
            AnnotatedTree::Node {
                feature, children, ..
            } => Tree::Node {
                feature: *feature,
                children: children
                    .iter()
                    .map(|(value, child)| (*value, child.to_tree()))
                    .collect(),
            },
        }
    }
}
