use std::collections::BTreeMap;

use crate::data_handling::{Example, Label, PassengerId, PassengerRow};
use crate::models::hypothesis::Hypothesis;
use crate::tree::{predict, predict_all, Tree};

/// A learned decision tree used as a hypothesis over full passenger examples.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTreeClassifier {
    name: String,
    tree: Tree,
}

impl DecisionTreeClassifier {
    pub fn new(name: impl Into<String>, tree: Tree) -> Self {
        Self {
            name: name.into(),
            tree,
        }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }
}

impl Hypothesis for DecisionTreeClassifier {
    type Input = Example;

    fn name(&self) -> &str {
        &self.name
    }

    fn extract_example(&self, row: &PassengerRow) -> Self::Input {
        row.extract_example()
    }

    fn predict(&self, input: &Self::Input) -> Label {
        predict(&self.tree, input)
    }

    fn predict_all(&self, rows: &[PassengerRow]) -> BTreeMap<PassengerId, Label> {
        predict_all(&self.tree, rows)
    }
}
