use thiserror::Error;

use crate::data_handling::PassengerId;

/// Errors raised while configuring or running the survival pipeline.
///
/// The tree engine itself is total; these only cover invalid settings,
/// ambiguous input rows and data splits that leave nothing to learn from.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClassifierError {
    #[error("Unknown feature '{0}'. Expected one of: gender, age, ticket_class, family_size, cabin, embarked")]
    UnknownFeature(String),
    #[error("Feature '{0}' is listed more than once")]
    DuplicateFeature(String),
    #[error("Unknown hypothesis '{0}'. Expected one of: everyone_dies, females_survive, unpruned_tree, pruned_tree")]
    UnknownHypothesis(String),
    #[error("{name} must lie strictly between 0 and 1, got {value}")]
    InvalidFraction { name: &'static str, value: f64 },
    #[error("The {0} partition is empty; provide more rows or adjust the split fractions")]
    EmptyPartition(&'static str),
    #[error("PassengerId {0} appears more than once")]
    DuplicatePassengerId(PassengerId),
}
