pub mod baseline;
pub mod decision_tree;
pub mod factory;
pub mod hypothesis;
