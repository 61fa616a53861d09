//! survival-classifiers: categorical decision trees for passenger survival.
//!
//! The crate induces a decision tree from bucketed passenger attributes using
//! entropy-based greedy splitting, generates a weakest-link pruning sequence
//! from it, picks the best pruned tree on a validation split and scores any
//! hypothesis (learned tree or constant baseline) by empirical risk and noise.
//!
//! Data loading, splitting and reporting helpers live next to the tree engine
//! so the CLI only has to wire them together.
pub mod config;
pub mod data_handling;
pub mod error;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod stats;
pub mod tree;
