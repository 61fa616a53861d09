//! End-to-end training and evaluation.
//!
//! Rows are shuffled once and split into training and test sets. The
//! unpruned tree is induced on all training rows; the training rows are then
//! split again into a grow set, whose tree is pruned, and a validation set
//! used to choose among the pruned trees. Every configured hypothesis is
//! finally scored on the test rows.
use anyhow::Result;

use crate::config::PipelineConfig;
use crate::data_handling::{PassengerRow, PassengerSet};
use crate::error::ClassifierError;
use crate::models::factory::build_hypothesis;
use crate::models::hypothesis::Assess;
use crate::report::Report;
use crate::tree::{annotate_costs, pruning_sequence, select_best, Feature, Tree, TreeBuilder};

/// Trees produced by `SurvivalLearner::fit`.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedModels {
    /// Induced on every training row, never pruned.
    pub unpruned: Tree,
    /// Winner of validation-based selection.
    pub pruned: Tree,
    /// Leaf counts along the pruning sequence, largest first.
    pub sequence_leaf_counts: Vec<usize>,
    /// Validation risk of each candidate: the unpruned tree, then the sequence.
    pub validation_risks: Vec<f64>,
    /// Index of `pruned` among the candidates.
    pub selected_index: usize,
}

/// Outcome of a full run.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub models: FittedModels,
    pub report: Report,
    pub n_train: usize,
    pub n_test: usize,
}

pub struct SurvivalLearner {
    config: PipelineConfig,
    builder: TreeBuilder,
    features: Vec<Feature>,
}

impl SurvivalLearner {
    /// Create a new SurvivalLearner
    ///
    /// # Arguments
    ///
    /// * `config` - Split fractions, shuffle seed, tree settings and the
    ///   hypotheses to report
    ///
    /// # Returns
    ///
    /// The learner, or the first configuration problem found
    pub fn new(config: PipelineConfig) -> Result<Self, ClassifierError> {
        config.validate()?;
        let features = config.tree.resolve_features()?;
        let builder = TreeBuilder::from_config(&config.tree);
        Ok(Self {
            config,
            builder,
            features,
        })
    }

    /// Shuffle `rows` and split them into `(train, test)`.
    ///
    /// Rows must carry distinct `PassengerId`s.
    pub fn split(&self, rows: Vec<PassengerRow>) -> Result<(PassengerSet, PassengerSet)> {
        let all = PassengerSet::new(rows);
        all.ensure_unique_ids()?;
        let all = all.shuffled(self.config.seed);
        all.log_input_data_summary();
        let (test, train) = all.split(self.config.test_fraction);
        ensure_non_empty(&train, "training")?;
        ensure_non_empty(&test, "test")?;
        Ok((train, test))
    }

    /// Induce the unpruned tree, prune, and select on a validation split.
    ///
    /// Candidate 0 is the unpruned tree, which was induced on all training
    /// rows and so has already seen the validation rows; its validation risk
    /// is optimistic and ties go to it.
    pub fn fit(&self, train: &PassengerSet) -> Result<FittedModels> {
        ensure_non_empty(train, "training")?;
        let unpruned = self.builder.build(&train.training_examples(), &self.features);
        log::info!(
            "Induced unpruned tree with {} leaves (depth {}) from {} rows",
            unpruned.leaf_count(),
            unpruned.depth(),
            train.len()
        );

        let (validation, grow) = train.split(self.config.validation_fraction);
        ensure_non_empty(&grow, "grow")?;
        ensure_non_empty(&validation, "validation")?;

        let grown = self.builder.induce(&grow.training_examples(), &self.features);
        let sequence = pruning_sequence(annotate_costs(&grown));
        log::info!(
            "Pruning sequence of {} trees from {} grow rows",
            sequence.len(),
            grow.len()
        );

        let selection = select_best(&unpruned, &sequence, &validation.training_examples());
        log::info!(
            "Selected tree with {} leaves (validation risk {:.4})",
            selection.tree.leaf_count(),
            selection.risks[selection.index]
        );

        Ok(FittedModels {
            unpruned,
            pruned: selection.tree,
            sequence_leaf_counts: sequence.iter().map(|t| t.leaf_count()).collect(),
            validation_risks: selection.risks,
            selected_index: selection.index,
        })
    }

    /// Score every configured hypothesis on `test`.
    pub fn report(&self, models: &FittedModels, test: &PassengerSet) -> Report {
        let mut report = Report::new();
        for &kind in &self.config.hypotheses {
            let hypothesis = build_hypothesis(kind, models);
            let assessment = hypothesis.assess(test.rows());
            log::debug!(
                "{}: risk {:.4}, noise {:.4}",
                hypothesis.hypothesis_name(),
                assessment.risk,
                assessment.noise
            );
            report.push(hypothesis.hypothesis_name(), assessment);
        }
        report
    }

    /// Split, fit and report in one call.
    pub fn evaluate(&self, rows: Vec<PassengerRow>) -> Result<Evaluation> {
        let (train, test) = self.split(rows)?;
        let models = self.fit(&train)?;
        let report = self.report(&models, &test);
        Ok(Evaluation {
            models,
            report,
            n_train: train.len(),
            n_test: test.len(),
        })
    }
}

fn ensure_non_empty(set: &PassengerSet, name: &'static str) -> Result<(), ClassifierError> {
    if set.is_empty() {
        log::warn!("The {} partition has no rows", name);
        return Err(ClassifierError::EmptyPartition(name));
    }
    Ok(())
}
