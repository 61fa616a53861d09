use crate::config::HypothesisKind;
use crate::models::baseline::{EveryoneDies, FemalesSurvive};
use crate::models::decision_tree::DecisionTreeClassifier;
use crate::models::hypothesis::Assess;
use crate::pipeline::FittedModels;

/// Build a boxed hypothesis for `kind`. Tree hypotheses take their tree from
/// the fitted models; baselines ignore them.
pub fn build_hypothesis(kind: HypothesisKind, models: &FittedModels) -> Box<dyn Assess> {
    match kind {
        HypothesisKind::EveryoneDies => Box::new(EveryoneDies),
        HypothesisKind::FemalesSurvive => Box::new(FemalesSurvive),
        HypothesisKind::UnprunedTree => Box::new(DecisionTreeClassifier::new(
            kind.display_name(),
            models.unpruned.clone(),
        )),
        HypothesisKind::PrunedTree => Box::new(DecisionTreeClassifier::new(
            kind.display_name(),
            models.pruned.clone(),
        )),
    }
}
