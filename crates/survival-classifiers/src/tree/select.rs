use crate::data_handling::TrainingExample;
use crate::stats::error_rate;
use crate::tree::cost::CostInfo;
use crate::tree::predict::predict;
use crate::tree::{AnnotatedTree, Tree};

/// Outcome of validation-based model selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// The winning tree.
    pub tree: Tree,
    /// Position of the winner among the candidates; 0 is the unpruned tree.
    pub index: usize,
    /// Validation risk of every candidate, in candidate order.
    pub risks: Vec<f64>,
}

fn validation_risk(tree: &Tree, validation: &[TrainingExample]) -> f64 {
    error_rate(
        validation
            .iter()
            .map(|v| (predict(tree, &v.example), v.label)),
    )
}

/// Pick the candidate with the lowest empirical risk on `validation`.
///
/// Candidates are the unpruned tree followed by the pruning sequence from
/// largest to smallest. Only a strictly lower risk replaces the current best,
/// so ties keep the less pruned tree.
pub fn select_best(
    unpruned: &Tree,
    sequence: &[AnnotatedTree<CostInfo>],
    validation: &[TrainingExample],
) -> Selection {
    let mut candidates: Vec<Tree> = std::iter::once(unpruned.clone())
        .chain(sequence.iter().map(AnnotatedTree::to_tree))
        .collect();
    let risks: Vec<f64> = candidates
        .iter()
        .map(|tree| validation_risk(tree, validation))
        .collect();

    let mut index = 0;
    for (i, &risk) in risks.iter().enumerate().skip(1) {
        if risk < risks[index] {
            index = i;
        }
    }

    log::debug!(
        "Selected candidate {} of {} ({} leaves, validation risk {:.4})",
        index,
        candidates.len(),
        candidates[index].leaf_count(),
        risks[index]
    );

    Selection {
        tree: candidates.swap_remove(index),
        index,
        risks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_handling::*;
    use crate::tree::cost::annotate_costs;
    use crate::tree::feature::GENDER;
    use crate::tree::prune::pruning_sequence;
    use crate::tree::TreeBuilder;

    fn example(gender: Gender) -> Example {
        Example {
            gender,
            age: AgeBracket::Adult,
            ticket_class: TicketClass::Third,
            family_size: FamilySizeBracket::Single,
            cabin: HasCabin::No,
            embarked: EmbarkPort::Southampton,
        }
    }

    fn training() -> Vec<TrainingExample> {
        vec![
            TrainingExample::new(example(Gender::Female), Label::Survived),
            TrainingExample::new(example(Gender::Female), Label::Survived),
            TrainingExample::new(example(Gender::Male), Label::Died),
            TrainingExample::new(example(Gender::Male), Label::Died),
            TrainingExample::new(example(Gender::Male), Label::Survived),
            TrainingExample::new(example(Gender::Male), Label::Died),
            TrainingExample::new(example(Gender::Male), Label::Died),
        ]
    }

    #[test]
    fn test_ties_keep_the_larger_tree() {
        let builder = TreeBuilder::default();
        let unpruned = builder.build(&training(), &[GENDER]);
        let sequence = pruning_sequence(annotate_costs(&builder.induce(&training(), &[GENDER])));
        // Everyone in the validation set died; only females are mispredicted
        // by the split tree, and there are none.
        let validation = vec![TrainingExample::new(example(Gender::Male), Label::Died)];

        let selection = select_best(&unpruned, &sequence, &validation);
        assert_eq!(selection.risks.len(), sequence.len() + 1);
        assert!(selection.risks.iter().all(|&r| r == 0.0));
        assert_eq!(selection.index, 0);
        assert_eq!(selection.tree, unpruned);
    }

    #[test]
    fn test_strictly_better_pruned_tree_wins() {
        let builder = TreeBuilder::default();
        let unpruned = builder.build(&training(), &[GENDER]);
        let sequence = pruning_sequence(annotate_costs(&builder.induce(&training(), &[GENDER])));
        let validation = vec![
            TrainingExample::new(example(Gender::Female), Label::Died),
            TrainingExample::new(example(Gender::Male), Label::Died),
        ];

        let selection = select_best(&unpruned, &sequence, &validation);
        assert_eq!(selection.risks, vec![0.5, 0.5, 0.0]);
        assert_eq!(selection.index, 2);
        assert_eq!(selection.tree, Tree::Leaf(Label::Died));
    }
}
