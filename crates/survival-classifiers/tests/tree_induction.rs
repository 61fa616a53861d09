//! Integration tests for induction, pruning and selection on a small
//! hand-checked passenger sample.

use std::collections::BTreeMap;

use survival_classifiers::data_handling::*;
use survival_classifiers::stats::noise;
use survival_classifiers::tree::feature::{standard_features, GENDER};
use survival_classifiers::tree::{
    annotate_costs, build, entropy, gain, predict, pruning_sequence, select_best, FeatureValue,
    Tree, TreeBuilder,
};

fn female_first() -> Example {
    Example {
        gender: Gender::Female,
        age: AgeBracket::Adult,
        ticket_class: TicketClass::First,
        family_size: FamilySizeBracket::Single,
        cabin: HasCabin::No,
        embarked: EmbarkPort::Southampton,
    }
}

fn male_third() -> Example {
    Example {
        gender: Gender::Male,
        ticket_class: TicketClass::Third,
        ..female_first()
    }
}

fn four_rows() -> Vec<TrainingExample> {
    vec![
        TrainingExample::new(female_first(), Label::Survived),
        TrainingExample::new(female_first(), Label::Died),
        TrainingExample::new(male_third(), Label::Died),
        TrainingExample::new(male_third(), Label::Died),
    ]
}

// ---------------------------------------------------------------------------
// Induction
// ---------------------------------------------------------------------------

#[test]
fn gender_split_on_four_rows() {
    let tree = build(&four_rows(), &[GENDER]);
    let expected = Tree::Node {
        feature: GENDER,
        children: BTreeMap::from([
            // one survivor, one death: the tie resolves to Survived
            (FeatureValue::new("female"), Tree::Leaf(Label::Survived)),
            (FeatureValue::new("male"), Tree::Leaf(Label::Died)),
        ]),
    };
    assert_eq!(tree, expected);
    assert_eq!(predict(&tree, &female_first()), Label::Survived);
    assert_eq!(predict(&tree, &male_third()), Label::Died);
}

#[test]
fn noise_of_four_rows() {
    let value = noise(four_rows().into_iter().map(|t| (t.example, t.label)));
    assert!((value - 0.25).abs() < 1e-12, "noise = {}", value);
}

#[test]
fn gain_is_never_negative() {
    let rows = four_rows();
    for feature in standard_features() {
        assert!(gain(&rows, &feature) >= 0.0, "{:?}", feature);
    }
    let labels: Vec<Label> = rows.iter().map(|r| r.label).collect();
    assert!(entropy(labels) > 0.0);
}

#[test]
fn pure_sample_builds_a_leaf_for_any_features() {
    let rows: Vec<TrainingExample> = four_rows()
        .into_iter()
        .filter(|r| r.label == Label::Died)
        .collect();
    let features = standard_features();
    for n in 1..=features.len() {
        assert_eq!(build(&rows, &features[..n]), Tree::Leaf(Label::Died));
    }
}

// ---------------------------------------------------------------------------
// Pruning and selection
// ---------------------------------------------------------------------------

#[test]
fn pruning_four_rows_ends_in_died_leaf() {
    let builder = TreeBuilder::default();
    let sequence = pruning_sequence(annotate_costs(&builder.induce(&four_rows(), &[GENDER])));
    let leaf_counts: Vec<usize> = sequence.iter().map(|t| t.leaf_count()).collect();
    assert_eq!(leaf_counts, vec![2, 1]);
    assert_eq!(sequence[1].to_tree(), Tree::Leaf(Label::Died));
}

#[test]
fn validation_selects_collapsed_tree_when_strictly_better() {
    let builder = TreeBuilder::default();
    let unpruned = builder.build(&four_rows(), &[GENDER]);
    let sequence = pruning_sequence(annotate_costs(&builder.induce(&four_rows(), &[GENDER])));

    // Every female in the validation set died, so the female branch is always wrong
    let validation = vec![
        TrainingExample::new(female_first(), Label::Died),
        TrainingExample::new(female_first(), Label::Died),
        TrainingExample::new(male_third(), Label::Died),
    ];

    let selection = select_best(&unpruned, &sequence, &validation);
    assert_eq!(selection.tree, Tree::Leaf(Label::Died));
    assert_eq!(selection.index, 2);
    assert!(selection.risks[0] > selection.risks[2]);
}
