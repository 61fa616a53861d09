use std::collections::BTreeMap;

use survival_classifiers::config::HypothesisKind;
use survival_classifiers::data_handling::{Label, PassengerRow};
use survival_classifiers::models::decision_tree::DecisionTreeClassifier;
use survival_classifiers::models::factory::build_hypothesis;
use survival_classifiers::models::hypothesis::{Assess, Hypothesis};
use survival_classifiers::pipeline::FittedModels;
use survival_classifiers::tree::feature::GENDER;
use survival_classifiers::tree::{FeatureValue, Tree};

fn passenger(id: u32, gender: &str, survived: u8) -> PassengerRow {
    PassengerRow {
        passenger_id: id,
        survived,
        ticket_class: 2,
        name: format!("Passenger {}", id),
        gender: gender.to_string(),
        age: Some(40.0),
        siblings_spouses: 0,
        parents_children: 0,
        ticket: String::new(),
        fare: Some(13.0),
        cabin: String::new(),
        embarked: "S".to_string(),
        destination: String::new(),
    }
}

fn models() -> FittedModels {
    let split = Tree::Node {
        feature: GENDER,
        children: BTreeMap::from([
            (FeatureValue::new("female"), Tree::Leaf(Label::Survived)),
            (FeatureValue::new("male"), Tree::Leaf(Label::Died)),
        ]),
    };
    FittedModels {
        unpruned: split,
        pruned: Tree::Leaf(Label::Survived),
        sequence_leaf_counts: vec![2, 1],
        validation_risks: vec![0.5, 0.5, 0.25],
        selected_index: 2,
    }
}

#[test]
fn test_factory_builds_and_assesses_every_kind() {
    let rows = vec![
        passenger(1, "female", 1),
        passenger(2, "male", 0),
        passenger(3, "male", 1),
        passenger(4, "female", 1),
    ];
    let models = models();

    let expected_risk = [
        (HypothesisKind::EveryoneDies, 0.75),
        (HypothesisKind::FemalesSurvive, 0.25),
        (HypothesisKind::UnprunedTree, 0.25),
        (HypothesisKind::PrunedTree, 0.25),
    ];
    for (kind, risk) in expected_risk {
        let hypothesis = build_hypothesis(kind, &models);
        assert_eq!(hypothesis.hypothesis_name(), kind.display_name());
        let assessment = hypothesis.assess(&rows);
        assert_eq!(assessment.risk, risk, "{}", kind);
        assert!((0.0..=0.5).contains(&assessment.noise));
    }
}

#[test]
fn test_tree_classifier_predicts_from_full_example() {
    let classifier = DecisionTreeClassifier::new("split", models().unpruned);
    let row = passenger(9, "FEMALE", 0);
    assert_eq!(classifier.predict(&classifier.extract_example(&row)), Label::Survived);
    assert_eq!(classifier.tree().leaf_count(), 2);
}
