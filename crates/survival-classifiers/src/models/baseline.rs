//! Constant-rule baselines the learned trees are compared against.
use crate::data_handling::{Gender, Label, PassengerRow};
use crate::models::hypothesis::Hypothesis;

/// Predicts that nobody survives.
#[derive(Debug, Clone, Copy, Default)]
pub struct EveryoneDies;

impl Hypothesis for EveryoneDies {
    type Input = ();

    fn name(&self) -> &str {
        "Everyone dies"
    }

    fn extract_example(&self, _row: &PassengerRow) -> Self::Input {}

    fn predict(&self, _input: &Self::Input) -> Label {
        Label::Died
    }
}

/// Predicts survival for women and death for men.
#[derive(Debug, Clone, Copy, Default)]
pub struct FemalesSurvive;

impl Hypothesis for FemalesSurvive {
    type Input = Gender;

    fn name(&self) -> &str {
        "Females survive"
    }

    fn extract_example(&self, row: &PassengerRow) -> Self::Input {
        row.gender()
    }

    fn predict(&self, input: &Self::Input) -> Label {
        match input {
            Gender::Female => Label::Survived,
            Gender::Male => Label::Died,
        }
    }
}
