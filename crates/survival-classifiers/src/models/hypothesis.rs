use std::collections::BTreeMap;

use crate::data_handling::{Label, PassengerId, PassengerRow};
use crate::stats::Assessment;

/// A rule mapping passengers to a predicted label.
///
/// Each hypothesis decides which part of a row it looks at through
/// `extract_example`, so constant baselines and learned trees share one
/// contract while consuming different inputs.
pub trait Hypothesis {
    /// The view of a passenger this hypothesis predicts from.
    type Input: Ord;

    fn name(&self) -> &str;

    fn extract_example(&self, row: &PassengerRow) -> Self::Input;

    fn predict(&self, input: &Self::Input) -> Label;

    /// Predict every row, keyed by passenger id. Ids are expected to be
    /// distinct, as checked by `PassengerSet::ensure_unique_ids`.
    fn predict_all(&self, rows: &[PassengerRow]) -> BTreeMap<PassengerId, Label> {
        rows.iter()
            .map(|row| (row.passenger_id, self.predict(&self.extract_example(row))))
            .collect()
    }
}

/// Object-safe scoring interface implemented for every `Hypothesis`, so
/// hypotheses with different inputs can be reported side by side.
pub trait Assess {
    fn hypothesis_name(&self) -> &str;

    fn assess(&self, rows: &[PassengerRow]) -> Assessment;
}

impl<H: Hypothesis> Assess for H {
    fn hypothesis_name(&self) -> &str {
        self.name()
    }

    fn assess(&self, rows: &[PassengerRow]) -> Assessment {
        crate::stats::assess(self, rows)
    }
}
