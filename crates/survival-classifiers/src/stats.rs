//! Empirical risk and noise estimates for any hypothesis.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::data_handling::{Label, PassengerRow};
use crate::models::hypothesis::Hypothesis;
use crate::tree::LabelCounts;

/// Risk and noise of one hypothesis on a labeled row set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub risk: f64,
    pub noise: f64,
}

/// Fraction of `(predicted, actual)` pairs that disagree; 0.0 when empty.
pub fn error_rate<I>(pairs: I) -> f64
where
    I: IntoIterator<Item = (Label, Label)>,
{
    let (total, wrong) = pairs
        .into_iter()
        .fold((0usize, 0usize), |(total, wrong), (predicted, actual)| {
            (total + 1, wrong + usize::from(predicted != actual))
        });
    if total == 0 {
        0.0
    } else {
        wrong as f64 / total as f64
    }
}

/// Fraction of rows in `actual` whose prediction differs.
///
/// A row without a prediction counts as misclassified.
pub fn empirical_risk<K: Ord>(
    predictions: &BTreeMap<K, Label>,
    actual: &BTreeMap<K, Label>,
) -> f64 {
    if actual.is_empty() {
        return 0.0;
    }
    let wrong = actual
        .iter()
        .filter(|&(key, label)| predictions.get(key) != Some(label))
        .count();
    wrong as f64 / actual.len() as f64
}

/// Irreducible error estimate from identical inputs with different outcomes.
///
/// Samples are grouped by key; each group contributes its minority-label
/// fraction and the result is the unweighted mean over groups.
pub fn noise<K, I>(samples: I) -> f64
where
    K: Ord,
    I: IntoIterator<Item = (K, Label)>,
{
    let mut groups: BTreeMap<K, LabelCounts> = BTreeMap::new();
    for (key, label) in samples {
        groups.entry(key).or_default().add(label);
    }
    if groups.is_empty() {
        return 0.0;
    }
    let minority_sum: f64 = groups
        .values()
        .map(|counts| counts.survived.min(counts.died) as f64 / counts.total() as f64)
        .sum();
    minority_sum / groups.len() as f64
}

/// Score a hypothesis on labeled rows.
///
/// Risk and noise both range over every row in `rows`. Noise is measured
/// over the hypothesis's own inputs, so a baseline that only looks at gender
/// is charged the noise of gender alone.
pub fn assess<H>(hypothesis: &H, rows: &[PassengerRow]) -> Assessment
where
    H: Hypothesis + ?Sized,
{
    let samples: Vec<(H::Input, Label)> = rows
        .iter()
        .map(|row| (hypothesis.extract_example(row), row.label()))
        .collect();
    let risk = error_rate(
        samples
            .iter()
            .map(|(input, label)| (hypothesis.predict(input), *label)),
    );
    Assessment {
        risk,
        noise: noise(samples),
    }
}
