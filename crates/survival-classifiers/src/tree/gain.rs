//! Entropy and information gain over labeled samples.
use std::collections::BTreeMap;

use crate::data_handling::{Label, TrainingExample};
use crate::tree::{Feature, FeatureValue, LabelCounts};

/// Gains below this are rounding noise and treated as no gain at all.
pub const GAIN_EPSILON: f64 = 1e-12;

/// Base-2 Shannon entropy of the empirical label distribution.
///
/// Empty and single-class inputs have entropy 0.0, a balanced binary input 1.0.
pub fn entropy<I>(labels: I) -> f64
where
    I: IntoIterator<Item = Label>,
{
    entropy_of_counts(&LabelCounts::from_labels(labels))
}

pub fn entropy_of_counts(counts: &LabelCounts) -> f64 {
    let total = counts.total();
    if total == 0 {
        return 0.0;
    }
    Label::ALL
        .iter()
        .map(|&label| counts.get(label))
        .filter(|&count| count > 0)
        .map(|count| {
            let p = count as f64 / total as f64;
            -p * p.log2()
        })
        .sum()
}

/// Group a sample by the value `feature` takes on each example.
pub fn partition(
    sample: &[TrainingExample],
    feature: &Feature,
) -> BTreeMap<FeatureValue, Vec<TrainingExample>> {
    let mut partitions: BTreeMap<FeatureValue, Vec<TrainingExample>> = BTreeMap::new();
    for example in sample {
        partitions
            .entry(feature.value(&example.example))
            .or_default()
            .push(*example);
    }
    partitions
}

/// Information gain of splitting `sample` on `feature`.
///
/// Parent entropy minus the size-weighted entropy of the partitions. The
/// result is never negative and is exactly 0.0 when the feature does not
/// separate the labels.
pub fn gain(sample: &[TrainingExample], feature: &Feature) -> f64 {
    if sample.is_empty() {
        return 0.0;
    }

    let mut partitions: BTreeMap<FeatureValue, LabelCounts> = BTreeMap::new();
    for example in sample {
        partitions
            .entry(feature.value(&example.example))
            .or_default()
            .add(example.label);
    }

    let total = sample.len() as f64;
    let weighted: f64 = partitions
        .values()
        .map(|counts| counts.total() as f64 / total * entropy_of_counts(counts))
        .sum();

    let gain = entropy_of_counts(&LabelCounts::from_examples(sample)) - weighted;
    if gain < GAIN_EPSILON {
        0.0
    } else {
        gain
    }
}
