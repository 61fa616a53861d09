//! Named categorical projections of an `Example`.
//!
//! Induction only ever sees a feature through `Feature::value`, so any pure
//! projection onto a small set of codes can be split on.
use std::fmt;

use serde::{Serialize, Serializer};

use crate::data_handling::Example;

/// Opaque, ordered key of a feature value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureValue(&'static str);

impl FeatureValue {
    pub const fn new(code: &'static str) -> Self {
        FeatureValue(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for FeatureValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

#[derive(Clone, Copy)]
pub struct Feature {
    name: &'static str,
    project: fn(&Example) -> FeatureValue,
}

impl Feature {
    pub const fn new(name: &'static str, project: fn(&Example) -> FeatureValue) -> Self {
        Self { name, project }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self, example: &Example) -> FeatureValue {
        (self.project)(example)
    }
}

// Features are identified by name; projections are not comparable.
impl PartialEq for Feature {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Feature {}

impl fmt::Debug for Feature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Feature").field(&self.name).finish()
    }
}

fn gender(example: &Example) -> FeatureValue {
    FeatureValue::new(example.gender.as_str())
}

fn age(example: &Example) -> FeatureValue {
    FeatureValue::new(example.age.as_str())
}

fn ticket_class(example: &Example) -> FeatureValue {
    FeatureValue::new(example.ticket_class.as_str())
}

fn family_size(example: &Example) -> FeatureValue {
    FeatureValue::new(example.family_size.as_str())
}

fn cabin(example: &Example) -> FeatureValue {
    FeatureValue::new(example.cabin.as_str())
}

fn embarked(example: &Example) -> FeatureValue {
    FeatureValue::new(example.embarked.as_str())
}

pub const GENDER: Feature = Feature::new("gender", gender);
pub const AGE: Feature = Feature::new("age", age);
pub const TICKET_CLASS: Feature = Feature::new("ticket_class", ticket_class);
pub const FAMILY_SIZE: Feature = Feature::new("family_size", family_size);
pub const CABIN: Feature = Feature::new("cabin", cabin);
pub const EMBARKED: Feature = Feature::new("embarked", embarked);

/// Every passenger feature in declared order. Gain ties resolve to the
/// earliest feature in this list.
pub const ALL_FEATURES: [Feature; 6] = [GENDER, AGE, TICKET_CLASS, FAMILY_SIZE, CABIN, EMBARKED];

pub fn standard_features() -> Vec<Feature> {
    ALL_FEATURES.to_vec()
}

/// Look up a passenger feature by name (case-insensitive).
pub fn feature_by_name(name: &str) -> Option<Feature> {
    let name = name.trim().to_lowercase().replace('-', "_");
    ALL_FEATURES.iter().copied().find(|f| f.name() == name)
}
