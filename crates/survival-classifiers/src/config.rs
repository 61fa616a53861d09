use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ClassifierError;
use crate::tree::feature::{feature_by_name, ALL_FEATURES};
use crate::tree::Feature;

/// Settings for tree induction.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TreeConfig {
    /// Candidate features in tie-break order.
    pub features: Vec<String>,
    /// Score candidate features in parallel.
    pub parallel_gain: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            features: ALL_FEATURES.iter().map(|f| f.name().to_string()).collect(),
            parallel_gain: true,
        }
    }
}

impl TreeConfig {
    /// Resolve the configured feature names, keeping their order. Each
    /// feature may be listed only once.
    pub fn resolve_features(&self) -> Result<Vec<Feature>, ClassifierError> {
        let mut features: Vec<Feature> = Vec::with_capacity(self.features.len());
        for name in &self.features {
            let feature = feature_by_name(name)
                .ok_or_else(|| ClassifierError::UnknownFeature(name.clone()))?;
            if features.contains(&feature) {
                return Err(ClassifierError::DuplicateFeature(feature.name().to_string()));
            }
            features.push(feature);
        }
        Ok(features)
    }
}

/// Hypotheses that can be scored against held-out passengers.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HypothesisKind {
    EveryoneDies,
    FemalesSurvive,
    UnprunedTree,
    PrunedTree,
}

impl HypothesisKind {
    pub const ALL: [HypothesisKind; 4] = [
        HypothesisKind::EveryoneDies,
        HypothesisKind::FemalesSurvive,
        HypothesisKind::UnprunedTree,
        HypothesisKind::PrunedTree,
    ];

    /// Human readable name used in reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            HypothesisKind::EveryoneDies => "Everyone dies",
            HypothesisKind::FemalesSurvive => "Females survive",
            HypothesisKind::UnprunedTree => "Unpruned tree",
            HypothesisKind::PrunedTree => "Pruned tree",
        }
    }
}

impl fmt::Display for HypothesisKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for HypothesisKind {
    type Err = ClassifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "everyone_dies" => Ok(HypothesisKind::EveryoneDies),
            "females_survive" => Ok(HypothesisKind::FemalesSurvive),
            "unpruned_tree" | "unpruned" => Ok(HypothesisKind::UnprunedTree),
            "pruned_tree" | "pruned" => Ok(HypothesisKind::PrunedTree),
            _ => Err(ClassifierError::UnknownHypothesis(s.to_string())),
        }
    }
}

/// Central configuration for a train/prune/evaluate run.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    pub tree: TreeConfig,
    /// Share of all rows held out for the final test.
    pub test_fraction: f64,
    /// Share of the training rows held out to select among pruned trees.
    pub validation_fraction: f64,
    /// Seed for the row shuffle; `None` shuffles non-reproducibly.
    pub seed: Option<u64>,
    /// Hypotheses to report, in report order.
    pub hypotheses: Vec<HypothesisKind>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            tree: TreeConfig::default(),
            test_fraction: 0.3,
            validation_fraction: 0.3,
            seed: None,
            hypotheses: HypothesisKind::ALL.to_vec(),
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), ClassifierError> {
        for (name, value) in [
            ("test_fraction", self.test_fraction),
            ("validation_fraction", self.validation_fraction),
        ] {
            if !(value > 0.0 && value < 1.0) {
                return Err(ClassifierError::InvalidFraction { name, value });
            }
        }
        self.tree.resolve_features()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hypothesis_kind_from_str() {
        assert_eq!(
            "Everyone-Dies".parse::<HypothesisKind>(),
            Ok(HypothesisKind::EveryoneDies)
        );
        assert_eq!("pruned".parse::<HypothesisKind>(), Ok(HypothesisKind::PrunedTree));
        assert!(matches!(
            "random_forest".parse::<HypothesisKind>(),
            Err(ClassifierError::UnknownHypothesis(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_settings() {
        let mut config = PipelineConfig::default();
        assert!(config.validate().is_ok());

        config.test_fraction = 1.0;
        assert_eq!(
            config.validate(),
            Err(ClassifierError::InvalidFraction {
                name: "test_fraction",
                value: 1.0
            })
        );

        config.test_fraction = 0.2;
        config.tree.features = vec!["gender".to_string(), "Gender".to_string()];
        assert_eq!(
            config.validate(),
            Err(ClassifierError::DuplicateFeature("gender".to_string()))
        );

        config.tree.features = vec!["gender".to_string(), "fare".to_string()];
        assert_eq!(
            config.validate(),
            Err(ClassifierError::UnknownFeature("fare".to_string()))
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: PipelineConfig =
            serde_json::from_str(r#"{"seed": 42, "tree": {"features": ["gender", "age"]}}"#)
                .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.tree.features, vec!["gender", "age"]);
        assert!(config.tree.parallel_gain);
        assert_eq!(config.test_fraction, 0.3);
        assert_eq!(config.hypotheses.len(), 4);
    }
}
