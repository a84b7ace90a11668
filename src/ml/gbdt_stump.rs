//! Gradient-boosted decision stumps with a single logit output.

use serde::{Deserialize, Serialize};

use super::classifier::{
    ClassLabel, Classifier, InferenceError, ensure_finite, label_for_probability, sigmoid,
};
use crate::schema::{FEATURE_COUNT, FeatureVector};

/// Single-node decision tree used as a weak learner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stump {
    /// Feature index used for the split.
    pub feature_index: u16,
    /// Threshold in feature units.
    pub threshold: f64,
    /// Contribution for `feature <= threshold`.
    pub left_value: f64,
    /// Contribution for `feature > threshold`.
    pub right_value: f64,
}

impl Stump {
    pub fn predict(&self, features: &[f64]) -> f64 {
        let value = features
            .get(self.feature_index as usize)
            .copied()
            .unwrap_or(0.0);
        if value <= self.threshold {
            self.left_value
        } else {
            self.right_value
        }
    }
}

/// Boosted stump ensemble for the placed / not-placed decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GbdtStumpModel {
    /// Initial raw logit before boosting rounds.
    pub init_raw: f64,
    /// Learning rate applied to each stump contribution.
    pub learning_rate: f64,
    pub stumps: Vec<Stump>,
}

impl GbdtStumpModel {
    pub fn validate(&self) -> Result<(), String> {
        if !self.init_raw.is_finite() || !self.learning_rate.is_finite() {
            return Err("init_raw and learning_rate must be finite".to_string());
        }
        for (idx, stump) in self.stumps.iter().enumerate() {
            if stump.feature_index as usize >= FEATURE_COUNT {
                return Err(format!(
                    "Stump {idx} uses feature {} (only {FEATURE_COUNT} features)",
                    stump.feature_index
                ));
            }
        }
        Ok(())
    }

    /// Raw logit for a feature vector.
    pub fn predict_raw(&self, features: &FeatureVector) -> f64 {
        let boosted: f64 = self
            .stumps
            .iter()
            .map(|stump| stump.predict(features.as_slice()))
            .sum();
        self.init_raw + self.learning_rate * boosted
    }
}

impl Classifier for GbdtStumpModel {
    fn predict(&self, features: &FeatureVector) -> Result<ClassLabel, InferenceError> {
        ensure_finite(features)?;
        Ok(label_for_probability(sigmoid(self.predict_raw(features)), 0.5))
    }
}
