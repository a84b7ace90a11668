use thiserror::Error;

use crate::schema::FeatureVector;

/// Binary label produced by a placement classifier.
pub type ClassLabel = u8;

/// Errors raised while running a classifier on one feature vector.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    /// The input contained NaN or infinite values.
    #[error("input contains NaN or infinity")]
    NonFiniteInput,
    /// The classifier produced a label outside `{0, 1}`.
    #[error("classifier returned unexpected label {0}")]
    UnexpectedLabel(i64),
    /// Any other classifier failure.
    #[error("{0}")]
    Failed(String),
}

/// Capability to turn one feature vector into a binary label.
pub trait Classifier {
    fn predict(&self, features: &FeatureVector) -> Result<ClassLabel, InferenceError>;
}

/// Logistic sigmoid.
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

pub(super) fn label_for_probability(probability: f64, threshold: f64) -> ClassLabel {
    if probability >= threshold { 1 } else { 0 }
}

pub(super) fn ensure_finite(features: &FeatureVector) -> Result<(), InferenceError> {
    if features.is_finite() {
        Ok(())
    } else {
        Err(InferenceError::NonFiniteInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_stable_at_extremes() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
        assert!(sigmoid(800.0) <= 1.0);
        assert!(sigmoid(-800.0) >= 0.0);
        assert!(sigmoid(-800.0).is_finite());
    }

    #[test]
    fn threshold_is_inclusive() {
        assert_eq!(label_for_probability(0.5, 0.5), 1);
        assert_eq!(label_for_probability(0.4999, 0.5), 0);
    }
}
