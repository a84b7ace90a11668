//! Binary logistic regression over the placement feature vector.

use serde::{Deserialize, Serialize};

use super::classifier::{
    ClassLabel, Classifier, InferenceError, ensure_finite, label_for_probability, sigmoid,
};
use crate::schema::{FEATURE_COUNT, FeatureVector};

/// Per-feature standardisation applied before the linear term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureScaling {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Logistic regression weights exported from training.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRegModel {
    pub weights: Vec<f64>,
    pub bias: f64,
    #[serde(default)]
    pub scaling: Option<FeatureScaling>,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    0.5
}

impl LogRegModel {
    /// Validate dimensions and numeric sanity.
    pub fn validate(&self) -> Result<(), String> {
        if self.weights.len() != FEATURE_COUNT {
            return Err(format!(
                "weights length {} (expected {FEATURE_COUNT})",
                self.weights.len()
            ));
        }
        if !self.bias.is_finite() || self.weights.iter().any(|w| !w.is_finite()) {
            return Err("weights and bias must be finite".to_string());
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err("threshold must be within [0, 1]".to_string());
        }
        if let Some(scaling) = &self.scaling {
            if scaling.mean.len() != FEATURE_COUNT || scaling.scale.len() != FEATURE_COUNT {
                return Err("scaling length mismatch".to_string());
            }
            if scaling.scale.iter().any(|s| !s.is_finite() || *s == 0.0) {
                return Err("scaling.scale must be finite and non-zero".to_string());
            }
        }
        Ok(())
    }

    /// Probability of the positive (placed) class.
    pub fn predict_proba(&self, features: &FeatureVector) -> f64 {
        let mut sum = self.bias;
        for (idx, (&w, &x)) in self.weights.iter().zip(features.as_slice()).enumerate() {
            let x = match &self.scaling {
                Some(scaling) => (x - scaling.mean[idx]) / scaling.scale[idx],
                None => x,
            };
            sum += w * x;
        }
        sigmoid(sum)
    }
}

impl Classifier for LogRegModel {
    fn predict(&self, features: &FeatureVector) -> Result<ClassLabel, InferenceError> {
        ensure_finite(features)?;
        Ok(label_for_probability(
            self.predict_proba(features),
            self.threshold,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LogRegModel {
        let mut weights = vec![0.0; FEATURE_COUNT];
        weights[0] = 1.0;
        LogRegModel {
            weights,
            bias: -7.0,
            scaling: None,
            threshold: 0.5,
        }
    }

    fn vector_with_cgpa(cgpa: f64) -> FeatureVector {
        let mut values = [0.0; FEATURE_COUNT];
        values[0] = cgpa;
        FeatureVector::new(values)
    }

    #[test]
    fn predicts_by_decision_boundary() {
        let model = model();
        model.validate().unwrap();
        assert_eq!(model.predict(&vector_with_cgpa(8.0)), Ok(1));
        assert_eq!(model.predict(&vector_with_cgpa(6.0)), Ok(0));
    }

    #[test]
    fn scaling_shifts_inputs_before_weighting() {
        let mut model = model();
        model.bias = 0.0;
        let mut mean = vec![0.0; FEATURE_COUNT];
        mean[0] = 7.0;
        model.scaling = Some(FeatureScaling {
            mean,
            scale: vec![1.0; FEATURE_COUNT],
        });
        model.validate().unwrap();
        assert!((model.predict_proba(&vector_with_cgpa(7.0)) - 0.5).abs() < 1e-12);
        assert_eq!(model.predict(&vector_with_cgpa(6.5)), Ok(0));
    }

    #[test]
    fn rejects_non_finite_input() {
        let model = model();
        assert_eq!(
            model.predict(&vector_with_cgpa(f64::NAN)),
            Err(InferenceError::NonFiniteInput)
        );
    }

    #[test]
    fn validate_catches_bad_shapes() {
        let mut model = model();
        model.weights.pop();
        assert!(model.validate().is_err());

        let mut model = self::model();
        model.scaling = Some(FeatureScaling {
            mean: vec![0.0; FEATURE_COUNT],
            scale: vec![0.0; FEATURE_COUNT],
        });
        assert!(model.validate().is_err());

        let mut model = self::model();
        model.threshold = 1.5;
        assert!(model.validate().is_err());
    }
}
