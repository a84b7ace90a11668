//! Submission flow for the prediction form.
//!
//! Validates the form, runs the injected classifier and keeps the verdict text
//! shown on the page. A failed submission never clears the previous verdict.

use std::fmt;

use thiserror::Error;

use crate::form::{FormState, ValidationError};
use crate::ml::{ClassLabel, Classifier, InferenceError};
use crate::schema::FeatureVector;

/// Verdict derived from the classifier's label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PredictionResult {
    Placed,
    NotPlaced,
}

impl PredictionResult {
    pub fn from_label(label: ClassLabel) -> Result<Self, InferenceError> {
        match label {
            1 => Ok(PredictionResult::Placed),
            0 => Ok(PredictionResult::NotPlaced),
            other => Err(InferenceError::UnexpectedLabel(i64::from(other))),
        }
    }

    /// Text shown in the result area.
    pub fn message(self) -> &'static str {
        match self {
            PredictionResult::Placed => "Student is Likely to be Placed",
            PredictionResult::NotPlaced => "Student is Unlikely to be Placed",
        }
    }
}

impl fmt::Display for PredictionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Any failure of a single submission, shown to the user as one notification.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("Invalid input: {0}")]
    Inference(#[from] InferenceError),
}

/// Where the controller is within one submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionPhase {
    Collecting,
    Validating,
}

/// Owns the form state and the classifier for the prediction page.
pub struct PredictionController {
    classifier: Box<dyn Classifier>,
    form: FormState,
    phase: SubmissionPhase,
    last_result: Option<PredictionResult>,
}

impl PredictionController {
    pub fn new(classifier: Box<dyn Classifier>) -> Self {
        Self {
            classifier,
            form: FormState::new(),
            phase: SubmissionPhase::Collecting,
            last_result: None,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Most recent successful verdict.
    pub fn last_result(&self) -> Option<PredictionResult> {
        self.last_result
    }

    /// Text for the result area; empty until the first successful submission.
    pub fn result_text(&self) -> &'static str {
        self.last_result.map(PredictionResult::message).unwrap_or("")
    }

    /// Validate the form, run the classifier and record the verdict.
    pub fn submit(&mut self) -> Result<PredictionResult, SubmitError> {
        self.phase = SubmissionPhase::Validating;
        let outcome = self.evaluate();
        self.phase = SubmissionPhase::Collecting;
        match &outcome {
            Ok(result) => {
                tracing::info!("Prediction: {result}");
                self.last_result = Some(*result);
            }
            Err(err) => tracing::warn!("Prediction error: {err}"),
        }
        outcome
    }

    fn evaluate(&self) -> Result<PredictionResult, SubmitError> {
        let features: FeatureVector = self.form.to_feature_vector()?;
        tracing::debug!("Model input: {features}");
        let label = self.classifier.predict(&features)?;
        Ok(PredictionResult::from_label(label)?)
    }
}
