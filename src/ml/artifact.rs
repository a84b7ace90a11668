//! On-disk classifier artifacts and their validation against the form schema.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::classifier::{ClassLabel, Classifier, InferenceError};
use super::gbdt_stump::GbdtStumpModel;
use super::logreg::LogRegModel;
use crate::schema::{FEATURE_COUNT, FIELDS, FeatureVector};

/// Artifact format version understood by this build.
pub const SUPPORTED_MODEL_VERSION: i64 = 1;

/// Errors raised while loading a model artifact.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("Failed to read model {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid model JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Unsupported model_version {found} (expected {})", SUPPORTED_MODEL_VERSION)]
    UnsupportedVersion { found: i64 },
    #[error("Model expects {found} features but the form provides {}", FEATURE_COUNT)]
    FeatureCount { found: usize },
    #[error("Model feature {position} is '{found}' but the form provides '{expected}'")]
    FeatureOrder {
        position: usize,
        expected: &'static str,
        found: String,
    },
    #[error("Invalid model parameters: {0}")]
    Invalid(String),
}

/// Model family plus its parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelKind {
    LogisticRegression(LogRegModel),
    GradientBoostedStumps(GbdtStumpModel),
}

impl ModelKind {
    pub fn name(&self) -> &'static str {
        match self {
            ModelKind::LogisticRegression(_) => "logistic_regression",
            ModelKind::GradientBoostedStumps(_) => "gradient_boosted_stumps",
        }
    }
}

/// Versioned classifier artifact, as exported by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub model_version: i64,
    /// Feature names in the order the model was trained on.
    pub features: Vec<String>,
    #[serde(flatten)]
    pub model: ModelKind,
}

impl ModelArtifact {
    /// Load and validate an artifact from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self, ModelLoadError> {
        let bytes = std::fs::read(path).map_err(|source| ModelLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact: Self =
            serde_json::from_slice(&bytes).map_err(|source| ModelLoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Check version, feature layout and model parameters.
    pub fn validate(&self) -> Result<(), ModelLoadError> {
        if self.model_version != SUPPORTED_MODEL_VERSION {
            return Err(ModelLoadError::UnsupportedVersion {
                found: self.model_version,
            });
        }
        if self.features.len() != FEATURE_COUNT {
            return Err(ModelLoadError::FeatureCount {
                found: self.features.len(),
            });
        }
        for (position, (field, found)) in FIELDS.iter().zip(&self.features).enumerate() {
            if field.name != found {
                return Err(ModelLoadError::FeatureOrder {
                    position,
                    expected: field.name,
                    found: found.clone(),
                });
            }
        }
        match &self.model {
            ModelKind::LogisticRegression(model) => model.validate(),
            ModelKind::GradientBoostedStumps(model) => model.validate(),
        }
        .map_err(ModelLoadError::Invalid)
    }
}

impl Classifier for ModelArtifact {
    fn predict(&self, features: &FeatureVector) -> Result<ClassLabel, InferenceError> {
        match &self.model {
            ModelKind::LogisticRegression(model) => model.predict(features),
            ModelKind::GradientBoostedStumps(model) => model.predict(features),
        }
    }
}

/// Load the classifier used for the lifetime of the process.
pub fn load_classifier(path: &Path) -> Result<ModelArtifact, ModelLoadError> {
    let artifact = ModelArtifact::load_json(path)?;
    tracing::info!(
        "Loaded {} model v{} from {}",
        artifact.model.name(),
        artifact.model_version,
        path.display()
    );
    Ok(artifact)
}
