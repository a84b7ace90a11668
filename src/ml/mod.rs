//! Placement classifiers: the inference capability and the artifacts that provide it.
//!
//! Models are trained elsewhere and exported as JSON; this module only loads
//! and evaluates them.

mod artifact;
mod classifier;
pub mod gbdt_stump;
pub mod logreg;

pub use artifact::{
    ModelArtifact, ModelKind, ModelLoadError, SUPPORTED_MODEL_VERSION, load_classifier,
};
pub use classifier::{ClassLabel, Classifier, InferenceError, sigmoid};
