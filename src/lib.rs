//! Library exports for the binaries and integration tests.
/// Application directory resolution.
pub mod app_dirs;
/// Persisted application settings.
pub mod config;
/// egui front end.
pub mod egui_app;
/// Form state and input validation.
pub mod form;
/// Tracing setup.
pub mod logging;
/// Classifier artifacts and inference.
pub mod ml;
/// Page navigation.
pub mod navigation;
/// Submission flow from form to verdict.
pub mod prediction;
/// Field schema shared by the form and the classifier.
pub mod schema;
