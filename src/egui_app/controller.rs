//! Bridges navigation and the prediction flow to the egui renderer.

use crate::egui_app::state::{StatusBarState, UiState};
use crate::egui_app::ui::style::StatusTone;
use crate::form::FormState;
use crate::ml::Classifier;
use crate::navigation::{Navigator, PageId, PageSwitcher, PageView};
use crate::prediction::PredictionController;

/// Maintains app state and bridges core logic to the egui UI.
pub struct EguiController {
    pub ui: UiState,
    navigator: Navigator<PageView>,
    prediction: PredictionController,
    model_label: String,
}

impl EguiController {
    /// Build the controller around the classifier loaded at startup.
    pub fn new(classifier: Box<dyn Classifier>, model_label: impl Into<String>) -> Self {
        let model_label = model_label.into();
        let ui = UiState {
            status: StatusBarState::new(format!("Model ready: {model_label}"), StatusTone::Idle),
            ..UiState::default()
        };
        Self {
            ui,
            navigator: Navigator::with_views(),
            prediction: PredictionController::new(classifier),
            model_label,
        }
    }

    pub fn active_page(&self) -> PageId {
        self.navigator.active()
    }

    pub fn is_page_visible(&self, page: PageId) -> bool {
        self.navigator.is_visible(page)
    }

    pub fn show_page(&mut self, page: PageId) {
        self.navigator.show(page);
    }

    pub fn model_label(&self) -> &str {
        &self.model_label
    }

    pub fn form(&self) -> &FormState {
        self.prediction.form()
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        self.prediction.form_mut()
    }

    /// Verdict text for the result area.
    pub fn result_text(&self) -> &'static str {
        self.prediction.result_text()
    }

    /// Run one submission; failures open the error modal.
    pub fn submit_prediction(&mut self) {
        match self.prediction.submit() {
            Ok(result) => {
                self.set_status(result.message(), StatusTone::Info);
            }
            Err(err) => {
                let message = err.to_string();
                self.set_status(message.clone(), StatusTone::Error);
                self.ui.error.message = message;
                self.ui.error.open = true;
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.ui.error.open = false;
        self.ui.error.message.clear();
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status = StatusBarState::new(text, tone);
    }
}

impl PageSwitcher for EguiController {
    fn request_page(&mut self, page: PageId) {
        self.show_page(page);
    }
}

#[cfg(test)]
mod tests;
