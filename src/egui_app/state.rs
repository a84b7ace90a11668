//! Shared state types for the egui UI.

use crate::egui_app::ui::style::{self, StatusTone};
use egui::Color32;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub status: StatusBarState,
    pub error: ErrorModalState,
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the status.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
}

impl StatusBarState {
    pub fn idle() -> Self {
        Self::new("Fill in the student details to get a prediction", StatusTone::Idle)
    }

    pub fn new(text: impl Into<String>, tone: StatusTone) -> Self {
        Self {
            text: text.into(),
            badge_label: style::status_badge_label(tone).into(),
            badge_color: style::status_badge_color(tone),
        }
    }
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self::idle()
    }
}

/// Modal notification raised by a failed submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorModalState {
    pub open: bool,
    pub message: String,
}
