//! egui renderer for the application UI.

mod background;
mod error_modal;
mod home_page;
mod predict_page;
pub mod style;

use crate::config::AppConfig;
use crate::egui_app::controller::EguiController;
use crate::ml::Classifier;
use crate::navigation::PageId;
use eframe::egui::{self, Frame, Margin, RichText, StrokeKind, TextureHandle};

/// Window title shown by the OS.
pub const WINDOW_TITLE: &str = "Placement Prediction App";

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
    background: Option<TextureHandle>,
}

impl EguiApp {
    /// Create the app around the classifier loaded at startup.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        classifier: Box<dyn Classifier>,
        model_label: String,
        config: &AppConfig,
    ) -> Self {
        let background =
            background::load_background(&cc.egui_ctx, config.background_image.as_deref());
        Self {
            controller: EguiController::new(classifier, model_label),
            visuals_set: false,
            background,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::light();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    let (badge_rect, _) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                    ui.painter().rect_filled(badge_rect, 0.0, status.badge_color);
                    ui.painter().rect_stroke(
                        badge_rect,
                        0.0,
                        style::section_stroke(),
                        StrokeKind::Inside,
                    );
                    ui.label(RichText::new(&status.badge_label).color(palette.text_primary));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_primary));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(self.controller.model_label()).color(palette.text_muted),
                        );
                    });
                });
            });
    }

    fn render_pages(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(Frame::new().inner_margin(Margin::same(16)))
            .show(ctx, |ui| {
                render_active_page(&mut self.controller, |page, controller| match page {
                    PageId::Home => home_page::render_home_page(ui, controller),
                    PageId::PredictForm => predict_page::render_predict_page(ui, controller),
                });
            });
    }
}

/// Draw only the page that was active when the frame started.
///
/// A switch requested while drawing takes effect on the next frame.
fn render_active_page(
    controller: &mut EguiController,
    mut draw: impl FnMut(PageId, &mut EguiController),
) -> PageId {
    let page = controller.active_page();
    draw(page, controller);
    page
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        if let Some(texture) = &self.background {
            background::paint_background(ctx, texture);
        }
        self.render_status(ctx);
        self.render_pages(ctx);
        self.render_error_modal(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::{ClassLabel, InferenceError};
    use crate::navigation::PageSwitcher;
    use crate::schema::FeatureVector;

    struct NeverCalled;

    impl Classifier for NeverCalled {
        fn predict(&self, _features: &FeatureVector) -> Result<ClassLabel, InferenceError> {
            Err(InferenceError::Failed("not expected".into()))
        }
    }

    #[test]
    fn switch_during_draw_applies_next_frame() {
        let mut controller = EguiController::new(Box::new(NeverCalled), "test model");
        let mut drawn = Vec::new();
        let page = render_active_page(&mut controller, |page, controller| {
            drawn.push(page);
            if page == PageId::Home {
                controller.request_page(PageId::PredictForm);
            }
        });
        assert_eq!(page, PageId::Home);
        assert_eq!(drawn, vec![PageId::Home]);
        assert_eq!(controller.active_page(), PageId::PredictForm);

        drawn.clear();
        render_active_page(&mut controller, |page, _| drawn.push(page));
        assert_eq!(drawn, vec![PageId::PredictForm]);
    }
}
