use super::style;
use crate::navigation::{PageId, PageSwitcher};
use eframe::egui::{self, Frame, Margin, RichText};

pub(super) fn render_home_page(ui: &mut egui::Ui, switcher: &mut dyn PageSwitcher) {
    let palette = style::palette();
    ui.vertical_centered(|ui| {
        ui.add_space((ui.available_height() * 0.3).max(24.0));
        Frame::new()
            .fill(palette.card_fill)
            .inner_margin(Margin::symmetric(24, 12))
            .show(ui, |ui| {
                ui.label(RichText::new("Placement Prediction").size(28.0).strong());
            });
        ui.add_space(32.0);
        let start = egui::Button::new(
            RichText::new("Go to Prediction Page")
                .size(16.0)
                .color(egui::Color32::WHITE),
        )
        .fill(palette.accent_go)
        .min_size(egui::vec2(240.0, 44.0));
        if ui.add(start).clicked() {
            switcher.request_page(PageId::PredictForm);
        }
    });
}
