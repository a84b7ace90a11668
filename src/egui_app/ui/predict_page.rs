use super::style;
use crate::egui_app::controller::EguiController;
use crate::form::{BinaryChoice, FieldValue};
use crate::navigation::{PageId, PageSwitcher};
use eframe::egui::{self, Color32, Frame, Margin, RichText};

const INPUT_WIDTH: f32 = 180.0;

pub(super) fn render_predict_page(ui: &mut egui::Ui, controller: &mut EguiController) {
    let palette = style::palette();
    egui::ScrollArea::vertical()
        .id_salt("predict_page_scroll")
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                card(palette.card_fill).show(ui, |ui| {
                    ui.label(RichText::new("Enter Student Details").size(22.0).strong());
                });
                ui.add_space(10.0);
                card(palette.card_fill).show(ui, |ui| render_fields(ui, controller));
                ui.add_space(20.0);

                let predict = egui::Button::new(
                    RichText::new("Predict Placement")
                        .size(16.0)
                        .strong()
                        .color(Color32::WHITE),
                )
                .fill(palette.accent_go)
                .min_size(egui::vec2(220.0, 40.0));
                if ui.add(predict).clicked() {
                    controller.submit_prediction();
                }
                ui.add_space(10.0);

                let result = controller.result_text();
                if !result.is_empty() {
                    card(palette.card_fill).show(ui, |ui| {
                        ui.label(RichText::new(result).size(18.0).strong());
                    });
                }
                ui.add_space(10.0);

                let back = egui::Button::new(
                    RichText::new("← Back to Home")
                        .size(14.0)
                        .color(Color32::WHITE),
                )
                .fill(palette.accent_back);
                if ui.add(back).clicked() {
                    controller.request_page(PageId::Home);
                }
                ui.add_space(10.0);
            });
        });
}

fn card(fill: Color32) -> Frame {
    Frame::new()
        .fill(fill)
        .inner_margin(Margin::symmetric(16, 8))
        .stroke(style::section_stroke())
}

fn render_fields(ui: &mut egui::Ui, controller: &mut EguiController) {
    egui::Grid::new("predict_form_grid")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            for (idx, (field, value)) in controller.form_mut().fields_mut().enumerate() {
                ui.label(RichText::new(field.name).size(14.0));
                match value {
                    FieldValue::Text(text) => {
                        ui.add(egui::TextEdit::singleline(text).desired_width(INPUT_WIDTH));
                    }
                    FieldValue::Choice(choice) => {
                        egui::ComboBox::from_id_salt(("binary_field", idx))
                            .selected_text(choice.label())
                            .width(INPUT_WIDTH)
                            .show_ui(ui, |ui| {
                                for option in BinaryChoice::ALL {
                                    ui.selectable_value(&mut *choice, option, option.label());
                                }
                            });
                    }
                }
                ui.end_row();
            }
        });
}
