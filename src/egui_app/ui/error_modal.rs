use super::EguiApp;
use eframe::egui::{self, Align2, Color32, Id, LayerId, Order, RichText};

/// The error modal sits above every panel and window.
const MODAL_ORDER: Order = Order::Tooltip;

impl EguiApp {
    /// Render the submission error notification while it is open.
    pub(super) fn render_error_modal(&mut self, ctx: &egui::Context) {
        if !self.controller.ui.error.open {
            return;
        }
        modal_backdrop(
            ctx,
            Id::new("submit_error_modal"),
            Color32::from_rgba_premultiplied(0, 0, 0, 120),
        );
        // Enter also activates the focused submit button, so only Escape dismisses.
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.controller.dismiss_error();
            return;
        }

        let mut open = true;
        let mut acknowledged = false;
        let message = self.controller.ui.error.message.clone();
        egui::Window::new("Error")
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .order(MODAL_ORDER)
            .collapsible(false)
            .resizable(false)
            .default_width(360.0)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(RichText::new(message).color(ui.visuals().error_fg_color));
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    acknowledged = ui.button("OK").clicked();
                });
            });
        if !open || acknowledged {
            self.controller.dismiss_error();
        }
    }
}

/// Dim the viewport and swallow pointer input behind the modal.
fn modal_backdrop(ctx: &egui::Context, id: Id, color: Color32) {
    let rect = ctx.viewport_rect();
    ctx.layer_painter(LayerId::new(MODAL_ORDER, id.with("backdrop_paint")))
        .rect_filled(rect, 0.0, color);
    egui::Area::new(id.with("backdrop_blocker"))
        .order(MODAL_ORDER)
        .fixed_pos(rect.min)
        .show(ctx, |ui| {
            ui.allocate_rect(rect, egui::Sense::click_and_drag());
        });
}
