use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub card_fill: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent_go: Color32,
    pub accent_back: Color32,
    pub warning: Color32,
    pub success: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(236, 240, 243),
        bg_secondary: Color32::from_rgb(222, 228, 233),
        card_fill: Color32::from_rgba_unmultiplied(255, 255, 255, 235),
        panel_outline: Color32::from_rgb(190, 198, 206),
        text_primary: Color32::from_rgb(28, 32, 36),
        text_muted: Color32::from_rgb(96, 104, 112),
        accent_go: Color32::from_rgb(76, 175, 80),
        accent_back: Color32::from_rgb(244, 67, 54),
        warning: Color32::from_rgb(200, 128, 96),
        success: Color32::from_rgb(56, 142, 60),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = Color32::WHITE;
    visuals.error_fg_color = palette.accent_back;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent_go);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_widget(&mut visuals.widgets.inactive, palette);
    set_widget(&mut visuals.widgets.hovered, palette);
    set_widget(&mut visuals.widgets.active, palette);
    set_widget(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::same(4);
    visuals.popup_shadow = Shadow::NONE;
}

fn set_widget(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(3);
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

/// Tone of the status bar badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Info,
    Error,
}

pub fn status_badge_label(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Idle => "Idle",
        StatusTone::Info => "Info",
        StatusTone::Error => "Error",
    }
}

pub fn status_badge_color(tone: StatusTone) -> Color32 {
    let palette = palette();
    match tone {
        StatusTone::Idle => Color32::from_rgb(120, 120, 120),
        StatusTone::Info => palette.success,
        StatusTone::Error => palette.accent_back,
    }
}

pub fn section_stroke() -> Stroke {
    Stroke::new(1.0, palette().panel_outline)
}
