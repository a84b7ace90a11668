//! Decorative background image stretched over the whole window.

use std::path::Path;

use eframe::egui::{self, Color32, ColorImage, LayerId, Rect, TextureHandle, TextureOptions, pos2};

/// Decode an image file into egui pixels.
pub(super) fn decode_background(path: &Path) -> Result<ColorImage, image::ImageError> {
    let rgba = image::open(path)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// Load the configured background; missing or broken files only log a warning.
pub(super) fn load_background(ctx: &egui::Context, path: Option<&Path>) -> Option<TextureHandle> {
    let path = path?;
    match decode_background(path) {
        Ok(image) => Some(ctx.load_texture("page_background", image, TextureOptions::LINEAR)),
        Err(err) => {
            tracing::warn!("Error loading background image {}: {err}", path.display());
            None
        }
    }
}

/// Paint the texture across the current viewport, behind all panels.
pub(super) fn paint_background(ctx: &egui::Context, texture: &TextureHandle) {
    let rect = ctx.viewport_rect();
    let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
    ctx.layer_painter(LayerId::background())
        .image(texture.id(), rect, uv, Color32::WHITE);
}
