// src/gui/components/header.rs
//
// Banner image, title and data source link.

use std::path::Path;

use eframe::egui;
use crate::{
    config::consts::{BASE_URL, HEADER_IMAGE},
    error::Result,
    gui::app::App,
};

fn decode_png(path: &Path) -> Result<egui::ColorImage> {
    let rgba = image::open(path)?.to_rgba8();
    let (w, h) = rgba.dimensions();
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        [w as usize, h as usize],
        rgba.as_raw(),
    ))
}

/// Purely cosmetic: a missing or broken banner is logged and skipped.
pub fn load_texture(ctx: &egui::Context) -> Option<egui::TextureHandle> {
    let path = Path::new(HEADER_IMAGE);
    if !path.exists() {
        logd!("Header: {} not found, skipping banner", path.display());
        return None;
    }
    match decode_png(path) {
        Ok(img) => Some(ctx.load_texture("nba_header", img, egui::TextureOptions::LINEAR)),
        Err(e) => {
            loge!("Header: cannot decode {}: {}", path.display(), e);
            None
        }
    }
}

pub fn draw(ui: &mut egui::Ui, app: &App) {
    if let Some(tex) = &app.header_image {
        let sized = egui::load::SizedTexture::from_handle(tex);
        ui.add(egui::Image::from_texture(sized).max_width(ui.available_width()));
    }

    ui.heading("NBA player stats explorer");
    ui.horizontal(|ui| {
        ui.label("Data from");
        ui.hyperlink_to("Basketball-reference.com", BASE_URL);
    });
}
