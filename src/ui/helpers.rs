// src/ui/helpers.rs
use crate::model::{ImageHandle, ImageSource};
use egui::load::SizedTexture;
use egui::{Button, Color32, Context, Frame, RichText, TextureHandle, TextureOptions, Ui, Vec2};
use std::collections::HashMap;

const PLACEHOLDER_FILL: Color32 = Color32::from_rgb(0x4d, 0xd0, 0xe1);

pub fn big_list_button(
    ui: &mut Ui,
    label: String,
    hover: &str,
    width: f32,
    height: f32,
    enabled: bool,
) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .on_hover_text(hover)
        .on_disabled_hover_text(hover)
        .clicked()
}

/// Texturas subidas a la GPU, por URL de la imagen
#[derive(Default)]
pub struct TextureCache {
    by_url: HashMap<String, TextureHandle>,
}

impl TextureCache {
    pub fn texture_for(&mut self, ctx: &Context, image: &ImageHandle) -> Option<TextureHandle> {
        let pixels = image.pixels.as_ref()?;
        if let Some(texture) = self.by_url.get(&image.url) {
            return Some(texture.clone());
        }
        let color = egui::ColorImage::from_rgba_unmultiplied([pixels.width, pixels.height], &pixels.rgba);
        let texture = ctx.load_texture(image.url.clone(), color, TextureOptions::LINEAR);
        self.by_url.insert(image.url.clone(), texture.clone());
        Some(texture)
    }

    pub fn clear(&mut self) {
        self.by_url.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.by_url.is_empty()
    }
}

/// Dibuja la imagen, o el recuadro de placeholder si no hay píxeles
pub fn image_frame(ui: &mut Ui, textures: &mut TextureCache, image: &ImageHandle, width: f32) {
    if let Some(texture) = textures.texture_for(ui.ctx(), image) {
        ui.add(egui::Image::new(SizedTexture::from_handle(&texture)).max_width(width));
        return;
    }
    let caption = match &image.source {
        ImageSource::Placeholder { caption } => caption.as_str(),
        ImageSource::Generated => "Image unavailable",
    };
    placeholder_frame(ui, caption, width);
}

pub fn placeholder_frame(ui: &mut Ui, caption: &str, width: f32) {
    Frame::default().fill(PLACEHOLDER_FILL).show(ui, |ui| {
        ui.set_min_size(Vec2::new(width, width * 0.75));
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new(caption).color(Color32::WHITE).size(22.0));
        });
    });
}

pub fn bullet_list(ui: &mut Ui, lines: &[&str]) {
    for line in lines {
        ui.label(format!("• {line}"));
    }
}
