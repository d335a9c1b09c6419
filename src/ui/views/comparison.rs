use crate::MirrorApp;
use crate::ui::helpers::{bullet_list, image_frame};
use crate::ui::layout::{message_line, scroll_panel};
use egui::{Button, Context, RichText};

/// Original y recreación, lado a lado. Se usa también en la detección de sesgos.
pub fn image_pair(app: &mut MirrorApp, ui: &mut egui::Ui) {
    let width = ((ui.available_width() - 16.0) / 2.0).max(120.0);
    ui.columns(2, |columns| {
        columns[0].vertical_centered(|ui| {
            ui.strong("Original");
            if let Some(image) = app.session.original_image.as_ref() {
                image_frame(ui, &mut app.textures, image, width);
            }
        });
        columns[1].vertical_centered(|ui| {
            ui.strong("Your recreation");
            if let Some(image) = app.session.recreated_image.as_ref() {
                image_frame(ui, &mut app.textures, image, width);
            }
        });
    });
}

pub fn ui_comparison(app: &mut MirrorApp, ctx: &Context) {
    let Some(level) = app.session.level().cloned() else {
        app.return_to_level_select();
        return;
    };

    scroll_panel(ctx, 900.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("How close did you get?");
        });
        ui.add_space(8.0);
        image_pair(app, ui);

        ui.add_space(12.0);
        ui.label(RichText::new(format!("Your words: {}", app.session.user_words.join(", "))).strong());
        if let Some(prompt) = &app.session.recreation_prompt {
            ui.weak(format!("Prompt sent: {prompt}"));
        }
        ui.add_space(8.0);
        ui.label("Think about it:");
        bullet_list(ui, &level.mode.reflection_prompts());

        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            if ui.add_sized([240.0, 40.0], Button::new("Continue ➡")).clicked() {
                let result = app.advance();
                app.report(result);
            }
        });
        message_line(ui, &app.message);
    });
}
