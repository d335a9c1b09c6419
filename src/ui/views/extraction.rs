use crate::MirrorApp;
use crate::rules::{ObservationStyle, WORD_COUNT};
use crate::ui::helpers::{bullet_list, image_frame, placeholder_frame};
use crate::ui::layout::{message_line, scroll_panel};
use egui::{Button, Context, TextEdit};

pub fn ui_extraction(app: &mut MirrorApp, ctx: &Context) {
    let Some(level) = app.session.level().cloned() else {
        app.return_to_level_select();
        return;
    };
    let mode = level.mode;

    scroll_panel(ctx, 640.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(format!("Describe it in {WORD_COUNT} words"));
            ui.add_space(8.0);

            let width = ui.available_width().min(360.0);
            match mode.observation_style() {
                ObservationStyle::Timed => placeholder_frame(ui, "🧠 From memory", width),
                ObservationStyle::Open => {
                    if let Some(image) = app.session.original_image.as_ref() {
                        image_frame(ui, &mut app.textures, image, width);
                    }
                }
            }
        });

        ui.add_space(12.0);
        bullet_list(ui, mode.rule_lines());
        if let Some(example) = mode.input_example() {
            ui.weak(example);
        }
        ui.add_space(8.0);

        let mut submit = false;
        for (i, input) in app.session.word_inputs.iter_mut().enumerate() {
            let response = ui.add(
                TextEdit::singleline(input)
                    .hint_text(format!("Word {}", i + 1))
                    .desired_width(f32::INFINITY),
            );
            if response.lost_focus() && ui.input(|inp| inp.key_pressed(egui::Key::Enter)) && i + 1 == WORD_COUNT {
                submit = true;
            }
        }

        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            if ui.add_sized([240.0, 40.0], Button::new("✨ Recreate image")).clicked() {
                submit = true;
            }
        });

        if submit {
            let result = app.submit_word_inputs();
            app.report(result);
        }
        message_line(ui, &app.message);
    });
}
