use crate::MirrorApp;
use crate::model::BiasAnswer;
use crate::ui::layout::{centered_panel, message_line, scroll_panel};
use crate::ui::views::comparison::image_pair;
use egui::{Button, Context, RichText};

pub fn ui_bias_detection(app: &mut MirrorApp, ctx: &Context) {
    scroll_panel(ctx, 900.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("⚖ Spot the bias");
            ui.label("Compare both images. What kind of bias, if any, did the AI add?");
        });
        ui.add_space(8.0);
        image_pair(app, ui);
        ui.add_space(12.0);

        ui.vertical_centered(|ui| {
            for answer in BiasAnswer::ALL {
                if ui.add_sized([320.0, 36.0], Button::new(answer.label())).clicked() {
                    let result = app.select_bias(answer);
                    app.report(result);
                }
                ui.add_space(4.0);
            }
        });
        message_line(ui, &app.message);
    });
}

pub fn ui_bias_feedback(app: &mut MirrorApp, ctx: &Context) {
    let Some(outcome) = app.session.bias_outcome.clone() else {
        app.return_to_level_select();
        return;
    };

    centered_panel(ctx, 260.0, 520.0, |ui| {
        ui.vertical_centered(|ui| {
            let heading = if outcome.correct {
                "✅ Well spotted!"
            } else {
                "🤔 Take another look"
            };
            ui.heading(heading);
            ui.add_space(10.0);
            ui.label(format!("Your answer: {}", outcome.answer.label()));
            ui.label(format!("Bias detected: {}", outcome.detected_label));
            ui.label(RichText::new(outcome.type_label).strong());
            ui.add_space(8.0);
            ui.weak("AI image models learn from data that carries human assumptions. Noticing them is the first step to writing fairer prompts.");
            ui.add_space(16.0);
            if ui.add_sized([240.0, 40.0], Button::new("Continue ➡")).clicked() {
                let result = app.advance();
                app.report(result);
            }
            message_line(ui, &app.message);
        });
    });
}
