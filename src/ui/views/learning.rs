use crate::MirrorApp;
use crate::feedback::FeedbackSource;
use crate::ui::layout::{message_line, scroll_panel};
use egui::{Button, Context, RichText};

pub fn ui_learning(app: &mut MirrorApp, ctx: &Context) {
    scroll_panel(ctx, 640.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🎓 What you can learn");
        });
        ui.add_space(8.0);

        match app.session.feedback.clone() {
            None => {
                ui.vertical_centered(|ui| {
                    ui.spinner();
                    ui.label("Analyzing your words...");
                });
            }
            Some(feedback) => {
                ui.label(format!("Your words: {}", app.session.user_words.join(", ")));
                ui.add_space(6.0);
                ui.label(RichText::new("Words an expert might use").strong());
                ui.label(feedback.suggested_words.join(" · "));
                ui.add_space(8.0);
                ui.label(RichText::new("Insights").strong());
                ui.label(&feedback.insights);
                ui.add_space(8.0);
                ui.label(RichText::new("Tips").strong());
                for tip in &feedback.tips {
                    ui.label(format!("💡 {tip}"));
                }
                if feedback.source == FeedbackSource::Fallback {
                    ui.add_space(6.0);
                    ui.weak("Offline coaching: the AI coach is not available right now.");
                }
            }
        }

        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            if ui.add_sized([240.0, 40.0], Button::new("Next challenge ➡")).clicked() {
                let result = app.advance();
                app.report(result);
            }
        });
        message_line(ui, &app.message);
    });
}
