use crate::MirrorApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, ProgressBar};

pub fn ui_progress_summary(app: &mut MirrorApp, ctx: &Context) {
    let finished = app.progress.completed_count() == app.catalog.len();
    let badges = app.skill_badges();

    centered_panel(ctx, 360.0, 520.0, |ui| {
        ui.vertical_centered(|ui| {
            if finished {
                ui.heading("🏆 You mastered every challenge!");
            } else {
                ui.heading("📊 Your progress");
            }
            ui.add_space(10.0);
            ui.add(
                ProgressBar::new(app.progress.completion_ratio())
                    .show_percentage()
                    .text(app.progress_label()),
            );
            ui.add_space(12.0);
            ui.strong("Skills");
            for badge in &badges {
                ui.label(badge.label());
            }
            ui.add_space(16.0);
            if ui.add_sized([240.0, 40.0], Button::new("Back to challenges")).clicked() {
                let result = app.advance();
                app.report(result);
            }
        });
    });
}
