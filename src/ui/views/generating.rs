use crate::MirrorApp;
use crate::model::AppState;
use crate::ui::layout::centered_panel;
use egui::Context;

pub fn ui_generating(app: &mut MirrorApp, ctx: &Context) {
    let text = match app.state {
        AppState::GeneratingRecreation => "Recreating the image from your words...",
        _ => "Generating your challenge image...",
    };
    centered_panel(ctx, 120.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.spinner();
            ui.add_space(8.0);
            ui.label(text);
            if let Some(level) = app.session.level() {
                ui.weak(format!("{} {}", level.icon, level.title));
            }
        });
    });
}
