use crate::MirrorApp;
use crate::model::ObservationPhase;
use crate::ui::helpers::image_frame;
use crate::ui::layout::{centered_panel, message_line, scroll_panel};
use egui::{Button, Context, RichText};

pub fn ui_observation(app: &mut MirrorApp, ctx: &Context, phase: ObservationPhase) {
    match phase {
        ObservationPhase::BlindWarning => ui_blind_warning(app, ctx),
        ObservationPhase::Viewing => ui_viewing(app, ctx),
    }
}

fn ui_blind_warning(app: &mut MirrorApp, ctx: &Context) {
    let seconds = app
        .session
        .level()
        .and_then(|level| level.view_time)
        .unwrap_or_default();

    centered_panel(ctx, 220.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("⏱ Memory challenge");
            ui.add_space(10.0);
            ui.label(format!(
                "You will see the image for only {seconds} seconds. Then it disappears and you describe it from memory."
            ));
            ui.add_space(16.0);
            if ui.add_sized([240.0, 40.0], Button::new("I'm ready")).clicked() {
                let result = app.begin_blind_observation();
                app.report(result);
            }
        });
    });
}

fn ui_viewing(app: &mut MirrorApp, ctx: &Context) {
    let Some(level) = app.session.level().cloned() else {
        app.return_to_level_select();
        return;
    };
    let remaining = app.countdown().map(|c| c.remaining());

    scroll_panel(ctx, 720.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(format!("{} {}", level.icon, level.title));
            ui.label(level.mode.observation_hint());
            if let Some(seconds) = remaining {
                ui.label(RichText::new(format!("⏱ {seconds}s")).size(28.0).strong());
            }
            ui.add_space(8.0);

            let width = ui.available_width().min(640.0);
            if let Some(image) = app.session.original_image.as_ref() {
                image_frame(ui, &mut app.textures, image, width);
            }

            ui.add_space(12.0);
            if ui.add_sized([240.0, 40.0], Button::new("I've got it, continue")).clicked() {
                let result = app.skip_to_extraction();
                app.report(result);
            }
            message_line(ui, &app.message);
        });
    });
}
