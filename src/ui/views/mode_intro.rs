use crate::MirrorApp;
use crate::ui::helpers::bullet_list;
use crate::ui::layout::centered_panel;
use egui::{Button, Context};

pub fn ui_mode_intro(app: &mut MirrorApp, ctx: &Context) {
    let Some(mode) = app.session.current_mode() else {
        app.return_to_level_select();
        return;
    };

    centered_panel(ctx, 320.0, 520.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(format!("{} {}", mode.badge(), mode.display_name()));
            ui.add_space(12.0);
        });
        bullet_list(ui, mode.intro_lines());
        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            if ui.add_sized([240.0, 40.0], Button::new("Let's go!")).clicked() {
                let result = app.acknowledge_intro();
                app.report(result);
            }
        });
    });
}
