use crate::MirrorApp;
use crate::model::AppState;
use egui::{CentralPanel, Context, Frame, ScrollArea, Ui, Visuals};

pub fn top_panel(app: &mut MirrorApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.strong("🪞 Prompt Mirror");
            ui.separator();
            ui.label(app.progress_label());

            if app.state != AppState::LevelSelect {
                if ui.button("⬅ Back to challenges").clicked() {
                    app.return_to_level_select();
                    ctx.request_repaint();
                }
            } else if ui.button("🔄 Reset progress").clicked() {
                app.confirm_reset = true;
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light mode").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                inner(ui);
            });
        ui.add_space(extra);
    });
}

/// Panel con scroll para pantallas largas (comparación, aprendizaje)
pub fn scroll_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                let w = ui.available_width().min(max_width);
                ui.set_max_width(w);
                Frame::default()
                    .fill(ui.visuals().window_fill())
                    .inner_margin(egui::Margin::symmetric(16, 16))
                    .show(ui, inner);
            });
        });
    });
}

/// Aviso suave bajo el contenido (errores de validación, acciones rechazadas)
pub fn message_line(ui: &mut Ui, message: &str) {
    if !message.is_empty() {
        ui.add_space(8.0);
        ui.colored_label(ui.visuals().warn_fg_color, message);
    }
}
