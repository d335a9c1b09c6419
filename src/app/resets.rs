use super::*;
use eframe::egui;
use log::info;

impl MirrorApp {
    /// Borra el progreso de la partida y vuelve a la rejilla de retos
    pub fn reset_progress(&mut self) {
        info!("resetting progress");
        self.progress.reset();
        self.announced_milestone = 0;
        self.open_level_select();
        self.milestone = None;
        self.confirm_reset = false;
        self.message.clear();
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Reset progress")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Are you sure you want to clear all your progress? This cannot be undone!");
                ui.horizontal(|ui| {
                    if ui.button("Yes, reset").clicked() {
                        self.reset_progress();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}
