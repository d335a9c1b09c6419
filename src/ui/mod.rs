mod helpers;
pub mod layout;
pub mod views;

pub use helpers::TextureCache;

use crate::app::MirrorApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::{Duration, Instant};

/// Cada cuánto se vuelve a pintar mientras hay un trabajo en marcha
const BUSY_REPAINT: Duration = Duration::from_millis(100);

impl App for MirrorApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Resultados de los servicios y reloj de la cuenta atrás
        self.poll_job_result();
        self.dispatch_pending_job();
        let now = Instant::now();
        self.update_countdown(now);

        if self.state == AppState::LevelSelect && !self.textures.is_empty() {
            self.textures.clear();
        }

        top_panel(self, ctx);
        bottom_panel(ctx);

        // Dispatch por estado a las vistas
        match self.state {
            AppState::LevelSelect => views::level_select::ui_level_select(self, ctx),
            AppState::ModeIntro => views::mode_intro::ui_mode_intro(self, ctx),
            AppState::Observation(phase) => views::observation::ui_observation(self, ctx, phase),
            AppState::GeneratingImage | AppState::GeneratingRecreation => {
                views::generating::ui_generating(self, ctx)
            }
            AppState::Extraction => views::extraction::ui_extraction(self, ctx),
            AppState::Comparison => views::comparison::ui_comparison(self, ctx),
            AppState::BiasDetection => views::bias::ui_bias_detection(self, ctx),
            AppState::BiasFeedback => views::bias::ui_bias_feedback(self, ctx),
            AppState::Learning => views::learning::ui_learning(self, ctx),
            AppState::ProgressSummary => views::progress::ui_progress_summary(self, ctx),
        }

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }

        // Un botón pulsado este frame puede haber dejado un trabajo pendiente
        self.dispatch_pending_job();

        if let Some(countdown) = self.countdown() {
            ctx.request_repaint_after(countdown.until_next_tick(Instant::now()));
        } else if self.is_busy() {
            ctx.request_repaint_after(BUSY_REPAINT);
        }
    }
}
