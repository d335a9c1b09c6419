use crate::data::LevelCatalog;
use crate::error::FlowError;
use crate::gateway::Gateways;
use crate::model::{AppState, SkillTag};
use crate::ui::TextureCache;
use log::debug;
use std::sync::Arc;

// Submódulos
pub mod actions;
pub mod countdown;
pub mod jobs;
pub mod navigation;
pub mod progress;
pub mod resets;
pub mod session;
pub mod view_models;

pub use countdown::Countdown;
pub use jobs::{Job, JobOutcome, JobResult, TicketedJob};
pub use progress::ProgressTracker;
pub use session::SessionState;

// Re-export de view models
pub use crate::view_models::{LevelCard, SkillBadge};

/// Aviso de hito: se muestra en la selección de retos al llegar a 3, 6 y 9
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MilestoneNotice {
    pub completed: usize,
    pub new_skills: Vec<SkillTag>,
}

/// Controlador del flujo de pantallas. Es el único dueño del estado de la
/// partida; la interfaz solo lee sus campos y llama a sus operaciones.
pub struct MirrorApp {
    pub catalog: LevelCatalog,
    pub progress: ProgressTracker,
    pub session: SessionState,
    pub state: AppState,
    pub message: String,
    pub milestone: Option<MilestoneNotice>,
    pub confirm_reset: bool,
    pub textures: TextureCache,
    gateways: Arc<Gateways>,
    pending_job: Option<TicketedJob>,
    in_flight: Option<jobs::InFlightJob>,
    countdown: Option<Countdown>,
    announced_milestone: usize,
}

impl MirrorApp {
    pub fn new(catalog: LevelCatalog, gateways: Gateways) -> Self {
        let progress = ProgressTracker::new(catalog.len());
        Self {
            catalog,
            progress,
            session: SessionState::default(),
            state: AppState::LevelSelect,
            message: String::new(),
            milestone: None,
            confirm_reset: false,
            textures: TextureCache::default(),
            gateways: Arc::new(gateways),
            pending_job: None,
            in_flight: None,
            countdown: None,
            announced_milestone: 0,
        }
    }

    /// Muestra el error como aviso suave; nada de esto es fatal
    pub fn report(&mut self, result: Result<(), FlowError>) {
        match result {
            Ok(()) => {}
            Err(err) => {
                debug!("action rejected: {err}");
                self.message = err.to_string();
            }
        }
    }

    pub(crate) fn ensure_state(
        &self,
        action: &'static str,
        allowed: &[AppState],
    ) -> Result<(), FlowError> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(FlowError::InvalidState {
                action,
                state: self.state,
            })
        }
    }
}
