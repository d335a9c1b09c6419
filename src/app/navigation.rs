use super::*;
use crate::model::{ImageHandle, Mode, ObservationPhase};
use crate::rules::ObservationStyle;
use log::info;
use std::time::Instant;

impl MirrorApp {
    /// Empieza un reto desbloqueado. Los primeros retos de emoción y sesgo
    /// pasan antes por la introducción del modo.
    pub fn start_level(&mut self, level_id: usize) -> Result<(), FlowError> {
        self.ensure_state(
            "start a level",
            &[AppState::LevelSelect, AppState::ProgressSummary],
        )?;

        let level = self
            .catalog
            .get(level_id)
            .cloned()
            .ok_or(FlowError::UnknownLevel(level_id))?;
        if !self.progress.is_unlocked(level_id) {
            return Err(FlowError::LevelLocked(level_id));
        }

        info!("starting level {level_id} ({:?})", level.mode);
        self.drop_jobs();
        self.cancel_countdown();
        self.milestone = None;
        self.message.clear();

        let needs_intro = level.mode.has_intro() && self.catalog.is_first_of_mode(level_id);
        self.session.begin(level);

        if needs_intro {
            self.state = AppState::ModeIntro;
        } else {
            self.request_original_image();
        }
        Ok(())
    }

    pub fn acknowledge_intro(&mut self) -> Result<(), FlowError> {
        self.ensure_state("acknowledge the intro", &[AppState::ModeIntro])?;
        self.request_original_image();
        Ok(())
    }

    /// Del aviso del modo a ciegas a la observación con cuenta atrás
    pub fn begin_blind_observation(&mut self) -> Result<(), FlowError> {
        self.begin_blind_observation_at(Instant::now())
    }

    pub fn begin_blind_observation_at(&mut self, now: Instant) -> Result<(), FlowError> {
        self.ensure_state(
            "begin observation",
            &[AppState::Observation(ObservationPhase::BlindWarning)],
        )?;
        let seconds = self
            .session
            .level()
            .and_then(|level| level.view_time)
            .unwrap_or_default();

        self.state = AppState::Observation(ObservationPhase::Viewing);
        if seconds == 0 {
            self.enter_extraction();
        } else {
            self.start_countdown(seconds, now);
        }
        Ok(())
    }

    /// Pasa a escribir las palabras sin esperar a la cuenta atrás
    pub fn skip_to_extraction(&mut self) -> Result<(), FlowError> {
        self.ensure_state(
            "continue to word entry",
            &[AppState::Observation(ObservationPhase::Viewing)],
        )?;
        self.enter_extraction();
        Ok(())
    }

    pub fn advance(&mut self) -> Result<(), FlowError> {
        match self.state {
            AppState::Comparison | AppState::BiasFeedback => {
                self.complete_current_level();
                Ok(())
            }
            AppState::Learning | AppState::ProgressSummary => {
                self.open_level_select();
                Ok(())
            }
            state => Err(FlowError::InvalidState {
                action: "continue",
                state,
            }),
        }
    }

    /// Abandona el reto en curso desde cualquier pantalla
    pub fn return_to_level_select(&mut self) {
        if self.state != AppState::LevelSelect {
            info!("leaving level {:?}", self.session.current_level());
        }
        self.open_level_select();
    }

    pub fn view_progress(&mut self) -> Result<(), FlowError> {
        self.ensure_state("view progress", &[AppState::LevelSelect])?;
        self.milestone = None;
        self.state = AppState::ProgressSummary;
        Ok(())
    }

    pub(crate) fn request_original_image(&mut self) {
        let Some(level) = self.session.level() else {
            return;
        };
        let job = Job::OriginalImage {
            level_id: level.id,
            prompt: level.prompt.clone(),
        };
        self.state = AppState::GeneratingImage;
        self.queue_job(job);
    }

    pub(crate) fn on_original_ready(&mut self, image: ImageHandle) {
        let style = self
            .session
            .current_mode()
            .map(Mode::observation_style)
            .unwrap_or(ObservationStyle::Open);
        self.session.original_image = Some(image);
        self.state = match style {
            ObservationStyle::Timed => AppState::Observation(ObservationPhase::BlindWarning),
            ObservationStyle::Open => AppState::Observation(ObservationPhase::Viewing),
        };
    }

    pub(crate) fn enter_extraction(&mut self) {
        self.cancel_countdown();
        self.state = AppState::Extraction;
    }

    pub(crate) fn on_recreation_ready(&mut self, image: ImageHandle, prompt: String) {
        self.session.recreated_image = Some(image);
        self.session.recreation_prompt = Some(prompt);
        self.state = self
            .session
            .current_mode()
            .map(Mode::post_generation_state)
            .unwrap_or(AppState::Comparison);
    }

    fn complete_current_level(&mut self) {
        let Some(level) = self.session.level().cloned() else {
            self.open_level_select();
            return;
        };

        if self.progress.mark_completed(level.id) {
            info!(
                "level {} completed ({}/{})",
                level.id,
                self.progress.completed_count(),
                self.catalog.len()
            );
        }

        if level.id == self.catalog.last_id() {
            self.drop_jobs();
            self.state = AppState::ProgressSummary;
        } else if level.mode.has_learning_screen() {
            self.state = AppState::Learning;
            self.queue_job(Job::Feedback {
                words: self.session.user_words.clone(),
                level,
            });
        } else {
            self.open_level_select();
        }
    }

    /// Vuelve a la rejilla de retos: descarta el reto y avisa de hitos nuevos
    pub(crate) fn open_level_select(&mut self) {
        self.drop_jobs();
        self.cancel_countdown();
        self.session.clear();
        self.message.clear();
        self.state = AppState::LevelSelect;

        let completed = self.progress.completed_count();
        if ProgressTracker::milestone_reached(completed) && completed > self.announced_milestone {
            info!("milestone reached: {completed} levels completed");
            self.announced_milestone = completed;
            self.milestone = Some(MilestoneNotice {
                completed,
                new_skills: ProgressTracker::skills_gained_at(completed),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LevelCatalog;
    use crate::error::{AssetLoadError, GatewayError};
    use crate::gateway::{FeedbackGateway, ImageGateway};
    use crate::model::DecodedImage;

    struct OfflineImages;

    impl ImageGateway for OfflineImages {
        fn generate(&self, _prompt: &str) -> Result<ImageHandle, GatewayError> {
            Err(GatewayError::NotConfigured { service: "images" })
        }

        fn preload(&self, image: &ImageHandle) -> Result<DecodedImage, AssetLoadError> {
            Err(AssetLoadError::Unreachable {
                url: image.url.clone(),
                reason: "offline".into(),
            })
        }
    }

    struct OfflineFeedback;

    impl FeedbackGateway for OfflineFeedback {
        fn get_feedback(&self, _: &str, _: &[String]) -> Result<String, GatewayError> {
            Err(GatewayError::NotConfigured { service: "feedback" })
        }
    }

    fn offline_app() -> MirrorApp {
        let gateways = Gateways {
            images: Box::new(OfflineImages),
            enhancer: None,
            feedback: Box::new(OfflineFeedback),
        };
        MirrorApp::new(LevelCatalog::embedded().unwrap(), gateways)
    }

    #[test]
    fn locked_level_is_rejected() {
        let mut app = offline_app();
        assert_eq!(app.start_level(2), Err(FlowError::LevelLocked(2)));
        assert_eq!(app.start_level(13), Err(FlowError::UnknownLevel(13)));
        assert_eq!(app.state, AppState::LevelSelect);
    }

    #[test]
    fn failed_generation_uses_placeholder() {
        let mut app = offline_app();
        app.start_level(1).unwrap();
        assert_eq!(app.state, AppState::GeneratingImage);
        assert!(app.run_pending_job());
        assert_eq!(app.state, AppState::Observation(ObservationPhase::Viewing));
        let image = app.session.original_image.as_ref().unwrap();
        assert!(image.is_placeholder());
        assert!(image.url.ends_with("Challenge+1"));
    }

    #[test]
    fn intro_only_on_first_level_of_mode() {
        let mut app = offline_app();
        for id in 1..=6 {
            app.progress.mark_completed(id);
        }
        app.start_level(7).unwrap();
        assert_eq!(app.state, AppState::ModeIntro);
        app.acknowledge_intro().unwrap();
        assert_eq!(app.state, AppState::GeneratingImage);

        app.return_to_level_select();
        app.progress.mark_completed(7);
        app.start_level(8).unwrap();
        assert_eq!(app.state, AppState::GeneratingImage);
    }

    #[test]
    fn blind_level_waits_on_warning() {
        let mut app = offline_app();
        for id in 1..=3 {
            app.progress.mark_completed(id);
        }
        app.start_level(4).unwrap();
        app.run_pending_job();
        assert_eq!(
            app.state,
            AppState::Observation(ObservationPhase::BlindWarning)
        );
        let start = Instant::now();
        app.begin_blind_observation_at(start).unwrap();
        assert_eq!(app.session.view_time_remaining, Some(10));
        assert!(app.countdown().is_some());

        app.skip_to_extraction().unwrap();
        assert_eq!(app.state, AppState::Extraction);
        assert!(app.countdown().is_none());
    }

    #[test]
    fn leaving_a_level_clears_the_message() {
        let mut app = offline_app();
        app.start_level(1).unwrap();
        app.run_pending_job();
        app.skip_to_extraction().unwrap();
        let result = app.submit_words(&["calm", "lake"]);
        app.report(result);
        assert!(!app.message.is_empty());

        app.return_to_level_select();
        assert_eq!(app.state, AppState::LevelSelect);
        assert!(app.message.is_empty());
    }

    #[test]
    fn advance_outside_result_screens_is_rejected() {
        let mut app = offline_app();
        assert!(matches!(
            app.advance(),
            Err(FlowError::InvalidState { .. })
        ));
    }

    #[test]
    fn view_progress_only_from_level_select() {
        let mut app = offline_app();
        app.view_progress().unwrap();
        assert_eq!(app.state, AppState::ProgressSummary);
        app.advance().unwrap();
        assert_eq!(app.state, AppState::LevelSelect);

        app.start_level(1).unwrap();
        assert!(app.view_progress().is_err());
    }
}
