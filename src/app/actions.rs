use super::*;
use crate::model::BiasAnswer;
use crate::rules::{judge_bias, validate_submission};
use log::info;

impl MirrorApp {
    /// Valida las cinco palabras y lanza la recreación. Si no son válidas se
    /// queda en la extracción con el motivo y no se llama a ningún servicio.
    pub fn submit_words<S: AsRef<str>>(&mut self, inputs: &[S]) -> Result<(), FlowError> {
        self.ensure_state("submit words", &[AppState::Extraction])?;
        let Some(mode) = self.session.current_mode() else {
            return Err(FlowError::InvalidState {
                action: "submit words",
                state: self.state,
            });
        };

        let words = validate_submission(mode, inputs)?;
        info!("level {:?} words: {}", self.session.current_level(), words.join(", "));

        self.message.clear();
        self.session.user_words = words.clone();
        self.state = AppState::GeneratingRecreation;
        self.queue_job(Job::Recreation { words });
        Ok(())
    }

    /// Envía lo que hay escrito en los cuadros de texto
    pub fn submit_word_inputs(&mut self) -> Result<(), FlowError> {
        let inputs = self.session.word_inputs.clone();
        self.submit_words(&inputs)
    }

    /// Guarda la respuesta sobre el sesgo. Acertar o no, siempre se avanza.
    pub fn select_bias(&mut self, answer: BiasAnswer) -> Result<(), FlowError> {
        self.ensure_state("answer the bias question", &[AppState::BiasDetection])?;
        let Some(level) = self.session.level() else {
            return Err(FlowError::InvalidState {
                action: "answer the bias question",
                state: self.state,
            });
        };

        let outcome = judge_bias(level, answer);
        info!(
            "level {} bias answer {:?} (correct: {})",
            level.id, answer, outcome.correct
        );
        self.session.selected_bias = Some(answer);
        self.session.bias_outcome = Some(outcome);
        self.state = AppState::BiasFeedback;
        Ok(())
    }
}
