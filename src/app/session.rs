use crate::feedback::Feedback;
use crate::model::{BiasAnswer, ImageHandle, LevelDefinition, Mode};
use crate::rules::{BiasOutcome, WORD_COUNT};

/// Estado del reto en curso. Se sobrescribe entero en cada `start_level`;
/// no se guarda historial de intentos anteriores.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Cambia con cada reto nuevo o abandonado. Los trabajos y la cuenta
    /// atrás lo llevan consigo para descartar resultados de otro reto.
    ticket: u64,
    level: Option<LevelDefinition>,
    pub original_image: Option<ImageHandle>,
    pub recreated_image: Option<ImageHandle>,
    pub recreation_prompt: Option<String>,
    pub word_inputs: [String; WORD_COUNT],
    pub user_words: Vec<String>,
    pub selected_bias: Option<BiasAnswer>,
    pub bias_outcome: Option<BiasOutcome>,
    pub view_time_remaining: Option<u32>,
    pub feedback: Option<Feedback>,
}

impl SessionState {
    pub fn begin(&mut self, level: LevelDefinition) {
        let ticket = self.ticket + 1;
        *self = Self {
            ticket,
            level: Some(level),
            ..Self::default()
        };
    }

    /// Descarta el reto actual (imágenes, palabras, feedback)
    pub fn clear(&mut self) {
        let ticket = self.ticket + 1;
        *self = Self {
            ticket,
            ..Self::default()
        };
    }

    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn level(&self) -> Option<&LevelDefinition> {
        self.level.as_ref()
    }

    pub fn current_level(&self) -> Option<usize> {
        self.level.as_ref().map(|l| l.id)
    }

    pub fn current_mode(&self) -> Option<Mode> {
        self.level.as_ref().map(|l| l.mode)
    }
}
