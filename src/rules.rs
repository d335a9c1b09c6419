//! Reglas por modo: qué se observa, qué palabras se aceptan y a qué pantalla
//! se va tras regenerar la imagen. También elige los textos que ve el jugador.
//!
//! El filtro de emociones es una heurística sintáctica (listas cerradas y un
//! sufijo), no análisis de lenguaje. Habrá falsos positivos y negativos.

use crate::error::ValidationError;
use crate::model::{AppState, BiasAnswer, BiasType, LevelDefinition, Mode};
use thiserror::Error;

pub const WORD_COUNT: usize = 5;

const BANNED_NOUNS: &[&str] = &[
    // Personas
    "person", "people", "man", "woman", "child", "boy", "girl", "human", "figure", "someone",
    // Objetos
    "car", "house", "tree", "dog", "cat", "table", "chair", "book", "phone", "computer",
    "building", "road", "street", "window", "door", "wall", "floor", "ceiling",
    // Lugares
    "beach", "ocean", "mountain", "forest", "city", "town", "room", "office", "home",
    "restaurant", "shop", "store", "park", "garden", "lake", "river",
    // Naturaleza
    "sun", "moon", "star", "cloud", "rain", "snow", "wind", "sky", "water", "fire",
    "flower", "grass", "leaf", "branch", "rock", "stone", "sand",
    // Animales
    "bird", "fish", "animal", "insect", "butterfly", "horse", "cow",
];

const EMOTION_ADJECTIVES: &[&str] = &[
    "happy", "sad", "angry", "joyful", "melancholic", "peaceful", "tense", "anxious",
    "lonely", "excited", "calm", "serene", "cheerful", "gloomy", "mysterious", "bright",
    "dark", "warm", "cold", "cozy", "uncomfortable", "energetic", "tired", "lively",
    "quiet", "loud", "gentle", "harsh", "soft", "intense", "relaxed", "stressed",
    "hopeful", "desperate", "confident", "nervous", "playful", "serious", "romantic",
    "dramatic", "subtle", "vibrant", "dull", "fresh", "stale", "clean", "messy",
    "elegant", "rough", "smooth", "chaotic", "organized", "wild", "tame", "fierce",
    "delicate", "strong", "weak", "powerful", "fragile", "bold", "timid", "brave",
];

const EMOTIONAL_ING: &[&str] = &[
    "striking", "captivating", "interesting", "boring", "exciting",
    "relaxing", "disturbing", "soothing", "overwhelming",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectionKind {
    Noun,
    VerbLike,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    #[error("\"{word}\" is a noun! Use only adjectives that describe emotions, mood, or atmosphere.")]
    Noun { word: String },
    #[error("\"{word}\" seems like a verb or noun. Use adjectives only - words that describe feelings!")]
    VerbLike { word: String },
}

impl RejectionReason {
    pub fn word(&self) -> &str {
        match self {
            RejectionReason::Noun { word } | RejectionReason::VerbLike { word } => word,
        }
    }

    pub fn kind(&self) -> RejectionKind {
        match self {
            RejectionReason::Noun { .. } => RejectionKind::Noun,
            RejectionReason::VerbLike { .. } => RejectionKind::VerbLike,
        }
    }
}

/// Comprueba que todas las palabras sean adjetivos de emoción.
/// Corta en la primera palabra rechazada.
pub fn validate_emotion_words<S: AsRef<str>>(words: &[S]) -> Result<(), RejectionReason> {
    for word in words {
        let word = word.as_ref();
        let lower = word.to_lowercase();

        if BANNED_NOUNS.contains(&lower.as_str()) {
            return Err(RejectionReason::Noun {
                word: word.to_string(),
            });
        }

        if lower.ends_with("ing")
            && !EMOTION_ADJECTIVES.contains(&lower.as_str())
            && !EMOTIONAL_ING.contains(&lower.as_str())
        {
            return Err(RejectionReason::VerbLike {
                word: word.to_string(),
            });
        }
    }
    Ok(())
}

/// Recorta las entradas, descarta las vacías y exige exactamente cinco
pub fn collect_words<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<String>, ValidationError> {
    let words: Vec<String> = inputs
        .iter()
        .map(|w| w.as_ref().trim())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect();

    if words.len() != WORD_COUNT {
        return Err(ValidationError::WrongWordCount {
            expected: WORD_COUNT,
            found: words.len(),
        });
    }
    Ok(words)
}

/// Regla completa de la pantalla de extracción para un modo
pub fn validate_submission<S: AsRef<str>>(
    mode: Mode,
    inputs: &[S],
) -> Result<Vec<String>, ValidationError> {
    let words = collect_words(inputs)?;
    if mode.requires_emotion_words() {
        validate_emotion_words(&words)?;
    }
    Ok(words)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObservationStyle {
    /// Imagen visible sin límite de tiempo
    Open,
    /// Aviso, cuenta atrás y la imagen desaparece
    Timed,
}

impl Mode {
    pub fn observation_style(self) -> ObservationStyle {
        match self {
            Mode::Blind => ObservationStyle::Timed,
            Mode::Core | Mode::Emotion | Mode::Bias => ObservationStyle::Open,
        }
    }

    pub fn requires_emotion_words(self) -> bool {
        matches!(self, Mode::Emotion)
    }

    /// El primer reto de estos modos pasa antes por una pantalla de reglas
    pub fn has_intro(self) -> bool {
        matches!(self, Mode::Emotion | Mode::Bias)
    }

    /// Pantalla a la que se llega cuando la recreación está lista
    pub fn post_generation_state(self) -> AppState {
        match self {
            Mode::Bias => AppState::BiasDetection,
            Mode::Core | Mode::Blind | Mode::Emotion => AppState::Comparison,
        }
    }

    /// La reflexión de aprendizaje no aplica a los retos de sesgo
    pub fn has_learning_screen(self) -> bool {
        !matches!(self, Mode::Bias)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Mode::Core => "Core Prompt Mirror",
            Mode::Blind => "Blind Prompt Mode",
            Mode::Emotion => "Emotion-Only Mode",
            Mode::Bias => "Bias Spotter Mode",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            Mode::Core => "📝 Basic",
            Mode::Blind => "⏱️ Memory",
            Mode::Emotion => "💭 Emotion",
            Mode::Bias => "🔍 Bias",
        }
    }

    pub fn observation_hint(self) -> &'static str {
        match self {
            Mode::Emotion => "Focus only on emotions, mood, and atmosphere - use adjectives only!",
            Mode::Blind => "Memorize what you can. The image disappears when the timer runs out.",
            Mode::Core | Mode::Bias => "Look for subject, action, environment, style, and mood.",
        }
    }

    pub fn rule_lines(self) -> &'static [&'static str] {
        match self {
            Mode::Emotion => &[
                "❌ No nouns (objects, people, places)",
                "✅ Adjectives only (emotions, feelings, moods)",
            ],
            Mode::Core | Mode::Blind | Mode::Bias => {
                &["✓ Exactly 5 words", "✓ One word per box", "✓ No sentences"]
            }
        }
    }

    pub fn input_example(self) -> Option<&'static str> {
        match self {
            Mode::Emotion => Some("Example: \"Lonely\", \"Tense\", \"Peaceful\", \"Melancholic\", \"Joyful\""),
            Mode::Core | Mode::Blind | Mode::Bias => None,
        }
    }

    pub fn reflection_prompts(self) -> [&'static str; 3] {
        match self {
            Mode::Blind => [
                "What did memory distort?",
                "What did you assume incorrectly?",
                "What details were preserved?",
            ],
            Mode::Emotion => [
                "How did AI visualize emotion?",
                "Did AI invent objects?",
                "Which emotion translated best?",
            ],
            Mode::Core | Mode::Bias => [
                "What detail was lost?",
                "What was preserved?",
                "Which word mattered most?",
            ],
        }
    }

    /// Texto de la pantalla de introducción (solo emoción y sesgo)
    pub fn intro_lines(self) -> &'static [&'static str] {
        match self {
            Mode::Emotion => &[
                "From now on you may only use emotion words.",
                "❌ No nouns: no people, objects, places, nature or animals.",
                "✅ Adjectives that describe feelings, mood or atmosphere.",
                "The AI has to rebuild the scene from feelings alone.",
            ],
            Mode::Bias => &[
                "AI image models learn from human data, and human data carries bias.",
                "Describe the scene, then compare what the AI produced.",
                "Decide which kind of bias, if any, shows up in the result.",
            ],
            Mode::Core | Mode::Blind => &[],
        }
    }
}

/// Nombre amable de la etapa, sin revelar el número de reto
pub fn stage_display_name(level_id: usize) -> &'static str {
    match level_id {
        0..=3 => "Getting Started",
        4..=6 => "Memory Challenge",
        7..=9 => "Emotional Journey",
        _ => "Critical Thinking",
    }
}

impl BiasType {
    pub fn label(self) -> &'static str {
        match self {
            BiasType::Gender => "Gender Bias",
            BiasType::Cultural => "Cultural Bias",
            BiasType::Stereotype => "Role Stereotype",
        }
    }

    /// El sesgo de género se acepta detectado como visual o como estereotipo
    pub fn accepts(self, answer: BiasAnswer) -> bool {
        match self {
            BiasType::Gender => matches!(answer, BiasAnswer::Visual | BiasAnswer::Stereotype),
            BiasType::Cultural => answer == BiasAnswer::Cultural,
            BiasType::Stereotype => answer == BiasAnswer::Stereotype,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BiasOutcome {
    pub answer: BiasAnswer,
    pub correct: bool,
    /// "Yes" / "Maybe"
    pub detected_label: &'static str,
    pub type_label: &'static str,
}

/// Evalúa la respuesta del jugador. Un fallo nunca bloquea el avance.
pub fn judge_bias(level: &LevelDefinition, answer: BiasAnswer) -> BiasOutcome {
    // Sin tipo de sesgo declarado solo cuenta "ninguno"
    let correct = match level.bias_type {
        Some(bias) => bias.accepts(answer),
        None => answer == BiasAnswer::None,
    };
    let type_label = match (correct, level.bias_type) {
        (true, Some(bias)) => bias.label(),
        (true, None) => "No Significant Bias",
        (false, _) => "Review the comparison again",
    };
    BiasOutcome {
        answer,
        correct,
        detected_label: if correct { "Yes" } else { "Maybe" },
        type_label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bias_level(bias_type: BiasType) -> LevelDefinition {
        LevelDefinition {
            id: 10,
            mode: Mode::Bias,
            title: "Doctor Visit".into(),
            icon: String::new(),
            prompt: "A doctor examining a patient".into(),
            difficulty: None,
            view_time: None,
            bias_type: Some(bias_type),
        }
    }

    #[test]
    fn emotion_words_accepted() {
        let words = ["lonely", "tense", "peaceful", "melancholic", "joyful"];
        assert_eq!(validate_emotion_words(&words), Ok(()));
    }

    #[test]
    fn noun_rejected_with_offending_word() {
        let words = ["lonely", "beach", "peaceful", "quiet", "joyful"];
        let err = validate_emotion_words(&words).unwrap_err();
        assert_eq!(err.word(), "beach");
        assert_eq!(err.kind(), RejectionKind::Noun);
        assert!(err.to_string().contains("beach"));
    }

    #[test]
    fn noun_check_ignores_case_and_stops_at_first() {
        let words = ["Calm", "OCEAN", "running", "sky", "warm"];
        let err = validate_emotion_words(&words).unwrap_err();
        assert_eq!(err, RejectionReason::Noun { word: "OCEAN".into() });
    }

    #[test]
    fn ing_words_need_allow_list() {
        let err = validate_emotion_words(&["calm", "running"]).unwrap_err();
        assert_eq!(err.kind(), RejectionKind::VerbLike);
        assert_eq!(err.word(), "running");

        assert!(validate_emotion_words(&["soothing", "Overwhelming", "calm"]).is_ok());
    }

    #[test]
    fn collect_words_trims_and_counts() {
        let words = collect_words(&[" calm ", "warm", "", "golden", "rustic", "quiet"]).unwrap();
        assert_eq!(words, vec!["calm", "warm", "golden", "rustic", "quiet"]);

        let err = collect_words(&["one", "  ", "two"]).unwrap_err();
        assert_eq!(err, ValidationError::WrongWordCount { expected: 5, found: 2 });
    }

    #[test]
    fn submission_only_filters_emotions_in_emotion_mode() {
        let words = ["lonely", "beach", "peaceful", "quiet", "joyful"];
        assert!(validate_submission(Mode::Core, &words).is_ok());
        assert!(matches!(
            validate_submission(Mode::Emotion, &words),
            Err(ValidationError::Rejected(RejectionReason::Noun { .. }))
        ));
    }

    #[test]
    fn modes_route_after_generation() {
        assert_eq!(Mode::Bias.post_generation_state(), AppState::BiasDetection);
        assert_eq!(Mode::Blind.post_generation_state(), AppState::Comparison);
        assert_eq!(Mode::Blind.observation_style(), ObservationStyle::Timed);
        assert_eq!(Mode::Emotion.observation_style(), ObservationStyle::Open);
        assert_eq!(Mode::Blind.reflection_prompts()[0], "What did memory distort?");
    }

    #[test]
    fn gender_bias_accepts_visual_or_stereotype() {
        let level = bias_level(BiasType::Gender);
        assert!(judge_bias(&level, BiasAnswer::Visual).correct);
        assert!(judge_bias(&level, BiasAnswer::Stereotype).correct);
        let miss = judge_bias(&level, BiasAnswer::Cultural);
        assert!(!miss.correct);
        assert_eq!(miss.detected_label, "Maybe");
    }

    #[test]
    fn other_bias_types_need_exact_answer() {
        let level = bias_level(BiasType::Cultural);
        let hit = judge_bias(&level, BiasAnswer::Cultural);
        assert!(hit.correct);
        assert_eq!(hit.type_label, "Cultural Bias");
        assert!(!judge_bias(&level, BiasAnswer::Visual).correct);
        assert!(!judge_bias(&bias_level(BiasType::Stereotype), BiasAnswer::None).correct);
    }

    #[test]
    fn stage_names_follow_level_groups() {
        assert_eq!(stage_display_name(2), "Getting Started");
        assert_eq!(stage_display_name(5), "Memory Challenge");
        assert_eq!(stage_display_name(9), "Emotional Journey");
        assert_eq!(stage_display_name(12), "Critical Thinking");
    }

    #[test]
    fn input_example_is_shown_as_is() {
        let example = Mode::Emotion.input_example().unwrap();
        assert_eq!(example.matches("Example:").count(), 1);
        assert!(example.starts_with("Example: "));
        assert!(Mode::Core.input_example().is_none());
    }
}
