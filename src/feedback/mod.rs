pub mod fallback;
pub mod parser;

use crate::error::GatewayError;
use crate::model::LevelDefinition;
use log::{debug, warn};

pub use fallback::{CannedFeedback, fallback_feedback};
pub use parser::{ParsedFeedback, parse_feedback};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackSource {
    /// Respuesta del servicio de texto, quizá completada con contenido local
    Live,
    /// Contenido local completo
    Fallback,
}

/// Feedback listo para mostrar en la pantalla de aprendizaje
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub suggested_words: Vec<String>,
    pub insights: String,
    pub tips: Vec<String>,
    pub source: FeedbackSource,
}

impl Feedback {
    fn from_canned(canned: CannedFeedback) -> Self {
        Self {
            suggested_words: canned.suggested_words,
            insights: canned.insights,
            tips: canned.tips,
            source: FeedbackSource::Fallback,
        }
    }
}

/// Texto que se envía al servicio de texto. El formato de salida pedido es
/// el que entiende `parse_feedback`.
pub fn build_coaching_prompt(original_prompt: &str, user_words: &[String]) -> String {
    format!(
        "You are an AI prompt engineering teacher analyzing a student's image prompt.

ORIGINAL SCENE: \"{original_prompt}\"
STUDENT'S 5 WORDS: \"{words}\"

Provide feedback in this EXACT format (don't add extra text or explanations):

SUGGESTED_WORDS: word1, word2, word3, word4, word5

INSIGHTS: Write 2-3 clear sentences explaining what the student did well and what they could improve. Focus on specific details about their word choices.

TIPS:
- First specific tip about word choice or description technique
- Second specific tip about capturing visual details
- Third specific tip about improving prompt effectiveness",
        words = user_words.join(", ")
    )
}

/// Convierte la respuesta (o el fallo) del servicio en feedback mostrable.
/// Nunca falla: errores y respuestas ilegibles acaban en el contenido local.
pub fn resolve_feedback(
    level: &LevelDefinition,
    user_words: &[String],
    response: Result<String, GatewayError>,
) -> Feedback {
    let text = match response {
        Ok(text) => text,
        Err(err) => {
            warn!("feedback for level {} unavailable, using fallback: {err}", level.id);
            return Feedback::from_canned(fallback_feedback(level, user_words));
        }
    };

    let parsed = parse_feedback(&text);
    if !parsed.is_usable() {
        warn!("could not parse feedback for level {}, using fallback", level.id);
        debug!("unparsed feedback text: {text}");
        return Feedback::from_canned(fallback_feedback(level, user_words));
    }

    // Ningún bloque se muestra vacío: lo que falte sale del contenido local
    let canned = fallback_feedback(level, user_words);
    let ParsedFeedback {
        suggested_words,
        insights,
        tips,
    } = parsed;

    Feedback {
        suggested_words: if suggested_words.is_empty() {
            canned.suggested_words
        } else {
            suggested_words
        },
        insights: if insights.is_empty() {
            canned.insights
        } else {
            insights
        },
        tips: if tips.is_empty() { canned.tips } else { tips },
        source: FeedbackSource::Live,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LevelCatalog;

    fn words() -> Vec<String> {
        ["red", "sky", "hill", "calm", "glow"]
            .iter()
            .map(|w| w.to_string())
            .collect()
    }

    #[test]
    fn gateway_error_falls_back() {
        let catalog = LevelCatalog::embedded().unwrap();
        let level = catalog.get(1).unwrap();
        let fb = resolve_feedback(
            level,
            &words(),
            Err(GatewayError::Status {
                endpoint: "gemini".into(),
                status: 503,
            }),
        );
        assert_eq!(fb.source, FeedbackSource::Fallback);
        assert!(fb.suggested_words.contains(&"mountain".to_string()));
    }

    #[test]
    fn unparseable_text_falls_back() {
        let catalog = LevelCatalog::embedded().unwrap();
        let level = catalog.get(1).unwrap();
        let fb = resolve_feedback(level, &words(), Ok("Nice work, keep going!".into()));
        assert_eq!(fb.source, FeedbackSource::Fallback);
        assert!(fb.suggested_words.iter().any(|w| w == "peaceful" || w == "mountain"));
    }

    #[test]
    fn partial_parse_keeps_live_fields_and_fills_gaps() {
        let catalog = LevelCatalog::embedded().unwrap();
        let level = catalog.get(8).unwrap();
        let fb = resolve_feedback(
            level,
            &words(),
            Ok("SUGGESTED_WORDS: uneasy, strained, heavy, cold, charged".into()),
        );
        assert_eq!(fb.source, FeedbackSource::Live);
        assert_eq!(fb.suggested_words[0], "uneasy");
        assert!(!fb.insights.is_empty());
        assert_eq!(fb.tips.len(), 3);
    }

    #[test]
    fn coaching_prompt_lists_words_and_markers() {
        let prompt = build_coaching_prompt("A doctor examining a patient", &words());
        assert!(prompt.contains("ORIGINAL SCENE: \"A doctor examining a patient\""));
        assert!(prompt.contains("\"red, sky, hill, calm, glow\""));
        for marker in [parser::SUGGESTED_MARKER, parser::INSIGHTS_MARKER, parser::TIPS_MARKER] {
            assert!(prompt.contains(marker));
        }
    }
}
