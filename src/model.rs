use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Core,
    Blind,
    Emotion,
    Bias,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BiasType {
    Gender,
    Cultural,
    Stereotype,
}

/// Respuesta del jugador en la pantalla de detección de sesgo
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BiasAnswer {
    Visual,
    Cultural,
    Stereotype,
    None,
}

impl BiasAnswer {
    pub const ALL: [BiasAnswer; 4] = [
        BiasAnswer::Visual,
        BiasAnswer::Cultural,
        BiasAnswer::Stereotype,
        BiasAnswer::None,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BiasAnswer::Visual => "Visual bias",
            BiasAnswer::Cultural => "Cultural bias",
            BiasAnswer::Stereotype => "Role stereotype",
            BiasAnswer::None => "No bias",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum SkillTag {
    Observation,
    Memory,
    Emotion,
    Bias,
}

impl SkillTag {
    pub const ALL: [SkillTag; 4] = [
        SkillTag::Observation,
        SkillTag::Memory,
        SkillTag::Emotion,
        SkillTag::Bias,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillTag::Observation => "👁 Observation",
            SkillTag::Memory => "🧠 Memory",
            SkillTag::Emotion => "💭 Emotion",
            SkillTag::Bias => "🔍 Bias awareness",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LevelDefinition {
    pub id: usize,
    pub mode: Mode,
    pub title: String,
    pub icon: String,
    pub prompt: String,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub view_time: Option<u32>,
    #[serde(default)]
    pub bias_type: Option<BiasType>,
}

/// Imagen ya descodificada (RGBA8), lista para subirse como textura
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    Generated,
    Placeholder { caption: String },
}

/// Imagen opaca producida por el servicio de generación (o sustituta)
#[derive(Debug, Clone, PartialEq)]
pub struct ImageHandle {
    pub url: String,
    pub source: ImageSource,
    pub pixels: Option<Arc<DecodedImage>>,
}

const PLACEHOLDER_BASE: &str = "https://via.placeholder.com/800x600/4dd0e1/ffffff";

impl ImageHandle {
    pub fn generated(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            source: ImageSource::Generated,
            pixels: None,
        }
    }

    pub fn placeholder_for_level(level_id: usize) -> Self {
        let caption = format!("Challenge {level_id}");
        Self {
            url: format!("{PLACEHOLDER_BASE}?text=Challenge+{level_id}"),
            source: ImageSource::Placeholder { caption },
            pixels: None,
        }
    }

    pub fn placeholder_for_words(words: &[String]) -> Self {
        let caption = format!("Recreated: {}", words.join(" "));
        Self {
            url: format!("{PLACEHOLDER_BASE}?text=Recreated:+{}", words.join("+")),
            source: ImageSource::Placeholder { caption },
            pixels: None,
        }
    }

    pub fn with_pixels(mut self, pixels: DecodedImage) -> Self {
        self.pixels = Some(Arc::new(pixels));
        self
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.source, ImageSource::Placeholder { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObservationPhase {
    BlindWarning,
    Viewing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppState {
    LevelSelect,
    ModeIntro,
    Observation(ObservationPhase),
    GeneratingImage,
    Extraction,
    GeneratingRecreation,
    Comparison,
    BiasDetection,
    BiasFeedback,
    Learning,
    ProgressSummary,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::LevelSelect
    }
}
