//! Feedback local y determinista para cuando el servicio de texto falla o
//! devuelve algo que no se puede interpretar. Cubre los doce retos.

use crate::model::{LevelDefinition, Mode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CannedFeedback {
    pub suggested_words: Vec<String>,
    pub insights: String,
    pub tips: Vec<String>,
}

fn words(list: [&str; 5]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

fn tips(list: [&str; 3]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

fn used_any(user_words: &[String], keys: &[&str]) -> bool {
    user_words
        .iter()
        .any(|w| keys.iter().any(|k| w.trim().eq_ignore_ascii_case(k)))
}

pub fn fallback_feedback(level: &LevelDefinition, user_words: &[String]) -> CannedFeedback {
    let quoted = user_words.join(", ");
    let prompt = level.prompt.to_lowercase();

    match (level.id, level.mode) {
        (1, _) => CannedFeedback {
            suggested_words: words(["peaceful", "mountain", "sunset", "golden", "majestic"]),
            insights: format!(
                "For this mountain sunset scene, capturing the time of day (sunset) and mood (peaceful) are crucial. Your words \"{quoted}\" {}",
                if used_any(user_words, &["sunset", "peaceful"]) {
                    "captured key elements!"
                } else {
                    "could be more specific about the lighting and atmosphere."
                }
            ),
            tips: tips([
                "Time of Day: Words like \"sunset\", \"dusk\", or \"golden hour\" immediately set the lighting and mood",
                "Natural Elements: Mention \"mountain\", \"landscape\", or \"peaks\" to establish the setting clearly",
                "Mood Words: \"Peaceful\", \"serene\", or \"tranquil\" help convey the atmosphere of the scene",
            ]),
        },
        (2, _) => CannedFeedback {
            suggested_words: words(["busy", "urban", "crowded", "street", "bustling"]),
            insights: format!(
                "This urban scene requires words that convey activity and density. Your words \"{quoted}\" {}",
                if used_any(user_words, &["busy", "city"]) {
                    "captured the urban setting!"
                } else {
                    "could emphasize the activity and city environment more."
                }
            ),
            tips: tips([
                "Activity Level: Use \"busy\", \"crowded\", or \"bustling\" to show the energy of the scene",
                "Urban Context: Words like \"city\", \"street\", or \"urban\" establish the metropolitan setting",
                "Elements Present: Mentioning \"people\", \"cars\", or \"traffic\" adds important context about what's in the scene",
            ]),
        },
        (3, _) => CannedFeedback {
            suggested_words: words(["underwater", "colorful", "coral", "tropical", "vibrant"]),
            insights: format!(
                "This underwater scene needs words about location and colors. Your words \"{quoted}\" {}",
                if used_any(user_words, &["underwater", "coral"]) {
                    "captured the underwater theme!"
                } else {
                    "could be more specific about the aquatic setting and marine life."
                }
            ),
            tips: tips([
                "Environment: \"Underwater\", \"ocean\", or \"reef\" immediately tells AI the setting is aquatic",
                "Color Descriptions: \"Colorful\", \"vibrant\", or \"turquoise\" capture the vivid underwater palette",
                "Marine Life: Words like \"coral\", \"fish\", or \"tropical\" specify what creatures and plants are present",
            ]),
        },
        (_, Mode::Blind) if prompt.contains("coffee") => CannedFeedback {
            suggested_words: words(["cozy", "warm", "coffee", "interior", "ambient"]),
            insights: "In blind mode, you had to remember this cozy interior from memory. The key is capturing the atmosphere and defining features quickly.".into(),
            tips: tips([
                "First Impressions: Note the overall mood first - \"cozy\", \"warm\", or \"intimate\" for interior spaces",
                "Defining Features: What made it memorable? \"Coffee shop\", \"shelves\", \"lighting\" are key identifiers",
                "Atmosphere: Temperature words like \"warm\" or lighting words like \"dim\" or \"golden\" help recreate the feeling",
            ]),
        },
        (_, Mode::Blind) if prompt.contains("library") => CannedFeedback {
            suggested_words: words(["vintage", "library", "books", "tall", "shelves"]),
            insights: "From memory, focus on the most distinctive elements - the tall bookshelves and vintage character of this library.".into(),
            tips: tips([
                "Scale Words: \"Tall\", \"grand\", or \"massive\" convey the impressive size of elements",
                "Age/Style: \"Vintage\", \"classic\", or \"old\" capture the historical character",
                "Key Objects: \"Books\", \"shelves\", \"library\" are essential nouns that define the space",
            ]),
        },
        (_, Mode::Blind) => CannedFeedback {
            suggested_words: words(["modern", "gallery", "art", "spacious", "white"]),
            insights: "Memory challenges require focusing on 2-3 most striking features. What stood out most to you?".into(),
            tips: tips([
                "Architectural Style: \"Modern\", \"contemporary\", or \"minimalist\" set the design tone",
                "Space Quality: \"Spacious\", \"open\", or \"airy\" describe the feel of the room",
                "Distinctive Elements: What was most memorable? Colors, objects, or unique features",
            ]),
        },
        (_, Mode::Emotion) if prompt.contains("lonely") => CannedFeedback {
            suggested_words: words(["lonely", "melancholic", "isolated", "quiet", "somber"]),
            insights: "In emotion-only mode, you must describe feelings, not objects. Focus on isolation, solitude, and the emotional weight of the scene.".into(),
            tips: tips([
                "Primary Emotion: \"Lonely\", \"isolated\", or \"solitary\" capture the core feeling",
                "Mood Modifiers: \"Melancholic\", \"pensive\", or \"reflective\" add emotional depth",
                "Atmospheric Feelings: \"Quiet\", \"still\", or \"empty\" convey the emotional atmosphere without naming objects",
            ]),
        },
        (_, Mode::Emotion) if prompt.contains("tense") => CannedFeedback {
            suggested_words: words(["tense", "anxious", "pressured", "stressful", "intense"]),
            insights: "Capture the stress and pressure of the moment using only emotional descriptors. Think about how the scene makes you feel.".into(),
            tips: tips([
                "Core Tension: \"Tense\", \"stressful\", or \"pressured\" establish the uncomfortable feeling",
                "Intensity Level: \"Anxious\", \"nervous\", or \"uneasy\" show the emotional charge",
                "Energy Quality: \"Intense\", \"charged\", or \"tight\" describe the emotional atmosphere",
            ]),
        },
        (_, Mode::Emotion) => CannedFeedback {
            suggested_words: words(["joyful", "celebratory", "energetic", "euphoric", "vibrant"]),
            insights: "Express pure joy and celebration through emotion words only. Focus on the positive energy and excitement.".into(),
            tips: tips([
                "Positive Emotions: \"Joyful\", \"happy\", or \"delighted\" capture the uplifting feeling",
                "Celebration Energy: \"Celebratory\", \"festive\", or \"jubilant\" convey the party atmosphere",
                "Vitality: \"Energetic\", \"lively\", or \"vibrant\" show the dynamic emotional quality",
            ]),
        },
        _ => CannedFeedback {
            suggested_words: words(["detailed", "atmospheric", "vivid", "cinematic", "striking"]),
            insights: format!(
                "Your words \"{quoted}\" captured some elements. To improve, be more specific about colors, lighting, and composition."
            ),
            tips: tips([
                "Be Specific: Replace general words like \"nice\" with vivid descriptors like \"golden\", \"dramatic\", or \"ethereal\"",
                "Include Atmosphere: Mention lighting (sunset, dim, bright), mood (peaceful, tense, joyful), or time of day",
                "Visual Details Matter: Focus on what you can see - colors, textures, composition, and scale help AI understand better",
            ]),
        },
    }
}
