//! Extracción tolerante de los tres bloques que pedimos al modelo de texto.
//! El modelo no siempre respeta el formato, así que cada bloque se busca por
//! separado y la ausencia de uno no invalida los demás.

pub const SUGGESTED_MARKER: &str = "SUGGESTED_WORDS:";
pub const INSIGHTS_MARKER: &str = "INSIGHTS:";
pub const TIPS_MARKER: &str = "TIPS:";

const MARKERS: [&str; 3] = [SUGGESTED_MARKER, INSIGHTS_MARKER, TIPS_MARKER];

pub const MAX_SUGGESTED_WORDS: usize = 5;
pub const MAX_TIPS: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFeedback {
    pub suggested_words: Vec<String>,
    pub insights: String,
    pub tips: Vec<String>,
}

impl ParsedFeedback {
    /// Basta con que un bloque tenga contenido
    pub fn is_usable(&self) -> bool {
        !self.suggested_words.is_empty() || !self.insights.is_empty() || !self.tips.is_empty()
    }
}

pub fn parse_feedback(text: &str) -> ParsedFeedback {
    ParsedFeedback {
        suggested_words: extract_suggested_words(text),
        insights: extract_insights(text),
        tips: extract_tips(text),
    }
}

/// Índice (en bytes) justo después de la primera aparición del marcador,
/// sin distinguir mayúsculas.
fn find_after_marker(text: &str, marker: &str) -> Option<usize> {
    // to_ascii_uppercase conserva las posiciones en bytes
    let upper = text.to_ascii_uppercase();
    upper.find(marker).map(|idx| idx + marker.len())
}

fn starts_with_marker(line: &str) -> bool {
    let line = line
        .trim_start_matches(|c: char| c.is_whitespace() || c == '*' || c == '#')
        .to_ascii_uppercase();
    MARKERS.iter().any(|m| line.starts_with(m))
}

fn clean_word(word: &str) -> &str {
    word.trim_matches(|c: char| c.is_whitespace() || matches!(c, '*' | '"' | '\'' | '`' | '.'))
}

pub fn extract_suggested_words(text: &str) -> Vec<String> {
    let Some(start) = find_after_marker(text, SUGGESTED_MARKER) else {
        return Vec::new();
    };

    // Las palabras pueden venir en la misma línea o en la siguiente, pero
    // nunca en la línea de otro marcador
    let mut lines = text[start..].lines();
    let same_line = lines.next().unwrap_or("");
    let line = if same_line.trim().is_empty() {
        lines
            .find(|l| !l.trim().is_empty())
            .filter(|l| !starts_with_marker(l))
            .unwrap_or("")
    } else {
        same_line
    };

    line.split(',')
        .map(clean_word)
        .filter(|w| !w.is_empty())
        .take(MAX_SUGGESTED_WORDS)
        .map(str::to_string)
        .collect()
}

pub fn extract_insights(text: &str) -> String {
    let Some(start) = find_after_marker(text, INSIGHTS_MARKER) else {
        return String::new();
    };

    let mut lines = Vec::new();
    for (i, line) in text[start..].lines().enumerate() {
        // La primera línea es el resto de la del marcador
        if i > 0 && starts_with_marker(line) {
            break;
        }
        lines.push(line);
    }

    lines
        .join("\n")
        .trim_matches(|c: char| c.is_whitespace() || c == '*')
        .to_string()
}

/// Quita el prefijo de viñeta (`-`, `•`, `*`) o de numeración (`2.`, `3)`).
/// Devuelve `None` si la línea no es una viñeta.
fn strip_bullet(line: &str) -> Option<&str> {
    let line = line.trim();

    for bullet in ['-', '•', '*'] {
        if let Some(rest) = line.strip_prefix(bullet) {
            // "**Negrita**" no es una viñeta
            if rest.starts_with(char::is_whitespace) {
                return Some(rest.trim());
            }
        }
    }

    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(rest) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
            return Some(rest.trim());
        }
    }
    None
}

pub fn extract_tips(text: &str) -> Vec<String> {
    let Some(start) = find_after_marker(text, TIPS_MARKER) else {
        return Vec::new();
    };

    text[start..]
        .lines()
        .filter_map(strip_bullet)
        .filter(|tip| !tip.is_empty())
        .take(MAX_TIPS)
        .map(str::to_string)
        .collect()
}
