//! Configuración de los servicios externos.
//!
//! Prioridad: variable de entorno en ejecución, luego la misma variable fijada
//! al compilar (`option_env!`), luego el valor por defecto.

use log::warn;
use std::time::Duration;

pub const DEFAULT_GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";
pub const DEFAULT_IMAGE_ENDPOINT: &str = "https://image.pollinations.ai";
const DEFAULT_TIMEOUT_SECS: u64 = 12;
const DEFAULT_IMAGE_TIMEOUT_SECS: u64 = 20;

const ENV_GEMINI_API_KEY: &str = "PROMPT_MIRROR_GEMINI_API_KEY";
const ENV_GEMINI_ENDPOINT: &str = "PROMPT_MIRROR_GEMINI_ENDPOINT";
const ENV_IMAGE_ENDPOINT: &str = "PROMPT_MIRROR_IMAGE_ENDPOINT";
const ENV_TIMEOUT_SECS: &str = "PROMPT_MIRROR_TIMEOUT_SECS";
const ENV_IMAGE_TIMEOUT_SECS: &str = "PROMPT_MIRROR_IMAGE_TIMEOUT_SECS";
const ENV_ENHANCE_PROMPTS: &str = "PROMPT_MIRROR_ENHANCE_PROMPTS";

#[derive(Clone, Debug)]
pub struct GatewayConfig {
    pub gemini_endpoint: String,
    pub gemini_api_key: Option<String>,
    pub image_endpoint: String,
    /// Límite para las llamadas de texto
    pub timeout: Duration,
    /// Límite para generar y descargar una imagen
    pub image_timeout: Duration,
    pub enhance_prompts: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            gemini_endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            gemini_api_key: None,
            image_endpoint: DEFAULT_IMAGE_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            image_timeout: Duration::from_secs(DEFAULT_IMAGE_TIMEOUT_SECS),
            enhance_prompts: true,
        }
    }
}

fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn build_time(key: &str) -> Option<&'static str> {
    match key {
        ENV_GEMINI_API_KEY => option_env!("PROMPT_MIRROR_GEMINI_API_KEY"),
        ENV_GEMINI_ENDPOINT => option_env!("PROMPT_MIRROR_GEMINI_ENDPOINT"),
        ENV_IMAGE_ENDPOINT => option_env!("PROMPT_MIRROR_IMAGE_ENDPOINT"),
        _ => None,
    }
}

fn parse_secs(key: &str, raw: Option<String>, default: u64) -> Duration {
    let secs = match raw {
        None => default,
        Some(value) => match value.parse::<u64>() {
            Ok(0) | Err(_) => {
                warn!("ignoring invalid {key}={value}, using {default}s");
                default
            }
            Ok(secs) => secs,
        },
    };
    Duration::from_secs(secs)
}

fn parse_flag(raw: Option<String>, default: bool) -> bool {
    match raw.as_deref().map(str::to_ascii_lowercase).as_deref() {
        Some("0" | "false" | "no" | "off") => false,
        Some("1" | "true" | "yes" | "on") => true,
        _ => default,
    }
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables inyectable
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .as_deref()
                .and_then(normalize)
                .or_else(|| build_time(key).and_then(normalize))
        };

        let defaults = Self::default();
        Self {
            gemini_endpoint: get(ENV_GEMINI_ENDPOINT).unwrap_or(defaults.gemini_endpoint),
            gemini_api_key: get(ENV_GEMINI_API_KEY),
            image_endpoint: get(ENV_IMAGE_ENDPOINT).unwrap_or(defaults.image_endpoint),
            timeout: parse_secs(ENV_TIMEOUT_SECS, get(ENV_TIMEOUT_SECS), DEFAULT_TIMEOUT_SECS),
            image_timeout: parse_secs(
                ENV_IMAGE_TIMEOUT_SECS,
                get(ENV_IMAGE_TIMEOUT_SECS),
                DEFAULT_IMAGE_TIMEOUT_SECS,
            ),
            enhance_prompts: parse_flag(get(ENV_ENHANCE_PROMPTS), defaults.enhance_prompts),
        }
    }
}
