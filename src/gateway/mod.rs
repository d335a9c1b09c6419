//! Servicios externos: generación de imágenes, mejora de prompts y feedback.
//!
//! Las llamadas son bloqueantes; el controlador las ejecuta fuera del hilo de
//! la interfaz y descarta los resultados que llegan tarde.

pub mod gemini;
pub mod pollinations;

use crate::config::GatewayConfig;
use crate::error::{AssetLoadError, GatewayError};
use crate::model::{DecodedImage, ImageHandle};
use log::{info, warn};
use reqwest::blocking::{RequestBuilder, Response};

pub use gemini::GeminiClient;
pub use pollinations::PollinationsImages;

pub trait ImageGateway: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<ImageHandle, GatewayError>;

    /// Descarga y descodifica la imagen; solo se muestra si esto funciona
    fn preload(&self, image: &ImageHandle) -> Result<DecodedImage, AssetLoadError>;
}

pub trait PromptEnhancer: Send + Sync {
    fn enhance(&self, short_prompt: &str) -> Result<String, GatewayError>;
}

pub trait FeedbackGateway: Send + Sync {
    fn get_feedback(&self, original_prompt: &str, user_words: &[String])
    -> Result<String, GatewayError>;
}

/// Conjunto de servicios que usa el juego
pub struct Gateways {
    pub images: Box<dyn ImageGateway>,
    pub enhancer: Option<Box<dyn PromptEnhancer>>,
    pub feedback: Box<dyn FeedbackGateway>,
}

impl Gateways {
    pub fn from_config(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let images = PollinationsImages::new(&config.image_endpoint, config.image_timeout)?;
        let gemini = GeminiClient::new(
            &config.gemini_endpoint,
            config.gemini_api_key.clone(),
            config.timeout,
        )?;

        if !gemini.is_configured() {
            info!("no Gemini API key configured, feedback will use local content");
        }

        let enhancer: Option<Box<dyn PromptEnhancer>> = if config.enhance_prompts {
            Some(Box::new(gemini.clone()))
        } else {
            None
        };

        Ok(Self {
            images: Box::new(images),
            enhancer,
            feedback: Box::new(gemini),
        })
    }
}

/// Envía la petición y la repite una vez si falló el transporte (conexión o
/// tiempo agotado). Los errores HTTP no se reintentan. La URL completa se
/// quita del error; el endpoint ya va aparte.
pub(crate) fn send_with_retry(
    build: impl Fn() -> RequestBuilder,
    endpoint: &str,
) -> Result<Response, GatewayError> {
    let transport = |source: reqwest::Error| GatewayError::Transport {
        endpoint: endpoint.to_string(),
        source: source.without_url(),
    };
    match build().send() {
        Ok(response) => Ok(response),
        Err(first) if first.is_timeout() || first.is_connect() => {
            warn!(
                "request to {endpoint} failed ({}), retrying once",
                first.without_url()
            );
            build().send().map_err(transport)
        }
        Err(source) => Err(transport(source)),
    }
}
