use super::{FeedbackGateway, PromptEnhancer, send_with_retry};
use crate::error::GatewayError;
use crate::feedback::build_coaching_prompt;
use log::debug;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SERVICE: &str = "Gemini";
const CONTENT_PATH: &str = "candidates[0].content.parts[0].text";
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

const FEEDBACK_GENERATION: GenerationConfig = GenerationConfig {
    temperature: 0.7,
    max_output_tokens: 500,
};

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

/// Saca el texto del primer candidato del sobre JSON
pub fn extract_candidate_text(body: &str) -> Result<String, GatewayError> {
    let envelope: GenerateResponse =
        serde_json::from_str(body).map_err(|err| GatewayError::Envelope(err.to_string()))?;

    envelope
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .ok_or(GatewayError::MissingContent(CONTENT_PATH))
}

pub fn enhancement_prompt(basic_prompt: &str) -> String {
    format!(
        "Create a detailed, visual image description (max 50 words) for this concept: \"{basic_prompt}\". Focus on visual details, colors, composition, lighting, and style. Make it suitable for an AI image generator."
    )
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(
        endpoint: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| GatewayError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;
        Ok(Self {
            client,
            endpoint: endpoint.trim().to_string(),
            api_key,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn generate_text(
        &self,
        prompt: &str,
        generation_config: Option<GenerationConfig>,
    ) -> Result<String, GatewayError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GatewayError::NotConfigured { service: SERVICE })?;

        let payload = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config,
        };
        let body = serde_json::to_string(&payload)
            .map_err(|err| GatewayError::Envelope(err.to_string()))?;

        // La clave va en una cabecera, nunca en la URL que acaba en los logs
        let response = send_with_retry(
            || {
                self.client
                    .post(&self.endpoint)
                    .header(API_KEY_HEADER, api_key)
                    .header(reqwest::header::CONTENT_TYPE, "application/json")
                    .body(body.clone())
            },
            &self.endpoint,
        )?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let text = response.text().map_err(|source| GatewayError::Transport {
            endpoint: self.endpoint.clone(),
            source: source.without_url(),
        })?;
        debug!("{SERVICE} answered {} bytes", text.len());
        extract_candidate_text(&text)
    }
}

impl PromptEnhancer for GeminiClient {
    fn enhance(&self, short_prompt: &str) -> Result<String, GatewayError> {
        let enhanced = self.generate_text(&enhancement_prompt(short_prompt), None)?;
        let enhanced = enhanced.trim();
        if enhanced.is_empty() {
            return Err(GatewayError::MissingContent(CONTENT_PATH));
        }
        Ok(enhanced.to_string())
    }
}

impl FeedbackGateway for GeminiClient {
    fn get_feedback(
        &self,
        original_prompt: &str,
        user_words: &[String],
    ) -> Result<String, GatewayError> {
        let prompt = build_coaching_prompt(original_prompt, user_words);
        self.generate_text(&prompt, Some(FEEDBACK_GENERATION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_candidate_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"SUGGESTED_WORDS: a, b"}],"role":"model"}}]}"#;
        assert_eq!(extract_candidate_text(body).unwrap(), "SUGGESTED_WORDS: a, b");
    }

    #[test]
    fn missing_candidates_is_missing_content() {
        assert!(matches!(
            extract_candidate_text(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#),
            Err(GatewayError::MissingContent(_))
        ));
        assert!(matches!(
            extract_candidate_text(r#"{"candidates":[{"finishReason":"MAX_TOKENS"}]}"#),
            Err(GatewayError::MissingContent(_))
        ));
    }

    #[test]
    fn malformed_body_is_envelope_error() {
        assert!(matches!(
            extract_candidate_text("<html>502</html>"),
            Err(GatewayError::Envelope(_))
        ));
    }

    #[test]
    fn request_serializes_generation_config() {
        let payload = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: "hi" }],
            }],
            generation_config: Some(FEEDBACK_GENERATION),
        };
        let json: serde_json::Value = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 500);
    }

    #[test]
    fn transport_error_never_shows_the_key() {
        let client = GeminiClient::new(
            "http://127.0.0.1:1/v1",
            Some("SECRET_KEY_123".into()),
            Duration::from_secs(1),
        )
        .unwrap();
        let err = client
            .get_feedback("a quiet lake", &["calm".to_string()])
            .unwrap_err();
        assert!(matches!(err, GatewayError::Transport { .. }));
        assert!(!err.to_string().contains("SECRET_KEY_123"));
        assert!(!format!("{err:?}").contains("SECRET_KEY_123"));
    }

    #[test]
    fn without_key_reports_not_configured() {
        let client = GeminiClient::new("http://127.0.0.1:1", None, Duration::from_secs(1)).unwrap();
        assert!(!client.is_configured());
        assert!(matches!(
            client.enhance("calm warm"),
            Err(GatewayError::NotConfigured { .. })
        ));
    }
}
