//! Gemini `generateContent` client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::config::{FALLBACK_API_KEY_ENV, SamplingConfig};
use crate::domain::{AppConfig, AppError, Selections, assemble_meta_prompt, prompt};
use crate::ports::CompletionClient;

const X_GOOG_API_KEY: &str = "x-goog-api-key";
const DEFAULT_STATUS_MESSAGE: &str = "Text generation request failed";
const EMPTY_REFINE_FALLBACK: &str = "No se pudo generar el prompt.";
const EMPTY_EXECUTE_FALLBACK: &str = "No se generó respuesta.";

/// HTTP transport for the Gemini API.
///
/// Each call performs exactly one request. The API key is captured when the
/// client is built; a missing key fails every call before any network I/O.
#[derive(Clone)]
pub struct HttpGeminiClient {
    api_key: Option<String>,
    api_key_env: String,
    base_url: Url,
    refine: SamplingConfig,
    execute: SamplingConfig,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("refine_model", &self.refine.model)
            .field("execute_model", &self.execute.model)
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a client with an explicit (possibly absent) API key.
    pub fn new(api_key: Option<String>, config: &AppConfig) -> Result<Self, AppError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.api.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| AppError::CompletionApi {
            message: format!("Failed to create HTTP client: {}", e),
            status: None,
        })?;

        Ok(Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            api_key_env: config.api.api_key_env.clone(),
            base_url: config.api.normalized_base_url(),
            refine: config.refine.clone(),
            execute: config.execute.clone(),
            client,
        })
    }

    /// Create a client reading the API key from the environment.
    ///
    /// The configured variable is consulted first, then `API_KEY`.
    pub fn from_env(config: &AppConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(&config.api.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var(FALLBACK_API_KEY_ENV).ok());
        if api_key.is_none() {
            tracing::debug!(var = %config.api.api_key_env, "no API key in environment");
        }
        Self::new(api_key, config)
    }

    fn api_key(&self) -> Result<&str, AppError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| AppError::MissingApiKey { var: self.api_key_env.clone() })
    }

    fn endpoint(&self, model: &str) -> Result<Url, AppError> {
        self.base_url.join(&format!("models/{}:generateContent", model)).map_err(|e| {
            AppError::config_error(format!("Invalid endpoint for model '{}': {}", model, e))
        })
    }

    fn generate(
        &self,
        sampling: &SamplingConfig,
        system_instruction: Option<&str>,
        text: &str,
    ) -> Result<String, AppError> {
        let api_key = self.api_key()?;
        let url = self.endpoint(&sampling.model)?;
        let request = GenerateContentRequest {
            contents: vec![Content { role: Some("user"), parts: vec![Part { text }] }],
            system_instruction: system_instruction
                .map(|text| Content { role: None, parts: vec![Part { text }] }),
            generation_config: GenerationConfig { temperature: sampling.temperature },
        };

        tracing::info!(model = %sampling.model, temperature = sampling.temperature, "sending generateContent request");

        let response = self
            .client
            .post(url)
            .header(X_GOOG_API_KEY, api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .map_err(|e| AppError::CompletionApi {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            let parsed: GenerateContentResponse =
                serde_json::from_str(&body_text).map_err(|e| AppError::CompletionApi {
                    message: format!("Failed to parse response: {}", e),
                    status: Some(status.as_u16()),
                })?;
            tracing::debug!(model = %sampling.model, "generateContent succeeded");
            return Ok(parsed.text());
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });
        tracing::warn!(status = status.as_u16(), model = %sampling.model, "generateContent failed");

        Err(AppError::CompletionApi { message, status: Some(status.as_u16()) })
    }
}

impl CompletionClient for HttpGeminiClient {
    fn refine(&self, selections: &Selections) -> Result<String, AppError> {
        self.api_key()?;
        let meta = assemble_meta_prompt(selections)?;
        let text = self.generate(&self.refine, Some(&meta.system_instruction), &meta.content)?;
        Ok(if text.is_empty() { EMPTY_REFINE_FALLBACK.to_string() } else { text })
    }

    fn execute(&self, prompt_text: &str) -> Result<String, AppError> {
        let text = self.generate(&self.execute, None, prompt::execution_prompt(prompt_text))?;
        Ok(if text.is_empty() { EMPTY_EXECUTE_FALLBACK.to_string() } else { text })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
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
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content.parts.iter().filter_map(|part| part.text.as_deref()).collect::<String>()
            })
            .unwrap_or_default()
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn config_for(server: &mockito::Server) -> AppConfig {
        let mut config = AppConfig::default();
        config.api.base_url = Url::parse(&server.url()).unwrap();
        config.api.timeout_secs = Some(5);
        config
    }

    fn selections() -> Selections {
        Selections {
            task_type: "Artículo".into(),
            role: "Experto".into(),
            audience: "Colegas".into(),
            ..Default::default()
        }
    }

    fn text_body(text: &str) -> String {
        json!({"candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]})
            .to_string()
    }

    #[test]
    fn refine_sends_meta_prompt_with_creative_temperature() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .match_header("x-goog-api-key", "fake-key")
            .match_body(Matcher::AllOf(vec![
                Matcher::PartialJson(json!({"generationConfig": {"temperature": 0.7}})),
                Matcher::Regex("NO ejecutes la tarea".into()),
                Matcher::Regex("Tarea a realizar:\\*\\* Artículo".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(text_body("Actúa como experto..."))
            .expect(1)
            .create();

        let client = HttpGeminiClient::new(Some("fake-key".into()), &config_for(&server)).unwrap();
        let prompt = client.refine(&selections()).unwrap();

        assert_eq!(prompt, "Actúa como experto...");
        mock.assert();
    }

    #[test]
    fn execute_sends_prompt_verbatim_without_system_instruction() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/models/gemini-3-pro-preview:generateContent")
            .match_body(Matcher::Json(json!({
                "contents": [{"role": "user", "parts": [{"text": "Escribe un artículo"}]}],
                "generationConfig": {"temperature": 0.3}
            })))
            .with_status(200)
            .with_body(text_body("# Resultado"))
            .expect(1)
            .create();

        let client = HttpGeminiClient::new(Some("fake-key".into()), &config_for(&server)).unwrap();
        assert_eq!(client.execute("Escribe un artículo").unwrap(), "# Resultado");
        mock.assert();
    }

    #[test]
    fn concatenates_text_parts() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", Matcher::Any)
            .with_status(200)
            .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"Hola "},{"text":"mundo"}]}}]}"#)
            .create();

        let client = HttpGeminiClient::new(Some("k".into()), &config_for(&server)).unwrap();
        assert_eq!(client.execute("x").unwrap(), "Hola mundo");
    }

    #[test]
    fn empty_responses_use_fallback_text() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("POST", Matcher::Any).with_status(200).with_body("{}").create();

        let client = HttpGeminiClient::new(Some("k".into()), &config_for(&server)).unwrap();
        assert_eq!(client.refine(&selections()).unwrap(), EMPTY_REFINE_FALLBACK);
        assert_eq!(client.execute("x").unwrap(), EMPTY_EXECUTE_FALLBACK);
    }

    #[test]
    fn missing_key_fails_before_any_request() {
        let mut server = mockito::Server::new();
        let mock = server.mock("POST", Matcher::Any).expect(0).create();

        let client = HttpGeminiClient::new(None, &config_for(&server)).unwrap();
        assert!(matches!(client.refine(&selections()), Err(AppError::MissingApiKey { .. })));
        assert!(matches!(client.execute("x"), Err(AppError::MissingApiKey { .. })));
        mock.assert();
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let client = HttpGeminiClient::new(Some("  ".into()), &AppConfig::default()).unwrap();
        assert!(matches!(client.execute("x"), Err(AppError::MissingApiKey { .. })));
    }

    #[test]
    fn parses_nested_error_message() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", Matcher::Any)
            .with_status(403)
            .with_body(r#"{"error":{"code":403,"message":"API key not valid","status":"PERMISSION_DENIED"}}"#)
            .expect(1)
            .create();

        let client = HttpGeminiClient::new(Some("bad".into()), &config_for(&server)).unwrap();
        match client.execute("x").unwrap_err() {
            AppError::CompletionApi { message, status } => {
                assert_eq!(status, Some(403));
                assert_eq!(message, "API key not valid");
            }
            other => panic!("unexpected error variant: {}", other),
        }
    }

    #[test]
    fn server_error_without_body_is_single_attempt() {
        let mut server = mockito::Server::new();
        let mock = server.mock("POST", Matcher::Any).with_status(500).expect(1).create();

        let client = HttpGeminiClient::new(Some("k".into()), &config_for(&server)).unwrap();
        let err = client.execute("x").unwrap_err();
        assert_eq!(err.to_string(), "Server error");
        mock.assert();
    }

    #[test]
    fn rate_limit_message() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("POST", Matcher::Any).with_status(429).create();

        let client = HttpGeminiClient::new(Some("k".into()), &config_for(&server)).unwrap();
        assert_eq!(client.execute("x").unwrap_err().to_string(), "Rate limited");
    }

    #[test]
    fn debug_redacts_api_key() {
        let client = HttpGeminiClient::new(Some("secret".into()), &AppConfig::default()).unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let mut config = AppConfig::default();
        config.api.base_url = Url::parse("https://example.test/v1beta").unwrap();
        let client = HttpGeminiClient::new(Some("k".into()), &config).unwrap();
        assert_eq!(
            client.endpoint("gemini-2.5-flash").unwrap().as_str(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
