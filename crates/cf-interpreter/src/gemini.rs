//! Google Gemini backend (`generateContent` REST API).
//!
//! Requests `application/json` output constrained by `responseSchema`, so
//! a well-behaved model replies with a bare JSON object. The adapter still
//! sanitizes whatever comes back.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::adapter::InterpreterBackend;
use crate::error::{BackendError, BackendResult, truncate_body};

/// Configuration for the Gemini backend.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    /// API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model name.
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".into()
}
fn default_model() -> String {
    "gemini-2.5-flash".into()
}
fn default_api_key_env() -> String {
    "GEMINI_API_KEY".into()
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiBackend {
    client: reqwest::Client,
    config: GeminiConfig,
    api_key: String,
}

impl GeminiBackend {
    pub fn new(config: GeminiConfig, api_key: impl Into<String>) -> BackendResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BackendError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            config,
            api_key: api_key.into(),
        })
    }

    /// Build a backend reading the API key from `config.api_key_env`.
    pub fn from_env(config: GeminiConfig) -> BackendResult<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| BackendError::Config(format!("{} is not set", config.api_key_env)))?;
        Self::new(config, api_key)
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl InterpreterBackend for GeminiBackend {
    async fn generate(&self, prompt: &str, schema: &Value) -> BackendResult<String> {
        let body = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: to_gemini_schema(schema),
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))?;

        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(BackendError::EmptyResponse);
        }
        Ok(text)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

/// Gemini's schema dialect spells type names in upper case (`OBJECT`,
/// `STRING`, ...).
fn to_gemini_schema(schema: &Value) -> Value {
    match schema {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| {
                    let v = match (k.as_str(), v) {
                        ("type", Value::String(t)) => Value::String(t.to_uppercase()),
                        _ => to_gemini_schema(v),
                    };
                    (k.clone(), v)
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(to_gemini_schema).collect()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::response_schema;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gemini_response(text: &str) -> Value {
        json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": "STOP"
            }]
        })
    }

    fn backend_for(server: &MockServer, timeout_secs: u64) -> GeminiBackend {
        GeminiBackend::new(
            GeminiConfig {
                base_url: server.uri(),
                model: "gemini-2.5-flash".into(),
                api_key_env: "UNUSED".into(),
                timeout_secs,
            },
            "test-key",
        )
        .unwrap()
    }

    const ENDPOINT: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

    #[tokio::test]
    async fn sends_schema_and_returns_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "responseSchema": {"type": "OBJECT"}
                }
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(gemini_response(r#"{"type":"SUV"}"#)),
            )
            .mount(&server)
            .await;

        let backend = backend_for(&server, 2);
        let text = backend.generate("find me an SUV", &response_schema()).await.unwrap();
        assert_eq!(text, r#"{"type":"SUV"}"#);
    }

    #[tokio::test]
    async fn joins_multiple_parts() {
        let server = MockServer::start().await;
        let body = json!({
            "candidates": [{"content": {"parts": [{"text": "{\"make\":"}, {"text": "\"Ford\"}"}]}}]
        });
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let text = backend_for(&server, 2).generate("ford", &response_schema()).await.unwrap();
        assert_eq!(text, r#"{"make":"Ford"}"#);
    }

    #[tokio::test]
    async fn non_200_is_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
            .mount(&server)
            .await;

        let err = backend_for(&server, 2).generate("suv", &response_schema()).await.unwrap_err();
        match err {
            BackendError::Status { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "quota exceeded");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn no_candidates_is_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
            .mount(&server)
            .await;

        let err = backend_for(&server, 2).generate("suv", &response_schema()).await.unwrap_err();
        assert!(matches!(err, BackendError::EmptyResponse));
    }

    #[tokio::test]
    async fn garbage_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = backend_for(&server, 2).generate("suv", &response_schema()).await.unwrap_err();
        assert!(matches!(err, BackendError::Decode(_)));
    }

    #[tokio::test]
    async fn slow_server_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(gemini_response("{}"))
                    .set_delay(Duration::from_secs(10)),
            )
            .mount(&server)
            .await;

        // Client timeout is 1s, mock delays 10s
        let err = backend_for(&server, 1).generate("suv", &response_schema()).await.unwrap_err();
        assert!(matches!(err, BackendError::Transport(_)));
    }

    #[test]
    fn schema_types_upper_cased() {
        let converted = to_gemini_schema(&response_schema());
        assert_eq!(converted["type"], "OBJECT");
        assert_eq!(converted["properties"]["minPrice"]["type"], "NUMBER");
        assert_eq!(converted["properties"]["features"]["type"], "ARRAY");
        assert_eq!(converted["properties"]["features"]["items"]["type"], "STRING");
        // The property *named* "type" is kept as a key.
        assert_eq!(converted["properties"]["type"]["type"], "STRING");
    }

    #[test]
    fn missing_api_key_is_config_error() {
        let config = GeminiConfig {
            api_key_env: "CF_TEST_GEMINI_KEY_THAT_IS_NEVER_SET".into(),
            ..Default::default()
        };
        let err = GeminiBackend::from_env(config).err().unwrap();
        assert!(err.to_string().contains("CF_TEST_GEMINI_KEY_THAT_IS_NEVER_SET"));
    }

    #[test]
    fn config_from_toml() {
        let config: GeminiConfig = toml::from_str(r#"model = "gemini-2.0-flash""#).unwrap();
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.base_url, "https://generativelanguage.googleapis.com");
        assert_eq!(config.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.timeout_secs, 10);
    }
}
