//! Finder configuration, loadable from TOML.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use cf_catalog::StructuredCriteria;
use cf_interpreter::{
    BackendError, GeminiBackend, GeminiConfig, IntentAdapter, IntentInterpreter, InterpretError,
    InterpretResult, InterpreterBackend, OllamaBackend, OllamaConfig,
};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FinderConfig {
    /// JSON catalog file. None uses the built-in sample inventory.
    #[serde(default)]
    pub catalog_path: Option<String>,
    /// Intent interpreter settings.
    #[serde(default)]
    pub interpreter: InterpreterConfig,
}

/// Which model service backs the intent interpreter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    #[default]
    Gemini,
    Ollama,
}

/// Intent interpreter settings.
#[derive(Debug, Clone, Deserialize)]
pub struct InterpreterConfig {
    #[serde(default)]
    pub backend: BackendKind,
    /// Upper bound on one interpretation round trip, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub ollama: OllamaConfig,
}

fn default_timeout_secs() -> u64 {
    15
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            timeout_secs: default_timeout_secs(),
            gemini: GeminiConfig::default(),
            ollama: OllamaConfig::default(),
        }
    }
}

impl FinderConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

impl InterpreterConfig {
    /// Build the configured interpreter.
    ///
    /// A backend that cannot be set up (e.g. missing API key) yields an
    /// interpreter that fails every call, so structured search keeps working.
    pub fn build(&self) -> Arc<dyn IntentInterpreter> {
        let backend: Result<Box<dyn InterpreterBackend>, BackendError> = match self.backend {
            BackendKind::Gemini => GeminiBackend::from_env(self.gemini.clone())
                .map(|b| Box::new(b) as Box<dyn InterpreterBackend>),
            BackendKind::Ollama => OllamaBackend::new(self.ollama.clone())
                .map(|b| Box::new(b) as Box<dyn InterpreterBackend>),
        };

        match backend {
            Ok(backend) => {
                tracing::info!(
                    backend = backend.name(),
                    timeout_secs = self.timeout_secs,
                    "intent interpreter ready"
                );
                Arc::new(IntentAdapter::with_timeout(
                    backend,
                    Duration::from_secs(self.timeout_secs),
                ))
            }
            Err(e) => {
                tracing::warn!(error = %e, "intent interpreter unavailable");
                Arc::new(UnavailableInterpreter {
                    reason: e.to_string(),
                })
            }
        }
    }
}

/// Stand-in used when no backend could be configured.
pub struct UnavailableInterpreter {
    reason: String,
}

#[async_trait]
impl IntentInterpreter for UnavailableInterpreter {
    async fn interpret(&self, text: &str) -> InterpretResult<StructuredCriteria> {
        if text.trim().is_empty() {
            return Err(InterpretError::InvalidInput);
        }
        Err(BackendError::Config(self.reason.clone()).into())
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: FinderConfig = toml::from_str("").unwrap();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.interpreter.backend, BackendKind::Gemini);
        assert_eq!(config.interpreter.timeout_secs, 15);
        assert_eq!(config.interpreter.gemini.model, "gemini-2.5-flash");
        assert_eq!(config.interpreter.ollama.host, "http://localhost:11434");
    }

    #[test]
    fn full_config() {
        let toml = r#"
catalog_path = "/etc/carfinder/catalog.json"

[interpreter]
backend = "ollama"
timeout_secs = 5

[interpreter.gemini]
api_key_env = "MY_KEY"

[interpreter.ollama]
host = "http://10.0.0.5:11434"
model = "qwen2.5:3b"
"#;
        let config: FinderConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.catalog_path.as_deref(), Some("/etc/carfinder/catalog.json"));
        assert_eq!(config.interpreter.backend, BackendKind::Ollama);
        assert_eq!(config.interpreter.timeout_secs, 5);
        assert_eq!(config.interpreter.gemini.api_key_env, "MY_KEY");
        assert_eq!(config.interpreter.ollama.model, "qwen2.5:3b");
        assert_eq!(config.interpreter.ollama.timeout_secs, 10);
    }

    #[test]
    fn unknown_backend_rejected() {
        let result: Result<FinderConfig, _> = toml::from_str("[interpreter]\nbackend = \"openai\"");
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn missing_key_builds_unavailable_interpreter() {
        let config = InterpreterConfig {
            gemini: GeminiConfig {
                api_key_env: "CF_FINDER_TEST_KEY_NEVER_SET".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let interpreter = config.build();
        assert_eq!(interpreter.name(), "unavailable");

        let err = interpreter.interpret("an suv").await.unwrap_err();
        assert!(matches!(
            err,
            InterpretError::InterpretationFailed(BackendError::Config(_))
        ));
        assert!(matches!(
            interpreter.interpret(" ").await.unwrap_err(),
            InterpretError::InvalidInput
        ));
    }

    #[tokio::test]
    async fn ollama_backend_builds_adapter() {
        let config = InterpreterConfig {
            backend: BackendKind::Ollama,
            ..Default::default()
        };
        assert_eq!(config.build().name(), "ollama");
    }
}
