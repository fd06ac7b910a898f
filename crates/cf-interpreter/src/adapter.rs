//! Intent adapter: validates input, calls a backend under a timeout, and
//! sanitizes the reply into [`StructuredCriteria`].

use std::time::Duration;

use async_trait::async_trait;
use cf_catalog::StructuredCriteria;
use serde_json::Value;
use tokio::time::timeout;

use crate::IntentInterpreter;
use crate::error::{BackendError, BackendResult, InterpretError, InterpretResult};
use crate::prompt::{build_prompt, extract_json, response_schema};
use crate::sanitize::sanitize;

/// Default upper bound on a single interpretation round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// A service that turns a prompt plus output schema into raw reply text.
#[async_trait]
pub trait InterpreterBackend: Send + Sync {
    /// Send `prompt`, asking for a reply constrained to `schema`.
    async fn generate(&self, prompt: &str, schema: &Value) -> BackendResult<String>;

    /// Backend name (for logging).
    fn name(&self) -> &str;
}

#[async_trait]
impl<T: InterpreterBackend + ?Sized> InterpreterBackend for Box<T> {
    async fn generate(&self, prompt: &str, schema: &Value) -> BackendResult<String> {
        (**self).generate(prompt, schema).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// [`IntentInterpreter`] over any [`InterpreterBackend`].
pub struct IntentAdapter<B> {
    backend: B,
    schema: Value,
    timeout: Duration,
}

impl<B: InterpreterBackend> IntentAdapter<B> {
    pub fn new(backend: B) -> Self {
        Self::with_timeout(backend, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(backend: B, timeout: Duration) -> Self {
        Self {
            backend,
            schema: response_schema(),
            timeout,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    async fn call_backend(&self, prompt: &str) -> BackendResult<Value> {
        let reply = timeout(self.timeout, self.backend.generate(prompt, &self.schema))
            .await
            .map_err(|_| BackendError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            })??;

        let body = extract_json(&reply);
        if body.is_empty() {
            return Err(BackendError::EmptyResponse);
        }
        serde_json::from_str(body).map_err(|e| BackendError::Decode(e.to_string()))
    }
}

#[async_trait]
impl<B: InterpreterBackend> IntentInterpreter for IntentAdapter<B> {
    async fn interpret(&self, text: &str) -> InterpretResult<StructuredCriteria> {
        if text.trim().is_empty() {
            return Err(InterpretError::InvalidInput);
        }

        let prompt = build_prompt(text);
        let payload = match self.call_backend(&prompt).await {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(
                    backend = self.backend.name(),
                    error = %e,
                    "intent interpretation failed"
                );
                return Err(e.into());
            }
        };

        let sanitized = sanitize(&payload);
        if !sanitized.dropped.is_empty() {
            tracing::warn!(
                backend = self.backend.name(),
                dropped = ?sanitized.dropped,
                "discarded malformed interpreter fields"
            );
        }
        if !payload.is_object() {
            tracing::warn!(backend = self.backend.name(), "interpreter reply is not a JSON object");
        }

        let criteria = StructuredCriteria::from(sanitized.criteria);
        tracing::info!(backend = self.backend.name(), criteria = ?criteria, "intent interpreted");
        Ok(criteria)
    }

    fn name(&self) -> &str {
        self.backend.name()
    }
}
