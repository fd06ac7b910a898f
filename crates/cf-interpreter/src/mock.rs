//! Mock interpreter backend for testing without a model service.
//!
//! Serves one canned reply (or failure) for every call and records the
//! prompts and schemas it was given.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::adapter::InterpreterBackend;
use crate::error::{BackendError, BackendResult};

/// Deterministic stand-in for a model service.
pub struct MockBackend {
    reply: Result<String, String>,
    delay: Option<Duration>,
    prompts: Mutex<Vec<String>>,
    schemas: Mutex<Vec<Value>>,
}

impl MockBackend {
    /// Answer every call with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_reply(Ok(text.into()))
    }

    /// Fail every call with a transport error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_reply(Err(message.into()))
    }

    fn with_reply(reply: Result<String, String>) -> Self {
        Self {
            reply,
            delay: None,
            prompts: Mutex::new(Vec::new()),
            schemas: Mutex::new(Vec::new()),
        }
    }

    /// Sleep for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of calls received.
    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Prompts received, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Schemas received, in call order.
    pub fn schemas(&self) -> Vec<Value> {
        self.schemas.lock().unwrap().clone()
    }
}

#[async_trait]
impl InterpreterBackend for MockBackend {
    async fn generate(&self, prompt: &str, schema: &Value) -> BackendResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.schemas.lock().unwrap().push(schema.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.reply.clone().map_err(BackendError::Transport)
    }

    fn name(&self) -> &str {
        "mock"
    }
}
