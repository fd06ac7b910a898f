//! Shared test harness for E2E integration tests.
//!
//! Wires a `SearchController` to a real HTTP backend pointed at a wiremock
//! server, so tests exercise prompt building, the wire format, decoding,
//! sanitization, filtering and mode switching together.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cf_catalog::VehicleRecord;
use cf_catalog::sample::sample_catalog;
use cf_finder::SearchController;
use cf_interpreter::{GeminiBackend, GeminiConfig, IntentAdapter, OllamaBackend, OllamaConfig};

pub const GEMINI_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

/// End-to-end harness: mock model service + controller over a catalog.
pub struct TestHarness {
    pub server: MockServer,
    pub controller: SearchController,
}

impl TestHarness {
    /// Gemini-backed controller over the sample catalog.
    pub async fn gemini() -> Self {
        Self::gemini_with_catalog(sample_catalog(), Duration::from_secs(5)).await
    }

    pub async fn gemini_with_catalog(catalog: Vec<VehicleRecord>, timeout: Duration) -> Self {
        let server = MockServer::start().await;
        let backend = GeminiBackend::new(
            GeminiConfig {
                base_url: server.uri(),
                timeout_secs: 30,
                ..Default::default()
            },
            "e2e-key",
        )
        .unwrap();
        let interpreter = Arc::new(IntentAdapter::with_timeout(backend, timeout));
        Self {
            controller: SearchController::new(catalog, interpreter),
            server,
        }
    }

    /// Ollama-backed controller over the sample catalog.
    pub async fn ollama() -> Self {
        let server = MockServer::start().await;
        let backend = OllamaBackend::new(OllamaConfig {
            host: server.uri(),
            model: "llama3.2".into(),
            timeout_secs: 5,
        })
        .unwrap();
        let interpreter = Arc::new(IntentAdapter::new(backend));
        Self {
            controller: SearchController::new(sample_catalog(), interpreter),
            server,
        }
    }

    /// Make the Gemini mock answer with `text` as the model output.
    pub async fn gemini_replies(&self, text: &str) {
        Mock::given(method("POST"))
            .and(path(GEMINI_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body(text)))
            .mount(&self.server)
            .await;
    }

    /// Make the Ollama mock answer with `text` as the message content.
    pub async fn ollama_replies(&self, text: &str) {
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "model": "llama3.2",
                "message": {"role": "assistant", "content": text},
                "done": true
            })))
            .mount(&self.server)
            .await;
    }

    /// Ids of the displayed result, in order.
    pub async fn displayed_ids(&self) -> Vec<u32> {
        self.controller
            .current()
            .await
            .vehicles()
            .iter()
            .map(|v| v.id)
            .collect()
    }

    /// Bodies of every request the mock server received.
    pub async fn request_bodies(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| serde_json::from_slice(&r.body).unwrap())
            .collect()
    }
}

pub fn gemini_body(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}
