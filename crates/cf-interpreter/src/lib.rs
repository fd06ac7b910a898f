//! Natural-language intent interpretation for vehicle search.
//!
//! Turns free text ("a safe family SUV under $30k") into
//! [`StructuredCriteria`] by asking an external model service for a reply
//! under a fixed JSON schema, then sanitizing that reply field by field.
//!
//! Two layers:
//! - [`InterpreterBackend`]: raw prompt-in, text-out service (Gemini, Ollama, mock).
//! - [`IntentAdapter`]: input validation, prompt, timeout and sanitization
//!   on top of any backend, exposed through the [`IntentInterpreter`] capability.

pub mod adapter;
pub mod error;
pub mod gemini;
pub mod mock;
pub mod ollama;
pub mod prompt;
pub mod sanitize;

use async_trait::async_trait;
use cf_catalog::StructuredCriteria;

/// Capability that interprets free text into search criteria.
#[async_trait]
pub trait IntentInterpreter: Send + Sync {
    /// Interpret `text` into criteria.
    ///
    /// Fails with [`InterpretError::InvalidInput`] when `text` is blank and
    /// with [`InterpretError::InterpretationFailed`] when the service cannot
    /// produce a decodable reply.
    async fn interpret(&self, text: &str) -> InterpretResult<StructuredCriteria>;

    /// Name of the interpreter (for logging/audit).
    fn name(&self) -> &str;
}

pub use adapter::{DEFAULT_TIMEOUT, IntentAdapter, InterpreterBackend};
pub use error::{BackendError, BackendResult, InterpretError, InterpretResult};
pub use gemini::{GeminiBackend, GeminiConfig};
pub use mock::MockBackend;
pub use ollama::{OllamaBackend, OllamaConfig};
pub use prompt::EXAMPLE_PROMPTS;
pub use sanitize::{AiCriteria, Sanitized, sanitize};
