//! Search mode controller.
//!
//! Holds the currently displayed [`SearchResult`] and switches between
//! structured (form) searches and AI-derived searches. Results are replaced
//! wholesale, never edited.
//!
//! Every submission takes a monotonically increasing ticket. A free-text
//! search only stores its result if its ticket is still the latest when the
//! interpreter answers, so a slow AI response can never overwrite a newer
//! search.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

use cf_catalog::{RawFormCriteria, StructuredCriteria, VehicleRecord};
use cf_interpreter::{IntentInterpreter, InterpretError, InterpretResult};

/// Which kind of search produced the displayed result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    Structured,
    AiDerived,
}

/// The displayed result set, tagged by how it was produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SearchResult {
    Structured {
        criteria: StructuredCriteria,
        vehicles: Vec<VehicleRecord>,
        searched_at: DateTime<Utc>,
    },
    AiDerived {
        /// The user's original request, kept for display and audit.
        source_text: String,
        criteria: StructuredCriteria,
        vehicles: Vec<VehicleRecord>,
        searched_at: DateTime<Utc>,
    },
}

impl SearchResult {
    pub fn mode(&self) -> SearchMode {
        match self {
            Self::Structured { .. } => SearchMode::Structured,
            Self::AiDerived { .. } => SearchMode::AiDerived,
        }
    }

    pub fn vehicles(&self) -> &[VehicleRecord] {
        match self {
            Self::Structured { vehicles, .. } | Self::AiDerived { vehicles, .. } => vehicles,
        }
    }

    pub fn criteria(&self) -> &StructuredCriteria {
        match self {
            Self::Structured { criteria, .. } | Self::AiDerived { criteria, .. } => criteria,
        }
    }

    /// Free text behind an AI-derived result.
    pub fn source_text(&self) -> Option<&str> {
        match self {
            Self::Structured { .. } => None,
            Self::AiDerived { source_text, .. } => Some(source_text),
        }
    }
}

/// Outcome of a free-text submission that reached the interpreter.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// The result is now displayed.
    Applied(SearchResult),
    /// A newer submission arrived first; nothing was stored.
    Superseded,
}

struct ControllerState {
    current: SearchResult,
    latest_ticket: u64,
}

/// Two-state search controller over a read-only catalog.
pub struct SearchController {
    catalog: Arc<[VehicleRecord]>,
    interpreter: Arc<dyn IntentInterpreter>,
    state: RwLock<ControllerState>,
}

impl SearchController {
    /// Start in structured mode showing the whole catalog.
    pub fn new(
        catalog: impl Into<Arc<[VehicleRecord]>>,
        interpreter: Arc<dyn IntentInterpreter>,
    ) -> Self {
        let catalog = catalog.into();
        let current = structured_result(&catalog, StructuredCriteria::default());
        Self {
            catalog,
            interpreter,
            state: RwLock::new(ControllerState {
                current,
                latest_ticket: 0,
            }),
        }
    }

    /// Snapshot of the displayed result.
    pub async fn current(&self) -> SearchResult {
        self.state.read().await.current.clone()
    }

    pub async fn mode(&self) -> SearchMode {
        self.state.read().await.current.mode()
    }

    /// Filter with form input and display the result.
    pub async fn submit_structured_search(&self, raw: &RawFormCriteria) -> SearchResult {
        let criteria = cf_search::normalize(raw);
        let result = structured_result(&self.catalog, criteria);
        tracing::info!(matched = result.vehicles().len(), "structured search");
        self.replace(result.clone()).await;
        result
    }

    /// Interpret free text and display the filtered result.
    ///
    /// On error the displayed result is left untouched.
    pub async fn submit_free_text_search(&self, text: &str) -> InterpretResult<Submission> {
        if text.trim().is_empty() {
            return Err(InterpretError::InvalidInput);
        }

        let ticket = {
            let mut state = self.state.write().await;
            state.latest_ticket += 1;
            state.latest_ticket
        };

        let criteria = self.interpreter.interpret(text).await?;
        let vehicles = filter_owned(&self.catalog, &criteria);
        let result = SearchResult::AiDerived {
            source_text: text.to_string(),
            criteria,
            vehicles,
            searched_at: Utc::now(),
        };

        let mut state = self.state.write().await;
        if state.latest_ticket != ticket {
            tracing::info!(
                ticket,
                latest = state.latest_ticket,
                interpreter = self.interpreter.name(),
                "discarding superseded free-text result"
            );
            return Ok(Submission::Superseded);
        }
        tracing::info!(
            matched = result.vehicles().len(),
            interpreter = self.interpreter.name(),
            "free-text search"
        );
        state.current = result.clone();
        Ok(Submission::Applied(result))
    }

    /// Return to structured mode showing the whole catalog.
    pub async fn reset(&self) -> SearchResult {
        let result = structured_result(&self.catalog, StructuredCriteria::default());
        tracing::debug!("search reset");
        self.replace(result.clone()).await;
        result
    }

    /// Distinct makes in catalog order, for the form's make selector.
    pub fn makes(&self) -> Vec<String> {
        cf_catalog::distinct_makes(&self.catalog)
    }

    /// Detail-view lookup.
    pub fn vehicle(&self, id: u32) -> Option<&VehicleRecord> {
        cf_catalog::find_by_id(&self.catalog, id)
    }

    async fn replace(&self, result: SearchResult) {
        let mut state = self.state.write().await;
        state.latest_ticket += 1;
        state.current = result;
    }
}

fn filter_owned(catalog: &[VehicleRecord], criteria: &StructuredCriteria) -> Vec<VehicleRecord> {
    cf_search::filter(catalog, criteria).into_iter().cloned().collect()
}

fn structured_result(catalog: &[VehicleRecord], criteria: StructuredCriteria) -> SearchResult {
    SearchResult::Structured {
        vehicles: filter_owned(catalog, &criteria),
        criteria,
        searched_at: Utc::now(),
    }
}
