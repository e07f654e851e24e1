use std::sync::Arc;

use pitlane_core::session::SessionRecord;
use pitlane_gateway::{GatewayError, ReadResponse, SessionReader};

use crate::status::WorkflowStatus;

pub const MSG_LOOKUP_FAILED: &str = "Erreur lors de la récupération de la session";

/// Read flow for the update screen: fetches one session record to
/// pre-populate the form.
///
/// Lookups are tagged with a generation counter. A response belonging to
/// a superseded lookup (the user navigated to another session before the
/// first fetch resolved) is discarded instead of clobbering newer state.
pub struct SessionLookup {
    reader: Arc<dyn SessionReader>,
    base_url: String,
    generation: u64,
    session: Option<SessionRecord>,
    status: WorkflowStatus,
}

impl SessionLookup {
    pub fn new(reader: Arc<dyn SessionReader>, base_url: impl Into<String>) -> Self {
        Self {
            reader,
            base_url: base_url.into(),
            generation: 0,
            session: None,
            status: WorkflowStatus::Idle,
        }
    }

    pub fn session(&self) -> Option<&SessionRecord> {
        self.session.as_ref()
    }

    pub fn status(&self) -> &WorkflowStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.status.error()
    }

    /// Marks a new lookup as current and returns its generation tag.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.status = WorkflowStatus::Loading;
        self.generation
    }

    /// Applies a lookup outcome unless a newer lookup began since.
    pub fn resolve(&mut self, generation: u64, outcome: Result<ReadResponse, GatewayError>) {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "discarding stale lookup");
            return;
        }

        self.status = match outcome {
            Ok(response) if response.ok => {
                // ok with no data keeps the previous record, as the
                // original client did.
                if let Some(record) = response.data {
                    self.session = Some(record);
                }
                WorkflowStatus::Success
            }
            Ok(_) => {
                tracing::warn!("session lookup rejected by backend");
                WorkflowStatus::Error(MSG_LOOKUP_FAILED.to_string())
            }
            Err(err) => {
                tracing::warn!(error = %err, "session lookup failed");
                WorkflowStatus::Error(MSG_LOOKUP_FAILED.to_string())
            }
        };
    }

    /// Drives one full lookup: begin, fetch, resolve.
    pub async fn run(&mut self, session_id: &str) {
        let generation = self.begin();
        let url = format!("{}/api/sessions/{}", self.base_url, session_id);
        let outcome = self.reader.fetch_session(&url).await;
        self.resolve(generation, outcome);
    }
}
