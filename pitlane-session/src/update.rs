use chrono::Utc;
use std::sync::Arc;

use pitlane_core::session::UpdateSessionCommand;
use pitlane_core::validation;
use pitlane_core::CoreError;
use pitlane_gateway::{FetchRequest, Method, SessionGateway};

use crate::status::WorkflowStatus;

pub const MSG_UPDATE_FAILED: &str = "Erreur lors de la modification de la session";

/// Update-session workflow: same rules as creation, PUT against the
/// session's own resource.
pub struct UpdateSession {
    gateway: Arc<dyn SessionGateway>,
    base_url: String,
    status: WorkflowStatus,
}

impl UpdateSession {
    pub fn new(gateway: Arc<dyn SessionGateway>, base_url: impl Into<String>) -> Self {
        Self {
            gateway,
            base_url: base_url.into(),
            status: WorkflowStatus::Idle,
        }
    }

    pub fn status(&self) -> &WorkflowStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn error(&self) -> Option<&str> {
        self.status.error()
    }

    pub async fn submit(&mut self, command: &UpdateSessionCommand) {
        self.status = WorkflowStatus::Loading;

        let check = validation::validate_session_fields(
            command.date_heure_debut,
            command.nombre_karts_disponibles,
            command.prix,
            Utc::now(),
        );
        if let Err(CoreError::Validation(message)) = check {
            tracing::debug!(%message, "session update rejected by validation");
            self.status = WorkflowStatus::Error(message);
            return;
        }

        let url = format!("{}/api/sessions/{}", self.base_url, command.session_id);
        let result = match serde_json::to_string(command) {
            Ok(body) => {
                self.gateway
                    .submit(&url, FetchRequest::json(Method::Put, body))
                    .await
            }
            Err(err) => {
                tracing::warn!(error = %err, "update payload could not be encoded");
                self.status = WorkflowStatus::Error(MSG_UPDATE_FAILED.to_string());
                return;
            }
        };

        self.status = match result {
            Ok(response) if response.ok => WorkflowStatus::Success,
            Ok(_) => {
                tracing::warn!("session update rejected by backend");
                WorkflowStatus::Error(MSG_UPDATE_FAILED.to_string())
            }
            Err(err) => {
                tracing::warn!(error = %err, "session update request failed");
                WorkflowStatus::Error(MSG_UPDATE_FAILED.to_string())
            }
        };
    }
}
