use std::sync::Arc;

use pitlane_core::session::{BookSessionCommand, BookingPayload};
use pitlane_core::validation;
use pitlane_core::CoreError;
use pitlane_gateway::{FetchRequest, Method, SessionGateway};

use crate::status::WorkflowStatus;

pub const MSG_BOOKING_FAILED: &str = "Erreur lors de la création de la réservation";

/// Booking workflow: validates the visitor's details and submits the
/// reservation. One value per screen mount.
pub struct BookSession {
    gateway: Arc<dyn SessionGateway>,
    base_url: String,
    status: WorkflowStatus,
}

impl BookSession {
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

    pub async fn submit(&mut self, command: &BookSessionCommand) {
        self.status = WorkflowStatus::Loading;

        if let Err(CoreError::Validation(message)) = validation::validate_booking(command) {
            tracing::debug!(%message, "booking rejected by validation");
            self.status = WorkflowStatus::Error(message);
            return;
        }

        let payload = BookingPayload::from_command(command);
        let url = format!("{}/reservations", self.base_url);
        let result = match serde_json::to_string(&payload) {
            Ok(body) => {
                self.gateway
                    .submit(&url, FetchRequest::json(Method::Post, body))
                    .await
            }
            Err(err) => {
                tracing::warn!(error = %err, "booking payload could not be encoded");
                self.status = WorkflowStatus::Error(MSG_BOOKING_FAILED.to_string());
                return;
            }
        };

        self.status = match result {
            Ok(response) if response.ok => WorkflowStatus::Success,
            Ok(_) => {
                tracing::warn!("booking rejected by backend");
                WorkflowStatus::Error(MSG_BOOKING_FAILED.to_string())
            }
            Err(err) => {
                tracing::warn!(error = %err, "booking request failed");
                WorkflowStatus::Error(MSG_BOOKING_FAILED.to_string())
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingGateway;
    use pitlane_core::validation::{MSG_NOM_REQUIS, MSG_TELEPHONE_INVALIDE};

    fn command() -> BookSessionCommand {
        BookSessionCommand {
            nom: "Dupont".to_string(),
            prenom: "Marie".to_string(),
            email: "marie.dupont@example.com".to_string(),
            telephone: "06 12 34 56 78".to_string(),
            nombre_participants: 4,
            session_ids: vec![1, 2],
        }
    }

    #[tokio::test]
    async fn valid_booking_reaches_the_gateway_and_succeeds() {
        let gateway = Arc::new(RecordingGateway::accepting());
        let mut workflow = BookSession::new(gateway.clone(), "https://fake-api-karting.fr");

        workflow.submit(&command()).await;

        assert!(workflow.is_success());
        assert_eq!(workflow.error(), None);
        assert!(!workflow.is_loading());
        assert_eq!(gateway.call_count(), 1);
        assert_eq!(
            gateway.last_url().unwrap(),
            "https://fake-api-karting.fr/reservations"
        );
    }

    #[tokio::test]
    async fn body_carries_the_stripped_phone_number() {
        let gateway = Arc::new(RecordingGateway::accepting());
        let mut workflow = BookSession::new(gateway.clone(), "https://fake-api-karting.fr");

        workflow.submit(&command()).await;

        let body: serde_json::Value =
            serde_json::from_str(&gateway.last_body().unwrap()).unwrap();
        assert_eq!(body["telephone"], "0612345678");
        assert_eq!(body["nom"], "Dupont");
        assert_eq!(body["sessionIds"], serde_json::json!([1, 2]));
    }

    #[tokio::test]
    async fn validation_failure_skips_the_network() {
        let gateway = Arc::new(RecordingGateway::accepting());
        let mut workflow = BookSession::new(gateway.clone(), "https://fake-api-karting.fr");

        let mut bad = command();
        bad.nom = String::new();
        workflow.submit(&bad).await;

        assert_eq!(workflow.error(), Some(MSG_NOM_REQUIS));
        assert_eq!(gateway.call_count(), 0);

        let mut bad = command();
        bad.telephone = "0612".to_string();
        workflow.submit(&bad).await;

        assert_eq!(workflow.error(), Some(MSG_TELEPHONE_INVALIDE));
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn backend_rejection_surfaces_the_generic_message() {
        let gateway = Arc::new(RecordingGateway::rejecting());
        let mut workflow = BookSession::new(gateway, "https://fake-api-karting.fr");

        workflow.submit(&command()).await;

        assert_eq!(workflow.error(), Some(MSG_BOOKING_FAILED));
        assert!(!workflow.is_success());
    }

    #[tokio::test]
    async fn transport_failure_surfaces_the_same_generic_message() {
        let gateway = Arc::new(RecordingGateway::failing());
        let mut workflow = BookSession::new(gateway, "https://fake-api-karting.fr");

        workflow.submit(&command()).await;

        assert_eq!(workflow.error(), Some(MSG_BOOKING_FAILED));
    }

    #[tokio::test]
    async fn a_failed_attempt_leaves_no_residue_on_the_next() {
        let mut workflow = BookSession::new(
            Arc::new(RecordingGateway::accepting()),
            "https://fake-api-karting.fr",
        );

        let mut bad = command();
        bad.session_ids = vec![];
        workflow.submit(&bad).await;
        assert!(workflow.error().is_some());

        workflow.submit(&command()).await;
        assert!(workflow.is_success());
        assert_eq!(workflow.error(), None);
    }
}
