use async_trait::async_trait;
use pitlane_core::session::SessionRecord;
use tokio::time::{sleep, Duration};

use crate::port::{FetchRequest, FetchResponse, ReadResponse, SessionGateway, SessionReader};
use crate::GatewayError;

/// Deterministic gateway for development and demos: resolves `ok:true`
/// after a fixed delay, never fails.
pub struct StubGateway {
    submit_latency: Duration,
    read_latency: Duration,
}

impl StubGateway {
    pub fn new(submit_latency: Duration, read_latency: Duration) -> Self {
        Self {
            submit_latency,
            read_latency,
        }
    }
}

impl Default for StubGateway {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000), Duration::from_millis(500))
    }
}

/// The record the stub reader always serves.
pub fn canned_session() -> SessionRecord {
    SessionRecord {
        session_id: "123".to_string(),
        date_heure_debut: "2025-06-15 14:00".to_string(),
        duree: 45,
        nombre_karts_disponibles: 8,
        prix: 35.50,
    }
}

#[async_trait]
impl SessionGateway for StubGateway {
    async fn submit(
        &self,
        url: &str,
        _request: FetchRequest,
    ) -> Result<FetchResponse, GatewayError> {
        tracing::debug!(url, "stub gateway accepting submission");
        sleep(self.submit_latency).await;
        Ok(FetchResponse { ok: true })
    }
}

#[async_trait]
impl SessionReader for StubGateway {
    async fn fetch_session(&self, url: &str) -> Result<ReadResponse, GatewayError> {
        tracing::debug!(url, "stub gateway serving canned session");
        sleep(self.read_latency).await;
        Ok(ReadResponse {
            ok: true,
            data: Some(canned_session()),
        })
    }
}
