//! Scripted gateways for workflow tests: record every call so tests can
//! prove that validation failures never reach the network.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use pitlane_core::session::SessionRecord;
use pitlane_gateway::{
    FetchRequest, FetchResponse, GatewayError, ReadResponse, SessionGateway, SessionReader,
};

pub enum ScriptedOutcome {
    Accept,
    Reject,
    TransportFailure,
}

pub struct RecordingGateway {
    outcome: ScriptedOutcome,
    calls: AtomicUsize,
    last_url: Mutex<Option<String>>,
    last_body: Mutex<Option<String>>,
}

impl RecordingGateway {
    fn with_outcome(outcome: ScriptedOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_url: Mutex::new(None),
            last_body: Mutex::new(None),
        }
    }

    pub fn accepting() -> Self {
        Self::with_outcome(ScriptedOutcome::Accept)
    }

    pub fn rejecting() -> Self {
        Self::with_outcome(ScriptedOutcome::Reject)
    }

    pub fn failing() -> Self {
        Self::with_outcome(ScriptedOutcome::TransportFailure)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_url(&self) -> Option<String> {
        self.last_url.lock().unwrap().clone()
    }

    pub fn last_body(&self) -> Option<String> {
        self.last_body.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionGateway for RecordingGateway {
    async fn submit(
        &self,
        url: &str,
        request: FetchRequest,
    ) -> Result<FetchResponse, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_url.lock().unwrap() = Some(url.to_string());
        *self.last_body.lock().unwrap() = Some(request.body);
        match self.outcome {
            ScriptedOutcome::Accept => Ok(FetchResponse { ok: true }),
            ScriptedOutcome::Reject => Ok(FetchResponse { ok: false }),
            ScriptedOutcome::TransportFailure => {
                Err(GatewayError::Transport("connection reset".to_string()))
            }
        }
    }
}

pub struct ScriptedReader {
    outcome: ScriptedOutcome,
    record: Option<SessionRecord>,
    calls: AtomicUsize,
}

impl ScriptedReader {
    pub fn serving(record: SessionRecord) -> Self {
        Self {
            outcome: ScriptedOutcome::Accept,
            record: Some(record),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self {
            outcome: ScriptedOutcome::Accept,
            record: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn rejecting() -> Self {
        Self {
            outcome: ScriptedOutcome::Reject,
            record: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionReader for ScriptedReader {
    async fn fetch_session(&self, _url: &str) -> Result<ReadResponse, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.outcome {
            ScriptedOutcome::Accept => Ok(ReadResponse {
                ok: true,
                data: self.record.clone(),
            }),
            ScriptedOutcome::Reject => Ok(ReadResponse { ok: false, data: None }),
            ScriptedOutcome::TransportFailure => {
                Err(GatewayError::Transport("connection reset".to_string()))
            }
        }
    }
}
