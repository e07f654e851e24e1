use async_trait::async_trait;
use pitlane_core::session::SessionRecord;

use crate::GatewayError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl FetchRequest {
    /// A JSON-bodied request with the standard content-type header.
    pub fn json(method: Method, body: String) -> Self {
        Self {
            method,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FetchResponse {
    pub ok: bool,
}

#[derive(Debug, Clone)]
pub struct ReadResponse {
    pub ok: bool,
    pub data: Option<SessionRecord>,
}

/// Write-side port: submits a command payload, reports only whether the
/// backend accepted it. No retry, no timeout, no cancellation.
#[async_trait]
pub trait SessionGateway: Send + Sync {
    async fn submit(&self, url: &str, request: FetchRequest)
        -> Result<FetchResponse, GatewayError>;
}

/// Read-side port: fetches one session record.
#[async_trait]
pub trait SessionReader: Send + Sync {
    async fn fetch_session(&self, url: &str) -> Result<ReadResponse, GatewayError>;
}
