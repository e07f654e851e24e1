use async_trait::async_trait;
use pitlane_core::session::SessionRecord;

use crate::port::{FetchRequest, FetchResponse, Method, ReadResponse, SessionGateway, SessionReader};
use crate::GatewayError;

/// Real gateway over HTTP. Translates only the success flag of the
/// response; the body of a write response is ignored.
pub struct HttpGateway {
    client: reqwest::Client,
}

impl HttpGateway {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionGateway for HttpGateway {
    async fn submit(
        &self,
        url: &str,
        request: FetchRequest,
    ) -> Result<FetchResponse, GatewayError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        tracing::debug!(url, method = request.method.as_str(), "submitting request");
        let response = builder
            .body(request.body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Ok(FetchResponse {
            ok: response.status().is_success(),
        })
    }
}

#[async_trait]
impl SessionReader for HttpGateway {
    async fn fetch_session(&self, url: &str) -> Result<ReadResponse, GatewayError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            tracing::warn!(url, status = %response.status(), "session fetch rejected");
            return Ok(ReadResponse { ok: false, data: None });
        }

        let record = response
            .json::<SessionRecord>()
            .await
            .map_err(|e| GatewayError::Payload(e.to_string()))?;

        Ok(ReadResponse {
            ok: true,
            data: Some(record),
        })
    }
}
