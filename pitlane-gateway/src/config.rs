use serde::Deserialize;
use std::env;
use std::sync::Arc;
use tokio::time::Duration;

use crate::http::HttpGateway;
use crate::port::{SessionGateway, SessionReader};
use crate::stub::StubGateway;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GatewayMode {
    /// Delayed-resolve stub, always succeeds.
    #[default]
    Stub,
    /// Real HTTP calls against `base_url`.
    Http,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GatewayConfig {
    #[serde(default)]
    pub mode: GatewayMode,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_stub_latency_ms")]
    pub stub_latency_ms: u64,
}

fn default_base_url() -> String {
    "https://fake-api-karting.fr".to_string()
}

fn default_stub_latency_ms() -> u64 {
    1000
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            mode: GatewayMode::default(),
            base_url: default_base_url(),
            stub_latency_ms: default_stub_latency_ms(),
        }
    }
}

impl GatewayConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/gateway").required(false))
            // Environment-specific overrides, e.g. config/gateway.production
            .add_source(
                config::File::with_name(&format!("config/gateway.{}", run_mode)).required(false),
            )
            // Eg. `PITLANE_MODE=http` selects the real gateway
            .add_source(config::Environment::with_prefix("PITLANE").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Builds the configured gateway pair. Selection is explicit: the
    /// stub is never an ambient fallback for a misconfigured http mode.
    pub fn build(&self) -> (Arc<dyn SessionGateway>, Arc<dyn SessionReader>) {
        match self.mode {
            GatewayMode::Stub => {
                let latency = Duration::from_millis(self.stub_latency_ms);
                let stub = Arc::new(StubGateway::new(latency, latency / 2));
                (stub.clone(), stub)
            }
            GatewayMode::Http => {
                let http = Arc::new(HttpGateway::new());
                (http.clone(), http)
            }
        }
    }
}
