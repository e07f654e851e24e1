pub mod config;
pub mod http;
pub mod port;
pub mod stub;

pub use config::{GatewayConfig, GatewayMode};
pub use http::HttpGateway;
pub use port::{FetchRequest, FetchResponse, Method, ReadResponse, SessionGateway, SessionReader};
pub use stub::StubGateway;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("invalid response payload: {0}")]
    Payload(String),
}
