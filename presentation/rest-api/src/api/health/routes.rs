use poem_openapi::{Object, OpenApi, payload::Json};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Object)]
pub struct PingResponse {
    /// Always "pong"
    pub message: String,
}

/// Health API for liveness checks
pub struct Api;

impl Api {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns a fixed payload. It never touches the completion provider,
    /// so it succeeds even when no API key is configured.
    #[oai(path = "/ping", method = "get", tag = "ApiTags::Health")]
    async fn ping(&self) -> Json<PingResponse> {
        Json(PingResponse {
            message: "pong".to_string(),
        })
    }
}
