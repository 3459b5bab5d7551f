use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::completion::use_cases::probe::ProbeCompletionUseCase;

use crate::api::completion::dto::ProbeResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CompletionApi {
    probe_use_case: Arc<dyn ProbeCompletionUseCase>,
}

impl CompletionApi {
    pub fn new(probe_use_case: Arc<dyn ProbeCompletionUseCase>) -> Self {
        Self { probe_use_case }
    }
}

/// Completion API
///
/// Passthrough to the language-model provider.
#[OpenApi]
impl CompletionApi {
    /// Probe the completion provider
    ///
    /// Sends a fixed "Say hello" prompt and returns the model's reply.
    /// Takes no parameters; useful to verify the provider credential.
    #[oai(path = "/test_openai", method = "get", tag = "ApiTags::Completion")]
    async fn test_openai(&self) -> TestOpenAIResponse {
        match self.probe_use_case.execute().await {
            Ok(text) => TestOpenAIResponse::Ok(Json(text.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                TestOpenAIResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum TestOpenAIResponse {
    #[oai(status = 200)]
    Ok(Json<ProbeResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
