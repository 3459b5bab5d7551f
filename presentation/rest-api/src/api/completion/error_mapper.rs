use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::completion::errors::CompletionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CompletionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let name = match &self {
            CompletionError::MissingCredential => "ConfigurationError",
            CompletionError::ProviderFailed | CompletionError::EmptyResponse => "ProviderError",
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
            }),
        )
    }
}
