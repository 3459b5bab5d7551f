use async_trait::async_trait;

use super::errors::CompletionError;
use super::model::{CompletionRequest, CompletionResponse};

/// Service port for the external language-model provider.
///
/// Implementations are shared across concurrent requests and must not
/// mutate state between calls.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn create_completion(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError>;
}
