use async_trait::async_trait;

use crate::domain::completion::errors::CompletionError;

#[async_trait]
pub trait ProbeCompletionUseCase: Send + Sync {
    /// Sends the fixed greeting prompt and returns the trimmed first candidate.
    async fn execute(&self) -> Result<String, CompletionError>;
}
