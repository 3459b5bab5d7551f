use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::completion::errors::CompletionError;
use crate::domain::completion::model::{ChatMessage, CompletionRequest};
use crate::domain::completion::services::CompletionProvider;
use crate::domain::completion::use_cases::probe::ProbeCompletionUseCase;
use crate::domain::logger::Logger;

pub const PROBE_MODEL: &str = "gpt-3.5-turbo";
pub const PROBE_PROMPT: &str = "Say hello";
pub const PROBE_MAX_TOKENS: u32 = 5;

/// The fixed single-message request sent on every probe.
pub fn probe_request() -> CompletionRequest {
    CompletionRequest {
        model: PROBE_MODEL.to_string(),
        messages: vec![ChatMessage::user(PROBE_PROMPT)],
        max_tokens: PROBE_MAX_TOKENS,
    }
}

pub struct ProbeCompletionUseCaseImpl {
    pub provider: Arc<dyn CompletionProvider>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ProbeCompletionUseCase for ProbeCompletionUseCaseImpl {
    async fn execute(&self) -> Result<String, CompletionError> {
        let request = probe_request();
        self.logger.info(&format!(
            "Requesting completion from model: {}",
            request.model
        ));

        let response = match self.provider.create_completion(&request).await {
            Ok(response) => response,
            Err(err) => {
                self.logger
                    .error(&format!("Completion provider call failed: {}", err));
                return Err(err);
            }
        };

        let text = response.first_trimmed().ok_or_else(|| {
            self.logger.warn("Completion provider returned no candidates");
            CompletionError::EmptyResponse
        })?;

        self.logger.debug(&format!(
            "Received {} candidate(s), first has {} chars",
            response.candidates.len(),
            text.len()
        ));

        Ok(text)
    }
}
