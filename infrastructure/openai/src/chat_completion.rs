use async_trait::async_trait;
use serde_json::{Value, json};

use business::domain::completion::errors::CompletionError;
use business::domain::completion::model::{CompletionRequest, CompletionResponse};
use business::domain::completion::services::CompletionProvider;

use crate::client::OpenAIClient;

/// `CompletionProvider` backed by the OpenAI chat completions endpoint.
pub struct ChatCompletionOpenAI {
    client: OpenAIClient,
}

impl ChatCompletionOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn build_body(request: &CompletionRequest) -> Value {
        let messages: Vec<Value> = request
            .messages
            .iter()
            .map(|m| json!({"role": m.role.to_string(), "content": m.content}))
            .collect();

        json!({
            "model": request.model,
            "messages": messages,
            "max_tokens": request.max_tokens,
        })
    }

    fn parse_candidates(data: &Value) -> Result<Vec<String>, CompletionError> {
        let choices = data["choices"]
            .as_array()
            .ok_or(CompletionError::EmptyResponse)?;

        // A choice without content (e.g. a refusal) still occupies its slot.
        Ok(choices
            .iter()
            .map(|choice| {
                choice["message"]["content"]
                    .as_str()
                    .unwrap_or_default()
                    .to_string()
            })
            .collect())
    }
}

#[async_trait]
impl CompletionProvider for ChatCompletionOpenAI {
    async fn create_completion(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        let auth_header = self
            .client
            .auth_header()
            .ok_or(CompletionError::MissingCredential)?;

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", auth_header)
            .json(&Self::build_body(request))
            .send()
            .await
            .map_err(|_| CompletionError::ProviderFailed)?;

        if !response.status().is_success() {
            return Err(CompletionError::ProviderFailed);
        }

        let data: Value = response
            .json()
            .await
            .map_err(|_| CompletionError::EmptyResponse)?;

        Ok(CompletionResponse::new(Self::parse_candidates(&data)?))
    }
}
