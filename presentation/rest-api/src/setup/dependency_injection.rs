use std::sync::Arc;

use logger::TracingLogger;

use openai::chat_completion::ChatCompletionOpenAI;
use openai::client::OpenAIClient;

use business::application::completion::probe::ProbeCompletionUseCaseImpl;
use business::domain::completion::services::CompletionProvider;

use crate::api::completion::routes::CompletionApi;
use crate::api::health::routes::Api as HealthApi;
use crate::config::openai_config::OpenAIConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub completion_api: CompletionApi,
}

impl DependencyContainer {
    /// Wires the OpenAI adapter as the completion provider.
    pub fn new(openai_config: &OpenAIConfig) -> Self {
        let openai_client = OpenAIClient::new(
            openai_config.api_key.clone(),
            openai_config.base_url.clone(),
        );
        let provider = Arc::new(ChatCompletionOpenAI::new(openai_client));

        Self::with_provider(provider)
    }

    pub fn with_provider(provider: Arc<dyn CompletionProvider>) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = HealthApi::new();

        let probe_use_case = Arc::new(ProbeCompletionUseCaseImpl { provider, logger });
        let completion_api = CompletionApi::new(probe_use_case);

        Self {
            health_api,
            completion_api,
        }
    }
}
