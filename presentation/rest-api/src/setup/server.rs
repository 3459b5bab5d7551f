use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener,
    middleware::{Cors, Tracing},
};
use poem_openapi::OpenApiService;

use crate::api::completion::routes::CompletionApi;
use crate::api::health::routes::Api as HealthApi;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub type ApiService = OpenApiService<(HealthApi, CompletionApi), ()>;

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::app(Self::api_service(container, &addr), config.cors.middleware());

        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        tracing::info!("CORS allowed origins: {:?}", config.cors.allowed_origins);

        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }

    pub fn api_service(container: DependencyContainer, addr: &str) -> ApiService {
        OpenApiService::new(
            (container.health_api, container.completion_api),
            "Bias-Aware Backend API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr))
    }

    /// Routes plus docs, wrapped in CORS and request tracing.
    pub fn app(api_service: ApiService, cors: Cors) -> impl Endpoint {
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(cors)
            .with(Tracing)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use mockall::mock;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use serde_json::json;

    use business::domain::completion::errors::CompletionError;
    use business::domain::completion::model::{ChatMessage, CompletionRequest, CompletionResponse};
    use business::domain::completion::services::CompletionProvider;

    use super::*;
    use crate::config::cors_config::{CorsConfig, DEFAULT_ALLOWED_ORIGINS};
    use crate::config::openai_config::OpenAIConfig;

    const ALLOWED_ORIGIN: &str = "http://localhost:3000";
    const OTHER_ORIGIN: &str = "http://evil.example.com";

    mock! {
        pub Provider {}

        #[async_trait]
        impl CompletionProvider for Provider {
            async fn create_completion(
                &self,
                request: &CompletionRequest,
            ) -> Result<CompletionResponse, CompletionError>;
        }
    }

    fn provider_returning(text: &'static str) -> MockProvider {
        let mut provider = MockProvider::new();
        provider
            .expect_create_completion()
            .times(1)
            .returning(move |_| Ok(CompletionResponse::new(vec![text.to_string()])));
        provider
    }

    fn client_for(container: DependencyContainer) -> TestClient<impl Endpoint> {
        let api_service = Server::api_service(container, "127.0.0.1:8000");
        let cors = CorsConfig::from_origins(DEFAULT_ALLOWED_ORIGINS).middleware();
        TestClient::new(Server::app(api_service, cors))
    }

    fn client_with(provider: MockProvider) -> TestClient<impl Endpoint> {
        client_for(DependencyContainer::with_provider(Arc::new(provider)))
    }

    fn unconfigured_container() -> DependencyContainer {
        DependencyContainer::new(&OpenAIConfig {
            api_key: None,
            base_url: "http://127.0.0.1:1".to_string(),
        })
    }

    #[tokio::test]
    async fn should_answer_ping_with_pong() {
        let cli = client_with(MockProvider::new());

        let resp = cli.get("/ping").send().await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({"message": "pong"})).await;
    }

    #[tokio::test]
    async fn should_answer_ping_regardless_of_headers_and_query() {
        let cli = client_with(MockProvider::new());

        let resp = cli
            .get("/ping?verbose=true&probe=1")
            .header("X-Request-Id", "abc-123")
            .header("Accept-Language", "es-ES")
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({"message": "pong"})).await;
    }

    #[tokio::test]
    async fn should_relay_provider_text() {
        let cli = client_with(provider_returning("Hello there"));

        let resp = cli.get("/test_openai").send().await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({"response": "Hello there"})).await;
    }

    #[tokio::test]
    async fn should_call_provider_once_with_fixed_prompt() {
        let mut provider = MockProvider::new();
        provider
            .expect_create_completion()
            .withf(|request| {
                request.model == "gpt-3.5-turbo"
                    && request.messages == vec![ChatMessage::user("Say hello")]
                    && request.max_tokens == 5
            })
            .times(1)
            .returning(|_| Ok(CompletionResponse::new(vec!["Hello".to_string()])));
        let cli = client_with(provider);

        let resp = cli.get("/test_openai").send().await;

        resp.assert_status_is_ok();
    }

    #[tokio::test]
    async fn should_trim_provider_text() {
        let cli = client_with(provider_returning("  Hello  "));

        let resp = cli.get("/test_openai").send().await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({"response": "Hello"})).await;
    }

    #[tokio::test]
    async fn should_return_server_error_when_provider_fails() {
        let mut provider = MockProvider::new();
        provider
            .expect_create_completion()
            .times(1)
            .returning(|_| Err(CompletionError::ProviderFailed));
        let cli = client_with(provider);

        let resp = cli.get("/test_openai").send().await;

        resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        resp.assert_json(json!({
            "name": "ProviderError",
            "message": "completion.provider_failed",
        }))
        .await;
    }

    #[tokio::test]
    async fn should_return_configuration_error_without_api_key() {
        let cli = client_for(unconfigured_container());

        let resp = cli.get("/test_openai").send().await;

        resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        resp.assert_json(json!({
            "name": "ConfigurationError",
            "message": "completion.missing_credential",
        }))
        .await;
    }

    #[test]
    fn should_register_both_routes_without_api_key() {
        let api_service = Server::api_service(unconfigured_container(), "127.0.0.1:8000");

        let spec: serde_json::Value = serde_json::from_str(&api_service.spec()).unwrap();

        assert!(spec["paths"]["/ping"]["get"].is_object());
        assert!(spec["paths"]["/test_openai"]["get"].is_object());
    }

    #[tokio::test]
    async fn should_serve_openapi_document() {
        let cli = client_with(MockProvider::new());

        let resp = cli.get("/openapi.json").send().await;

        resp.assert_status_is_ok();
    }

    #[tokio::test]
    async fn should_accept_preflight_from_allowed_origin() {
        let cli = client_with(MockProvider::new());

        let resp = cli
            .options("/test_openai")
            .header("Origin", ALLOWED_ORIGIN)
            .header("Access-Control-Request-Method", "GET")
            .header("Access-Control-Request-Headers", "x-custom-header")
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_header("access-control-allow-origin", ALLOWED_ORIGIN);
        resp.assert_header("access-control-allow-credentials", "true");
        resp.assert_header_exist("access-control-allow-methods");
        resp.assert_header_exist("access-control-allow-headers");
    }

    #[tokio::test]
    async fn should_reject_preflight_from_other_origin() {
        let cli = client_with(MockProvider::new());

        let resp = cli
            .options("/test_openai")
            .header("Origin", OTHER_ORIGIN)
            .header("Access-Control-Request-Method", "GET")
            .send()
            .await;

        resp.assert_header_is_not_exist("access-control-allow-origin");
    }

    #[tokio::test]
    async fn should_not_reach_provider_from_other_origin() {
        let mut provider = MockProvider::new();
        provider.expect_create_completion().never();
        let cli = client_with(provider);

        let resp = cli
            .get("/test_openai")
            .header("Origin", OTHER_ORIGIN)
            .send()
            .await;

        resp.assert_header_is_not_exist("access-control-allow-origin");
    }

    #[tokio::test]
    async fn should_echo_allowed_origin_on_simple_request() {
        let cli = client_with(MockProvider::new());

        let resp = cli.get("/ping").header("Origin", ALLOWED_ORIGIN).send().await;

        resp.assert_status_is_ok();
        resp.assert_header("access-control-allow-origin", ALLOWED_ORIGIN);
    }
}
