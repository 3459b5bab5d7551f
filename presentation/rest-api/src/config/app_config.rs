use super::{cors_config::CorsConfig, openai_config::OpenAIConfig, server_config::ServerConfig};

/// Process-wide configuration, built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub openai: OpenAIConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: CorsConfig::from_env(),
            openai: OpenAIConfig::from_env(),
        }
    }
}
