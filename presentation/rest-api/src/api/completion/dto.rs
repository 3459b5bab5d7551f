use poem_openapi::Object;

#[derive(Debug, Clone, Object)]
pub struct ProbeResponse {
    /// First candidate returned by the model, trimmed
    pub response: String,
}

impl From<String> for ProbeResponse {
    fn from(response: String) -> Self {
        Self { response }
    }
}
