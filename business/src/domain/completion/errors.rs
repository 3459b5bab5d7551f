/// Completion errors for domain layer.
/// Variants carry code-style identifiers, matching the API error messages.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CompletionError {
    #[error("completion.missing_credential")]
    MissingCredential,
    #[error("completion.provider_failed")]
    ProviderFailed,
    #[error("completion.empty_response")]
    EmptyResponse,
}
