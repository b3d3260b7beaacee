//! Transport-level service errors

/// Errors that can occur while talking to the product service.
///
/// These are transport failures, not backend verdicts: a response that
/// arrived with an error status is classified as a
/// [`SaveOutcome`](crate::service::SaveOutcome), not a `ServiceError`.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A response body could not be decoded.
    #[error("Response parse error: {0}")]
    Parse(String),
}

impl ServiceError {
    /// Creates a new parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
