//! Error types for the tariff adjustment service.

/// Domain-level errors (input that can never be valid).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Fee cannot be negative")]
    NegativeFee,

    #[error("missing id")]
    MissingAccountId,
}

/// Errors raised while talking to a downstream system.
///
/// `Transport` means no response was received at all. `Http` carries the
/// status and raw body of a response with an unexpected status code.
#[derive(Debug, thiserror::Error)]
pub enum IntegrationError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("http {status}: {body}")]
    Http { status: u16, body: String },

    #[error("decode error: {0}")]
    Decode(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error("client configuration error: {0}")]
    Config(String),
}

impl IntegrationError {
    /// Status code of the downstream response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            IntegrationError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Upstream(#[from] IntegrationError),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
