use thiserror::Error;

/// The two ways a page interaction can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorefrontError {
    /// Detected on the client before any request was issued.
    #[error("{0}")]
    Validation(String),
    /// The backend rejected the request, replied with something unreadable,
    /// or could not be reached.
    #[error("{0}")]
    Operation(String),
}

impl StorefrontError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn operation(message: impl Into<String>) -> Self {
        Self::Operation(message.into())
    }

    /// The user-facing text.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m) | Self::Operation(m) => m,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request could not be built: {0}")]
    Request(String),
    #[error("network error: {0}")]
    Network(String),
}
