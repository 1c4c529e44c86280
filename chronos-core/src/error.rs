use thiserror::Error;

/// Uniform failure shape for every backend call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never reached the server: offline, DNS, CORS, timeout.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Request { status: u16, message: String },

    /// A 2xx response whose body could not be decoded as the expected JSON.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Local pre-network validation failure.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Authentication-class failures invalidate the stored credential.
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            Self::Request {
                status: 401 | 403,
                ..
            }
        )
    }
}
