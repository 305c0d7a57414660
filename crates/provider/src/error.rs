use thiserror::Error;

/// Errors that can occur while dispatching through a provider.
///
/// The dashboard renders every variant identically as one error banner; the
/// taxonomy exists so logs and tests can tell a bad credential from a dead
/// network.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The submitted credentials or settings are unusable.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The message fields are missing or malformed.
    #[error("invalid message: {0}")]
    InvalidMessage(String),

    /// A network or transport-level error occurred.
    #[error("connection error: {0}")]
    Connection(String),

    /// The provider rejected or failed the request.
    #[error("dispatch failed: {0}")]
    DispatchFailed(String),

    /// The provider rejected the request due to rate limiting.
    #[error("rate limited by provider")]
    RateLimited,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ProviderError::Configuration("missing SMTP host".into());
        assert_eq!(err.to_string(), "invalid configuration: missing SMTP host");

        let err = ProviderError::DispatchFailed("550 mailbox unavailable".into());
        assert_eq!(err.to_string(), "dispatch failed: 550 mailbox unavailable");

        assert_eq!(
            ProviderError::RateLimited.to_string(),
            "rate limited by provider"
        );
    }
}
