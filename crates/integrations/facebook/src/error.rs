use commhub_provider::ProviderError;
use thiserror::Error;

/// Errors specific to the Facebook channel.
#[derive(Debug, Error)]
pub enum FacebookError {
    /// An HTTP-level transport error occurred.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The Graph API returned an error response.
    #[error("Graph API error: {0}")]
    Api(String),

    /// The dispatch payload is missing required fields or has invalid
    /// structure.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// The provider received an HTTP 429 (Too Many Requests) response.
    #[error("rate limited by Facebook")]
    RateLimited,
}

impl From<FacebookError> for ProviderError {
    fn from(err: FacebookError) -> Self {
        match err {
            FacebookError::Http(e) => ProviderError::Connection(e.to_string()),
            FacebookError::Api(msg) => ProviderError::DispatchFailed(msg),
            FacebookError::InvalidPayload(msg) => ProviderError::InvalidMessage(msg),
            FacebookError::RateLimited => ProviderError::RateLimited,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_maps_to_dispatch_failed() {
        let provider_err: ProviderError =
            FacebookError::Api("Invalid OAuth access token".into()).into();
        assert!(matches!(provider_err, ProviderError::DispatchFailed(_)));
    }

    #[test]
    fn error_display() {
        let err = FacebookError::Api("(#200) permission denied".into());
        assert_eq!(err.to_string(), "Graph API error: (#200) permission denied");
    }
}
