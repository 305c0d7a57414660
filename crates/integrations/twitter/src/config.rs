/// Twitter/X OAuth 1.0a user-context credentials entered through the form.
///
/// All four values come from the developer portal for the posting account and
/// live only for one submission.
#[derive(Clone)]
pub struct TwitterConfig {
    /// OAuth 1.0a consumer key (API key).
    pub consumer_key: String,

    /// OAuth 1.0a consumer secret (API secret).
    pub consumer_secret: String,

    /// User access token.
    pub access_token: String,

    /// User access token secret.
    pub access_token_secret: String,

    /// Base URL for the Twitter API. Override this for testing against a
    /// mock server.
    pub api_base_url: String,
}

impl std::fmt::Debug for TwitterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitterConfig")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[REDACTED]")
            .field("access_token", &"[REDACTED]")
            .field("access_token_secret", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl TwitterConfig {
    /// Create a new configuration from the four OAuth 1.0a credentials.
    ///
    /// Uses the default API base URL (`https://api.twitter.com`).
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
            api_base_url: "https://api.twitter.com".to_owned(),
        }
    }

    /// Override the API base URL (useful for testing).
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_api_base_url() {
        let config = TwitterConfig::new("ck", "cs", "at", "ats");
        assert_eq!(config.api_base_url, "https://api.twitter.com");
    }

    #[test]
    fn debug_redacts_secrets() {
        let config = TwitterConfig::new("ck-visible", "cs-hidden", "at-hidden", "ats-hidden");
        let debug = format!("{config:?}");
        assert!(debug.contains("ck-visible"));
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("cs-hidden"));
        assert!(!debug.contains("at-hidden"));
        assert!(!debug.contains("ats-hidden"));
    }
}
