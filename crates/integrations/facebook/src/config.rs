/// Facebook Graph API settings entered through the form.
#[derive(Clone)]
pub struct FacebookConfig {
    /// User or page access token.
    pub access_token: String,

    /// Optional page id; when absent, posts go to the token owner's feed
    /// (`/me/feed`).
    pub page_id: Option<String>,

    /// Base URL for the Graph API. Override this for testing against a mock
    /// server.
    pub api_base_url: String,
}

impl std::fmt::Debug for FacebookConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FacebookConfig")
            .field("access_token", &"[REDACTED]")
            .field("page_id", &self.page_id)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl FacebookConfig {
    /// Create a new configuration with the given access token.
    ///
    /// Uses the default Graph API base URL (`https://graph.facebook.com`).
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            page_id: None,
            api_base_url: "https://graph.facebook.com".to_owned(),
        }
    }

    /// Target a page feed instead of the token owner's feed.
    #[must_use]
    pub fn with_page_id(mut self, page_id: impl Into<String>) -> Self {
        self.page_id = Some(page_id.into());
        self
    }

    /// Override the API base URL (useful for testing).
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// The feed target: the configured page id, or `"me"`.
    pub fn feed_target(&self) -> &str {
        self.page_id.as_deref().unwrap_or("me")
    }
}
