/// Twilio account settings entered through the SMS and phone call forms.
#[derive(Clone)]
pub struct TwilioConfig {
    /// Twilio Account SID used to authenticate API requests.
    pub account_sid: String,

    /// Twilio Auth Token used for HTTP Basic authentication.
    pub auth_token: String,

    /// Base URL for the Twilio REST API. Override this for testing against a
    /// mock server.
    pub api_base_url: String,
}

impl std::fmt::Debug for TwilioConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwilioConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl TwilioConfig {
    /// Create a new configuration with the given Account SID and Auth Token.
    ///
    /// Uses the default Twilio API base URL (`https://api.twilio.com`).
    pub fn new(account_sid: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
            api_base_url: "https://api.twilio.com".to_owned(),
        }
    }

    /// Override the API base URL (useful for testing).
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}
