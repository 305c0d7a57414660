use serde::{Deserialize, Serialize};

/// SMTP submission settings entered through the email form.
///
/// Built fresh per submission and dropped once the result is rendered; the
/// dashboard never stores credentials.
#[derive(Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    /// SMTP server hostname.
    pub smtp_host: String,

    /// SMTP server port. Defaults to 587 (STARTTLS submission port).
    pub smtp_port: u16,

    /// Optional SMTP username for authentication.
    pub username: Option<String>,

    /// Optional SMTP password for authentication.
    pub password: Option<String>,
}

impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            smtp_host: "localhost".to_owned(),
            smtp_port: 587,
            username: None,
            password: None,
        }
    }
}

impl SmtpConfig {
    /// Create a config for the given host on the default submission port.
    pub fn new(smtp_host: impl Into<String>) -> Self {
        Self {
            smtp_host: smtp_host.into(),
            ..Self::default()
        }
    }

    /// Set SMTP authentication credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Override the default SMTP port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.smtp_port = port;
        self
    }

    /// Whether this port uses implicit TLS (SMTPS) rather than STARTTLS.
    pub fn implicit_tls(&self) -> bool {
        self.smtp_port == 465
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = SmtpConfig::default();
        assert_eq!(config.smtp_host, "localhost");
        assert_eq!(config.smtp_port, 587);
        assert!(config.username.is_none());
        assert!(config.password.is_none());
        assert!(!config.implicit_tls());
    }

    #[test]
    fn with_credentials_sets_auth() {
        let config = SmtpConfig::new("smtp.gmail.com").with_credentials("user", "pass");
        assert_eq!(config.username.as_deref(), Some("user"));
        assert_eq!(config.password.as_deref(), Some("pass"));
    }

    #[test]
    fn port_465_selects_implicit_tls() {
        let config = SmtpConfig::new("smtp.example.com").with_port(465);
        assert!(config.implicit_tls());
        let config = SmtpConfig::new("smtp.example.com").with_port(25);
        assert!(!config.implicit_tls());
    }

    #[test]
    fn debug_redacts_password() {
        let config =
            SmtpConfig::new("smtp.example.com").with_credentials("user", "test-pw-placeholder");
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"), "password must be redacted");
        assert!(
            !debug.contains("test-pw-placeholder"),
            "password must not appear in debug output"
        );
        assert!(
            debug.contains("smtp.example.com"),
            "non-secret fields should be visible"
        );
    }
}
