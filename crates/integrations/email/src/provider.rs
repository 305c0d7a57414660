use commhub_core::{DispatchReceipt, DispatchRequest};
use commhub_provider::{Provider, ProviderError};
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, error, info, instrument};

use crate::config::SmtpConfig;
use crate::types::EmailPayload;

/// Email provider that sends one plain-text message over SMTP via `lettre`.
///
/// The transport is built from the credentials submitted with the form and
/// torn down with the provider when the response is rendered.
pub struct EmailProvider {
    config: SmtpConfig,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl std::fmt::Debug for EmailProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailProvider")
            .field("config", &self.config)
            .field("transport", &"<AsyncSmtpTransport>")
            .finish()
    }
}

impl EmailProvider {
    /// Create a new `EmailProvider` from the given SMTP configuration.
    pub fn new(config: SmtpConfig) -> Result<Self, ProviderError> {
        let transport = build_transport(&config)?;
        Ok(Self { config, transport })
    }

    /// Create an `EmailProvider` with a pre-built transport (for testing).
    pub fn with_transport(
        config: SmtpConfig,
        transport: AsyncSmtpTransport<Tokio1Executor>,
    ) -> Self {
        Self { config, transport }
    }
}

impl Provider for EmailProvider {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "email"
    }

    #[instrument(skip(self, request), fields(request_id = %request.id, provider = "email"))]
    async fn dispatch(
        &self,
        request: &DispatchRequest,
    ) -> Result<DispatchReceipt, ProviderError> {
        let payload: EmailPayload = serde_json::from_value(request.payload.clone())
            .map_err(|e| ProviderError::InvalidMessage(format!("failed to parse payload: {e}")))?;

        debug!(to = %payload.to, subject = %payload.subject, "building SMTP message");
        let message = build_message(&payload)?;

        info!(to = %payload.to, host = %self.config.smtp_host, "sending email via SMTP");
        self.transport.send(message).await.map_err(|e| {
            error!(error = %e, "SMTP send failed");
            map_smtp_error(&e)
        })?;

        info!(to = %payload.to, "email sent successfully via SMTP");
        Ok(DispatchReceipt::sent(format!(
            "Email sent successfully to {}",
            payload.to
        )))
    }
}

/// Build a `lettre::Message` from the parsed payload.
fn build_message(payload: &EmailPayload) -> Result<Message, ProviderError> {
    let from_mailbox: Mailbox = payload
        .from
        .parse()
        .map_err(|e| ProviderError::InvalidMessage(format!("invalid sender address: {e}")))?;

    let to_mailbox: Mailbox = payload
        .to
        .parse()
        .map_err(|e| ProviderError::InvalidMessage(format!("invalid recipient address: {e}")))?;

    Message::builder()
        .from(from_mailbox)
        .to(to_mailbox)
        .subject(&payload.subject)
        .body(payload.body.clone())
        .map_err(|e| ProviderError::InvalidMessage(format!("failed to build email: {e}")))
}

/// Build an async SMTP transport from the given configuration.
///
/// Port 465 speaks implicit TLS from the first byte; every other port opens
/// plaintext and upgrades with STARTTLS.
fn build_transport(
    config: &SmtpConfig,
) -> Result<AsyncSmtpTransport<Tokio1Executor>, ProviderError> {
    let builder = if config.implicit_tls() {
        AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| ProviderError::Configuration(format!("SMTP TLS relay error: {e}")))?
    } else {
        AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| ProviderError::Configuration(format!("SMTP STARTTLS relay error: {e}")))?
    };

    let builder = builder.port(config.smtp_port);

    let builder = if let (Some(user), Some(pass)) = (&config.username, &config.password) {
        builder.credentials(Credentials::new(user.clone(), pass.clone()))
    } else {
        builder
    };

    Ok(builder.build())
}

/// Map a lettre SMTP error to the appropriate `ProviderError` variant.
fn map_smtp_error(error: &lettre::transport::smtp::Error) -> ProviderError {
    let message = error.to_string();

    if error.is_transient() {
        ProviderError::Connection(format!("transient SMTP error: {message}"))
    } else if error.is_permanent() {
        ProviderError::DispatchFailed(format!("permanent SMTP error: {message}"))
    } else {
        ProviderError::Connection(format!("SMTP error: {message}"))
    }
}

#[cfg(test)]
mod tests {
    use commhub_core::Channel;

    use super::*;

    fn test_config() -> SmtpConfig {
        SmtpConfig::new("smtp.example.com").with_credentials("user", "pass")
    }

    fn test_payload() -> EmailPayload {
        EmailPayload {
            from: "sender@example.com".to_owned(),
            to: "recipient@example.com".to_owned(),
            subject: "Test Subject".to_owned(),
            body: "Hello, world!".to_owned(),
        }
    }

    #[test]
    fn build_message_plain_text() {
        assert!(build_message(&test_payload()).is_ok());
    }

    #[test]
    fn build_message_invalid_from() {
        let mut payload = test_payload();
        payload.from = "not-valid".to_owned();
        let err = build_message(&payload).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidMessage(_)));
    }

    #[test]
    fn build_message_invalid_to() {
        let mut payload = test_payload();
        payload.to = "not-valid".to_owned();
        let err = build_message(&payload).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidMessage(_)));
    }

    #[test]
    fn build_message_empty_subject_and_body() {
        let mut payload = test_payload();
        payload.subject = String::new();
        payload.body = String::new();
        assert!(build_message(&payload).is_ok());
    }

    #[tokio::test]
    async fn build_transport_starttls() {
        assert!(build_transport(&test_config()).is_ok());
    }

    #[tokio::test]
    async fn build_transport_implicit_tls() {
        let config = test_config().with_port(465);
        assert!(build_transport(&config).is_ok());
    }

    #[tokio::test]
    async fn provider_name() {
        let provider = EmailProvider::new(test_config()).unwrap();
        assert_eq!(Provider::name(&provider), "email");
    }

    #[tokio::test]
    async fn dispatch_rejects_unparseable_payload() {
        let provider = EmailProvider::new(test_config()).unwrap();
        let request = DispatchRequest::new(Channel::Email, serde_json::json!({"subject": "no recipient"}));
        let err = Provider::dispatch(&provider, &request).await.unwrap_err();
        assert!(matches!(err, ProviderError::InvalidMessage(_)));
    }

    #[tokio::test]
    async fn dispatch_rejects_invalid_recipient_before_any_network() {
        let provider = EmailProvider::new(test_config()).unwrap();
        let request = DispatchRequest::new(
            Channel::Email,
            serde_json::json!({
                "from": "sender@example.com",
                "to": "not an address",
                "subject": "x",
                "body": "y",
            }),
        );
        let err = Provider::dispatch(&provider, &request).await.unwrap_err();
        assert!(matches!(err, ProviderError::InvalidMessage(_)));
    }

    #[tokio::test]
    async fn provider_debug_hides_transport() {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous("localhost")
            .port(2525)
            .build();
        let provider = EmailProvider::with_transport(test_config(), transport);
        let debug = format!("{provider:?}");
        assert!(debug.contains("EmailProvider"));
        assert!(debug.contains("<AsyncSmtpTransport>"));
    }
}
