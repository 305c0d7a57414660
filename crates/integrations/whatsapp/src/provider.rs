use std::sync::Arc;

use chrono::Local;
use commhub_core::{DispatchReceipt, DispatchRequest};
use commhub_provider::{Provider, ProviderError};
use serde::Deserialize;
use tracing::{error, info, instrument};

use crate::launcher::{SystemLauncher, UrlLauncher};
use crate::schedule::{compose_url, next_occurrence, validate_phone};

/// WhatsApp provider that schedules one WhatsApp Web send.
///
/// Dispatching validates the payload, spawns a single timer task that opens
/// the prefilled `web.whatsapp.com/send` URL at the chosen hour/minute, and
/// returns immediately. Success means the schedule was accepted, not that the
/// message was delivered.
pub struct WhatsAppProvider {
    launcher: Arc<dyn UrlLauncher>,
}

/// Fields extracted from a WhatsApp dispatch payload.
#[derive(Debug, Deserialize)]
struct WhatsAppPayload {
    phone: Option<String>,
    message: Option<String>,
    hour: Option<u32>,
    minute: Option<u32>,
}

impl WhatsAppProvider {
    /// Create a provider that opens the URL in the system browser.
    #[must_use]
    pub fn new() -> Self {
        Self {
            launcher: Arc::new(SystemLauncher),
        }
    }

    /// Create a provider with a custom launcher (for testing).
    pub fn with_launcher(launcher: Arc<dyn UrlLauncher>) -> Self {
        Self { launcher }
    }
}

impl Default for WhatsAppProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for WhatsAppProvider {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "whatsapp"
    }

    #[instrument(skip(self, request), fields(request_id = %request.id, provider = "whatsapp"))]
    async fn dispatch(
        &self,
        request: &DispatchRequest,
    ) -> Result<DispatchReceipt, ProviderError> {
        let payload: WhatsAppPayload = serde_json::from_value(request.payload.clone())
            .map_err(|e| ProviderError::InvalidMessage(format!("failed to parse payload: {e}")))?;

        let phone = payload
            .phone
            .ok_or_else(|| ProviderError::InvalidMessage("payload must contain a 'phone' number".into()))?;
        validate_phone(&phone)?;

        let message = payload
            .message
            .filter(|m| !m.trim().is_empty())
            .ok_or_else(|| ProviderError::InvalidMessage("message must not be empty".into()))?;

        let hour = payload
            .hour
            .ok_or_else(|| ProviderError::InvalidMessage("payload must contain an 'hour'".into()))?;
        let minute = payload
            .minute
            .ok_or_else(|| ProviderError::InvalidMessage("payload must contain a 'minute'".into()))?;

        let now = Local::now();
        let send_at = next_occurrence(&now, hour, minute)?;
        let delay = (send_at - now)
            .to_std()
            .map_err(|e| ProviderError::DispatchFailed(format!("invalid schedule delay: {e}")))?;

        let url = compose_url(&phone, &message);
        let launcher = Arc::clone(&self.launcher);
        let request_id = request.id;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match launcher.launch(&url) {
                Ok(()) => info!(%request_id, "opened WhatsApp Web for scheduled send"),
                Err(e) => error!(%request_id, error = %e, "scheduled WhatsApp send failed"),
            }
        });

        info!(send_at = %send_at.to_rfc3339(), "WhatsApp send scheduled");
        Ok(DispatchReceipt::scheduled(format!(
            "WhatsApp message scheduled for {hour:02}:{minute:02}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use commhub_core::{Channel, DispatchStatus};

    use super::*;

    #[derive(Default)]
    struct RecordingLauncher {
        launched: Mutex<Vec<String>>,
    }

    impl UrlLauncher for RecordingLauncher {
        fn launch(&self, url: &str) -> Result<(), ProviderError> {
            self.launched.lock().unwrap().push(url.to_owned());
            Ok(())
        }
    }

    fn test_provider() -> (WhatsAppProvider, Arc<RecordingLauncher>) {
        let launcher = Arc::new(RecordingLauncher::default());
        (
            WhatsAppProvider::with_launcher(Arc::clone(&launcher) as Arc<dyn UrlLauncher>),
            launcher,
        )
    }

    fn payload(phone: &str, hour: u32, minute: u32) -> serde_json::Value {
        serde_json::json!({
            "phone": phone,
            "message": "see you soon",
            "hour": hour,
            "minute": minute,
        })
    }

    #[tokio::test]
    async fn dispatch_returns_scheduled_receipt_immediately() {
        let (provider, launcher) = test_provider();
        let request = DispatchRequest::new(Channel::Whatsapp, payload("+15551234567", 23, 45));
        let receipt = Provider::dispatch(&provider, &request).await.unwrap();
        assert_eq!(receipt.status, DispatchStatus::Scheduled);
        assert_eq!(receipt.detail, "WhatsApp message scheduled for 23:45");
        // The timer has not fired; nothing was launched yet.
        assert!(launcher.launched.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn dispatch_rejects_invalid_hour() {
        let (provider, _launcher) = test_provider();
        let request = DispatchRequest::new(Channel::Whatsapp, payload("+15551234567", 24, 0));
        let err = Provider::dispatch(&provider, &request).await.unwrap_err();
        assert!(matches!(err, ProviderError::InvalidMessage(_)));
    }

    #[tokio::test]
    async fn dispatch_rejects_bad_phone() {
        let (provider, _launcher) = test_provider();
        let request = DispatchRequest::new(Channel::Whatsapp, payload("5551234567", 12, 0));
        let err = Provider::dispatch(&provider, &request).await.unwrap_err();
        assert!(matches!(err, ProviderError::InvalidMessage(_)));
    }

    #[tokio::test]
    async fn dispatch_rejects_empty_message() {
        let (provider, _launcher) = test_provider();
        let request = DispatchRequest::new(
            Channel::Whatsapp,
            serde_json::json!({"phone": "+15551234567", "message": " ", "hour": 12, "minute": 0}),
        );
        let err = Provider::dispatch(&provider, &request).await.unwrap_err();
        assert!(matches!(err, ProviderError::InvalidMessage(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn timer_fires_and_launches_url() {
        let (provider, launcher) = test_provider();
        // Use a time guaranteed to be within the next 24h; advance well past it.
        let request = DispatchRequest::new(Channel::Whatsapp, payload("+15551234567", 0, 0));
        Provider::dispatch(&provider, &request).await.unwrap();

        tokio::time::sleep(std::time::Duration::from_secs(60 * 60 * 25)).await;

        let launched = launcher.launched.lock().unwrap();
        assert_eq!(launched.len(), 1);
        assert!(launched[0].starts_with("https://web.whatsapp.com/send?phone=%2B15551234567"));
    }
}
