use commhub_core::{DispatchReceipt, DispatchRequest};
use tracing::info;

use crate::error::ProviderError;
use crate::provider::Provider;

/// A provider that logs the request and returns an informational placeholder
/// receipt without performing any network I/O.
///
/// Backs the LinkedIn and Instagram forms, whose real posting flows require
/// OAuth app review the dashboard does not carry. Regardless of the submitted
/// credentials or content, nothing leaves the process.
pub struct SimulatedProvider {
    name: String,
    note: String,
}

impl SimulatedProvider {
    /// Create a new `SimulatedProvider` with the given name and the note
    /// shown in the result banner.
    pub fn new(name: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            note: note.into(),
        }
    }
}

impl Provider for SimulatedProvider {
    fn name(&self) -> &str {
        &self.name
    }

    #[allow(clippy::unused_async)]
    async fn dispatch(
        &self,
        request: &DispatchRequest,
    ) -> Result<DispatchReceipt, ProviderError> {
        info!(
            provider = %self.name,
            request_id = %request.id,
            channel = %request.channel,
            "simulated provider handled dispatch"
        );
        Ok(DispatchReceipt::simulated(self.note.clone()))
    }
}

#[cfg(test)]
mod tests {
    use commhub_core::{Channel, DispatchStatus};

    use super::*;

    #[test]
    fn simulated_provider_name() {
        let provider = SimulatedProvider::new("linkedin", "post would be published to LinkedIn");
        assert_eq!(Provider::name(&provider), "linkedin");
    }

    #[tokio::test]
    async fn dispatch_returns_placeholder_receipt() {
        let provider = SimulatedProvider::new("instagram", "image would be posted to Instagram");
        let request = DispatchRequest::new(
            Channel::Instagram,
            serde_json::json!({"caption": "sunset", "username": "someone"}),
        );
        let receipt = Provider::dispatch(&provider, &request).await.unwrap();
        assert_eq!(receipt.status, DispatchStatus::Simulated);
        assert_eq!(receipt.detail, "image would be posted to Instagram");
        assert!(receipt.reference.is_none());
    }

    #[tokio::test]
    async fn dispatch_succeeds_for_any_payload() {
        // The simulated path must not inspect or validate its input.
        let provider = SimulatedProvider::new("linkedin", "placeholder");
        let request = DispatchRequest::new(Channel::Linkedin, serde_json::Value::Null);
        assert!(Provider::dispatch(&provider, &request).await.is_ok());
    }
}
