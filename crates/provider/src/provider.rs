use async_trait::async_trait;
use commhub_core::{DispatchReceipt, DispatchRequest};

use crate::error::ProviderError;

/// Strongly-typed provider trait with native `async fn`.
///
/// The contract is the whole system: given one request carrying the submitted
/// credentials and message, perform exactly one outbound call and report a
/// receipt or an error. Providers live for a single form submission.
///
/// This trait is **not** object-safe because it uses native `async fn`
/// methods. If you need dynamic dispatch, use [`DynProvider`] instead --
/// every `Provider` automatically implements `DynProvider` via a blanket
/// implementation.
pub trait Provider: Send + Sync {
    /// Returns the unique name of this provider.
    fn name(&self) -> &str;

    /// Dispatch the given request and return a receipt.
    fn dispatch(
        &self,
        request: &DispatchRequest,
    ) -> impl std::future::Future<Output = Result<DispatchReceipt, ProviderError>> + Send;
}

/// Object-safe provider trait for use behind `Box<dyn DynProvider>`.
///
/// Uses [`macro@async_trait`] to enable dynamic dispatch of async methods.
/// You generally should not implement this trait directly -- instead
/// implement [`Provider`] and rely on the blanket implementation.
#[async_trait]
pub trait DynProvider: Send + Sync {
    /// Returns the unique name of this provider.
    fn name(&self) -> &str;

    /// Dispatch the given request and return a receipt.
    async fn dispatch(&self, request: &DispatchRequest)
    -> Result<DispatchReceipt, ProviderError>;
}

/// Blanket implementation: any type that implements [`Provider`] also
/// implements [`DynProvider`], bridging the static and dynamic dispatch
/// worlds.
#[async_trait]
impl<T: Provider + Sync> DynProvider for T {
    fn name(&self) -> &str {
        Provider::name(self)
    }

    async fn dispatch(
        &self,
        request: &DispatchRequest,
    ) -> Result<DispatchReceipt, ProviderError> {
        Provider::dispatch(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use commhub_core::{Channel, DispatchStatus};

    use super::*;

    /// A mock provider for testing the trait and blanket impl.
    struct MockProvider {
        provider_name: String,
        should_fail: bool,
    }

    impl MockProvider {
        fn new(name: &str, should_fail: bool) -> Self {
            Self {
                provider_name: name.to_owned(),
                should_fail,
            }
        }
    }

    impl Provider for MockProvider {
        fn name(&self) -> &str {
            &self.provider_name
        }

        async fn dispatch(
            &self,
            _request: &DispatchRequest,
        ) -> Result<DispatchReceipt, ProviderError> {
            if self.should_fail {
                return Err(ProviderError::DispatchFailed("mock failure".into()));
            }
            Ok(DispatchReceipt::sent("mock sent").with_reference("MOCK1"))
        }
    }

    #[tokio::test]
    async fn provider_dispatch_success() {
        let provider = MockProvider::new("test", false);
        let request = DispatchRequest::new(Channel::Sms, serde_json::Value::Null);
        let receipt = Provider::dispatch(&provider, &request).await.unwrap();
        assert_eq!(receipt.status, DispatchStatus::Sent);
        assert_eq!(receipt.reference.as_deref(), Some("MOCK1"));
    }

    #[tokio::test]
    async fn provider_dispatch_failure() {
        let provider = MockProvider::new("test", true);
        let request = DispatchRequest::new(Channel::Sms, serde_json::Value::Null);
        let err = Provider::dispatch(&provider, &request).await.unwrap_err();
        assert!(matches!(err, ProviderError::DispatchFailed(_)));
    }

    #[tokio::test]
    async fn blanket_dyn_provider_impl() {
        let provider: Box<dyn DynProvider> = Box::new(MockProvider::new("dyn-test", false));
        assert_eq!(provider.name(), "dyn-test");

        let request = DispatchRequest::new(Channel::Email, serde_json::Value::Null);
        let receipt = provider.dispatch(&request).await.unwrap();
        assert_eq!(receipt.status, DispatchStatus::Sent);
    }
}
