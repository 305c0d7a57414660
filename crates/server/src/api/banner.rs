use commhub_core::{DispatchReceipt, DispatchStatus};
use commhub_provider::ProviderError;
use serde::Serialize;

/// The single result banner rendered after a dispatch.
///
/// Every outcome collapses into one of three kinds, exactly as the original
/// dashboard rendered them: a green success box, a blue informational box for
/// simulated channels, or a red error box with the underlying error text.
#[derive(Debug, Clone, Serialize)]
pub struct Banner {
    /// CSS class / banner flavor: `"success"`, `"info"`, or `"error"`.
    pub kind: &'static str,
    /// Message shown to the user.
    pub message: String,
}

impl Banner {
    /// Success banner with the given message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: "success",
            message: message.into(),
        }
    }

    /// Informational banner with the given message.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: "info",
            message: message.into(),
        }
    }

    /// Error banner with the given message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: "error",
            message: message.into(),
        }
    }

    /// Banner for a successful dispatch receipt.
    ///
    /// The provider-returned reference is appended when the detail text does
    /// not already contain it, so a success banner always shows the
    /// identifier the provider handed back.
    pub fn from_receipt(receipt: &DispatchReceipt) -> Self {
        let mut message = receipt.detail.clone();
        if let Some(ref reference) = receipt.reference
            && !message.contains(reference.as_str())
        {
            message = format!("{message} (id: {reference})");
        }

        match receipt.status {
            DispatchStatus::Sent | DispatchStatus::Scheduled => Self::success(message),
            DispatchStatus::Simulated => Self::info(message),
        }
    }

    /// Banner for a failed dispatch.
    pub fn from_error(error: &ProviderError) -> Self {
        Self::error(error.to_string())
    }
}
