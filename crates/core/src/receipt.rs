use serde::{Deserialize, Serialize};

/// How a dispatch concluded on the provider side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchStatus {
    /// The provider accepted the message.
    Sent,
    /// The channel is simulated; nothing left the process.
    Simulated,
    /// The send was scheduled for a later wall-clock time.
    Scheduled,
}

/// Receipt returned by a provider after one successful dispatch.
///
/// Failures never produce a receipt; they surface as provider errors and are
/// rendered as a single error banner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchReceipt {
    /// Outcome category.
    pub status: DispatchStatus,

    /// Human-readable summary shown in the result banner.
    pub detail: String,

    /// Provider-returned identifier (message SID, call SID, post id), when
    /// the provider supplies one.
    pub reference: Option<String>,
}

impl DispatchReceipt {
    /// Receipt for a message the provider accepted.
    #[must_use]
    pub fn sent(detail: impl Into<String>) -> Self {
        Self {
            status: DispatchStatus::Sent,
            detail: detail.into(),
            reference: None,
        }
    }

    /// Receipt for a simulated channel that performed no I/O.
    #[must_use]
    pub fn simulated(detail: impl Into<String>) -> Self {
        Self {
            status: DispatchStatus::Simulated,
            detail: detail.into(),
            reference: None,
        }
    }

    /// Receipt for a send scheduled at a later time.
    #[must_use]
    pub fn scheduled(detail: impl Into<String>) -> Self {
        Self {
            status: DispatchStatus::Scheduled,
            detail: detail.into(),
            reference: None,
        }
    }

    /// Attach the provider-returned identifier.
    #[must_use]
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }
}
