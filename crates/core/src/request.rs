use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::channel::Channel;

/// A single outbound dispatch, built fresh from one form submission.
///
/// The payload is carried as opaque JSON; each provider deserializes the
/// fields it needs and rejects what it cannot parse. Requests are never
/// stored: they exist from form submission until the outcome is rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchRequest {
    /// Unique request identifier, used only for log correlation.
    pub id: Uuid,

    /// Channel this request targets.
    pub channel: Channel,

    /// Provider-specific message fields.
    pub payload: serde_json::Value,

    /// When the form was submitted.
    pub created_at: DateTime<Utc>,
}

impl DispatchRequest {
    /// Create a request for the given channel. Generates a UUID-v4 id and
    /// sets `created_at` to now.
    #[must_use]
    pub fn new(channel: Channel, payload: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            channel,
            payload,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_generates_unique_ids() {
        let a = DispatchRequest::new(Channel::Email, serde_json::json!({"to": "a@example.com"}));
        let b = DispatchRequest::new(Channel::Email, serde_json::json!({"to": "b@example.com"}));
        assert_ne!(a.id, b.id);
        assert_eq!(a.channel, Channel::Email);
    }

    #[test]
    fn payload_is_carried_verbatim() {
        let payload = serde_json::json!({"to": "+15551234567", "body": "hi"});
        let request = DispatchRequest::new(Channel::Sms, payload.clone());
        assert_eq!(request.payload, payload);
    }
}
