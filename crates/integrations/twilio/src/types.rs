use serde::{Deserialize, Serialize};

/// Form-encoded request body for the Twilio Messages API.
///
/// Twilio expects `application/x-www-form-urlencoded` rather than JSON.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    /// Destination phone number in E.164 format.
    #[serde(rename = "To")]
    pub to: String,

    /// Sender phone number.
    #[serde(rename = "From")]
    pub from: String,

    /// Message body text.
    #[serde(rename = "Body")]
    pub body: String,
}

/// Form-encoded request body for the Twilio Calls API.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCallRequest {
    /// Destination phone number in E.164 format.
    #[serde(rename = "To")]
    pub to: String,

    /// Caller phone number.
    #[serde(rename = "From")]
    pub from: String,

    /// TwiML callback URL Twilio fetches to drive the call.
    #[serde(rename = "Url")]
    pub url: String,
}

/// Response from the Twilio Messages API.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResource {
    /// Message SID (unique identifier).
    pub sid: Option<String>,

    /// Message status (e.g., `"queued"`, `"sent"`, `"delivered"`).
    pub status: Option<String>,

    /// Twilio error code (present on failure).
    pub error_code: Option<i32>,

    /// Twilio error message (present on failure).
    pub error_message: Option<String>,
}

/// Response from the Twilio Calls API. Same envelope as messages.
#[derive(Debug, Clone, Deserialize)]
pub struct CallResource {
    /// Call SID (unique identifier).
    pub sid: Option<String>,

    /// Call status (e.g., `"queued"`, `"ringing"`, `"in-progress"`).
    pub status: Option<String>,

    /// Twilio error code (present on failure).
    pub error_code: Option<i32>,

    /// Twilio error message (present on failure).
    pub error_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_message_request_serializes_form_encoded() {
        let req = SendMessageRequest {
            to: "+15559876543".into(),
            from: "+15551234567".into(),
            body: "Hello from Commhub!".into(),
        };
        let encoded = serde_urlencoded::to_string(&req).unwrap();
        assert!(encoded.contains("To=%2B15559876543"));
        assert!(encoded.contains("From=%2B15551234567"));
        assert!(encoded.contains("Body=Hello+from+Commhub%21"));
    }

    #[test]
    fn create_call_request_serializes_form_encoded() {
        let req = CreateCallRequest {
            to: "+15559876543".into(),
            from: "+15551234567".into(),
            url: "http://demo.twilio.com/docs/voice.xml".into(),
        };
        let encoded = serde_urlencoded::to_string(&req).unwrap();
        assert!(encoded.contains("Url=http%3A%2F%2Fdemo.twilio.com%2Fdocs%2Fvoice.xml"));
    }

    #[test]
    fn message_resource_deserializes_success() {
        let json = r#"{"sid":"SM123","status":"queued","error_code":null,"error_message":null}"#;
        let resp: MessageResource = serde_json::from_str(json).unwrap();
        assert_eq!(resp.sid.as_deref(), Some("SM123"));
        assert_eq!(resp.status.as_deref(), Some("queued"));
        assert!(resp.error_code.is_none());
    }

    #[test]
    fn message_resource_deserializes_error() {
        let json = r#"{"sid":null,"status":null,"error_code":21211,"error_message":"Invalid 'To' Phone Number"}"#;
        let resp: MessageResource = serde_json::from_str(json).unwrap();
        assert_eq!(resp.error_code, Some(21211));
        assert_eq!(
            resp.error_message.as_deref(),
            Some("Invalid 'To' Phone Number")
        );
    }

    #[test]
    fn call_resource_deserializes_success() {
        let json = r#"{"sid":"CA456","status":"queued"}"#;
        let resp: CallResource = serde_json::from_str(json).unwrap();
        assert_eq!(resp.sid.as_deref(), Some("CA456"));
    }
}
