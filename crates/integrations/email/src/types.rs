use serde::{Deserialize, Serialize};

/// Message fields extracted from an email dispatch payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailPayload {
    /// Sender email address.
    pub from: String,
    /// Recipient email address.
    pub to: String,
    /// Subject line.
    #[serde(default)]
    pub subject: String,
    /// Plain-text body.
    #[serde(default)]
    pub body: String,
}
