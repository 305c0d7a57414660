use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A communication channel the dashboard can dispatch through.
///
/// Each channel corresponds to exactly one input form and one provider call
/// path. The `demo` tab of the dashboard is not a channel: it never
/// dispatches anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// Plain-text email over SMTP.
    Email,
    /// SMS via the Twilio Messages API.
    Sms,
    /// Voice call via the Twilio Calls API (TwiML callback URL).
    Call,
    /// LinkedIn post (simulated, no network I/O).
    Linkedin,
    /// Tweet via the Twitter/X v2 API.
    Twitter,
    /// Facebook feed post via the Graph API.
    Facebook,
    /// Instagram post (simulated, no network I/O).
    Instagram,
    /// WhatsApp Web send scheduled for a chosen hour/minute.
    Whatsapp,
}

impl Channel {
    /// All channels, in the order the dashboard lists them.
    pub const ALL: [Self; 8] = [
        Self::Email,
        Self::Sms,
        Self::Call,
        Self::Linkedin,
        Self::Twitter,
        Self::Facebook,
        Self::Instagram,
        Self::Whatsapp,
    ];

    /// URL/serde identifier for this channel (e.g. `"sms"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Sms => "sms",
            Self::Call => "call",
            Self::Linkedin => "linkedin",
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Whatsapp => "whatsapp",
        }
    }

    /// Human-readable label shown in the dashboard navigation.
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Sms => "SMS",
            Self::Call => "Phone Call",
            Self::Linkedin => "LinkedIn",
            Self::Twitter => "Twitter/X",
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::Whatsapp => "WhatsApp",
        }
    }

    /// Whether this channel is simulated: it renders an informational
    /// placeholder and never performs network I/O.
    pub fn is_simulated(self) -> bool {
        matches!(self, Self::Linkedin | Self::Instagram)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known channel.
#[derive(Debug, Clone, Error)]
#[error("unknown channel: {0}")]
pub struct ChannelParseError(pub String);

impl FromStr for Channel {
    type Err = ChannelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ChannelParseError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_channel() {
        for channel in Channel::ALL {
            let parsed: Channel = channel.as_str().parse().unwrap();
            assert_eq!(parsed, channel);
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "telegraph".parse::<Channel>().unwrap_err();
        assert_eq!(err.to_string(), "unknown channel: telegraph");
    }

    #[test]
    fn simulated_channels() {
        assert!(Channel::Linkedin.is_simulated());
        assert!(Channel::Instagram.is_simulated());
        assert!(!Channel::Email.is_simulated());
        assert!(!Channel::Twitter.is_simulated());
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Channel::Whatsapp).unwrap();
        assert_eq!(json, "\"whatsapp\"");
        let parsed: Channel = serde_json::from_str("\"sms\"").unwrap();
        assert_eq!(parsed, Channel::Sms);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Channel::Call.to_string(), "call");
        assert_eq!(Channel::Facebook.to_string(), "facebook");
    }
}
