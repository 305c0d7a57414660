//! Per-channel form bodies.
//!
//! One struct per dashboard form; each dispatch route deserializes only its
//! own struct, so a submission can never reach another channel's call path.

use serde::Deserialize;

/// Email form fields.
#[derive(Debug, Deserialize)]
pub struct EmailForm {
    pub sender_email: String,
    pub sender_password: String,
    pub recipient_email: String,
    #[serde(default)]
    pub subject: String,
    pub smtp_server: String,
    pub smtp_port: u16,
    #[serde(default)]
    pub message: String,
}

/// SMS form fields.
#[derive(Debug, Deserialize)]
pub struct SmsForm {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
    pub to_number: String,
    #[serde(default)]
    pub message: String,
}

/// Phone call form fields.
#[derive(Debug, Deserialize)]
pub struct CallForm {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
    pub to_number: String,
    pub twiml_url: String,
}

/// LinkedIn form fields (simulated path; credentials are never used).
#[derive(Debug, Deserialize)]
pub struct LinkedinForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub content: String,
}

/// Twitter/X form fields.
#[derive(Debug, Deserialize)]
pub struct TwitterForm {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
    #[serde(default)]
    pub tweet: String,
}

/// Facebook form fields.
#[derive(Debug, Deserialize)]
pub struct FacebookForm {
    pub access_token: String,
    /// Optional page id; empty means "post to my feed".
    #[serde(default)]
    pub page_id: String,
    #[serde(default)]
    pub message: String,
}

/// Instagram form fields (simulated path; the image is accepted but ignored).
#[derive(Debug, Deserialize)]
pub struct InstagramForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// WhatsApp form fields.
#[derive(Debug, Deserialize)]
pub struct WhatsAppForm {
    pub phone_number: String,
    #[serde(default)]
    pub message: String,
    pub hour: u32,
    pub minute: u32,
}

/// Demo quick-test form fields.
#[derive(Debug, Deserialize)]
pub struct DemoTestForm {
    pub test_type: String,
    #[serde(default)]
    pub target: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_form_deserializes_from_urlencoded() {
        let body = "sender_email=me%40example.com&sender_password=pw&recipient_email=you%40example.com&subject=Hi&smtp_server=smtp.gmail.com&smtp_port=587&message=Hello";
        let form: EmailForm = serde_urlencoded::from_str(body).unwrap();
        assert_eq!(form.smtp_server, "smtp.gmail.com");
        assert_eq!(form.smtp_port, 587);
    }

    #[test]
    fn facebook_form_page_id_defaults_to_empty() {
        let body = "access_token=tok&message=hi";
        let form: FacebookForm = serde_urlencoded::from_str(body).unwrap();
        assert!(form.page_id.is_empty());
    }

    #[test]
    fn whatsapp_form_requires_schedule_fields() {
        let body = "phone_number=%2B15551234567&message=hi";
        let result: Result<WhatsAppForm, _> = serde_urlencoded::from_str(body);
        assert!(result.is_err());
    }
}
