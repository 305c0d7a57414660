//! Send-time arithmetic and WhatsApp Web URL composition.

use chrono::{DateTime, Duration, TimeZone, Timelike};
use commhub_provider::ProviderError;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

/// The next wall-clock occurrence of `hour:minute` at or after `now`.
///
/// A time that already passed today schedules for tomorrow, mirroring how the
/// original dashboard treats its hour/minute pickers.
pub fn next_occurrence<Tz: TimeZone>(
    now: &DateTime<Tz>,
    hour: u32,
    minute: u32,
) -> Result<DateTime<Tz>, ProviderError> {
    if hour > 23 {
        return Err(ProviderError::InvalidMessage(format!(
            "hour must be between 0 and 23, got {hour}"
        )));
    }
    if minute > 59 {
        return Err(ProviderError::InvalidMessage(format!(
            "minute must be between 0 and 59, got {minute}"
        )));
    }

    let today = now
        .with_hour(hour)
        .and_then(|t| t.with_minute(minute))
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .ok_or_else(|| {
            ProviderError::InvalidMessage(format!("no valid local time at {hour:02}:{minute:02}"))
        })?;

    if today > *now {
        Ok(today)
    } else {
        Ok(today + Duration::days(1))
    }
}

/// Compose the prefilled WhatsApp Web send URL for a phone number and text.
pub fn compose_url(phone: &str, text: &str) -> String {
    format!(
        "https://web.whatsapp.com/send?phone={}&text={}",
        utf8_percent_encode(phone, NON_ALPHANUMERIC),
        utf8_percent_encode(text, NON_ALPHANUMERIC)
    )
}

/// Validate a phone number: leading `+`, then at least seven digits.
pub fn validate_phone(phone: &str) -> Result<(), ProviderError> {
    let digits = phone.strip_prefix('+').ok_or_else(|| {
        ProviderError::InvalidMessage(
            "phone number must start with '+' and a country code".into(),
        )
    })?;

    if digits.len() < 7 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ProviderError::InvalidMessage(format!(
            "phone number '{phone}' is not a valid E.164 number"
        )));
    }

    Ok(())
}
