//! Process-wide configuration, read once at startup.

use std::env;

#[derive(Clone, Debug)]
/// Twilio account settings for the relay.
///
/// Values are taken from the environment as-is and are not validated here; a
/// missing SID or token surfaces as an authentication failure on the first
/// provider call.
pub struct RelayConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub sender_number: String,
}

impl RelayConfig {
    /// Read `TWILIO_ACCOUNT_SID`, `TWILIO_AUTH_TOKEN`, and
    /// `TWILIO_PHONE_NUMBER`, defaulting each to an empty string.
    pub fn from_env() -> Self {
        Self {
            account_sid: env::var("TWILIO_ACCOUNT_SID").unwrap_or_default(),
            auth_token: env::var("TWILIO_AUTH_TOKEN").unwrap_or_default(),
            sender_number: env::var("TWILIO_PHONE_NUMBER").unwrap_or_default(),
        }
    }
}
