//! Serverless SMS relay backed by the Twilio Messages API.
//!
//! The crate is layered the same way top to bottom: a domain layer of strong
//! types, a transport layer for wire-format details, a client layer wrapping
//! the provider call, and a thin relay layer that turns an invocation payload
//! into exactly one `{status, message}` result.
//!
//! ```rust,no_run
//! use sms_relay::{MessageSender, SendSmsEvent, SenderNumber, TwilioAuth, TwilioClient, handle};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sms_relay::ValidationError> {
//!     let auth = TwilioAuth::new("ACxxxxxxxx", "token");
//!     let from = SenderNumber::new("+15550001111")?;
//!     let sender = MessageSender::new(TwilioClient::new(auth, from));
//!     let event = SendSmsEvent {
//!         to_phone_number: Some("+15551234567".into()),
//!         body_message: Some("hello".into()),
//!     };
//!     let result = handle(event, &sender).await;
//!     println!("{}: {}", result.status, result.message);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod domain;
pub mod relay;
mod transport;

pub use client::{
    BoxFuture, MessageProvider, ProviderError, TwilioAuth, TwilioClient, TwilioClientBuilder,
};
pub use config::RelayConfig;
pub use domain::{
    MessageConfirmation, MessageText, PhoneNumber, RawPhoneNumber, SendRequest, SendResult,
    SenderNumber, ValidationError,
};
pub use relay::{MessageSender, SendSmsEvent, handle};
