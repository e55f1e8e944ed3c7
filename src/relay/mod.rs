//! Relay layer: invocation payload handling and result mapping.
//!
//! This is the whole request contract: check that both fields arrived, hand
//! the message to the provider, and fold every outcome into one
//! [`SendResult`]. Provider errors stop here; nothing is retried or rethrown.

use serde::Deserialize;
use tracing::{error, info};

use crate::client::MessageProvider;
use crate::domain::{SendRequest, SendResult};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
/// Invocation payload. Both fields tolerate absent and `null` values so that
/// malformed events still resolve to a 400 result instead of a decode error.
pub struct SendSmsEvent {
    #[serde(rename = "toPhoneNumber")]
    pub to_phone_number: Option<String>,
    #[serde(rename = "bodyMessage")]
    pub body_message: Option<String>,
}

/// Wraps a [`MessageProvider`] and maps its outcome into the uniform result shape.
pub struct MessageSender<P> {
    provider: P,
}

impl<P: MessageProvider> MessageSender<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Deliver one validated request and fold the outcome into a [`SendResult`].
    ///
    /// The sent body is emitted on success and the full error detail on
    /// failure; both go to the tracing subscriber installed by the binary.
    pub async fn send(&self, request: &SendRequest) -> SendResult {
        match self.provider.create_message(request).await {
            Ok(confirmation) => {
                info!(
                    sid = confirmation.sid.as_deref(),
                    body = confirmation
                        .body
                        .as_deref()
                        .unwrap_or(request.body().as_str()),
                    "message sent"
                );
                SendResult::sent()
            }
            Err(err) => {
                error!(error = %err, to = request.destination().raw(), "message send failed");
                SendResult::provider_failure(err)
            }
        }
    }
}

/// Handle one invocation: validate presence of both fields, then delegate.
///
/// Absent, `null`, and empty values are all rejected with the same 400 result,
/// without touching the provider. Anything else is sent, and the sender's
/// result is returned verbatim.
pub async fn handle<P: MessageProvider>(
    event: SendSmsEvent,
    sender: &MessageSender<P>,
) -> SendResult {
    let Some(request) = build_request(&event) else {
        return SendResult::invalid_input();
    };
    sender.send(&request).await
}

fn build_request(event: &SendSmsEvent) -> Option<SendRequest> {
    let to = event.to_phone_number.as_deref()?;
    let body = event.body_message.as_deref()?;
    SendRequest::new(to, body).ok()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::client::{BoxFuture, ProviderError};
    use crate::domain::MessageConfirmation;

    use super::*;

    #[derive(Debug, Clone)]
    enum FakeOutcome {
        Confirm(MessageConfirmation),
        Fail {
            code: Option<i64>,
            message: Option<String>,
        },
    }

    #[derive(Clone)]
    struct FakeProvider {
        outcome: FakeOutcome,
        calls: Arc<Mutex<Vec<SendRequest>>>,
    }

    impl FakeProvider {
        fn succeeding() -> Self {
            Self {
                outcome: FakeOutcome::Confirm(MessageConfirmation {
                    sid: Some("SMa1b2c3".to_owned()),
                    status: Some("queued".to_owned()),
                    body: Some("hello".to_owned()),
                }),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn failing(code: i64, message: &str) -> Self {
            Self {
                outcome: FakeOutcome::Fail {
                    code: Some(code),
                    message: Some(message.to_owned()),
                },
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn calls(&self) -> Vec<SendRequest> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl MessageProvider for FakeProvider {
        fn create_message<'a>(
            &'a self,
            request: &'a SendRequest,
        ) -> BoxFuture<'a, Result<MessageConfirmation, ProviderError>> {
            Box::pin(async move {
                self.calls.lock().unwrap().push(request.clone());
                match &self.outcome {
                    FakeOutcome::Confirm(confirmation) => Ok(confirmation.clone()),
                    FakeOutcome::Fail { code, message } => Err(ProviderError::Api {
                        code: *code,
                        message: message.clone(),
                    }),
                }
            })
        }
    }

    fn event(to: Option<&str>, body: Option<&str>) -> SendSmsEvent {
        SendSmsEvent {
            to_phone_number: to.map(str::to_owned),
            body_message: body.map(str::to_owned),
        }
    }

    #[tokio::test]
    async fn missing_phone_number_is_rejected_without_provider_call() {
        let provider = FakeProvider::succeeding();
        let sender = MessageSender::new(provider.clone());

        for to in [None, Some(""), Some("   ")] {
            let result = handle(event(to, Some("hello")), &sender).await;
            assert_eq!(result, SendResult::invalid_input());
        }
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn missing_body_is_rejected_without_provider_call() {
        let provider = FakeProvider::succeeding();
        let sender = MessageSender::new(provider.clone());

        for body in [None, Some(""), Some("   ")] {
            let result = handle(event(Some("+15551234567"), body), &sender).await;
            assert_eq!(result, SendResult::invalid_input());
        }
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn valid_event_with_succeeding_provider_returns_200() {
        let provider = FakeProvider::succeeding();
        let sender = MessageSender::new(provider.clone());

        let result = handle(event(Some("+15551234567"), Some("hello")), &sender).await;
        assert_eq!(result.status, 200);
        assert_eq!(result.message, "Message sent successfully!");

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].destination().raw(), "+15551234567");
        assert_eq!(calls[0].body().as_str(), "hello");
    }

    #[tokio::test]
    async fn failing_provider_returns_500_with_error_detail() {
        let provider = FakeProvider::failing(21211, "invalid 'To' number");
        let sender = MessageSender::new(provider.clone());

        let result = handle(event(Some("+15551234567"), Some("hello")), &sender).await;
        assert_eq!(result.status, 500);
        assert_eq!(
            result.message,
            ProviderError::Api {
                code: Some(21211),
                message: Some("invalid 'To' number".to_owned()),
            }
            .to_string()
        );
        assert_eq!(provider.calls().len(), 1);
    }

    #[test]
    fn event_deserializes_with_absent_and_null_fields() {
        let full: SendSmsEvent =
            serde_json::from_str(r#"{"toPhoneNumber": "+15551234567", "bodyMessage": "hi"}"#)
                .unwrap();
        assert_eq!(full.to_phone_number.as_deref(), Some("+15551234567"));
        assert_eq!(full.body_message.as_deref(), Some("hi"));

        let nulls: SendSmsEvent =
            serde_json::from_str(r#"{"toPhoneNumber": null, "bodyMessage": null}"#).unwrap();
        assert_eq!(nulls.to_phone_number, None);
        assert_eq!(nulls.body_message, None);

        let empty: SendSmsEvent = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.to_phone_number, None);
        assert_eq!(empty.body_message, None);
    }
}
