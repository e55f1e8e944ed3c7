use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Provider acknowledgement for an accepted message.
pub struct MessageConfirmation {
    pub sid: Option<String>,
    pub status: Option<String>,
    pub body: Option<String>,
}

/// Uniform invocation result: an HTTP-style status code plus a message.
///
/// Every invocation resolves to exactly one of three shapes:
/// - `200` with [`SendResult::SENT`],
/// - `400` with [`SendResult::INVALID_INPUT`],
/// - `500` with the provider error detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendResult {
    pub status: u16,
    pub message: String,
}

impl SendResult {
    /// Message returned when the provider accepts the send.
    pub const SENT: &'static str = "Message sent successfully!";

    /// Message returned when either input field is missing or empty.
    pub const INVALID_INPUT: &'static str = "Phone number and message cannot be null";

    /// The 200 success shape.
    pub fn sent() -> Self {
        Self {
            status: 200,
            message: Self::SENT.to_owned(),
        }
    }

    /// The 400 validation-failure shape.
    pub fn invalid_input() -> Self {
        Self {
            status: 400,
            message: Self::INVALID_INPUT.to_owned(),
        }
    }

    /// The 500 provider-failure shape, carrying the error detail verbatim.
    pub fn provider_failure(detail: impl ToString) -> Self {
        Self {
            status: 500,
            message: detail.to_string(),
        }
    }
}
