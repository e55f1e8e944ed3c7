use crate::domain::validation::ValidationError;
use crate::domain::value::{MessageText, RawPhoneNumber};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A validated request to deliver one SMS to one destination.
pub struct SendRequest {
    destination: RawPhoneNumber,
    body: MessageText,
}

impl SendRequest {
    /// Build a request from raw input, validating that both fields are non-empty.
    pub fn new(
        destination: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            destination: RawPhoneNumber::new(destination)?,
            body: MessageText::new(body)?,
        })
    }

    /// Build a request from already-validated domain values.
    pub fn from_parts(destination: RawPhoneNumber, body: MessageText) -> Self {
        Self { destination, body }
    }

    pub fn destination(&self) -> &RawPhoneNumber {
        &self.destination
    }

    pub fn body(&self) -> &MessageText {
        &self.body
    }
}
