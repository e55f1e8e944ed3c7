use serde::Deserialize;

use crate::domain::{MessageConfirmation, MessageText, RawPhoneNumber, SendRequest, SenderNumber};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
struct CreateMessageJsonResponse {
    #[serde(default)]
    sid: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    body: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorJsonResponse {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Decoded Twilio error body (returned with a non-2xx HTTP status).
pub struct ApiErrorBody {
    pub code: Option<i64>,
    pub message: Option<String>,
}

/// Encode the `Messages.json` form for one message: exactly `To`, `From`, `Body`.
pub fn encode_create_message_form(
    request: &SendRequest,
    from: &SenderNumber,
) -> Vec<(String, String)> {
    vec![
        (
            RawPhoneNumber::FIELD.to_owned(),
            request.destination().raw().to_owned(),
        ),
        (SenderNumber::FIELD.to_owned(), from.as_str().to_owned()),
        (
            MessageText::FIELD.to_owned(),
            request.body().as_str().to_owned(),
        ),
    ]
}

/// Decode a 2xx `Messages.json` response body into a [`MessageConfirmation`].
pub fn decode_create_message_json_response(
    body: &str,
) -> Result<MessageConfirmation, TransportError> {
    let parsed: CreateMessageJsonResponse = serde_json::from_str(body)?;
    Ok(MessageConfirmation {
        sid: parsed.sid,
        status: parsed.status,
        body: parsed.body,
    })
}

/// Decode a non-2xx error body into Twilio's `{code, message}` shape.
pub fn decode_error_json_response(body: &str) -> Result<ApiErrorBody, TransportError> {
    let parsed: ErrorJsonResponse = serde_json::from_str(body)?;
    Ok(ApiErrorBody {
        code: parsed.code,
        message: parsed.message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SendRequest {
        SendRequest::new("+15551234567", "hello").unwrap()
    }

    #[test]
    fn form_carries_to_from_body_and_nothing_else() {
        let from = SenderNumber::new("+15550001111").unwrap();
        let params = encode_create_message_form(&request(), &from);
        assert_eq!(
            params,
            vec![
                ("To".to_owned(), "+15551234567".to_owned()),
                ("From".to_owned(), "+15550001111".to_owned()),
                ("Body".to_owned(), "hello".to_owned()),
            ]
        );
    }

    #[test]
    fn decodes_accepted_message_response() {
        let json = r#"
        {
          "sid": "SMa1b2c3",
          "status": "queued",
          "body": "hello",
          "error_code": null,
          "error_message": null
        }
        "#;

        let confirmation = decode_create_message_json_response(json).unwrap();
        assert_eq!(confirmation.sid.as_deref(), Some("SMa1b2c3"));
        assert_eq!(confirmation.status.as_deref(), Some("queued"));
        assert_eq!(confirmation.body.as_deref(), Some("hello"));
    }

    #[test]
    fn tolerates_missing_optional_fields() {
        let confirmation = decode_create_message_json_response("{}").unwrap();
        assert_eq!(confirmation.sid, None);
        assert_eq!(confirmation.status, None);
        assert_eq!(confirmation.body, None);
    }

    #[test]
    fn decodes_error_body() {
        let json = r#"
        {
          "code": 21211,
          "message": "The 'To' number +1555 is not a valid phone number.",
          "more_info": "https://www.twilio.com/docs/errors/21211",
          "status": 400
        }
        "#;

        let error = decode_error_json_response(json).unwrap();
        assert_eq!(error.code, Some(21211));
        assert_eq!(
            error.message.as_deref(),
            Some("The 'To' number +1555 is not a valid phone number.")
        );
    }

    #[test]
    fn invalid_json_is_a_transport_error() {
        assert!(matches!(
            decode_create_message_json_response("{ not json }"),
            Err(TransportError::Json(_))
        ));
        assert!(matches!(
            decode_error_json_response("<html>"),
            Err(TransportError::Json(_))
        ));
    }
}
