//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{MessageConfirmation, SendRequest, SenderNumber};

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";

/// Boxed future used by the object-safe transport and provider traits.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        auth: &'a TwilioAuth,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        auth: &'a TwilioAuth,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .basic_auth(auth.account_sid(), Some(auth.auth_token()))
                .form(&params)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Twilio account credentials sent as HTTP basic auth on every call.
///
/// Values are taken as-is; an empty or wrong credential surfaces as an
/// authentication failure from the API, not as a local error.
pub struct TwilioAuth {
    account_sid: String,
    auth_token: String,
}

impl TwilioAuth {
    /// Create credentials from an account SID and auth token.
    pub fn new(account_sid: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
        }
    }

    /// The account SID (basic-auth username and URL path segment).
    pub fn account_sid(&self) -> &str {
        &self.account_sid
    }

    /// The auth token (basic-auth password).
    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TwilioClient`].
///
/// This error preserves:
/// - HTTP-level failures (transport failures or non-2xx status with an opaque body),
/// - API-level failures (non-2xx status with a decodable `{code, message}` body),
/// - parse failures for accepted responses.
pub enum ProviderError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status whose body was not a Twilio error document.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Twilio rejected the request with an error code and text.
    #[error("API error: {code:?} {message:?}")]
    Api {
        code: Option<i64>,
        message: Option<String>,
    },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),
}

/// Capability seam for sending one message.
///
/// [`TwilioClient`] is the production implementation; tests substitute doubles
/// that capture the request or fail on demand. All failures come back as
/// [`ProviderError`] values, never as panics.
pub trait MessageProvider: Send + Sync {
    /// Deliver one message, resolving to a confirmation or a terminal error.
    fn create_message<'a>(
        &'a self,
        request: &'a SendRequest,
    ) -> BoxFuture<'a, Result<MessageConfirmation, ProviderError>>;
}

#[derive(Debug, Clone)]
/// Builder for [`TwilioClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct TwilioClientBuilder {
    auth: TwilioAuth,
    from: SenderNumber,
    endpoint: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl TwilioClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(auth: TwilioAuth, from: SenderNumber) -> Self {
        Self {
            auth,
            from,
            endpoint: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the `Messages.json` endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`TwilioClient`].
    pub fn build(self) -> Result<TwilioClient, ProviderError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| ProviderError::Transport(Box::new(err)))?;

        let endpoint = self
            .endpoint
            .unwrap_or_else(|| messages_endpoint(&self.auth));

        Ok(TwilioClient {
            auth: self.auth,
            from: self.from,
            endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn messages_endpoint(auth: &TwilioAuth) -> String {
    format!(
        "{TWILIO_API_BASE}/Accounts/{}/Messages.json",
        auth.account_sid()
    )
}

#[derive(Clone)]
/// Twilio Messages API client.
///
/// This type orchestrates form encoding, the authenticated POST, and response
/// parsing. By default it posts to
/// `https://api.twilio.com/2010-04-01/Accounts/{sid}/Messages.json`.
pub struct TwilioClient {
    auth: TwilioAuth,
    from: SenderNumber,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl TwilioClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`TwilioClient::builder`].
    pub fn new(auth: TwilioAuth, from: SenderNumber) -> Self {
        let endpoint = messages_endpoint(&auth);
        Self {
            auth,
            from,
            endpoint,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(auth: TwilioAuth, from: SenderNumber) -> TwilioClientBuilder {
        TwilioClientBuilder::new(auth, from)
    }

    /// The configured sender value used as `From` on every request.
    pub fn from_number(&self) -> &SenderNumber {
        &self.from
    }

    /// Send one message through Twilio.
    ///
    /// Errors:
    /// - [`ProviderError::Transport`] when the POST itself fails,
    /// - [`ProviderError::Api`] when Twilio returns an error document,
    /// - [`ProviderError::HttpStatus`] for other non-2xx responses,
    /// - [`ProviderError::Parse`] when an accepted response is not valid JSON.
    pub async fn send_message(
        &self,
        request: &SendRequest,
    ) -> Result<MessageConfirmation, ProviderError> {
        let params = crate::transport::encode_create_message_form(request, &self.from);

        let response = self
            .http
            .post_form(&self.endpoint, &self.auth, params)
            .await
            .map_err(ProviderError::Transport)?;

        if !(200..=299).contains(&response.status) {
            // Twilio error documents are JSON `{code, message, ...}`; anything
            // else (HTML error pages, empty bodies) is surfaced as-is.
            if let Ok(error) = crate::transport::decode_error_json_response(&response.body) {
                if error.code.is_some() || error.message.is_some() {
                    return Err(ProviderError::Api {
                        code: error.code,
                        message: error.message,
                    });
                }
            }
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(ProviderError::HttpStatus {
                status: response.status,
                body,
            });
        }

        crate::transport::decode_create_message_json_response(&response.body)
            .map_err(|err| ProviderError::Parse(Box::new(err)))
    }
}

impl MessageProvider for TwilioClient {
    fn create_message<'a>(
        &'a self,
        request: &'a SendRequest,
    ) -> BoxFuture<'a, Result<MessageConfirmation, ProviderError>> {
        Box::pin(self.send_message(request))
    }
}
