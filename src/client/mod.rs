//! Client layer: orchestrates transport calls and normalizes responses.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::domain::{
    ApiKey, Classification, DndQuery, FALLBACK_MESSAGE, KnownStatus, NumberStatusQuery,
    SendInAppOtp, SendMessage, SendOtp, SendVoiceCall, SendVoiceOtp, SenderIdRequest,
    ValidationError, VerifyOtp, classify,
};
use crate::transport::{Endpoint, Method, WithApiKey};

const DEFAULT_BASE_URL: &str = "https://api.ng.termii.com/api/";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
type BoxError = Box<dyn StdError + Send + Sync>;

/// A received response. The status is kept even when reading the body fails.
#[derive(Debug)]
struct HttpResponse {
    status: u16,
    body: Result<String, BoxError>,
}

trait HttpTransport: Send + Sync {
    fn get<'a>(&'a self, url: Url) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;

    fn post_json<'a>(
        &'a self,
        url: Url,
        body: Value,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(&'a self, url: Url) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let response = self.client.get(url).send().await?;
            Ok(read_response(response).await)
        })
    }

    fn post_json<'a>(
        &'a self,
        url: Url,
        body: Value,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let response = self.client.post(url).json(&body).send().await?;
            Ok(read_response(response).await)
        })
    }
}

async fn read_response(response: reqwest::Response) -> HttpResponse {
    let status = response.status().as_u16();
    let body = response.text().await.map_err(BoxError::from);
    HttpResponse { status, body }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Coarse category of a [`TermiiError`], for branching without matching on messages.
pub enum ErrorKind {
    /// Termii answered with a documented non-200 status.
    RecognizedStatus,
    /// Termii answered with a status outside the documented set.
    UnrecognizedStatus,
    /// No response was received.
    Transport,
    /// The configured base URL could not be combined with a route.
    InvalidUrl,
    /// A domain constructor rejected a value.
    Validation,
    /// A request body could not be serialized.
    Encode,
    /// The underlying HTTP client could not be configured.
    Build,
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TermiiClient`].
///
/// For the three HTTP outcomes (`Status`, `UnrecognizedStatus`, `Transport`) the
/// `Display` text is the fixed human-readable message for that status.
pub enum TermiiError {
    /// Termii returned one of its documented failure statuses.
    #[error("{}", .kind.message())]
    Status {
        status: u16,
        kind: KnownStatus,
        body: Option<String>,
    },

    /// Termii returned a status this crate has no explanation for (including 5xx).
    #[error("{}", FALLBACK_MESSAGE)]
    UnrecognizedStatus { status: u16, body: Option<String> },

    /// HTTP client / transport failure (DNS, TLS, connect, timeouts, etc).
    #[error("{}", FALLBACK_MESSAGE)]
    Transport(#[source] BoxError),

    /// The base URL and route did not form a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A request body could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The HTTP client rejected the builder settings (for example a malformed user-agent).
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

impl TermiiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Status { .. } => ErrorKind::RecognizedStatus,
            Self::UnrecognizedStatus { .. } => ErrorKind::UnrecognizedStatus,
            Self::Transport(_) => ErrorKind::Transport,
            Self::InvalidUrl(_) => ErrorKind::InvalidUrl,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Encode(_) => ErrorKind::Encode,
            Self::Build(_) => ErrorKind::Build,
        }
    }

    /// HTTP status returned by Termii, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::UnrecognizedStatus { status, .. } => Some(*status),
            Self::Transport(_)
            | Self::InvalidUrl(_)
            | Self::Validation(_)
            | Self::Encode(_)
            | Self::Build(_) => None,
        }
    }

    /// Status classification for errors that came out of an HTTP exchange.
    pub fn classification(&self) -> Option<Classification> {
        match self {
            Self::Status { status, .. } | Self::UnrecognizedStatus { status, .. } => {
                Some(classify(Some(*status)))
            }
            Self::Transport(_) => Some(classify(None)),
            Self::InvalidUrl(_) | Self::Validation(_) | Self::Encode(_) | Self::Build(_) => None,
        }
    }

    /// Response body of a failed request, when Termii sent a non-blank one.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } | Self::UnrecognizedStatus { body, .. } => body.as_deref(),
            Self::Transport(_)
            | Self::InvalidUrl(_)
            | Self::Validation(_)
            | Self::Encode(_)
            | Self::Build(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`TermiiClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct TermiiClientBuilder {
    api_key: ApiKey,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl TermiiClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL (default `https://api.ng.termii.com/api/`).
    ///
    /// Routes are appended to it, so a missing trailing `/` is added.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
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

    /// Build a [`TermiiClient`].
    pub fn build(self) -> Result<TermiiClient, TermiiError> {
        let base_url = normalize_base_url(self.base_url);
        Url::parse(&base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder.build().map_err(TermiiError::Build)?;

        Ok(TermiiClient {
            api_key: self.api_key,
            base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn normalize_base_url(mut base_url: String) -> String {
    if !base_url.ends_with('/') {
        base_url.push('/');
    }
    base_url
}

#[derive(Clone)]
/// High-level Termii client.
///
/// One method per Termii endpoint. Reads are sent as `GET` with `api_key` in the
/// query string; writes are sent as `POST` with `api_key` in a JSON body.
///
/// Every method resolves to the decoded response body when Termii answers
/// `200`, and to a [`TermiiError`] otherwise. Successful bodies are returned
/// untyped; a `200` body may still describe an application-level failure.
pub struct TermiiClient {
    api_key: ApiKey,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl TermiiClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`TermiiClient::builder`].
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> TermiiClientBuilder {
        TermiiClientBuilder::new(api_key)
    }

    /// Account balance (`GET get-balance`).
    pub async fn balance(&self) -> Result<Value, TermiiError> {
        self.get(Endpoint::Balance, crate::transport::encode_balance_query())
            .await
    }

    /// Inbox of sent messages (`GET sms/inbox`).
    pub async fn history(&self) -> Result<Value, TermiiError> {
        self.get(Endpoint::History, crate::transport::encode_history_query())
            .await
    }

    /// Number insight: network and reachability of a phone number
    /// (`GET insight/number/query`).
    pub async fn status(&self, request: &NumberStatusQuery) -> Result<Value, TermiiError> {
        self.get(
            Endpoint::NumberStatus,
            crate::transport::encode_number_status_query(request),
        )
        .await
    }

    /// Check whether a number is on the DND registry (`GET check/dnd`).
    pub async fn search(&self, request: &DndQuery) -> Result<Value, TermiiError> {
        self.get(Endpoint::Dnd, crate::transport::encode_dnd_query(request))
            .await
    }

    /// Sender ids registered on the account (`GET sender-id`).
    pub async fn all_sender_ids(&self) -> Result<Value, TermiiError> {
        self.get(
            Endpoint::SenderIds,
            crate::transport::encode_sender_ids_query(),
        )
        .await
    }

    /// Request a new sender id (`POST sender-id/request`).
    pub async fn submit_sender_id(&self, request: &SenderIdRequest) -> Result<Value, TermiiError> {
        self.post(
            Endpoint::SubmitSenderId,
            crate::transport::encode_submit_sender_id_body(request),
        )
        .await
    }

    /// Send a message (`POST sms/send`).
    ///
    /// Media is only sent on [`Channel::Whatsapp`](crate::Channel::Whatsapp); on any
    /// other channel it is dropped and the message goes out as plain text.
    pub async fn send_message(&self, request: &SendMessage) -> Result<Value, TermiiError> {
        if request.attached_media().is_some() && request.deliverable_media().is_none() {
            tracing::debug!(
                channel = ?request.selected_channel(),
                "media is only sent on the whatsapp channel; dropping it"
            );
        }
        self.post(
            Endpoint::SendMessage,
            crate::transport::encode_send_message_body(request),
        )
        .await
    }

    /// Send an OTP embedded in a text message (`POST sms/otp/send`).
    pub async fn send_otp(&self, request: &SendOtp) -> Result<Value, TermiiError> {
        self.post(
            Endpoint::SendOtp,
            crate::transport::encode_send_otp_body(request),
        )
        .await
    }

    /// Deliver a generated OTP through a voice call (`POST sms/otp/send/voice`).
    pub async fn send_voice_otp(&self, request: &SendVoiceOtp) -> Result<Value, TermiiError> {
        self.post(
            Endpoint::SendVoiceOtp,
            crate::transport::encode_send_voice_otp_body(request),
        )
        .await
    }

    /// Place a voice call that reads out a caller-chosen code (`POST sms/otp/call`).
    pub async fn send_voice_call(&self, request: &SendVoiceCall) -> Result<Value, TermiiError> {
        self.post(
            Endpoint::SendVoiceCall,
            crate::transport::encode_send_voice_call_body(request),
        )
        .await
    }

    /// Verify a PIN previously issued by one of the OTP endpoints (`POST sms/otp/verify`).
    pub async fn verify_otp(&self, request: &VerifyOtp) -> Result<Value, TermiiError> {
        self.post(
            Endpoint::VerifyOtp,
            crate::transport::encode_verify_otp_body(request),
        )
        .await
    }

    /// Generate a PIN and return it to the caller instead of delivering it
    /// (`POST sms/otp/generate`).
    pub async fn send_in_app_otp(&self, request: &SendInAppOtp) -> Result<Value, TermiiError> {
        self.post(
            Endpoint::SendInAppOtp,
            crate::transport::encode_send_in_app_otp_body(request),
        )
        .await
    }

    fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, TermiiError> {
        Url::parse(&format!("{}{}", self.base_url, endpoint.route())).map_err(|err| {
            tracing::error!(route = endpoint.route(), "invalid URL constructed: {}", err);
            TermiiError::InvalidUrl(err)
        })
    }

    async fn get(
        &self,
        endpoint: Endpoint,
        params: Vec<(String, String)>,
    ) -> Result<Value, TermiiError> {
        debug_assert_eq!(endpoint.method(), Method::Get);

        let mut url = self.endpoint_url(endpoint)?;
        url.query_pairs_mut()
            .append_pair(ApiKey::FIELD, self.api_key.as_str())
            .extend_pairs(params);

        tracing::debug!(route = endpoint.route(), "GET");
        let outcome = self.http.get(url).await;
        normalize(endpoint, outcome)
    }

    async fn post<B: Serialize>(&self, endpoint: Endpoint, body: B) -> Result<Value, TermiiError> {
        debug_assert_eq!(endpoint.method(), Method::Post);

        let url = self.endpoint_url(endpoint)?;
        let body = serde_json::to_value(WithApiKey {
            api_key: self.api_key.as_str(),
            body,
        })
        .map_err(TermiiError::Encode)?;

        tracing::debug!(route = endpoint.route(), "POST");
        let outcome = self.http.post_json(url, body).await;
        normalize(endpoint, outcome)
    }
}

fn normalize(
    endpoint: Endpoint,
    outcome: Result<HttpResponse, BoxError>,
) -> Result<Value, TermiiError> {
    let response = match outcome {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(route = endpoint.route(), error = %err, "no response from Termii");
            return Err(TermiiError::Transport(err));
        }
    };

    let status = response.status;
    let classification = classify(Some(status));
    if classification.success {
        let body = response.body.map_err(|err| {
            tracing::warn!(route = endpoint.route(), error = %err, "failed to read response body");
            TermiiError::Transport(err)
        })?;
        return Ok(crate::transport::decode_payload(&body));
    }

    tracing::warn!(
        route = endpoint.route(),
        status,
        "{}",
        classification.message
    );

    let body = match response.body {
        Ok(body) if !body.trim().is_empty() => Some(body),
        Ok(_) => None,
        Err(err) => {
            tracing::debug!(route = endpoint.route(), status, error = %err, "error body unreadable");
            None
        }
    };

    match KnownStatus::from_code(status) {
        Some(kind) => Err(TermiiError::Status { status, kind, body }),
        None => Err(TermiiError::UnrecognizedStatus { status, body }),
    }
}
